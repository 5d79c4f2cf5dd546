//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing (main entry point)
//! - [`file_manager`] - Folder browser, actions and move picker
//! - [`modal`] - Dialog host for create/rename/delete/move
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod file_manager;
pub mod icons;
pub mod modal;
pub mod router;

pub use file_manager::FileManager;
pub use modal::Modal;
pub use router::FolderRouter;
