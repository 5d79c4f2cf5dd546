//! Folder browsing UI components.
//!
//! Components:
//! - [`FileManager`] - Toolbar, breadcrumb, item list and the dialog host
//! - [`Breadcrumb`] - Clickable ancestor chain starting at the root
//! - [`ItemList`] - Items of the current folder with per-item actions
//! - [`MovePicker`] - Folder browser shown inside the move dialog

mod breadcrumb;
#[allow(clippy::module_inception)]
mod file_manager;
mod item_list;
mod move_picker;

pub use breadcrumb::Breadcrumb;
pub use file_manager::FileManager;
pub use item_list::ItemList;
pub use move_picker::MovePicker;
