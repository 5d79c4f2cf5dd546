//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Item`], [`ItemId`], [`FolderId`] - Files and folders in the remote store
//! - [`UploadOutcome`], [`FileFailure`] - Upload results
//! - [`FolderRoute`] - Hash-based folder navigation

mod item;
mod route;
mod upload;

pub use item::{FolderId, Item, ItemId};
pub use route::FolderRoute;
pub use upload::{FileFailure, UploadOutcome};
