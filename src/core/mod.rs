//! Core navigation and mutation logic for the file manager.
//!
//! This module provides:
//! - [`FolderManager`] - the controller behind the file manager view
//! - [`FolderBrowser`] - a reusable listing + breadcrumb context
//! - [`Dialog`] and [`Workflow`] - dialog capability and mutation workflows
//! - [`repository`], [`navigation`], [`notify`] - collaborator traits
//! - [`HttpRepository`], [`HashNavigation`], [`BrowserNotifier`] - browser implementations

mod browser;
mod controller;
mod dialog;
pub mod error;
mod http;
pub mod navigation;
pub mod notify;
pub mod repository;
pub mod sort;
#[cfg(test)]
pub mod testing;
mod workflow;

pub use browser::FolderBrowser;
pub use controller::FolderManager;
pub use dialog::Dialog;
pub use http::HttpRepository;
pub use navigation::HashNavigation;
pub use notify::BrowserNotifier;
pub use workflow::Workflow;
