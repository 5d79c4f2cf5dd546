//! Utility modules for DOM access and display formatting.
//!
//! Provides:
//! - [`dom`] - Hash navigation, alerts, anchor downloads, file inputs
//! - [`format_size`], [`format_timestamp`] - Display formatting

pub mod dom;
mod format;

pub use format::{format_size, format_timestamp};
