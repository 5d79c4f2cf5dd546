//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "Files";

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL of the item REST API.
pub const API_BASE_URL: &str = "/api/items";

/// Timeout in milliseconds for listing, path and JSON mutation requests.
pub const FETCH_TIMEOUT_MS: u32 = 10000;

/// Upload time limit. Uploads are not raced against a timer: a large
/// transfer can outlast any fixed limit and still be stored by the server.
pub const UPLOAD_TIMEOUT_MS: Option<u32> = None;

/// Response `code` marking an upload where only some files were stored.
pub const PARTIAL_SUCCESS_CODE: &str = "PARTIAL_SUCCESS";

// =============================================================================
// Navigation
// =============================================================================

/// Hash query key carrying the current folder id.
pub const FOLDER_QUERY_KEY: &str = "folderId";

/// Folder name shown when browsing the root.
pub const ROOT_LABEL: &str = "Root";

/// Folder name shown when the breadcrumb could not be resolved.
pub const UNKNOWN_LABEL: &str = "Unknown";

// =============================================================================
// Dialogs
// =============================================================================

/// Dialog titles and confirm labels for each workflow.
pub mod dialog {
    pub const CREATE_TITLE: &str = "Create New Folder";
    pub const CREATE_LABEL: &str = "Create";
    /// Pre-filled name for a new folder.
    pub const DEFAULT_FOLDER_NAME: &str = "New Folder";

    pub const RENAME_FOLDER_TITLE: &str = "Rename Folder";
    pub const RENAME_FILE_TITLE: &str = "Rename File";
    pub const RENAME_LABEL: &str = "Save";

    pub const DELETE_FOLDER_TITLE: &str = "Delete Folder";
    pub const DELETE_FILE_TITLE: &str = "Delete File";
    pub const DELETE_LABEL: &str = "Delete";

    pub const MOVE_LABEL: &str = "Move Here";

    pub const DEFAULT_CONFIRM_LABEL: &str = "Confirm";
    pub const CANCEL_LABEL: &str = "Cancel";
}

// =============================================================================
// Error Messages
// =============================================================================

/// Fallback messages when the server gives no description.
pub mod messages {
    pub const CREATE_FAILED: &str = "Could not create folder";
    pub const RENAME_FAILED: &str = "Could not rename item";
    pub const DELETE_FAILED: &str = "Could not delete item";
    pub const MOVE_FAILED: &str = "Could not move item";
    pub const UPLOAD_FAILED: &str = "Error uploading files";
    pub const MOVE_INTO_SELF: &str = "Cannot move a folder into itself";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
