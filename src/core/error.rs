//! Error types for repository calls and the messages shown for them.
//!
//! - [`RepositoryError`] - Transport and HTTP failures from the item API
//! - [`ApiErrorBody`] - Structured payload of a rejected request
//! - [`Mutation`] - Maps a failed mutation to its single user-facing message

use serde::Deserialize;
use thiserror::Error;

use crate::config::messages;
use crate::models::FileFailure;

/// Structured body of a non-2xx API response.
///
/// Every field is optional on the wire; an unreadable body becomes the default.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable description
    #[serde(default)]
    pub desc: Option<String>,
    /// Machine-readable error code
    #[serde(default)]
    pub code: Option<String>,
    /// Per-file failures (uploads only)
    #[serde(default)]
    pub errors: Vec<FileFailure>,
}

/// Failure of a single repository operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// Request could not be built (bad body, bad header)
    #[error("failed to build request: {0}")]
    RequestBuild(String),
    /// Network request failed (CORS, offline, aborted)
    #[error("network error: {0}")]
    Network(String),
    /// Request timed out
    #[error("request timed out")]
    Timeout,
    /// Server answered with a non-2xx status
    #[error("HTTP error: {status}")]
    Http { status: u16, body: ApiErrorBody },
    /// Response body did not match the expected shape
    #[error("invalid response: {0}")]
    Decode(String),
}

impl RepositoryError {
    /// Server-supplied description, if one was sent and is non-empty.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Http { body, .. } => body.desc.as_deref().filter(|d| !d.is_empty()),
            _ => None,
        }
    }

    /// Per-file failures carried by the error payload.
    pub fn file_errors(&self) -> &[FileFailure] {
        match self {
            Self::Http { body, .. } => &body.errors,
            _ => &[],
        }
    }
}

/// Mutating operations, each with its own fallback message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutation {
    Create,
    Rename,
    Delete,
    Move,
    Upload,
}

impl Mutation {
    /// Message shown when the server gives no usable detail.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::Create => messages::CREATE_FAILED,
            Self::Rename => messages::RENAME_FAILED,
            Self::Delete => messages::DELETE_FAILED,
            Self::Move => messages::MOVE_FAILED,
            Self::Upload => messages::UPLOAD_FAILED,
        }
    }

    /// The one message surfaced to the user for a failed mutation.
    ///
    /// Uploads itemize per-file errors first; everything else prefers the
    /// server description over the fallback.
    pub fn failure_message(self, err: &RepositoryError) -> String {
        match self {
            Self::Upload => {
                let file_errors = err.file_errors();
                if !file_errors.is_empty() {
                    let lines = file_errors
                        .iter()
                        .map(|f| format!("{}: {}", f.filename, f.reason()))
                        .collect::<Vec<_>>()
                        .join("\n");
                    format!("Upload failed:\n{}", lines)
                } else if let Some(desc) = err.description() {
                    format!("Error: {}", desc)
                } else {
                    self.fallback_message().to_string()
                }
            }
            _ => err
                .description()
                .map(str::to_string)
                .unwrap_or_else(|| self.fallback_message().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(body: ApiErrorBody) -> RepositoryError {
        RepositoryError::Http { status: 400, body }
    }

    #[test]
    fn test_description_prefers_server_text() {
        let err = http(ApiErrorBody {
            desc: Some("Name already taken".into()),
            ..Default::default()
        });
        assert_eq!(Mutation::Create.failure_message(&err), "Name already taken");
        assert_eq!(Mutation::Rename.failure_message(&err), "Name already taken");
    }

    #[test]
    fn test_fallback_per_operation() {
        let err = RepositoryError::Timeout;
        assert_eq!(Mutation::Create.failure_message(&err), "Could not create folder");
        assert_eq!(Mutation::Rename.failure_message(&err), "Could not rename item");
        assert_eq!(Mutation::Delete.failure_message(&err), "Could not delete item");
        assert_eq!(Mutation::Move.failure_message(&err), "Could not move item");
        assert_eq!(Mutation::Upload.failure_message(&err), "Error uploading files");
    }

    #[test]
    fn test_empty_description_falls_back() {
        let err = http(ApiErrorBody {
            desc: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(Mutation::Delete.failure_message(&err), "Could not delete item");
    }

    #[test]
    fn test_upload_itemizes_file_errors() {
        let err = http(ApiErrorBody {
            desc: Some("ignored".into()),
            code: None,
            errors: vec![
                FileFailure {
                    filename: "a.bin".into(),
                    message: Some("too large".into()),
                    error: None,
                },
                FileFailure {
                    filename: "b.exe".into(),
                    message: None,
                    error: Some("type not allowed".into()),
                },
            ],
        });
        assert_eq!(
            Mutation::Upload.failure_message(&err),
            "Upload failed:\na.bin: too large\nb.exe: type not allowed"
        );
    }

    #[test]
    fn test_upload_uses_description_without_file_errors() {
        let err = http(ApiErrorBody {
            desc: Some("Quota exceeded".into()),
            ..Default::default()
        });
        assert_eq!(Mutation::Upload.failure_message(&err), "Error: Quota exceeded");
    }

    #[test]
    fn test_error_body_parsing() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{"desc": "bad", "errors": [{"filename": "x.txt", "message": "nope"}]}"#,
        )
        .unwrap();
        assert_eq!(body.desc.as_deref(), Some("bad"));
        assert_eq!(body.errors.len(), 1);
        assert_eq!(body.errors[0].filename, "x.txt");

        let empty: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ApiErrorBody::default());
    }
}
