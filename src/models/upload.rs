//! Upload results reported by the repository.

use serde::{Deserialize, Serialize};

use super::Item;

/// A single file the server refused to store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFailure {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub message: Option<String>,
    /// Some servers report the reason under `error` instead of `message`
    #[serde(default)]
    pub error: Option<String>,
}

impl FileFailure {
    /// Human-readable reason, preferring `message` over `error`.
    pub fn reason(&self) -> &str {
        self.message
            .as_deref()
            .filter(|m| !m.is_empty())
            .or(self.error.as_deref())
            .unwrap_or("unknown error")
    }
}

/// Successful upload response.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadOutcome {
    /// Every file was stored
    Complete(Vec<Item>),
    /// Some files were stored, others rejected
    Partial {
        succeeded: Vec<Item>,
        failed: Vec<FileFailure>,
    },
}

impl UploadOutcome {
    /// Consolidated message for a partial upload, `None` when everything succeeded.
    pub fn partial_summary(&self) -> Option<String> {
        match self {
            Self::Complete(_) => None,
            Self::Partial { succeeded, failed } => Some(format!(
                "{} files uploaded, {} failed.",
                succeeded.len(),
                failed.len()
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_fallbacks() {
        let with_message = FileFailure {
            filename: "a.txt".into(),
            message: Some("too large".into()),
            error: Some("E_SIZE".into()),
        };
        let with_error = FileFailure {
            filename: "b.txt".into(),
            message: None,
            error: Some("E_TYPE".into()),
        };
        assert_eq!(with_message.reason(), "too large");
        assert_eq!(with_error.reason(), "E_TYPE");
        assert_eq!(FileFailure::default().reason(), "unknown error");
    }

    #[test]
    fn test_partial_summary() {
        let partial = UploadOutcome::Partial {
            succeeded: vec![Item::file("1", "a", None, 1), Item::file("2", "b", None, 1)],
            failed: vec![FileFailure::default()],
        };
        assert_eq!(
            partial.partial_summary().as_deref(),
            Some("2 files uploaded, 1 failed.")
        );
        assert_eq!(UploadOutcome::Complete(vec![]).partial_summary(), None);
    }
}
