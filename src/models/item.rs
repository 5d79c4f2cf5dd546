//! Item model shared by listings, breadcrumbs and mutation results.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Identifiers
// =============================================================================

/// Opaque, stable identifier of a file or folder.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Identifier of a folder. `None` wherever an `Option<FolderId>` appears means the root.
pub type FolderId = ItemId;

// =============================================================================
// Item
// =============================================================================

/// A folder or a file stored in the remote repository.
///
/// Folders and files share one shape; `is_folder` is the discriminator.
/// Field names follow the REST payload (`folder`, `creation`, `modification`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    /// Containing folder (`None` for root-level items)
    #[serde(default)]
    pub parent_id: Option<FolderId>,
    pub name: String,
    #[serde(rename = "folder")]
    pub is_folder: bool,
    /// Creation timestamp, passed through unparsed
    #[serde(rename = "creation", default)]
    pub created_at: String,
    /// Modification timestamp, passed through unparsed
    #[serde(rename = "modification", default)]
    pub modified_at: String,
    /// Size in bytes (files only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Storage path on the server (files only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

impl Item {
    /// Check whether this item lives directly inside `parent` (`None` = root).
    pub fn is_child_of(&self, parent: Option<&FolderId>) -> bool {
        self.parent_id.as_ref() == parent
    }

    #[cfg(test)]
    pub fn folder(id: &str, name: &str, parent: Option<&str>) -> Self {
        Self {
            id: ItemId::from(id),
            parent_id: parent.map(ItemId::from),
            name: name.to_string(),
            is_folder: true,
            created_at: "2023-01-01".to_string(),
            modified_at: "2023-01-01".to_string(),
            size: None,
            mime_type: None,
            file_path: None,
        }
    }

    #[cfg(test)]
    pub fn file(id: &str, name: &str, parent: Option<&str>, size: u64) -> Self {
        Self {
            is_folder: false,
            size: Some(size),
            mime_type: Some("application/octet-stream".to_string()),
            ..Self::folder(id, name, parent)
        }
    }
}
