//! Hash-based routing for shareable folder locations.
//!
//! URL format: `#/` for the root, `#/?folderId=<id>` for any other folder.

use crate::config::FOLDER_QUERY_KEY;

use super::FolderId;

/// Folder location carried by the URL hash.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FolderRoute {
    /// Folder being browsed (`None` = root)
    pub folder: Option<FolderId>,
}

impl FolderRoute {
    pub fn new(folder: Option<FolderId>) -> Self {
        Self { folder }
    }

    /// Parse URL hash into a route.
    ///
    /// Unknown paths and query keys are ignored; an empty `folderId` means the root.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        let Some((_, query)) = path.split_once('?') else {
            return Self::default();
        };

        let folder = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == FOLDER_QUERY_KEY)
            .map(|(_, value)| {
                urlencoding::decode(value)
                    .map(|v| v.into_owned())
                    .unwrap_or_else(|_| value.to_string())
            })
            .filter(|value| !value.is_empty())
            .map(FolderId::new);

        Self { folder }
    }

    /// Convert route to URL hash.
    pub fn to_hash(&self) -> String {
        match &self.folder {
            None => "#/".to_string(),
            Some(id) => format!(
                "#/?{}={}",
                FOLDER_QUERY_KEY,
                urlencoding::encode(id.as_str())
            ),
        }
    }
}
