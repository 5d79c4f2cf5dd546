//! Item repository abstraction.
//!
//! The controller only talks to the store through [`ItemRepository`];
//! [`HttpRepository`](super::http::HttpRepository) is the browser
//! implementation, tests use an in-memory mock.

use crate::models::{FolderId, Item, ItemId, UploadOutcome};

use super::error::RepositoryError;

/// Asynchronous access to the remote file/folder store.
///
/// A `None` parent always means the root and must be forwarded as "no parent",
/// never as an explicit id.
#[allow(async_fn_in_trait)]
pub trait ItemRepository {
    /// Browser file handle accepted by [`upload`](Self::upload).
    type File;

    /// Children of `parent`. May return a superset; callers re-filter.
    async fn list_children(&self, parent: Option<&FolderId>) -> Result<Vec<Item>, RepositoryError>;

    /// Ancestors of `id` ordered root first, ending with the item itself.
    async fn get_path(&self, id: &ItemId) -> Result<Vec<Item>, RepositoryError>;

    async fn create_folder(
        &self,
        name: &str,
        parent: Option<&FolderId>,
    ) -> Result<Item, RepositoryError>;

    async fn rename(&self, id: &ItemId, name: &str) -> Result<Item, RepositoryError>;

    async fn delete(&self, id: &ItemId) -> Result<(), RepositoryError>;

    /// Re-parent `id`; `None` moves it to the root.
    async fn move_item(
        &self,
        id: &ItemId,
        new_parent: Option<&FolderId>,
    ) -> Result<Item, RepositoryError>;

    /// Store all `files` in `parent` with a single request.
    async fn upload(
        &self,
        files: Vec<Self::File>,
        parent: Option<&FolderId>,
    ) -> Result<UploadOutcome, RepositoryError>;
}
