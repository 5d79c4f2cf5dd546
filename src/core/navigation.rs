//! Navigation state source.
//!
//! The current folder lives in the URL hash so locations are shareable and
//! the browser's back/forward buttons work. The controller never writes view
//! state when navigating; it asks the source to change and reacts to the
//! resulting `hashchange` (see [`FolderRouter`](crate::components::FolderRouter)).

use crate::models::{FolderId, FolderRoute};
use crate::utils::dom;

/// Owner of the "current folder" value.
pub trait NavigationSource {
    /// Folder currently selected by the navigation state (`None` = root).
    fn current_folder(&self) -> Option<FolderId>;

    /// Request a change of folder. The result arrives through observation.
    fn navigate(&self, folder: Option<&FolderId>);
}

/// Navigation backed by `window.location.hash`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HashNavigation;

impl HashNavigation {
    /// Route for the current URL hash.
    pub fn current_route() -> FolderRoute {
        FolderRoute::from_hash(&dom::get_hash())
    }
}

impl NavigationSource for HashNavigation {
    fn current_folder(&self) -> Option<FolderId> {
        Self::current_route().folder
    }

    fn navigate(&self, folder: Option<&FolderId>) {
        dom::set_hash(&FolderRoute::new(folder.cloned()).to_hash());
    }
}
