//! Folder browser: one navigable listing + breadcrumb context.
//!
//! The main view and the move picker are two instances of [`FolderBrowser`],
//! differing only in their [`ListingScope`]. Their signals are never shared.

use leptos::logging::{error, log};
use leptos::prelude::*;

use crate::config::{ROOT_LABEL, UNKNOWN_LABEL};
use crate::models::{FolderId, Item, ItemId};

use super::repository::ItemRepository;
use super::sort::sort_items;

/// Which children of a folder a browser shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListingScope {
    /// Every file and folder
    #[default]
    All,
    /// Folders only, never the item being moved
    MoveDestinations { source: ItemId },
}

impl ListingScope {
    pub fn admits(&self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::MoveDestinations { source } => item.is_folder && item.id != *source,
        }
    }
}

/// Listing and breadcrumb state for one navigation context.
///
/// Loads are not cancelled when superseded; instead each load takes a
/// sequence number and only the latest one may write its result.
#[derive(Clone, Copy)]
pub struct FolderBrowser {
    /// Folder being shown (`None` = root)
    pub folder_id: RwSignal<Option<FolderId>>,
    /// Visible children, folders first then by name
    pub items: RwSignal<Vec<Item>>,
    /// Ancestors root first, ending with the current folder
    pub breadcrumb: RwSignal<Vec<Item>>,
    pub folder_name: RwSignal<String>,
    pub loading: RwSignal<bool>,
    scope: StoredValue<ListingScope>,
    listing_seq: StoredValue<u64>,
    path_seq: StoredValue<u64>,
}

impl FolderBrowser {
    pub fn new(scope: ListingScope) -> Self {
        Self {
            folder_id: RwSignal::new(None),
            items: RwSignal::new(Vec::new()),
            breadcrumb: RwSignal::new(Vec::new()),
            folder_name: RwSignal::new(ROOT_LABEL.to_string()),
            loading: RwSignal::new(false),
            scope: StoredValue::new(scope),
            listing_seq: StoredValue::new(0),
            path_seq: StoredValue::new(0),
        }
    }

    /// Current folder id without tracking.
    pub fn current(&self) -> Option<FolderId> {
        self.folder_id.get_untracked()
    }

    pub fn set_scope(&self, scope: ListingScope) {
        self.scope.set_value(scope);
    }

    /// Back to an empty root context. In-flight loads are invalidated.
    pub fn reset(&self) {
        self.listing_seq.update_value(|seq| *seq += 1);
        self.path_seq.update_value(|seq| *seq += 1);
        self.folder_id.set(None);
        self.items.set(Vec::new());
        self.breadcrumb.set(Vec::new());
        self.folder_name.set(ROOT_LABEL.to_string());
        self.loading.set(false);
    }

    /// Switch to `folder` and load its listing and breadcrumb concurrently.
    pub async fn show<R: ItemRepository>(&self, repo: &R, folder: Option<FolderId>) {
        self.folder_id.set(folder.clone());
        futures::join!(self.load_items(repo, folder), self.load_breadcrumb(repo));
    }

    /// Load the children of `parent` into [`items`](Self::items).
    ///
    /// Items whose parent differs from the request are dropped, the rest are
    /// filtered by scope and sorted. On failure the previous listing stays.
    pub async fn load_items<R: ItemRepository>(&self, repo: &R, parent: Option<FolderId>) {
        let seq = Self::next_seq(self.listing_seq);
        self.loading.set(true);

        let result = repo.list_children(parent.as_ref()).await;
        if self.listing_seq.get_value() != seq {
            log!("Discarding superseded listing for {:?}", parent);
            return;
        }

        match result {
            Ok(items) => {
                let scope = self.scope.get_value();
                let mut visible: Vec<Item> = items
                    .into_iter()
                    .filter(|item| item.is_child_of(parent.as_ref()) && scope.admits(item))
                    .collect();
                sort_items(&mut visible);

                self.items.set(visible);
                self.loading.set(false);
                if parent.is_none() {
                    self.folder_name.set(ROOT_LABEL.to_string());
                }
            }
            Err(err) => {
                error!("Error loading items: {}", err);
                self.loading.set(false);
            }
        }
    }

    /// Resolve the breadcrumb and folder name for the current folder.
    pub async fn load_breadcrumb<R: ItemRepository>(&self, repo: &R) {
        let seq = Self::next_seq(self.path_seq);
        let Some(folder) = self.current() else {
            self.breadcrumb.set(Vec::new());
            self.folder_name.set(ROOT_LABEL.to_string());
            return;
        };

        let result = repo.get_path(&folder).await;
        if self.path_seq.get_value() != seq {
            log!("Discarding superseded breadcrumb for {}", folder);
            return;
        }

        match result {
            Ok(path) => {
                let name = path
                    .iter()
                    .find(|item| item.id == folder)
                    .or_else(|| path.last())
                    .map(|item| item.name.clone());
                if let Some(name) = name {
                    self.folder_name.set(name);
                }
                self.breadcrumb.set(path);
            }
            Err(err) => {
                error!("Error loading breadcrumb for {}: {}", folder, err);
                self.breadcrumb.set(Vec::new());
                self.folder_name.set(UNKNOWN_LABEL.to_string());
            }
        }
    }

    fn next_seq(counter: StoredValue<u64>) -> u64 {
        counter.update_value(|seq| *seq += 1);
        counter.get_value()
    }
}
