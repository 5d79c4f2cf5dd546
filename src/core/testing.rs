//! In-memory collaborators for controller tests.

use std::cell::RefCell;
use std::collections::HashMap;

use futures::channel::oneshot;

use crate::models::{FolderId, Item, ItemId, UploadOutcome};

use super::error::RepositoryError;
use super::navigation::NavigationSource;
use super::notify::Notifier;
use super::repository::ItemRepository;

/// A repository call as the mock saw it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    List(Option<FolderId>),
    Path(ItemId),
    Create {
        name: String,
        parent: Option<FolderId>,
    },
    Rename {
        id: ItemId,
        name: String,
    },
    Delete(ItemId),
    Move {
        id: ItemId,
        parent: Option<FolderId>,
    },
    Upload {
        files: Vec<String>,
        parent: Option<FolderId>,
    },
}

type Reply<T> = Result<T, RepositoryError>;

/// Scripted repository that records every call.
///
/// Unscripted listings and paths answer with an empty list; unscripted
/// mutations succeed.
#[derive(Default)]
pub struct MockRepository {
    calls: RefCell<Vec<Call>>,
    listings: RefCell<HashMap<Option<FolderId>, Reply<Vec<Item>>>>,
    paths: RefCell<HashMap<ItemId, Reply<Vec<Item>>>>,
    held_listings: RefCell<HashMap<Option<FolderId>, oneshot::Receiver<()>>>,
    held_paths: RefCell<HashMap<ItemId, oneshot::Receiver<()>>>,
    mutation_error: RefCell<Option<RepositoryError>>,
    upload_reply: RefCell<Option<Reply<UploadOutcome>>>,
}

impl MockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| matches(c)).count()
    }

    pub fn list_count(&self) -> usize {
        self.count(|c| matches!(c, Call::List(_)))
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn set_listing(&self, parent: Option<FolderId>, items: Vec<Item>) {
        self.listings.borrow_mut().insert(parent, Ok(items));
    }

    pub fn fail_listing(&self, parent: Option<FolderId>, err: RepositoryError) {
        self.listings.borrow_mut().insert(parent, Err(err));
    }

    pub fn set_path(&self, id: ItemId, path: Vec<Item>) {
        self.paths.borrow_mut().insert(id, Ok(path));
    }

    pub fn fail_path(&self, id: ItemId, err: RepositoryError) {
        self.paths.borrow_mut().insert(id, Err(err));
    }

    /// Make the next listing of `parent` wait until the returned sender fires.
    pub fn hold_listing(&self, parent: Option<FolderId>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.held_listings.borrow_mut().insert(parent, rx);
        tx
    }

    /// Make the next path request for `id` wait until the returned sender fires.
    pub fn hold_path(&self, id: ItemId) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.held_paths.borrow_mut().insert(id, rx);
        tx
    }

    /// Make every following mutation fail with `err`.
    pub fn fail_mutations(&self, err: RepositoryError) {
        *self.mutation_error.borrow_mut() = Some(err);
    }

    pub fn set_upload_reply(&self, reply: Reply<UploadOutcome>) {
        *self.upload_reply.borrow_mut() = Some(reply);
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn mutation<T>(&self, ok: T) -> Reply<T> {
        match self.mutation_error.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(ok),
        }
    }
}

fn placeholder(id: &ItemId, name: &str, parent: Option<&FolderId>, is_folder: bool) -> Item {
    Item {
        id: id.clone(),
        parent_id: parent.cloned(),
        name: name.to_string(),
        is_folder,
        created_at: String::new(),
        modified_at: String::new(),
        size: None,
        mime_type: None,
        file_path: None,
    }
}

impl ItemRepository for MockRepository {
    type File = String;

    async fn list_children(&self, parent: Option<&FolderId>) -> Reply<Vec<Item>> {
        self.record(Call::List(parent.cloned()));
        let held = self.held_listings.borrow_mut().remove(&parent.cloned());
        if let Some(rx) = held {
            let _ = rx.await;
        }
        self.listings
            .borrow()
            .get(&parent.cloned())
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn get_path(&self, id: &ItemId) -> Reply<Vec<Item>> {
        self.record(Call::Path(id.clone()));
        let held = self.held_paths.borrow_mut().remove(id);
        if let Some(rx) = held {
            let _ = rx.await;
        }
        self.paths
            .borrow()
            .get(id)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn create_folder(&self, name: &str, parent: Option<&FolderId>) -> Reply<Item> {
        self.record(Call::Create {
            name: name.to_string(),
            parent: parent.cloned(),
        });
        self.mutation(placeholder(&ItemId::from("new"), name, parent, true))
    }

    async fn rename(&self, id: &ItemId, name: &str) -> Reply<Item> {
        self.record(Call::Rename {
            id: id.clone(),
            name: name.to_string(),
        });
        self.mutation(placeholder(id, name, None, false))
    }

    async fn delete(&self, id: &ItemId) -> Reply<()> {
        self.record(Call::Delete(id.clone()));
        self.mutation(())
    }

    async fn move_item(&self, id: &ItemId, new_parent: Option<&FolderId>) -> Reply<Item> {
        self.record(Call::Move {
            id: id.clone(),
            parent: new_parent.cloned(),
        });
        self.mutation(placeholder(id, "moved", new_parent, false))
    }

    async fn upload(&self, files: Vec<String>, parent: Option<&FolderId>) -> Reply<UploadOutcome> {
        self.record(Call::Upload {
            files,
            parent: parent.cloned(),
        });
        self.upload_reply
            .borrow()
            .clone()
            .unwrap_or_else(|| Ok(UploadOutcome::Complete(Vec::new())))
    }
}

/// Navigation source that records requests instead of touching the URL.
#[derive(Default)]
pub struct RecordingNavigator {
    pub current: RefCell<Option<FolderId>>,
    pub requests: RefCell<Vec<Option<FolderId>>>,
}

impl NavigationSource for RecordingNavigator {
    fn current_folder(&self) -> Option<FolderId> {
        self.current.borrow().clone()
    }

    fn navigate(&self, folder: Option<&FolderId>) {
        self.requests.borrow_mut().push(folder.cloned());
    }
}

/// Notifier that keeps every message.
#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: RefCell<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
