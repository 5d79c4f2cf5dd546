//! Folder view controller.
//!
//! [`FolderManager`] owns the main [`FolderBrowser`], the move picker, the
//! dialog and the active [`Workflow`]. It reacts to folder changes reported
//! by the navigation source and runs every mutation against the repository.
//!
//! Read failures are logged and leave the view usable. Mutation failures
//! clear the loading flag and raise exactly one notification.

use std::sync::Arc;

use leptos::logging::error;
use leptos::prelude::*;

use crate::config::messages;
use crate::models::{FolderId, Item};

use super::browser::{FolderBrowser, ListingScope};
use super::dialog::{Dialog, DialogEvent};
use super::error::{Mutation, RepositoryError};
use super::http::download_url;
use super::navigation::NavigationSource;
use super::notify::Notifier;
use super::repository::ItemRepository;
use super::workflow::Workflow;

/// Result of a download request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DownloadAction {
    /// The item was a folder; navigation was requested instead
    Navigate(FolderId),
    /// A file download was handed to the browser
    Fetch { url: String, filename: String },
}

/// Navigation and mutation state machine behind the file manager view.
pub struct FolderManager<R, N, A> {
    repo: Arc<R>,
    navigator: Arc<N>,
    notifier: Arc<A>,
    /// Main view: the folder selected by navigation state
    pub view: FolderBrowser,
    /// Destination picker, live only during a move
    pub picker: FolderBrowser,
    pub dialog: Dialog,
    pub workflow: RwSignal<Workflow>,
    pub is_dragging: RwSignal<bool>,
}

impl<R, N, A> Clone for FolderManager<R, N, A> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            navigator: Arc::clone(&self.navigator),
            notifier: Arc::clone(&self.notifier),
            view: self.view,
            picker: self.picker,
            dialog: self.dialog,
            workflow: self.workflow,
            is_dragging: self.is_dragging,
        }
    }
}

impl<R, N, A> FolderManager<R, N, A>
where
    R: ItemRepository,
    N: NavigationSource,
    A: Notifier,
{
    pub fn new(repo: R, navigator: N, notifier: A) -> Self {
        Self {
            repo: Arc::new(repo),
            navigator: Arc::new(navigator),
            notifier: Arc::new(notifier),
            view: FolderBrowser::new(ListingScope::All),
            picker: FolderBrowser::new(ListingScope::All),
            dialog: Dialog::new(),
            workflow: RwSignal::new(Workflow::Idle),
            is_dragging: RwSignal::new(false),
        }
    }

    #[cfg(test)]
    pub fn repository(&self) -> &R {
        &self.repo
    }

    #[cfg(test)]
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    #[cfg(test)]
    pub fn notifier(&self) -> &A {
        &self.notifier
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Folder shown by the main view (`None` = root).
    pub fn current_folder(&self) -> Option<FolderId> {
        self.view.current()
    }

    /// Folder currently selected by the navigation source. The router reads
    /// it on start and after every `hashchange`.
    pub fn navigation_folder(&self) -> Option<FolderId> {
        self.navigator.current_folder()
    }

    /// Reaction to a navigation-state change: reload listing and breadcrumb.
    pub async fn on_folder_changed(&self, folder: Option<FolderId>) {
        self.view.show(&*self.repo, folder).await;
    }

    pub async fn load_items(&self, parent: Option<FolderId>) {
        self.view.load_items(&*self.repo, parent).await;
    }

    /// Reload the listing of the folder the main view is showing.
    pub async fn reload(&self) {
        self.load_items(self.current_folder()).await;
    }

    /// Ask the navigation source to switch folders. View state follows
    /// once the change is observed.
    pub fn navigate_to_folder(&self, folder: Option<&FolderId>) {
        self.navigator.navigate(folder);
    }

    /// Folders navigate; files are handed to the browser's download mechanism.
    pub fn download_item(&self, item: &Item) -> DownloadAction {
        if item.is_folder {
            self.navigate_to_folder(Some(&item.id));
            return DownloadAction::Navigate(item.id.clone());
        }

        let url = download_url(&item.id);
        #[cfg(target_arch = "wasm32")]
        crate::utils::dom::trigger_download(&url, &item.name);
        DownloadAction::Fetch {
            url,
            filename: item.name.clone(),
        }
    }

    // =========================================================================
    // Dialog workflows
    // =========================================================================

    pub fn open_create_folder_dialog(&self) {
        self.begin(Workflow::Create);
    }

    pub fn open_rename_dialog(&self, item: Item) {
        self.begin(Workflow::Rename(item));
    }

    pub fn open_delete_dialog(&self, item: Item) {
        self.begin(Workflow::Delete(item));
    }

    /// Start a move: the picker restarts at the root, scoped to folders
    /// other than `item`.
    pub async fn open_move_dialog(&self, item: Item) {
        self.picker.reset();
        self.picker.set_scope(ListingScope::MoveDestinations {
            source: item.id.clone(),
        });
        self.begin(Workflow::Move(item));
        self.picker.show(&*self.repo, None).await;
    }

    /// Browse the picker to `folder`. The main view is untouched.
    pub async fn navigate_move_folder(&self, folder: Option<FolderId>) {
        if !self.workflow.with_untracked(Workflow::is_move) {
            return;
        }
        self.picker.show(&*self.repo, folder).await;
    }

    /// Confirm the dialog and run the active workflow.
    pub async fn confirm(&self) {
        let Some(DialogEvent::Confirmed(value)) = self.dialog.confirm() else {
            return;
        };
        let workflow = self.workflow.get_untracked();
        let destination = self.picker.current();
        let destination_path = self.picker.breadcrumb.get_untracked();
        self.end_workflow();

        match workflow {
            Workflow::Idle => {}
            Workflow::Create => self.create_folder(&value).await,
            Workflow::Rename(item) => self.rename_item(&item, &value).await,
            Workflow::Delete(item) => self.delete_item(&item).await,
            Workflow::Move(item) => self.move_item(&item, destination, &destination_path).await,
        }
    }

    pub fn cancel(&self) {
        self.dialog.cancel();
        self.end_workflow();
    }

    fn begin(&self, workflow: Workflow) {
        if let Some(config) = workflow.dialog_config() {
            self.dialog
                .open(&config.title, config.input, config.confirm_label);
        }
        self.workflow.set(workflow);
    }

    fn end_workflow(&self) {
        self.workflow.set(Workflow::Idle);
        self.picker.reset();
        self.picker.set_scope(ListingScope::All);
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Create a folder in the current folder. Empty names are ignored.
    pub async fn create_folder(&self, name: &str) {
        if name.is_empty() {
            return;
        }
        let parent = self.current_folder();
        self.view.loading.set(true);
        match self.repo.create_folder(name, parent.as_ref()).await {
            Ok(_) => self.reload().await,
            Err(err) => self.report_failure(Mutation::Create, &err),
        }
    }

    /// Rename `item`. Empty or unchanged names are ignored.
    pub async fn rename_item(&self, item: &Item, name: &str) {
        if name.is_empty() || name == item.name {
            return;
        }
        self.view.loading.set(true);
        match self.repo.rename(&item.id, name).await {
            Ok(_) => self.reload().await,
            Err(err) => self.report_failure(Mutation::Rename, &err),
        }
    }

    pub async fn delete_item(&self, item: &Item) {
        self.view.loading.set(true);
        match self.repo.delete(&item.id).await {
            Ok(()) => self.reload().await,
            Err(err) => self.report_failure(Mutation::Delete, &err),
        }
    }

    /// Move `item` to `destination`.
    ///
    /// Moving to the current parent is a no-op. Moving a folder into itself
    /// or below itself (per `destination_path`) is refused without a request.
    ///
    /// `destination_path` is the picker breadcrumb at confirm time. If its
    /// load has not finished or failed it may be stale or empty, and only the
    /// direct `destination == item` check applies. The picker never lists the
    /// source, so a descendant is not reachable by clicking either way.
    pub async fn move_item(
        &self,
        item: &Item,
        destination: Option<FolderId>,
        destination_path: &[Item],
    ) {
        if destination == item.parent_id {
            return;
        }
        let into_self = destination.as_ref() == Some(&item.id)
            || destination_path.iter().any(|ancestor| ancestor.id == item.id);
        if into_self {
            self.notifier.notify(messages::MOVE_INTO_SELF);
            return;
        }

        self.view.loading.set(true);
        match self.repo.move_item(&item.id, destination.as_ref()).await {
            Ok(_) => self.reload().await,
            Err(err) => self.report_failure(Mutation::Move, &err),
        }
    }

    // =========================================================================
    // Upload
    // =========================================================================

    /// Upload `files` into the current folder with one request.
    pub async fn upload_files(&self, files: Vec<R::File>) {
        let parent = self.current_folder();
        self.view.loading.set(true);
        match self.repo.upload(files, parent.as_ref()).await {
            Ok(outcome) => {
                self.reload().await;
                if let Some(summary) = outcome.partial_summary() {
                    self.notifier.notify(&summary);
                }
            }
            Err(err) => self.report_failure(Mutation::Upload, &err),
        }
    }

    /// Files chosen in the file picker. Nothing happens for an empty selection.
    pub async fn on_files_selected(&self, files: Vec<R::File>) {
        if !files.is_empty() {
            self.upload_files(files).await;
        }
    }

    pub fn drag_over(&self) {
        self.is_dragging.set(true);
    }

    pub fn drag_leave(&self) {
        self.is_dragging.set(false);
    }

    /// Files dropped on the view.
    pub async fn drop_files(&self, files: Vec<R::File>) {
        self.is_dragging.set(false);
        self.on_files_selected(files).await;
    }

    fn report_failure(&self, mutation: Mutation, err: &RepositoryError) {
        error!("{:?} failed: {}", mutation, err);
        self.view.loading.set(false);
        self.notifier.notify(&mutation.failure_message(err));
    }
}
