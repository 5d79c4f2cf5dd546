//! Application router component.
//!
//! The URL hash is the source of truth for the current folder:
//! - `#/` → root
//! - `#/?folderId=<id>` → that folder
//!
//! Every observed change (user clicks, back/forward, manual edits) is
//! forwarded to [`FolderManager::on_folder_changed`].
//!
//! [`FolderManager::on_folder_changed`]: crate::core::FolderManager::on_folder_changed

use leptos::ev;
use leptos::prelude::*;
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::FileManager;

#[component]
pub fn FolderRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let folder = RwSignal::new(ctx.manager.navigation_folder());

    // Listener is removed with the owning scope; same-folder hashes are ignored
    let source = ctx.manager.clone();
    let _ = use_event_listener(use_window(), ev::hashchange, move |_| {
        let next = source.navigation_folder();
        if folder.with_untracked(|current| *current != next) {
            folder.set(next);
        }
    });

    Effect::new(move |_| {
        let folder = folder.get();
        let manager = ctx.manager.clone();
        spawn_local(async move {
            manager.on_folder_changed(folder).await;
        });
    });

    view! { <FileManager /> }
}
