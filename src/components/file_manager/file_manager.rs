//! Main file manager component.
//!
//! ## Layout
//!
//! - Toolbar: current folder name, New Folder, Upload
//! - Breadcrumb of the main view
//! - Item list, which doubles as the drop zone for uploads
//! - Modal host for every dialog workflow

use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use super::{Breadcrumb, ItemList, MovePicker};
use crate::app::AppContext;
use crate::components::Modal;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::core::Workflow;
use crate::models::FolderId;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/file_manager/file_manager.module.css");

#[component]
pub fn FileManager() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let manager = ctx.manager;
    let view_state = manager.view;
    let is_dragging = manager.is_dragging;
    let workflow = manager.workflow;
    let dialog = manager.dialog;

    let file_input = NodeRef::<leptos::html::Input>::new();

    // Toolbar
    let on_new_folder = {
        let manager = manager.clone();
        move |_: ev::MouseEvent| manager.open_create_folder_dialog()
    };
    let on_upload_click = move |_: ev::MouseEvent| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };
    let on_files_chosen = {
        let manager = manager.clone();
        move |_: ev::Event| {
            let Some(input) = file_input.get() else { return };
            let files = dom::take_input_files(&input);
            let manager = manager.clone();
            spawn_local(async move {
                manager.on_files_selected(files).await;
            });
        }
    };

    // Drop zone
    let on_drag_over = {
        let manager = manager.clone();
        move |ev: ev::DragEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            manager.drag_over();
        }
    };
    let on_drag_leave = {
        let manager = manager.clone();
        move |ev: ev::DragEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            manager.drag_leave();
        }
    };
    let on_drop = {
        let manager = manager.clone();
        move |ev: ev::DragEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            let files = dom::files_from_list(ev.data_transfer().and_then(|dt| dt.files()));
            let manager = manager.clone();
            spawn_local(async move {
                manager.drop_files(files).await;
            });
        }
    };

    let navigate = {
        let manager = manager.clone();
        Callback::new(move |folder: Option<FolderId>| manager.navigate_to_folder(folder.as_ref()))
    };

    let on_confirm = {
        let manager = manager.clone();
        Callback::new(move |_: ()| {
            let manager = manager.clone();
            spawn_local(async move {
                manager.confirm().await;
            });
        })
    };
    let on_cancel = Callback::new(move |_: ()| manager.cancel());

    view! {
        <div class=css::fileManager>
            <header class=css::toolbar>
                <h1 class=css::title>
                    <span class=css::titleIcon><Icon icon=ic::FOLDER /></span>
                    <span>{move || view_state.folder_name.get()}</span>
                </h1>
                <span class=css::appName>{APP_NAME}</span>
                <div class=css::toolbarActions>
                    <button class=css::toolbarButton on:click=on_new_folder>
                        <Icon icon=ic::NEW_FOLDER />
                        <span>"New Folder"</span>
                    </button>
                    <button class=css::toolbarButton on:click=on_upload_click>
                        <Icon icon=ic::UPLOAD />
                        <span>"Upload"</span>
                    </button>
                    <input
                        node_ref=file_input
                        type="file"
                        multiple=true
                        class=css::hiddenInput
                        on:change=on_files_chosen
                    />
                </div>
            </header>

            <Breadcrumb browser=view_state on_select=navigate />

            <div
                class=move || {
                    if is_dragging.get() {
                        format!("{} {}", css::dropZone, css::dropZoneActive)
                    } else {
                        css::dropZone.to_string()
                    }
                }
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <Show when=move || view_state.loading.get()>
                    <div class=css::loading>"Loading..."</div>
                </Show>
                <ItemList />
                <Show when=move || is_dragging.get()>
                    <div class=css::dropHint>"Drop files to upload"</div>
                </Show>
            </div>

            <Modal dialog=dialog on_confirm=on_confirm on_cancel=on_cancel>
                <Show when=move || workflow.with(Workflow::is_move)>
                    <MovePicker />
                </Show>
            </Modal>
        </div>
    }
}
