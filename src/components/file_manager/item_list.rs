//! Item list component.
//!
//! One row per child of the current folder. Folders open on click, files
//! download; every row carries download, rename, move and delete actions.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::Item;
use crate::utils::{format_size, format_timestamp};

stylance::import_crate_style!(css, "src/components/file_manager/item_list.module.css");

/// Get icon for an item based on its kind and MIME type.
fn get_icon(item: &Item) -> IconData {
    if item.is_folder {
        return ic::FOLDER;
    }
    match item.mime_type.as_deref() {
        Some("application/pdf") => ic::FILE_PDF,
        Some(mime) if mime.starts_with("image/") => ic::FILE_IMAGE,
        Some(mime) if mime.starts_with("text/") => ic::FILE_TEXT,
        _ => ic::FILE,
    }
}

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let view_state = ctx.manager.view;

    view! {
        <div class=css::list role="grid" aria-label="Items">
            <div class=css::listHeader role="row">
                <span class=css::headerIcon></span>
                <span class=css::headerName>"Name"</span>
                <span class=css::headerDate>"Modified"</span>
                <span class=css::headerSize>"Size"</span>
                <span class=css::headerActions></span>
            </div>
            <For
                each=move || view_state.items.get()
                // Name and timestamp in the key so renamed rows re-render
                key=|item| (item.id.clone(), item.name.clone(), item.modified_at.clone())
                children=move |item| view! { <ItemRow item=item /> }
            />
            <Show when=move || {
                view_state.items.with(Vec::is_empty) && !view_state.loading.get()
            }>
                <div class=css::empty>"This folder is empty"</div>
            </Show>
        </div>
    }
}

#[component]
fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let manager = ctx.manager;

    let icon = get_icon(&item);
    let size = if item.is_folder {
        String::new()
    } else {
        format_size(item.size)
    };
    let modified = if item.modified_at.is_empty() {
        format_timestamp(&item.created_at).to_string()
    } else {
        format_timestamp(&item.modified_at).to_string()
    };
    let name_class = if item.is_folder {
        format!("{} {}", css::name, css::nameFolder)
    } else {
        css::name.to_string()
    };
    let aria_label = if item.is_folder {
        format!("Folder: {}", item.name)
    } else {
        format!("File: {}", item.name)
    };

    let on_open = {
        let manager = manager.clone();
        let item = item.clone();
        move |_: leptos::ev::MouseEvent| {
            manager.download_item(&item);
        }
    };
    let on_download = on_open.clone();
    let on_rename = {
        let manager = manager.clone();
        let item = item.clone();
        move |_: leptos::ev::MouseEvent| manager.open_rename_dialog(item.clone())
    };
    let on_move = {
        let manager = manager.clone();
        let item = item.clone();
        move |_: leptos::ev::MouseEvent| {
            let manager = manager.clone();
            let item = item.clone();
            spawn_local(async move {
                manager.open_move_dialog(item).await;
            });
        }
    };
    let on_delete = {
        let item = item.clone();
        move |_: leptos::ev::MouseEvent| manager.open_delete_dialog(item.clone())
    };

    view! {
        <div class=css::listItem role="row" aria-label=aria_label>
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            <button class=name_class on:click=on_open>{item.name.clone()}</button>
            <span class=css::itemDate>{modified}</span>
            <span class=css::itemSize>{size}</span>
            <span class=css::actions>
                <button class=css::action title="Download" on:click=on_download>
                    <Icon icon=ic::DOWNLOAD />
                </button>
                <button class=css::action title="Rename" on:click=on_rename>
                    <Icon icon=ic::EDIT />
                </button>
                <button class=css::action title="Move" on:click=on_move>
                    <Icon icon=ic::MOVE />
                </button>
                <button
                    class=format!("{} {}", css::action, css::actionDanger)
                    title="Delete"
                    on:click=on_delete
                >
                    <Icon icon=ic::DELETE />
                </button>
            </span>
        </div>
    }
}
