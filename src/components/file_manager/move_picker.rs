//! Destination picker shown in the move dialog.
//!
//! Browses the picker's own [`FolderBrowser`](crate::core::FolderBrowser);
//! the main view stays where it is. Confirming the dialog moves the item into
//! whichever folder the picker is showing.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use super::Breadcrumb;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::FolderId;

stylance::import_crate_style!(css, "src/components/file_manager/move_picker.module.css");

#[component]
pub fn MovePicker() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let manager = ctx.manager;
    let picker = manager.picker;

    let go_to = Callback::new(move |folder: Option<FolderId>| {
        let manager = manager.clone();
        spawn_local(async move {
            manager.navigate_move_folder(folder).await;
        });
    });

    view! {
        <div class=css::picker>
            <Breadcrumb browser=picker on_select=go_to />
            <ul class=css::folderList>
                <For
                    each=move || picker.items.get()
                    key=|folder| folder.id.clone()
                    children=move |folder| {
                        let id = folder.id.clone();
                        view! {
                            <li>
                                <button
                                    class=css::folder
                                    on:click=move |_| go_to.run(Some(id.clone()))
                                >
                                    <span class=css::icon><Icon icon=ic::FOLDER /></span>
                                    <span class=css::label>{folder.name}</span>
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
            <Show when=move || picker.loading.get()>
                <div class=css::status>"Loading..."</div>
            </Show>
            <Show when=move || picker.items.with(Vec::is_empty) && !picker.loading.get()>
                <div class=css::status>"No folders here"</div>
            </Show>
        </div>
    }
}
