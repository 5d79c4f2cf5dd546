//! Breadcrumb component.
//!
//! Renders a root entry followed by the browser's ancestor chain. The folder
//! being shown is rendered but not clickable.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::ROOT_LABEL;
use crate::core::FolderBrowser;
use crate::models::FolderId;

stylance::import_crate_style!(css, "src/components/file_manager/breadcrumb.module.css");

/// Breadcrumb for either the main view or the move picker.
#[component]
pub fn Breadcrumb(
    browser: FolderBrowser,
    #[prop(into)] on_select: Callback<Option<FolderId>>,
) -> impl IntoView {
    view! {
        <nav class=css::breadcrumb aria-label="Breadcrumb">
            <Segment
                icon=ic::HOME
                label=ROOT_LABEL.to_string()
                current=Signal::derive(move || browser.folder_id.with(Option::is_none))
                on_click=move || on_select.run(None)
            />
            {move || {
                let current = browser.folder_id.get();
                browser
                    .breadcrumb
                    .get()
                    .into_iter()
                    .map(|folder| {
                        let is_current = current.as_ref() == Some(&folder.id);
                        let id = folder.id.clone();
                        view! {
                            <span class=css::separator>
                                <Icon icon=ic::CHEVRON_RIGHT />
                            </span>
                            <Segment
                                icon=ic::FOLDER
                                label=folder.name
                                current=Signal::stored(is_current)
                                on_click=move || on_select.run(Some(id.clone()))
                            />
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

#[component]
fn Segment<F>(
    icon: icondata::Icon,
    label: String,
    current: Signal<bool>,
    on_click: F,
) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <button
            class=move || {
                if current.get() {
                    format!("{} {}", css::segment, css::segmentCurrent)
                } else {
                    css::segment.to_string()
                }
            }
            disabled=move || current.get()
            on:click=move |_| on_click()
        >
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{label}</span>
        </button>
    }
}
