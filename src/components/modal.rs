//! Modal dialog component.
//!
//! Renders a [`Dialog`]: title, optional text input, any extra body content
//! (the move picker), and confirm/cancel buttons. Enter confirms, Escape and
//! clicks on the backdrop cancel.

use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;

use crate::components::icons as ic;
use crate::config::dialog::CANCEL_LABEL;
use crate::core::Dialog;

stylance::import_crate_style!(css, "src/components/modal.module.css");

#[component]
pub fn Modal(
    dialog: Dialog,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus the name field whenever the dialog shows one
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
            input.select();
        }
    });

    // Keys are read at window level so dialogs without an input respond too
    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        if !dialog.is_open.get_untracked() {
            return;
        }
        match ev.key().as_str() {
            "Enter" => {
                ev.prevent_default();
                on_confirm.run(());
            }
            "Escape" => {
                ev.prevent_default();
                on_cancel.run(());
            }
            _ => {}
        }
    });

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        dialog.set_input(input.value());
    };

    // Only clicks landing on the backdrop itself cancel
    let handle_backdrop = move |ev: ev::MouseEvent| {
        if ev.target() == ev.current_target() {
            on_cancel.run(());
        }
    };

    view! {
        <Show when=move || dialog.is_open.get()>
            <div class=css::backdrop on:click=handle_backdrop>
                <div class=css::modal role="dialog" aria-modal="true">
                    <header class=css::header>
                        <h2 class=css::title>{move || dialog.title.get()}</h2>
                        <button
                            class=css::closeButton
                            title="Close (Esc)"
                            on:click=move |_| on_cancel.run(())
                        >
                            <Icon icon=ic::CLOSE />
                        </button>
                    </header>

                    <div class=css::body>
                        <Show when=move || dialog.input.with(Option::is_some)>
                            <input
                                node_ref=input_ref
                                type="text"
                                class=css::input
                                autocomplete="off"
                                spellcheck="false"
                                prop:value=move || dialog.input.get().unwrap_or_default()
                                on:input=handle_input
                            />
                        </Show>
                        {children()}
                    </div>

                    <footer class=css::footer>
                        <button class=css::cancelButton on:click=move |_| on_cancel.run(())>
                            {CANCEL_LABEL}
                        </button>
                        <button class=css::confirmButton on:click=move |_| on_confirm.run(())>
                            {move || dialog.confirm_label.get()}
                        </button>
                    </footer>
                </div>
            </div>
        </Show>
    }
}
