//! Modal dialog capability.
//!
//! A dialog is opened with a title, an optional text input and a confirm
//! label. It ends with exactly one [`DialogEvent`] and is inactive afterwards;
//! calling [`Dialog::confirm`] or [`Dialog::cancel`] again yields nothing.

use leptos::prelude::*;

use crate::config::dialog::DEFAULT_CONFIRM_LABEL;

/// Terminal event of an open dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogEvent {
    /// Confirmed, carrying the input value (empty when the dialog has no input)
    Confirmed(String),
    Cancelled,
}

/// Dialog state held in signals so the modal view can render it directly.
#[derive(Clone, Copy)]
pub struct Dialog {
    pub is_open: RwSignal<bool>,
    pub title: RwSignal<String>,
    /// Text input slot (`None` = no input shown)
    pub input: RwSignal<Option<String>>,
    pub confirm_label: RwSignal<String>,
}

impl Dialog {
    pub fn new() -> Self {
        Self {
            is_open: RwSignal::new(false),
            title: RwSignal::new(String::new()),
            input: RwSignal::new(None),
            confirm_label: RwSignal::new(DEFAULT_CONFIRM_LABEL.to_string()),
        }
    }

    /// Open the dialog, replacing whatever it showed before.
    pub fn open(&self, title: &str, input: Option<String>, confirm_label: &str) {
        self.title.set(title.to_string());
        self.input.set(input);
        self.confirm_label.set(confirm_label.to_string());
        self.is_open.set(true);
    }

    /// Update the text input (ignored when the dialog has no input slot).
    pub fn set_input(&self, value: String) {
        self.input.update(|input| {
            if let Some(current) = input {
                *current = value;
            }
        });
    }

    pub fn is_open(&self) -> bool {
        self.is_open.get_untracked()
    }

    /// Close with [`DialogEvent::Confirmed`] if the dialog is open.
    pub fn confirm(&self) -> Option<DialogEvent> {
        if !self.is_open() {
            return None;
        }
        let value = self.input.get_untracked().unwrap_or_default();
        self.close();
        Some(DialogEvent::Confirmed(value))
    }

    /// Close with [`DialogEvent::Cancelled`] if the dialog is open.
    pub fn cancel(&self) -> Option<DialogEvent> {
        if !self.is_open() {
            return None;
        }
        self.close();
        Some(DialogEvent::Cancelled)
    }

    fn close(&self) {
        self.is_open.set(false);
        self.input.set(None);
    }
}

impl Default for Dialog {
    fn default() -> Self {
        Self::new()
    }
}
