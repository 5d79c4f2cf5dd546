//! Mutation workflows driven through the dialog.

use crate::config::dialog;
use crate::models::Item;

/// The mutation currently waiting for the dialog to close.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Workflow {
    #[default]
    Idle,
    Create,
    Rename(Item),
    Delete(Item),
    /// Destination context lives in the controller's picker browser
    Move(Item),
}

/// How the dialog presents a workflow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogConfig {
    pub title: String,
    /// Initial text input (`None` = no input)
    pub input: Option<String>,
    pub confirm_label: &'static str,
}

impl Workflow {
    pub fn is_move(&self) -> bool {
        matches!(self, Self::Move(_))
    }

    pub fn dialog_config(&self) -> Option<DialogConfig> {
        let config = match self {
            Self::Idle => return None,
            Self::Create => DialogConfig {
                title: dialog::CREATE_TITLE.to_string(),
                input: Some(dialog::DEFAULT_FOLDER_NAME.to_string()),
                confirm_label: dialog::CREATE_LABEL,
            },
            Self::Rename(item) => DialogConfig {
                title: pick(item, dialog::RENAME_FOLDER_TITLE, dialog::RENAME_FILE_TITLE),
                input: Some(item.name.clone()),
                confirm_label: dialog::RENAME_LABEL,
            },
            Self::Delete(item) => DialogConfig {
                title: pick(item, dialog::DELETE_FOLDER_TITLE, dialog::DELETE_FILE_TITLE),
                input: None,
                confirm_label: dialog::DELETE_LABEL,
            },
            Self::Move(item) => DialogConfig {
                title: format!("Move {} to...", item.name),
                input: None,
                confirm_label: dialog::MOVE_LABEL,
            },
        };
        Some(config)
    }
}

fn pick(item: &Item, folder: &str, file: &str) -> String {
    if item.is_folder { folder } else { file }.to_string()
}
