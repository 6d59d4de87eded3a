use crate::config::APP_TITLE;
use crate::lifecycle::{Prompter, SaveDecision};
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::path::{Path, PathBuf};

const SAVE_LABEL: &str = "Save";
const DISCARD_LABEL: &str = "Discard";
const CANCEL_LABEL: &str = "Cancel";

/// Native message and file dialogs, modal to `parent`.
pub struct NativePrompter<'w, W> {
    parent: &'w W,
}

impl<'w, W> NativePrompter<'w, W>
where
    W: HasWindowHandle + HasDisplayHandle,
{
    pub fn new(parent: &'w W) -> Self {
        Self { parent }
    }
}

impl<W> Prompter for NativePrompter<'_, W>
where
    W: HasWindowHandle + HasDisplayHandle,
{
    fn confirm_unsaved_changes(&mut self) -> SaveDecision {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(APP_TITLE)
            .set_description("The image has been modified.\nDo you want to save your changes?")
            .set_buttons(MessageButtons::YesNoCancelCustom(
                SAVE_LABEL.to_owned(),
                DISCARD_LABEL.to_owned(),
                CANCEL_LABEL.to_owned(),
            ))
            .set_parent(self.parent)
            .show();
        decision_from(result)
    }

    fn choose_save_location(&mut self, suggested: &Path, format: &str) -> Option<PathBuf> {
        let mut dialog = FileDialog::new()
            .set_title("Save As")
            .add_filter(format!("{} Files", format.to_uppercase()), &[format])
            .add_filter("All Files", &["*"])
            .set_parent(self.parent);
        if let Some(directory) = suggested.parent() {
            dialog = dialog.set_directory(directory);
        }
        if let Some(file_name) = suggested.file_name() {
            dialog = dialog.set_file_name(file_name.to_string_lossy());
        }
        dialog.save_file()
    }

    fn choose_open_location(&mut self, directory: &Path) -> Option<PathBuf> {
        FileDialog::new()
            .set_title("Open File")
            .set_directory(directory)
            .set_parent(self.parent)
            .pick_file()
    }
}

/// Backends report custom buttons either by label or as the matching
/// yes/no/cancel slot; anything else (closing the dialog) counts as cancel.
fn decision_from(result: MessageDialogResult) -> SaveDecision {
    match result {
        MessageDialogResult::Yes => SaveDecision::Save,
        MessageDialogResult::No => SaveDecision::Discard,
        MessageDialogResult::Custom(label) if label == SAVE_LABEL => SaveDecision::Save,
        MessageDialogResult::Custom(label) if label == DISCARD_LABEL => SaveDecision::Discard,
        _ => SaveDecision::Cancel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_results_map_to_decisions() {
        assert_eq!(decision_from(MessageDialogResult::Yes), SaveDecision::Save);
        assert_eq!(decision_from(MessageDialogResult::No), SaveDecision::Discard);
        assert_eq!(decision_from(MessageDialogResult::Cancel), SaveDecision::Cancel);
        assert_eq!(
            decision_from(MessageDialogResult::Custom(SAVE_LABEL.to_owned())),
            SaveDecision::Save
        );
        assert_eq!(
            decision_from(MessageDialogResult::Custom(DISCARD_LABEL.to_owned())),
            SaveDecision::Discard
        );
        assert_eq!(
            decision_from(MessageDialogResult::Custom(CANCEL_LABEL.to_owned())),
            SaveDecision::Cancel
        );
    }
}
