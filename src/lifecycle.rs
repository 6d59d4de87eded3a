//! Decides whether operations that would throw away unsaved work may proceed.
//!
//! The controller keeps no document state of its own. Every decision
//! re-reads the modification flag from the [`ImageDocument`], and every
//! question to the user goes through a [`Prompter`], so the flow can be
//! driven by native dialogs in the app and by scripted answers in tests.
//!
//! Cancelling any prompt is an ordinary `false` outcome, not an error.

use crate::config::{QUICK_SAVE_FORMAT, UNTITLED_BASE_NAME};
use crate::document::ImageDocument;
use std::path::{Path, PathBuf};

/// The user's answer to the unsaved-changes prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveDecision {
    Save,
    Discard,
    Cancel,
}

/// Blocking questions the lifecycle asks the user.
///
/// Each call returns only once the user has answered.
pub trait Prompter {
    /// Ask whether to save, discard, or keep unsaved changes.
    fn confirm_unsaved_changes(&mut self) -> SaveDecision;

    /// Ask where to save an image encoded as `format`, starting from `suggested`.
    /// `None` means the user cancelled.
    fn choose_save_location(&mut self, suggested: &Path, format: &str) -> Option<PathBuf>;

    /// Ask which image to open, starting in `directory`.
    /// `None` means the user cancelled.
    fn choose_open_location(&mut self, directory: &Path) -> Option<PathBuf>;
}

#[derive(Debug, Clone)]
pub struct DocumentLifecycle {
    working_dir: PathBuf,
}

impl DocumentLifecycle {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    /// Use the process working directory, or `.` if it cannot be determined.
    pub fn from_current_dir() -> Self {
        Self::new(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// `<working dir>/untitled.<format>`
    pub fn suggested_save_path(&self, format: &str) -> PathBuf {
        self.working_dir.join(format!("{}.{}", UNTITLED_BASE_NAME, format))
    }

    /// Returns `true` when the document may be discarded: it is clean, the
    /// user chose to discard it, or the user chose to save and the save
    /// completed.
    pub fn confirm_discardable<D>(&self, document: &mut D, prompter: &mut dyn Prompter) -> bool
    where
        D: ImageDocument + ?Sized,
    {
        if !document.is_modified() {
            return true;
        }

        match prompter.confirm_unsaved_changes() {
            SaveDecision::Save => self.request_save_as(document, prompter, QUICK_SAVE_FORMAT),
            SaveDecision::Discard => true,
            SaveDecision::Cancel => false,
        }
    }

    /// Ask for a location and save the document there as `format`.
    ///
    /// Returns `false` if the user cancels. Otherwise the document's own
    /// save outcome is returned unchanged.
    pub fn request_save_as<D>(
        &self,
        document: &mut D,
        prompter: &mut dyn Prompter,
        format: &str,
    ) -> bool
    where
        D: ImageDocument + ?Sized,
    {
        let suggested = self.suggested_save_path(format);
        match prompter.choose_save_location(&suggested, format) {
            Some(path) => document.save(&path, format),
            None => false,
        }
    }

    /// Replace the document with an image chosen by the user, after making
    /// sure unsaved changes may be discarded.
    pub fn open<D>(&self, document: &mut D, prompter: &mut dyn Prompter) -> bool
    where
        D: ImageDocument + ?Sized,
    {
        if !self.confirm_discardable(document, prompter) {
            return false;
        }

        match prompter.choose_open_location(&self.working_dir) {
            Some(path) => document.load(&path),
            None => false,
        }
    }
}

impl Default for DocumentLifecycle {
    fn default() -> Self {
        Self::from_current_dir()
    }
}
