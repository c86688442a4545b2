//! Synchronous user prompts
//!
//! The editor core never talks to a toolkit directly. Whatever front-end is
//! in use supplies these prompts; `RfdPrompter` uses native dialogs.

use std::path::{Path, PathBuf};

use crate::commands::MessageLevel;

/// Blocking questions and notifications for the user
pub trait Prompter {
    /// Ask for an existing file to open (None if cancelled)
    fn pick_open_path(&self) -> Option<PathBuf>;

    /// Ask where to save, starting in `start_dir` (None if cancelled)
    fn pick_save_path(&self, start_dir: &Path) -> Option<PathBuf>;

    /// Ask whether an existing file may be replaced
    fn confirm_overwrite(&self, path: &Path) -> bool;

    /// Show a message and wait until the user dismisses it
    fn notify(&self, level: MessageLevel, message: &str);
}

const TEXT_FILTER_NAME: &str = "Text Files";
const TEXT_FILTER_EXTENSIONS: &[&str] = &["txt"];

/// Native dialogs via `rfd`
#[derive(Debug, Clone, Copy, Default)]
pub struct RfdPrompter;

impl Prompter for RfdPrompter {
    fn pick_open_path(&self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .add_filter(TEXT_FILTER_NAME, TEXT_FILTER_EXTENSIONS)
            .pick_file()
    }

    fn pick_save_path(&self, start_dir: &Path) -> Option<PathBuf> {
        let mut dlg = rfd::FileDialog::new().add_filter(TEXT_FILTER_NAME, TEXT_FILTER_EXTENSIONS);
        if start_dir.is_dir() {
            dlg = dlg.set_directory(start_dir);
        }
        dlg.save_file()
    }

    fn confirm_overwrite(&self, path: &Path) -> bool {
        let answer = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title("Confirm Save")
            .set_description(format!(
                "{} already exists. Overwrite?",
                path.display()
            ))
            .set_buttons(rfd::MessageButtons::YesNo)
            .show();
        answer == rfd::MessageDialogResult::Yes
    }

    fn notify(&self, level: MessageLevel, message: &str) {
        let (rfd_level, title) = match level {
            MessageLevel::Info => (rfd::MessageLevel::Info, "tabpad"),
            MessageLevel::Error => (rfd::MessageLevel::Error, "Error"),
        };
        rfd::MessageDialog::new()
            .set_level(rfd_level)
            .set_title(title)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}
