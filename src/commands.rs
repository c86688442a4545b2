//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The runtime executes them on the event thread and reports results back as
//! messages.

use std::path::PathBuf;

use crate::model::TabId;

/// Severity of a user notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Error,
}

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Model changed; front-ends should re-render
    Redraw,
    /// Read a file and reply with `AppMsg::FileLoaded`
    LoadFile { path: PathBuf },
    /// Write a tab's content and reply with `AppMsg::SaveCompleted`
    SaveFile {
        tab: TabId,
        path: PathBuf,
        content: String,
    },
    /// Ask the user for a file to open
    ShowOpenFileDialog,
    /// Ask the user where to save a tab, confirming overwrites
    ShowSaveFileDialog { tab: TabId, start_dir: PathBuf },
    /// Show a notification and wait for acknowledgement
    ShowMessage { level: MessageLevel, text: String },
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Create an error notification
    pub fn error(text: impl Into<String>) -> Self {
        Cmd::ShowMessage {
            level: MessageLevel::Error,
            text: text.into(),
        }
    }

    /// Create an informational notification
    pub fn info(text: impl Into<String>) -> Self {
        Cmd::ShowMessage {
            level: MessageLevel::Info,
            text: text.into(),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::LoadFile { .. } => true,
            Cmd::SaveFile { .. } => true,
            // Dialogs don't need immediate redraw - they'll trigger messages when done
            Cmd::ShowOpenFileDialog => false,
            Cmd::ShowSaveFileDialog { .. } => false,
            Cmd::ShowMessage { .. } => false,
            // Quit doesn't need redraw - app is exiting
            Cmd::Quit => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_state_changes_need_redraw() {
        assert!(Cmd::Redraw.needs_redraw());
        assert!(!Cmd::info("hi").needs_redraw());
        assert!(!Cmd::Quit.needs_redraw());
    }

    #[test]
    fn test_error_constructor() {
        assert_eq!(
            Cmd::error("boom"),
            Cmd::ShowMessage {
                level: MessageLevel::Error,
                text: "boom".to_string()
            }
        );
    }
}
