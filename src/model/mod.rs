//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod editor;
pub mod registry;
pub mod ui;

pub use document::{Document, UNTITLED};
pub use editor::{EditorState, DEFAULT_FONT_SIZE, MIN_FONT_SIZE};
pub use registry::{resolve_path, DocumentRegistry, Tab, TabId};
pub use ui::UiState;

use std::path::PathBuf;

use crate::config::EditorConfig;
use crate::recent_files::RecentFiles;

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Open tabs and their documents
    pub registry: DocumentRegistry,
    /// Every path opened this session, in order
    pub recent_files: RecentFiles,
    /// UI state (status line)
    pub ui: UiState,
    /// Persisted editor configuration
    pub config: EditorConfig,
    /// Word-wrap setting handed to tabs created from now on
    pub word_wrap: bool,
}

impl AppModel {
    /// Create an empty model (no tabs) from configuration
    pub fn new(config: EditorConfig) -> Self {
        Self {
            registry: DocumentRegistry::new(),
            recent_files: RecentFiles::default(),
            ui: UiState::new(),
            word_wrap: config.word_wrap,
            config,
        }
    }

    /// View state for a tab created right now
    pub fn new_editor_state(&self) -> EditorState {
        EditorState::new(self.config.font_size, self.word_wrap)
    }

    /// Directory the save-as picker starts in
    pub fn storage_dir(&self) -> PathBuf {
        self.config.storage_dir.clone()
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
