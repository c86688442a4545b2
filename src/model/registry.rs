//! Document registry - the ordered set of open tabs
//!
//! Each tab binds an opaque [`TabId`] to one [`Document`] and its view state.
//! Tab order is insertion order. At most one tab may be bound to a given
//! resolved file path.

use std::path::{Path, PathBuf};

use super::document::Document;
use super::editor::EditorState;
use crate::error::EditorError;
use crate::file_io::FileGateway;

/// Unique identifier for a tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabId(pub u64);

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A tab: one open document plus how it is displayed
#[derive(Debug, Clone)]
pub struct Tab {
    pub id: TabId,
    pub document: Document,
    pub editor: EditorState,
}

/// Ordered collection of open documents
#[derive(Debug, Clone)]
pub struct DocumentRegistry {
    tabs: Vec<Tab>,
    active_index: Option<usize>,
    next_tab_id: u64,
}

/// Make `path` absolute without following symlinks
///
/// Two paths name the same open file when their resolved forms are equal.
pub fn resolve_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

impl DocumentRegistry {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active_index: None,
            next_tab_id: 1,
        }
    }

    fn next_tab_id(&mut self) -> TabId {
        let id = TabId(self.next_tab_id);
        self.next_tab_id += 1;
        id
    }

    /// Append a tab at the end of the tab order
    ///
    /// The first tab added to an empty registry becomes the selected one;
    /// later tabs leave the selection where it is.
    pub fn add(&mut self, document: Document, editor: EditorState) -> TabId {
        let id = self.next_tab_id();
        self.tabs.push(Tab {
            id,
            document,
            editor,
        });
        if self.active_index.is_none() {
            self.active_index = Some(self.tabs.len() - 1);
        }
        tracing::debug!(tab = %id, count = self.tabs.len(), "tab added");
        id
    }

    /// Add an empty, untitled document
    pub fn create_new(&mut self, editor: EditorState) -> TabId {
        self.add(Document::new(), editor)
    }

    /// Read `path` and add it as a clean document
    ///
    /// # Errors
    ///
    /// [`EditorError::AlreadyOpen`] if the resolved path is bound to a tab,
    /// [`EditorError::Io`] if the file cannot be read.
    pub fn open(
        &mut self,
        path: &Path,
        gateway: &dyn FileGateway,
        editor: EditorState,
    ) -> Result<TabId, EditorError> {
        let resolved = self.ensure_not_open(path)?;
        let content = gateway.read(&resolved)?;
        Ok(self.add(Document::from_content(resolved, &content), editor))
    }

    /// Resolve `path`, failing if a tab already holds it
    pub fn ensure_not_open(&self, path: &Path) -> Result<PathBuf, EditorError> {
        let resolved = resolve_path(path);
        if self.find_open_file(&resolved).is_some() {
            return Err(EditorError::AlreadyOpen(resolved));
        }
        Ok(resolved)
    }

    /// Find the tab bound to `path` (compared in resolved form)
    pub fn find_open_file(&self, path: &Path) -> Option<TabId> {
        let resolved = resolve_path(path);
        self.tabs
            .iter()
            .find(|tab| tab.document.file_path.as_deref() == Some(resolved.as_path()))
            .map(|tab| tab.id)
    }

    pub fn is_file_open(&self, path: &Path) -> bool {
        self.find_open_file(path).is_some()
    }

    pub fn get(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    pub fn get_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|tab| tab.id == id)
    }

    /// Tabs in display order
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn index_of(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id == id)
    }

    /// Select a tab by handle; returns false for unknown handles
    pub fn select(&mut self, id: TabId) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.active_index = Some(index);
                true
            }
            None => false,
        }
    }

    /// Select a tab by position in the tab order
    pub fn select_index(&mut self, index: usize) -> Option<TabId> {
        let id = self.tabs.get(index)?.id;
        self.active_index = Some(index);
        Some(id)
    }

    pub fn active_tab_id(&self) -> Option<TabId> {
        self.active_tab().ok().map(|tab| tab.id)
    }

    /// The selected tab
    ///
    /// # Errors
    ///
    /// [`EditorError::NoActiveTab`] when no tabs are open.
    pub fn active_tab(&self) -> Result<&Tab, EditorError> {
        self.active_index
            .and_then(|index| self.tabs.get(index))
            .ok_or(EditorError::NoActiveTab)
    }

    pub fn active_tab_mut(&mut self) -> Result<&mut Tab, EditorError> {
        self.active_index
            .and_then(|index| self.tabs.get_mut(index))
            .ok_or(EditorError::NoActiveTab)
    }

    /// Document of the selected tab
    pub fn active_document(&self) -> Result<&Document, EditorError> {
        self.active_tab().map(|tab| &tab.document)
    }

    pub fn active_document_mut(&mut self) -> Result<&mut Document, EditorError> {
        self.active_tab_mut().map(|tab| &mut tab.document)
    }

    /// Flag a tab's document as having unsaved changes
    pub fn mark_dirty(&mut self, id: TabId) -> bool {
        match self.get_mut(id) {
            Some(tab) => {
                tab.document.mark_dirty();
                true
            }
            None => false,
        }
    }

    /// Tabs whose documents have unsaved changes
    pub fn dirty_tabs(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.iter().filter(|tab| tab.document.is_modified)
    }
}

impl Default for DocumentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
