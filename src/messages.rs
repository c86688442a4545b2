//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. Front-ends translate
//! user input into messages; the runtime feeds side-effect results back in
//! as messages too.

use std::path::PathBuf;

use crate::error::EditorError;
use crate::model::TabId;

/// Document messages (content changes on the active tab)
///
/// Offsets are character offsets into the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentMsg {
    /// Insert text at an offset
    Insert { offset: usize, text: String },
    /// Insert text at the end of the buffer
    Append(String),
    /// Delete the characters in `start..end`
    Delete { start: usize, end: usize },
    /// Replace the whole buffer
    SetText(String),
}

/// Find/replace messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMsg {
    /// Highlight every occurrence of the query in the active tab
    Find(String),
    /// Replace every occurrence of the query in the active tab
    Replace { query: String, replacement: String },
}

/// View messages (affect how the active tab is displayed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMsg {
    /// Flip word wrap for the active tab and for tabs created later
    ToggleWordWrap,
    /// Grow or shrink the active tab's font
    ChangeFontSize(i32),
}

/// Layout messages (tab selection)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMsg {
    /// Select a tab by handle
    SelectTab(TabId),
    /// Select a tab by position in the tab order
    SelectTabIndex(usize),
}

/// App messages (file operations, autosave, lifecycle)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    /// Create a new untitled tab
    NewFile,
    /// Open a file in a new tab
    OpenFile(PathBuf),
    /// User requested the "Open File..." picker
    OpenFileDialog,
    /// File load completed
    FileLoaded {
        path: PathBuf,
        result: Result<String, EditorError>,
    },
    /// Save the active tab (prompts for a path if it has none)
    SaveFile,
    /// Save the active tab under a new path
    SaveFileAs,
    /// Save-as picker returned a confirmed path for a tab
    SaveAsTarget { tab: TabId, path: PathBuf },
    /// File save completed
    SaveCompleted {
        tab: TabId,
        path: PathBuf,
        result: Result<(), EditorError>,
    },
    /// Periodic autosave check
    AutosaveTick,
    /// Show application information
    About,
    /// Quit the application
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Document messages (text editing)
    Document(DocumentMsg),
    /// Find/replace messages
    Search(SearchMsg),
    /// View messages (wrap, font)
    View(ViewMsg),
    /// Layout messages (tabs)
    Layout(LayoutMsg),
    /// App messages (file I/O, lifecycle)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create an insert message
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Msg::Document(DocumentMsg::Insert {
            offset,
            text: text.into(),
        })
    }

    /// Create a find message
    pub fn find(query: impl Into<String>) -> Self {
        Msg::Search(SearchMsg::Find(query.into()))
    }

    /// Create a replace message
    pub fn replace(query: impl Into<String>, replacement: impl Into<String>) -> Self {
        Msg::Search(SearchMsg::Replace {
            query: query.into(),
            replacement: replacement.into(),
        })
    }
}
