//! Document model - represents the text buffer and file state

use ropey::Rope;
use std::path::{Path, PathBuf};

/// Display name used for documents that have never been saved
pub const UNTITLED: &str = "Untitled";

/// Document state - the text buffer and associated file metadata
#[derive(Debug, Clone)]
pub struct Document {
    /// The text buffer
    pub buffer: Rope,
    /// Path to the file on disk (None for new/unsaved files)
    pub file_path: Option<PathBuf>,
    /// Whether the buffer has unsaved changes
    pub is_modified: bool,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self {
            buffer: Rope::new(),
            file_path: None,
            is_modified: false,
        }
    }

    /// Create a clean document for content that was just read from `path`
    pub fn from_content(path: PathBuf, content: &str) -> Self {
        Self {
            buffer: Rope::from_str(content),
            file_path: Some(path),
            is_modified: false,
        }
    }

    /// Get the display name for this document.
    /// Returns the filename if saved, or "Untitled" as fallback.
    pub fn display_name(&self) -> String {
        self.file_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| UNTITLED.to_string())
    }

    /// Full buffer contents
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Number of characters in the buffer
    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    /// Mark the buffer as changed since the last save
    pub fn mark_dirty(&mut self) {
        self.is_modified = true;
    }

    /// Insert text at a character offset (clamped to the end of the buffer)
    pub fn insert(&mut self, char_offset: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        let at = char_offset.min(self.buffer.len_chars());
        self.buffer.insert(at, text);
        self.mark_dirty();
    }

    /// Remove the characters in `start..end` (clamped; empty ranges are ignored)
    pub fn delete(&mut self, start: usize, end: usize) {
        let len = self.buffer.len_chars();
        let (start, end) = (start.min(len), end.min(len));
        if start >= end {
            return;
        }
        self.buffer.remove(start..end);
        self.mark_dirty();
    }

    /// Replace the whole buffer
    ///
    /// Always counts as a change, even when the new text equals the old one.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = Rope::from_str(text);
        self.mark_dirty();
    }

    /// Record a successful save to `path`
    pub fn mark_saved(&mut self, path: PathBuf) {
        self.file_path = Some(path);
        self.is_modified = false;
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_has_no_path() {
        let doc = Document::new();
        assert!(doc.file_path.is_none());
        assert!(!doc.is_modified);
        assert_eq!(doc.display_name(), "Untitled");
    }

    fn untitled(text: &str) -> Document {
        Document {
            buffer: Rope::from_str(text),
            ..Document::new()
        }
    }

    #[test]
    fn test_from_content_is_clean() {
        let doc = Document::from_content(PathBuf::from("/tmp/notes.txt"), "x\n");
        assert!(!doc.is_modified);
        assert_eq!(doc.display_name(), "notes.txt");
    }

    #[test]
    fn test_insert_marks_modified() {
        let mut doc = Document::new();
        doc.insert(0, "hello");
        assert!(doc.is_modified);
        assert_eq!(doc.text(), "hello");
    }

    #[test]
    fn test_insert_past_end_appends() {
        let mut doc = untitled("ab");
        doc.insert(99, "c");
        assert_eq!(doc.text(), "abc");
    }

    #[test]
    fn test_insert_empty_text_is_not_a_change() {
        let mut doc = untitled("ab");
        doc.insert(1, "");
        assert!(!doc.is_modified);
    }

    #[test]
    fn test_delete_range() {
        let mut doc = untitled("hello world");
        doc.delete(5, 11);
        assert_eq!(doc.text(), "hello");
        assert!(doc.is_modified);
    }

    #[test]
    fn test_delete_empty_range_is_noop() {
        let mut doc = untitled("abc");
        doc.delete(2, 2);
        doc.delete(3, 1);
        assert_eq!(doc.text(), "abc");
        assert!(!doc.is_modified);
    }

    #[test]
    fn test_delete_uses_char_offsets() {
        let mut doc = untitled("héllo");
        doc.delete(1, 2);
        assert_eq!(doc.text(), "hllo");
    }

    #[test]
    fn test_set_text_same_content_still_dirty() {
        let mut doc = untitled("same");
        doc.set_text("same");
        assert!(doc.is_modified);
    }

    #[test]
    fn test_mark_saved_binds_path_and_clears_dirty() {
        let mut doc = Document::new();
        doc.insert(0, "x");
        doc.mark_saved(PathBuf::from("/tmp/out.txt"));
        assert!(!doc.is_modified);
        assert_eq!(doc.file_path, Some(PathBuf::from("/tmp/out.txt")));
        assert_eq!(doc.display_name(), "out.txt");
    }
}
