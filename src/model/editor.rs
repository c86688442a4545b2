//! Editor state - per-tab view settings (font size, wrapping, find highlights)

/// Smallest font size a tab can be shrunk to (points)
pub const MIN_FONT_SIZE: u32 = 10;

/// Font size for new tabs unless configured otherwise (points)
pub const DEFAULT_FONT_SIZE: u32 = 14;

/// View state owned by a single tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    /// Font size in points, never below [`MIN_FONT_SIZE`]
    pub font_size: u32,
    /// Soft-wrap long lines when rendering
    pub word_wrap: bool,
    /// Byte ranges highlighted by the last find
    pub highlights: Vec<(usize, usize)>,
}

impl EditorState {
    pub fn new(font_size: u32, word_wrap: bool) -> Self {
        Self {
            font_size: font_size.max(MIN_FONT_SIZE),
            word_wrap,
            highlights: Vec::new(),
        }
    }

    /// Grow or shrink the font, clamping at [`MIN_FONT_SIZE`]
    pub fn change_font_size(&mut self, delta: i32) -> u32 {
        self.font_size = self
            .font_size
            .saturating_add_signed(delta)
            .max(MIN_FONT_SIZE);
        self.font_size
    }

    pub fn clear_highlights(&mut self) {
        self.highlights.clear();
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_SIZE, false)
    }
}
