//! Literal find and replace over an in-memory string
//!
//! Matching is case-sensitive, leftmost-first and non-overlapping: after a
//! hit the scan resumes at the end of that hit. Offsets are byte offsets into
//! the haystack, so `&haystack[start..end]` is always the needle.

use std::iter::FusedIterator;

use crate::error::EditorError;

/// Lazy iterator over the `(start, end)` byte ranges of a needle
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    haystack: &'a str,
    needle: &'a str,
    pos: usize,
}

impl Iterator for Matches<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.haystack.get(self.pos..)?;
        match rest.find(self.needle) {
            Some(rel) => {
                let start = self.pos + rel;
                let end = start + self.needle.len();
                self.pos = end;
                Some((start, end))
            }
            None => {
                self.pos = self.haystack.len() + 1;
                None
            }
        }
    }
}

impl FusedIterator for Matches<'_> {}

/// Find every non-overlapping occurrence of `needle` in `haystack`
///
/// # Errors
///
/// Returns [`EditorError::InvalidQuery`] when `needle` is empty.
pub fn find_all<'a>(haystack: &'a str, needle: &'a str) -> Result<Matches<'a>, EditorError> {
    if needle.is_empty() {
        return Err(EditorError::InvalidQuery);
    }
    Ok(Matches {
        haystack,
        needle,
        pos: 0,
    })
}

/// Replace every non-overlapping occurrence of `find` with `replacement`
///
/// Single forward pass: text inserted by a replacement is never matched again.
///
/// # Errors
///
/// Returns [`EditorError::InvalidQuery`] when `find` is empty.
pub fn replace_all(content: &str, find: &str, replacement: &str) -> Result<String, EditorError> {
    let mut result = String::with_capacity(content.len());
    let mut last = 0;
    for (start, end) in find_all(content, find)? {
        result.push_str(&content[last..start]);
        result.push_str(replacement);
        last = end;
    }
    result.push_str(&content[last..]);
    Ok(result)
}
