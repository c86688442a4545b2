//! Whole-file text I/O
//!
//! Reads are line oriented: every line, including the last one, comes back
//! terminated by a single `\n`. Writes store the buffer verbatim.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::EditorError;

/// Access to file contents, swappable in tests
pub trait FileGateway {
    /// Read the whole file, normalizing line terminators to `\n`
    fn read(&self, path: &Path) -> Result<String, EditorError>;

    /// Overwrite the file with exactly `content`
    fn write(&self, path: &Path, content: &str) -> Result<(), EditorError>;

    /// Whether something already exists at `path`
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// The real file system
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskGateway;

impl FileGateway for DiskGateway {
    fn read(&self, path: &Path) -> Result<String, EditorError> {
        let file = File::open(path).map_err(|e| EditorError::io(path, &e))?;
        let content = read_lines(BufReader::new(file)).map_err(|e| EditorError::io(path, &e))?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "read file");
        Ok(content)
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), EditorError> {
        fs::write(path, content).map_err(|e| EditorError::io(path, &e))?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(())
    }
}

/// Re-join the lines of `reader` with `\n`, terminating the last one as well
///
/// A line ends at `\n`, `\r` or `\r\n`. Bytes that are not valid UTF-8 are
/// replaced rather than rejected.
pub fn read_lines<R: BufRead>(mut reader: R) -> io::Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let mut content = String::with_capacity(bytes.len() + 1);
    let mut rest = bytes.as_slice();
    while !rest.is_empty() {
        let end = rest
            .iter()
            .position(|&b| b == b'\n' || b == b'\r')
            .unwrap_or(rest.len());
        content.push_str(&String::from_utf8_lossy(&rest[..end]));
        content.push('\n');

        let terminator = match &rest[end..] {
            [b'\r', b'\n', ..] => 2,
            [] => 0,
            _ => 1,
        };
        rest = &rest[end + terminator..];
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_lines_appends_final_newline() {
        let text = read_lines(Cursor::new("a\nb")).unwrap();
        assert_eq!(text, "a\nb\n");
    }

    #[test]
    fn test_read_lines_keeps_existing_final_newline() {
        let text = read_lines(Cursor::new("a\nb\n")).unwrap();
        assert_eq!(text, "a\nb\n");
    }

    #[test]
    fn test_read_lines_empty_input() {
        let text = read_lines(Cursor::new("")).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_read_lines_strips_crlf() {
        let text = read_lines(Cursor::new("one\r\ntwo\r\n")).unwrap();
        assert_eq!(text, "one\ntwo\n");
    }

    #[test]
    fn test_read_lines_lone_cr_ends_line() {
        assert_eq!(read_lines(Cursor::new("a\rb")).unwrap(), "a\nb\n");
        assert_eq!(read_lines(Cursor::new("a\r\rb\r")).unwrap(), "a\n\nb\n");
    }

    #[test]
    fn test_read_lines_mixed_terminators() {
        let text = read_lines(Cursor::new("one\r\ntwo\rthree\nfour")).unwrap();
        assert_eq!(text, "one\ntwo\nthree\nfour\n");
    }

    #[test]
    fn test_read_lines_blank_lines_preserved() {
        let text = read_lines(Cursor::new("\n\nx")).unwrap();
        assert_eq!(text, "\n\nx\n");
    }

    #[test]
    fn test_read_lines_invalid_utf8_is_lossy() {
        let bytes: &[u8] = b"ok\xff\n";
        let text = read_lines(Cursor::new(bytes)).unwrap();
        assert_eq!(text, "ok\u{FFFD}\n");
    }
}
