//! Line-oriented input files (nouns, pattern lists)

use std::borrow::Cow;
use std::path::Path;

use encoding_rs::WINDOWS_1252;

use crate::error::{Result, SprayForgeError};

/// Read a file as trimmed, non-empty lines in file order.
///
/// Lines that are not valid UTF-8 are decoded as Windows-1252, which
/// covers Latin-1 wordlists such as German nouns with umlauts.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = std::fs::read(path).map_err(|e| {
        let message = if e.kind() == std::io::ErrorKind::NotFound {
            "file not found".to_string()
        } else {
            e.to_string()
        };
        SprayForgeError::missing_input(path.display().to_string(), message)
    })?;

    let mut legacy = 0usize;
    let mut lines = Vec::new();
    for raw in bytes.split(|&b| b == b'\n') {
        let line = match std::str::from_utf8(raw) {
            Ok(text) => Cow::Borrowed(text),
            Err(_) => {
                legacy += 1;
                WINDOWS_1252.decode_without_bom_handling(raw).0
            }
        };
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }

    if legacy > 0 {
        tracing::warn!(path = %path.display(), lines = legacy, "Decoded non UTF-8 lines as Windows-1252");
    }

    Ok(lines)
}

/// Like [`read_lines`], but an unreadable file degrades to an empty list
/// with a warning. `what` names the input in the log line.
pub fn read_lines_or_empty(path: &Path, what: &str) -> Vec<String> {
    match read_lines(path) {
        Ok(lines) => {
            tracing::debug!(input = what, path = %path.display(), lines = lines.len(), "Loaded input file");
            lines
        }
        Err(e) => {
            tracing::warn!(input = what, path = %path.display(), "{}; continuing with no entries", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_lines_trims_and_drops_blanks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "  alice \n\n\t\nbob\r\n   \ncarol").unwrap();

        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn test_read_lines_keeps_utf8_and_decodes_latin1() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"M\xc3\xa4rz\nGr\xfc\xdfe\r\nbob\n").unwrap();

        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["März", "Grüße", "bob"]);
    }

    #[test]
    fn test_read_lines_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_lines(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, SprayForgeError::MissingInput { .. }));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_read_lines_or_empty_degrades() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_lines_or_empty(&dir.path().join("nope.txt"), "nouns").is_empty());
    }
}
