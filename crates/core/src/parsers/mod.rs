//! Parsers module for heuristic outline extraction
//!
//! Parsers classify source lines one at a time by prefix and substring tests.
//! There is no tokenizer or grammar behind them.

mod python;

pub use python::{
    get_outline, get_outline_with, split_lines, ContinuationRule, ExtractionState, PythonParser,
};

use crate::models::{FileOutline, Language, OutlineEntry};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Parser errors
#[derive(Error, Debug)]
pub enum ParserError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File is not valid UTF-8: {path}")]
    InvalidEncoding { path: PathBuf },

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}

/// Trait for language-specific outline parsers
pub trait OutlineParser: Send + Sync {
    /// Get the language this parser handles
    fn language(&self) -> Language;

    /// Classify every line of `source` and return the resulting entries
    fn extract(&self, source: &str) -> Vec<OutlineEntry>;
}

/// Create a parser for the specified language
pub fn create_parser(language: &Language, continuation: ContinuationRule) -> Box<dyn OutlineParser> {
    match language {
        Language::Python => Box::new(PythonParser::new(continuation)),
    }
}

/// Read a file as UTF-8, distinguishing decoding failures from IO failures
pub fn read_source(path: &Path) -> Result<String, ParserError> {
    let bytes = fs::read(path).map_err(|source| ParserError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|_| ParserError::InvalidEncoding {
        path: path.to_path_buf(),
    })
}

/// Read and outline a single file
///
/// `display_path` is stored on the outline as-is; the file is read from
/// `path`.
pub fn extract_file(
    path: &Path,
    display_path: &Path,
    continuation: ContinuationRule,
) -> Result<FileOutline, ParserError> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default();
    let language = Language::from_extension(&ext)
        .ok_or_else(|| ParserError::UnsupportedLanguage(path.display().to_string()))?;

    let source = read_source(path)?;
    let entries = create_parser(&language, continuation).extract(&source);

    Ok(FileOutline {
        path: display_path.to_path_buf(),
        language,
        total_lines: split_lines(&source).count(),
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryKind;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_extract_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.py");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "import os\nclass A:\n    pass").unwrap();

        let outline = extract_file(&path, Path::new("a.py"), ContinuationRule::default()).unwrap();
        assert_eq!(outline.path, PathBuf::from("a.py"));
        assert_eq!(outline.total_lines, 3);
        assert_eq!(outline.entries[0].kind, EntryKind::Import);
        assert_eq!(outline.entries[1].kind, EntryKind::Class);
    }

    #[test]
    fn test_extract_file_with_cr_endings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mac.py");
        fs::write(&path, "import os\rclass A:\r    x = 1\r").unwrap();

        let outline = extract_file(&path, Path::new("mac.py"), ContinuationRule::default()).unwrap();
        assert_eq!(outline.total_lines, 3);
        assert_eq!(outline.entries.len(), 3);
        assert_eq!(outline.entries[2].text, "x");
        assert_eq!(outline.entries[2].line, 3);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.py");

        let err = extract_file(&path, Path::new("missing.py"), ContinuationRule::default()).unwrap_err();
        assert!(matches!(err, ParserError::Io { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_encoding_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.py");
        fs::write(&path, [b'x', b' ', b'=', b' ', 0xE9, b'\n']).unwrap();

        let err = extract_file(&path, Path::new("latin1.py"), ContinuationRule::default()).unwrap_err();
        assert!(matches!(err, ParserError::InvalidEncoding { .. }));
    }

    #[test]
    fn test_unsupported_extension() {
        let path = Path::new("notes.txt");
        let err = extract_file(path, path, ContinuationRule::default()).unwrap_err();
        assert!(matches!(err, ParserError::UnsupportedLanguage(_)));
    }
}
