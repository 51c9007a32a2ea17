//! Data models for outline extraction
//!
//! This module defines the entries produced by the line classifier, the
//! per-file outline, and the report assembled across a directory scan.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Supported source languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Python,
}

impl Language {
    /// Determine language from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "py" => Some(Language::Python),
            _ => None,
        }
    }
}

/// Kind of structural element an entry describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Class,
    Method,
    Assignment,
    Import,
}

impl EntryKind {
    /// Column at which the text report writes entries of this kind
    pub fn indent(&self) -> usize {
        match self {
            EntryKind::Class | EntryKind::Import => 4,
            EntryKind::Method => 8,
            EntryKind::Assignment => 12,
        }
    }
}

/// A single extracted entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// What the line was classified as
    pub kind: EntryKind,

    /// Trimmed source line, or the bare identifier for assignments
    pub text: String,

    /// Source line number (1-indexed)
    pub line: usize,
}

impl OutlineEntry {
    pub fn new(kind: EntryKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }
}

/// Outline extracted from one source file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileOutline {
    /// Path relative to the scanned root
    pub path: PathBuf,

    /// Language of the source file
    pub language: Language,

    /// Total number of lines in the file
    pub total_lines: usize,

    /// Entries in order of appearance
    pub entries: Vec<OutlineEntry>,
}

impl FileOutline {
    /// Name written as the block header in the text report
    pub fn display_name(&self) -> String {
        self.path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Count entries of the given kind
    pub fn count(&self, kind: EntryKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }
}

/// Outlines for every scanned file, in scan order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlineReport {
    /// Scanned directory
    pub root: PathBuf,

    /// Per-file outlines
    pub files: Vec<FileOutline>,

    /// Summary statistics
    pub stats: ReportStats,

    /// Scan metadata
    pub metadata: ScanMetadata,
}

impl OutlineReport {
    /// Wrap a single file's outline as a report
    pub fn single(file: FileOutline) -> Self {
        let files = vec![file];
        let stats = ReportStats::from_files(&files, 0);

        Self {
            root: files[0].path.parent().map(Path::to_path_buf).unwrap_or_default(),
            files,
            stats,
            metadata: ScanMetadata {
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
        }
    }
}

/// Summary statistics for a report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStats {
    pub total_files: usize,
    pub total_lines: usize,
    pub total_entries: usize,
    pub classes: usize,
    pub methods: usize,
    pub assignments: usize,
    pub imports: usize,

    /// Files skipped because they could not be read
    pub skipped_files: usize,
}

impl ReportStats {
    /// Aggregate statistics over a set of outlines
    pub fn from_files(files: &[FileOutline], skipped_files: usize) -> Self {
        let sum = |kind: EntryKind| -> usize { files.iter().map(|f| f.count(kind)).sum() };

        Self {
            total_files: files.len(),
            total_lines: files.iter().map(|f| f.total_lines).sum(),
            total_entries: files.iter().map(|f| f.entries.len()).sum(),
            classes: sum(EntryKind::Class),
            methods: sum(EntryKind::Method),
            assignments: sum(EntryKind::Assignment),
            imports: sum(EntryKind::Import),
            skipped_files,
        }
    }
}

/// Metadata about the scan operation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanMetadata {
    /// Duration of scan in milliseconds
    pub scan_duration_ms: u64,

    /// ISO timestamp of scan
    pub timestamp: String,

    /// Tool version
    pub tool_version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_extension() {
        assert_eq!(Language::from_extension("py"), Some(Language::Python));
        assert_eq!(Language::from_extension("pyc"), None);
        assert_eq!(Language::from_extension("js"), None);
    }

    #[test]
    fn test_indent_per_kind() {
        assert_eq!(EntryKind::Class.indent(), 4);
        assert_eq!(EntryKind::Import.indent(), 4);
        assert_eq!(EntryKind::Method.indent(), 8);
        assert_eq!(EntryKind::Assignment.indent(), 12);
    }

    #[test]
    fn test_display_name_uses_forward_slashes() {
        let outline = FileOutline {
            path: PathBuf::from("pkg").join("mod.py"),
            language: Language::Python,
            total_lines: 0,
            entries: vec![],
        };
        assert_eq!(outline.display_name(), "pkg/mod.py");
    }

    #[test]
    fn test_stats_from_files() {
        let files = vec![FileOutline {
            path: PathBuf::from("a.py"),
            language: Language::Python,
            total_lines: 6,
            entries: vec![
                OutlineEntry::new(EntryKind::Class, "class Foo:", 1),
                OutlineEntry::new(EntryKind::Method, "def __init__(self):", 2),
                OutlineEntry::new(EntryKind::Assignment, "self.x", 3),
                OutlineEntry::new(EntryKind::Import, "import os", 6),
            ],
        }];

        let stats = ReportStats::from_files(&files, 1);
        assert_eq!(stats.total_files, 1);
        assert_eq!(stats.total_lines, 6);
        assert_eq!(stats.total_entries, 4);
        assert_eq!(stats.classes, 1);
        assert_eq!(stats.assignments, 1);
        assert_eq!(stats.skipped_files, 1);

        let report = OutlineReport::single(files[0].clone());
        assert_eq!(report.stats.total_entries, 4);
        assert_eq!(report.files.len(), 1);
    }
}
