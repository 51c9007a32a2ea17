//! Output formatting module
//!
//! This module renders an [`OutlineReport`] as the indented text report,
//! JSON, YAML, ANSI-colored text or a short summary, and writes it to disk.

pub mod ansi;
mod json;
mod text;
mod yaml;

pub use ansi::format_ansi;
pub use json::format_json;
pub use text::{format_file_text, format_text};
pub use yaml::format_yaml;

use crate::models::OutlineReport;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Output format errors
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Available output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented plain-text outline
    #[default]
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
    /// ANSI colored text
    Ansi,
    /// Entry counts only
    Summary,
}

/// Format report data in the specified format
pub fn format_output(data: &OutlineReport, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Text => Ok(format_text(data)),
        OutputFormat::Json => format_json(data),
        OutputFormat::Yaml => format_yaml(data),
        OutputFormat::Ansi => Ok(format_ansi(data)),
        OutputFormat::Summary => Ok(format_summary(data)),
    }
}

/// Render the report and write it to `path`, replacing any existing file
pub fn write_report(
    data: &OutlineReport,
    format: OutputFormat,
    path: &Path,
) -> Result<(), FormatError> {
    let rendered = format_output(data, format)?;
    fs::write(path, rendered).map_err(|source| FormatError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Format as plain text summary
fn format_summary(data: &OutlineReport) -> String {
    let mut output = String::new();

    output.push_str("Outline Scan Results\n");
    output.push_str("====================\n\n");
    output.push_str(&format!("Root: {}\n", data.root.display()));
    output.push_str(&format!("Files: {}\n", data.stats.total_files));
    output.push_str(&format!("Lines: {}\n", data.stats.total_lines));
    output.push_str(&format!("Entries: {}\n", data.stats.total_entries));
    output.push_str(&format!("  classes: {}\n", data.stats.classes));
    output.push_str(&format!("  methods: {}\n", data.stats.methods));
    output.push_str(&format!("  assignments: {}\n", data.stats.assignments));
    output.push_str(&format!("  imports: {}\n", data.stats.imports));

    if data.stats.skipped_files > 0 {
        output.push_str(&format!("\nSkipped files: {}\n", data.stats.skipped_files));
    }

    output
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::{
        EntryKind, FileOutline, Language, OutlineEntry, OutlineReport, ReportStats, ScanMetadata,
    };
    use std::path::PathBuf;

    pub fn report() -> OutlineReport {
        let files = vec![
            FileOutline {
                path: PathBuf::from("a.py"),
                language: Language::Python,
                total_lines: 6,
                entries: vec![
                    OutlineEntry::new(EntryKind::Class, "class Foo:", 1),
                    OutlineEntry::new(EntryKind::Method, "def __init__(self):", 2),
                    OutlineEntry::new(EntryKind::Assignment, "self.x", 3),
                    OutlineEntry::new(EntryKind::Method, "def bar(self):", 4),
                    OutlineEntry::new(EntryKind::Import, "import os", 6),
                ],
            },
            FileOutline {
                path: PathBuf::from("empty.py"),
                language: Language::Python,
                total_lines: 0,
                entries: vec![],
            },
        ];
        let stats = ReportStats::from_files(&files, 0);

        OutlineReport {
            root: PathBuf::from("/project"),
            files,
            stats,
            metadata: ScanMetadata {
                scan_duration_ms: 3,
                timestamp: "2024-01-01T00:00:00Z".to_string(),
                tool_version: "0.1.0".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_summary() {
        let summary = format_output(&fixtures::report(), OutputFormat::Summary).unwrap();
        assert!(summary.contains("Files: 2"));
        assert!(summary.contains("methods: 2"));
        assert!(!summary.contains("Skipped"));
    }

    #[test]
    fn test_write_report_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("outlines.txt");
        fs::write(&path, "stale content that is longer than the report itself\n".repeat(20)).unwrap();

        write_report(&fixtures::report(), OutputFormat::Text, &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, format_text(&fixtures::report()));
    }

    #[test]
    fn test_write_report_into_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("outlines.txt");

        let err = write_report(&fixtures::report(), OutputFormat::Text, &path).unwrap_err();
        assert!(matches!(err, FormatError::Io { .. }));
    }
}
