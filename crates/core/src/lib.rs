//! mta_outlines_core - Core library for compact Python outlines
//!
//! This crate extracts a structural outline (classes, methods, captured
//! assignments and imports) from Python source files using line-oriented
//! heuristics, and writes the outlines of a directory into a single report.
//! The outline is meant for consumers with little room for context, such as
//! passing the shape of a codebase to an assistant.
//!
//! # Features
//!
//! - **Line Classifier**: a four-flag state machine over trimmed lines; no
//!   tokenizer, no grammar, indentation is never measured.
//! - **Directory Reports**: flat or recursive scans in listing order, written
//!   to `outlines.txt`.
//! - **Multiple Output Formats**: indented text, JSON, YAML, ANSI-colored
//!   terminal output and a summary.
//!
//! # Example
//!
//! ```rust,no_run
//! use mta_outlines_core::{generate_report, OutputFormat, ScanConfig};
//! use std::path::PathBuf;
//!
//! let config = ScanConfig::new(PathBuf::from("."));
//! let report = generate_report(&config, OutputFormat::Text).unwrap();
//! println!("{} files outlined", report.stats.total_files);
//! ```

pub mod config;
pub mod engine;
pub mod models;
pub mod output;
pub mod parsers;

// Re-exports for convenience
pub use config::{ConfigError, IgnoreFilter, ScanConfig, DEFAULT_OUTPUT};
pub use engine::{generate_report, scan_file, OutlineScanner, ScanError};
pub use models::{
    EntryKind, FileOutline, Language, OutlineEntry, OutlineReport, ReportStats, ScanMetadata,
};
pub use output::{format_file_text, format_output, write_report, FormatError, OutputFormat};
pub use parsers::{
    create_parser, extract_file, get_outline, get_outline_with, ContinuationRule,
    ExtractionState, OutlineParser, ParserError, PythonParser,
};
