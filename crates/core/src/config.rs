//! Configuration module for the outline scanner
//!
//! This module provides the scan configuration and the ignore filtering
//! applied while enumerating candidate source files.

use crate::parsers::ContinuationRule;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default report file name, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "outlines.txt";

/// Directories never entered during a recursive scan
const DEFAULT_SKIPPED_DIRS: &[&str] = &[
    "**/__pycache__",
    "**/.venv",
    "**/venv",
    "**/.git",
    "**/node_modules",
    "**/build",
    "**/dist",
    "**/.tox",
    "**/.mypy_cache",
    "**/.pytest_cache",
];

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid glob pattern: {0}")]
    InvalidGlob(String),
}

/// Configuration for the outline scanner
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory to scan
    pub root: PathBuf,

    /// Report file path
    pub output: PathBuf,

    /// File names skipped during enumeration
    pub exclude: Vec<String>,

    /// Glob patterns matched against paths relative to `root`
    pub ignore_patterns: Vec<String>,

    /// Descend into subdirectories
    pub recursive: bool,

    /// Sort files by relative path instead of keeping listing order
    pub sort: bool,

    /// Log and skip unreadable files instead of aborting
    pub keep_going: bool,

    /// Number of threads for extraction (1 = sequential)
    pub threads: usize,

    /// Multi-line assignment detection rule
    pub continuation: ContinuationRule,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            exclude: Vec::new(),
            ignore_patterns: Vec::new(),
            recursive: false,
            sort: false,
            keep_going: false,
            threads: num_cpus(),
            continuation: ContinuationRule::default(),
        }
    }
}

impl ScanConfig {
    /// Create new config with root directory
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ..Default::default()
        }
    }

    /// Set report path (builder pattern)
    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = output;
        self
    }

    /// Set excluded file names (builder pattern)
    pub fn with_exclude(mut self, names: Vec<String>) -> Self {
        self.exclude = names;
        self
    }

    /// Set ignore patterns (builder pattern)
    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    /// Set recursive scanning (builder pattern)
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Set sorted enumeration (builder pattern)
    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// Set keep-going on unreadable files (builder pattern)
    pub fn with_keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    /// Set number of threads (builder pattern)
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    /// Set multi-line assignment rule (builder pattern)
    pub fn with_continuation(mut self, continuation: ContinuationRule) -> Self {
        self.continuation = continuation;
        self
    }
}

/// Get number of available CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(4)
}

/// Filter for ignoring files and directories
pub struct IgnoreFilter {
    /// User-supplied glob patterns
    custom_globs: GlobSet,

    /// Directories skipped when recursing
    skipped_dirs: GlobSet,

    /// Excluded file names
    exclude: Vec<String>,
}

impl IgnoreFilter {
    /// Create a new ignore filter from config
    pub fn new(config: &ScanConfig) -> Result<Self, ConfigError> {
        let custom_globs = Self::build_globset(config.ignore_patterns.iter().map(String::as_str))?;
        let skipped_dirs = Self::build_globset(DEFAULT_SKIPPED_DIRS.iter().copied())?;

        Ok(Self {
            custom_globs,
            skipped_dirs,
            exclude: config.exclude.clone(),
        })
    }

    /// Build a globset from patterns
    fn build_globset<'a>(
        patterns: impl IntoIterator<Item = &'a str>,
    ) -> Result<GlobSet, ConfigError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| ConfigError::InvalidGlob(e.to_string()))?;
            builder.add(glob);
        }
        builder
            .build()
            .map_err(|e| ConfigError::InvalidGlob(e.to_string()))
    }

    /// Check if a directory (relative to the root) should not be entered
    pub fn should_skip_dir(&self, relative: &Path) -> bool {
        let hidden = relative
            .file_name()
            .is_some_and(|name| name.to_string_lossy().starts_with('.'));

        hidden || self.skipped_dirs.is_match(relative) || self.custom_globs.is_match(relative)
    }

    /// Check if a file (relative to the root) should be left out of the report
    pub fn should_ignore_file(&self, relative: &Path) -> bool {
        let excluded = relative
            .file_name()
            .is_some_and(|name| self.exclude.iter().any(|e| name == e.as_str()));

        excluded || self.custom_globs.is_match(relative)
    }
}
