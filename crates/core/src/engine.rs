//! Outline engine module
//!
//! This module provides the scanner that enumerates source files, runs the
//! extractor on each and assembles the report.

use crate::config::{IgnoreFilter, ScanConfig};
use crate::models::{FileOutline, Language, OutlineReport, ReportStats, ScanMetadata};
use crate::output::{write_report, FormatError, OutputFormat};
use crate::parsers::{extract_file, ParserError};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Scanner errors
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to list directory: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("Config error: {0}")]
    ConfigError(#[from] crate::config::ConfigError),

    #[error("Parser error: {0}")]
    ParserError(#[from] ParserError),

    #[error("Output error: {0}")]
    FormatError(#[from] FormatError),

    #[error("Thread pool error: {0}")]
    ThreadPoolError(String),
}

/// Main outline scanner
pub struct OutlineScanner {
    config: ScanConfig,
    ignore_filter: IgnoreFilter,
}

impl OutlineScanner {
    /// Create a new scanner with the given configuration
    pub fn new(config: ScanConfig) -> Result<Self, ScanError> {
        let ignore_filter = IgnoreFilter::new(&config)?;
        Ok(Self {
            config,
            ignore_filter,
        })
    }

    /// Scan the configured directory and return the report
    ///
    /// Files appear in the report in enumeration order regardless of the
    /// thread count.
    pub fn scan(&self) -> Result<OutlineReport, ScanError> {
        let start = Instant::now();

        let source_files = self.find_source_files()?;
        debug!(count = source_files.len(), root = %self.config.root.display(), "found source files");

        let results: Vec<Result<Option<FileOutline>, ScanError>> = if self.config.threads <= 1 {
            source_files.iter().map(|path| self.extract(path)).collect()
        } else {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.config.threads)
                .build()
                .map_err(|e| ScanError::ThreadPoolError(e.to_string()))?;

            pool.install(|| source_files.par_iter().map(|path| self.extract(path)).collect())
        };

        let mut files = Vec::with_capacity(results.len());
        let mut skipped = 0;
        for result in results {
            match result? {
                Some(outline) => files.push(outline),
                None => skipped += 1,
            }
        }

        let stats = ReportStats::from_files(&files, skipped);
        let duration = start.elapsed();
        info!(
            files = stats.total_files,
            entries = stats.total_entries,
            skipped = stats.skipped_files,
            elapsed_ms = duration.as_millis() as u64,
            "scan complete"
        );

        Ok(OutlineReport {
            root: self.config.root.clone(),
            files,
            stats,
            metadata: ScanMetadata {
                scan_duration_ms: duration.as_millis() as u64,
                timestamp: chrono::Utc::now().to_rfc3339(),
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
            },
        })
    }

    /// Find candidate source files, as paths relative to the root
    fn find_source_files(&self) -> Result<Vec<PathBuf>, ScanError> {
        let root = &self.config.root;
        let max_depth = if self.config.recursive { usize::MAX } else { 1 };

        let walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(max_depth)
            .into_iter()
            .filter_entry(|e| {
                if e.file_type().is_dir() {
                    let relative = e.path().strip_prefix(root).unwrap_or(e.path());
                    return !self.ignore_filter.should_skip_dir(relative);
                }
                true
            });

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let is_source = path
                .extension()
                .and_then(|ext| Language::from_extension(&ext.to_string_lossy()))
                .is_some();
            if !is_source {
                continue;
            }

            let relative = path.strip_prefix(root).unwrap_or(path);
            if self.ignore_filter.should_ignore_file(relative) {
                debug!(path = %relative.display(), "ignored");
                continue;
            }

            files.push(relative.to_path_buf());
        }

        if self.config.sort {
            files.sort();
        }

        Ok(files)
    }

    /// Outline one file; `None` means it was skipped under keep-going
    fn extract(&self, relative: &Path) -> Result<Option<FileOutline>, ScanError> {
        let path = self.config.root.join(relative);

        match extract_file(&path, relative, self.config.continuation) {
            Ok(outline) => {
                debug!(
                    path = %relative.display(),
                    lines = outline.total_lines,
                    entries = outline.entries.len(),
                    "extracted outline"
                );
                Ok(Some(outline))
            }
            Err(err) if self.config.keep_going => {
                warn!(path = %relative.display(), error = %err, "skipping unreadable file");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Outline a single file
pub fn scan_file(path: &Path, config: &ScanConfig) -> Result<FileOutline, ScanError> {
    let display = path.file_name().map(Path::new).unwrap_or(path);
    Ok(extract_file(path, display, config.continuation)?)
}

/// Scan `config.root` and write the report to `config.output`
pub fn generate_report(config: &ScanConfig, format: OutputFormat) -> Result<OutlineReport, ScanError> {
    let scanner = OutlineScanner::new(config.clone())?;
    let report = scanner.scan()?;

    write_report(&report, format, &config.output)?;
    info!(output = %config.output.display(), "report written");

    Ok(report)
}
