//! mta-outlines CLI
//!
//! Writes a compact structural outline of every Python file in a directory
//! to `outlines.txt`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use mta_outlines_core::{
    format_output, generate_report, scan_file, ContinuationRule, OutlineReport, OutlineScanner,
    OutputFormat, ScanConfig, DEFAULT_OUTPUT,
};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Compact structural outlines of Python sources
#[derive(Parser)]
#[command(name = "mta-outlines")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Outline classes, methods, assignments and imports of Python files")]
#[command(long_about = r#"
mta-outlines: Compact Python Outlines

Scans a directory for .py files and writes one indented outline per file to
outlines.txt. Lines are classified by simple prefix tests, not parsed, so
the outline is an approximation meant for passing code structure to tools
with a small context window.

Output formats:
  - text (default) - Indented outline, one block per file
  - json / yaml    - Full report with line numbers and statistics
  - ansi           - Colored outline for the terminal
  - summary        - Entry counts only

Examples:
  mta-outlines                          # Outline ./*.py into ./outlines.txt
  mta-outlines src --recursive --sort   # Whole tree, sorted by path
  mta-outlines --exclude outline.py     # Leave a file out
  mta-outlines --format ansi --stdout   # Print a colored outline
  mta-outlines file app/models.py       # Single file outline
"#)]
pub struct Args {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Report file, relative to the working directory
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormatArg::Text)]
    pub format: OutputFormatArg,

    /// Print the report instead of writing the report file
    #[arg(long)]
    pub stdout: bool,

    /// File names to leave out (can be specified multiple times)
    #[arg(long, action = clap::ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Ignore patterns (can be specified multiple times)
    #[arg(long, action = clap::ArgAction::Append)]
    pub ignore: Vec<String>,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Sort files by path instead of directory listing order
    #[arg(long)]
    pub sort: bool,

    /// Skip unreadable files instead of aborting
    #[arg(long)]
    pub keep_going: bool,

    /// Treat every assignment line not ending in a closing bracket as
    /// continuing on the next line
    #[arg(long)]
    pub legacy_continuation: bool,

    /// Number of threads for extraction (default: auto)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the outline of a single file
    File {
        /// Path to file
        path: PathBuf,
    },
}

/// Output format argument
#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormatArg {
    Text,
    Json,
    Yaml,
    Ansi,
    Summary,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
            OutputFormatArg::Ansi => OutputFormat::Ansi,
            OutputFormatArg::Summary => OutputFormat::Summary,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match &args.command {
        Some(Commands::File { path }) => run_file(path, &args),
        None => run_scan(&args.path, &args),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "mta_outlines=debug,mta_outlines_core=debug"
    } else {
        "mta_outlines=info,mta_outlines_core=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Build scan configuration from args
fn build_config(path: &Path, args: &Args) -> ScanConfig {
    let continuation = if args.legacy_continuation {
        ContinuationRule::Legacy
    } else {
        ContinuationRule::OpenBracket
    };

    let mut config = ScanConfig::new(path.to_path_buf())
        .with_output(args.output.clone())
        .with_exclude(args.exclude.clone())
        .with_ignore_patterns(args.ignore.clone())
        .with_recursive(args.recursive)
        .with_sort(args.sort)
        .with_keep_going(args.keep_going)
        .with_continuation(continuation);

    if let Some(threads) = args.threads {
        config = config.with_threads(threads);
    }

    debug!(?config, "built scan configuration");
    config
}

fn spinner(verbose: bool, message: &'static str) -> Result<Option<ProgressBar>> {
    if !verbose || !atty::is(atty::Stream::Stderr) {
        return Ok(None);
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("Invalid spinner template")?,
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message);
    Ok(Some(pb))
}

fn run_scan(path: &Path, args: &Args) -> Result<()> {
    if !path.is_dir() {
        anyhow::bail!("Not a directory: {}", path.display());
    }

    let config = build_config(path, args);
    let format: OutputFormat = args.format.clone().into();
    let pb = spinner(args.verbose, "Outlining Python files...")?;

    let report = if args.stdout {
        let scanner = OutlineScanner::new(config).context("Failed to create scanner")?;
        let report = scanner.scan().context("Failed to scan directory")?;
        print!("{}", render(&report, format)?);
        info!(format = ?format, "report printed to stdout");
        report
    } else {
        generate_report(&config, format)
            .with_context(|| format!("Failed to write {}", config.output.display()))?
    };

    if let Some(ref pb) = pb {
        pb.finish_with_message(format!(
            "Outlined {} files in {}ms",
            report.stats.total_files, report.metadata.scan_duration_ms
        ));
    }

    Ok(())
}

fn run_file(path: &Path, args: &Args) -> Result<()> {
    let config = build_config(path, args);

    let outline = scan_file(path, &config)
        .with_context(|| format!("Failed to outline {}", path.display()))?;
    info!(path = %path.display(), entries = outline.entries.len(), "outlined file");

    let format: OutputFormat = args.format.clone().into();
    print!("{}", render(&OutlineReport::single(outline), format)?);

    Ok(())
}

fn render(report: &OutlineReport, format: OutputFormat) -> Result<String> {
    format_output(report, format).context("Failed to format report")
}
