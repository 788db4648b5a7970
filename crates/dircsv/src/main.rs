//! # dircsv CLI
//!
//! Scans a directory tree and writes one CSV row per file: relative path,
//! file name, extension and extracted text content.
//!
//! ## Commands
//!
//! - `dircsv scan [ROOT] [-o FILE]` - Scan a folder and export the CSV
//! - `dircsv config show|init|path` - Inspect configuration
//!
//! ## Examples
//!
//! ```bash
//! # Scan a project into the default scanresult.csv
//! dircsv scan ~/Projects/app
//!
//! # Pick the destination and keep both inputs for next time
//! dircsv scan ~/Projects/app -o ~/inventory.csv --remember
//!
//! # Re-run with the remembered inputs, sorted, with a JSON summary
//! dircsv --format json scan --sort path
//! ```

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use dircsv_core::{ExportError, ExportOutcome, ScanReport, SortOrder};
use dircsv_csv::export;
use dircsv_scan::Scanner;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod config;
mod prefs;

use config::{config_dir, Config};
use prefs::Remembered;

#[derive(Parser)]
#[command(name = "dircsv")]
#[command(about = "Inventory a directory tree as CSV with extracted text content")]
#[command(version)]
struct Cli {
    /// Path to config file (default: ~/.config/dircsv/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum SortArg {
    /// Walker order
    Discovery,
    /// By relative path
    Path,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Discovery => SortOrder::Discovery,
            SortArg::Path => SortOrder::RelativePath,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a folder and export the CSV
    Scan {
        /// Folder to scan (default: the remembered folder)
        root: Option<PathBuf>,

        /// CSV destination (default: remembered file, then [output] default_file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Remember folder and destination for the next run
        #[arg(long)]
        remember: bool,

        /// Record order, overriding [scan] order
        #[arg(long)]
        sort: Option<SortArg>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Print sample configuration file
    Init,
    /// Show config file path
    Path,
}

/// Output structure for a finished scan.
#[derive(Serialize)]
struct ScanOutput {
    root: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    csv: Option<String>,
    rows: usize,
    skipped: usize,
    errors: usize,
    cancelled: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = if let Some(ref path) = cli.config {
        Config::load_from(Some(path.clone()))
            .context(format!("Failed to load config from {}", path.display()))?
    } else {
        Config::load().context("Failed to load config")?
    };

    // Setup logging
    let configured = config.logging.level.parse::<Level>().ok();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        configured.unwrap_or(Level::INFO)
    };

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    if configured.is_none() {
        warn!("Unknown log level {:?} in config, using info", config.logging.level);
    }

    match cli.command {
        Commands::Scan {
            root,
            output,
            remember,
            sort,
        } => {
            let prefs_path = config_dir().map(|dir| Remembered::path_in(&dir));
            let remembered = prefs_path
                .as_deref()
                .map(Remembered::load)
                .unwrap_or_default();

            let root = root
                .or(remembered.folder)
                .ok_or_else(|| anyhow!("Missing input: give a folder to scan"))?;
            let destination = output
                .or(remembered.csv)
                .unwrap_or_else(|| config.output.default_file.clone());

            if remember {
                match prefs_path {
                    Some(ref path) => {
                        Remembered {
                            folder: Some(root.clone()),
                            csv: Some(destination.clone()),
                        }
                        .save(path)?;
                        info!("Inputs remembered in {:?}", path);
                    }
                    None => warn!("Could not determine config directory, inputs not remembered"),
                }
            }

            let mut options = config.scan.options();
            if let Some(sort) = sort {
                options.order = sort.into();
            }

            let report = run_scan(Scanner::with_options(options), root).await?;
            let outcome = export_report(&report, &destination)?;
            print_summary(&report, &outcome, cli.format)?;
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => match cli.format {
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&config)
                            .context("Failed to serialize config")?
                    );
                }
                OutputFormat::Text => {
                    println!(
                        "{}",
                        toml::to_string_pretty(&config).context("Failed to serialize config")?
                    );
                }
            },
            ConfigAction::Init => {
                println!("{}", Config::sample_toml());
            }
            ConfigAction::Path => {
                if let Some(path) = cli.config.or_else(Config::config_path) {
                    println!("{}", path.display());
                } else {
                    println!("Could not determine config directory");
                }
            }
        },
    }

    Ok(())
}

/// Run the blocking scan off the async runtime. Ctrl+C stops it between files
/// and the partial report is still returned.
async fn run_scan(scanner: Scanner, root: PathBuf) -> Result<ScanReport> {
    let cancel = Arc::new(AtomicBool::new(false));
    let scanner = scanner.with_cancel_flag(Arc::clone(&cancel));
    let mut task = tokio::task::spawn_blocking(move || scanner.scan(&root));

    let joined = tokio::select! {
        joined = &mut task => joined,
        _ = tokio::signal::ctrl_c() => {
            warn!("Interrupted, stopping after the current file");
            cancel.store(true, Ordering::Relaxed);
            task.await
        }
    };

    let report = joined.context("Scan task failed")??;
    for error in &report.errors {
        warn!("Not scanned: {}", error.message);
    }
    Ok(report)
}

fn export_report(report: &ScanReport, destination: &Path) -> Result<ExportOutcome> {
    match export(&report.records, destination) {
        Ok(outcome) => Ok(outcome),
        Err(ExportError::Io(e)) if e.kind() == std::io::ErrorKind::PermissionDenied => bail!(
            "No write access to {}. Is the file open in another program?",
            destination.display()
        ),
        Err(e) => {
            Err(e).with_context(|| format!("Failed to write CSV file {}", destination.display()))
        }
    }
}

fn print_summary(report: &ScanReport, outcome: &ExportOutcome, format: OutputFormat) -> Result<()> {
    let written = match outcome {
        ExportOutcome::Written { path, rows } => Some((path, *rows)),
        ExportOutcome::NothingToExport => None,
    };

    match format {
        OutputFormat::Json => {
            let output = ScanOutput {
                root: report.root.to_string_lossy().to_string(),
                csv: written.map(|(path, _)| path.to_string_lossy().to_string()),
                rows: written.map_or(0, |(_, rows)| rows),
                skipped: report.skipped.len(),
                errors: report.errors.len(),
                cancelled: report.cancelled,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            if report.cancelled {
                println!("Scan cancelled, exporting what was found so far.");
            }
            match written {
                Some((path, rows)) => println!("Exported {rows} files to {}", path.display()),
                None => println!("No files found to export."),
            }
            if !report.skipped.is_empty() {
                println!("  Skipped: {}", report.skipped.len());
            }
            if !report.errors.is_empty() {
                println!("  Unreadable entries: {}", report.errors.len());
            }
        }
    }
    Ok(())
}
