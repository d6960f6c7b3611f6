//! deepcount - asynchronous recursive directory size accumulator.
//!
//! Usage:
//!   deepcount [PATH]             Count a subtree and print the totals
//!   deepcount --format json      Machine-readable output
//!   deepcount --help             Show help
//!
//! Ctrl-C cancels the in-flight count; a cancelled run prints nothing
//! and exits non-zero.

use std::path::Path;
use std::time::SystemTime;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Context, Result, eyre};
use tokio_util::sync::CancellationToken;

use deepcount_core::{CountConfig, CountError, DEFAULT_BATCH_SIZE, RootInfo, SizeSnapshot};
use deepcount_engine::{DeepCounter, query_root};

#[derive(Parser)]
#[command(
    name = "deepcount",
    version,
    about = "Recursive directory size accumulator",
    long_about = "deepcount walks a directory subtree without following symlinks and \
                  reports how many files and directories it holds and how many bytes \
                  they occupy, charging hard-linked files only once."
)]
struct Cli {
    /// Path to count (defaults to current directory)
    #[arg(default_value = ".")]
    path: std::path::PathBuf,

    /// Children fetched per enumeration request
    #[arg(short, long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let path = cli.path.canonicalize().context("Invalid path")?;

    let config = CountConfig::builder()
        .root(&path)
        .batch_size(cli.batch_size)
        .build()
        .map_err(|e| eyre!(e.to_string()))?;

    let info = query_root(&path)
        .await
        .context("Unable to query root entry")?;

    let cancel = CancellationToken::new();
    let counter = DeepCounter::with_token(config, cancel.clone());

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    let snapshot = match counter.count().await {
        Ok(snapshot) => snapshot,
        Err(CountError::Cancelled) => {
            eprintln!("Interrupted.");
            std::process::exit(130);
        }
        Err(err) => return Err(err).context("Count failed"),
    };

    match cli.format {
        OutputFormat::Text => print_text(&path, &info, &snapshot),
        OutputFormat::Json => print_json(&info, &snapshot)?,
    }

    Ok(())
}

/// Print a human-readable summary.
fn print_text(path: &Path, info: &RootInfo, snapshot: &SizeSnapshot) {
    println!("{}", path.display());
    if let Some(modified) = info.modified {
        println!("  modified {}", format_time(modified));
    }

    if info.is_dir() {
        println!(
            "  {}, {} items ({} files, {} directories)",
            format_size(snapshot.total_size),
            snapshot.item_count(),
            snapshot.file_items,
            snapshot.directory_items
        );
        if snapshot.unreadable_items > 0 {
            println!(
                "  {} unreadable director(ies) skipped",
                snapshot.unreadable_items
            );
        }
    } else {
        println!("  {}", format_size(snapshot.total_size));
    }
}

/// Print the result as pretty JSON.
fn print_json(info: &RootInfo, snapshot: &SizeSnapshot) -> Result<()> {
    let out = serde_json::json!({
        "name": info.name.as_str(),
        "directory": info.is_dir(),
        "snapshot": snapshot,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}

/// Format a timestamp in the local timezone.
fn format_time(time: SystemTime) -> String {
    chrono::DateTime::<chrono::Local>::from(time)
        .format("%x %X")
        .to_string()
}
