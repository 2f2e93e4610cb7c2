//! CLI entry point for the grade tile renderer.
//!
//! Renders a letter-grade tile from a host query result and configuration,
//! classifies single values, and prints the settings manifest.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use grade_tile::{
    output::{append_record, print_json, print_pretty},
    parser::{load_config, load_response},
    record::RenderRecord,
    render::{Rendered, render},
    tile::{RawConfig, classify, options::manifest, resolve},
};
use std::ffi::OsStr;
use std::path::PathBuf;
use tracing::{error, info, info_span};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DEFAULT_LOG_FILE: &str = "logs/grade_tile.log";

#[derive(Parser)]
#[command(name = "grade_tile")]
#[command(about = "Render a letter-grade tile from a single measure", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a tile from a query result JSON file
    Render {
        /// Query result JSON (fields + data rows)
        #[arg(short, long, value_name = "FILE")]
        data: String,

        /// Tile configuration JSON; defaults apply to anything left out
        #[arg(short, long, value_name = "FILE")]
        config: Option<String>,

        /// Optional: CSV file to append a render record to
        #[arg(short, long)]
        output: Option<String>,

        /// Print the full view as JSON instead of a summary
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Classify a single value into a letter grade
    Classify {
        /// Score to classify
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Tile configuration JSON supplying the grade colors
        #[arg(short, long, value_name = "FILE")]
        config: Option<String>,
    },
    /// Print the recognized options with their defaults
    Options,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let _log_guard = init_tracing()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            data,
            config,
            output,
            json,
        } => {
            let _span = info_span!("render", data = %data).entered();

            let raw = read_config(config.as_deref())?;
            let response = load_response(&data)
                .with_context(|| format!("Failed to load query result from {}", data))?;

            match render(&raw, &response) {
                Ok(Rendered { measurement, view }) => {
                    if json {
                        print_json(&view)?;
                    } else {
                        print_pretty(&view);
                    }

                    if let Some(path) = &output {
                        let record = RenderRecord::from_view(&view)
                            .with_measure(&measurement.measure, measurement.substituted);
                        append_record(path, &record)?;
                    }
                }
                Err(e) => {
                    error!(error = %e, kind = e.kind(), "Render failed");
                    if let Some(path) = &output {
                        append_record(path, &RenderRecord::from_error(&e))?;
                    }
                    return Err(e).context("Failed to render grade tile");
                }
            }
        }
        Commands::Classify { value, config } => {
            let resolved = resolve(&read_config(config.as_deref())?);
            let grade = classify(value, &resolved.palette)?;

            info!(value, letter = grade.letter, color = %grade.color, "Classified");
        }
        Commands::Options => {
            print_json(&manifest())?;
        }
    }

    Ok(())
}

/// Installs a colored stderr layer (`RUST_LOG`, default `info`) and a JSON
/// layer (`RUST_LOG_JSON`, default `debug`) writing to a daily rolling file
/// at `LOG_FILE_PATH`. The returned guard flushes the file writer on drop.
fn init_tracing() -> Result<WorkerGuard> {
    let log_file_path =
        PathBuf::from(std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| DEFAULT_LOG_FILE.into()));
    let log_dir = match log_file_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("logs"),
    };
    let log_file_name = log_file_path
        .file_name()
        .map(OsStr::to_os_string)
        .unwrap_or_else(|| "grade_tile.log".into());

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(log_dir, log_file_name));

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(file_writer)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .try_init()?;

    Ok(guard)
}

fn read_config(path: Option<&str>) -> Result<RawConfig> {
    match path {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load tile configuration from {}", path)),
        None => Ok(RawConfig::default()),
    }
}
