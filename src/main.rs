// src/main.rs
mod utils;
mod extractors;
mod report;
mod sources;
mod storage;

use clap::Parser;
use std::path::PathBuf;
use utils::AppError;
use extractors::{extract_names, NameExtractor};
use report::ReportFormat;
use storage::ReportSink;

/// Command Line Interface for the baby names extractor
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Write each report to <file>.summary instead of stdout
    #[arg(long)]
    summaryfile: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Debug mode - save <file>.annotated.html with matches highlighted
    #[arg(short, long)]
    debug: bool,

    /// Baby names HTML pages to process
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

/// Loads, extracts and renders one source. Output is left to the caller so
/// stdout stays in argument order.
async fn process_file(path: PathBuf, format: ReportFormat, debug: bool) -> Result<String, AppError> {
    let content = sources::load_document(&path).await?;

    if debug {
        let debug_path = storage::with_suffix(&path, ".annotated.html");
        if let Err(e) = utils::html_debug::save_annotated_html(&content, &debug_path) {
            tracing::warn!("Failed to create debug HTML: {}", e);
        }
    }

    let report = match format {
        ReportFormat::Text => {
            let lines = extract_names(&content)?;
            tracing::info!("Extracted {} names for year {} from {}", lines.len() - 1, lines[0], path.display());
            report::render(&lines)
        }
        ReportFormat::Json => {
            let record = NameExtractor::new().extract(&content)?;
            tracing::info!("Extracted {} names for year {} from {}", record.names.len(), record.year, path.display());
            report::render_json(&record)?
        }
    };

    Ok(report)
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting processing for args: {:?}", args);

    let sink = ReportSink::from_flag(args.summaryfile);

    // 3. Process every file concurrently
    let tasks: Vec<_> = args
        .files
        .iter()
        .cloned()
        .map(|path| tokio::spawn(process_file(path, args.format, args.debug)))
        .collect();

    // 4. Emit reports in argument order
    let mut success_count = 0;
    let mut failure_count = 0;

    for (path, task) in args.files.iter().zip(tasks) {
        let outcome = match task.await {
            Ok(result) => result,
            Err(e) => Err(AppError::Processing(format!("task for {} failed: {}", path.display(), e))),
        };

        match outcome.and_then(|text| Ok(sink.save(path, &text)?)) {
            Ok(_) => success_count += 1,
            Err(e) => {
                tracing::error!("Failed to process {}: {}", path.display(), e);
                failure_count += 1;
            }
        }
    }

    tracing::info!("Processing finished. Success: {}, Failures: {}", success_count, failure_count);

    if failure_count > 0 {
        return Err(AppError::Processing(format!("{} of {} files failed", failure_count, args.files.len())));
    }

    Ok(())
}
