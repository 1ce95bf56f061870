//! Batch processing command for multiple recognition output files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error};

use recr_core::models::ScanOutput;
use recr_core::ocr::RecognitionOutput;
use recr_core::receipt::ReceiptParser;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct BatchResult {
    path: PathBuf,
    output: Option<ScanOutput>,
    error: Option<String>,
}

pub async fn run(args: BatchArgs) -> anyhow::Result<()> {
    let start = Instant::now();

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("json"))
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let parser = ReceiptParser::new();
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let result = match process_single_file(&path, &parser, &args) {
            Ok(output) => BatchResult {
                path,
                output: Some(output),
                error: None,
            },
            Err(e) => {
                error!("Failed to process {}: {}", path.display(), e);
                if !args.continue_on_error {
                    pb.finish_and_clear();
                    return Err(e);
                }
                BatchResult {
                    path,
                    output: None,
                    error: Some(e.to_string()),
                }
            }
        };

        results.push(result);
        pb.inc(1);
    }

    pb.finish_and_clear();

    if args.summary {
        let summary_path = args
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("summary.csv");
        write_summary(&results, &summary_path)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let processed = results.iter().filter(|r| r.output.is_some()).count();
    let failed = results.len() - processed;
    println!(
        "{} Processed {} files ({} failed) in {:.1}s",
        style("✓").green(),
        processed,
        failed,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn process_single_file(
    path: &PathBuf,
    parser: &ReceiptParser,
    args: &BatchArgs,
) -> anyhow::Result<ScanOutput> {
    debug!("Processing {}", path.display());

    let recognition = RecognitionOutput::from_json_file(path)?;
    let output = parser.parse(&recognition);

    if let Some(ref output_dir) = args.output_dir {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("receipt");
        let out_path = output_dir.join(format!("{stem}.out.json"));
        fs::write(&out_path, serde_json::to_string_pretty(&output)?)?;
    }

    Ok(output)
}

fn write_summary(results: &[BatchResult], path: &PathBuf) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record([
        "file",
        "store_name",
        "date",
        "total",
        "items",
        "confidence",
        "error",
    ])?;

    for result in results {
        let file = result.path.display().to_string();
        match &result.output {
            Some(output) => {
                let receipt = &output.receipt;
                let item_count = receipt.items.len().to_string();
                let confidence = format!("{:.2}", output.confidence);
                writer.write_record([
                    file.as_str(),
                    receipt.store_name.as_str(),
                    receipt.date.as_str(),
                    receipt.total.as_str(),
                    item_count.as_str(),
                    confidence.as_str(),
                    "",
                ])?;
            }
            None => {
                writer.write_record([
                    file.as_str(),
                    "",
                    "",
                    "",
                    "",
                    "",
                    result.error.as_deref().unwrap_or("unknown error"),
                ])?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}
