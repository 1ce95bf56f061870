//! Process command - extract a structured record from one recognition output.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use recr_core::error::RecrError;
use recr_core::models::ScanOutput;
use recr_core::ocr::RecognitionOutput;
use recr_core::receipt::ReceiptParser;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input recognition output (JSON token stream)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show aggregate recognition confidence and timing
    #[arg(long)]
    show_confidence: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        return Err(RecrError::NoInputProvided.into());
    }

    info!("Processing file: {}", args.input.display());

    let recognition = RecognitionOutput::from_json_file(&args.input)?;
    let output = ReceiptParser::new().parse(&recognition);

    let rendered = format_output(&output, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &rendered)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{rendered}");
    }

    if args.show_confidence {
        println!();
        println!(
            "{} Recognition confidence: {:.2}%",
            style("ℹ").blue(),
            output.confidence
        );
        println!(
            "{} Processing time: {}ms",
            style("ℹ").blue(),
            output.processing_time_ms
        );
    }

    Ok(())
}

/// Render the extraction output in the requested format.
pub fn format_output(output: &ScanOutput, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(output)?),
        OutputFormat::Text => Ok(text_summary(output)),
    }
}

fn text_summary(output: &ScanOutput) -> String {
    let receipt = &output.receipt;
    let mut out = String::new();

    out.push_str(&format!("Store:    {}\n", receipt.store_name));
    out.push_str(&format!("Date:     {}\n", receipt.date));
    out.push_str(&format!("Time:     {}\n", receipt.time));
    out.push_str("Items:\n");
    for item in &receipt.items {
        out.push_str(&format!(
            "  {} | {} | {}\n",
            item.name, item.quantity, item.price
        ));
    }
    out.push_str(&format!("Subtotal: {}\n", receipt.subtotal));
    out.push_str(&format!("Tax:      {}\n", receipt.tax));
    out.push_str(&format!("Total:    {}\n", receipt.total));
    out.push_str(&format!("Payment:  {}\n", receipt.payment));
    out.push_str(&format!("Card:     {}\n", receipt.card));
    out.push_str(&format!("Words:    {}\n", output.word_count));

    out
}
