//! CLI entry point for the tabular profiling engine.

use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};
use scout_profiling::reporting::{ProfileDocument, ProfileReportWriter};
use scout_profiling::utils::truncate_str;
use scout_profiling::{
    AnalysisConfig, AnalysisReport, DatasetAnalyzer, DelimitedParser, InputFormat, parse_input,
};
use std::path::{Path, PathBuf};
use tracing::info;

/// CLI-compatible input format enum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliFormat {
    /// Comma-separated values
    Csv,
    /// Tab-separated values
    Tsv,
}

impl From<CliFormat> for InputFormat {
    fn from(cli: CliFormat) -> Self {
        match cli {
            CliFormat::Csv => InputFormat::Csv,
            CliFormat::Tsv => InputFormat::Tsv,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    author = "Data Scout Team",
    version,
    about = "Statistical profiling for tabular datasets",
    long_about = "Profiles a delimited dataset: column types, missing values,\n\
                  duplicate rows, IQR outliers, distributions, and a composite\n\
                  data-quality score.\n\n\
                  EXAMPLES:\n  \
                  # Profile a CSV and print a summary\n  \
                  scout-profiling -i data.csv\n\n  \
                  # Machine-readable output\n  \
                  scout-profiling -i data.csv --json | jq .quality_score\n\n  \
                  # Write a JSON report file\n  \
                  scout-profiling -i data.csv --emit-report -o reports/"
)]
struct Args {
    /// Path to the delimited file to profile
    #[arg(short, long)]
    input: String,

    /// Output directory for emitted reports
    #[arg(short, long, default_value = "./outputs")]
    output: String,

    /// Custom report file name (without extension)
    ///
    /// If not specified, uses "<input_name>_profile"
    #[arg(long)]
    output_name: Option<String>,

    /// Input format override
    ///
    /// If not specified, the format is inferred from the file extension
    #[arg(long, value_enum)]
    format: Option<CliFormat>,

    /// Field delimiter override (single character)
    ///
    /// Takes precedence over the format's default delimiter
    #[arg(long)]
    delimiter: Option<char>,

    /// Number of histogram bins for numeric columns
    #[arg(long, default_value = "20")]
    bins: usize,

    /// IQR multiplier for outlier bounds
    #[arg(long, default_value = "1.5")]
    iqr_multiplier: f64,

    /// Number of leading non-empty values sampled for type inference
    #[arg(long, default_value = "100")]
    sample_size: usize,

    /// Maximum input size in megabytes
    #[arg(long, default_value = "50")]
    max_size_mb: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show errors and the final summary)
    #[arg(short, long)]
    quiet: bool,

    /// Output the full report as JSON to stdout instead of a summary
    ///
    /// Disables all logging; only the JSON report is written to stdout.
    /// Useful for piping to other tools: `... --json | jq .quality_score`
    #[arg(long)]
    json: bool,

    /// Write a JSON report to the output directory
    ///
    /// The report will be saved as <input_name>_profile.json
    #[arg(short = 'r', long)]
    emit_report: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    if !Path::new(&args.input).exists() {
        return Err(anyhow!("Input file not found: {}", args.input));
    }

    let config = AnalysisConfig::builder()
        .histogram_bins(args.bins)
        .iqr_multiplier(args.iqr_multiplier)
        .type_sample_size(args.sample_size)
        .max_input_bytes(args.max_size_mb * 1024 * 1024)
        .build()?;

    info!("Loading dataset from: {}", args.input);
    let raw = std::fs::read_to_string(&args.input)?;
    let dataset = match args.delimiter {
        Some(delimiter) => DelimitedParser::new(delimiter)
            .with_max_input_bytes(config.max_input_bytes)
            .parse_str(&raw)?,
        None => parse_input(&raw, resolve_format(&args)?, &config)?,
    };
    info!(
        "Dataset loaded: {} rows x {} columns",
        dataset.row_count(),
        dataset.column_count()
    );

    let report = DatasetAnalyzer::new(config).analyze(&dataset)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if args.emit_report {
        let stem = extract_file_stem(&args.input);
        let writer = ProfileReportWriter::new(PathBuf::from(&args.output), args.output_name.clone());
        let document = ProfileDocument::new(&args.input, report.clone());
        let path = writer.write_report(&document, &stem)?;
        info!("Report written to: {}", path.display());
    }

    print_summary(&args.input, &report);

    Ok(())
}

/// Resolve the input format from the override flag or the file extension.
fn resolve_format(args: &Args) -> Result<InputFormat> {
    if let Some(format) = args.format {
        return Ok(format.into());
    }

    let extension = Path::new(&args.input)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    Ok(InputFormat::from_extension(extension)?)
}

/// Extract the file stem (name without extension) from a path.
fn extract_file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("output")
        .to_string()
}

/// Print a human-readable summary of the analysis results.
///
/// Note: this uses `println!` intentionally for user-facing CLI output;
/// unlike logging it should always be visible regardless of log level.
fn print_summary(input: &str, report: &AnalysisReport) {
    println!();
    println!("{}", "=".repeat(80));
    println!("DATASET PROFILE");
    println!("{}", "=".repeat(80));
    println!();

    println!(
        "Input: {} ({} rows x {} columns)",
        input, report.summary.row_count, report.summary.column_count
    );
    println!("Quality Score: {:.1}/100", report.quality_score);
    println!(
        "Missing Values: {} cells ({:.1}%)",
        report.summary.missing_total, report.summary.missing_percentage
    );
    println!();

    println!("COLUMN OVERVIEW");
    println!("{}", "-".repeat(70));
    println!(
        "{:<20} {:<12} {:<10} {:<10} {:<15}",
        "Column", "Type", "Missing", "Unique", "Distribution"
    );
    println!("{}", "-".repeat(70));

    for feature in &report.features {
        let distribution = if feature.distribution.is_histogram() {
            "histogram"
        } else {
            "frequency"
        };
        println!(
            "{:<20} {:<12} {:<10} {:<10} {:<15}",
            truncate_str(&feature.name, 19),
            feature.column_type.name(),
            feature.null_count,
            feature.unique_count,
            distribution
        );
    }
    println!();

    println!("DUPLICATES");
    println!("{}", "-".repeat(40));
    if report.duplicates.count == 0 {
        println!("  No duplicate rows found");
    } else {
        println!(
            "  {} duplicate rows ({:.1}%)",
            report.duplicates.count, report.duplicates.percentage
        );
    }
    println!();

    println!("OUTLIERS");
    println!("{}", "-".repeat(40));
    if report.outliers.affected_columns.is_empty() {
        println!("  No outliers detected");
    } else {
        for column in &report.outliers.affected_columns {
            if let Some(rows) = report.outliers.by_column.get(column) {
                println!("  {}: {} rows flagged", column, rows.len());
            }
        }
        println!("  Total: {} flags", report.outliers.total_count);
    }
    println!();

    println!("Use --json for machine-readable output");
    println!("Use --emit-report to save a JSON report file");
    println!("{}", "=".repeat(80));
}
