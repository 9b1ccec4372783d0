//! tanapaste-importer - Convert Markdown text to Tana Paste format
//!
//! Usage:
//!   tanapaste-importer -f input.md -o output.tana
//!   tanapaste-importer -f input.md --heading-layout flat
//!   tanapaste-importer -d ./notes -o ./tana-notes
//!   cat input.md | tanapaste-importer > output.tana

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser as ClapParser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};

use tanapaste::converter::MarkdownConverter;
use tanapaste::options::{ConvertOptions, HeadingLayout};
use tanapaste::report::ConversionReport;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LayoutArg {
    /// Indent nodes under their enclosing headings
    Nested,
    /// Render headings and body text at the outline root
    Flat,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ReportFormat {
    /// JSON format
    Json,
    /// Human-readable text
    Text,
}

#[derive(ClapParser)]
#[command(
    version,
    about = "Convert Markdown text to Tana Paste format",
    long_about = "Converts Markdown text to Tana Paste, the outline format the Tana\n\
                  note-taking app accepts from the clipboard.\n\n\
                  If no input file is specified, reads from stdin.\n\
                  If no output file is specified, writes to stdout."
)]
struct Cli {
    /// Input markdown file (reads from stdin if not specified)
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Output file (writes to stdout if not specified)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Heading indentation rule
    #[arg(long, value_enum, default_value = "nested")]
    heading_layout: LayoutArg,

    /// Batch convert directory
    #[arg(short, long, value_name = "DIR")]
    directory: Option<PathBuf>,

    /// File pattern for batch conversion
    #[arg(long, default_value = "*.md")]
    pattern: String,

    /// Generate conversion report
    #[arg(long, value_name = "REPORT_FILE")]
    report: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value = "json")]
    report_format: ReportFormat,

    /// Dry run (convert without writing output)
    #[arg(long)]
    dry_run: bool,

    /// Debug log file
    #[arg(long, value_name = "FILE")]
    debuglogfile: Option<PathBuf>,

    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

fn init_logger(filter_level: log::LevelFilter, logfile: Option<PathBuf>) {
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![simplelog::TermLogger::new(
        filter_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )];
    if let Some(filename) = logfile {
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            simplelog::Config::default(),
            File::create(filename).unwrap(),
        ) as Box<dyn simplelog::SharedLogger>)
    }
    simplelog::CombinedLogger::init(loggers).unwrap();
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logger(args.verbose.log_level_filter(), args.debuglogfile.clone());
    let verbose = args.verbose.log_level_filter() >= log::LevelFilter::Debug;

    let heading_layout = match args.heading_layout {
        LayoutArg::Nested => HeadingLayout::Nested,
        LayoutArg::Flat => HeadingLayout::Flat,
    };
    let converter = MarkdownConverter::new(ConvertOptions::new(heading_layout));

    // Handle batch conversion
    if let Some(ref dir) = args.directory {
        return batch_convert(&converter, dir, &args);
    }

    // Single file conversion
    let (input_content, input_name) = match &args.file {
        Some(path) => (
            fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            path.display().to_string(),
        ),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            (buffer, "stdin".to_string())
        }
    };

    eprintln!("Converting {}...", input_name);

    let result = match converter.convert_nonblank(&input_content) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("✗ Conversion failed: {}", e);
            eprintln!("  Copy some Markdown text into {} first.", input_name);
            std::process::exit(1);
        }
    };

    // Show warnings if verbose
    if verbose || !result.report.warnings.is_empty() {
        for warning in &result.report.warnings {
            eprintln!("⚠ {}", warning);
        }
    }

    // Dry run - just show report
    if args.dry_run {
        eprintln!("\n{}", result.report.to_text());
        return Ok(());
    }

    // Write output
    match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(
                fs::File::create(path)
                    .with_context(|| format!("failed to create {}", path.display()))?,
            );
            writer.write_all(result.tana_paste.as_bytes())?;
            writer.flush()?;

            eprintln!(
                "✓ Converted {} to {} (heading layout: {})",
                input_name,
                path.display(),
                heading_layout
            );
            eprintln!(
                "✓ {} lines converted, {} warning(s)",
                result.report.statistics.converted_lines(),
                result.report.warnings.len()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            writer.write_all(result.tana_paste.as_bytes())?;
            writer.flush()?;
        }
    }

    // Write report if requested
    if let Some(report_path) = args.report {
        write_report(&result.report, &report_path, args.report_format)?;
        eprintln!("✓ Report written to {}", report_path.display());
    }

    Ok(())
}

fn batch_convert(converter: &MarkdownConverter, dir: &Path, args: &Cli) -> anyhow::Result<()> {
    let verbose = args.verbose.log_level_filter() >= log::LevelFilter::Debug;
    let output_dir = args
        .output
        .as_ref()
        .context("output directory required for batch conversion")?;

    if !output_dir.exists() {
        fs::create_dir_all(output_dir)?;
    }

    let start_time = Instant::now();
    let mut total_files = 0;
    let mut succeeded = 0;
    let mut failed = 0;
    let mut total_warnings = 0;
    let mut file_reports = Vec::new();

    // Find all matching files
    let pattern = format!("{}/{}", dir.display(), args.pattern);
    let entries: Vec<_> = glob::glob(&pattern)
        .with_context(|| format!("invalid pattern: {}", args.pattern))?
        .filter_map(|e| e.ok())
        .collect();

    for entry in entries {
        total_files += 1;

        let input_path = entry.clone();
        let relative = entry
            .strip_prefix(dir)
            .unwrap_or(&entry)
            .with_extension("tana");
        let output_path = output_dir.join(relative);

        // Create parent directories if needed
        if let Some(parent) = output_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        if verbose {
            eprintln!(
                "Converting {} -> {}",
                input_path.display(),
                output_path.display()
            );
        }

        let input_content = match fs::read_to_string(&input_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("✗ Failed to read {}: {}", input_path.display(), e);
                failed += 1;
                continue;
            }
        };

        let result = match converter.convert_nonblank(&input_content) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("✗ Skipped {}: {}", input_path.display(), e);
                failed += 1;
                continue;
            }
        };

        total_warnings += result.report.warnings.len();

        if !args.dry_run {
            if let Err(e) = fs::write(&output_path, &result.tana_paste) {
                eprintln!("✗ Failed to write {}: {}", output_path.display(), e);
                failed += 1;
                continue;
            }
        }

        succeeded += 1;

        if verbose && !result.report.warnings.is_empty() {
            for warning in &result.report.warnings {
                eprintln!("  ⚠ {}", warning);
            }
        }

        file_reports.push(FileReport {
            input: input_path.display().to_string(),
            output: output_path.display().to_string(),
            status: if result.report.warnings.is_empty() {
                "success".to_string()
            } else {
                "success_with_warnings".to_string()
            },
            warnings: result.report.warnings.len(),
            duration_ms: result.report.duration_ms,
        });
    }

    let duration = start_time.elapsed();

    eprintln!("\nBatch Conversion Summary");
    eprintln!("========================");
    eprintln!("Files processed: {}", total_files);
    eprintln!("Succeeded:       {}", succeeded);
    eprintln!("Failed:          {}", failed);
    eprintln!("Total warnings:  {}", total_warnings);
    eprintln!("Duration:        {:?}", duration);

    if args.dry_run {
        eprintln!("\n(Dry run - no files were written)");
    }

    // Write batch report if requested
    if let Some(report_path) = &args.report {
        let batch_report = BatchReport {
            input_directory: dir.display().to_string(),
            output_directory: output_dir.display().to_string(),
            files_processed: total_files,
            files_succeeded: succeeded,
            files_failed: failed,
            total_warnings,
            duration_ms: duration.as_millis() as u64,
            files: file_reports,
        };

        let report_content = match args.report_format {
            ReportFormat::Json => serde_json::to_string_pretty(&batch_report)?,
            ReportFormat::Text => format_batch_report_text(&batch_report),
        };

        fs::write(report_path, report_content)?;
        eprintln!("✓ Report written to {}", report_path.display());
    }

    if failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn write_report(
    report: &ConversionReport,
    path: &Path,
    format: ReportFormat,
) -> anyhow::Result<()> {
    let content = match format {
        ReportFormat::Json => report.to_json()?,
        ReportFormat::Text => report.to_text(),
    };
    fs::write(path, content)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(())
}

#[derive(serde::Serialize)]
struct BatchReport {
    input_directory: String,
    output_directory: String,
    files_processed: usize,
    files_succeeded: usize,
    files_failed: usize,
    total_warnings: usize,
    duration_ms: u64,
    files: Vec<FileReport>,
}

#[derive(serde::Serialize)]
struct FileReport {
    input: String,
    output: String,
    status: String,
    warnings: usize,
    duration_ms: u64,
}

fn format_batch_report_text(report: &BatchReport) -> String {
    let mut output = String::new();

    output.push_str("Batch Conversion Report\n");
    output.push_str("=======================\n");
    output.push_str(&format!("Input directory:  {}\n", report.input_directory));
    output.push_str(&format!("Output directory: {}\n", report.output_directory));
    output.push_str(&format!("Duration:         {}ms\n\n", report.duration_ms));

    output.push_str("Summary\n");
    output.push_str("-------\n");
    output.push_str(&format!("Files processed:  {}\n", report.files_processed));
    output.push_str(&format!("Succeeded:        {}\n", report.files_succeeded));
    output.push_str(&format!("Failed:           {}\n", report.files_failed));
    output.push_str(&format!("Total warnings:   {}\n\n", report.total_warnings));

    output.push_str("Files\n");
    output.push_str("-----\n");
    for file in &report.files {
        let status_icon = if file.status == "success" { "✓" } else { "⚠" };
        output.push_str(&format!(
            "{} {} -> {} ({} warnings, {}ms)\n",
            status_icon, file.input, file.output, file.warnings, file.duration_ms
        ));
    }

    output
}
