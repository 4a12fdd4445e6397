use anyhow::{Context, Result};
use clap::Parser;
use quizscope::charts::{self, ChartError};
use quizscope::cli::{self, Cli, ExportChoice, OutputFormat};
use quizscope::config::AnalyzerConfig;
use quizscope::csv_output::CsvExport;
use quizscope::json_output::JsonReport;
use quizscope::loader::{self, QuestionKey};
use quizscope::record::AttemptRecord;
use quizscope::report::TextReport;
use quizscope::stats::QuizAnalysis;
use std::io::{self, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn banner(title: &str) {
    println!();
    println!("{}", "=".repeat(80));
    println!("{}", title);
    println!("{}", "=".repeat(80));
    println!();
}

/// Print the report in the requested format
fn print_report(
    format: OutputFormat,
    analysis: &QuizAnalysis,
    key: &QuestionKey,
    config: &AnalyzerConfig,
) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => {
            TextReport::new(analysis, key, config.report_top_wrong_answers).write_to(&mut out)?
        }
        OutputFormat::Json => {
            let json = JsonReport::new(analysis, key, config.report_top_wrong_answers)
                .to_json()
                .context("Failed to serialize JSON report")?;
            writeln!(out, "{}", json)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Render charts; failures are warnings, never fatal
fn generate_charts(
    analysis: &QuizAnalysis,
    key: &QuestionKey,
    config: &AnalyzerConfig,
    out_dir: &Path,
    verbose: bool,
) {
    if verbose {
        banner("GENERATING VISUALIZATIONS");
    }

    match charts::render_all(analysis, key, config, out_dir) {
        Ok(written) => {
            if verbose {
                for path in &written {
                    println!("✅ Saved visualization: {}", path.display());
                }
                println!("\n✅ All visualizations generated!");
            }
        }
        Err(ChartError::Unavailable) => {
            eprintln!("⚠️  Chart support not available. Skipping visualizations.");
            eprintln!("Rebuild with: cargo install quizscope --features charts");
            tracing::warn!("charts feature disabled");
        }
        Err(e) => {
            eprintln!("⚠️  {}. Skipping remaining visualizations.", e);
            tracing::warn!(error = %e, "chart rendering failed");
        }
    }
}

fn export_csv(records: &[AttemptRecord], path: &Path, verbose: bool) -> Result<()> {
    CsvExport::new(records)
        .write_to_file(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    if verbose {
        println!("✅ Exported to {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = match &args.config {
        Some(path) => AnalyzerConfig::from_file(path)?,
        None => AnalyzerConfig::default(),
    };

    // Progress lines and the prompt would corrupt the JSON document on stdout
    let text_mode = args.format == OutputFormat::Text;

    if text_mode {
        println!("Loading logs from {}...", args.log_file.display());
    }
    let records = loader::load_attempts(&args.log_file)?;

    if records.is_empty() {
        if text_mode {
            println!("No logs found!");
        } else {
            eprintln!("No logs found!");
            let analysis = QuizAnalysis::from_records(&records);
            print_report(args.format, &analysis, &QuestionKey::new(), &config)?;
        }
        return Ok(());
    }

    if text_mode {
        println!("Loaded {} log entries.\n", records.len());
    }

    let key = loader::load_question_key(&args.questions);
    let analysis = QuizAnalysis::from_records(&records);

    print_report(args.format, &analysis, &key, &config)?;

    let wants_export = args.export_choice() != ExportChoice::Skip;
    if !args.no_charts || wants_export {
        std::fs::create_dir_all(&args.output_dir).with_context(|| {
            format!(
                "Failed to create output directory {}",
                args.output_dir.display()
            )
        })?;
    }

    if !args.no_charts {
        generate_charts(&analysis, &key, &config, &args.output_dir, text_mode);
    }

    let csv_path = args.output_dir.join(&config.csv_file);
    let export = match args.export_choice() {
        ExportChoice::Export => true,
        ExportChoice::Skip => false,
        ExportChoice::Ask if !text_mode => {
            tracing::debug!("no export prompt in JSON mode");
            false
        }
        ExportChoice::Ask => {
            println!("\n{}", "=".repeat(80));
            let stdin = io::stdin();
            let stdout = io::stdout();
            cli::confirm("Export raw data to CSV?", &mut stdin.lock(), &mut stdout.lock())?
        }
    };

    if export {
        export_csv(&records, &csv_path, text_mode)?;
    }

    Ok(())
}
