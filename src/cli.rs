//! CLI argument parsing for quizscope

use crate::loader::{DEFAULT_LOG_FILE, DEFAULT_QUESTION_FILE};
use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Output format for the analysis report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text report (default)
    Text,
    /// JSON document for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "quizscope")]
#[command(version)]
#[command(about = "Analyze quiz attempt logs: difficulty, failure points, retries, charts", long_about = None)]
pub struct Cli {
    /// Newline-delimited JSON attempt log
    #[arg(value_name = "LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Question file providing the correct answer for each question id
    #[arg(short = 'q', long = "questions", value_name = "PATH", default_value = DEFAULT_QUESTION_FILE)]
    pub questions: PathBuf,

    /// TOML file overriding report, chart and export settings
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report format written to stdout
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Directory for chart images and the CSV export
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Skip chart generation
    #[arg(long = "no-charts")]
    pub no_charts: bool,

    /// Export the flattened CSV without prompting
    #[arg(long = "export-csv", conflicts_with = "no_export")]
    pub export_csv: bool,

    /// Skip the CSV export without prompting
    #[arg(long = "no-export")]
    pub no_export: bool,

    /// Enable debug tracing on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

/// What to do about the CSV export once the report is done
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportChoice {
    Export,
    Skip,
    Ask,
}

impl Cli {
    pub fn export_choice(&self) -> ExportChoice {
        if self.export_csv {
            ExportChoice::Export
        } else if self.no_export {
            ExportChoice::Skip
        } else {
            ExportChoice::Ask
        }
    }
}

/// Ask a yes/no question; only `y` or `Y` answers yes, end of input answers no
pub fn confirm<R: BufRead, W: Write>(question: &str, input: &mut R, output: &mut W) -> io::Result<bool> {
    write!(output, "{} (y/n): ", question)?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        writeln!(output)?;
        return Ok(false);
    }
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
