//! Analyzer configuration loaded from an optional TOML file
//!
//! # Example quizscope.toml
//!
//! ```toml
//! report_top_wrong_answers = 5
//! chart_top_wrong_answers = 10
//! hardest_question_charts = 3
//! csv_file = "quiz_analysis.csv"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunables for reporting, charting and export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Wrong answers listed per question in the text and JSON reports
    pub report_top_wrong_answers: usize,

    /// Wrong answers drawn per question in wrong-answer charts
    pub chart_top_wrong_answers: usize,

    /// How many of the hardest questions are considered for wrong-answer charts
    pub hardest_question_charts: usize,

    /// Answers longer than this are truncated in chart labels
    pub answer_label_max_chars: usize,

    /// Chart image size in pixels
    pub chart_width: u32,
    pub chart_height: u32,

    /// File name of the flattened CSV export, relative to the output directory
    pub csv_file: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            report_top_wrong_answers: 5,
            chart_top_wrong_answers: 10,
            hardest_question_charts: 3,
            answer_label_max_chars: 30,
            chart_width: 1200,
            chart_height: 600,
            csv_file: "quiz_analysis.csv".to_string(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Load configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would produce empty reports or zero-sized charts
    pub fn validate(&self) -> Result<()> {
        if self.report_top_wrong_answers == 0 {
            anyhow::bail!("report_top_wrong_answers must be >= 1");
        }
        if self.chart_top_wrong_answers == 0 {
            anyhow::bail!("chart_top_wrong_answers must be >= 1");
        }
        if self.chart_width == 0 || self.chart_height == 0 {
            anyhow::bail!(
                "chart dimensions must be non-zero (got {}x{})",
                self.chart_width,
                self.chart_height
            );
        }
        if self.csv_file.trim().is_empty() {
            anyhow::bail!("csv_file must not be empty");
        }
        Ok(())
    }
}
