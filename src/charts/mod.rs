//! Chart images for the analysis
//!
//! One PNG per aggregator plus wrong-answer charts for the hardest questions.
//! Rendering needs the `charts` cargo feature (on by default); without it
//! [`render_all`] returns [`ChartError::Unavailable`] and callers skip charts.

#[cfg(feature = "charts")]
mod render;

use crate::config::AnalyzerConfig;
use crate::loader::QuestionKey;
use crate::record::QuestionId;
use crate::stats::QuizAnalysis;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DIFFICULTY_CHART: &str = "question_difficulty.png";
pub const COMPLETION_CHART: &str = "completion_stats.png";
pub const FAILURE_POINTS_CHART: &str = "failure_points.png";
pub const RETRY_CHART: &str = "retry_distribution.png";

/// Whether this build can render charts
pub const CHARTS_ENABLED: bool = cfg!(feature = "charts");

/// Errors that can occur while rendering charts
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("chart support not compiled in (rebuild with `--features charts`)")]
    Unavailable,

    #[error("Failed to render {}: {message}", path.display())]
    Render { path: PathBuf, message: String },
}

/// File name of the wrong-answer chart for a question
pub fn wrong_answers_chart(question_id: QuestionId) -> String {
    format!("wrong_answers_q{}.png", question_id)
}

/// Shorten an answer for use as an axis label
///
/// Counts characters, not bytes, so multi-byte answers are never split.
pub fn truncate_label(answer: &str, max_chars: usize) -> String {
    if answer.chars().count() > max_chars {
        let head: String = answer.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        answer.to_string()
    }
}

/// Success-rate band used to color difficulty bars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyBand {
    /// below 50%
    Hard,
    /// 50% up to 75%
    Medium,
    /// 75% and above
    Easy,
}

impl DifficultyBand {
    pub fn for_rate(success_rate: f64) -> Self {
        if success_rate < 50.0 {
            DifficultyBand::Hard
        } else if success_rate < 75.0 {
            DifficultyBand::Medium
        } else {
            DifficultyBand::Easy
        }
    }
}

/// Render every chart into `out_dir`, returning the files written
///
/// Stops at the first chart that fails to render.
#[cfg(feature = "charts")]
pub fn render_all(
    analysis: &QuizAnalysis,
    key: &QuestionKey,
    config: &AnalyzerConfig,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, ChartError> {
    render::render_all(analysis, key, config, out_dir)
}

#[cfg(not(feature = "charts"))]
pub fn render_all(
    _analysis: &QuizAnalysis,
    _key: &QuestionKey,
    _config: &AnalyzerConfig,
    _out_dir: &Path,
) -> Result<Vec<PathBuf>, ChartError> {
    Err(ChartError::Unavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_label_short() {
        assert_eq!(truncate_label("Paris", 30), "Paris");
        assert_eq!(truncate_label(&"a".repeat(30), 30), "a".repeat(30));
    }

    #[test]
    fn test_truncate_label_long() {
        let long = "a".repeat(31);
        assert_eq!(truncate_label(&long, 30), format!("{}...", "a".repeat(30)));
    }

    #[test]
    fn test_truncate_label_multibyte() {
        assert_eq!(truncate_label("日本語のこたえ", 3), "日本語...");
    }

    #[test]
    fn test_difficulty_bands() {
        assert_eq!(DifficultyBand::for_rate(0.0), DifficultyBand::Hard);
        assert_eq!(DifficultyBand::for_rate(49.9), DifficultyBand::Hard);
        assert_eq!(DifficultyBand::for_rate(50.0), DifficultyBand::Medium);
        assert_eq!(DifficultyBand::for_rate(74.9), DifficultyBand::Medium);
        assert_eq!(DifficultyBand::for_rate(75.0), DifficultyBand::Easy);
        assert_eq!(DifficultyBand::for_rate(100.0), DifficultyBand::Easy);
    }

    #[test]
    fn test_wrong_answers_chart_name() {
        assert_eq!(wrong_answers_chart(7), "wrong_answers_q7.png");
    }

    #[cfg(feature = "charts")]
    #[test]
    fn test_render_all_writes_png_files() {
        use crate::record::{AnswerStatus, AttemptRecord, AttemptStatus, QuestionAnswer};

        let records = vec![AttemptRecord {
            username: "ana".to_string(),
            user_token: "t1".to_string(),
            timestamp: "2025-03-01T10:00:00Z".to_string(),
            status: AttemptStatus::WrongAnswer,
            retry_count: 1,
            questions_answered: 1,
            quiz_attempt: vec![QuestionAnswer {
                question_id: 1,
                question: "2 + 2?".to_string(),
                answer: "5".to_string(),
                status: AnswerStatus::Incorrect,
            }],
        }];
        let analysis = QuizAnalysis::from_records(&records);
        let dir = tempfile::TempDir::new().unwrap();

        let written = render_all(
            &analysis,
            &QuestionKey::new(),
            &AnalyzerConfig::default(),
            dir.path(),
        )
        .unwrap();

        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                COMPLETION_CHART,
                DIFFICULTY_CHART,
                FAILURE_POINTS_CHART,
                RETRY_CHART,
                "wrong_answers_q1.png",
            ]
        );
        for path in &written {
            let bytes = std::fs::read(path).unwrap();
            assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"), "{}", path.display());
        }
    }

    #[cfg(not(feature = "charts"))]
    #[test]
    fn test_render_all_unavailable() {
        let analysis = QuizAnalysis::from_records(&[]);
        let result = render_all(
            &analysis,
            &QuestionKey::new(),
            &AnalyzerConfig::default(),
            Path::new("."),
        );
        assert!(matches!(result, Err(ChartError::Unavailable)));
    }
}
