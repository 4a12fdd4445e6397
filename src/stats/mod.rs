//! Aggregate statistics over quiz attempt records
//!
//! Each aggregator makes one linear pass over the loaded records and derives
//! an independent summary:
//! - question difficulty (success rate per question, hardest first)
//! - common wrong answers per question
//! - failure points (last question of failed or timed-out attempts)
//! - retry patterns per user token
//! - completion rate by attempt status
//!
//! Every rate guards its zero denominator and reports 0.

mod completion;
mod counter;
mod difficulty;
mod failure_points;
mod retry;
mod wrong_answers;

pub use completion::{analyze_completion, CompletionStats};
pub use counter::FrequencyCounter;
pub use difficulty::{analyze_difficulty, QuestionDifficulty};
pub use failure_points::{analyze_failure_points, FailurePoints};
pub use retry::{analyze_retry_patterns, RetryPatterns};
pub use wrong_answers::{analyze_wrong_answers, WrongAnswers};

use crate::record::{AttemptRecord, QuestionId};
use tracing::debug;

/// `part / whole * 100`, or 0 when `whole` is 0
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// All aggregates for one attempt log
#[derive(Debug, Clone)]
pub struct QuizAnalysis {
    pub completion: CompletionStats,
    pub retry: RetryPatterns,
    /// Hardest question first
    pub difficulty: Vec<QuestionDifficulty>,
    pub wrong_answers: WrongAnswers,
    pub failure_points: FailurePoints,
}

impl QuizAnalysis {
    pub fn from_records(records: &[AttemptRecord]) -> Self {
        let analysis = Self {
            completion: analyze_completion(records),
            retry: analyze_retry_patterns(records),
            difficulty: analyze_difficulty(records),
            wrong_answers: analyze_wrong_answers(records),
            failure_points: analyze_failure_points(records),
        };

        debug!(
            attempts = analysis.completion.total_attempts,
            questions = analysis.difficulty.len(),
            users = analysis.retry.total_users,
            failures = analysis.failure_points.total_failures(),
            "computed quiz analysis"
        );
        analysis
    }

    /// Among the `n` hardest questions, those with a recorded wrong answer
    pub fn hardest_with_wrong_answers(&self, n: usize) -> Vec<QuestionId> {
        self.difficulty
            .iter()
            .take(n)
            .map(|q| q.question_id)
            .filter(|&id| self.wrong_answers.has_wrong_answers(id))
            .collect()
    }
}
