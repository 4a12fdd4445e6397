// Per-question success rates

use super::percentage;
use crate::record::{AttemptRecord, QuestionId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tally of every answer given to one question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDifficulty {
    pub question_id: QuestionId,
    pub total_attempts: u64,
    pub correct: u64,
    /// Every non-`correct` answer, including unrecognized statuses
    pub incorrect: u64,
    /// `correct / total_attempts * 100`, 0 when unanswered
    pub success_rate: f64,
}

/// Rank questions from hardest to easiest
///
/// Sorted ascending by success rate; equal rates stay in ascending id order.
pub fn analyze_difficulty(records: &[AttemptRecord]) -> Vec<QuestionDifficulty> {
    let mut tallies: BTreeMap<QuestionId, (u64, u64)> = BTreeMap::new();

    for answer in records.iter().flat_map(|r| &r.quiz_attempt) {
        let (correct, incorrect) = tallies.entry(answer.question_id).or_default();
        if answer.status.is_correct() {
            *correct += 1;
        } else {
            *incorrect += 1;
        }
    }

    let mut results: Vec<QuestionDifficulty> = tallies
        .into_iter()
        .map(|(question_id, (correct, incorrect))| {
            let total_attempts = correct + incorrect;
            QuestionDifficulty {
                question_id,
                total_attempts,
                correct,
                incorrect,
                success_rate: percentage(correct, total_attempts),
            }
        })
        .collect();

    results.sort_by(|a, b| a.success_rate.total_cmp(&b.success_rate));
    results
}
