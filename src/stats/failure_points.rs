// Where unsuccessful attempts stopped

use super::FrequencyCounter;
use crate::record::{AttemptRecord, QuestionId};

/// Failed attempts attributed to the question the user was on
#[derive(Debug, Clone, Default)]
pub struct FailurePoints {
    counts: FrequencyCounter<QuestionId>,
}

impl FailurePoints {
    /// Question ids by descending failure count, ties in first-seen order
    pub fn ranked(&self) -> Vec<(QuestionId, u64)> {
        self.counts
            .most_common(None)
            .into_iter()
            .map(|(id, count)| (*id, count))
            .collect()
    }

    pub fn get(&self, question_id: QuestionId) -> u64 {
        self.counts.get(&question_id)
    }

    pub fn total_failures(&self) -> u64 {
        self.counts.total()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Attribute each `wrong_answer` / `time_out` attempt to its last question
///
/// Attempts that never reached a question contribute nothing.
pub fn analyze_failure_points(records: &[AttemptRecord]) -> FailurePoints {
    let counts = records
        .iter()
        .filter(|r| r.status.is_failure_point())
        .filter_map(|r| r.last_question())
        .map(|q| q.question_id)
        .collect();

    FailurePoints { counts }
}
