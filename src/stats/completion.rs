// Attempt outcomes by status

use super::percentage;
use crate::record::{AttemptRecord, AttemptStatus};
use serde::{Deserialize, Serialize};

/// Attempt counts per status bucket
///
/// Unrecognized statuses fall in no bucket but still count in `total_attempts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletionStats {
    pub total_attempts: u64,
    pub completed: u64,
    pub failed_wrong_answer: u64,
    pub failed_timeout: u64,
    pub failed_error: u64,
    pub completion_rate: f64,
}

impl CompletionStats {
    /// Attempts whose status matched none of the known buckets
    pub fn unclassified(&self) -> u64 {
        self.total_attempts
            - self.completed
            - self.failed_wrong_answer
            - self.failed_timeout
            - self.failed_error
    }
}

pub fn analyze_completion(records: &[AttemptRecord]) -> CompletionStats {
    let mut stats = CompletionStats {
        total_attempts: records.len() as u64,
        ..Default::default()
    };

    for record in records {
        match record.status {
            AttemptStatus::Completed => stats.completed += 1,
            AttemptStatus::WrongAnswer => stats.failed_wrong_answer += 1,
            AttemptStatus::TimeOut => stats.failed_timeout += 1,
            AttemptStatus::ServerRuntimeError => stats.failed_error += 1,
            AttemptStatus::Other(_) => {}
        }
    }

    stats.completion_rate = percentage(stats.completed, stats.total_attempts);
    stats
}
