// Retry behavior per user token

use super::percentage;
use crate::record::AttemptRecord;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Retry statistics across all user tokens
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetryPatterns {
    /// Distinct user tokens
    pub total_users: u64,
    /// Tokens with more than one attempt
    pub users_who_retry: u64,
    pub retry_percentage: f64,
    /// Most attempts made by any single token
    pub max_retries: u64,
    /// Each record's own `retry_count` value -> number of records with it
    pub retry_distribution: BTreeMap<u32, u64>,
}

pub fn analyze_retry_patterns(records: &[AttemptRecord]) -> RetryPatterns {
    let mut attempts_per_user: HashMap<&str, u64> = HashMap::new();
    let mut retry_distribution: BTreeMap<u32, u64> = BTreeMap::new();

    for record in records {
        *attempts_per_user.entry(record.user_token.as_str()).or_default() += 1;
        *retry_distribution.entry(record.retry_count).or_default() += 1;
    }

    let total_users = attempts_per_user.len() as u64;
    let users_who_retry = attempts_per_user.values().filter(|&&n| n > 1).count() as u64;
    let max_retries = attempts_per_user.values().copied().max().unwrap_or(0);

    RetryPatterns {
        total_users,
        users_who_retry,
        retry_percentage: percentage(users_who_retry, total_users),
        max_retries,
        retry_distribution,
    }
}
