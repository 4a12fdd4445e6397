//! JSON output format for the analysis report
//!
//! `--format json` emits the same aggregates as the text report in a
//! versioned document for machine consumption.

use crate::loader::QuestionKey;
use crate::record::QuestionId;
use crate::stats::{CompletionStats, QuestionDifficulty, QuizAnalysis, RetryPatterns};
use serde::{Deserialize, Serialize};

/// A wrong answer and how often it was given
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonWrongAnswer {
    pub answer: String,
    pub count: u64,
}

/// Common wrong answers for one question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonQuestionWrongAnswers {
    pub question_id: QuestionId,
    /// Correct answer from the question key, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    pub wrong_answers: Vec<JsonWrongAnswer>,
}

/// Failures attributed to one question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonFailurePoint {
    pub question_id: QuestionId,
    pub failures: u64,
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    pub completion: CompletionStats,
    pub retry: RetryPatterns,
    /// Hardest question first
    pub difficulty: Vec<QuestionDifficulty>,
    /// Most frequent first
    pub failure_points: Vec<JsonFailurePoint>,
    /// Ascending by question id
    pub wrong_answers: Vec<JsonQuestionWrongAnswers>,
}

impl JsonReport {
    pub fn new(analysis: &QuizAnalysis, key: &QuestionKey, top_wrong_answers: usize) -> Self {
        let failure_points = analysis
            .failure_points
            .ranked()
            .into_iter()
            .map(|(question_id, failures)| JsonFailurePoint {
                question_id,
                failures,
            })
            .collect();

        let wrong_answers = analysis
            .wrong_answers
            .question_ids()
            .map(|question_id| JsonQuestionWrongAnswers {
                question_id,
                correct_answer: key.get(question_id).map(str::to_string),
                wrong_answers: analysis
                    .wrong_answers
                    .top(question_id, top_wrong_answers)
                    .into_iter()
                    .map(|(answer, count)| JsonWrongAnswer {
                        answer: answer.to_string(),
                        count,
                    })
                    .collect(),
            })
            .collect();

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "quizscope-json-v1".to_string(),
            completion: analysis.completion.clone(),
            retry: analysis.retry.clone(),
            difficulty: analysis.difficulty.clone(),
            failure_points,
            wrong_answers,
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
