//! Quiz attempt records as written by the quiz server, one JSON object per line

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Numeric question identifier shared by the attempt log and the question key
pub type QuestionId = u32;

/// Outcome of a whole quiz attempt
///
/// Unrecognized status strings are preserved in [`AttemptStatus::Other`] so
/// they still count toward totals and survive CSV export unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttemptStatus {
    Completed,
    WrongAnswer,
    TimeOut,
    ServerRuntimeError,
    Other(String),
}

impl AttemptStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AttemptStatus::Completed => "completed",
            AttemptStatus::WrongAnswer => "wrong_answer",
            AttemptStatus::TimeOut => "time_out",
            AttemptStatus::ServerRuntimeError => "server_runtime_error",
            AttemptStatus::Other(raw) => raw,
        }
    }

    /// Whether the attempt ended on a specific question the user could not pass
    pub fn is_failure_point(&self) -> bool {
        matches!(self, AttemptStatus::WrongAnswer | AttemptStatus::TimeOut)
    }
}

impl From<String> for AttemptStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "completed" => AttemptStatus::Completed,
            "wrong_answer" => AttemptStatus::WrongAnswer,
            "time_out" => AttemptStatus::TimeOut,
            "server_runtime_error" => AttemptStatus::ServerRuntimeError,
            _ => AttemptStatus::Other(raw),
        }
    }
}

impl From<AttemptStatus> for String {
    fn from(status: AttemptStatus) -> Self {
        match status {
            AttemptStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AttemptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grading of a single answered question
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AnswerStatus {
    Correct,
    Incorrect,
    Other(String),
}

impl AnswerStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AnswerStatus::Correct => "correct",
            AnswerStatus::Incorrect => "incorrect",
            AnswerStatus::Other(raw) => raw,
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerStatus::Correct)
    }
}

impl From<String> for AnswerStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "correct" => AnswerStatus::Correct,
            "incorrect" => AnswerStatus::Incorrect,
            _ => AnswerStatus::Other(raw),
        }
    }
}

impl From<AnswerStatus> for String {
    fn from(status: AnswerStatus) -> Self {
        match status {
            AnswerStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AnswerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One answered question inside an attempt, in answering order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub question_id: QuestionId,
    /// Question text as shown to the user
    pub question: String,
    /// Answer text the user submitted
    pub answer: String,
    pub status: AnswerStatus,
}

/// One pass by a user through the quiz
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub username: String,
    pub user_token: String,
    /// Opaque timestamp string as written by the server
    pub timestamp: String,
    pub status: AttemptStatus,
    /// 1-indexed attempt number for this user token
    pub retry_count: u32,
    pub questions_answered: u32,
    /// The server writes `null` for attempts that never reached a question
    #[serde(default, deserialize_with = "null_as_empty")]
    pub quiz_attempt: Vec<QuestionAnswer>,
}

impl AttemptRecord {
    /// The question the user was on when the attempt ended
    pub fn last_question(&self) -> Option<&QuestionAnswer> {
        self.quiz_attempt.last()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<QuestionAnswer>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<QuestionAnswer>>::deserialize(deserializer)?.unwrap_or_default())
}
