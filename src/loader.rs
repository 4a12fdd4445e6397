//! Loading of the NDJSON attempt log and the question key

use crate::error::{LoadError, Result};
use crate::record::{AttemptRecord, QuestionId};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

/// Default attempt log written by the quiz server
pub const DEFAULT_LOG_FILE: &str = "quiz_attempts.json";

/// Default question file served by the quiz server
pub const DEFAULT_QUESTION_FILE: &str = "question.json";

/// Shown wherever the key has no answer for a question
pub const UNKNOWN_ANSWER: &str = "Unknown";

/// Load every attempt record from a newline-delimited JSON file
///
/// Blank lines are skipped. The first line that fails to parse aborts the
/// load with its line number and content.
pub fn load_attempts<P: AsRef<Path>>(path: P) -> Result<Vec<AttemptRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LoadError::from_io(path, e))?;

    let records = parse_attempts(BufReader::new(file)).map_err(|e| match e {
        LoadError::Io { source, .. } => LoadError::from_io(path, source),
        other => other,
    })?;

    info!(path = %path.display(), records = records.len(), "loaded attempt log");
    Ok(records)
}

/// Parse attempt records from any line-oriented reader
pub fn parse_attempts<R: BufRead>(reader: R) -> Result<Vec<AttemptRecord>> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| {
            if source.kind() == io::ErrorKind::InvalidData {
                LoadError::Decode {
                    line: index + 1,
                    source,
                }
            } else {
                LoadError::Io {
                    path: Default::default(),
                    source,
                }
            }
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let record = serde_json::from_str(trimmed).map_err(|source| LoadError::Parse {
            line: index + 1,
            content: trimmed.to_string(),
            source,
        })?;
        records.push(record);
    }

    debug!(records = records.len(), "parsed attempt records");
    Ok(records)
}

#[derive(Debug, Deserialize)]
struct QuizDocument {
    questions: Vec<KeyEntry>,
}

#[derive(Debug, Deserialize)]
struct KeyEntry {
    id: QuestionId,
    answer: String,
}

/// Mapping from question id to its correct answer, used for display only
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionKey {
    answers: HashMap<QuestionId, String>,
}

impl QuestionKey {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a quiz document with a `questions` list of `{id, answer, ...}`
    pub fn from_json_str(content: &str) -> serde_json::Result<Self> {
        let doc: QuizDocument = serde_json::from_str(content)?;
        Ok(doc
            .questions
            .into_iter()
            .map(|q| (q.id, q.answer))
            .collect())
    }

    pub fn get(&self, id: QuestionId) -> Option<&str> {
        self.answers.get(&id).map(String::as_str)
    }

    /// Correct answer for display, `"Unknown"` when the key lacks the id
    pub fn display_answer(&self, id: QuestionId) -> &str {
        self.get(id).unwrap_or(UNKNOWN_ANSWER)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl FromIterator<(QuestionId, String)> for QuestionKey {
    fn from_iter<I: IntoIterator<Item = (QuestionId, String)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

/// Read the question key without failing the run
///
/// A missing or malformed key only degrades answer display, so both cases
/// warn on stderr and yield an empty key.
pub fn load_question_key<P: AsRef<Path>>(path: P) -> QuestionKey {
    let path = path.as_ref();
    match try_load_question_key(path) {
        Ok(key) => {
            info!(path = %path.display(), questions = key.len(), "loaded question key");
            key
        }
        Err(e) => {
            if e.is_not_found() {
                eprintln!(
                    "Warning: {} not found! Cannot determine correct answers.",
                    path.display()
                );
            } else {
                match std::error::Error::source(&e) {
                    Some(cause) => eprintln!(
                        "Warning: {}: {}. Cannot determine correct answers.",
                        e, cause
                    ),
                    None => eprintln!("Warning: {}. Cannot determine correct answers.", e),
                }
            }
            warn!(error = %e, "continuing without question key");
            QuestionKey::new()
        }
    }
}

/// Read the question key, surfacing every failure
pub fn try_load_question_key<P: AsRef<Path>>(path: P) -> Result<QuestionKey> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::from_io(path, e))?;
    QuestionKey::from_json_str(&content).map_err(|source| LoadError::InvalidKey {
        path: path.to_path_buf(),
        source,
    })
}
