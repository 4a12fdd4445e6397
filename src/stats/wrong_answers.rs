// Most common wrong answers per question

use super::FrequencyCounter;
use crate::record::{AnswerStatus, AttemptRecord, QuestionId};
use std::collections::BTreeMap;

/// Literal wrong-answer text frequencies, keyed by question id
#[derive(Debug, Clone, Default)]
pub struct WrongAnswers {
    by_question: BTreeMap<QuestionId, FrequencyCounter<String>>,
}

impl WrongAnswers {
    /// The `n` most frequent wrong answers for a question
    pub fn top(&self, question_id: QuestionId, n: usize) -> Vec<(&str, u64)> {
        self.by_question
            .get(&question_id)
            .map(|counter| {
                counter
                    .most_common(Some(n))
                    .into_iter()
                    .map(|(answer, count)| (answer.as_str(), count))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn has_wrong_answers(&self, question_id: QuestionId) -> bool {
        self.by_question
            .get(&question_id)
            .is_some_and(|counter| !counter.is_empty())
    }

    /// Questions with at least one wrong answer, ascending by id
    pub fn question_ids(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.by_question.keys().copied()
    }

    pub fn counter(&self, question_id: QuestionId) -> Option<&FrequencyCounter<String>> {
        self.by_question.get(&question_id)
    }

    pub fn is_empty(&self) -> bool {
        self.by_question.is_empty()
    }
}

/// Count the answer text of every answer graded exactly `incorrect`
pub fn analyze_wrong_answers(records: &[AttemptRecord]) -> WrongAnswers {
    let mut by_question: BTreeMap<QuestionId, FrequencyCounter<String>> = BTreeMap::new();

    for answer in records.iter().flat_map(|r| &r.quiz_attempt) {
        if answer.status == AnswerStatus::Incorrect {
            by_question
                .entry(answer.question_id)
                .or_default()
                .add(answer.answer.clone());
        }
    }

    WrongAnswers { by_question }
}
