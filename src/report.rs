//! Human-readable analysis report
//!
//! Section order is fixed: overall statistics, retry patterns, question
//! difficulty (hardest first), failure points (most frequent first), then
//! common wrong answers grouped by ascending question id.

use crate::loader::QuestionKey;
use crate::stats::QuizAnalysis;
use std::io::{self, Write};

const RULE_WIDTH: usize = 80;

/// Text report over a computed analysis
#[derive(Debug)]
pub struct TextReport<'a> {
    analysis: &'a QuizAnalysis,
    key: &'a QuestionKey,
    top_wrong_answers: usize,
}

impl<'a> TextReport<'a> {
    pub fn new(analysis: &'a QuizAnalysis, key: &'a QuestionKey, top_wrong_answers: usize) -> Self {
        Self {
            analysis,
            key,
            top_wrong_answers,
        }
    }

    /// Write the full report
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let heavy = "=".repeat(RULE_WIDTH);

        writeln!(out, "{}", heavy)?;
        writeln!(out, "QUIZ ATTEMPT LOG ANALYSIS REPORT")?;
        writeln!(out, "{}", heavy)?;
        writeln!(out)?;

        self.write_overall(out)?;
        self.write_retry(out)?;
        self.write_difficulty(out)?;
        self.write_failure_points(out)?;
        self.write_wrong_answers(out)?;

        writeln!(out, "{}", heavy)
    }

    /// Render the report into a string
    pub fn render(&self) -> String {
        let mut buf = Vec::new();
        // writing into a Vec cannot fail
        let _ = self.write_to(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
        writeln!(out, "{}", title)?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))
    }

    fn write_overall<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let c = &self.analysis.completion;
        Self::section(out, "📊 OVERALL STATISTICS")?;
        writeln!(out, "Total Attempts:        {}", c.total_attempts)?;
        writeln!(
            out,
            "Completed:             {} ({:.1}%)",
            c.completed, c.completion_rate
        )?;
        writeln!(out, "Failed (Wrong Answer): {}", c.failed_wrong_answer)?;
        writeln!(out, "Failed (Timeout):      {}", c.failed_timeout)?;
        writeln!(out, "Failed (Error):        {}", c.failed_error)?;
        writeln!(out)
    }

    fn write_retry<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let r = &self.analysis.retry;
        Self::section(out, "🔄 RETRY PATTERNS")?;
        writeln!(out, "Total Users:           {}", r.total_users)?;
        writeln!(
            out,
            "Users Who Retry:       {} ({:.1}%)",
            r.users_who_retry, r.retry_percentage
        )?;
        writeln!(out, "Max Retries by User:   {}", r.max_retries)?;
        writeln!(out)
    }

    fn write_difficulty<W: Write>(&self, out: &mut W) -> io::Result<()> {
        Self::section(out, "📈 QUESTION DIFFICULTY (Hardest to Easiest)")?;
        writeln!(
            out,
            "{:<6} {:<8} {:<10} {:<12} {:<12}",
            "Q ID", "Total", "Correct", "Incorrect", "Success Rate"
        )?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        for q in &self.analysis.difficulty {
            writeln!(
                out,
                "{:<6} {:<8} {:<10} {:<12} {:<11.1}%",
                q.question_id, q.total_attempts, q.correct, q.incorrect, q.success_rate
            )?;
        }
        writeln!(out)
    }

    fn write_failure_points<W: Write>(&self, out: &mut W) -> io::Result<()> {
        Self::section(out, "❌ FAILURE POINTS (Where users give up)")?;
        let failures = &self.analysis.failure_points;
        if failures.is_empty() {
            writeln!(out, "No failure data available.")?;
        } else {
            writeln!(out, "{:<15} {:<10}", "Question ID", "Failures")?;
            writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
            for (question_id, count) in failures.ranked() {
                writeln!(out, "{:<15} {:<10}", question_id, count)?;
            }
        }
        writeln!(out)
    }

    fn write_wrong_answers<W: Write>(&self, out: &mut W) -> io::Result<()> {
        Self::section(out, "🚫 COMMON WRONG ANSWERS")?;
        let wrong_answers = &self.analysis.wrong_answers;
        for question_id in wrong_answers.question_ids() {
            writeln!(out)?;
            writeln!(out, "Question {}:", question_id)?;
            if let Some(correct) = self.key.get(question_id) {
                writeln!(out, "  Correct Answer: {}", correct)?;
            }
            writeln!(out, "  Common Wrong Answers:")?;
            for (answer, count) in wrong_answers.top(question_id, self.top_wrong_answers) {
                writeln!(out, "    - '{}': {} times", answer, count)?;
            }
        }
        writeln!(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{AnswerStatus, AttemptRecord, AttemptStatus, QuestionAnswer};

    fn qa(question_id: u32, answer: &str, correct: bool) -> QuestionAnswer {
        QuestionAnswer {
            question_id,
            question: format!("q{}", question_id),
            answer: answer.to_string(),
            status: if correct {
                AnswerStatus::Correct
            } else {
                AnswerStatus::Incorrect
            },
        }
    }

    fn records() -> Vec<AttemptRecord> {
        let attempt = |token: &str, status, retry_count, quiz_attempt: Vec<QuestionAnswer>| {
            AttemptRecord {
                username: token.to_string(),
                user_token: token.to_string(),
                timestamp: "ts".to_string(),
                status,
                retry_count,
                questions_answered: quiz_attempt.len() as u32,
                quiz_attempt,
            }
        };
        vec![
            attempt("a", AttemptStatus::WrongAnswer, 1, vec![qa(1, "4", true), qa(2, "Lyon", false)]),
            attempt("a", AttemptStatus::Completed, 2, vec![qa(1, "4", true), qa(2, "Paris", true)]),
            attempt("b", AttemptStatus::WrongAnswer, 1, vec![qa(1, "5", false)]),
        ]
    }

    #[test]
    fn test_report_sections_in_order() {
        let records = records();
        let analysis = QuizAnalysis::from_records(&records);
        let key = QuestionKey::new();
        let text = TextReport::new(&analysis, &key, 5).render();

        let positions: Vec<usize> = [
            "OVERALL STATISTICS",
            "RETRY PATTERNS",
            "QUESTION DIFFICULTY",
            "FAILURE POINTS",
            "COMMON WRONG ANSWERS",
        ]
        .iter()
        .map(|title| text.find(title).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_report_overall_numbers() {
        let records = records();
        let analysis = QuizAnalysis::from_records(&records);
        let key = QuestionKey::new();
        let text = TextReport::new(&analysis, &key, 5).render();

        assert!(text.contains("Total Attempts:        3"));
        assert!(text.contains("Completed:             1 (33.3%)"));
        assert!(text.contains("Failed (Wrong Answer): 2"));
        assert!(text.contains("Users Who Retry:       1 (50.0%)"));
        assert!(text.contains("Max Retries by User:   2"));
    }

    #[test]
    fn test_report_difficulty_rows() {
        let records = records();
        let analysis = QuizAnalysis::from_records(&records);
        let key = QuestionKey::new();
        let text = TextReport::new(&analysis, &key, 5).render();

        // q2: 1/2, q1: 2/3
        assert!(text.contains("2      2        1          1            50.0       %"));
        assert!(text.contains("1      3        2          1            66.7       %"));
        assert!(text.find("\n2      2").unwrap() < text.find("\n1      3").unwrap());
    }

    #[test]
    fn test_report_correct_answer_only_when_known() {
        let records = records();
        let analysis = QuizAnalysis::from_records(&records);
        let key: QuestionKey = [(2, "Paris".to_string())].into_iter().collect();
        let text = TextReport::new(&analysis, &key, 5).render();

        assert!(text.contains("Question 2:\n  Correct Answer: Paris\n"));
        assert!(text.contains("Question 1:\n  Common Wrong Answers:\n    - '5': 1 times"));
    }

    #[test]
    fn test_report_without_failures() {
        let analysis = QuizAnalysis::from_records(&[]);
        let key = QuestionKey::new();
        let text = TextReport::new(&analysis, &key, 5).render();
        assert!(text.contains("No failure data available."));
        assert!(text.contains("Completed:             0 (0.0%)"));
    }
}
