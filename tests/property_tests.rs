//! Property-based tests for the aggregation pass
//!
//! Random attempt logs are generated from a small pool of users, questions and
//! answers so that ties, retries and repeated wrong answers all show up.

use proptest::prelude::*;
use quizscope::csv_output::CsvExport;
use quizscope::loader::parse_attempts;
use quizscope::record::{AnswerStatus, AttemptRecord, AttemptStatus, QuestionAnswer};
use quizscope::stats::QuizAnalysis;
use std::collections::HashMap;

fn answer_strategy() -> impl Strategy<Value = QuestionAnswer> {
    (1u32..8, prop::sample::select(vec!["a", "b", "c", "d, e", "\"q\""]), any::<bool>()).prop_map(
        |(question_id, text, correct)| QuestionAnswer {
            question_id,
            question: format!("Question {}", question_id),
            answer: text.to_string(),
            status: if correct {
                AnswerStatus::Correct
            } else {
                AnswerStatus::Incorrect
            },
        },
    )
}

fn status_strategy() -> impl Strategy<Value = AttemptStatus> {
    prop_oneof![
        Just(AttemptStatus::Completed),
        Just(AttemptStatus::WrongAnswer),
        Just(AttemptStatus::TimeOut),
        Just(AttemptStatus::ServerRuntimeError),
        Just(AttemptStatus::Other("aborted".to_string())),
    ]
}

fn record_strategy() -> impl Strategy<Value = AttemptRecord> {
    (
        0u8..5,
        status_strategy(),
        1u32..5,
        prop::collection::vec(answer_strategy(), 0..6),
    )
        .prop_map(|(user, status, retry_count, quiz_attempt)| AttemptRecord {
            username: format!("user{}", user),
            user_token: format!("token{}", user),
            timestamp: "2025-03-01T10:00:00Z".to_string(),
            status,
            retry_count,
            questions_answered: quiz_attempt.len() as u32,
            quiz_attempt,
        })
}

fn log_strategy() -> impl Strategy<Value = Vec<AttemptRecord>> {
    prop::collection::vec(record_strategy(), 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_difficulty_tallies_every_answer(records in log_strategy()) {
        let analysis = QuizAnalysis::from_records(&records);

        let mut answered: HashMap<u32, u64> = HashMap::new();
        for q in records.iter().flat_map(|r| &r.quiz_attempt) {
            *answered.entry(q.question_id).or_default() += 1;
        }

        prop_assert_eq!(analysis.difficulty.len(), answered.len());
        for q in &analysis.difficulty {
            prop_assert_eq!(q.correct + q.incorrect, answered[&q.question_id]);
            prop_assert_eq!(q.total_attempts, answered[&q.question_id]);
            prop_assert!((0.0..=100.0).contains(&q.success_rate));
        }
    }

    #[test]
    fn prop_difficulty_sorted_ascending(records in log_strategy()) {
        let analysis = QuizAnalysis::from_records(&records);
        for pair in analysis.difficulty.windows(2) {
            prop_assert!(pair[0].success_rate <= pair[1].success_rate);
            if pair[0].success_rate == pair[1].success_rate {
                prop_assert!(pair[0].question_id < pair[1].question_id);
            }
        }
    }

    #[test]
    fn prop_completion_rate_bounded(records in log_strategy()) {
        let completion = QuizAnalysis::from_records(&records).completion;

        prop_assert_eq!(completion.total_attempts, records.len() as u64);
        prop_assert!((0.0..=100.0).contains(&completion.completion_rate));
        if records.is_empty() {
            prop_assert_eq!(completion.completion_rate, 0.0);
        }
        prop_assert!(
            completion.completed
                + completion.failed_wrong_answer
                + completion.failed_timeout
                + completion.failed_error
                <= completion.total_attempts
        );
    }

    #[test]
    fn prop_failure_points_need_a_question(records in log_strategy()) {
        let analysis = QuizAnalysis::from_records(&records);

        let attributable = records
            .iter()
            .filter(|r| r.status.is_failure_point() && !r.quiz_attempt.is_empty())
            .count() as u64;
        prop_assert_eq!(analysis.failure_points.total_failures(), attributable);

        for (question_id, count) in analysis.failure_points.ranked() {
            let expected = records
                .iter()
                .filter(|r| r.status.is_failure_point())
                .filter_map(|r| r.last_question())
                .filter(|q| q.question_id == question_id)
                .count() as u64;
            prop_assert_eq!(count, expected);
        }
    }

    #[test]
    fn prop_retry_distribution_counts_records(records in log_strategy()) {
        let retry = QuizAnalysis::from_records(&records).retry;

        let total: u64 = retry.retry_distribution.values().sum();
        prop_assert_eq!(total, records.len() as u64);
        prop_assert!(retry.users_who_retry <= retry.total_users);
        prop_assert!((0.0..=100.0).contains(&retry.retry_percentage));
    }

    #[test]
    fn prop_wrong_answers_only_incorrect(records in log_strategy()) {
        let analysis = QuizAnalysis::from_records(&records);

        for question_id in analysis.wrong_answers.question_ids() {
            let total: u64 = analysis
                .wrong_answers
                .top(question_id, usize::MAX)
                .iter()
                .map(|(_, count)| count)
                .sum();
            let incorrect = analysis
                .difficulty
                .iter()
                .find(|q| q.question_id == question_id)
                .map(|q| q.incorrect)
                .unwrap_or(0);
            prop_assert_eq!(total, incorrect);
        }
    }

    #[test]
    fn prop_csv_one_row_per_answer(records in log_strategy()) {
        let export = CsvExport::new(&records);
        let answers: usize = records.iter().map(|r| r.quiz_attempt.len()).sum();
        prop_assert_eq!(export.row_count(), answers);
    }

    #[test]
    fn prop_loader_reads_serialized_log(records in log_strategy()) {
        let log: String = records
            .iter()
            .map(|r| serde_json::to_string(r).unwrap() + "\n")
            .collect();
        let parsed = parse_attempts(log.as_bytes()).unwrap();
        prop_assert_eq!(parsed, records);
    }
}
