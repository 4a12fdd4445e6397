#![no_main]

use libfuzzer_sys::fuzz_target;
use quizscope::loader::{parse_attempts, QuestionKey};
use quizscope::stats::QuizAnalysis;

fuzz_target!(|data: &[u8]| {
    // Any byte soup must either load or fail cleanly, never panic
    if let Ok(records) = parse_attempts(data) {
        let _ = QuizAnalysis::from_records(&records);
    }

    if let Ok(input) = std::str::from_utf8(data) {
        let _ = QuestionKey::from_json_str(input);
    }
});
