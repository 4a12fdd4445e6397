//! Flattened CSV export of the attempt log
//!
//! One row per answered question, carrying its parent attempt's fields, for
//! spreadsheet analysis and external tools.

use crate::record::AttemptRecord;
use std::fs;
use std::io;
use std::path::Path;
use tracing::info;

/// Fixed column set of the export
pub const CSV_COLUMNS: [&str; 10] = [
    "username",
    "user_token",
    "timestamp",
    "status",
    "retry_count",
    "questions_answered",
    "question_id",
    "question_text",
    "user_answer",
    "is_correct",
];

/// CSV formatter over borrowed attempt records
#[derive(Debug)]
pub struct CsvExport<'a> {
    records: &'a [AttemptRecord],
}

impl<'a> CsvExport<'a> {
    pub fn new(records: &'a [AttemptRecord]) -> Self {
        Self { records }
    }

    /// Number of data rows: one per answered question across all attempts
    pub fn row_count(&self) -> usize {
        self.records.iter().map(|r| r.quiz_attempt.len()).sum()
    }

    fn header() -> String {
        CSV_COLUMNS.join(",")
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(&[',', '"', '\n', '\r'][..]) {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn format_rows(record: &AttemptRecord) -> Vec<String> {
        record
            .quiz_attempt
            .iter()
            .map(|answer| {
                [
                    Self::escape_field(&record.username),
                    Self::escape_field(&record.user_token),
                    Self::escape_field(&record.timestamp),
                    Self::escape_field(record.status.as_str()),
                    record.retry_count.to_string(),
                    record.questions_answered.to_string(),
                    answer.question_id.to_string(),
                    Self::escape_field(&answer.question),
                    Self::escape_field(&answer.answer),
                    Self::escape_field(answer.status.as_str()),
                ]
                .join(",")
            })
            .collect()
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = Self::header();
        output.push('\n');

        for row in self.records.iter().flat_map(Self::format_rows) {
            output.push_str(&row);
            output.push('\n');
        }

        output
    }

    /// Write the export to `path`, replacing any existing file
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_csv())?;
        info!(path = %path.display(), rows = self.row_count(), "exported csv");
        Ok(())
    }
}
