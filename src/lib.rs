//! quizscope - quiz attempt log analyzer
//!
//! This library loads the newline-delimited JSON attempt log written by a quiz
//! server, aggregates per-question difficulty, common wrong answers, failure
//! points, retry patterns and completion rates, and renders them as a text or
//! JSON report, chart images and a flattened CSV export.

pub mod charts;
pub mod cli;
pub mod config;
pub mod csv_output;
pub mod error;
pub mod json_output;
pub mod loader;
pub mod record;
pub mod report;
pub mod stats;
