// PNG chart rendering with plotters

use super::{
    truncate_label, wrong_answers_chart, ChartError, DifficultyBand, COMPLETION_CHART,
    DIFFICULTY_CHART, FAILURE_POINTS_CHART, RETRY_CHART,
};
use crate::config::AnalyzerConfig;
use crate::loader::QuestionKey;
use crate::stats::{CompletionStats, QuestionDifficulty, QuizAnalysis};
use plotters::element::Pie;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

type DrawResult = Result<(), Box<dyn std::error::Error>>;

const FONT: &str = "sans-serif";
const ORANGE: RGBColor = RGBColor(255, 165, 0);
const GRAY: RGBColor = RGBColor(128, 128, 128);
const CRIMSON: RGBColor = RGBColor(220, 20, 60);
const STEEL_BLUE: RGBColor = RGBColor(70, 130, 180);

pub(super) fn render_all(
    analysis: &QuizAnalysis,
    key: &QuestionKey,
    config: &AnalyzerConfig,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, ChartError> {
    let size = (config.chart_width, config.chart_height);
    let mut written = Vec::new();

    let path = out_dir.join(COMPLETION_CHART);
    if analysis.completion.total_attempts > 0 {
        let result = draw_completion(&path, size, &analysis.completion);
        finish(path, result, &mut written)?;
    }

    let path = out_dir.join(DIFFICULTY_CHART);
    if !analysis.difficulty.is_empty() {
        let result = draw_difficulty(&path, size, &analysis.difficulty);
        finish(path, result, &mut written)?;
    }

    let path = out_dir.join(FAILURE_POINTS_CHART);
    if !analysis.failure_points.is_empty() {
        let bars: Vec<(String, u64)> = analysis
            .failure_points
            .ranked()
            .into_iter()
            .map(|(id, count)| (id.to_string(), count))
            .collect();
        let result = draw_count_bars(
            &path,
            size,
            "Failure Points - Where Users Give Up",
            ("Question ID", "Number of Failures"),
            &bars,
            RED,
        );
        finish(path, result, &mut written)?;
    } else {
        debug!("no failure points, skipping {}", FAILURE_POINTS_CHART);
    }

    let path = out_dir.join(RETRY_CHART);
    if !analysis.retry.retry_distribution.is_empty() {
        let bars: Vec<(String, u64)> = analysis
            .retry
            .retry_distribution
            .iter()
            .map(|(retry_count, n)| (retry_count.to_string(), *n))
            .collect();
        let result = draw_count_bars(
            &path,
            size,
            "Retry Attempt Distribution",
            ("Retry Attempt Number", "Number of Attempts"),
            &bars,
            STEEL_BLUE,
        );
        finish(path, result, &mut written)?;
    }

    for question_id in analysis.hardest_with_wrong_answers(config.hardest_question_charts) {
        let path = out_dir.join(wrong_answers_chart(question_id));
        let answers: Vec<(String, u64)> = analysis
            .wrong_answers
            .top(question_id, config.chart_top_wrong_answers)
            .into_iter()
            .map(|(answer, count)| (truncate_label(answer, config.answer_label_max_chars), count))
            .collect();
        let title = format!(
            "Common Wrong Answers - Question {} (Correct Answer: {})",
            question_id,
            key.display_answer(question_id)
        );
        let result = draw_wrong_answers(&path, size, &title, &answers);
        finish(path, result, &mut written)?;
    }

    Ok(written)
}

fn finish(path: PathBuf, result: DrawResult, written: &mut Vec<PathBuf>) -> Result<(), ChartError> {
    match result {
        Ok(()) => {
            info!(path = %path.display(), "saved chart");
            written.push(path);
            Ok(())
        }
        Err(e) => Err(ChartError::Render {
            path,
            message: e.to_string(),
        }),
    }
}

fn category_label(value: &SegmentValue<usize>, labels: &[String]) -> String {
    match value {
        SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
            labels.get(*i).cloned().unwrap_or_default()
        }
        SegmentValue::Last => String::new(),
    }
}

fn band_color(success_rate: f64) -> RGBColor {
    match DifficultyBand::for_rate(success_rate) {
        DifficultyBand::Hard => RED,
        DifficultyBand::Medium => ORANGE,
        DifficultyBand::Easy => GREEN,
    }
}

fn draw_completion(path: &Path, size: (u32, u32), stats: &CompletionStats) -> DrawResult {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(
        &format!(
            "Quiz Completion Statistics - Total Attempts: {}",
            stats.total_attempts
        ),
        (FONT, 28),
    )?;

    let slices: Vec<(String, f64, RGBColor)> = [
        ("Completed", stats.completed, GREEN),
        ("Failed - Wrong Answer", stats.failed_wrong_answer, RED),
        ("Failed - Timeout", stats.failed_timeout, ORANGE),
        ("Failed - Error", stats.failed_error, GRAY),
    ]
    .into_iter()
    .filter(|(_, n, _)| *n > 0)
    .map(|(label, n, color)| (format!("{} ({})", label, n), n as f64, color))
    .collect();

    // only unrecognized statuses: nothing to slice
    if !slices.is_empty() {
        let (width, height) = root.dim_in_pixel();
        let center = (width as i32 / 2, height as i32 / 2);
        let radius = f64::from(width.min(height)) * 0.35;
        let labels: Vec<&str> = slices.iter().map(|(label, _, _)| label.as_str()).collect();
        let sizes: Vec<f64> = slices.iter().map(|(_, n, _)| *n).collect();
        let colors: Vec<RGBColor> = slices.iter().map(|(_, _, color)| *color).collect();

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(-90.0);
        pie.label_style((FONT, 18).into_font().color(&BLACK));
        pie.percentages((FONT, 16).into_font().color(&WHITE));
        root.draw(&pie)?;
    }

    root.present()?;
    Ok(())
}

fn draw_difficulty(path: &Path, size: (u32, u32), difficulty: &[QuestionDifficulty]) -> DrawResult {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let n = difficulty.len();
    let labels: Vec<String> = difficulty.iter().map(|q| q.question_id.to_string()).collect();

    let mut chart = ChartBuilder::on(&root)
        .caption("Question Difficulty - Success Rate by Question", (FONT, 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d((0..n).into_segmented(), 0f64..100f64)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n + 1)
        .x_label_formatter(&|v| category_label(v, &labels))
        .x_desc("Question ID")
        .y_desc("Success Rate (%)")
        .draw()?;

    chart.draw_series(difficulty.iter().enumerate().map(|(i, q)| {
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), q.success_rate),
            ],
            band_color(q.success_rate).filled(),
        );
        bar.set_margin(0, 0, 4, 4);
        bar
    }))?;

    chart
        .draw_series(LineSeries::new(
            [(SegmentValue::Exact(0), 50.0), (SegmentValue::Last, 50.0)],
            GRAY.mix(0.5).stroke_width(2),
        ))?
        .label("50% threshold")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GRAY.stroke_width(2)));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn draw_count_bars(
    path: &Path,
    size: (u32, u32),
    title: &str,
    (x_desc, y_desc): (&str, &str),
    bars: &[(String, u64)],
    color: RGBColor,
) -> DrawResult {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let n = bars.len();
    let labels: Vec<String> = bars.iter().map(|(label, _)| label.clone()).collect();
    let y_max = bars.iter().map(|(_, count)| *count).max().unwrap_or(0) + 1;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, (FONT, 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d((0..n).into_segmented(), 0u64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n + 1)
        .x_label_formatter(&|v| category_label(v, &labels))
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()?;

    chart.draw_series(bars.iter().enumerate().map(|(i, (_, count))| {
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0u64),
                (SegmentValue::Exact(i + 1), *count),
            ],
            color.mix(0.7).filled(),
        );
        bar.set_margin(0, 0, 4, 4);
        bar
    }))?;

    root.present()?;
    Ok(())
}

/// Horizontal bars, most frequent answer on top
fn draw_wrong_answers(
    path: &Path,
    size: (u32, u32),
    title: &str,
    answers: &[(String, u64)],
) -> DrawResult {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let k = answers.len();
    // slot 0 is the bottom row
    let labels: Vec<String> = answers.iter().rev().map(|(answer, _)| answer.clone()).collect();
    let x_max = answers.iter().map(|(_, count)| *count).max().unwrap_or(0) + 1;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, (FONT, 22))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(260)
        .build_cartesian_2d(0u64..x_max, (0..k).into_segmented())?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(k + 1)
        .y_label_formatter(&|v| category_label(v, &labels))
        .x_desc("Count")
        .y_desc("Wrong Answer")
        .draw()?;

    chart.draw_series(answers.iter().enumerate().map(|(rank, (_, count))| {
        let slot = k - 1 - rank;
        let mut bar = Rectangle::new(
            [
                (0u64, SegmentValue::Exact(slot)),
                (*count, SegmentValue::Exact(slot + 1)),
            ],
            CRIMSON.mix(0.7).filled(),
        );
        bar.set_margin(4, 4, 0, 0);
        bar
    }))?;

    root.present()?;
    Ok(())
}
