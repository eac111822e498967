//! Output formatting and persistence for exam results.
//!
//! Supports pretty-printing, JSON serialization, and CSV append.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::analyzers::types::{ExamSummary, PerformanceHistory};
use crate::format::{format_date, truncate_text};
use crate::model::ExamResult;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

const NAME_WIDTH: usize = 24;

/// One CSV row per subject of an exam.
#[derive(Debug, Serialize)]
pub struct SubjectRow<'a> {
    pub student_id: &'a str,
    pub exam_id: i64,
    pub exam_name: &'a str,
    pub exam_date: &'a str,
    pub subject_id: &'a str,
    pub subject_name: &'a str,
    pub obtained_marks: f64,
    pub max_marks: f64,
    pub percentage: f64,
    pub grade: String,
}

impl<'a> SubjectRow<'a> {
    pub fn rows(exam: &'a ExamResult) -> impl Iterator<Item = SubjectRow<'a>> + 'a {
        exam.subjects.iter().map(move |s| SubjectRow {
            student_id: &exam.student_id,
            exam_id: exam.exam_id,
            exam_name: &exam.exam_name,
            exam_date: &exam.exam_date,
            subject_id: &s.subject_id,
            subject_name: &s.subject_name,
            obtained_marks: s.obtained_marks,
            max_marks: s.max_marks,
            percentage: s.percentage,
            grade: s.grade.to_string(),
        })
    }
}

/// Logs any value using Rust's debug pretty-print format.
pub fn print_pretty<T: std::fmt::Debug>(value: &T) {
    debug!("{:#?}", value);
}

/// Logs a value as pretty-printed JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Writes a value as pretty-printed JSON, replacing the file.
pub fn write_json<T: Serialize>(path: &str, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(path, content)?;
    debug!(path, "Wrote JSON");
    Ok(())
}

/// Appends one row per subject of `exam` to a CSV file.
///
/// Creates the file with headers if it does not already exist. Returns the
/// number of rows written.
pub fn append_subject_rows(path: &str, exam: &ExamResult) -> Result<usize> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV records");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);

    let mut written = 0;
    for row in SubjectRow::rows(exam) {
        writer.serialize(row)?;
        written += 1;
    }
    writer.flush()?;

    Ok(written)
}

/// Human-readable lines for an exam summary.
pub fn summary_lines(summary: &ExamSummary) -> Vec<String> {
    let mut lines = vec![
        format!("{} ({})", summary.exam_name, format_date(&summary.exam_date)),
        format!(
            "Overall: {}/{} = {}% grade {} [{}]",
            summary.obtained_marks,
            summary.total_marks,
            summary.percentage,
            summary.grade,
            summary.color
        ),
        format!(
            "{} the {}% class average",
            if summary.above_average { "Above" } else { "Below" },
            crate::analyzers::summary::REFERENCE_AVERAGE
        ),
    ];
    if let Some(passed) = summary.passed {
        lines.push(if passed { "Result: Pass" } else { "Result: Fail" }.to_string());
    }
    if let Some(s) = &summary.strongest {
        lines.push(format!(
            "Strongest subject: {} {}/{} ({})",
            truncate_text(&s.subject_name, NAME_WIDTH),
            s.obtained_marks,
            s.max_marks,
            s.grade
        ));
    }
    if let Some(s) = &summary.weakest {
        lines.push(format!(
            "Area for improvement: {} {}/{} ({})",
            truncate_text(&s.subject_name, NAME_WIDTH),
            s.obtained_marks,
            s.max_marks,
            s.grade
        ));
    }
    lines
}

/// Human-readable lines for a student's exam history.
pub fn history_lines(history: &PerformanceHistory) -> Vec<String> {
    let mut lines: Vec<String> = history
        .points
        .iter()
        .map(|p| {
            format!(
                "{:<12} {:<width$} {:>5}% {}",
                format_date(&p.exam_date),
                truncate_text(&p.exam_name, NAME_WIDTH),
                p.percentage,
                p.grade,
                width = NAME_WIDTH + 3
            )
        })
        .collect();

    lines.push(format!(
        "Average {:.1}% (grade {}, stddev {:.1}) over {} exams",
        history.mean_percentage, history.overall_grade, history.stddev, history.exam_count
    ));
    if let Some(status) = history.latest_status {
        lines.push(format!("Latest trend: {} {}", status.symbol(), status.as_str()));
    }
    lines
}
