//! Data types produced by the analysis pipeline.

use serde::Serialize;

use crate::analyzers::color::ColorToken;
use crate::analyzers::grade::Grade;
use crate::analyzers::trend::PerformanceStatus;

/// A subject singled out as strongest or weakest in an exam.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectHighlight {
    pub subject_name: String,
    pub obtained_marks: f64,
    pub max_marks: f64,
    pub percentage: f64,
    pub grade: Grade,
}

/// Display-ready view of one exam.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExamSummary {
    pub exam_name: String,
    pub exam_date: String,
    pub obtained_marks: f64,
    pub total_marks: f64,
    pub percentage: f64,
    pub grade: Grade,
    pub color: ColorToken,
    pub above_average: bool,
    /// `None` when the exam has no passing threshold.
    pub passed: Option<bool>,
    pub subject_count: usize,
    pub strongest: Option<SubjectHighlight>,
    pub weakest: Option<SubjectHighlight>,
}

/// One exam's position in a student's history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub exam_id: i64,
    pub exam_name: String,
    pub exam_date: String,
    pub percentage: f64,
    pub grade: Grade,
}

/// Aggregate of every exam a student has taken.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceHistory {
    pub exam_count: usize,
    pub points: Vec<TrendPoint>,
    pub mean_percentage: f64,
    pub stddev: f64,
    pub overall_grade: Grade,
    /// Latest exam compared with the one before it; `None` with fewer than two exams.
    pub latest_status: Option<PerformanceStatus>,
    pub best_exam: Option<TrendPoint>,
}
