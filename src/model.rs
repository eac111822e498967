//! Exam result types.
//!
//! `Api*` types mirror the JSON served by the results server. Everything
//! else in the crate works on [`ExamResult`] and [`SubjectScore`], produced
//! from the API shapes by [`crate::normalize`].

use serde::{Deserialize, Serialize};

use crate::analyzers::grade::Grade;

/// One subject entry nested inside an exam from `/api/results/student/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSubjectDetail {
    pub subject_id: i64,
    pub subject_name: String,
    #[serde(default)]
    pub subject_code: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub marks_obtained: f64,
}

/// One exam from `/api/results/student/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiExamResult {
    pub exam_id: i64,
    pub name: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    /// Maximum marks for the whole exam.
    pub marks: f64,
    #[serde(default)]
    pub min_marks: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub class_id: Option<i64>,
    #[serde(default)]
    pub subjects: Vec<ApiSubjectDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectScore {
    pub subject_id: String,
    pub subject_name: String,
    pub kind: Option<String>,
    pub max_marks: f64,
    pub obtained_marks: f64,
    pub percentage: f64,
    pub grade: Grade,
}

/// A single exam for one student, with derived totals and grades.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExamResult {
    pub id: String,
    pub exam_id: i64,
    pub student_id: String,
    pub exam_name: String,
    pub exam_date: String,
    pub release_date: String,
    pub status: Option<String>,
    pub total_marks: f64,
    pub min_marks: Option<f64>,
    pub obtained_marks: f64,
    pub percentage: f64,
    pub grade: Grade,
    pub rank: Option<u32>,
    pub subjects: Vec<SubjectScore>,
}

impl ExamResult {
    /// Whether the total clears the passing threshold, if the exam has one.
    pub fn passed(&self) -> Option<bool> {
        self.min_marks.map(|min| self.obtained_marks >= min)
    }
}
