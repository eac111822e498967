//! Converts results-server payloads into [`ExamResult`]s.

use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::analyzers::grade::{calculate_percentage, percentage_to_grade};
use crate::model::{ApiExamResult, ApiSubjectDetail, ExamResult, SubjectScore};

/// Marks a single subject is out of.
///
/// The server only reports the maximum for the whole exam, so the
/// per-subject maximum has to be chosen by the client.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubjectMaxMarks {
    /// Every subject is out of the same fixed number.
    Fixed(f64),
    /// Every subject is out of the exam's total marks.
    ExamTotal,
    /// The exam's total marks are split evenly across its subjects.
    EvenSplit,
}

pub const DEFAULT_SUBJECT_MAX_MARKS: f64 = 10.0;

impl Default for SubjectMaxMarks {
    fn default() -> Self {
        SubjectMaxMarks::Fixed(DEFAULT_SUBJECT_MAX_MARKS)
    }
}

impl SubjectMaxMarks {
    pub fn resolve(&self, exam: &ApiExamResult) -> f64 {
        match self {
            SubjectMaxMarks::Fixed(max) => *max,
            SubjectMaxMarks::ExamTotal => exam.marks,
            SubjectMaxMarks::EvenSplit => {
                if exam.subjects.is_empty() {
                    exam.marks
                } else {
                    exam.marks / exam.subjects.len() as f64
                }
            }
        }
    }
}

impl fmt::Display for SubjectMaxMarks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubjectMaxMarks::Fixed(max) => write!(f, "{max}"),
            SubjectMaxMarks::ExamTotal => f.write_str("exam-total"),
            SubjectMaxMarks::EvenSplit => f.write_str("even-split"),
        }
    }
}

/// Accepts `exam-total`, `even-split`, or a positive number.
impl FromStr for SubjectMaxMarks {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "exam-total" => Ok(SubjectMaxMarks::ExamTotal),
            "even-split" => Ok(SubjectMaxMarks::EvenSplit),
            other => {
                let max: f64 = other
                    .parse()
                    .map_err(|_| anyhow::anyhow!("invalid subject max marks '{other}'"))?;
                if max.is_nan() || max <= 0.0 {
                    anyhow::bail!("subject max marks must be positive, got {max}");
                }
                Ok(SubjectMaxMarks::Fixed(max))
            }
        }
    }
}

impl SubjectScore {
    pub fn from_api(subject: &ApiSubjectDetail, max_marks: f64) -> Self {
        let percentage = calculate_percentage(subject.marks_obtained, max_marks);
        SubjectScore {
            subject_id: subject.subject_id.to_string(),
            subject_name: subject.subject_name.clone(),
            kind: subject.kind.clone(),
            max_marks,
            obtained_marks: subject.marks_obtained,
            percentage,
            grade: percentage_to_grade(percentage),
        }
    }
}

impl ExamResult {
    pub fn from_api(exam: &ApiExamResult, student_id: &str, policy: SubjectMaxMarks) -> Self {
        let subject_max = policy.resolve(exam);
        let subjects: Vec<SubjectScore> = exam
            .subjects
            .iter()
            .map(|s| SubjectScore::from_api(s, subject_max))
            .collect();

        let obtained_marks: f64 = exam.subjects.iter().map(|s| s.marks_obtained).sum();
        let percentage = calculate_percentage(obtained_marks, exam.marks);

        debug!(
            exam_id = exam.exam_id,
            subjects = subjects.len(),
            obtained_marks,
            total_marks = exam.marks,
            "Normalized exam"
        );

        ExamResult {
            id: format!("exam-{}-{}", exam.exam_id, student_id),
            exam_id: exam.exam_id,
            student_id: student_id.to_string(),
            exam_name: exam.name.clone(),
            exam_date: exam.start_date.clone(),
            release_date: exam.end_date.clone().unwrap_or_default(),
            status: exam.status.clone(),
            total_marks: exam.marks,
            min_marks: exam.min_marks,
            obtained_marks,
            percentage,
            grade: percentage_to_grade(percentage),
            rank: None,
            subjects,
        }
    }
}

/// Normalizes every exam in a server response.
pub fn normalize_all(
    exams: &[ApiExamResult],
    student_id: &str,
    policy: SubjectMaxMarks,
) -> Vec<ExamResult> {
    exams
        .iter()
        .map(|e| ExamResult::from_api(e, student_id, policy))
        .collect()
}

/// The exam with the highest `exam_id`.
pub fn latest_exam(exams: &[ApiExamResult]) -> Option<&ApiExamResult> {
    exams.iter().max_by_key(|e| e.exam_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::grade::Grade;

    fn api_exam(exam_id: i64, marks: f64, obtained: &[f64]) -> ApiExamResult {
        ApiExamResult {
            exam_id,
            name: format!("Exam {exam_id}"),
            start_date: "2024-03-01".to_string(),
            end_date: Some("2024-03-05".to_string()),
            marks,
            min_marks: Some(marks * 0.35),
            status: Some("Active".to_string()),
            class_id: Some(4),
            subjects: obtained
                .iter()
                .enumerate()
                .map(|(i, m)| ApiSubjectDetail {
                    subject_id: i as i64 + 1,
                    subject_name: format!("Subject {}", i + 1),
                    subject_code: None,
                    kind: Some("Theory".to_string()),
                    marks_obtained: *m,
                })
                .collect(),
        }
    }

    #[test]
    fn test_fixed_policy_uses_placeholder_max() {
        let exam = api_exam(7, 40.0, &[5.0, 6.0, 7.0, 8.0]);
        let result = ExamResult::from_api(&exam, "11", SubjectMaxMarks::default());

        assert_eq!(result.id, "exam-7-11");
        assert_eq!(result.obtained_marks, 26.0);
        assert_eq!(result.percentage, 65.0);
        assert_eq!(result.grade, Grade::CPlus);
        assert_eq!(result.subjects[0].max_marks, 10.0);
        assert_eq!(result.subjects[3].percentage, 80.0);
        assert_eq!(result.subjects[3].grade, Grade::BPlus);
        assert_eq!(result.release_date, "2024-03-05");
    }

    #[test]
    fn test_exam_total_policy() {
        let exam = api_exam(1, 50.0, &[25.0]);
        let result = ExamResult::from_api(&exam, "1", SubjectMaxMarks::ExamTotal);
        assert_eq!(result.subjects[0].max_marks, 50.0);
        assert_eq!(result.subjects[0].percentage, 50.0);
    }

    #[test]
    fn test_even_split_policy() {
        let exam = api_exam(1, 40.0, &[9.0, 10.0]);
        let result = ExamResult::from_api(&exam, "1", SubjectMaxMarks::EvenSplit);
        assert_eq!(result.subjects[0].max_marks, 20.0);
        assert_eq!(result.subjects[1].percentage, 50.0);
    }

    #[test]
    fn test_zero_total_marks() {
        let exam = api_exam(1, 0.0, &[3.0]);
        let result = ExamResult::from_api(&exam, "1", SubjectMaxMarks::ExamTotal);
        assert_eq!(result.percentage, 0.0);
        assert_eq!(result.grade, Grade::F);
        assert_eq!(result.subjects[0].percentage, 0.0);
    }

    #[test]
    fn test_latest_exam_by_id() {
        let exams = vec![api_exam(3, 10.0, &[]), api_exam(9, 10.0, &[]), api_exam(5, 10.0, &[])];
        assert_eq!(latest_exam(&exams).unwrap().exam_id, 9);
        assert!(latest_exam(&[]).is_none());
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("exam-total".parse::<SubjectMaxMarks>().unwrap(), SubjectMaxMarks::ExamTotal);
        assert_eq!("even-split".parse::<SubjectMaxMarks>().unwrap(), SubjectMaxMarks::EvenSplit);
        assert_eq!("20".parse::<SubjectMaxMarks>().unwrap(), SubjectMaxMarks::Fixed(20.0));
        assert!("0".parse::<SubjectMaxMarks>().is_err());
        assert!("lots".parse::<SubjectMaxMarks>().is_err());
    }

    #[test]
    fn test_passed() {
        let exam = api_exam(1, 100.0, &[20.0, 20.0]);
        let result = ExamResult::from_api(&exam, "1", SubjectMaxMarks::default());
        assert_eq!(result.passed(), Some(true));
    }
}
