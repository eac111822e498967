use crate::analyzers::extremal::{best_subject, weakest_subject};
use crate::analyzers::types::{ExamSummary, SubjectHighlight};
use crate::model::{ExamResult, SubjectScore};

/// Percentage an exam is compared against for the "above average" flag.
pub const REFERENCE_AVERAGE: f64 = 75.0;

impl From<&SubjectScore> for SubjectHighlight {
    fn from(s: &SubjectScore) -> Self {
        SubjectHighlight {
            subject_name: s.subject_name.clone(),
            obtained_marks: s.obtained_marks,
            max_marks: s.max_marks,
            percentage: s.percentage,
            grade: s.grade,
        }
    }
}

impl ExamSummary {
    pub fn from_exam(exam: &ExamResult) -> Self {
        ExamSummary {
            exam_name: exam.exam_name.clone(),
            exam_date: exam.exam_date.clone(),
            obtained_marks: exam.obtained_marks,
            total_marks: exam.total_marks,
            percentage: exam.percentage,
            grade: exam.grade,
            color: exam.grade.color(),
            above_average: exam.percentage > REFERENCE_AVERAGE,
            passed: exam.passed(),
            subject_count: exam.subjects.len(),
            strongest: best_subject(&exam.subjects).ok().map(SubjectHighlight::from),
            weakest: weakest_subject(&exam.subjects).ok().map(SubjectHighlight::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::color::{Palette, Tier};
    use crate::analyzers::grade::{Grade, percentage_to_grade};

    fn subject(name: &str, obtained: f64) -> SubjectScore {
        SubjectScore {
            subject_id: name.to_lowercase(),
            subject_name: name.to_string(),
            kind: None,
            max_marks: 100.0,
            obtained_marks: obtained,
            percentage: obtained,
            grade: percentage_to_grade(obtained),
        }
    }

    fn midterm() -> ExamResult {
        ExamResult {
            id: "exam-1-1".to_string(),
            exam_id: 1,
            student_id: "1".to_string(),
            exam_name: "Midterm Examination".to_string(),
            exam_date: "2023-10-15".to_string(),
            release_date: "2023-10-25".to_string(),
            status: None,
            total_marks: 500.0,
            min_marks: None,
            obtained_marks: 438.0,
            percentage: 88.0,
            grade: Grade::AMinus,
            rank: Some(3),
            subjects: vec![
                subject("Mathematics", 92.0),
                subject("Science", 88.0),
                subject("English", 78.0),
                subject("History", 85.0),
                subject("Computer Science", 95.0),
            ],
        }
    }

    #[test]
    fn test_summary_highlights() {
        let summary = ExamSummary::from_exam(&midterm());

        assert_eq!(summary.subject_count, 5);
        assert!(summary.above_average);
        assert_eq!(summary.passed, None);
        assert_eq!(summary.color.palette, Palette::Accent);
        assert_eq!(summary.color.tier(), Tier::Success);

        let strongest = summary.strongest.unwrap();
        assert_eq!(strongest.subject_name, "Computer Science");
        assert_eq!(strongest.grade, Grade::APlus);

        let weakest = summary.weakest.unwrap();
        assert_eq!(weakest.subject_name, "English");
        assert_eq!(weakest.grade, Grade::B);
    }

    #[test]
    fn test_summary_without_subjects() {
        let mut exam = midterm();
        exam.subjects.clear();
        exam.percentage = 75.0;

        let summary = ExamSummary::from_exam(&exam);
        assert!(summary.strongest.is_none());
        assert!(summary.weakest.is_none());
        assert!(!summary.above_average);
    }
}
