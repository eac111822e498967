use crate::analyzers::grade::percentage_to_grade;
use crate::analyzers::trend::PerformanceStatus;
use crate::analyzers::types::{PerformanceHistory, TrendPoint};
use crate::model::ExamResult;

/// Arithmetic mean. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation around a pre-computed mean.
pub fn stddev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Orders a student's exams chronologically and summarizes the series.
///
/// Exams are sorted by start date, then by exam id. Dates are compared as
/// strings, which is chronological for the server's `YYYY-MM-DD` format.
pub fn analyze_history(exams: &[ExamResult]) -> PerformanceHistory {
    let mut ordered: Vec<&ExamResult> = exams.iter().collect();
    ordered.sort_by(|a, b| {
        a.exam_date
            .cmp(&b.exam_date)
            .then_with(|| a.exam_id.cmp(&b.exam_id))
    });

    let points: Vec<TrendPoint> = ordered
        .iter()
        .map(|e| TrendPoint {
            exam_id: e.exam_id,
            exam_name: e.exam_name.clone(),
            exam_date: e.exam_date.clone(),
            percentage: e.percentage,
            grade: e.grade,
        })
        .collect();

    let series: Vec<f64> = points.iter().map(|p| p.percentage).collect();
    let avg = mean(&series);
    let sd = stddev(&series, avg);

    let latest_status = match series.as_slice() {
        [.., previous, current] => Some(PerformanceStatus::from_change(*current, *previous)),
        _ => None,
    };

    // Earliest exam wins ties, matching subject ranking.
    let best_exam = points
        .iter()
        .fold(None::<&TrendPoint>, |best, p| match best {
            Some(b) if p.percentage <= b.percentage => Some(b),
            _ => Some(p),
        })
        .cloned();

    PerformanceHistory {
        exam_count: points.len(),
        mean_percentage: avg,
        stddev: sd,
        overall_grade: percentage_to_grade(avg),
        latest_status,
        best_exam,
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::grade::Grade;

    fn exam(exam_id: i64, date: &str, percentage: f64) -> ExamResult {
        ExamResult {
            id: format!("exam-{exam_id}-1"),
            exam_id,
            student_id: "1".to_string(),
            exam_name: format!("Exam {exam_id}"),
            exam_date: date.to_string(),
            release_date: String::new(),
            status: None,
            total_marks: 100.0,
            min_marks: None,
            obtained_marks: percentage,
            percentage,
            grade: percentage_to_grade(percentage),
            rank: None,
            subjects: vec![],
        }
    }

    #[test]
    fn test_mean_and_stddev() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(stddev(&[], 0.0), 0.0);
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let m = mean(&values);
        assert_eq!(m, 5.0);
        assert_eq!(stddev(&values, m), 2.0);
    }

    #[test]
    fn test_history_is_chronological() {
        let exams = vec![
            exam(3, "2024-05-01", 90.0),
            exam(1, "2023-10-15", 85.0),
            exam(2, "2023-12-10", 78.0),
        ];
        let history = analyze_history(&exams);

        let ids: Vec<i64> = history.points.iter().map(|p| p.exam_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(history.exam_count, 3);
        assert_eq!(
            history.latest_status,
            Some(PerformanceStatus::SignificantImprovement)
        );
        assert_eq!(history.best_exam.unwrap().exam_id, 3);
    }

    #[test]
    fn test_history_mean_grade() {
        let exams = vec![exam(1, "2024-01-01", 80.0), exam(2, "2024-02-01", 90.0)];
        let history = analyze_history(&exams);
        assert_eq!(history.mean_percentage, 85.0);
        assert_eq!(history.overall_grade, Grade::AMinus);
        assert_eq!(history.stddev, 5.0);
    }

    #[test]
    fn test_single_exam_has_no_status() {
        let history = analyze_history(&[exam(1, "2024-01-01", 50.0)]);
        assert_eq!(history.latest_status, None);
        assert_eq!(history.stddev, 0.0);
    }

    #[test]
    fn test_empty_history() {
        let history = analyze_history(&[]);
        assert_eq!(history.exam_count, 0);
        assert_eq!(history.overall_grade, Grade::F);
        assert!(history.best_exam.is_none());
    }

    #[test]
    fn test_best_exam_tie_keeps_earliest() {
        let exams = vec![exam(2, "2024-02-01", 88.0), exam(1, "2024-01-01", 88.0)];
        assert_eq!(analyze_history(&exams).best_exam.unwrap().exam_id, 1);
    }
}
