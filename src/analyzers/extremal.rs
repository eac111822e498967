use crate::error::GradeError;
use crate::model::SubjectScore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Max,
    Min,
}

/// Returns the subject with the highest or lowest percentage.
///
/// One left-to-right pass; the running candidate is only replaced by a
/// strictly better element, so the earliest subject wins exact ties.
///
/// # Errors
///
/// Returns [`GradeError::EmptyInput`] if `subjects` is empty.
pub fn extremal_subject(
    subjects: &[SubjectScore],
    direction: Direction,
) -> Result<&SubjectScore, GradeError> {
    let (first, rest) = subjects.split_first().ok_or(GradeError::EmptyInput)?;

    Ok(rest.iter().fold(first, |prev, current| {
        let better = match direction {
            Direction::Max => current.percentage > prev.percentage,
            Direction::Min => current.percentage < prev.percentage,
        };
        if better { current } else { prev }
    }))
}

pub fn best_subject(subjects: &[SubjectScore]) -> Result<&SubjectScore, GradeError> {
    extremal_subject(subjects, Direction::Max)
}

pub fn weakest_subject(subjects: &[SubjectScore]) -> Result<&SubjectScore, GradeError> {
    extremal_subject(subjects, Direction::Min)
}
