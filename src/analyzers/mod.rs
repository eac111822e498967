//! Grading and performance analysis.
//!
//! Maps percentages to letter grades and display colors, ranks subjects
//! within an exam, and summarizes a student's exam history.

pub mod color;
pub mod extremal;
pub mod grade;
pub mod history;
pub mod summary;
pub mod trend;
pub mod types;

pub use color::{ColorToken, Palette, Tier, grade_to_color};
pub use extremal::{Direction, best_subject, extremal_subject, weakest_subject};
pub use grade::{Grade, calculate_percentage, percentage_to_grade};
pub use history::analyze_history;
pub use trend::PerformanceStatus;
pub use types::{ExamSummary, PerformanceHistory, SubjectHighlight, TrendPoint};
