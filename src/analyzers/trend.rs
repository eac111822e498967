use serde::Serialize;

/// Change in percentage between two exams.
///
/// | Difference | Status                  |
/// |------------|-------------------------|
/// | > 5        | significant-improvement |
/// | > 0        | improvement             |
/// | < -5       | significant-decline     |
/// | < 0        | decline                 |
/// | 0          | stable                  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PerformanceStatus {
    SignificantImprovement,
    Improvement,
    Stable,
    Decline,
    SignificantDecline,
}

impl PerformanceStatus {
    pub fn from_change(current: f64, previous: f64) -> Self {
        let diff = current - previous;
        match diff {
            d if d > 5.0 => PerformanceStatus::SignificantImprovement,
            d if d > 0.0 => PerformanceStatus::Improvement,
            d if d < -5.0 => PerformanceStatus::SignificantDecline,
            d if d < 0.0 => PerformanceStatus::Decline,
            _ => PerformanceStatus::Stable,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PerformanceStatus::SignificantImprovement => "significant-improvement",
            PerformanceStatus::Improvement => "improvement",
            PerformanceStatus::Stable => "stable",
            PerformanceStatus::Decline => "decline",
            PerformanceStatus::SignificantDecline => "significant-decline",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            PerformanceStatus::SignificantImprovement => "🚀",
            PerformanceStatus::Improvement => "📈",
            PerformanceStatus::Stable => "📊",
            PerformanceStatus::Decline => "📉",
            PerformanceStatus::SignificantDecline => "⚠️",
        }
    }
}
