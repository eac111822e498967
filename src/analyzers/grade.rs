use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Letter grade on the twelve-band scale.
///
/// Variants are declared from lowest to highest so the derived `Ord`
/// matches grade quality (`Grade::F < Grade::APlus`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "F")]
    F,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "D+")]
    DPlus,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A+")]
    APlus,
}

/// Minimum percentage for each band, highest band first.
///
/// | Range  | Grade |
/// |--------|-------|
/// | >= 95  | A+    |
/// | >= 90  | A     |
/// | >= 85  | A-    |
/// | >= 80  | B+    |
/// | >= 75  | B     |
/// | >= 70  | B-    |
/// | >= 65  | C+    |
/// | >= 60  | C     |
/// | >= 55  | C-    |
/// | >= 50  | D+    |
/// | >= 45  | D     |
/// | < 45   | F     |
pub static GRADE_SCALE: &[(f64, Grade)] = &[
    (95.0, Grade::APlus),
    (90.0, Grade::A),
    (85.0, Grade::AMinus),
    (80.0, Grade::BPlus),
    (75.0, Grade::B),
    (70.0, Grade::BMinus),
    (65.0, Grade::CPlus),
    (60.0, Grade::C),
    (55.0, Grade::CMinus),
    (50.0, Grade::DPlus),
    (45.0, Grade::D),
    (0.0, Grade::F),
];

impl Grade {
    /// All grades from highest to lowest.
    pub const ALL: [Grade; 12] = [
        Grade::APlus,
        Grade::A,
        Grade::AMinus,
        Grade::BPlus,
        Grade::B,
        Grade::BMinus,
        Grade::CPlus,
        Grade::C,
        Grade::CMinus,
        Grade::DPlus,
        Grade::D,
        Grade::F,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::CMinus => "C-",
            Grade::DPlus => "D+",
            Grade::D => "D",
            Grade::F => "F",
        }
    }

    /// Lowest percentage that still earns this grade.
    pub fn min_percentage(self) -> f64 {
        GRADE_SCALE
            .iter()
            .find(|(_, g)| *g == self)
            .map(|(min, _)| *min)
            .unwrap_or(0.0)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Grade {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grade::ALL
            .iter()
            .copied()
            .find(|g| g.label() == s.trim())
            .ok_or_else(|| anyhow::anyhow!("unknown grade label '{s}'"))
    }
}

/// Converts a percentage (0–100) into a letter grade.
///
/// Total over every `f64`: values above 100 land in `A+`, negative values
/// and NaN fall through to `F`.
pub fn percentage_to_grade(percentage: f64) -> Grade {
    GRADE_SCALE
        .iter()
        .find(|(min, _)| percentage >= *min)
        .map(|(_, grade)| *grade)
        .unwrap_or(Grade::F)
}

/// Marks obtained as a whole-number percentage of `total`.
///
/// Returns 0.0 when `total` is not positive.
pub fn calculate_percentage(obtained: f64, total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    (obtained / total * 100.0).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(percentage_to_grade(100.0), Grade::APlus);
        assert_eq!(percentage_to_grade(95.0), Grade::APlus);
        assert_eq!(percentage_to_grade(94.9), Grade::A);
        assert_eq!(percentage_to_grade(90.0), Grade::A);
        assert_eq!(percentage_to_grade(89.0), Grade::AMinus);
        assert_eq!(percentage_to_grade(85.0), Grade::AMinus);
        assert_eq!(percentage_to_grade(84.0), Grade::BPlus);
        assert_eq!(percentage_to_grade(75.0), Grade::B);
        assert_eq!(percentage_to_grade(70.0), Grade::BMinus);
        assert_eq!(percentage_to_grade(65.0), Grade::CPlus);
        assert_eq!(percentage_to_grade(60.0), Grade::C);
        assert_eq!(percentage_to_grade(55.0), Grade::CMinus);
        assert_eq!(percentage_to_grade(50.0), Grade::DPlus);
        assert_eq!(percentage_to_grade(45.0), Grade::D);
        assert_eq!(percentage_to_grade(44.0), Grade::F);
        assert_eq!(percentage_to_grade(0.0), Grade::F);
    }

    #[test]
    fn test_every_band_minimum_maps_to_itself() {
        for (i, (min, grade)) in GRADE_SCALE.iter().enumerate() {
            assert_eq!(percentage_to_grade(*min), *grade);
            if let Some((_, lower)) = GRADE_SCALE.get(i + 1) {
                assert_eq!(percentage_to_grade(*min - 1.0), *lower);
            }
        }
    }

    #[test]
    fn test_out_of_range_inputs_never_panic() {
        assert_eq!(percentage_to_grade(-12.0), Grade::F);
        assert_eq!(percentage_to_grade(f64::NAN), Grade::F);
        assert_eq!(percentage_to_grade(250.0), Grade::APlus);
        assert_eq!(percentage_to_grade(f64::NEG_INFINITY), Grade::F);
    }

    #[test]
    fn test_monotonic_over_range() {
        let mut previous = percentage_to_grade(0.0);
        for tenth in 0..=1000 {
            let current = percentage_to_grade(tenth as f64 / 10.0);
            assert!(current >= previous, "grade dropped at {}", tenth as f64 / 10.0);
            previous = current;
        }
    }

    #[test]
    fn test_label_round_trip() {
        for grade in Grade::ALL {
            assert_eq!(grade.label().parse::<Grade>().unwrap(), grade);
        }
        assert!("E".parse::<Grade>().is_err());
    }

    #[test]
    fn test_min_percentage() {
        assert_eq!(Grade::AMinus.min_percentage(), 85.0);
        assert_eq!(Grade::F.min_percentage(), 0.0);
    }

    #[test]
    fn test_calculate_percentage() {
        assert_eq!(calculate_percentage(425.0, 500.0), 85.0);
        assert_eq!(calculate_percentage(2.0, 3.0), 67.0);
        assert_eq!(calculate_percentage(1.0, 8.0), 13.0);
        assert_eq!(calculate_percentage(5.0, 0.0), 0.0);
    }
}
