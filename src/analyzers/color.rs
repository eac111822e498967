//! Display colors for grades.

use serde::Serialize;
use std::fmt;

use crate::analyzers::grade::Grade;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    Primary,
    Accent,
    Warning,
    Error,
    Gray,
}

/// Semantic category a color communicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Success,
    Info,
    Warning,
    Error,
    Neutral,
}

/// A palette entry such as `accent-500`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColorToken {
    pub palette: Palette,
    pub shade: u16,
}

/// Returned for labels outside the grade scale.
pub const NEUTRAL: ColorToken = ColorToken::new(Palette::Gray, 500);

impl ColorToken {
    pub const fn new(palette: Palette, shade: u16) -> Self {
        Self { palette, shade }
    }

    pub fn tier(&self) -> Tier {
        match self.palette {
            Palette::Accent => Tier::Success,
            Palette::Primary => Tier::Info,
            Palette::Warning => Tier::Warning,
            Palette::Error => Tier::Error,
            Palette::Gray => Tier::Neutral,
        }
    }

    /// Hex value of the token, or `None` for shades missing from the palette.
    pub fn hex(&self) -> Option<&'static str> {
        let shades: &[(u16, &str)] = match self.palette {
            Palette::Primary => &[
                (300, "#64B5F6"),
                (400, "#42A5F5"),
                (500, "#1C6DD0"),
            ],
            Palette::Accent => &[
                (400, "#66BB6A"),
                (500, "#3FCA89"),
            ],
            Palette::Warning => &[
                (300, "#FFD54F"),
                (400, "#FFCA28"),
                (500, "#FF9F43"),
                (600, "#FFB300"),
            ],
            Palette::Error => &[
                (300, "#E57373"),
                (500, "#FF5A5A"),
            ],
            Palette::Gray => &[(500, "#9E9E9E")],
        };
        shades
            .iter()
            .find(|(shade, _)| *shade == self.shade)
            .map(|(_, hex)| *hex)
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.palette {
            Palette::Primary => "primary",
            Palette::Accent => "accent",
            Palette::Warning => "warning",
            Palette::Error => "error",
            Palette::Gray => "gray",
        };
        write!(f, "{name}-{}", self.shade)
    }
}

impl Grade {
    /// Minus grades share the color of their base letter.
    pub fn color(self) -> ColorToken {
        match self {
            Grade::APlus | Grade::A | Grade::AMinus => ColorToken::new(Palette::Accent, 500),
            Grade::BPlus | Grade::B | Grade::BMinus => ColorToken::new(Palette::Primary, 400),
            Grade::CPlus => ColorToken::new(Palette::Warning, 300),
            Grade::C | Grade::CMinus => ColorToken::new(Palette::Warning, 400),
            Grade::DPlus => ColorToken::new(Palette::Warning, 600),
            Grade::D => ColorToken::new(Palette::Error, 300),
            Grade::F => ColorToken::new(Palette::Error, 500),
        }
    }
}

/// Looks up the display color for a grade label.
///
/// `-` modifiers are stripped before the lookup, so `"A-"` shares the
/// color of `"A"`. Labels that are not on the scale get [`NEUTRAL`].
pub fn grade_to_color(label: &str) -> ColorToken {
    let key = label.trim().replace('-', "");
    key.parse::<Grade>().map(Grade::color).unwrap_or(NEUTRAL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::grade::percentage_to_grade;

    #[test]
    fn test_every_producible_grade_has_a_real_color() {
        for p in 0..=100 {
            let grade = percentage_to_grade(p as f64);
            let color = grade_to_color(grade.label());
            assert_ne!(color, NEUTRAL, "{grade} fell back to neutral");
            assert!(color.hex().is_some());
        }
    }

    #[test]
    fn test_minus_modifier_is_stripped() {
        assert_eq!(grade_to_color("A-"), Grade::A.color());
        assert_eq!(grade_to_color("C-"), Grade::C.color());
        assert_eq!(grade_to_color("B+"), Grade::BPlus.color());
    }

    #[test]
    fn test_label_and_typed_lookups_agree() {
        for grade in Grade::ALL {
            assert_eq!(grade_to_color(grade.label()), grade.color(), "{grade}");
        }
        assert_eq!(Grade::AMinus.color(), ColorToken::new(Palette::Accent, 500));
        assert_eq!(Grade::BMinus.color(), ColorToken::new(Palette::Primary, 400));
        assert_eq!(Grade::CMinus.color(), ColorToken::new(Palette::Warning, 400));
    }

    #[test]
    fn test_unknown_label_is_neutral() {
        assert_eq!(grade_to_color("Z"), NEUTRAL);
        assert_eq!(grade_to_color(""), NEUTRAL);
        assert_eq!(NEUTRAL.hex(), Some("#9E9E9E"));
        assert_eq!(NEUTRAL.tier(), Tier::Neutral);
    }

    #[test]
    fn test_tiers() {
        assert_eq!(Grade::APlus.color().tier(), Tier::Success);
        assert_eq!(Grade::B.color().tier(), Tier::Info);
        assert_eq!(Grade::C.color().tier(), Tier::Warning);
        assert_eq!(Grade::F.color().tier(), Tier::Error);
    }

    #[test]
    fn test_display() {
        assert_eq!(Grade::F.color().to_string(), "error-500");
        assert_eq!(Grade::F.color().hex(), Some("#FF5A5A"));
    }
}
