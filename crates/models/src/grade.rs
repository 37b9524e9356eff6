use serde::Serialize;
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Letter grades recorded by the registrar
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, EnumIter, AsRefStr, Display,
)]
pub enum LetterGrade {
    #[strum(serialize = "A")]
    A,
    #[strum(serialize = "B+")]
    BPlus,
    #[strum(serialize = "B")]
    B,
    #[strum(serialize = "C+")]
    CPlus,
    #[strum(serialize = "C")]
    C,
    #[strum(serialize = "D+")]
    DPlus,
    #[strum(serialize = "D")]
    D,
    #[strum(serialize = "F")]
    F,
}

impl LetterGrade {
    /// Grade points on the 4.0 scale
    pub const fn points(self) -> f64 {
        match self {
            Self::A => 4.0,
            Self::BPlus => 3.5,
            Self::B => 3.0,
            Self::CPlus => 2.5,
            Self::C => 2.0,
            Self::DPlus => 1.5,
            Self::D => 1.0,
            Self::F => 0.0,
        }
    }
}

/// Converts a letter grade string to grade points.
///
/// Letters that are not on the scale count as 0.0, the same as an F.
pub fn grade_points(letter: &str) -> f64 {
    LetterGrade::from_str(letter).map_or(0.0, LetterGrade::points)
}

/// Academic standing derived from a GPA
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, Display)]
pub enum GpaStatus {
    #[strum(serialize = "Highest Honors")]
    HighestHonors,
    #[strum(serialize = "Dean's List")]
    DeansList,
    #[strum(serialize = "Honors")]
    Honors,
    #[strum(serialize = "Normal")]
    Normal,
    #[strum(serialize = "Probation")]
    Probation,
}

impl GpaStatus {
    /// Classifies a GPA, thresholds checked from the top down.
    ///
    /// The `< 3.00` branch catches every GPA below Honors, so `Probation`
    /// is never produced.
    #[allow(clippy::if_same_then_else)]
    pub fn from_gpa(gpa: f64) -> Self {
        if gpa >= 3.90 {
            Self::HighestHonors
        } else if gpa >= 3.50 {
            Self::DeansList
        } else if gpa >= 3.00 {
            Self::Honors
        } else if gpa < 3.00 {
            Self::Normal
        } else if gpa < 1.75 {
            Self::Probation
        } else {
            // NaN
            Self::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_letter_grade_parse() {
        assert_eq!("A".parse::<LetterGrade>().unwrap(), LetterGrade::A);
        assert_eq!("B+".parse::<LetterGrade>().unwrap(), LetterGrade::BPlus);
        assert_eq!("D+".parse::<LetterGrade>().unwrap(), LetterGrade::DPlus);
        assert!("A-".parse::<LetterGrade>().is_err());
        assert_eq!(LetterGrade::CPlus.to_string(), "C+");
    }

    #[test]
    fn test_grade_points_scale() {
        let expected = [
            ("A", 4.0),
            ("B+", 3.5),
            ("B", 3.0),
            ("C+", 2.5),
            ("C", 2.0),
            ("D+", 1.5),
            ("D", 1.0),
            ("F", 0.0),
        ];

        for (letter, points) in expected {
            assert_eq!(grade_points(letter), points, "{letter}");
        }
        assert_eq!(LetterGrade::iter().count(), expected.len());
    }

    #[test]
    fn test_unknown_letter_counts_as_zero() {
        assert_eq!(grade_points("A-"), 0.0);
        assert_eq!(grade_points("a"), 0.0);
        assert_eq!(grade_points(""), 0.0);
    }

    #[test]
    fn test_gpa_status_thresholds() {
        assert_eq!(GpaStatus::from_gpa(4.00), GpaStatus::HighestHonors);
        assert_eq!(GpaStatus::from_gpa(3.90), GpaStatus::HighestHonors);
        assert_eq!(GpaStatus::from_gpa(3.89), GpaStatus::DeansList);
        assert_eq!(GpaStatus::from_gpa(3.50), GpaStatus::DeansList);
        assert_eq!(GpaStatus::from_gpa(3.49), GpaStatus::Honors);
        assert_eq!(GpaStatus::from_gpa(3.00), GpaStatus::Honors);
        assert_eq!(GpaStatus::from_gpa(2.99), GpaStatus::Normal);
        assert_eq!(GpaStatus::from_gpa(0.00), GpaStatus::Normal);
    }

    #[test]
    fn test_probation_is_unreachable() {
        for hundredths in 0..=400 {
            let gpa = f64::from(hundredths) / 100.0;
            assert_ne!(GpaStatus::from_gpa(gpa), GpaStatus::Probation, "{gpa}");
        }
        assert_eq!(GpaStatus::from_gpa(1.74), GpaStatus::Normal);
    }

    #[test]
    fn test_gpa_status_display() {
        assert_eq!(GpaStatus::HighestHonors.to_string(), "Highest Honors");
        assert_eq!(GpaStatus::DeansList.to_string(), "Dean's List");
    }
}
