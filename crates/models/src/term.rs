use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt::{Display as FmtDisplay, Formatter, Result as FmtResult};
use strum::{AsRefStr, Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, AsRefStr, Display)]
pub enum Season {
    Fall,
    Spring,
    Summer,
}

impl Season {
    /// Season of a term starting in the given month (1-12).
    ///
    /// Ranges are checked in order, so a June start is a Spring term.
    pub fn from_start_month(month: u32) -> Option<Self> {
        match month {
            9..=12 => Some(Self::Fall),
            1..=6 => Some(Self::Spring),
            7..=8 => Some(Self::Summer),
            _ => None,
        }
    }
}

/// Error returned when a term's dates are not usable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermError {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl FmtDisplay for TermError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "term ends ({}) before it starts ({})", self.end, self.start)
    }
}

impl std::error::Error for TermError {}

/// The calendar identity of a semester
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Term {
    pub season: Season,
    pub year: i32,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Whole weeks between `start` and `end`
    pub weeks: i64,
}

impl Term {
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Result<Self, TermError> {
        if end < start {
            return Err(TermError { start, end });
        }

        // month() is always 1-12
        let season = Season::from_start_month(start.month()).unwrap_or(Season::Fall);

        Ok(Self {
            season,
            year: start.year(),
            start,
            end,
            weeks: (end - start).num_weeks(),
        })
    }

    /// Display name, e.g. `"Fall - 2024"`
    pub fn name(&self) -> String {
        self.to_string()
    }

    pub fn is_fall(&self) -> bool {
        self.season == Season::Fall
    }

    pub fn is_spring(&self) -> bool {
        self.season == Season::Spring
    }

    pub fn is_summer(&self) -> bool {
        self.season == Season::Summer
    }
}

impl FmtDisplay for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} - {}", self.season, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_season_from_start_month() {
        assert_eq!(Season::from_start_month(9), Some(Season::Fall));
        assert_eq!(Season::from_start_month(12), Some(Season::Fall));
        assert_eq!(Season::from_start_month(1), Some(Season::Spring));
        assert_eq!(Season::from_start_month(6), Some(Season::Spring));
        assert_eq!(Season::from_start_month(7), Some(Season::Summer));
        assert_eq!(Season::from_start_month(8), Some(Season::Summer));
        assert_eq!(Season::from_start_month(13), None);
    }

    #[test]
    fn test_fall_2024_term() {
        let term = Term::from_dates(date(2024, 9, 2), date(2024, 12, 13)).unwrap();

        assert_eq!(term.name(), "Fall - 2024");
        assert_eq!(term.weeks, 14);
        assert!(term.is_fall());
        assert!(!term.is_spring());
        assert!(!term.is_summer());
    }

    #[test]
    fn test_partial_weeks_are_truncated() {
        let term = Term::from_dates(date(2025, 7, 1), date(2025, 7, 14)).unwrap();
        assert_eq!(term.weeks, 1);
        assert_eq!(term.name(), "Summer - 2025");

        let same_day = Term::from_dates(date(2025, 1, 13), date(2025, 1, 13)).unwrap();
        assert_eq!(same_day.weeks, 0);
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let err = Term::from_dates(date(2024, 12, 13), date(2024, 9, 2)).unwrap_err();
        assert_eq!(err.start, date(2024, 12, 13));
    }
}
