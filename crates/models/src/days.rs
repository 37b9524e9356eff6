use chrono::Weekday;
use serde::Serialize;
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::{BitAnd, BitOr, BitOrAssign},
    str::FromStr,
};

/// The days of the week a weekly meeting recurs on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
#[repr(transparent)]
pub struct DaySet(u8);

impl DaySet {
    pub const MONDAY: Self = DaySet(1 << 0);
    pub const TUESDAY: Self = DaySet(1 << 1);
    pub const WEDNESDAY: Self = DaySet(1 << 2);
    pub const THURSDAY: Self = DaySet(1 << 3);
    pub const FRIDAY: Self = DaySet(1 << 4);
    pub const SATURDAY: Self = DaySet(1 << 5);
    pub const SUNDAY: Self = DaySet(1 << 6);

    pub const WEEKDAYS: Self = DaySet(0b0011111);
    pub const NONE: Self = DaySet(0);

    /// Registrar day letters, in week order
    const DAY_CHARS: [(Self, char); 7] = [
        (Self::MONDAY, 'M'),
        (Self::TUESDAY, 'T'),
        (Self::WEDNESDAY, 'W'),
        (Self::THURSDAY, 'R'),
        (Self::FRIDAY, 'F'),
        (Self::SATURDAY, 'S'),
        (Self::SUNDAY, 'U'),
    ];

    pub fn contains(self, day: Self) -> bool {
        (self & day) == day
    }

    /// Whether the two sets share at least one day
    pub fn intersects(self, other: Self) -> bool {
        (self & other) != Self::NONE
    }

    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }

    /// Iterates over the single days contained in this set
    pub fn iter(self) -> impl Iterator<Item = Self> {
        Self::DAY_CHARS
            .into_iter()
            .map(|(day, _)| day)
            .filter(move |&day| self.contains(day))
    }
}

impl From<Weekday> for DaySet {
    fn from(weekday: Weekday) -> Self {
        DaySet(1 << weekday.num_days_from_monday())
    }
}

impl FromIterator<Weekday> for DaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::NONE, |acc, weekday| acc | Self::from(weekday))
    }
}

/// Error returned when a day string contains a letter that is not a day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDaysError(pub char);

impl Display for ParseDaysError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "'{}' is not a day letter (expected one of MTWRFSU)", self.0)
    }
}

impl std::error::Error for ParseDaysError {}

impl FromStr for DaySet {
    type Err = ParseDaysError;

    fn from_str(days: &str) -> Result<Self, Self::Err> {
        days.chars()
            .filter(|c| !c.is_whitespace())
            .try_fold(Self::NONE, |acc, c| {
                Self::DAY_CHARS
                    .iter()
                    .find(|&&(_, day_char)| day_char == c.to_ascii_uppercase())
                    .map(|&(day, _)| acc | day)
                    .ok_or(ParseDaysError(c))
            })
    }
}

impl Display for DaySet {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for &(day, day_char) in &Self::DAY_CHARS {
            if self.contains(day) {
                write!(f, "{day_char}")?;
            }
        }

        Ok(())
    }
}

impl From<DaySet> for String {
    fn from(days: DaySet) -> Self {
        days.to_string()
    }
}

impl BitOr for DaySet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        DaySet(self.0 | rhs.0)
    }
}

impl BitAnd for DaySet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        DaySet(self.0 & rhs.0)
    }
}

impl BitOrAssign for DaySet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
