use crate::days::DaySet;
use chrono::NaiveTime;
use serde::Serialize;
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};
use strum::{EnumIter, EnumProperty, IntoEnumIterator};

/// Represents a time window for a meeting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeRange {
    pub begin: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    /// Creates a new `TimeRange` if `begin` is before `end`
    pub fn new(begin: NaiveTime, end: NaiveTime) -> Option<Self> {
        (begin < end).then_some(Self { begin, end })
    }

    /// Builds a range from `(hour, minute)` pairs
    pub fn from_hm(begin: (u32, u32), end: (u32, u32)) -> Option<Self> {
        let begin = NaiveTime::from_hms_opt(begin.0, begin.1, 0)?;
        let end = NaiveTime::from_hms_opt(end.0, end.1, 0)?;

        Self::new(begin, end)
    }

    /// Parses two 12-hour time strings (e.g. `"09:30AM"`) into a range
    pub fn from_strings(begin: &str, end: &str) -> Option<Self> {
        let fmt = "%I:%M%p";
        let begin = NaiveTime::parse_from_str(begin, fmt).ok()?;
        let end = NaiveTime::parse_from_str(end, fmt).ok()?;

        Self::new(begin, end)
    }

    /// Strict overlap: ranges that only touch at a boundary do not overlap
    pub fn overlaps(&self, other: &Self) -> bool {
        self.begin < other.end && other.begin < self.end
    }
}

impl Display for TimeRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}-{}", self.begin.format("%H:%M"), self.end.format("%H:%M"))
    }
}

/// Represents the place a meeting is held
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, EnumProperty, EnumIter)]
pub enum Room {
    #[strum(props(display = "TBA", parse = "TBA"))]
    ToBeAnnounced,

    #[strum(props(display = "REMOTE", parse = "REMOTE"))]
    Remote,

    /// Building and room number
    Specific(String, String),
}

impl Room {
    pub fn specific(building: impl Into<String>, number: impl Into<String>) -> Self {
        Self::Specific(building.into(), number.into())
    }

    /// Only a concrete room can be double-booked
    pub fn is_specific(&self) -> bool {
        matches!(self, Self::Specific(..))
    }
}

impl FromStr for Room {
    type Err = ();

    fn from_str(room: &str) -> Result<Self, Self::Err> {
        let room = room.trim();
        if room.is_empty() {
            return Err(());
        }

        Self::iter()
            .find(|v| v.get_str("parse") == Some(room))
            .or_else(|| {
                let mut parts = room.split_whitespace();
                Some(Self::Specific(
                    parts.next().unwrap_or("").to_string(),
                    parts.collect::<Vec<_>>().join(" "),
                ))
            })
            .ok_or(())
    }
}

impl Display for Room {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Specific(building, number) => write!(f, "{building} {number}"),
            _ => write!(f, "{}", self.get_str("display").unwrap_or_default()),
        }
    }
}

/// A recurring room/day/time slot belonging to a course
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WeeklyMeeting {
    pub room: Room,
    pub days: DaySet,
    pub time: TimeRange,
}

impl WeeklyMeeting {
    pub fn new(room: Room, days: DaySet, time: TimeRange) -> Self {
        Self { room, days, time }
    }

    /// Two meetings conflict when they book the same concrete room on a
    /// shared day with overlapping time windows
    pub fn conflicts_with(&self, other: &Self) -> bool {
        self.room.is_specific()
            && self.room == other.room
            && self.days.intersects(other.days)
            && self.time.overlaps(&other.time)
    }
}

impl Display for WeeklyMeeting {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {} @ {}", self.days, self.time, self.room)
    }
}

/// Whether any meeting of `a` conflicts with any meeting of `b`
pub fn any_conflict<'a>(a: impl IntoIterator<Item = &'a WeeklyMeeting>, b: &[WeeklyMeeting]) -> bool {
    a.into_iter()
        .any(|left| b.iter().any(|right| left.conflicts_with(right)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn meeting(room: &str, days: &str, begin: (u32, u32), end: (u32, u32)) -> WeeklyMeeting {
        WeeklyMeeting::new(
            room.parse().unwrap(),
            days.parse().unwrap(),
            TimeRange::from_hm(begin, end).unwrap(),
        )
    }

    #[test]
    fn test_timerange_new() {
        let morning = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        assert!(TimeRange::new(morning, noon).is_some());
        assert!(TimeRange::new(noon, morning).is_none());
        assert!(TimeRange::new(noon, noon).is_none());
    }

    #[test]
    fn test_timerange_from_strings() {
        let range = TimeRange::from_strings("09:30AM", "10:50AM").unwrap();
        assert_eq!(range.begin.hour(), 9);
        assert_eq!(range.begin.minute(), 30);
        assert_eq!(range.end.hour(), 10);
        assert_eq!(range.end.minute(), 50);

        assert!(TimeRange::from_strings("not a time", "10:50AM").is_none());
        assert!(TimeRange::from_strings("11:00AM", "09:00AM").is_none());
    }

    #[test]
    fn test_timerange_overlaps() {
        let a = TimeRange::from_hm((9, 0), (10, 0)).unwrap();
        let b = TimeRange::from_hm((9, 30), (11, 0)).unwrap();
        let touching = TimeRange::from_hm((10, 0), (11, 0)).unwrap();
        let inside = TimeRange::from_hm((9, 15), (9, 45)).unwrap();

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(a.overlaps(&inside));
        assert!(!a.overlaps(&touching));
        assert!(!touching.overlaps(&a));
    }

    #[test]
    fn test_room_from_str() {
        assert_eq!(Room::from_str("TBA").unwrap(), Room::ToBeAnnounced);
        assert_eq!(Room::from_str("REMOTE").unwrap(), Room::Remote);
        assert_eq!(Room::from_str("GHC 4102").unwrap(), Room::specific("GHC", "4102"));
        assert_eq!(Room::from_str("CUC AR 254").unwrap(), Room::specific("CUC", "AR 254"));
        assert!(Room::from_str("  ").is_err());
        assert_eq!(Room::specific("GHC", "4102").to_string(), "GHC 4102");
    }

    #[test]
    fn test_conflict_requires_room_day_and_time() {
        let base = meeting("GHC 4102", "MWF", (9, 0), (10, 0));

        assert!(base.conflicts_with(&meeting("GHC 4102", "W", (9, 30), (10, 30))));
        // different room
        assert!(!base.conflicts_with(&meeting("GHC 4215", "MWF", (9, 0), (10, 0))));
        // different days
        assert!(!base.conflicts_with(&meeting("GHC 4102", "TR", (9, 0), (10, 0))));
        // back to back
        assert!(!base.conflicts_with(&meeting("GHC 4102", "MWF", (10, 0), (11, 0))));
    }

    #[test]
    fn test_unassigned_rooms_never_conflict() {
        let tba = WeeklyMeeting::new(
            Room::ToBeAnnounced,
            DaySet::WEEKDAYS,
            TimeRange::from_hm((9, 0), (10, 0)).unwrap(),
        );
        assert!(!tba.conflicts_with(&tba.clone()));

        let remote = WeeklyMeeting { room: Room::Remote, ..tba.clone() };
        assert!(!remote.conflicts_with(&remote.clone()));
    }

    #[test]
    fn test_conflict_is_symmetric() {
        let meetings = [
            meeting("GHC 4102", "MWF", (9, 0), (10, 0)),
            meeting("GHC 4102", "W", (9, 30), (10, 30)),
            meeting("GHC 4102", "TR", (9, 0), (10, 0)),
            meeting("WEH 5312", "MWF", (9, 0), (10, 0)),
            meeting("GHC 4102", "F", (10, 0), (11, 0)),
        ];

        for a in &meetings {
            for b in &meetings {
                assert_eq!(a.conflicts_with(b), b.conflicts_with(a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_any_conflict() {
        let offered = [meeting("GHC 4102", "MWF", (9, 0), (10, 0))];
        let incoming = [
            meeting("WEH 5312", "TR", (9, 0), (10, 0)),
            meeting("GHC 4102", "M", (9, 50), (11, 0)),
        ];

        assert!(any_conflict(&offered, &incoming));
        assert!(!any_conflict(&offered, &incoming[..1]));
        assert!(!any_conflict(&offered[..0], &incoming));
    }
}
