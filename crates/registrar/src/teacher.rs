use crate::{
    course::CourseTable,
    ids::{CourseKey, FacultyId},
    person::Person,
};
use models::meeting::{WeeklyMeeting, any_conflict};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Serialize)]
pub struct Teacher {
    person: Person,
    faculty: Option<FacultyId>,
    /// Courses currently assigned for teaching
    courses: BTreeSet<CourseKey>,
}

impl Teacher {
    pub(crate) fn new(person: Person, faculty: Option<FacultyId>) -> Self {
        Self {
            person,
            faculty,
            courses: BTreeSet::new(),
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn name(&self) -> &str {
        &self.person.name
    }

    pub fn faculty(&self) -> Option<FacultyId> {
        self.faculty
    }

    pub fn courses(&self) -> &BTreeSet<CourseKey> {
        &self.courses
    }

    pub(crate) fn assign(&mut self, course: CourseKey) -> bool {
        self.courses.insert(course)
    }

    pub(crate) fn unassign(&mut self, course: CourseKey) -> bool {
        self.courses.remove(&course)
    }

    /// Assigned courses with a meeting that conflicts with `meetings`
    pub fn conflicting_courses<'a>(
        &'a self,
        meetings: &'a [WeeklyMeeting],
        courses: &'a CourseTable,
    ) -> impl Iterator<Item = CourseKey> + 'a {
        self.courses
            .iter()
            .copied()
            .filter(move |key| {
                courses
                    .get(key)
                    .is_some_and(|course| any_conflict(course.meetings(), meetings))
            })
    }

    /// True when no assigned course conflicts with any of `meetings`
    pub fn is_free_on(&self, meetings: &[WeeklyMeeting], courses: &CourseTable) -> bool {
        self.conflicting_courses(meetings, courses).next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{course::Course, person::Role};
    use chrono::NaiveDate;
    use models::meeting::{Room, TimeRange};

    fn meeting(room: &str, days: &str, begin: u32, end: u32) -> WeeklyMeeting {
        WeeklyMeeting::new(
            room.parse().unwrap(),
            days.parse().unwrap(),
            TimeRange::from_hm((begin, 0), (end, 0)).unwrap(),
        )
    }

    fn teacher() -> Teacher {
        Teacher::new(
            Person {
                id: 1,
                name: "Ada".to_string(),
                role: Role::Teacher,
                date_enrolled: NaiveDate::from_ymd_opt(2020, 8, 1).unwrap(),
            },
            None,
        )
    }

    #[test]
    fn test_free_without_assignments() {
        let courses = CourseTable::new();
        assert!(teacher().is_free_on(&[meeting("GHC 4102", "MWF", 9, 10)], &courses));
    }

    #[test]
    fn test_busy_when_assigned_course_conflicts() {
        let mut courses = CourseTable::new();
        courses.insert(
            CourseKey(1),
            Course::new("CS101", "Intro", 3, 10).with_meeting(meeting("GHC 4102", "MWF", 9, 10)),
        );

        let mut teacher = teacher();
        teacher.assign(CourseKey(1));

        let clash = [meeting("GHC 4102", "M", 9, 11)];
        let elsewhere = [meeting("GHC 4102", "TR", 9, 10)];
        let unassigned_room = [WeeklyMeeting {
            room: Room::ToBeAnnounced,
            ..meeting("GHC 4102", "MWF", 9, 10)
        }];

        assert!(!teacher.is_free_on(&clash, &courses));
        assert_eq!(
            teacher.conflicting_courses(&clash, &courses).collect::<Vec<_>>(),
            vec![CourseKey(1)]
        );
        assert!(teacher.is_free_on(&elsewhere, &courses));
        assert!(teacher.is_free_on(&unassigned_room, &courses));

        teacher.unassign(CourseKey(1));
        assert!(teacher.is_free_on(&clash, &courses));
    }
}
