use crate::ids::{CourseKey, StudentId, TeacherId};
use models::meeting::WeeklyMeeting;
use serde::Serialize;
use std::{
    collections::{BTreeSet, HashMap},
    fmt::{Display, Formatter, Result as FmtResult},
};

/// Every course known to a campus, by handle
pub type CourseTable = HashMap<CourseKey, Course>;

/// A course offering with its schedule, prerequisites and roster
#[derive(Debug, Clone, Serialize)]
pub struct Course {
    /// Registrar code, e.g. `"CS101"`; compared case-insensitively
    code: String,
    name: String,
    credit_hours: u8,
    capacity: usize,
    meetings: Vec<WeeklyMeeting>,
    prerequisites: BTreeSet<CourseKey>,
    /// Enrollment order is kept
    roster: Vec<StudentId>,
    teacher: Option<TeacherId>,
}

impl Course {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        credit_hours: u8,
        capacity: usize,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            credit_hours,
            capacity,
            meetings: Vec::new(),
            prerequisites: BTreeSet::new(),
            roster: Vec::new(),
            teacher: None,
        }
    }

    pub fn with_meeting(mut self, meeting: WeeklyMeeting) -> Self {
        self.meetings.push(meeting);
        self
    }

    pub fn with_prerequisite(mut self, course: CourseKey) -> Self {
        self.prerequisites.insert(course);
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn credit_hours(&self) -> u8 {
        self.credit_hours
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn meetings(&self) -> &[WeeklyMeeting] {
        &self.meetings
    }

    pub fn prerequisites(&self) -> &BTreeSet<CourseKey> {
        &self.prerequisites
    }

    pub fn roster(&self) -> &[StudentId] {
        &self.roster
    }

    pub fn teacher(&self) -> Option<TeacherId> {
        self.teacher
    }

    pub fn add_meeting(&mut self, meeting: WeeklyMeeting) {
        self.meetings.push(meeting);
    }

    pub fn add_prerequisite(&mut self, course: CourseKey) {
        self.prerequisites.insert(course);
    }

    /// Case-insensitive code comparison
    pub fn has_code(&self, code: &str) -> bool {
        self.code.to_lowercase() == code.to_lowercase()
    }

    /// Appends a student to the roster. Returns `false` if they were already on it.
    ///
    /// Capacity is not checked here.
    pub fn enroll_student(&mut self, student: StudentId) -> bool {
        if self.roster.contains(&student) {
            return false;
        }

        self.roster.push(student);
        true
    }

    pub fn set_teacher(&mut self, teacher: Option<TeacherId>) {
        self.teacher = teacher;
    }

    /// Full once the roster holds more students than the capacity, so the
    /// student that fills the last seat still counts as fitting
    pub fn is_full(&self) -> bool {
        self.roster.len() > self.capacity
    }
}

impl Display for Course {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}: {}", self.code, self.name)
    }
}
