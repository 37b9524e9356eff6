use crate::{
    course::{Course, CourseTable},
    gpa::GpaReducer,
    ids::{CourseKey, SpecializationId},
    person::Person,
};
use models::{
    grade::GpaStatus,
    meeting::{WeeklyMeeting, any_conflict},
};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// A graded course, with the credit hours it carried when it was graded
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompletedCourse {
    pub grade: f64,
    pub credit_hours: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct Student {
    person: Person,
    major: SpecializationId,
    minor: Option<SpecializationId>,
    /// In progress, not yet graded
    registered: BTreeSet<CourseKey>,
    completed: BTreeMap<CourseKey, CompletedCourse>,
    /// Status from the most recent GPA calculation
    gpa_status: Option<GpaStatus>,
}

impl Student {
    pub(crate) fn new(
        person: Person,
        major: SpecializationId,
        minor: Option<SpecializationId>,
    ) -> Self {
        Self {
            person,
            major,
            minor,
            registered: BTreeSet::new(),
            completed: BTreeMap::new(),
            gpa_status: None,
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn name(&self) -> &str {
        &self.person.name
    }

    pub fn major(&self) -> SpecializationId {
        self.major
    }

    pub fn minor(&self) -> Option<SpecializationId> {
        self.minor
    }

    pub fn registered_courses(&self) -> &BTreeSet<CourseKey> {
        &self.registered
    }

    pub fn completed_courses(&self) -> &BTreeMap<CourseKey, CompletedCourse> {
        &self.completed
    }

    /// Whether the student holds any in-progress registration
    pub fn is_currently_registered(&self) -> bool {
        !self.registered.is_empty()
    }

    pub(crate) fn add_registered_course(&mut self, course: CourseKey) -> bool {
        self.registered.insert(course)
    }

    /// Moves a registered course into the completed map.
    ///
    /// Returns `false`, changing nothing, when the course is not registered.
    pub(crate) fn record_grade(&mut self, course: CourseKey, completed: CompletedCourse) -> bool {
        if !self.registered.remove(&course) {
            return false;
        }

        self.completed.insert(course, completed);
        true
    }

    /// True when every prerequisite of `course` has been completed
    pub fn prerequisites_check(&self, course: &Course) -> bool {
        course
            .prerequisites()
            .iter()
            .all(|key| self.completed.contains_key(key))
    }

    /// Prerequisites of `course` the student has not completed
    pub fn missing_prerequisites(&self, course: &Course) -> Vec<CourseKey> {
        course
            .prerequisites()
            .iter()
            .filter(|key| !self.completed.contains_key(key))
            .copied()
            .collect()
    }

    /// Registered courses with a meeting that conflicts with `meetings`
    pub fn conflicting_courses<'a>(
        &'a self,
        meetings: &'a [WeeklyMeeting],
        courses: &'a CourseTable,
    ) -> impl Iterator<Item = CourseKey> + 'a {
        self.registered
            .iter()
            .copied()
            .filter(move |key| {
                courses
                    .get(key)
                    .is_some_and(|course| any_conflict(course.meetings(), meetings))
            })
    }

    /// True when no registered course conflicts with any of `meetings`.
    /// Completed courses are not considered.
    pub fn is_free_on(&self, meetings: &[WeeklyMeeting], courses: &CourseTable) -> bool {
        self.conflicting_courses(meetings, courses).next().is_none()
    }

    /// GPA over completed courses, rounded to two decimals. Also refreshes
    /// the stored GPA status.
    pub fn calculate_gpa(&mut self) -> f64 {
        self.calculate_gpa_with(&GpaReducer::default())
    }

    pub fn calculate_gpa_with(&mut self, reducer: &GpaReducer) -> f64 {
        let entries: Vec<(f64, f64)> = self
            .completed
            .values()
            .map(|c| (c.grade, f64::from(c.credit_hours)))
            .collect();

        let gpa = reducer.weighted_average(&entries);
        self.gpa_status = Some(GpaStatus::from_gpa(gpa));

        gpa
    }

    /// Recomputes the GPA and returns the resulting status
    pub fn gpa_status(&mut self) -> GpaStatus {
        let gpa = self.calculate_gpa();
        GpaStatus::from_gpa(gpa)
    }

    /// Status from the last calculation, without recomputing
    pub fn last_gpa_status(&self) -> Option<GpaStatus> {
        self.gpa_status
    }
}
