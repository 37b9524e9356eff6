use crate::{
    campus::Campus,
    course::Course,
    error::RegistrarError,
    ids::{CourseKey, StudentId, TeacherId},
    outcome::{Abort, RegistrationOutcome, Rejection, RejectionReason},
};
use chrono::NaiveDate;
use log::{info, warn};
use models::term::Term;
use serde::Serialize;
use std::{
    collections::BTreeSet,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// One academic term and the courses, students and teachers active in it
#[derive(Debug, Clone, Serialize)]
pub struct Semester {
    term: Term,
    courses: BTreeSet<CourseKey>,
    /// Students with at least one committed registration
    students: BTreeSet<StudentId>,
    /// Teachers with at least one assignment
    teachers: BTreeSet<TeacherId>,
}

impl Semester {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RegistrarError> {
        Ok(Self {
            term: Term::from_dates(start, end)?,
            courses: BTreeSet::new(),
            students: BTreeSet::new(),
            teachers: BTreeSet::new(),
        })
    }

    /// e.g. `"Fall - 2024"`
    pub fn name(&self) -> String {
        self.term.name()
    }

    pub fn term(&self) -> &Term {
        &self.term
    }

    pub fn weeks(&self) -> i64 {
        self.term.weeks
    }

    pub fn courses(&self) -> &BTreeSet<CourseKey> {
        &self.courses
    }

    pub fn students(&self) -> &BTreeSet<StudentId> {
        &self.students
    }

    pub fn teachers(&self) -> &BTreeSet<TeacherId> {
        &self.teachers
    }

    /// Registers `course` with `teacher` and enrolls the eligible candidates.
    ///
    /// Checks run in a fixed order. A duplicate course code, a room conflict
    /// with an offered course, or a busy teacher aborts the whole call with
    /// nothing changed. Otherwise each candidate is checked for
    /// prerequisites and schedule conflicts, and those passing both are
    /// enrolled in candidate order.
    ///
    /// Each enrolled student is put on the roster first; only if the course
    /// is still not full afterwards is the rest of the bookkeeping done
    /// (student, teacher and semester membership). A student whose insertion
    /// fills the course stays on the roster and is reported as overflowed.
    ///
    /// `Err` is returned only for handles the campus does not know.
    pub fn register(
        &mut self,
        campus: &mut Campus,
        course_key: CourseKey,
        candidates: &[StudentId],
        teacher_id: TeacherId,
    ) -> Result<RegistrationOutcome, RegistrarError> {
        let course = campus.course(course_key)?;
        let teacher = campus.teacher(teacher_id)?;
        for &student in candidates {
            campus.student(student)?;
        }

        if let Some(abort) = self.check_course(campus, course) {
            warn!("Error registering {}: {abort}", course.name());
            return Ok(RegistrationOutcome::abort(course_key, abort));
        }

        let busy: Vec<CourseKey> = teacher
            .conflicting_courses(course.meetings(), &campus.courses)
            .collect();
        if !busy.is_empty() {
            let abort = Abort::TeacherUnavailable {
                teacher: teacher_id,
                with: codes(campus, &busy),
            };
            warn!("Error registering {}: {abort}", course.name());
            return Ok(RegistrationOutcome::abort(course_key, abort));
        }

        let mut outcome = RegistrationOutcome::new(course_key);

        for &id in candidates {
            let student = &campus.students[&id];
            let missing = student.missing_prerequisites(course);
            if !missing.is_empty() {
                let reason = RejectionReason::MissingPrerequisites {
                    missing: codes(campus, &missing),
                };
                warn!("{id} {} cannot register in {}: {reason}", student.name(), course.name());
                outcome.rejected.push(Rejection { student: id, reason });
            }
        }

        for &id in candidates {
            let student = &campus.students[&id];
            let clashes: Vec<CourseKey> = student
                .conflicting_courses(course.meetings(), &campus.courses)
                .collect();
            if !clashes.is_empty() {
                let reason = RejectionReason::ScheduleConflict {
                    with: codes(campus, &clashes),
                };
                warn!("{id} {} cannot register in {}: {reason}", student.name(), course.name());
                outcome.rejected.push(Rejection { student: id, reason });
            }
        }

        let eligible: Vec<StudentId> = candidates
            .iter()
            .copied()
            .filter(|&id| !outcome.is_rejected(id))
            .collect();

        self.commit(campus, course_key, teacher_id, &eligible, &mut outcome)?;
        Ok(outcome)
    }

    fn offered<'a>(&'a self, campus: &'a Campus) -> impl Iterator<Item = &'a Course> + 'a {
        self.courses
            .iter()
            .filter_map(move |key| campus.courses.get(key))
    }

    /// Aborting checks against courses already offered this semester
    fn check_course(&self, campus: &Campus, course: &Course) -> Option<Abort> {
        if self.offered(campus).any(|c| c.has_code(course.code())) {
            return Some(Abort::DuplicateCourseId {
                code: course.code().to_string(),
            });
        }

        self.offered(campus).find_map(|c| {
            c.meetings()
                .iter()
                .find(|m| course.meetings().iter().any(|n| m.conflicts_with(n)))
                .map(|m| Abort::RoomConflict {
                    with: c.code().to_string(),
                    meeting: m.to_string(),
                })
        })
    }

    fn commit(
        &mut self,
        campus: &mut Campus,
        course_key: CourseKey,
        teacher_id: TeacherId,
        eligible: &[StudentId],
        outcome: &mut RegistrationOutcome,
    ) -> Result<(), RegistrarError> {
        let course = campus
            .courses
            .get_mut(&course_key)
            .ok_or(RegistrarError::UnknownCourse(course_key))?;

        for &id in eligible {
            let student = campus
                .students
                .get_mut(&id)
                .ok_or(RegistrarError::UnknownStudent(id))?;

            if !course.enroll_student(id) {
                warn!("{id} {} is already on the roster of {}", student.name(), course.name());
                continue;
            }

            if course.is_full() {
                warn!("{} is full; {id} {} was not registered", course.name(), student.name());
                outcome.overflowed.push(id);
                continue;
            }

            student.add_registered_course(course_key);
            self.courses.insert(course_key);
            course.set_teacher(Some(teacher_id));
            campus
                .teachers
                .get_mut(&teacher_id)
                .ok_or(RegistrarError::UnknownTeacher(teacher_id))?
                .assign(course_key);
            self.students.insert(id);
            self.teachers.insert(teacher_id);

            info!("{id} {} registered in {}", student.name(), course.name());
            outcome.accepted.push(id);
        }

        Ok(())
    }
}

fn codes(campus: &Campus, keys: &[CourseKey]) -> Vec<String> {
    keys.iter()
        .map(|key| match campus.courses.get(key) {
            Some(course) => course.code().to_string(),
            None => key.to_string(),
        })
        .collect()
}

impl Display for Semester {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "Semester: {} [from: {}, to: {}]",
            self.term, self.term.start, self.term.end
        )
    }
}
