use crate::ids::{CourseKey, DepartmentId, FacultyId, SpecializationId, StudentId, TeacherId};
use models::term::TermError;
use thiserror::Error;

/// Errors surfaced by the registrar.
///
/// Enrollment rejections are not errors; they are reported through
/// [`RegistrationOutcome`](crate::outcome::RegistrationOutcome).
#[derive(Debug, Error, PartialEq)]
pub enum RegistrarError {
    #[error("no course with handle {0}")]
    UnknownCourse(CourseKey),

    #[error("no student with id {0}")]
    UnknownStudent(StudentId),

    #[error("no teacher with id {0}")]
    UnknownTeacher(TeacherId),

    #[error("no faculty with id {0:?}")]
    UnknownFaculty(FacultyId),

    #[error("no department with id {0:?}")]
    UnknownDepartment(DepartmentId),

    #[error("no specialization with id {0:?}")]
    UnknownSpecialization(SpecializationId),

    #[error("{student} is not registered in {course}")]
    NotRegistered { student: String, course: String },

    #[error("invalid value {value:?} for {key}: {reason}")]
    Config {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    Term(#[from] TermError),
}
