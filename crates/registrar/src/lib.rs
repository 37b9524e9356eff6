//! Academic records for a university: courses, students, teachers and the
//! semesters they meet in.
//!
//! [`Semester::register`] is the enrollment engine. It validates a course
//! against what the semester already offers and filters a candidate list by
//! prerequisites and schedule conflicts. Grades are entered through
//! [`Campus::enter_course_grade`] and reduced to a GPA by
//! [`Student::calculate_gpa`].

pub mod campus;
pub mod config;
pub mod course;
pub mod error;
pub mod faculty;
pub mod gpa;
pub mod ids;
pub mod outcome;
pub mod person;
pub mod semester;
pub mod student;
pub mod teacher;

pub use campus::Campus;
pub use config::RegistrarConfig;
pub use course::Course;
pub use error::RegistrarError;
pub use ids::{CourseKey, DepartmentId, FacultyId, SpecializationId, StudentId, TeacherId};
pub use outcome::{Abort, RegistrationOutcome, Rejection, RejectionReason};
pub use semester::Semester;
pub use student::Student;
pub use teacher::Teacher;
