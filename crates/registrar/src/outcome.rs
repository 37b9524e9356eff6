use crate::ids::{CourseKey, StudentId, TeacherId};
use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Why a registration call was abandoned before any student was considered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Abort {
    /// The semester already offers a course with this code
    DuplicateCourseId { code: String },
    /// A meeting would double-book a room used by an offered course
    RoomConflict { with: String, meeting: String },
    /// The teacher already teaches a course that conflicts
    TeacherUnavailable { teacher: TeacherId, with: Vec<String> },
}

impl Display for Abort {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::DuplicateCourseId { code } => {
                write!(f, "a course with the ID {code} is already offered this semester")
            }
            Self::RoomConflict { with, meeting } => {
                write!(f, "room conflict with {with} ({meeting})")
            }
            Self::TeacherUnavailable { teacher, with } => {
                write!(f, "teacher {teacher} is teaching {} at that time", with.join(", "))
            }
        }
    }
}

/// Why a single candidate was left out
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RejectionReason {
    /// Codes of prerequisites not yet completed
    MissingPrerequisites { missing: Vec<String> },
    /// Codes of registered courses whose meetings conflict
    ScheduleConflict { with: Vec<String> },
}

impl Display for RejectionReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::MissingPrerequisites { missing } => {
                write!(f, "missing prerequisites {}", missing.join(", "))
            }
            Self::ScheduleConflict { with } => {
                write!(f, "schedule conflict with {}", with.join(", "))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub student: StudentId,
    pub reason: RejectionReason,
}

/// Result of [`Semester::register`](crate::semester::Semester::register)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationOutcome {
    pub course: CourseKey,
    /// Fully committed students, in candidate order
    pub accepted: Vec<StudentId>,
    /// Students placed on the roster whose insertion filled the course;
    /// they received no other bookkeeping
    pub overflowed: Vec<StudentId>,
    /// One entry per failed check, so a student may appear twice
    pub rejected: Vec<Rejection>,
    pub aborted: Option<Abort>,
}

impl RegistrationOutcome {
    pub(crate) fn new(course: CourseKey) -> Self {
        Self {
            course,
            accepted: Vec::new(),
            overflowed: Vec::new(),
            rejected: Vec::new(),
            aborted: None,
        }
    }

    pub(crate) fn abort(course: CourseKey, reason: Abort) -> Self {
        Self {
            aborted: Some(reason),
            ..Self::new(course)
        }
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted.is_some()
    }

    /// Reasons recorded against `student`
    pub fn rejections_for(&self, student: StudentId) -> impl Iterator<Item = &RejectionReason> {
        self.rejected
            .iter()
            .filter(move |r| r.student == student)
            .map(|r| &r.reason)
    }

    pub fn is_rejected(&self, student: StudentId) -> bool {
        self.rejections_for(student).next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejections_for() {
        let mut outcome = RegistrationOutcome::new(CourseKey(0));
        outcome.rejected.push(Rejection {
            student: StudentId(1),
            reason: RejectionReason::MissingPrerequisites {
                missing: vec!["CS101".to_string()],
            },
        });
        outcome.rejected.push(Rejection {
            student: StudentId(1),
            reason: RejectionReason::ScheduleConflict {
                with: vec!["MA101".to_string()],
            },
        });

        assert!(outcome.is_rejected(StudentId(1)));
        assert!(!outcome.is_rejected(StudentId(2)));
        assert_eq!(outcome.rejections_for(StudentId(1)).count(), 2);
        assert!(!outcome.is_aborted());
    }

    #[test]
    fn test_outcome_serializes() {
        let outcome = RegistrationOutcome::abort(
            CourseKey(3),
            Abort::DuplicateCourseId {
                code: "cs101".to_string(),
            },
        );

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["course"], 3);
        assert_eq!(json["aborted"]["DuplicateCourseId"]["code"], "cs101");
        assert_eq!(json["accepted"], serde_json::json!([]));
    }

    #[test]
    fn test_display() {
        let reason = RejectionReason::ScheduleConflict {
            with: vec!["CS101".to_string(), "MA101".to_string()],
        };
        assert_eq!(reason.to_string(), "schedule conflict with CS101, MA101");

        let abort = Abort::TeacherUnavailable {
            teacher: TeacherId(4),
            with: vec!["CS201".to_string()],
        };
        assert_eq!(abort.to_string(), "teacher 4 is teaching CS201 at that time");
    }
}
