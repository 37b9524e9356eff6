use crate::ids::{CourseKey, FacultyId, SpecializationId, StudentId, TeacherId};
use serde::Serialize;
use std::collections::BTreeSet;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum SpecializationKind {
    Major,
    Minor,
}

/// A major or minor program offered by a faculty
#[derive(Debug, Clone, Serialize)]
pub struct Specialization {
    pub name: String,
    pub kind: SpecializationKind,
    pub faculty: FacultyId,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Faculty {
    name: String,
    teachers: BTreeSet<TeacherId>,
    students: Vec<StudentId>,
    major_courses: Vec<CourseKey>,
    minor_courses: Vec<CourseKey>,
    specializations: Vec<SpecializationId>,
}

impl Faculty {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn teachers(&self) -> &BTreeSet<TeacherId> {
        &self.teachers
    }

    pub fn students(&self) -> &[StudentId] {
        &self.students
    }

    pub fn major_courses(&self) -> &[CourseKey] {
        &self.major_courses
    }

    pub fn minor_courses(&self) -> &[CourseKey] {
        &self.minor_courses
    }

    pub fn specializations(&self) -> &[SpecializationId] {
        &self.specializations
    }

    pub fn add_major_course(&mut self, course: CourseKey) {
        self.major_courses.push(course);
    }

    pub fn add_minor_course(&mut self, course: CourseKey) {
        self.minor_courses.push(course);
    }

    pub(crate) fn add_teacher(&mut self, teacher: TeacherId) {
        self.teachers.insert(teacher);
    }

    pub(crate) fn add_student(&mut self, student: StudentId) {
        self.students.push(student);
    }

    pub(crate) fn add_specialization(&mut self, specialization: SpecializationId) {
        self.specializations.push(specialization);
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Department {
    name: String,
    faculty: FacultyId,
    majors: Vec<CourseKey>,
    minors: Vec<CourseKey>,
    teachers: Vec<TeacherId>,
    students: Vec<StudentId>,
}

impl Department {
    pub(crate) fn new(name: impl Into<String>, faculty: FacultyId) -> Self {
        Self {
            name: name.into(),
            faculty,
            majors: Vec::new(),
            minors: Vec::new(),
            teachers: Vec::new(),
            students: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn faculty(&self) -> FacultyId {
        self.faculty
    }

    pub fn majors(&self) -> &[CourseKey] {
        &self.majors
    }

    pub fn minors(&self) -> &[CourseKey] {
        &self.minors
    }

    pub fn teachers(&self) -> &[TeacherId] {
        &self.teachers
    }

    pub fn students(&self) -> &[StudentId] {
        &self.students
    }

    pub fn add_major(&mut self, course: CourseKey) {
        self.majors.push(course);
    }

    pub fn add_minor(&mut self, course: CourseKey) {
        self.minors.push(course);
    }

    pub fn add_teacher(&mut self, teacher: TeacherId) {
        self.teachers.push(teacher);
    }

    pub fn add_student(&mut self, student: StudentId) {
        self.students.push(student);
    }
}
