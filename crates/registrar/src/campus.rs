use crate::{
    config::RegistrarConfig,
    course::{Course, CourseTable},
    error::RegistrarError,
    faculty::{Department, Faculty, Specialization, SpecializationKind},
    ids::{CourseKey, DepartmentId, FacultyId, SpecializationId, StudentId, TeacherId},
    person::{Person, Role},
    student::{CompletedCourse, Student},
    teacher::Teacher,
};
use chrono::NaiveDate;
use log::{debug, info, warn};
use models::grade::grade_points;
use std::collections::{BTreeMap, HashMap};

/// Owner of every entity the registrar knows about.
///
/// Courses, students and teachers are addressed by handle; semesters hold
/// handles into this registry and never own entities themselves.
#[derive(Debug, Default)]
pub struct Campus {
    config: RegistrarConfig,
    next_person_id: u32,
    next_course_key: u32,
    next_org_id: u32,
    faculties: BTreeMap<FacultyId, Faculty>,
    departments: BTreeMap<DepartmentId, Department>,
    specializations: BTreeMap<SpecializationId, Specialization>,
    pub(crate) courses: CourseTable,
    pub(crate) students: HashMap<StudentId, Student>,
    pub(crate) teachers: HashMap<TeacherId, Teacher>,
}

impl Campus {
    pub fn new(config: RegistrarConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &RegistrarConfig {
        &self.config
    }

    fn next_person(&mut self) -> u32 {
        self.next_person_id += 1;
        self.next_person_id
    }

    fn next_org(&mut self) -> u32 {
        self.next_org_id += 1;
        self.next_org_id
    }

    pub fn add_faculty(&mut self, name: impl Into<String>) -> FacultyId {
        let id = FacultyId(self.next_org());
        self.faculties.insert(id, Faculty::new(name));
        id
    }

    pub fn add_department(
        &mut self,
        name: impl Into<String>,
        faculty: FacultyId,
    ) -> Result<DepartmentId, RegistrarError> {
        self.faculty(faculty)?;

        let id = DepartmentId(self.next_org());
        self.departments.insert(id, Department::new(name, faculty));
        Ok(id)
    }

    pub fn add_specialization(
        &mut self,
        name: impl Into<String>,
        kind: SpecializationKind,
        faculty: FacultyId,
    ) -> Result<SpecializationId, RegistrarError> {
        let id = SpecializationId(self.next_org());
        self.faculty_mut(faculty)?.add_specialization(id);
        self.specializations.insert(
            id,
            Specialization {
                name: name.into(),
                kind,
                faculty,
            },
        );

        Ok(id)
    }

    pub fn add_course(&mut self, course: Course) -> CourseKey {
        self.next_course_key += 1;
        let key = CourseKey(self.next_course_key);
        debug!("Added {course} as {key}");

        self.courses.insert(key, course);
        key
    }

    /// Admits a student and lists them with the faculty of their major
    pub fn admit_student(
        &mut self,
        name: impl Into<String>,
        major: SpecializationId,
        minor: Option<SpecializationId>,
        date_enrolled: NaiveDate,
    ) -> Result<StudentId, RegistrarError> {
        let faculty = self.specialization(major)?.faculty;
        if let Some(minor) = minor {
            self.specialization(minor)?;
        }

        let id = StudentId(self.next_person());
        let person = Person {
            id: id.0,
            name: name.into(),
            role: Role::Student,
            date_enrolled,
        };

        self.faculty_mut(faculty)?.add_student(id);
        self.students.insert(id, Student::new(person, major, minor));
        Ok(id)
    }

    pub fn hire_teacher(
        &mut self,
        name: impl Into<String>,
        faculty: Option<FacultyId>,
        date_enrolled: NaiveDate,
    ) -> Result<TeacherId, RegistrarError> {
        let id = TeacherId(self.next_person());
        if let Some(faculty) = faculty {
            self.faculty_mut(faculty)?.add_teacher(id);
        }

        let person = Person {
            id: id.0,
            name: name.into(),
            role: Role::Teacher,
            date_enrolled,
        };
        self.teachers.insert(id, Teacher::new(person, faculty));
        Ok(id)
    }

    pub fn faculty(&self, id: FacultyId) -> Result<&Faculty, RegistrarError> {
        self.faculties.get(&id).ok_or(RegistrarError::UnknownFaculty(id))
    }

    pub fn faculty_mut(&mut self, id: FacultyId) -> Result<&mut Faculty, RegistrarError> {
        self.faculties.get_mut(&id).ok_or(RegistrarError::UnknownFaculty(id))
    }

    /// Every faculty, in creation order
    pub fn faculties(&self) -> impl Iterator<Item = (FacultyId, &Faculty)> {
        self.faculties.iter().map(|(id, faculty)| (*id, faculty))
    }

    /// Specializations of `faculty` of the given kind
    pub fn faculty_specializations(
        &self,
        faculty: FacultyId,
        kind: SpecializationKind,
    ) -> Result<Vec<SpecializationId>, RegistrarError> {
        Ok(self
            .faculty(faculty)?
            .specializations()
            .iter()
            .copied()
            .filter(|id| self.specializations.get(id).is_some_and(|s| s.kind == kind))
            .collect())
    }

    pub fn department(&self, id: DepartmentId) -> Result<&Department, RegistrarError> {
        self.departments.get(&id).ok_or(RegistrarError::UnknownDepartment(id))
    }

    pub fn department_mut(&mut self, id: DepartmentId) -> Result<&mut Department, RegistrarError> {
        self.departments
            .get_mut(&id)
            .ok_or(RegistrarError::UnknownDepartment(id))
    }

    pub fn specialization(&self, id: SpecializationId) -> Result<&Specialization, RegistrarError> {
        self.specializations
            .get(&id)
            .ok_or(RegistrarError::UnknownSpecialization(id))
    }

    pub fn course(&self, key: CourseKey) -> Result<&Course, RegistrarError> {
        self.courses.get(&key).ok_or(RegistrarError::UnknownCourse(key))
    }

    pub fn course_mut(&mut self, key: CourseKey) -> Result<&mut Course, RegistrarError> {
        self.courses.get_mut(&key).ok_or(RegistrarError::UnknownCourse(key))
    }

    pub fn courses(&self) -> &CourseTable {
        &self.courses
    }

    pub fn student(&self, id: StudentId) -> Result<&Student, RegistrarError> {
        self.students.get(&id).ok_or(RegistrarError::UnknownStudent(id))
    }

    pub fn student_mut(&mut self, id: StudentId) -> Result<&mut Student, RegistrarError> {
        self.students.get_mut(&id).ok_or(RegistrarError::UnknownStudent(id))
    }

    pub fn teacher(&self, id: TeacherId) -> Result<&Teacher, RegistrarError> {
        self.teachers.get(&id).ok_or(RegistrarError::UnknownTeacher(id))
    }

    /// Records a letter grade for a registered course.
    ///
    /// On success the course moves from the student's registered set to
    /// their completed map and is closed: it leaves its teacher's schedule
    /// and loses its teacher. Letters off the scale are recorded as 0.0.
    pub fn enter_course_grade(
        &mut self,
        student_id: StudentId,
        course_key: CourseKey,
        letter: &str,
    ) -> Result<(), RegistrarError> {
        let course = self
            .courses
            .get_mut(&course_key)
            .ok_or(RegistrarError::UnknownCourse(course_key))?;
        let student = self
            .students
            .get_mut(&student_id)
            .ok_or(RegistrarError::UnknownStudent(student_id))?;

        let completed = CompletedCourse {
            grade: grade_points(letter),
            credit_hours: course.credit_hours(),
        };

        if !student.record_grade(course_key, completed) {
            warn!("{} is not registered in {}", student.name(), course.name());
            return Err(RegistrarError::NotRegistered {
                student: student.name().to_string(),
                course: course.name().to_string(),
            });
        }

        if let Some(teacher) = course.teacher().and_then(|id| self.teachers.get_mut(&id)) {
            teacher.unassign(course_key);
        }
        course.set_teacher(None);

        info!(
            "Recorded {letter} ({:.1}) for {} in {}",
            completed.grade,
            student.name(),
            course.code()
        );
        Ok(())
    }

    /// [`Student::calculate_gpa`] using this campus's configured reducer
    pub fn calculate_gpa(&mut self, student: StudentId) -> Result<f64, RegistrarError> {
        let reducer = self.config.gpa_reducer();
        Ok(self.student_mut(student)?.calculate_gpa_with(&reducer))
    }
}
