//! Student - the primary record of the registry
//!
//! A Student is an Entity: `student_id` is its identity, everything else
//! can change while it stays the same student.

use serde::{Deserialize, Serialize};

use super::academic::{Degree, Department};
use super::course::Course;
use super::person::Person;
use super::semester::Semester;
use crate::repository::Identifiable;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Student {
    #[serde(flatten)]
    pub person: Person,
    /// Lookup key in the student store
    #[serde(rename = "StudentID")]
    pub student_id: String,
    pub joining_batch: Option<Semester>,
    pub department: Department,
    pub degree: Degree,
    /// Semesters in the order they were recorded
    #[serde(default)]
    pub semesters_attended: Vec<Semester>,
    /// Courses in attendance order; the same CourseID may appear twice
    #[serde(default)]
    pub courses_in_semester: Vec<Course>,
}

impl Student {
    /// Create a student with no name, batch or courses yet
    pub fn new(student_id: impl Into<String>, department: Department, degree: Degree) -> Self {
        Self {
            person: Person::default(),
            student_id: student_id.into(),
            joining_batch: None,
            department,
            degree,
            semesters_attended: Vec::new(),
            courses_in_semester: Vec::new(),
        }
    }

    pub fn with_person(mut self, person: Person) -> Self {
        self.person = person;
        self
    }

    pub fn with_joining_batch(mut self, batch: Semester) -> Self {
        self.joining_batch = Some(batch);
        self
    }

    /// Whether a course with this ID is already among the current courses
    pub fn has_taken(&self, course_id: &str) -> bool {
        self.courses_in_semester
            .iter()
            .any(|c| c.course_id == course_id)
    }
}

impl Identifiable for Student {
    const KIND: &'static str = "student";

    fn id(&self) -> &str {
        &self.student_id
    }
}

/// List line: "Name: First Middle Last, ID: S001"
impl core::fmt::Display for Student {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Name: {}, ID: {}", self.person.full_name(), self.student_id)
    }
}
