//! Instructor - teaching staff record

use serde::{Deserialize, Serialize};

use super::academic::Department;
use super::course::Course;
use super::person::Person;
use crate::repository::Identifiable;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Instructor {
    #[serde(flatten)]
    pub person: Person,
    #[serde(rename = "InstructorID")]
    pub instructor_id: String,
    pub department: Department,
    #[serde(default)]
    pub courses_taught: Vec<Course>,
}

impl Instructor {
    pub fn new(instructor_id: impl Into<String>, department: Department) -> Self {
        Self {
            person: Person::default(),
            instructor_id: instructor_id.into(),
            department,
            courses_taught: Vec::new(),
        }
    }

    pub fn with_person(mut self, person: Person) -> Self {
        self.person = person;
        self
    }

    pub fn with_course(mut self, course: Course) -> Self {
        self.courses_taught.push(course);
        self
    }
}

impl Identifiable for Instructor {
    const KIND: &'static str = "instructor";

    fn id(&self) -> &str {
        &self.instructor_id
    }
}

impl core::fmt::Display for Instructor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Name: {}, ID: {}", self.person.full_name(), self.instructor_id)
    }
}
