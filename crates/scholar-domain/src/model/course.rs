//! Course - an offering from the catalog

use serde::{Deserialize, Serialize};

use crate::repository::Identifiable;

/// A course a student can take or an instructor can teach
///
/// `instructor_name` is free text, not a reference to an `Instructor`.
/// Both names may be null in stores written by older tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Course {
    #[serde(rename = "CourseID")]
    pub course_id: String,
    pub course_name: Option<String>,
    pub instructor_name: Option<String>,
    pub number_of_credits: u32,
}

impl Course {
    pub fn new(
        course_id: impl Into<String>,
        course_name: impl Into<String>,
        instructor_name: impl Into<String>,
        number_of_credits: u32,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            course_name: Some(course_name.into()),
            instructor_name: Some(instructor_name.into()),
            number_of_credits,
        }
    }
}

impl Identifiable for Course {
    const KIND: &'static str = "course";

    fn id(&self) -> &str {
        &self.course_id
    }
}

impl core::fmt::Display for Course {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.course_id,
            self.course_name.as_deref().unwrap_or("")
        )
    }
}
