//! Semester - a term code paired with a year

use serde::{Deserialize, Serialize};

/// An academic term, e.g. "Spring 2024"
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Semester {
    pub semester_code: Option<String>,
    pub year: Option<String>,
}

impl Semester {
    pub fn new(semester_code: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            semester_code: Some(semester_code.into()),
            year: Some(year.into()),
        }
    }
}

impl core::fmt::Display for Semester {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} {}",
            self.semester_code.as_deref().unwrap_or(""),
            self.year.as_deref().unwrap_or("")
        )
    }
}
