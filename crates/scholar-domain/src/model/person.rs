//! Person - the name fields shared by students and instructors

use serde::{Deserialize, Serialize};

/// First, middle and last name, each optional
///
/// Embedded (flattened) into `Student` and `Instructor` rather than
/// inherited, so the names sit beside the other fields on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Person {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
}

impl Person {
    pub fn new(
        first_name: impl Into<String>,
        middle_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            first_name: Some(first_name.into()),
            middle_name: Some(middle_name.into()),
            last_name: Some(last_name.into()),
        }
    }

    /// "First Middle Last", with missing parts left blank
    pub fn full_name(&self) -> String {
        format!(
            "{} {} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.middle_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
    }

    /// "First Last", used in notifications
    pub fn short_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
    }
}
