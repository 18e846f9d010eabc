//! Department and Degree - fixed academic enumerations
//!
//! Both are Value Objects and persist as their variant names.

use serde::{Deserialize, Serialize};

/// Academic department a student studies in or an instructor belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    ComputerScience,
    #[serde(rename = "BBA")]
    Bba,
    English,
}

impl Department {
    /// Get the display name of this department
    pub fn display_name(&self) -> &'static str {
        match self {
            Department::ComputerScience => "ComputerScience",
            Department::Bba => "BBA",
            Department::English => "English",
        }
    }

    /// Get all departments in selection order
    pub fn all() -> &'static [Department] {
        &[Department::ComputerScience, Department::Bba, Department::English]
    }
}

impl core::fmt::Display for Department {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Degree a student is enrolled for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Degree {
    #[serde(rename = "BSC")]
    Bsc,
    #[serde(rename = "BBA")]
    Bba,
    #[serde(rename = "BA")]
    Ba,
    #[serde(rename = "MSC")]
    Msc,
    #[serde(rename = "MBA")]
    Mba,
    #[serde(rename = "MA")]
    Ma,
}

impl Degree {
    /// Get the display name of this degree
    pub fn display_name(&self) -> &'static str {
        match self {
            Degree::Bsc => "BSC",
            Degree::Bba => "BBA",
            Degree::Ba => "BA",
            Degree::Msc => "MSC",
            Degree::Mba => "MBA",
            Degree::Ma => "MA",
        }
    }

    /// Get all degrees in selection order
    pub fn all() -> &'static [Degree] {
        &[
            Degree::Bsc,
            Degree::Bba,
            Degree::Ba,
            Degree::Msc,
            Degree::Mba,
            Degree::Ma,
        ]
    }
}

impl core::fmt::Display for Degree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
