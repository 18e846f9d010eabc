//! Domain Models - The vocabulary of the registry
//!
//! Plain data holders. Field names on disk follow the PascalCase labels
//! operators already know from the store files (`StudentID`, `CoursesInSemester`).

pub mod academic;
pub mod course;
pub mod instructor;
pub mod person;
pub mod semester;
pub mod student;
