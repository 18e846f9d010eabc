//! # Scholar Domain Layer
//!
//! Records and rules for the student/instructor registry.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Records (Student, Instructor, Course, ...)    ││
//! │  │  repository/- Repository port + notification channels       ││
//! │  │  service/   - Course catalog and enrollment                 ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage lives in `scholar-adapter`; this crate only says what a store
//! must do.

pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::{
    academic::{Degree, Department},
    course::Course,
    instructor::Instructor,
    person::Person,
    semester::Semester,
    student::Student,
};

pub use repository::{events::RepositoryEvents, Identifiable, Repository, RepositoryError};

pub use service::{
    catalog::{all_courses, find_course},
    enrollment::{
        courses_not_taken, enroll, parse_course_selection, select_courses, EnrollmentOutcome,
    },
};
