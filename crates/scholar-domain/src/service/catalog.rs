//! Course catalog
//!
//! The offerings are fixed; there is no catalog store.

use crate::model::course::Course;

/// Every course on offer, in catalog order
pub fn all_courses() -> Vec<Course> {
    vec![
        Course::new("CSC101", "Introduction to Computer Science", "Dr. Smith", 3),
        Course::new("ENG201", "English Literature", "Prof. Johnson", 4),
        Course::new("BBA301", "Business Management", "Mr. Brown", 3),
    ]
}

/// First course in `courses` with this exact CourseID
pub fn find_course<'a>(courses: &'a [Course], course_id: &str) -> Option<&'a Course> {
    courses.iter().find(|c| c.course_id == course_id)
}
