//! Enrollment - putting catalog courses on a student's semester
//!
//! Pure bookkeeping on an in-memory `Student`. Nothing here persists; the
//! caller saves the student store once the changes are made.

use crate::model::course::Course;
use crate::model::semester::Semester;
use crate::model::student::Student;
use crate::service::catalog::find_course;

/// What `enroll` did with each requested course ID
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrollmentOutcome {
    /// Course IDs appended to the student, in selection order
    pub added: Vec<String>,
    /// Requested IDs that are not in the catalog
    pub unknown: Vec<String>,
}

/// Catalog courses the student does not already have this semester
pub fn courses_not_taken<'a>(catalog: &'a [Course], student: &Student) -> Vec<&'a Course> {
    catalog
        .iter()
        .filter(|course| !student.has_taken(&course.course_id))
        .collect()
}

/// Split a comma-separated list of course IDs, trimming blanks away
pub fn parse_course_selection(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Resolve a comma-separated selection against the catalog.
///
/// Returns the matching courses in selection order and the IDs that did
/// not match.
pub fn select_courses(catalog: &[Course], selection: &str) -> (Vec<Course>, Vec<String>) {
    let mut found = Vec::new();
    let mut unknown = Vec::new();
    for course_id in parse_course_selection(selection) {
        match find_course(catalog, &course_id) {
            Some(course) => found.push(course.clone()),
            None => unknown.push(course_id),
        }
    }
    (found, unknown)
}

/// Record `semester` and append the selected courses to the student.
///
/// The semester is appended to `semesters_attended` unless it is already
/// the latest entry. Courses are matched against the full catalog, so a
/// course the student already has is appended again.
pub fn enroll(
    student: &mut Student,
    semester: Semester,
    catalog: &[Course],
    selection: &str,
) -> EnrollmentOutcome {
    if student.semesters_attended.last() != Some(&semester) {
        student.semesters_attended.push(semester);
    }

    let (courses, unknown) = select_courses(catalog, selection);
    let added = courses.iter().map(|c| c.course_id.clone()).collect();
    student.courses_in_semester.extend(courses);

    EnrollmentOutcome { added, unknown }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::academic::{Degree, Department};
    use crate::service::catalog::all_courses;

    fn student() -> Student {
        Student::new("S1", Department::ComputerScience, Degree::Bsc)
    }

    #[test]
    fn test_parse_course_selection() {
        assert_eq!(
            parse_course_selection(" CSC101, ENG201 ,,BBA301 "),
            vec!["CSC101", "ENG201", "BBA301"]
        );
        assert!(parse_course_selection("").is_empty());
        assert!(parse_course_selection(" , ").is_empty());
    }

    #[test]
    fn test_courses_not_taken_filters_by_id() {
        let catalog = all_courses();
        let mut s = student();
        s.courses_in_semester.push(catalog[1].clone());

        let remaining: Vec<&str> = courses_not_taken(&catalog, &s)
            .iter()
            .map(|c| c.course_id.as_str())
            .collect();
        assert_eq!(remaining, vec!["CSC101", "BBA301"]);
    }

    #[test]
    fn test_enroll_adds_known_and_reports_unknown() {
        let catalog = all_courses();
        let mut s = student();

        let outcome = enroll(&mut s, Semester::new("Spring", "2024"), &catalog, "BBA301, MTH999,CSC101");

        assert_eq!(outcome.added, vec!["BBA301", "CSC101"]);
        assert_eq!(outcome.unknown, vec!["MTH999"]);
        let ids: Vec<&str> = s.courses_in_semester.iter().map(|c| c.course_id.as_str()).collect();
        assert_eq!(ids, vec!["BBA301", "CSC101"]);
        assert_eq!(s.semesters_attended, vec![Semester::new("Spring", "2024")]);
    }

    #[test]
    fn test_enroll_allows_duplicate_courses() {
        let catalog = all_courses();
        let mut s = student();

        enroll(&mut s, Semester::new("Spring", "2024"), &catalog, "CSC101");
        let outcome = enroll(&mut s, Semester::new("Spring", "2024"), &catalog, "CSC101");

        assert_eq!(outcome.added, vec!["CSC101"]);
        assert_eq!(s.courses_in_semester.len(), 2);
        // Same semester twice in a row is recorded once
        assert_eq!(s.semesters_attended.len(), 1);
    }

    #[test]
    fn test_enroll_records_new_semester_even_without_courses() {
        let catalog = all_courses();
        let mut s = student();

        enroll(&mut s, Semester::new("Spring", "2024"), &catalog, "");
        enroll(&mut s, Semester::new("Fall", "2024"), &catalog, "");

        assert!(s.courses_in_semester.is_empty());
        assert_eq!(
            s.semesters_attended,
            vec![Semester::new("Spring", "2024"), Semester::new("Fall", "2024")]
        );
    }
}
