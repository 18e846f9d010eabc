//! Text rendering of records for the console

use std::fmt::Display;

use scholar_domain::{Course, Identifiable, Instructor, Student};

/// A record the console knows how to show
///
/// `Display` gives the one-line list entry; `detail_lines` the full view.
pub trait Describe: Identifiable + Display {
    /// Capitalised record name ("Student")
    const TITLE: &'static str;

    fn detail_lines(&self) -> Vec<String>;
}

/// "CSC101: Introduction to Computer Science (Dr. Smith, 3 credits)"
pub fn course_line(course: &Course) -> String {
    format!(
        "{} ({}, {} credits)",
        course,
        course.instructor_name.as_deref().unwrap_or(""),
        course.number_of_credits
    )
}

fn course_block(heading: &str, courses: &[Course]) -> Vec<String> {
    if courses.is_empty() {
        return vec![format!("{}: none", heading)];
    }
    let mut lines = vec![format!("{}:", heading)];
    lines.extend(courses.iter().map(|c| format!("  {}", course_line(c))));
    lines
}

impl Describe for Student {
    const TITLE: &'static str = "Student";

    fn detail_lines(&self) -> Vec<String> {
        let semesters = if self.semesters_attended.is_empty() {
            "none".to_string()
        } else {
            self.semesters_attended
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };

        let mut lines = vec![
            format!("Name: {}", self.person.full_name()),
            format!("Student ID: {}", self.student_id),
            format!(
                "Joining Batch: {}",
                self.joining_batch
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default()
            ),
            format!("Department: {}", self.department),
            format!("Degree: {}", self.degree),
            format!("Semesters Attended: {}", semesters),
        ];
        lines.extend(course_block("Courses In Semester", &self.courses_in_semester));
        lines
    }
}

impl Describe for Instructor {
    const TITLE: &'static str = "Instructor";

    fn detail_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Name: {}", self.person.full_name()),
            format!("Instructor ID: {}", self.instructor_id),
            format!("Department: {}", self.department),
        ];
        lines.extend(course_block("Courses Taught", &self.courses_taught));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scholar_domain::{all_courses, Degree, Department, Person, Semester};

    #[test]
    fn test_student_details() {
        let mut student = Student::new("S100", Department::ComputerScience, Degree::Bsc)
            .with_person(Person::new("Ada", "King", "Lovelace"))
            .with_joining_batch(Semester::new("Spring", "2024"));
        student.semesters_attended.push(Semester::new("Fall", "2024"));
        student.courses_in_semester.push(all_courses()[0].clone());

        let lines = student.detail_lines();
        assert_eq!(lines[0], "Name: Ada King Lovelace");
        assert_eq!(lines[1], "Student ID: S100");
        assert_eq!(lines[2], "Joining Batch: Spring 2024");
        assert_eq!(lines[3], "Department: ComputerScience");
        assert_eq!(lines[4], "Degree: BSC");
        assert_eq!(lines[5], "Semesters Attended: Fall 2024");
        assert_eq!(lines[6], "Courses In Semester:");
        assert_eq!(
            lines[7],
            "  CSC101: Introduction to Computer Science (Dr. Smith, 3 credits)"
        );
    }

    #[test]
    fn test_instructor_details_without_courses() {
        let instructor = Instructor::new("I1", Department::Bba);
        let lines = instructor.detail_lines();
        assert_eq!(lines[1], "Instructor ID: I1");
        assert_eq!(lines[2], "Department: BBA");
        assert_eq!(lines[3], "Courses Taught: none");
    }
}
