//! scholar courses command

use std::io::Write;

use clap::Args;
use scholar_domain::all_courses;

use crate::render::course_line;

#[derive(Debug, Args)]
pub struct CoursesCommand {}

impl CoursesCommand {
    pub fn run(&self, out: &mut impl Write) -> anyhow::Result<()> {
        writeln!(out, "Course Catalog:")?;
        for course in all_courses() {
            writeln!(out, "{}", course_line(&course))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_catalog() {
        let mut out = Vec::new();
        CoursesCommand {}.run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.contains("BBA301: Business Management (Mr. Brown, 3 credits)"));
    }
}
