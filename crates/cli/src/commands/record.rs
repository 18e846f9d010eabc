//! scholar student / scholar instructor commands

use std::io::Write;

use clap::{Args, Subcommand};
use scholar_domain::Repository;

use crate::render::Describe;

#[derive(Debug, Args)]
pub struct RecordCommand {
    #[command(subcommand)]
    pub command: RecordSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum RecordSubcommand {
    /// List every record
    List,
    /// Show one record in full
    Show {
        /// Record ID
        id: String,
    },
    /// Delete a record
    Delete {
        /// Record ID
        id: String,
    },
}

impl RecordCommand {
    /// Run against the store for `T`.
    ///
    /// A missing record prints "not found" and still succeeds.
    pub fn run<T, R>(&self, repository: &mut R, out: &mut impl Write) -> anyhow::Result<()>
    where
        T: Describe,
        R: Repository<T>,
    {
        match &self.command {
            RecordSubcommand::List => {
                let entities = repository.get_all_entities();
                if entities.is_empty() {
                    writeln!(out, "No {}s found.", T::KIND)?;
                } else {
                    writeln!(out, "{} List:", T::TITLE)?;
                    for entity in entities {
                        writeln!(out, "{}", entity)?;
                    }
                }
            }
            RecordSubcommand::Show { id } => match repository.get_by_id(id) {
                Some(entity) => {
                    writeln!(out, "{} Details:", T::TITLE)?;
                    for line in entity.detail_lines() {
                        writeln!(out, "{}", line)?;
                    }
                }
                None => writeln!(out, "{} not found.", T::TITLE)?,
            },
            RecordSubcommand::Delete { id } => {
                if repository.delete(id)? {
                    writeln!(out, "{} Deleted successfully.", T::TITLE)?;
                } else {
                    writeln!(out, "{} not found.", T::TITLE)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scholar_adapter::InMemoryRepository;
    use scholar_domain::{Degree, Department, Instructor, Student};

    fn run<T: Describe>(
        command: RecordSubcommand,
        repo: &mut InMemoryRepository<T>,
    ) -> String {
        let mut out = Vec::new();
        RecordCommand { command }.run(repo, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_show_delete_students() {
        let mut repo = InMemoryRepository::with_entities(vec![
            Student::new("S1", Department::English, Degree::Ba),
            Student::new("S2", Department::Bba, Degree::Mba),
        ]);

        let listed = run(RecordSubcommand::List, &mut repo);
        assert!(listed.starts_with("Student List:"));
        assert_eq!(listed.lines().count(), 3);

        let shown = run(RecordSubcommand::Show { id: "S2".to_string() }, &mut repo);
        assert!(shown.contains("Degree: MBA"));

        let deleted = run(RecordSubcommand::Delete { id: "S1".to_string() }, &mut repo);
        assert_eq!(deleted, "Student Deleted successfully.\n");
        assert_eq!(repo.count(), 1);
    }

    #[test]
    fn test_missing_instructor() {
        let mut repo = InMemoryRepository::<Instructor>::new();

        assert_eq!(run(RecordSubcommand::List, &mut repo), "No instructors found.\n");
        assert_eq!(
            run(RecordSubcommand::Show { id: "I1".to_string() }, &mut repo),
            "Instructor not found.\n"
        );
        assert_eq!(
            run(RecordSubcommand::Delete { id: "I1".to_string() }, &mut repo),
            "Instructor not found.\n"
        );
    }
}
