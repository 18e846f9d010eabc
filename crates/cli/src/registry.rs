//! Registry - the two record stores the console works on

use anyhow::Context;
use tracing::debug;

use scholar_adapter::JsonFileRepository;
use scholar_domain::{Instructor, Repository, Student};
use shared::ScholarConfig;

/// Student and instructor stores opened together
#[derive(Debug)]
pub struct Registry<S, I> {
    pub students: S,
    pub instructors: I,
}

pub type FileRegistry = Registry<JsonFileRepository<Student>, JsonFileRepository<Instructor>>;

impl FileRegistry {
    /// Open both stores named by `config`.
    ///
    /// A malformed store aborts with the offending path in the error.
    pub fn open(config: &ScholarConfig) -> anyhow::Result<Self> {
        let students_path = config.students_path();
        let instructors_path = config.instructors_path();

        let students = JsonFileRepository::<Student>::open(&students_path)
            .with_context(|| format!("cannot open student store {}", students_path.display()))?
            .with_pretty(config.pretty_json);
        let instructors = JsonFileRepository::<Instructor>::open(&instructors_path)
            .with_context(|| {
                format!("cannot open instructor store {}", instructors_path.display())
            })?
            .with_pretty(config.pretty_json);
        debug!(
            students = %students.file_path().display(),
            instructors = %instructors.file_path().display(),
            "Opened stores"
        );

        Ok(Self {
            students,
            instructors,
        })
    }
}

impl<S, I> Registry<S, I>
where
    S: Repository<Student>,
    I: Repository<Instructor>,
{
    pub fn new(students: S, instructors: I) -> Self {
        Self {
            students,
            instructors,
        }
    }

    /// Print a line to stdout whenever a record is added or deleted
    pub fn announce_changes(&mut self) {
        let students = self.students.events_mut();
        students.on_added(|s| println!("{}", student_added(s)));
        students.on_deleted(|id| println!("{}", entity_deleted(id)));

        let instructors = self.instructors.events_mut();
        instructors.on_added(|i| println!("{}", instructor_added(i)));
        instructors.on_deleted(|id| println!("{}", entity_deleted(id)));
    }
}

pub fn student_added(student: &Student) -> String {
    format!("Student {} added.", student.person.short_name())
}

pub fn instructor_added(instructor: &Instructor) -> String {
    format!("Instructor {} added.", instructor.person.short_name())
}

pub fn entity_deleted(id: &str) -> String {
    format!("Entity with ID {} deleted.", id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scholar_adapter::InMemoryRepository;
    use scholar_domain::{Degree, Department, Person};

    #[test]
    fn test_open_uses_configured_paths() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScholarConfig::default().with_data_dir(dir.path());

        let mut registry = FileRegistry::open(&config).unwrap();
        registry
            .students
            .add(Student::new("S1", Department::English, Degree::Ba))
            .unwrap();

        assert!(dir.path().join("students.json").exists());
        assert!(!dir.path().join("instructors.json").exists());
    }

    #[test]
    fn test_open_reports_malformed_store() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("instructors.json"), "not json").unwrap();
        let config = ScholarConfig::default().with_data_dir(dir.path());

        let err = FileRegistry::open(&config).unwrap_err();
        assert!(err.to_string().starts_with("cannot open instructor store"));
    }

    #[test]
    fn test_change_notices() {
        let ada = Student::new("S100", Department::ComputerScience, Degree::Bsc)
            .with_person(Person::new("Ada", "King", "Lovelace"));
        let grace = Instructor::new("I7", Department::ComputerScience)
            .with_person(Person::new("Grace", "Murray", "Hopper"));

        assert_eq!(student_added(&ada), "Student Ada Lovelace added.");
        assert_eq!(instructor_added(&grace), "Instructor Grace Hopper added.");
        assert_eq!(entity_deleted("S100"), "Entity with ID S100 deleted.");
    }

    #[test]
    fn test_announce_changes_keeps_store_usable() {
        let mut registry = Registry::new(
            InMemoryRepository::<Student>::new(),
            InMemoryRepository::<Instructor>::new(),
        );
        registry.announce_changes();

        registry
            .students
            .add(Student::new("S1", Department::English, Degree::Ba))
            .unwrap();
        assert!(registry.students.delete("S1").unwrap());
        assert!(registry.students.get_all_entities().is_empty());
    }
}
