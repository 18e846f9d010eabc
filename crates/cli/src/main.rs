//! Scholar CLI - Student and instructor records
//!
//! Usage:
//!   scholar                        - Start the interactive menu
//!   scholar init [dir]             - Create scholar.json and empty stores
//!   scholar student list           - List students
//!   scholar student show <id>      - Show one student
//!   scholar student delete <id>    - Delete a student
//!   scholar instructor ...         - Same, for instructors
//!   scholar courses                - Show the course catalog

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cli::commands::{CoursesCommand, InitCommand, RecordCommand};
use cli::interactive::InteractiveCli;
use cli::prompt::DialoguerPrompter;
use cli::registry::FileRegistry;
use scholar_domain::{Instructor, Student};
use shared::ScholarConfig;

#[derive(Parser)]
#[command(name = "scholar")]
#[command(about = "Scholar - Student and instructor records")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (JSON or YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the store files
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new registry directory
    Init(InitCommand),
    /// Manage students
    Student(RecordCommand),
    /// Manage instructors
    Instructor(RecordCommand),
    /// Show the course catalog
    Courses(CoursesCommand),
}

impl Cli {
    fn config(&self) -> anyhow::Result<ScholarConfig> {
        let config = ScholarConfig::resolve(self.config.as_deref())?;
        Ok(match &self.data_dir {
            Some(dir) => config.with_data_dir(dir),
            None => config,
        })
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with menu output
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout();

    match &cli.command {
        Some(Commands::Init(cmd)) => cmd.run(&mut stdout),
        Some(Commands::Courses(cmd)) => cmd.run(&mut stdout),
        Some(Commands::Student(cmd)) => {
            let mut registry = FileRegistry::open(&cli.config()?)?;
            registry.announce_changes();
            cmd.run::<Student, _>(&mut registry.students, &mut stdout)
        }
        Some(Commands::Instructor(cmd)) => {
            let mut registry = FileRegistry::open(&cli.config()?)?;
            registry.announce_changes();
            cmd.run::<Instructor, _>(&mut registry.instructors, &mut stdout)
        }
        None => {
            // No subcommand - start interactive mode
            let mut registry = FileRegistry::open(&cli.config()?)?;
            registry.announce_changes();
            let mut interactive = InteractiveCli::new(DialoguerPrompter::new(), stdout);
            interactive.run(&mut registry)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cli::commands::RecordSubcommand;

    #[test]
    fn test_no_subcommand_is_interactive() {
        let cli = Cli::try_parse_from(["scholar"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_student_show_with_global_flags() {
        let cli = Cli::try_parse_from(["scholar", "student", "show", "S100", "--data-dir", "/srv/records"])
            .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/srv/records")));
        match cli.command {
            Some(Commands::Student(RecordCommand {
                command: RecordSubcommand::Show { id },
            })) => assert_eq!(id, "S100"),
            _ => panic!("expected student show"),
        }
    }

    #[test]
    fn test_data_dir_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scholar.json");
        std::fs::write(&path, r#"{"dataDir": "from-file"}"#).unwrap();

        let args = [
            "scholar".to_string(),
            "--config".to_string(),
            path.display().to_string(),
            "--data-dir".to_string(),
            "override".to_string(),
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        let config = cli.config().unwrap();
        assert_eq!(config.data_dir, PathBuf::from("override"));
    }

    #[test]
    fn test_init_defaults_to_current_dir() {
        let cli = Cli::try_parse_from(["scholar", "init"]).unwrap();
        match cli.command {
            Some(Commands::Init(cmd)) => {
                assert_eq!(cmd.directory, PathBuf::from("."));
                assert!(!cmd.pretty);
            }
            _ => panic!("expected init"),
        }
    }
}
