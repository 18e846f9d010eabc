//! CLI Commands

pub mod courses;
pub mod init;
pub mod record;

pub use courses::CoursesCommand;
pub use init::InitCommand;
pub use record::{RecordCommand, RecordSubcommand};
