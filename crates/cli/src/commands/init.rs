//! scholar init command

use std::io::Write;
use std::path::PathBuf;

use anyhow::bail;
use clap::Args;
use scholar_domain::Repository;
use shared::{ScholarConfig, DEFAULT_CONFIG_FILE};

use crate::registry::FileRegistry;

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to initialize
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Write indented JSON stores
    #[arg(long)]
    pub pretty: bool,

    /// Overwrite an existing scholar.json
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self, out: &mut impl Write) -> anyhow::Result<()> {
        writeln!(out, "Initializing Scholar registry in {:?}", self.directory)?;
        std::fs::create_dir_all(&self.directory)?;

        let config_path = self.directory.join(DEFAULT_CONFIG_FILE);
        if config_path.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                config_path.display()
            );
        }

        let config = ScholarConfig {
            pretty_json: self.pretty,
            ..ScholarConfig::default()
        };
        std::fs::write(&config_path, config.to_json()?)?;

        // Stores are opened relative to the new directory; existing records
        // are kept and rewritten as they are.
        let registry = FileRegistry::open(&config.clone().with_data_dir(&self.directory))?;
        registry.students.save_changes()?;
        registry.instructors.save_changes()?;

        writeln!(out, "✓ Scholar registry initialized")?;
        Ok(())
    }
}
