//! Configuration types for Scholar

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ScholarError, UnsupportedFormatError};

/// File name looked up in the working directory when no config path is given
pub const DEFAULT_CONFIG_FILE: &str = "scholar.json";

/// Where and how the record stores are persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScholarConfig {
    /// Directory holding the store files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Student store file name, relative to `data_dir`
    #[serde(default = "default_students_file")]
    pub students_file: String,

    /// Instructor store file name, relative to `data_dir`
    #[serde(default = "default_instructors_file")]
    pub instructors_file: String,

    /// Indent the persisted JSON
    #[serde(default)]
    pub pretty_json: bool,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_students_file() -> String {
    "students.json".to_string()
}

fn default_instructors_file() -> String {
    "instructors.json".to_string()
}

impl Default for ScholarConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            students_file: default_students_file(),
            instructors_file: default_instructors_file(),
            pretty_json: false,
        }
    }
}

impl ScholarConfig {
    /// Load configuration from a JSON or YAML file, chosen by extension.
    ///
    /// A relative `dataDir` is taken relative to the directory holding the
    /// config file, not the working directory.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        let mut config: Self = match extension.as_str() {
            "json" => serde_json::from_str(&content)?,
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            _ => return Err(UnsupportedFormatError { extension }.into()),
        };
        config.validate()?;
        config.anchor_data_dir(path);
        Ok(config)
    }

    fn anchor_data_dir(&mut self, config_path: &Path) {
        if self.data_dir.is_absolute() {
            return;
        }
        let Some(base) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) else {
            return;
        };
        self.data_dir = if self.data_dir == Path::new(".") {
            base.to_path_buf()
        } else {
            base.join(&self.data_dir)
        };
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must exist. Without one, `scholar.json` in the
    /// working directory is used when present, defaults otherwise.
    pub fn resolve(explicit: Option<&Path>) -> crate::Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::from_file(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Override the data directory
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Full path of the student store
    pub fn students_path(&self) -> PathBuf {
        self.data_dir.join(&self.students_file)
    }

    /// Full path of the instructor store
    pub fn instructors_path(&self) -> PathBuf {
        self.data_dir.join(&self.instructors_file)
    }

    fn validate(&self) -> crate::Result<()> {
        if self.students_file.trim().is_empty() || self.instructors_file.trim().is_empty() {
            return Err(ScholarError::Config(
                "store file names must not be empty".to_string(),
            ));
        }
        if self.students_file == self.instructors_file {
            return Err(ScholarError::Config(format!(
                "students and instructors cannot share the store file '{}'",
                self.students_file
            )));
        }
        Ok(())
    }

    /// Serialize as the pretty JSON written by `scholar init`
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
