//! JSON File Repository
//!
//! Keeps the whole collection in memory and rewrites the backing file in
//! full after every change. The file is opened, read or written, and closed
//! per operation; no handle is held between calls.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, info};

use scholar_domain::repository::events::RepositoryEvents;
use scholar_domain::repository::{position_of, Identifiable, Repository, RepositoryError};

/// File-backed repository for one record type
#[derive(Debug)]
pub struct JsonFileRepository<T> {
    entities: Vec<T>,
    file_path: PathBuf,
    pretty: bool,
    events: RepositoryEvents<T>,
}

impl<T> JsonFileRepository<T>
where
    T: Identifiable + Serialize + DeserializeOwned,
{
    /// Open the store at `file_path`.
    ///
    /// A missing file yields an empty collection. A file that exists but
    /// does not hold a JSON array of `T` fails with `RepositoryError::Load`.
    pub fn open(file_path: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let file_path = file_path.into();
        let entities = Self::load_entities(&file_path)?;
        debug!(
            path = %file_path.display(),
            count = entities.len(),
            "Loaded {} store",
            T::KIND
        );

        Ok(Self {
            entities,
            file_path,
            pretty: false,
            events: RepositoryEvents::new(),
        })
    }

    /// Indent the JSON written by `save_changes`
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn load_entities(path: &Path) -> Result<Vec<T>, RepositoryError> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let load_error = |message: String| RepositoryError::Load {
            path: path.display().to_string(),
            message,
        };
        let content = fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| load_error(e.to_string()))
    }

    fn persist_error(&self, message: String) -> RepositoryError {
        RepositoryError::Persist {
            path: self.file_path.display().to_string(),
            message,
        }
    }
}

impl<T> Repository<T> for JsonFileRepository<T>
where
    T: Identifiable + Serialize + DeserializeOwned,
{
    fn add(&mut self, entity: T) -> Result<(), RepositoryError> {
        self.entities.push(entity);
        self.save_changes()?;

        if let Some(added) = self.entities.last() {
            info!(id = added.id(), "Added {}", T::KIND);
            self.events.emit_added(added);
        }
        Ok(())
    }

    fn get_by_id(&self, id: &str) -> Option<&T> {
        let index = position_of(&self.entities, id)?;
        Some(&self.entities[index])
    }

    fn get_by_id_mut(&mut self, id: &str) -> Option<&mut T> {
        let index = position_of(&self.entities, id)?;
        Some(&mut self.entities[index])
    }

    fn delete(&mut self, id: &str) -> Result<bool, RepositoryError> {
        let Some(index) = position_of(&self.entities, id) else {
            debug!(id, "No {} to delete", T::KIND);
            return Ok(false);
        };

        self.entities.remove(index);
        if let Err(e) = self.save_changes() {
            error!(id, error = %e, "Error deleting {}", T::KIND);
            return Err(e);
        }

        info!(id, "Deleted {}", T::KIND);
        self.events.emit_deleted(id);
        Ok(true)
    }

    fn save_changes(&self) -> Result<(), RepositoryError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(&self.entities)
        } else {
            serde_json::to_string(&self.entities)
        }
        .map_err(|e| self.persist_error(e.to_string()))?;

        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.persist_error(e.to_string()))?;
            }
        }

        fs::write(&self.file_path, json).map_err(|e| self.persist_error(e.to_string()))?;
        debug!(
            path = %self.file_path.display(),
            count = self.entities.len(),
            "Saved {} store",
            T::KIND
        );
        Ok(())
    }

    fn get_all_entities(&self) -> &[T] {
        &self.entities
    }

    fn events_mut(&mut self) -> &mut RepositoryEvents<T> {
        &mut self.events
    }
}
