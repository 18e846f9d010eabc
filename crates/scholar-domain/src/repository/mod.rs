//! Repository Port - how the registry wants records stored
//!
//! The trait says what a store of one record type must do; adapters decide
//! where the records live.
//!
//! ```text
//! Domain Layer              │  Adapter Layer
//! ──────────────────────────┼────────────────────────
//! trait Repository<T>       │  JsonFileRepository<T>
//!   fn add()                │  InMemoryRepository<T>
//!   fn get_by_id()          │
//!   fn delete()             │
//! ```

pub mod events;

use thiserror::Error;

use self::events::RepositoryEvents;

/// A record that can be kept in a `Repository`
///
/// Each record type names its own key field; the repository only ever sees
/// `id()`.
pub trait Identifiable {
    /// Lowercase record name used in messages ("student", "instructor")
    const KIND: &'static str;

    fn id(&self) -> &str;
}

/// Errors that can occur during repository operations
///
/// "Not found" is deliberately absent: lookups return `None` and deletes
/// return `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The backing store exists but could not be read or parsed
    #[error("Failed to load {path}: {message}")]
    Load { path: String, message: String },

    /// The collection could not be written back
    #[error("Failed to persist {path}: {message}")]
    Persist { path: String, message: String },
}

/// Repository Trait
///
/// An ordered, in-memory collection of `T` mirrored to a backing store.
/// Identifiers are not required to be unique; lookups always return the
/// earliest match.
pub trait Repository<T: Identifiable> {
    /// Append a record, persist the collection, then notify "added"
    fn add(&mut self, entity: T) -> Result<(), RepositoryError>;

    /// First record whose identifier equals `id`
    fn get_by_id(&self, id: &str) -> Option<&T>;

    /// Mutable access for in-place edits; call `save_changes` afterwards
    fn get_by_id_mut(&mut self, id: &str) -> Option<&mut T>;

    /// Remove the first record matching `id`, persist, then notify "deleted".
    ///
    /// Returns `Ok(false)` without persisting or notifying when nothing
    /// matches.
    fn delete(&mut self, id: &str) -> Result<bool, RepositoryError>;

    /// Overwrite the backing store with the whole collection
    fn save_changes(&self) -> Result<(), RepositoryError>;

    /// The live collection, in insertion order
    fn get_all_entities(&self) -> &[T];

    /// Subscription points for the "added" and "deleted" channels
    fn events_mut(&mut self) -> &mut RepositoryEvents<T>;

    /// Number of records held
    fn count(&self) -> usize {
        self.get_all_entities().len()
    }

    /// Check if any record carries this identifier
    fn exists(&self, id: &str) -> bool {
        self.get_by_id(id).is_some()
    }
}

/// Index of the first record with the given identifier
///
/// Shared by every adapter so lookup semantics cannot drift.
pub fn position_of<T: Identifiable>(entities: &[T], id: &str) -> Option<usize> {
    entities.iter().position(|e| e.id() == id)
}
