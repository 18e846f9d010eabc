//! In-Memory Repository Implementation
//!
//! Same contract as the file-backed store, minus the file.
//! Useful for testing and for scratch sessions.

use tracing::info;

use scholar_domain::repository::events::RepositoryEvents;
use scholar_domain::repository::{position_of, Identifiable, Repository, RepositoryError};

/// Volatile repository; `save_changes` has nothing to write
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    entities: Vec<T>,
    events: RepositoryEvents<T>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            events: RepositoryEvents::new(),
        }
    }

    /// Start from an existing collection, order preserved
    pub fn with_entities(entities: Vec<T>) -> Self {
        Self {
            entities,
            events: RepositoryEvents::new(),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Identifiable> Repository<T> for InMemoryRepository<T> {
    fn add(&mut self, entity: T) -> Result<(), RepositoryError> {
        self.entities.push(entity);
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
            return Ok(false);
        };
        self.entities.remove(index);
        info!(id, "Deleted {}", T::KIND);
        self.events.emit_deleted(id);
        Ok(true)
    }

    fn save_changes(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    fn get_all_entities(&self) -> &[T] {
        &self.entities
    }

    fn events_mut(&mut self) -> &mut RepositoryEvents<T> {
        &mut self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scholar_domain::{Department, Instructor};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_instructor_repository() {
        let mut repo = InMemoryRepository::new();

        repo.add(Instructor::new("I1", Department::English)).unwrap();
        repo.add(Instructor::new("I2", Department::ComputerScience)).unwrap();

        let found = repo.get_by_id("I2");
        assert!(found.is_some());
        assert_eq!(found.unwrap().department, Department::ComputerScience);
        assert_eq!(repo.count(), 2);
    }

    #[test]
    fn test_delete_notifies_only_on_hit() {
        let deleted = Rc::new(RefCell::new(Vec::new()));
        let mut repo = InMemoryRepository::with_entities(vec![
            Instructor::new("I1", Department::English),
            Instructor::new("I2", Department::Bba),
        ]);
        let sink = Rc::clone(&deleted);
        repo.events_mut()
            .on_deleted(move |id| sink.borrow_mut().push(id.to_string()));

        assert!(!repo.delete("I9").unwrap());
        assert!(repo.delete("I1").unwrap());

        assert_eq!(*deleted.borrow(), vec!["I1"]);
        assert!(!repo.exists("I1"));
        assert!(repo.exists("I2"));
    }
}
