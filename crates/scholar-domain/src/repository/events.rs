//! Repository notification channels
//!
//! Two independent listener lists, invoked synchronously in registration
//! order. Nothing is queued or replayed: a listener registered after an
//! event never sees it.

type AddedListener<T> = Box<dyn FnMut(&T)>;
type DeletedListener = Box<dyn FnMut(&str)>;

/// "Entity added" and "entity deleted" channels for one repository
pub struct RepositoryEvents<T> {
    added: Vec<AddedListener<T>>,
    deleted: Vec<DeletedListener>,
}

impl<T> RepositoryEvents<T> {
    pub fn new() -> Self {
        Self {
            added: Vec::new(),
            deleted: Vec::new(),
        }
    }

    /// Register a listener for newly added records
    pub fn on_added(&mut self, listener: impl FnMut(&T) + 'static) {
        self.added.push(Box::new(listener));
    }

    /// Register a listener for deleted identifiers
    pub fn on_deleted(&mut self, listener: impl FnMut(&str) + 'static) {
        self.deleted.push(Box::new(listener));
    }

    pub fn emit_added(&mut self, entity: &T) {
        for listener in self.added.iter_mut() {
            listener(entity);
        }
    }

    pub fn emit_deleted(&mut self, id: &str) {
        for listener in self.deleted.iter_mut() {
            listener(id);
        }
    }
}

impl<T> Default for RepositoryEvents<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for RepositoryEvents<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RepositoryEvents")
            .field("added", &self.added.len())
            .field("deleted", &self.deleted.len())
            .finish()
    }
}
