//! Ordered Entity List
//!
//! Copy-on-write list shared by the item store and the travel checklist.
//! A snapshot handed out by [`EntityList::snapshot`] never observes later
//! mutations, and a no-op never touches the current allocation.

use std::sync::Arc;

use super::entity::Entity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityList<E> {
    entries: Arc<Vec<E>>,
}

impl<E> Default for EntityList<E> {
    fn default() -> Self {
        Self {
            entries: Arc::new(Vec::new()),
        }
    }
}

impl<E: Entity> EntityList<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current list as a shared, immutable value
    pub fn snapshot(&self) -> Arc<Vec<E>> {
        Arc::clone(&self.entries)
    }

    pub fn as_slice(&self) -> &[E] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &E::Id) -> Option<&E> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn contains(&self, id: &E::Id) -> bool {
        self.get(id).is_some()
    }

    pub fn push(&mut self, entry: E) {
        Arc::make_mut(&mut self.entries).push(entry);
    }

    /// Remove by id, preserving the order of the rest
    pub fn remove(&mut self, id: &E::Id) -> Option<E> {
        let index = self.entries.iter().position(|entry| entry.id() == id)?;
        Some(Arc::make_mut(&mut self.entries).remove(index))
    }

    /// Mutate the entry with the given id; `None` if absent
    pub fn update<R>(&mut self, id: &E::Id, apply: impl FnOnce(&mut E) -> R) -> Option<R> {
        let index = self.entries.iter().position(|entry| entry.id() == id)?;
        Some(apply(&mut Arc::make_mut(&mut self.entries)[index]))
    }
}
