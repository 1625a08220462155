//! Ordered in-memory record list shared by the panel repositories.

use crate::repo::{RepoError, RepoResult};
use uuid::Uuid;

/// Records stored in a [`MemoryList`].
pub trait Record: Clone {
    fn record_id(&self) -> Uuid;
}

impl Record for crate::model::task::Task {
    fn record_id(&self) -> Uuid {
        self.id
    }
}

impl Record for crate::model::note::Note {
    fn record_id(&self) -> Uuid {
        self.id
    }
}

impl Record for crate::model::schedule::ScheduleEvent {
    fn record_id(&self) -> Uuid {
        self.id
    }
}

/// Insertion-ordered list keyed by record id.
#[derive(Debug, Clone)]
pub struct MemoryList<T> {
    items: Vec<T>,
}

impl<T> Default for MemoryList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> MemoryList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.items.iter().find(|item| item.record_id() == id)
    }

    pub fn push_back(&mut self, item: T) -> RepoResult<Uuid> {
        let id = self.ensure_absent(&item)?;
        self.items.push(item);
        Ok(id)
    }

    pub fn push_front(&mut self, item: T) -> RepoResult<Uuid> {
        let id = self.ensure_absent(&item)?;
        self.items.insert(0, item);
        Ok(id)
    }

    /// Replaces the record with the same id, keeping its position.
    pub fn replace(&mut self, item: T) -> RepoResult<()> {
        let id = item.record_id();
        let slot = self
            .items
            .iter_mut()
            .find(|existing| existing.record_id() == id)
            .ok_or(RepoError::NotFound(id))?;
        *slot = item;
        Ok(())
    }

    pub fn remove(&mut self, id: Uuid) -> RepoResult<T> {
        let index = self
            .items
            .iter()
            .position(|item| item.record_id() == id)
            .ok_or(RepoError::NotFound(id))?;
        Ok(self.items.remove(index))
    }

    fn ensure_absent(&self, item: &T) -> RepoResult<Uuid> {
        let id = item.record_id();
        if self.get(id).is_some() {
            return Err(RepoError::Duplicate(id));
        }
        Ok(id)
    }
}
