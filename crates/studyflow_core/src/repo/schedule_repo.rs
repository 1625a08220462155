//! Schedule repository contract and in-memory implementation.
//!
//! # Invariants
//! - A day-scoped listing is sorted by `time` (lexical, stable).
//! - An unscoped listing keeps insertion order.

use crate::model::schedule::{EventId, ScheduleEvent};
use crate::repo::memory::MemoryList;
use crate::repo::RepoResult;
use chrono::Weekday;

/// Query options for listing events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventListQuery {
    /// Restrict to one weekday and sort by time.
    pub day: Option<Weekday>,
}

impl EventListQuery {
    pub fn day(day: Weekday) -> Self {
        Self { day: Some(day) }
    }
}

/// Repository interface for weekly schedule operations.
pub trait ScheduleRepository {
    fn create_event(&mut self, event: &ScheduleEvent) -> RepoResult<EventId>;
    fn update_event(&mut self, event: &ScheduleEvent) -> RepoResult<()>;
    fn get_event(&self, id: EventId) -> RepoResult<Option<ScheduleEvent>>;
    fn list_events(&self, query: &EventListQuery) -> RepoResult<Vec<ScheduleEvent>>;
    fn delete_event(&mut self, id: EventId) -> RepoResult<()>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryScheduleRepository {
    events: MemoryList<ScheduleEvent>,
}

impl InMemoryScheduleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: impl IntoIterator<Item = ScheduleEvent>) -> RepoResult<Self> {
        let mut repo = Self::new();
        for event in events {
            repo.create_event(&event)?;
        }
        Ok(repo)
    }
}

impl ScheduleRepository for InMemoryScheduleRepository {
    fn create_event(&mut self, event: &ScheduleEvent) -> RepoResult<EventId> {
        event.validate()?;
        self.events.push_back(event.clone())
    }

    fn update_event(&mut self, event: &ScheduleEvent) -> RepoResult<()> {
        event.validate()?;
        self.events.replace(event.clone())
    }

    fn get_event(&self, id: EventId) -> RepoResult<Option<ScheduleEvent>> {
        Ok(self.events.get(id).cloned())
    }

    fn list_events(&self, query: &EventListQuery) -> RepoResult<Vec<ScheduleEvent>> {
        let Some(day) = query.day else {
            return Ok(self.events.iter().cloned().collect());
        };

        let mut events: Vec<ScheduleEvent> = self
            .events
            .iter()
            .filter(|event| event.day == day)
            .cloned()
            .collect();
        events.sort_by(|a, b| a.time.cmp(&b.time));
        Ok(events)
    }

    fn delete_event(&mut self, id: EventId) -> RepoResult<()> {
        self.events.remove(id).map(|_| ())
    }
}
