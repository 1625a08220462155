//! Weekly schedule use-case service.
//!
//! # Responsibility
//! - Add, replace and delete schedule events.
//! - Serve the selected day's agenda, the week overview and quick stats.

use crate::model::schedule::{EventDraft, EventId, EventKind, ScheduleEvent, WEEK};
use crate::model::ValidationError;
use crate::repo::schedule_repo::{EventListQuery, ScheduleRepository};
use crate::repo::{RepoError, RepoResult};
use chrono::Weekday;
use log::info;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleServiceError {
    Invalid(ValidationError),
    EventNotFound(EventId),
    Repo(RepoError),
}

impl Display for ScheduleServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "invalid event: {err}"),
            Self::EventNotFound(id) => write!(f, "event not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ScheduleServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::EventNotFound(_) => None,
        }
    }
}

impl From<RepoError> for ScheduleServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::EventNotFound(id),
            RepoError::Validation(err) => Self::Invalid(err),
            other => Self::Repo(other),
        }
    }
}

impl From<ValidationError> for ScheduleServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Invalid(value)
    }
}

/// Event count for one weekday button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayOverview {
    pub day: Weekday,
    pub event_count: usize,
}

/// Week-wide counts per event kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleStats {
    pub study_sessions: usize,
    pub assignments: usize,
    pub exams: usize,
}

pub struct ScheduleService<R: ScheduleRepository> {
    repo: R,
    selected_day: Weekday,
}

impl<R: ScheduleRepository> ScheduleService<R> {
    /// Starts with Monday selected.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            selected_day: Weekday::Mon,
        }
    }

    pub fn selected_day(&self) -> Weekday {
        self.selected_day
    }

    pub fn select_day(&mut self, day: Weekday) {
        self.selected_day = day;
    }

    pub fn add_event(&mut self, draft: EventDraft) -> Result<ScheduleEvent, ScheduleServiceError> {
        let event = draft.into_event()?;
        self.repo.create_event(&event)?;
        info!(
            "event=schedule_create module=schedule status=ok event_id={} day={} type={}",
            event.id,
            event.day,
            event.kind.as_str()
        );
        Ok(event)
    }

    pub fn update_event(
        &mut self,
        id: EventId,
        draft: EventDraft,
    ) -> Result<ScheduleEvent, ScheduleServiceError> {
        if self.repo.get_event(id)?.is_none() {
            return Err(ScheduleServiceError::EventNotFound(id));
        }
        let event = draft.into_event_with_id(id)?;
        self.repo.update_event(&event)?;
        info!("event=schedule_update module=schedule status=ok event_id={id}");
        Ok(event)
    }

    pub fn delete_event(&mut self, id: EventId) -> Result<(), ScheduleServiceError> {
        self.repo.delete_event(id)?;
        info!("event=schedule_delete module=schedule status=ok event_id={id}");
        Ok(())
    }

    pub fn get_event(&self, id: EventId) -> RepoResult<Option<ScheduleEvent>> {
        self.repo.get_event(id)
    }

    /// Events of `day`, earliest first.
    pub fn events_for_day(&self, day: Weekday) -> Result<Vec<ScheduleEvent>, ScheduleServiceError> {
        Ok(self.repo.list_events(&EventListQuery::day(day))?)
    }

    pub fn selected_day_events(&self) -> Result<Vec<ScheduleEvent>, ScheduleServiceError> {
        self.events_for_day(self.selected_day)
    }

    /// Monday-first event counts for the week buttons.
    pub fn week_overview(&self) -> Result<Vec<DayOverview>, ScheduleServiceError> {
        let all = self.repo.list_events(&EventListQuery::default())?;
        Ok(WEEK
            .iter()
            .map(|&day| DayOverview {
                day,
                event_count: all.iter().filter(|event| event.day == day).count(),
            })
            .collect())
    }

    pub fn quick_stats(&self) -> Result<ScheduleStats, ScheduleServiceError> {
        let all = self.repo.list_events(&EventListQuery::default())?;
        let count = |kind: EventKind| all.iter().filter(|event| event.kind == kind).count();
        Ok(ScheduleStats {
            study_sessions: count(EventKind::Study),
            assignments: count(EventKind::Assignment),
            exams: count(EventKind::Exam),
        })
    }
}
