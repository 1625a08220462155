//! Core domain logic for StudyFlow.
//! This crate is the single source of truth for the study panels' invariants.

pub mod config;
pub mod dashboard;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod seed;
pub mod service;
pub mod session;
pub mod timer;

pub use config::{ConfigError, StudyConfig};
pub use dashboard::{Dashboard, DashboardError, DashboardTab};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteDraft, NoteId};
pub use model::schedule::{EventDraft, EventId, EventKind, ScheduleEvent};
pub use model::task::{NewTask, Task, TaskCategory, TaskId, TaskPatch, TaskPriority};
pub use model::user::{LoginForm, SignupForm, UserProfile};
pub use model::ValidationError;
pub use repo::{RepoError, RepoResult};
pub use search::filter::{NoteSearch, TaskCounts, TaskFilter};
pub use service::progress_service::{DueLabel, ProgressSummary};
pub use session::{AppView, LandingView, SessionError, SessionGate, SessionHandoff};
pub use timer::{TimerController, TimerError, TimerMode, TimerSnapshot, TimerState};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
