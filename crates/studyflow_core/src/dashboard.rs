//! Dashboard shell hosting the five study panels.
//!
//! # Responsibility
//! - Own one instance of every panel for the signed-in user.
//! - Track the active tab.
//! - Project the progress summary from live panel state.
//!
//! # Invariants
//! - Panels never reach into each other; cross-panel data flows only through
//!   the shell (`progress_summary`).
//! - Dropping the shell disposes the timer and its ticker.

use crate::config::StudyConfig;
use crate::model::user::UserProfile;
use crate::model::ValidationError;
use crate::repo::note_repo::InMemoryNoteRepository;
use crate::repo::schedule_repo::InMemoryScheduleRepository;
use crate::repo::task_repo::InMemoryTaskRepository;
use crate::repo::RepoError;
use crate::search::filter::TaskFilter;
use crate::seed;
use crate::service::note_service::NoteService;
use crate::service::progress_service::{ProgressBoard, ProgressSummary, StudyStats};
use crate::service::schedule_service::ScheduleService;
use crate::service::task_service::{TaskService, TaskServiceError};
use crate::timer::{TimerController, TimerError};
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug)]
pub enum DashboardError {
    Timer(TimerError),
    Repo(RepoError),
    Tasks(TaskServiceError),
}

impl Display for DashboardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timer(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Tasks(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DashboardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Timer(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Tasks(err) => Some(err),
        }
    }
}

impl From<TimerError> for DashboardError {
    fn from(value: TimerError) -> Self {
        Self::Timer(value)
    }
}

impl From<RepoError> for DashboardError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<TaskServiceError> for DashboardError {
    fn from(value: TaskServiceError) -> Self {
        Self::Tasks(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardTab {
    /// Overview shown when a session opens.
    #[default]
    Progress,
    Timer,
    Tasks,
    Schedule,
    Notes,
}

impl DashboardTab {
    /// Tab strip order, left to right.
    pub const ALL: [DashboardTab; 5] = [
        Self::Progress,
        Self::Timer,
        Self::Tasks,
        Self::Schedule,
        Self::Notes,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Timer => "timer",
            Self::Tasks => "tasks",
            Self::Notes => "notes",
            Self::Schedule => "schedule",
            Self::Progress => "progress",
        }
    }
}

impl FromStr for DashboardTab {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == needle)
            .ok_or(ValidationError::UnknownValue {
                field: "tab",
                value: needle,
            })
    }
}

pub struct Dashboard {
    user: UserProfile,
    active_tab: DashboardTab,
    timer: TimerController,
    tasks: TaskService<InMemoryTaskRepository>,
    notes: NoteService<InMemoryNoteRepository>,
    schedule: ScheduleService<InMemoryScheduleRepository>,
    progress: ProgressBoard,
}

impl Dashboard {
    /// Dashboard with empty panels and zeroed statistics.
    pub fn new(user: UserProfile, config: &StudyConfig) -> Result<Self, DashboardError> {
        let stats = StudyStats {
            today_study_hours: 0.0,
            weekly_progress_hours: 0.0,
            focus_sessions: 0,
            streak_days: 0,
        };
        Self::assemble(
            user,
            config,
            InMemoryTaskRepository::new(),
            InMemoryNoteRepository::new(),
            InMemoryScheduleRepository::new(),
            ProgressBoard::new(stats, Vec::new(), config.progress.weekly_goal_hours),
        )
    }

    /// Dashboard pre-filled with the mock study data.
    pub fn seeded(user: UserProfile, config: &StudyConfig) -> Result<Self, DashboardError> {
        Self::assemble(
            user,
            config,
            InMemoryTaskRepository::with_tasks(seed::tasks())?,
            InMemoryNoteRepository::with_notes(seed::notes())?,
            InMemoryScheduleRepository::with_events(seed::events())?,
            ProgressBoard::new(
                seed::study_stats(),
                seed::achievements(),
                config.progress.weekly_goal_hours,
            ),
        )
    }

    fn assemble(
        user: UserProfile,
        config: &StudyConfig,
        tasks: InMemoryTaskRepository,
        notes: InMemoryNoteRepository,
        schedule: InMemoryScheduleRepository,
        progress: ProgressBoard,
    ) -> Result<Self, DashboardError> {
        Ok(Self {
            user,
            active_tab: DashboardTab::default(),
            timer: TimerController::new(&config.timer)?,
            tasks: TaskService::new(tasks),
            notes: NoteService::new(notes),
            schedule: ScheduleService::new(schedule),
            progress,
        })
    }

    pub fn user(&self) -> &UserProfile {
        &self.user
    }

    pub fn active_tab(&self) -> DashboardTab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: DashboardTab) {
        debug!("event=tab_select module=dashboard tab={}", tab.as_str());
        self.active_tab = tab;
    }

    pub fn timer(&self) -> &TimerController {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut TimerController {
        &mut self.timer
    }

    pub fn tasks(&self) -> &TaskService<InMemoryTaskRepository> {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut TaskService<InMemoryTaskRepository> {
        &mut self.tasks
    }

    pub fn notes(&self) -> &NoteService<InMemoryNoteRepository> {
        &self.notes
    }

    pub fn notes_mut(&mut self) -> &mut NoteService<InMemoryNoteRepository> {
        &mut self.notes
    }

    pub fn schedule(&self) -> &ScheduleService<InMemoryScheduleRepository> {
        &self.schedule
    }

    pub fn schedule_mut(&mut self) -> &mut ScheduleService<InMemoryScheduleRepository> {
        &mut self.schedule
    }

    /// Progress panel contents as of `today`.
    pub async fn progress_summary(
        &self,
        today: NaiveDate,
    ) -> Result<ProgressSummary, DashboardError> {
        let tasks = self.tasks.list_tasks(TaskFilter::All)?;
        let live_sessions = self.timer.completed_focus_sessions().await;
        Ok(self.progress.summarize(&tasks, live_sessions, today))
    }
}
