//! Progress summary projection.
//!
//! # Responsibility
//! - Combine recorded study statistics with live task and timer state.
//! - Derive the upcoming-task list with relative due labels.
//!
//! # Invariants
//! - Percentages are within `0.0..=100.0`.
//! - Task totals always reflect the live task list, never seeded numbers.

use crate::model::task::{Task, TaskPriority};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// How many upcoming tasks the summary shows.
pub const UPCOMING_TASK_LIMIT: usize = 3;

/// Recorded study statistics not derivable from live panels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyStats {
    pub today_study_hours: f64,
    pub weekly_progress_hours: f64,
    /// Focus sessions finished before the live timer started counting.
    pub focus_sessions: u32,
    pub streak_days: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub icon: String,
}

/// Relative due label for an upcoming task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "days")]
pub enum DueLabel {
    Overdue,
    Today,
    Tomorrow,
    InDays(i64),
    NoDueDate,
}

impl DueLabel {
    pub fn relative_to(due_date: Option<NaiveDate>, today: NaiveDate) -> Self {
        let Some(due) = due_date else {
            return Self::NoDueDate;
        };
        match (due - today).num_days() {
            days if days < 0 => Self::Overdue,
            0 => Self::Today,
            1 => Self::Tomorrow,
            days => Self::InDays(days),
        }
    }
}

impl std::fmt::Display for DueLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overdue => f.write_str("Overdue"),
            Self::Today => f.write_str("Today"),
            Self::Tomorrow => f.write_str("Tomorrow"),
            Self::InDays(days) => write!(f, "{days} days"),
            Self::NoDueDate => f.write_str("No due date"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingTask {
    pub title: String,
    pub due: DueLabel,
    pub priority: TaskPriority,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub today_study_hours: f64,
    pub weekly_progress_hours: f64,
    pub weekly_goal_hours: f64,
    pub weekly_percent: f64,
    pub completed_tasks: usize,
    pub total_tasks: usize,
    pub task_percent: f64,
    pub focus_sessions: u32,
    pub streak_days: u32,
    pub achievements: Vec<Achievement>,
    pub upcoming: Vec<UpcomingTask>,
}

/// Holds the recorded statistics and achievements of the progress panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBoard {
    stats: StudyStats,
    achievements: Vec<Achievement>,
    weekly_goal_hours: f64,
}

impl ProgressBoard {
    pub fn new(stats: StudyStats, achievements: Vec<Achievement>, weekly_goal_hours: f64) -> Self {
        Self {
            stats,
            achievements,
            weekly_goal_hours,
        }
    }

    pub fn stats(&self) -> StudyStats {
        self.stats
    }

    /// Builds the summary from live tasks and focus sessions completed by the live timer.
    pub fn summarize(
        &self,
        tasks: &[Task],
        live_focus_sessions: u32,
        today: NaiveDate,
    ) -> ProgressSummary {
        let completed_tasks = tasks.iter().filter(|task| task.completed).count();
        let total_tasks = tasks.len();

        ProgressSummary {
            today_study_hours: self.stats.today_study_hours,
            weekly_progress_hours: self.stats.weekly_progress_hours,
            weekly_goal_hours: self.weekly_goal_hours,
            weekly_percent: percent(self.stats.weekly_progress_hours, self.weekly_goal_hours),
            completed_tasks,
            total_tasks,
            task_percent: percent(completed_tasks as f64, total_tasks as f64),
            focus_sessions: self.stats.focus_sessions.saturating_add(live_focus_sessions),
            streak_days: self.stats.streak_days,
            achievements: self.achievements.clone(),
            upcoming: upcoming_tasks(tasks, today, UPCOMING_TASK_LIMIT),
        }
    }
}

/// Pending tasks, soonest due first; undated tasks last in list order.
pub fn upcoming_tasks(tasks: &[Task], today: NaiveDate, limit: usize) -> Vec<UpcomingTask> {
    let mut pending: Vec<&Task> = tasks.iter().filter(|task| !task.completed).collect();
    pending.sort_by(|a, b| match (a.due_date, b.due_date) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    pending
        .into_iter()
        .take(limit)
        .map(|task| UpcomingTask {
            title: task.title.clone(),
            due: DueLabel::relative_to(task.due_date, today),
            priority: task.priority,
        })
        .collect()
}

fn percent(part: f64, whole: f64) -> f64 {
    if whole <= 0.0 {
        return 0.0;
    }
    (part / whole * 100.0).clamp(0.0, 100.0)
}
