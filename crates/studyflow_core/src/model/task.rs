//! Task domain model.
//!
//! # Invariants
//! - `title` is non-blank for every stored task.
//! - New tasks start as not completed.

use crate::model::{require_text, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier of a task.
pub type TaskId = Uuid;

/// Task urgency shown as a badge in the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

/// Study category a task belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    #[default]
    Study,
    Assignment,
    Exam,
    Project,
}

impl TaskPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TaskCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Study => "study",
            Self::Assignment => "assignment",
            Self::Exam => "exam",
            Self::Project => "project",
        }
    }
}

impl Display for TaskPriority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for TaskCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskPriority {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(ValidationError::UnknownValue {
                field: "priority",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for TaskCategory {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "study" => Ok(Self::Study),
            "assignment" => Ok(Self::Assignment),
            "exam" => Ok(Self::Exam),
            "project" => Ok(Self::Project),
            other => Err(ValidationError::UnknownValue {
                field: "category",
                value: other.to_string(),
            }),
        }
    }
}

/// One entry of the task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    pub priority: TaskPriority,
    pub category: TaskCategory,
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// Creates a pending task with a generated id.
    pub fn new(
        title: impl Into<String>,
        priority: TaskPriority,
        category: TaskCategory,
        due_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            completed: false,
            priority,
            category,
            due_date,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)
    }
}

/// Input for the "add task" form.
///
/// Defaults mirror the blank form: medium priority, study category, no due date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub priority: TaskPriority,
    pub category: TaskCategory,
    pub due_date: Option<NaiveDate>,
}

impl NewTask {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Partial update; `None` leaves a field unchanged.
///
/// `due_date: Some(None)` clears the due date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<TaskPriority>,
    pub category: Option<TaskCategory>,
    pub due_date: Option<Option<NaiveDate>>,
}

impl TaskPatch {
    /// Applies the patch to a copy of `task`.
    pub fn apply_to(&self, task: &Task) -> Task {
        let mut next = task.clone();
        if let Some(title) = &self.title {
            next.title = title.clone();
        }
        if let Some(completed) = self.completed {
            next.completed = completed;
        }
        if let Some(priority) = self.priority {
            next.priority = priority;
        }
        if let Some(category) = self.category {
            next.category = category;
        }
        if let Some(due_date) = self.due_date {
            next.due_date = due_date;
        }
        next
    }
}
