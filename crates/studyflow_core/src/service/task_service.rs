//! Task list use-case service.
//!
//! # Responsibility
//! - Add, toggle, edit and delete tasks.
//! - Serve the filtered list and the filter tab counts.
//!
//! # Invariants
//! - A rejected input leaves the list unchanged.
//! - Log lines carry ids and flags only, never task titles.

use crate::model::task::{NewTask, Task, TaskId, TaskPatch};
use crate::model::ValidationError;
use crate::repo::task_repo::{TaskListQuery, TaskRepository};
use crate::repo::{RepoError, RepoResult};
use crate::search::filter::{TaskCounts, TaskFilter};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for task use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskServiceError {
    /// Input failed field validation.
    Invalid(ValidationError),
    TaskNotFound(TaskId),
    Repo(RepoError),
}

impl Display for TaskServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "invalid task: {err}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TaskServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::TaskNotFound(_) => None,
        }
    }
}

impl From<RepoError> for TaskServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::TaskNotFound(id),
            RepoError::Validation(err) => Self::Invalid(err),
            other => Self::Repo(other),
        }
    }
}

/// Task list facade over repository implementations.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Appends a new pending task.
    pub fn add_task(&mut self, input: NewTask) -> Result<Task, TaskServiceError> {
        let task = Task::new(input.title, input.priority, input.category, input.due_date);
        self.repo.create_task(&task)?;
        info!(
            "event=task_create module=tasks status=ok task_id={} priority={} category={}",
            task.id, task.priority, task.category
        );
        Ok(task)
    }

    /// Flips the completion flag.
    pub fn toggle_task(&mut self, id: TaskId) -> Result<Task, TaskServiceError> {
        let current = self.require(id)?;
        let patch = TaskPatch {
            completed: Some(!current.completed),
            ..TaskPatch::default()
        };
        let toggled = self.write_patch(&current, &patch)?;
        debug!(
            "event=task_toggle module=tasks status=ok task_id={} completed={}",
            id, toggled.completed
        );
        Ok(toggled)
    }

    pub fn update_task(&mut self, id: TaskId, patch: &TaskPatch) -> Result<Task, TaskServiceError> {
        let current = self.require(id)?;
        let updated = self.write_patch(&current, patch)?;
        info!("event=task_update module=tasks status=ok task_id={id}");
        Ok(updated)
    }

    pub fn delete_task(&mut self, id: TaskId) -> Result<(), TaskServiceError> {
        self.repo.delete_task(id)?;
        info!("event=task_delete module=tasks status=ok task_id={id}");
        Ok(())
    }

    pub fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>> {
        self.repo.get_task(id)
    }

    pub fn list_tasks(&self, filter: TaskFilter) -> Result<Vec<Task>, TaskServiceError> {
        Ok(self.repo.list_tasks(&TaskListQuery { filter })?)
    }

    pub fn counts(&self) -> Result<TaskCounts, TaskServiceError> {
        let all = self.repo.list_tasks(&TaskListQuery::default())?;
        Ok(TaskCounts::tally(&all))
    }

    fn require(&self, id: TaskId) -> Result<Task, TaskServiceError> {
        self.repo
            .get_task(id)?
            .ok_or(TaskServiceError::TaskNotFound(id))
    }

    fn write_patch(&mut self, current: &Task, patch: &TaskPatch) -> Result<Task, TaskServiceError> {
        let next = patch.apply_to(current);
        self.repo.update_task(&next)?;
        Ok(next)
    }
}
