//! Task repository contract and in-memory implementation.
//!
//! # Invariants
//! - New tasks are appended; list order is insertion order.
//! - Stored tasks always pass `Task::validate()`.

use crate::model::task::{Task, TaskId};
use crate::repo::memory::MemoryList;
use crate::repo::RepoResult;
use crate::search::filter::TaskFilter;

/// Query options for listing tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskListQuery {
    pub filter: TaskFilter,
}

/// Repository interface for task list operations.
pub trait TaskRepository {
    fn create_task(&mut self, task: &Task) -> RepoResult<TaskId>;
    fn update_task(&mut self, task: &Task) -> RepoResult<()>;
    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>>;
    fn list_tasks(&self, query: &TaskListQuery) -> RepoResult<Vec<Task>>;
    fn delete_task(&mut self, id: TaskId) -> RepoResult<()>;
}

/// Task list held in process memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: MemoryList<Task>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a repository pre-filled with `tasks` in the given order.
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> RepoResult<Self> {
        let mut repo = Self::new();
        for task in tasks {
            repo.create_task(&task)?;
        }
        Ok(repo)
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn create_task(&mut self, task: &Task) -> RepoResult<TaskId> {
        task.validate()?;
        self.tasks.push_back(task.clone())
    }

    fn update_task(&mut self, task: &Task) -> RepoResult<()> {
        task.validate()?;
        self.tasks.replace(task.clone())
    }

    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>> {
        Ok(self.tasks.get(id).cloned())
    }

    fn list_tasks(&self, query: &TaskListQuery) -> RepoResult<Vec<Task>> {
        Ok(query.filter.apply(self.tasks.iter()))
    }

    fn delete_task(&mut self, id: TaskId) -> RepoResult<()> {
        self.tasks.remove(id).map(|_| ())
    }
}
