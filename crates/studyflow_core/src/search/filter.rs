//! Task completion filter and note text search.

use crate::model::note::Note;
use crate::model::task::Task;
use crate::model::ValidationError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Tab filter of the task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl TaskFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !task.completed,
            Self::Completed => task.completed,
        }
    }

    pub fn apply<'a>(self, tasks: impl IntoIterator<Item = &'a Task>) -> Vec<Task> {
        tasks
            .into_iter()
            .filter(|task| self.matches(task))
            .cloned()
            .collect()
    }
}

impl FromStr for TaskFilter {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            other => Err(ValidationError::UnknownValue {
                field: "filter",
                value: other.to_string(),
            }),
        }
    }
}

/// Per-filter counts shown on the filter tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskCounts {
    pub all: usize,
    pub pending: usize,
    pub completed: usize,
}

impl TaskCounts {
    pub fn tally<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        tasks.into_iter().fold(Self::default(), |mut counts, task| {
            counts.all += 1;
            if task.completed {
                counts.completed += 1;
            } else {
                counts.pending += 1;
            }
            counts
        })
    }
}

/// Case-insensitive containment search over note title, content, subject and tags.
///
/// The term is matched as typed; only an empty term matches every note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteSearch {
    needle: Option<String>,
}

impl NoteSearch {
    pub fn new(term: &str) -> Self {
        Self {
            needle: (!term.is_empty()).then(|| term.to_lowercase()),
        }
    }

    pub fn matches(&self, note: &Note) -> bool {
        match self.needle.as_deref() {
            Some(needle) => note.contains_lowercase(needle),
            None => true,
        }
    }
}
