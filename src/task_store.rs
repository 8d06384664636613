use crate::error::{Result, StoreError};
use crate::task::{Task, TaskId};
use chrono::format::{Item, StrftimeItems};
use chrono::Local;
use std::fmt::Write;
use tracing::debug;

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// How a store treats the description field of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DescriptionPolicy {
    /// The screen has no description field; anything passed in is dropped.
    #[default]
    Unused,
    Required,
}

/// Accepts a chrono strftime pattern only if every specifier is known.
pub fn parse_date_format(s: &str) -> std::result::Result<String, String> {
    if StrftimeItems::new(s).any(|item| matches!(item, Item::Error)) {
        return Err(format!("invalid date format `{s}`"));
    }
    Ok(s.to_string())
}

/// In-memory, insertion-ordered collection of tasks.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
    policy: DescriptionPolicy,
    date_format: String,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new(DescriptionPolicy::default())
    }
}

impl TaskStore {
    pub fn new(policy: DescriptionPolicy) -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
            policy,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    /// Validates the fields, then appends a new task with a fresh id.
    pub fn create(&mut self, title: &str, description: Option<&str>) -> Result<Task> {
        let description = self.check_fields(title, description)?;

        let id = TaskId(self.next_id);
        self.next_id += 1;
        let task = Task {
            id,
            title: title.to_string(),
            description,
            created_at: self.today(),
        };
        self.tasks.push(task.clone());
        debug!(%id, total = self.tasks.len(), "task created");
        Ok(task)
    }

    /// Removes the task with `id`. Unknown ids are ignored.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let index = self.position(id)?;
        let removed = self.tasks.remove(index);
        debug!(%id, total = self.tasks.len(), "task deleted");
        Some(removed)
    }

    /// Replaces title and description in place; id, creation date and
    /// position are kept.
    pub fn update(&mut self, id: TaskId, title: &str, description: Option<&str>) -> Result<Task> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        let description = self.check_fields(title, description)?;

        let task = &mut self.tasks[index];
        task.title = title.to_string();
        task.description = description;
        debug!(%id, "task updated");
        Ok(task.clone())
    }

    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    // Falls back to the default pattern when the configured one is invalid.
    fn today(&self) -> String {
        let now = Local::now();
        let mut out = String::new();
        if write!(out, "{}", now.format(&self.date_format)).is_err() {
            out.clear();
            let _ = write!(out, "{}", now.format(DEFAULT_DATE_FORMAT));
        }
        out
    }

    // Returns the description to store.
    fn check_fields(&self, title: &str, description: Option<&str>) -> Result<String> {
        let description = description.unwrap_or_default();
        match self.policy {
            DescriptionPolicy::Required => {
                if title.trim().is_empty() || description.trim().is_empty() {
                    return Err(StoreError::validation(
                        "Enter the task title and description",
                    ));
                }
                Ok(description.to_string())
            }
            DescriptionPolicy::Unused => {
                if title.trim().is_empty() {
                    return Err(StoreError::validation("Enter the task title"));
                }
                Ok(String::new())
            }
        }
    }
}
