//! Popup form used to create and edit tasks.

use crate::error::Result;
use crate::task::{Task, TaskId};
use crate::task_store::TaskStore;

/// Decides whether a submitted form creates or updates a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Idle,
    Creating,
    Editing(TaskId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Title,
    Description,
}

#[derive(Debug, Default)]
pub struct TaskForm {
    pub mode: EditMode,
    pub title: String,
    pub description: String,
    pub field: Field,
}

impl TaskForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.mode != EditMode::Idle
    }

    pub fn open_create(&mut self) {
        self.clear();
        self.mode = EditMode::Creating;
    }

    pub fn open_edit(&mut self, task: &Task) {
        self.title = task.title.clone();
        self.description = task.description.clone();
        self.field = Field::Title;
        self.mode = EditMode::Editing(task.id);
    }

    pub fn cancel(&mut self) {
        self.clear();
    }

    /// Sends the drafts to the store. On error the form stays open with its
    /// drafts intact. Returns `None` when no form is open.
    pub fn submit(&mut self, store: &mut TaskStore) -> Option<Result<Task>> {
        let result = match self.mode {
            EditMode::Idle => return None,
            EditMode::Creating => store.create(&self.title, Some(&self.description)),
            EditMode::Editing(id) => store.update(id, &self.title, Some(&self.description)),
        };
        if result.is_ok() {
            self.clear();
        }
        Some(result)
    }

    pub fn toggle_field(&mut self) {
        self.field = match self.field {
            Field::Title => Field::Description,
            Field::Description => Field::Title,
        };
    }

    pub fn focused_mut(&mut self) -> &mut String {
        match self.field {
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
        }
    }

    fn clear(&mut self) {
        self.mode = EditMode::Idle;
        self.title.clear();
        self.description.clear();
        self.field = Field::Title;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::task_store::DescriptionPolicy;

    #[test]
    fn test_create_flow() {
        let mut store = TaskStore::default();
        let mut form = TaskForm::new();
        assert!(!form.is_open());

        form.open_create();
        assert_eq!(form.mode, EditMode::Creating);
        form.title.push_str("Buy milk");

        let task = form.submit(&mut store).unwrap().unwrap();
        assert_eq!(task.title, "Buy milk");
        assert_eq!(form.mode, EditMode::Idle);
        assert!(form.title.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_failed_submit_keeps_form_open() {
        let mut store = TaskStore::new(DescriptionPolicy::Required);
        let mut form = TaskForm::new();
        form.open_create();
        form.title.push_str("Title only");

        let result = form.submit(&mut store).unwrap();
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert_eq!(form.mode, EditMode::Creating);
        assert_eq!(form.title, "Title only");
        assert!(store.is_empty());
    }

    #[test]
    fn test_edit_flow() {
        let mut store = TaskStore::new(DescriptionPolicy::Required);
        let task = store.create("Walk dog", Some("evening")).unwrap();
        let mut form = TaskForm::new();

        form.open_edit(&task);
        assert_eq!(form.mode, EditMode::Editing(task.id));
        assert_eq!(form.title, "Walk dog");
        assert_eq!(form.description, "evening");

        form.title = "Walk the dog".to_string();
        let updated = form.submit(&mut store).unwrap().unwrap();
        assert_eq!(updated.id, task.id);
        assert_eq!(updated.created_at, task.created_at);
        assert_eq!(store.list()[0].title, "Walk the dog");
        assert_eq!(form.mode, EditMode::Idle);
    }

    #[test]
    fn test_edit_of_deleted_task_is_not_found() {
        let mut store = TaskStore::default();
        let task = store.create("Gone", None).unwrap();
        let mut form = TaskForm::new();
        form.open_edit(&task);
        store.delete(task.id);

        let result = form.submit(&mut store).unwrap();
        assert_eq!(result, Err(StoreError::NotFound(task.id)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut store = TaskStore::default();
        let mut form = TaskForm::new();
        form.open_create();
        form.title.push_str("draft");
        form.cancel();

        assert_eq!(form.mode, EditMode::Idle);
        assert!(form.title.is_empty());
        assert!(form.submit(&mut store).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_field_focus() {
        let mut form = TaskForm::new();
        form.open_create();
        form.focused_mut().push('a');
        form.toggle_field();
        form.focused_mut().push('b');
        assert_eq!(form.title, "a");
        assert_eq!(form.description, "b");
        form.toggle_field();
        assert_eq!(form.field, Field::Title);
    }
}
