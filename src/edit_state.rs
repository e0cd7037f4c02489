//! Edit State
//!
//! The form's transient fields and whether they compose a new todo or
//! rewrite an existing one.

use crate::models::{Todo, TodoId, TodoPayload};

/// Which request the form will send on submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// No todo selected: submit POSTs a new one
    Creating,
    /// Submit PUTs to this todo
    Editing(TodoId),
}

impl FormMode {
    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Creating => "Add Todo",
            FormMode::Editing(_) => "Update Todo",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditState {
    /// Todo being edited; `None` while composing a new one
    pub selected: Option<TodoId>,
    pub title: String,
    pub description: String,
}

impl EditState {
    pub fn mode(&self) -> FormMode {
        match &self.selected {
            Some(id) => FormMode::Editing(id.clone()),
            None => FormMode::Creating,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.selected.is_some()
    }

    /// Copy a todo into the form and switch to update mode
    pub fn select(&mut self, todo: &Todo) {
        self.selected = Some(todo.id.clone());
        self.title = todo.title.clone();
        self.description = todo.description.clone();
    }

    /// Back to an empty create form
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn payload(&self) -> TodoPayload {
        TodoPayload {
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: &str, title: &str, description: &str) -> Todo {
        Todo {
            id: TodoId::new(id),
            title: title.to_string(),
            description: description.to_string(),
            date_time: None,
        }
    }

    #[test]
    fn test_starts_in_create_mode() {
        let state = EditState::default();
        assert_eq!(state.mode(), FormMode::Creating);
        assert_eq!(state.mode().submit_label(), "Add Todo");
        assert!(!state.is_editing());
    }

    #[test]
    fn test_select_populates_form() {
        let mut state = EditState::default();
        state.title = "half typed".to_string();

        state.select(&todo("1", "A", "a"));

        assert_eq!(state.title, "A");
        assert_eq!(state.description, "a");
        assert_eq!(state.mode(), FormMode::Editing(TodoId::new("1")));
        assert_eq!(state.mode().submit_label(), "Update Todo");
    }

    #[test]
    fn test_clear_resets_selection_and_fields() {
        let mut state = EditState::default();
        state.select(&todo("1", "A", "a"));

        state.clear();

        assert_eq!(state, EditState::default());
        assert_eq!(state.mode(), FormMode::Creating);
    }

    #[test]
    fn test_payload_uses_current_fields() {
        let mut state = EditState::default();
        state.select(&todo("1", "A", "a"));
        state.title.push_str(" (edited)");

        let payload = state.payload();
        assert_eq!(payload.title, "A (edited)");
        assert_eq!(payload.description, "a");
    }
}
