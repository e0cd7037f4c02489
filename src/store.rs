//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::edit_state::EditState;
use crate::models::{Todo, TodoId};

/// The displayed collection plus the form being composed
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct TodoState {
    /// Last collection fetched from the server
    pub todos: Vec<Todo>,
    pub edit: EditState,
}

impl TodoState {
    pub fn replace_todos(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
    }

    pub fn select_for_edit(&mut self, todo: &Todo) {
        self.edit.select(todo);
    }

    pub fn cancel_edit(&mut self) {
        self.edit.clear();
    }

    /// A delete went through: drop the selection if it pointed at the
    /// removed todo, and show the reloaded list
    pub fn finish_delete(&mut self, id: &TodoId, todos: Vec<Todo>) {
        if self.edit.selected.as_ref() == Some(id) {
            self.edit.clear();
        }
        self.todos = todos;
    }

    /// A submit went through: empty the form and show the reloaded list
    pub fn finish_submit(&mut self, todos: Vec<Todo>) {
        self.edit.clear();
        self.todos = todos;
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_replace_todos(store: &TodoStore, todos: Vec<Todo>) {
    store.write().replace_todos(todos);
}

pub fn store_select_for_edit(store: &TodoStore, todo: &Todo) {
    store.write().select_for_edit(todo);
}

pub fn store_cancel_edit(store: &TodoStore) {
    store.write().cancel_edit();
}

pub fn store_finish_submit(store: &TodoStore, todos: Vec<Todo>) {
    store.write().finish_submit(todos);
}

pub fn store_finish_delete(store: &TodoStore, id: &TodoId, todos: Vec<Todo>) {
    store.write().finish_delete(id, todos);
}

pub fn store_set_title(store: &TodoStore, title: String) {
    store.edit().write().title = title;
}

pub fn store_set_description(store: &TodoStore, description: String) {
    store.edit().write().description = description;
}
