//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpTodoApi;
use crate::controller;
use crate::store::{store_replace_todos, TodoStore};

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Client for the todo endpoint
    pub api: HttpTodoApi,
    pub store: TodoStore,
}

impl AppContext {
    pub fn new(api: HttpTodoApi, store: TodoStore) -> Self {
        Self { api, store }
    }

    /// Refetch the collection; failures are logged and the list stays stale
    pub fn reload(&self) {
        let api = self.api.clone();
        let store = self.store;
        spawn_local(async move {
            match controller::load_collection(&api).await {
                Ok(todos) => store_replace_todos(&store, todos),
                Err(err) => log::error!("Failed to load todos: {err}"),
            }
        });
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
