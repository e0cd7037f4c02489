//! Todo Frontend App
//!
//! Root component: form on the left, fetched list on the right.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpTodoApi;
use crate::components::{TodoForm, TodoList};
use crate::context::AppContext;
use crate::store::TodoState;

#[component]
pub fn App(api: HttpTodoApi) -> impl IntoView {
    let store = Store::new(TodoState::default());
    let ctx = AppContext::new(api, store);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx.clone());

    // Initial load on mount
    Effect::new(move |_| ctx.reload());

    view! {
        <div class="app-layout">
            <h1>"Simple Todo App"</h1>
            <div class="app-columns">
                <TodoForm />
                <TodoList />
            </div>
        </div>
    }
}
