//! Todo List Component

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{use_todo_store, TodoStateStoreFields};

/// The fetched collection, one row per todo
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_todo_store();

    view! {
        <section class="todo-list">
            <h2>"Todos:"</h2>
            <For
                each=move || store.todos().get()
                // Key on contents too, so an edited todo re-renders
                key=|todo| {
                    (todo.id.clone(), todo.title.clone(), todo.description.clone(), todo.date_time)
                }
                children=move |todo| view! { <TodoRow todo=todo /> }
            />
        </section>
    }
}
