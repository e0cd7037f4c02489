//! Todo Row Component
//!
//! A single todo with its edit and delete controls.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::controller;
use crate::models::Todo;
use crate::store::{store_finish_delete, store_select_for_edit, TodoStateStoreFields};

#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let api = ctx.api.clone();

    let id = todo.id.clone();
    let title = todo.title.clone();
    let description = todo.description.clone();
    let timestamp = todo.timestamp_label();

    let row_id = id.clone();
    let is_selected = move || store.edit().read().selected.as_ref() == Some(&row_id);

    let on_edit = move |_| store_select_for_edit(&store, &todo);

    let on_delete = move |_| {
        let api = api.clone();
        let id = id.clone();
        spawn_local(async move {
            match controller::delete(&api, &id).await {
                Ok(todos) => store_finish_delete(&store, &id, todos),
                Err(err) => log::error!("Failed to delete todo {id}: {err}"),
            }
        });
    };

    view! {
        <div class=move || if is_selected() { "todo-row selected" } else { "todo-row" }>
            <div class="todo-text">
                <h3 class="todo-title">{title}</h3>
                <p class="todo-description">{description}</p>
                {timestamp.map(|ts| view! { <small class="todo-timestamp">{ts}</small> })}
            </div>
            <div class="todo-actions">
                <button class="edit-btn" title="Edit" on:click=on_edit>"✎"</button>
                <button class="delete-btn" title="Delete" on:click=on_delete>"×"</button>
            </div>
        </div>
    }
}
