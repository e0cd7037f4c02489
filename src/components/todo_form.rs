//! Todo Form Component
//!
//! Title and description fields; submits a create or an update depending
//! on whether a todo is selected.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::controller;
use crate::store::{
    store_cancel_edit, store_finish_submit, store_set_description, store_set_title,
    TodoStateStoreFields,
};

#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let api = ctx.api.clone();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let edit = store.edit().get_untracked();
        let api = api.clone();

        spawn_local(async move {
            match controller::submit(&api, &edit).await {
                Ok(todos) => store_finish_submit(&store, todos),
                // No answer from the server: keep the form so the user can retry
                Err(err) => log::error!("Failed to save todo: {err}"),
            }
        });
    };

    let submit_label = move || store.edit().read().mode().submit_label();
    let is_editing = move || store.edit().read().is_editing();

    view! {
        <form class="todo-form" on:submit=on_submit>
            <input
                type="text"
                class="todo-title-input"
                placeholder="Todo title"
                prop:value=move || store.edit().read().title.clone()
                on:input=move |ev| store_set_title(&store, event_target_value(&ev))
            />
            <textarea
                class="todo-description-input"
                rows="4"
                placeholder="Todo Description"
                prop:value=move || store.edit().read().description.clone()
                on:input=move |ev| store_set_description(&store, event_target_value(&ev))
            ></textarea>
            <div class="todo-form-actions">
                <button type="submit" class="submit-btn">{submit_label}</button>
                <Show when=is_editing>
                    <button
                        type="button"
                        class="cancel-btn"
                        on:click=move |_| store_cancel_edit(&store)
                    >
                        "Cancel"
                    </button>
                </Show>
            </div>
        </form>
    }
}
