//! View Controller Operations
//!
//! Load / submit / delete against any `TodoApi`. Every write that reaches
//! the server is followed by a fresh load, so callers always get the
//! server's collection back. An error status on a write is logged and the
//! reload still happens; only a write that never got an answer aborts.

use crate::api::TodoApi;
use crate::edit_state::{EditState, FormMode};
use crate::error::{Error, Result};
use crate::models::{Todo, TodoId};

pub async fn load_collection(api: &impl TodoApi) -> Result<Vec<Todo>> {
    let todos = api.list().await?;
    log::info!("Loaded {} todos", todos.len());
    Ok(todos)
}

/// Create or update depending on the form mode, then reload
pub async fn submit(api: &impl TodoApi, edit: &EditState) -> Result<Vec<Todo>> {
    let payload = edit.payload();
    match edit.mode() {
        FormMode::Creating => {
            log::info!("Creating todo");
            answered(api.create(&payload).await)?;
        }
        FormMode::Editing(id) => {
            log::info!("Updating todo {id}");
            answered(api.update(&id, &payload).await)?;
        }
    }
    load_collection(api).await
}

pub async fn delete(api: &impl TodoApi, id: &TodoId) -> Result<Vec<Todo>> {
    log::info!("Deleting todo {id}");
    answered(api.delete(id).await)?;
    load_collection(api).await
}

/// The server answered, even if with an error status
fn answered(result: Result<()>) -> Result<()> {
    match result {
        Err(err @ Error::Status { .. }) => {
            log::error!("{err}");
            Ok(())
        }
        other => other,
    }
}
