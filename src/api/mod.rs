//! Todo API
//!
//! Async seam between the views and the todo endpoint.
//! `HttpTodoApi` talks to the real server; tests plug in their own.

mod http;
mod routes;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Todo, TodoId, TodoPayload};

pub use http::HttpTodoApi;
pub use routes::Routes;

/// CRUD operations on the remote todo collection
///
/// `?Send` because futures in the browser are not.
/// Write responses are ignored, so writes only report success.
#[async_trait(?Send)]
pub trait TodoApi {
    /// GET the whole collection
    async fn list(&self) -> Result<Vec<Todo>>;

    /// GET a single todo
    async fn get(&self, id: &TodoId) -> Result<Todo>;

    /// POST a new todo to the collection
    async fn create(&self, payload: &TodoPayload) -> Result<()>;

    /// PUT new contents to an existing todo
    async fn update(&self, id: &TodoId, payload: &TodoPayload) -> Result<()>;

    /// DELETE a todo
    async fn delete(&self, id: &TodoId) -> Result<()>;
}
