//! `TodoApi` over HTTP with reqwest (browser fetch under WASM).

use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use url::Url;

use super::{Routes, TodoApi};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{Todo, TodoId, TodoPayload};

/// Clones share one `reqwest::Client`
#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: Client,
    routes: Routes,
}

impl HttpTodoApi {
    pub fn new(routes: Routes) -> Self {
        Self {
            client: Client::new(),
            routes,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(Routes::new(config.api_url.clone())?))
    }

    pub fn routes(&self) -> &Routes {
        &self.routes
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<&TodoPayload>,
    ) -> Result<Response> {
        log::debug!("{method} {url}");

        let mut request = self.client.request(method, url.clone());
        if let Some(payload) = body {
            // Sets Content-Type: application/json
            request = request.json(payload);
        }

        let response = request
            .send()
            .await
            .map_err(|source| Error::Request { url: url.clone(), source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status { url, status });
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self.send(Method::GET, url.clone(), None).await?;
        let body = response
            .bytes()
            .await
            .map_err(|source| Error::Request { url: url.clone(), source })?;
        serde_json::from_slice(&body).map_err(|source| Error::Decode { url, source })
    }
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list(&self) -> Result<Vec<Todo>> {
        self.get_json(self.routes.collection()).await
    }

    async fn get(&self, id: &TodoId) -> Result<Todo> {
        self.get_json(self.routes.item(id)?).await
    }

    async fn create(&self, payload: &TodoPayload) -> Result<()> {
        self.send(Method::POST, self.routes.collection(), Some(payload)).await?;
        Ok(())
    }

    async fn update(&self, id: &TodoId, payload: &TodoPayload) -> Result<()> {
        self.send(Method::PUT, self.routes.item(id)?, Some(payload)).await?;
        Ok(())
    }

    async fn delete(&self, id: &TodoId) -> Result<()> {
        self.send(Method::DELETE, self.routes.item(id)?, None).await?;
        Ok(())
    }
}
