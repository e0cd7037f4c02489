//! Frontend Errors
//!
//! Everything that can go wrong between the form and the todo endpoint.

use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid API url `{value}`")]
    InvalidApiUrl {
        value: String,
        source: url::ParseError,
    },
    #[error("invalid log level `{value}`")]
    InvalidLogLevel {
        value: String,
        source: log::ParseLevelError,
    },
    #[error("API url {url} cannot address individual todos")]
    NotABase { url: Url },
    #[error("request to {url} failed")]
    Request { url: Url, source: reqwest::Error },
    #[error("response from {url} failed with {status}")]
    Status { url: Url, status: StatusCode },
    #[error("decoding response from {url} failed")]
    Decode { url: Url, source: serde_json::Error },
}
