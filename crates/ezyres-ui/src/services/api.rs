//! HTTP client for the analytics API.
//!
//! # Design
//! - GET only; no auth headers are attached.
//! - Each mounted component gets its own clone carrying that mount's abort
//!   signal, so unmount aborts exactly its own requests.

use crate::core::config::endpoint_url;
use crate::core::source::{ApiError, JsonSource};
use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;
use web_sys::AbortSignal;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    base_url: String,
    signal: Option<AbortSignal>,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            signal: None,
        }
    }

    /// Clone bound to a mount's abort signal.
    pub(crate) fn with_signal(&self, signal: Option<AbortSignal>) -> Self {
        Self {
            base_url: self.base_url.clone(),
            signal,
        }
    }

    fn is_aborted(&self) -> bool {
        self.signal.as_ref().is_some_and(AbortSignal::aborted)
    }

    fn failure(&self, path: &str, detail: String, decode: bool) -> ApiError {
        let path = path.to_string();
        if self.is_aborted() {
            ApiError::Cancelled { path }
        } else if decode {
            ApiError::Decode { path, detail }
        } else {
            ApiError::Transport { path, detail }
        }
    }
}

#[async_trait(?Send)]
impl JsonSource for ApiClient {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = endpoint_url(&self.base_url, path);
        tracing::debug!(%url, "analytics request");
        let response = Request::get(&url)
            .abort_signal(self.signal.as_ref())
            .send()
            .await
            .map_err(|err| self.failure(path, err.to_string(), false))?;
        if !response.ok() {
            return Err(ApiError::Status {
                path: path.to_string(),
                status: response.status(),
            });
        }
        response
            .json::<Value>()
            .await
            .map_err(|err| self.failure(path, err.to_string(), true))
    }
}
