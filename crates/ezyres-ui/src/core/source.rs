//! Transport seam between feature loaders and the HTTP client.
//!
//! # Design
//! - Loaders depend on [`JsonSource`] only, so they run natively in tests
//!   against an in-memory source and in the browser against `gloo-net`.
//! - The trait returns raw JSON; typed decoding happens once in [`fetch_json`]
//!   so decode failures are reported uniformly.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Failures surfaced by analytics requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, DNS).
    #[error("analytics request failed")]
    Transport {
        /// Endpoint path that was requested.
        path: String,
        /// Transport-level detail from the client.
        detail: String,
    },
    /// The server answered with a non-success status.
    #[error("analytics request returned an error status")]
    Status {
        /// Endpoint path that was requested.
        path: String,
        /// HTTP status code.
        status: u16,
    },
    /// The body was not JSON or did not match the expected shape.
    #[error("analytics response could not be decoded")]
    Decode {
        /// Endpoint path that was requested.
        path: String,
        /// Decoder detail.
        detail: String,
    },
    /// The envelope explicitly reported `success: false`.
    #[error("analytics response reported failure")]
    Unsuccessful {
        /// Endpoint path that was requested.
        path: String,
    },
    /// The request was aborted because its component unmounted.
    #[error("analytics request was cancelled")]
    Cancelled {
        /// Endpoint path that was requested.
        path: String,
    },
}

impl ApiError {
    /// Endpoint path associated with the failure.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Transport { path, .. }
            | Self::Status { path, .. }
            | Self::Decode { path, .. }
            | Self::Unsuccessful { path }
            | Self::Cancelled { path } => path,
        }
    }

    /// Copy shown to the user when a component lands in its error state.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Unsuccessful { .. } => "Failed to load data",
            _ => "Unable to fetch data",
        }
    }

    /// Whether the failure came from unmount cancellation rather than the API.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

/// Read-only JSON transport for analytics endpoints.
#[async_trait(?Send)]
pub trait JsonSource {
    /// Issue a GET for `path` (relative to the configured base URL).
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;
}

/// Fetch `path` and decode it into `T`.
///
/// # Errors
/// Propagates transport failures and maps shape mismatches to [`ApiError::Decode`].
pub async fn fetch_json<T, S>(source: &S, path: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    S: JsonSource + ?Sized,
{
    let value = source.get_json(path).await?;
    serde_json::from_value(value).map_err(|err| ApiError::Decode {
        path: path.to_string(),
        detail: err.to_string(),
    })
}

/// Log a loader failure once, skipping cancellations which are expected on unmount.
pub fn report_failure(component: &'static str, err: &ApiError) {
    if err.is_cancelled() {
        tracing::debug!(component, path = err.path(), "fetch cancelled on unmount");
    } else {
        tracing::warn!(component, path = err.path(), error = ?err, "analytics fetch failed");
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{FakeSource, transport_error};
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Status {
        status: String,
    }

    #[tokio::test]
    async fn fetch_json_decodes_typed_payload() {
        let source = FakeSource::new().with_json("/health", json!({"status": "OK"}));
        let status: Status = fetch_json(&source, "/health").await.unwrap();
        assert_eq!(status.status, "OK");
        assert_eq!(source.calls(), vec!["/health".to_string()]);
    }

    #[tokio::test]
    async fn fetch_json_maps_shape_mismatch_to_decode() {
        let source = FakeSource::new().with_json("/health", json!([1, 2, 3]));
        let err = fetch_json::<Status, _>(&source, "/health").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
        assert_eq!(err.path(), "/health");
    }

    #[tokio::test]
    async fn fetch_json_propagates_transport_errors() {
        let source = FakeSource::new().with_error("/health", transport_error("/health"));
        let err = fetch_json::<Status, _>(&source, "/health").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport { .. }));
    }

    #[test]
    fn user_messages_distinguish_unsuccessful_envelopes() {
        let unsuccessful = ApiError::Unsuccessful { path: "/x".into() };
        let status = ApiError::Status {
            path: "/x".into(),
            status: 502,
        };
        assert_eq!(unsuccessful.user_message(), "Failed to load data");
        assert_eq!(status.user_message(), "Unable to fetch data");
        assert!(ApiError::Cancelled { path: "/x".into() }.is_cancelled());
        assert!(!status.is_cancelled());
    }
}
