//! Build-time configuration for the dashboard.
//!
//! # Design
//! - The API origin is baked in at compile time (`EZYRES_API_BASE_URL`);
//!   when absent the dashboard talks to the origin it was served from.
//! - Resolution is pure so it can be tested without a browser.

use ezyres_telemetry::DEFAULT_LOG_LEVEL;

/// Resolved settings for one app boot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Origin prefixed to every endpoint path, without a trailing slash.
    pub base_url: String,
    /// Tracing level filter.
    pub log_level: String,
}

impl DashboardConfig {
    /// Resolve settings from `EZYRES_API_BASE_URL` and `EZYRES_LOG`, falling back
    /// to the page origin and the default level.
    #[must_use]
    pub fn from_build(page_origin: &str) -> Self {
        Self::resolve(
            option_env!("EZYRES_API_BASE_URL"),
            option_env!("EZYRES_LOG"),
            page_origin,
        )
    }

    /// Resolve settings from explicit inputs.
    #[must_use]
    pub fn resolve(base_url: Option<&str>, log_level: Option<&str>, page_origin: &str) -> Self {
        Self {
            base_url: resolve_base_url(base_url, page_origin),
            log_level: non_blank(log_level)
                .unwrap_or(DEFAULT_LOG_LEVEL)
                .to_ascii_lowercase(),
        }
    }
}

/// Prefer the configured origin, else the page origin; trailing slashes are trimmed.
#[must_use]
pub fn resolve_base_url(configured: Option<&str>, page_origin: &str) -> String {
    non_blank(configured)
        .unwrap_or(page_origin)
        .trim()
        .trim_end_matches('/')
        .to_string()
}

/// Join a base URL and a relative endpoint path with exactly one slash.
#[must_use]
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
