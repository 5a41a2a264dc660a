//! Environment helpers for the app shell.

use gloo::utils::window;

/// Origin the dashboard was served from, e.g. `http://localhost:8080`.
pub(crate) fn page_origin() -> String {
    window().location().origin().unwrap_or_else(|err| {
        tracing::warn!(error = ?err, "page origin unavailable");
        String::new()
    })
}

pub(crate) fn set_document_title(title: &str) {
    gloo::utils::document().set_title(title);
}
