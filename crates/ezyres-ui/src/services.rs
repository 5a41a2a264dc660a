//! Browser-side services (HTTP).

pub(crate) mod api;
