//! Negotiation margin table feature slice.
//!
//! # Design
//! - One table component, parameterized by [`state::TableVariant`] for page
//!   size and density.
//! - Pagination is client-side over the full row set; the page never leaves
//!   `[1, page_count]`.

pub mod api;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
