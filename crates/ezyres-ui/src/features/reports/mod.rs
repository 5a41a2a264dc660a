//! Reports page.
//!
//! # Design
//! - Composition only: repeat sellers, negotiation margins and trend cards.

#[cfg(target_arch = "wasm32")]
pub mod view;
