//! Analytics donut group feature slice.
//!
//! # Design
//! - Three endpoints (average ARV, success rate, access breakdown) are fetched
//!   concurrently and joined; each series then settles on its own.
//! - The three item shapes are folded into one tagged [`logic::DonutPayload`]
//!   so rendering never inspects field names.
//! - Percentages are taken against each series' own sum, computed once.

pub mod api;
pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
