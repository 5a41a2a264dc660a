//! Repeat sellers chart feature slice.
//!
//! # Design
//! - Stable sort on submission count, keep the top ten.
//! - Any failure, including `success: false`, collapses into the single
//!   "No data available" placeholder.

pub mod api;
pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
