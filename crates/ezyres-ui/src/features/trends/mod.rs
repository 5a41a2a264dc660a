//! Submission trend cards feature slice.
//!
//! # Design
//! - Monthly, weekly and daily series are fetched concurrently; each card
//!   settles on its own once the join completes.
//! - The displayed average always falls back month, week, day, regardless of
//!   which bucket the card shows.

pub mod api;
pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
