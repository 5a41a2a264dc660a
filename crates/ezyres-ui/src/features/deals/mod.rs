//! Deals-by-city bar chart feature slice.
//!
//! # Design
//! - One request to `top-cities`; bars keep the API order.
//! - Bar colors come from a hue ramp keyed by each city's share of the maximum.
//! - An explicit `success: false` or a missing `data` field is an error, not
//!   an empty chart.

pub mod api;
pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
