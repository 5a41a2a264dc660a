//! Dashboard page.
//!
//! # Design
//! - Composition only: health badge, deals chart and donut group.

#[cfg(target_arch = "wasm32")]
pub mod view;
