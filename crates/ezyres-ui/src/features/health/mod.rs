//! Health badge feature slice.
//!
//! # Design
//! - Check `/health` once per mount; there is no polling.
//! - The badge never shows an error: a failed check is rendered as a DOWN
//!   status with the fallback service name.

pub mod api;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
