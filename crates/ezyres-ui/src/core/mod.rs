//! Core, DOM-free primitives and helpers for the dashboard.
pub mod chart;
pub mod config;
pub mod fetch;
pub mod logic;
pub mod source;
pub mod ui;
