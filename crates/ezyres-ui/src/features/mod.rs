//! Feature slices, one per dashboard widget plus the two pages composing them.

pub mod dashboard;
pub mod deals;
pub mod donuts;
pub mod health;
pub mod negotiation;
pub mod reports;
pub mod sellers;
pub mod trends;
