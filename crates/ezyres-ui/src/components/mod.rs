//! Shared Yew components: shell, atoms, charts and table primitives.

pub(crate) mod atoms;
pub(crate) mod charts;
pub(crate) mod pagination;
pub(crate) mod shell;
pub(crate) mod table;
