//! Shared UI atoms used across the shell and views.

pub(crate) mod card;
pub(crate) mod empty_state;
pub(crate) mod icons;

pub(crate) use card::Card;
