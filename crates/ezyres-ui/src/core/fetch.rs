//! Per-component fetch lifecycle: load state machine and unmount cancellation.
//!
//! # Design
//! - `Idle -> Loading -> {Ready | Empty | Error}`; terminal states are sticky
//!   until the component remounts and builds a fresh state.
//! - A [`CancelToken`] is scoped to one mounted effect. Once cancelled, late
//!   results are dropped instead of being written into a detached component.

use crate::core::source::ApiError;
use std::cell::Cell;
use std::rc::Rc;

/// Lifecycle of a single component's data.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    /// Not yet mounted.
    Idle,
    /// Request(s) in flight.
    Loading,
    /// Normalized, non-empty content.
    Ready(T),
    /// The request succeeded with nothing to show.
    Empty,
    /// The request failed; carries the user-facing message.
    Error(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> LoadState<T> {
    /// Enter `Loading`; only valid from `Idle`, otherwise the state is kept.
    #[must_use]
    pub fn begin(self) -> Self {
        match self {
            Self::Idle => Self::Loading,
            other => other,
        }
    }

    /// Settle a loading state from a loader outcome.
    ///
    /// `is_empty` decides between `Ready` and `Empty`. States other than
    /// `Loading` ignore the outcome.
    #[must_use]
    pub fn settle(self, outcome: Result<T, ApiError>, is_empty: impl FnOnce(&T) -> bool) -> Self {
        if !matches!(self, Self::Loading) {
            return self;
        }
        match outcome {
            Ok(value) if is_empty(&value) => Self::Empty,
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Error(err.user_message().to_string()),
        }
    }

    /// Content when ready.
    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Build a settled state in one step, as a mounted loader does after its join.
#[must_use]
pub fn settled<T>(outcome: Result<T, ApiError>, is_empty: impl FnOnce(&T) -> bool) -> LoadState<T> {
    LoadState::Idle.begin().settle(outcome, is_empty)
}

/// Like [`settled`], but a failure shows the same placeholder as an empty result.
///
/// Used by grouped widgets whose members render nothing rather than an error.
#[must_use]
pub fn settled_or_empty<T>(
    outcome: Result<T, ApiError>,
    is_empty: impl FnOnce(&T) -> bool,
) -> LoadState<T> {
    match outcome {
        Ok(value) => settled(Ok(value), is_empty),
        Err(_) => LoadState::Empty,
    }
}

/// Liveness flag shared between a mounted effect and its spawned fetch.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    /// Fresh, live token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the owning component as unmounted.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    /// Whether the owning component has unmounted.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Hand `value` to `sink` only while the component is still mounted.
    ///
    /// Returns `true` when the value was delivered.
    pub fn deliver<T>(&self, value: T, sink: impl FnOnce(T)) -> bool {
        if self.is_cancelled() {
            return false;
        }
        sink(value);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unsuccessful() -> ApiError {
        ApiError::Unsuccessful {
            path: "/api/analytics/top-cities".into(),
        }
    }

    #[test]
    fn loading_settles_into_ready_empty_or_error() {
        let ready = settled(Ok(vec![1, 2]), Vec::is_empty);
        assert_eq!(ready, LoadState::Ready(vec![1, 2]));

        let empty = settled(Ok(Vec::<u8>::new()), Vec::is_empty);
        assert_eq!(empty, LoadState::Empty);

        let error = settled::<Vec<u8>>(Err(unsuccessful()), Vec::is_empty);
        assert_eq!(error, LoadState::Error("Failed to load data".to_string()));
    }

    #[test]
    fn terminal_states_do_not_transition() {
        let ready: LoadState<u8> = LoadState::Ready(3);
        assert_eq!(ready.clone().begin(), LoadState::Ready(3));
        assert_eq!(ready.settle(Err(unsuccessful()), |_| false), LoadState::Ready(3));

        let error: LoadState<u8> = LoadState::Error("boom".into());
        assert_eq!(error.settle(Ok(1), |_| false), LoadState::Error("boom".into()));
    }

    #[test]
    fn idle_must_begin_before_settling() {
        let idle: LoadState<u8> = LoadState::default();
        assert_eq!(idle.settle(Ok(1), |_| false), LoadState::Idle);
    }

    #[test]
    fn failures_can_settle_as_empty() {
        let failed = settled_or_empty::<Vec<u8>>(Err(unsuccessful()), Vec::is_empty);
        assert_eq!(failed, LoadState::Empty);
        assert_eq!(settled_or_empty(Ok(vec![4]), Vec::is_empty), LoadState::Ready(vec![4]));
        assert_eq!(settled_or_empty(Ok(Vec::<u8>::new()), Vec::is_empty), LoadState::Empty);
    }

    #[test]
    fn cancelled_token_drops_late_results() {
        let token = CancelToken::new();
        let mut seen = Vec::new();
        assert!(token.deliver(1, |value| seen.push(value)));
        token.cancel();
        assert!(!token.deliver(2, |value| seen.push(value)));
        assert_eq!(seen, vec![1]);
    }

    #[test]
    fn token_clones_share_liveness() {
        let token = CancelToken::new();
        let effect_side = token.clone();
        effect_side.cancel();
        assert!(token.is_cancelled());
    }
}
