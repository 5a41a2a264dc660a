//! Mount-scoped data loading.
//!
//! # Design
//! - Each mount owns a [`CancelToken`] and an `AbortController`; the effect
//!   teardown cancels both, so late responses never reach a detached state.
//! - The loader runs once per mount; there is no refresh.

use crate::app::api::ApiCtx;
use crate::core::fetch::CancelToken;
use crate::services::api::ApiClient;
use std::future::Future;
use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, AbortSignal};
use yew::prelude::*;

struct MountGuard {
    token: CancelToken,
    controller: Option<AbortController>,
}

impl MountGuard {
    fn new() -> Self {
        let controller = AbortController::new()
            .map_err(|err| tracing::warn!(error = ?err, "abort controller unavailable"))
            .ok();
        Self {
            token: CancelToken::new(),
            controller,
        }
    }

    fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(AbortController::signal)
    }

    fn cancel(&self) {
        self.token.cancel();
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }
}

/// Run `load` once on mount and expose its result as component state.
///
/// `initial` is shown until the loader settles.
#[hook]
pub(crate) fn use_mount_fetch<T, F, Fut>(initial: T, load: F) -> UseStateHandle<T>
where
    T: 'static,
    F: FnOnce(ApiClient) -> Fut + 'static,
    Fut: Future<Output = T> + 'static,
{
    let state = use_state(move || initial);
    let api = use_context::<ApiCtx>();
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let guard = MountGuard::new();
                match api {
                    Some(ctx) => {
                        let client = ctx.client.with_signal(guard.signal());
                        let token = guard.token.clone();
                        spawn_local(async move {
                            let value = load(client).await;
                            if !token.deliver(value, |value| state.set(value)) {
                                tracing::debug!("dropped result for unmounted component");
                            }
                        });
                    }
                    None => tracing::error!("api context missing; component will not load"),
                }
                move || guard.cancel()
            },
            (),
        );
    }
    state
}
