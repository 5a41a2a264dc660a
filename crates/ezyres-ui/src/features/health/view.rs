//! Health badge view.

use crate::app::hooks::use_mount_fetch;
use crate::features::health::api::load_health;
use crate::features::health::state::BadgeState;
use yew::prelude::*;

#[function_component(HealthBadge)]
pub(crate) fn health_badge() -> Html {
    let state = use_mount_fetch(BadgeState::Checking, |client| async move {
        BadgeState::from_status(load_health(&client).await)
    });
    let title = state.service().map(AttrValue::from);
    html! {
        <span
            class={classes!("inline-flex", "items-center", "gap-2", "px-3", "py-1", "rounded-full", "text-xs", "font-medium", state.tone_class())}
            title={title}
        >
            <span class={classes!("h-2", "w-2", "rounded-full", state.dot_class())} />
            {state.label()}
        </span>
    }
}
