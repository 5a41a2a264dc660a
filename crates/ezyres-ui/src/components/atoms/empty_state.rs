//! Placeholder panels for loading, empty and failed components.
//!
//! # Design
//! - Keep copy prop-driven so each component chooses its own wording.

use crate::core::fetch::LoadState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub(crate) title: AttrValue,
    #[prop_or_default]
    pub(crate) description: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) error: bool,
    #[prop_or_default]
    pub(crate) class: Classes,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    let tone = if props.error { "text-red-500" } else { "text-gray-500" };
    html! {
        <div class={classes!("flex", "flex-col", "items-center", "justify-center", "h-48", "text-center", props.class.clone())}>
            <p class={classes!("text-sm", "font-medium", tone)}>{props.title.clone()}</p>
            {props.description.clone().map(|text| html! {
                <p class="mt-1 text-xs text-gray-400">{text}</p>
            }).unwrap_or_default()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct LoadingStateProps {
    #[prop_or_default]
    pub(crate) class: Classes,
}

#[function_component(LoadingState)]
pub(crate) fn loading_state(props: &LoadingStateProps) -> Html {
    html! {
        <div class={classes!("flex", "items-center", "justify-center", "h-48", props.class.clone())}>
            <div class="h-8 w-8 animate-spin rounded-full border-2 border-indigo-500 border-t-transparent" role="status" aria-label="Loading" />
        </div>
    }
}

/// Render the placeholder for a non-ready state, or `ready` with the content.
pub(crate) fn render_state<T>(
    state: &LoadState<T>,
    empty_copy: &'static str,
    ready: impl FnOnce(&T) -> Html,
) -> Html {
    match state {
        LoadState::Idle | LoadState::Loading => html! { <LoadingState /> },
        LoadState::Empty => html! { <EmptyState title={empty_copy} /> },
        LoadState::Error(message) => html! { <EmptyState title={message.clone()} error={true} /> },
        LoadState::Ready(value) => ready(value),
    }
}
