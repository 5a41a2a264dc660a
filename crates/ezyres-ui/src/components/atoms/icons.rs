//! Inline SVG icons for the sidebar.

use crate::core::ui::NavIcon;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct IconProps {
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) title: Option<AttrValue>,
}

fn icon_svg(props: &IconProps, body: Html) -> Html {
    let title = props.title.clone();
    let aria_hidden = title.is_none().then_some(AttrValue::from("true"));
    html! {
        <svg
            class={classes!("h-5", "w-5", "shrink-0", props.class.clone())}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="2"
            role="img"
            aria-hidden={aria_hidden}
            aria-label={title.clone()}
        >
            {title.map(|text| html! { <title>{text}</title> }).unwrap_or_default()}
            {body}
        </svg>
    }
}

#[function_component(IconColumns)]
pub(crate) fn icon_columns(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <rect x="3" y="3" width="18" height="18" rx="2" />
            <path d="M9 3v18m6-18v18" />
        </> },
    )
}

#[function_component(IconSettings)]
pub(crate) fn icon_settings(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <path d="M9.671 4.136a2.34 2.34 0 0 1 4.659 0a2.34 2.34 0 0 0 3.319 1.915a2.34 2.34 0 0 1 2.33 4.033a2.34 2.34 0 0 0 0 3.831a2.34 2.34 0 0 1-2.33 4.033a2.34 2.34 0 0 0-3.319 1.915a2.34 2.34 0 0 1-4.659 0a2.34 2.34 0 0 0-3.32-1.915a2.34 2.34 0 0 1-2.33-4.033a2.34 2.34 0 0 0 0-3.831A2.34 2.34 0 0 1 6.35 6.051a2.34 2.34 0 0 0 3.319-1.915" />
            <circle cx="12" cy="12" r="3" />
        </> },
    )
}

#[function_component(IconLogo)]
pub(crate) fn icon_logo(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M3 3v18h18M7 15l4-4l3 3l5-6" /> },
    )
}

/// Icon component for a navigation entry.
pub(crate) fn nav_icon(icon: NavIcon) -> Html {
    match icon {
        NavIcon::Dashboard => html! { <IconColumns /> },
        NavIcon::Reports => html! { <IconSettings /> },
    }
}
