//! White panel with a heading used by every dashboard widget.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CardProps {
    pub(crate) title: AttrValue,
    #[prop_or_default]
    pub(crate) subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(Card)]
pub(crate) fn card(props: &CardProps) -> Html {
    html! {
        <section class={classes!("bg-white", "rounded-xl", "shadow-sm", "border", "border-gray-100", "p-6", props.class.clone())}>
            <header class="mb-4">
                <h3 class="text-lg font-semibold text-gray-900">{props.title.clone()}</h3>
                {props.subtitle.clone().map(|text| html! {
                    <p class="text-sm text-gray-500">{text}</p>
                }).unwrap_or_default()}
            </header>
            { for props.children.iter() }
        </section>
    }
}
