//! Previous/Next pager driven by a [`Paginator`].

use crate::features::negotiation::state::Paginator;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PaginationProps {
    pub(crate) pager: Paginator,
    pub(crate) on_change: Callback<Paginator>,
    #[prop_or_default]
    pub(crate) class: Classes,
}

#[function_component(Pagination)]
pub(crate) fn pagination(props: &PaginationProps) -> Html {
    let pager = props.pager;
    let go_prev = {
        let on_change = props.on_change.clone();
        Callback::from(move |_| {
            if pager.can_prev() {
                on_change.emit(pager.prev());
            }
        })
    };
    let go_next = {
        let on_change = props.on_change.clone();
        Callback::from(move |_| {
            if pager.can_next() {
                on_change.emit(pager.next());
            }
        })
    };
    let button = "px-3 py-1.5 text-sm rounded-md border border-gray-200 text-gray-700 hover:bg-gray-50 disabled:opacity-40 disabled:cursor-not-allowed";

    html! {
        <div class={classes!("flex", "items-center", "justify-between", "pt-4", props.class.clone())}>
            <button class={button} disabled={!pager.can_prev()} onclick={go_prev}>{"Previous"}</button>
            <span class="text-sm text-gray-500">{pager.caption()}</span>
            <button class={button} disabled={!pager.can_next()} onclick={go_next}>{"Next"}</button>
        </div>
    }
}
