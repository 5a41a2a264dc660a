//! Trend cards view.

use crate::app::hooks::use_mount_fetch;
use crate::components::atoms::empty_state::render_state;
use crate::components::charts::Sparkline;
use crate::core::fetch::LoadState;
use crate::features::trends::api::load_trend_states;
use crate::features::trends::logic::{TrendBucket, TrendCard};
use yew::prelude::*;

type TrendStates = [LoadState<TrendCard>; 3];

#[function_component(TrendsCardGroup)]
pub(crate) fn trends_card_group() -> Html {
    let states = use_mount_fetch(
        [LoadState::Loading, LoadState::Loading, LoadState::Loading],
        |client| async move { load_trend_states(&client).await },
    );
    let states: &TrendStates = &states;
    html! {
        <div class="grid grid-cols-1 gap-6 md:grid-cols-3">
            {for TrendBucket::ALL.iter().zip(states.iter()).map(|(bucket, state)| html! {
                <section class="bg-white rounded-xl shadow-sm border border-gray-100 p-5">
                    <header class="flex items-baseline justify-between mb-3">
                        <h3 class="text-sm font-semibold text-gray-900">{bucket.title()}</h3>
                        <span class="text-xs text-gray-400">{bucket.window_label()}</span>
                    </header>
                    {render_state(state, "No data available", render_card)}
                </section>
            })}
        </div>
    }
}

fn render_card(card: &TrendCard) -> Html {
    let bucket = card.bucket;
    html! {
        <>
            <div class="flex items-end justify-between mb-2">
                <div>
                    <p class="text-2xl font-bold" style={format!("color: {}", bucket.color())}>{card.total_label()}</p>
                    <p class="text-xs text-gray-500">{"Total properties"}</p>
                </div>
                <div class="text-right">
                    <p class="text-sm font-semibold text-gray-700">{card.average_label()}</p>
                    <p class="text-xs text-gray-500">{"Average"}</p>
                </div>
            </div>
            <Sparkline values={card.counts()} color={bucket.color()} area={bucket.area_color()} />
        </>
    }
}
