//! Repeat sellers chart view.

use crate::app::hooks::use_mount_fetch;
use crate::components::atoms::Card;
use crate::components::atoms::empty_state::render_state;
use crate::components::charts::{BarDatum, HorizontalBarChart};
use crate::core::fetch::LoadState;
use crate::features::sellers::api::load_sellers;
use crate::features::sellers::logic::{BAR_BORDER, BAR_FILL, BAR_HOVER, NO_DATA_MESSAGE, SellerRanking};
use yew::prelude::*;

#[function_component(RepeatSellersChart)]
pub(crate) fn repeat_sellers_chart() -> Html {
    let state = use_mount_fetch(LoadState::Idle.begin(), |client| async move {
        load_sellers(&client)
            .await
            .map_or(LoadState::Empty, LoadState::Ready)
    });
    html! {
        <Card title="Top Repeat Sellers">
            {render_state(&state, NO_DATA_MESSAGE, render_chart)}
        </Card>
    }
}

fn render_chart(ranking: &SellerRanking) -> Html {
    let bars: Vec<BarDatum> = ranking
        .bars
        .iter()
        .map(|bar| BarDatum {
            label: bar.label.clone().into(),
            value: bar.submissions,
            fill: BAR_FILL.into(),
            border: BAR_BORDER.into(),
            hover: BAR_HOVER.into(),
            tooltip: format!("{}: {}", bar.email, bar.tooltip()).into(),
        })
        .collect();
    html! { <HorizontalBarChart {bars} /> }
}
