//! Deals-by-city bar chart view.

use crate::app::hooks::use_mount_fetch;
use crate::components::atoms::Card;
use crate::components::atoms::empty_state::render_state;
use crate::components::charts::{BarDatum, VerticalBarChart};
use crate::core::fetch::{LoadState, settled};
use crate::core::logic::format_number;
use crate::core::source::report_failure;
use crate::features::deals::api::load_deals;
use crate::features::deals::logic::DealsChart;
use yew::prelude::*;

#[function_component(DealsBarChart)]
pub(crate) fn deals_bar_chart() -> Html {
    let state = use_mount_fetch(LoadState::Idle.begin(), |client| async move {
        let outcome = load_deals(&client).await;
        if let Err(err) = &outcome {
            report_failure("deals_bar_chart", err);
        }
        settled(outcome, DealsChart::is_empty)
    });
    html! {
        <Card title="Deal Distribution" subtitle="Performance across top markets">
            {render_state(&state, "No deals recorded yet", render_chart)}
        </Card>
    }
}

fn render_chart(chart: &DealsChart) -> Html {
    let bars: Vec<BarDatum> = chart
        .bars
        .iter()
        .map(|bar| BarDatum {
            label: bar.city.clone().into(),
            value: bar.deals,
            fill: bar.color.fill().into(),
            border: bar.color.border().into(),
            hover: bar.color.hover().into(),
            tooltip: format!("{}: {} deals", bar.city, format_number(bar.deals)).into(),
        })
        .collect();
    html! {
        <>
            <VerticalBarChart {bars} />
            <dl class="grid grid-cols-3 gap-4 mt-6 text-center">
                {summary("Cities", chart.city_count().to_string())}
                {summary("Total Deals", format_number(chart.total))}
                {summary("Highest Volume", format_number(chart.max))}
            </dl>
        </>
    }
}

fn summary(label: &'static str, value: String) -> Html {
    html! {
        <div class="rounded-lg bg-gray-50 py-3">
            <dt class="text-xs uppercase tracking-wide text-gray-500">{label}</dt>
            <dd class="mt-1 text-xl font-semibold text-gray-900">{value}</dd>
        </div>
    }
}
