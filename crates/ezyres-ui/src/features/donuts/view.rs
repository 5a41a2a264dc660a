//! Analytics donut group view.

use crate::app::hooks::use_mount_fetch;
use crate::components::atoms::Card;
use crate::components::atoms::empty_state::render_state;
use crate::components::charts::{DonutChart, DonutDatum};
use crate::core::fetch::LoadState;
use crate::features::donuts::api::load_donut_states;
use crate::features::donuts::logic::{DonutSeries, SeriesKind};
use yew::prelude::*;

type DonutStates = [LoadState<DonutSeries>; 3];

#[function_component(AnalyticsDonutGroup)]
pub(crate) fn analytics_donut_group() -> Html {
    let states = use_mount_fetch(
        [LoadState::Loading, LoadState::Loading, LoadState::Loading],
        |client| async move { load_donut_states(&client).await },
    );
    let states: &DonutStates = &states;
    html! {
        <div class="grid grid-cols-1 gap-6 lg:grid-cols-3">
            {for SeriesKind::ALL.iter().zip(states.iter()).map(|(kind, state)| html! {
                <Card title={kind.title()}>
                    {render_state(state, "No data available", render_donut)}
                </Card>
            })}
        </div>
    }
}

fn render_donut(series: &DonutSeries) -> Html {
    let slices: Vec<DonutDatum> = series
        .slices
        .iter()
        .enumerate()
        .map(|(index, slice)| DonutDatum {
            value: slice.value,
            color: slice.color.into(),
            tooltip: series.tooltip(index).into(),
        })
        .collect();
    html! {
        <div class="flex flex-col items-center gap-4">
            <DonutChart {slices} center_caption="Total" center_label={AttrValue::from(series.center_total())} />
            <ul class="w-full space-y-2">
                {for series.slices.iter().enumerate().map(|(index, slice)| html! {
                    <li class="flex items-center justify-between text-sm">
                        <span class="flex items-center gap-2 text-gray-600">
                            <span class="h-3 w-3 rounded-sm" style={format!("background-color: {}", slice.color)} />
                            {slice.label.clone()}
                        </span>
                        <span class="text-gray-900">
                            {series.kind.format_value(slice.value)}
                            <span class="ml-2 text-xs text-gray-400">{series.inline_percent(index)}</span>
                        </span>
                    </li>
                })}
            </ul>
        </div>
    }
}
