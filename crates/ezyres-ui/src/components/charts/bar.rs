//! Vertical and horizontal bar charts.

use super::coord;
use crate::core::chart::{horizontal_bars, nice_ticks, vertical_bars};
use crate::core::logic::format_number;
use yew::prelude::*;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 260.0;
const AXIS_GUTTER: f64 = 48.0;
const LABEL_GUTTER: f64 = 28.0;
const GAP_RATIO: f64 = 0.25;

/// One bar with its colors and hover text.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct BarDatum {
    pub(crate) label: AttrValue,
    pub(crate) value: f64,
    pub(crate) fill: AttrValue,
    pub(crate) border: AttrValue,
    pub(crate) hover: AttrValue,
    pub(crate) tooltip: AttrValue,
}

#[derive(Properties, PartialEq)]
pub(crate) struct BarChartProps {
    pub(crate) bars: Vec<BarDatum>,
    #[prop_or(5)]
    pub(crate) ticks: u32,
}

#[function_component(VerticalBarChart)]
pub(crate) fn vertical_bar_chart(props: &BarChartProps) -> Html {
    let hovered = use_state(|| None::<usize>);
    let values: Vec<f64> = props.bars.iter().map(|bar| bar.value).collect();
    let ticks = nice_ticks(values.iter().copied().fold(0.0, f64::max), props.ticks);
    let axis_max = ticks.last().copied().unwrap_or(1.0);
    let plot_width = WIDTH - AXIS_GUTTER;
    let plot_height = HEIGHT - LABEL_GUTTER;
    let rects = vertical_bars(&values, axis_max, plot_width, plot_height, GAP_RATIO);

    html! {
        <svg class="w-full h-72" viewBox={format!("0 0 {WIDTH} {HEIGHT}")} preserveAspectRatio="none" role="img">
            {for ticks.iter().map(|tick| {
                let y = plot_height - tick / axis_max * plot_height;
                html! {
                    <g>
                        <line x1={coord(AXIS_GUTTER)} x2={coord(WIDTH)} y1={coord(y)} y2={coord(y)} stroke="#f3f4f6" />
                        <text x={coord(AXIS_GUTTER - 6.0)} y={coord(y + 4.0)} text-anchor="end" class="fill-gray-400 text-[10px]">
                            {format_number(*tick)}
                        </text>
                    </g>
                }
            })}
            {for props.bars.iter().zip(rects.iter()).enumerate().map(|(index, (bar, rect))| {
                let fill = if *hovered == Some(index) { bar.hover.clone() } else { bar.fill.clone() };
                let enter = {
                    let hovered = hovered.clone();
                    Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
                };
                let leave = {
                    let hovered = hovered.clone();
                    Callback::from(move |_: MouseEvent| hovered.set(None))
                };
                let x = AXIS_GUTTER + rect.x;
                html! {
                    <g>
                        <rect
                            x={coord(x)}
                            y={coord(rect.y)}
                            width={coord(rect.width)}
                            height={coord(rect.height)}
                            rx="4"
                            fill={fill}
                            stroke={bar.border.clone()}
                            onmouseenter={enter}
                            onmouseleave={leave}
                        >
                            <title>{bar.tooltip.clone()}</title>
                        </rect>
                        <text
                            x={coord(x + rect.width / 2.0)}
                            y={coord(HEIGHT - 8.0)}
                            text-anchor="middle"
                            class="fill-gray-500 text-[10px]"
                        >
                            {bar.label.clone()}
                        </text>
                    </g>
                }
            })}
        </svg>
    }
}

#[function_component(HorizontalBarChart)]
pub(crate) fn horizontal_bar_chart(props: &BarChartProps) -> Html {
    let values: Vec<f64> = props.bars.iter().map(|bar| bar.value).collect();
    let ticks = nice_ticks(values.iter().copied().fold(0.0, f64::max), props.ticks);
    let axis_max = ticks.last().copied().unwrap_or(1.0);
    let label_width = 120.0;
    let plot_width = WIDTH - label_width;
    let rects = horizontal_bars(&values, axis_max, plot_width, HEIGHT, GAP_RATIO);

    html! {
        <svg class="w-full h-72" viewBox={format!("0 0 {WIDTH} {HEIGHT}")} preserveAspectRatio="none" role="img">
            {for props.bars.iter().zip(rects.iter()).map(|(bar, rect)| html! {
                <g>
                    <text
                        x={coord(label_width - 8.0)}
                        y={coord(rect.y + rect.height / 2.0 + 4.0)}
                        text-anchor="end"
                        class="fill-gray-600 text-[11px]"
                    >
                        {bar.label.clone()}
                    </text>
                    <rect
                        x={coord(label_width)}
                        y={coord(rect.y)}
                        width={coord(rect.width)}
                        height={coord(rect.height)}
                        rx="3"
                        fill={bar.fill.clone()}
                        stroke={bar.border.clone()}
                    >
                        <title>{bar.tooltip.clone()}</title>
                    </rect>
                </g>
            })}
        </svg>
    }
}
