//! Donut chart drawn with dashed circle strokes.

use super::coord;
use crate::core::chart::donut_arcs;
use yew::prelude::*;

const RADIUS: f64 = 70.0;
const STROKE: f64 = 28.0;
const CENTER: f64 = 100.0;

/// One slice with its color and hover text.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct DonutDatum {
    pub(crate) value: f64,
    pub(crate) color: AttrValue,
    pub(crate) tooltip: AttrValue,
}

#[derive(Properties, PartialEq)]
pub(crate) struct DonutChartProps {
    pub(crate) slices: Vec<DonutDatum>,
    #[prop_or_default]
    pub(crate) center_caption: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) center_label: Option<AttrValue>,
}

#[function_component(DonutChart)]
pub(crate) fn donut_chart(props: &DonutChartProps) -> Html {
    let values: Vec<f64> = props.slices.iter().map(|slice| slice.value).collect();
    let arcs = donut_arcs(&values, RADIUS);
    html! {
        <svg class="w-48 h-48" viewBox="0 0 200 200" role="img">
            <circle cx={coord(CENTER)} cy={coord(CENTER)} r={coord(RADIUS)} fill="none" stroke="#f3f4f6" stroke-width={coord(STROKE)} />
            <g transform={format!("rotate(-90 {CENTER} {CENTER})")}>
                {for props.slices.iter().zip(arcs.iter()).map(|(slice, arc)| html! {
                    <circle
                        cx={coord(CENTER)}
                        cy={coord(CENTER)}
                        r={coord(RADIUS)}
                        fill="none"
                        stroke={slice.color.clone()}
                        stroke-width={coord(STROKE)}
                        stroke-dasharray={arc.dasharray()}
                        stroke-dashoffset={arc.dashoffset()}
                        class="transition-opacity hover:opacity-80"
                    >
                        <title>{slice.tooltip.clone()}</title>
                    </circle>
                })}
            </g>
            {props.center_caption.clone().map(|caption| html! {
                <text x={coord(CENTER)} y={coord(CENTER - 8.0)} text-anchor="middle" class="fill-slate-500 text-xs font-medium">
                    {caption}
                </text>
            }).unwrap_or_default()}
            {props.center_label.clone().map(|label| html! {
                <text x={coord(CENTER)} y={coord(CENTER + 12.0)} text-anchor="middle" class="fill-slate-800 text-lg font-bold">
                    {label}
                </text>
            }).unwrap_or_default()}
        </svg>
    }
}
