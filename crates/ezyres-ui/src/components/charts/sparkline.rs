//! Line-plus-area sparkline.

use crate::core::chart::sparkline;
use yew::prelude::*;

const WIDTH: f64 = 240.0;
const HEIGHT: f64 = 64.0;

#[derive(Properties, PartialEq)]
pub(crate) struct SparklineProps {
    pub(crate) values: Vec<f64>,
    pub(crate) color: AttrValue,
    pub(crate) area: AttrValue,
}

#[function_component(Sparkline)]
pub(crate) fn sparkline_chart(props: &SparklineProps) -> Html {
    let Some(path) = sparkline(&props.values, WIDTH, HEIGHT) else {
        return html! {};
    };
    html! {
        <svg class="w-full h-16" viewBox={format!("0 0 {WIDTH} {HEIGHT}")} preserveAspectRatio="none" role="img">
            <path d={path.area} fill={props.area.clone()} stroke="none" />
            <path d={path.line} fill="none" stroke={props.color.clone()} stroke-width="2" stroke-linejoin="round" />
        </svg>
    }
}
