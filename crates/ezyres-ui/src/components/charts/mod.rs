//! Inline SVG chart primitives.
//!
//! # Design
//! - Geometry comes from `core::chart`; these components only map numbers to
//!   SVG attributes and manage hover.
//! - Tooltips use native `<title>` elements.

pub(crate) mod bar;
pub(crate) mod donut;
pub(crate) mod sparkline;

pub(crate) use bar::{BarDatum, HorizontalBarChart, VerticalBarChart};
pub(crate) use donut::{DonutChart, DonutDatum};
pub(crate) use sparkline::Sparkline;

pub(crate) fn coord(value: f64) -> String {
    format!("{value:.2}")
}
