//! SVG geometry for the dashboard's charts.
//!
//! # Design
//! - Charts are inline SVG; this module computes coordinates and path data
//!   so views only map numbers onto attributes.
//! - All functions tolerate empty input and zero maxima without producing
//!   `NaN` coordinates.

use crate::core::logic::{max_value, sum_values};
use std::f64::consts::PI;

/// Stroke dash description for one donut slice on a circle of `circumference`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DonutArc {
    /// Visible arc length.
    pub length: f64,
    /// Remaining circumference after the arc.
    pub gap: f64,
    /// Negative start offset along the circle.
    pub offset: f64,
}

impl DonutArc {
    /// `stroke-dasharray` attribute value.
    #[must_use]
    pub fn dasharray(&self) -> String {
        format!("{:.3} {:.3}", self.length, self.gap)
    }

    /// `stroke-dashoffset` attribute value.
    #[must_use]
    pub fn dashoffset(&self) -> String {
        format!("{:.3}", self.offset)
    }
}

/// Circumference of a circle with `radius`.
#[must_use]
pub fn circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

/// Split a circle into consecutive arcs proportional to `values`.
///
/// Returns an empty list when the values sum to zero.
#[must_use]
pub fn donut_arcs(values: &[f64], radius: f64) -> Vec<DonutArc> {
    let total = sum_values(values);
    if total <= 0.0 {
        return Vec::new();
    }
    let full = circumference(radius);
    let mut start = 0.0;
    values
        .iter()
        .map(|value| {
            let length = if value.is_finite() && *value > 0.0 {
                value / total * full
            } else {
                0.0
            };
            let arc = DonutArc {
                length,
                gap: full - length,
                offset: -start,
            };
            start += length;
            arc
        })
        .collect()
}

/// Axis-aligned rectangle in SVG user units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

/// Lay out vertical bars across `width`, scaled so `axis_max` reaches `height`.
///
/// `gap_ratio` is the share of each slot left empty between bars.
#[must_use]
pub fn vertical_bars(values: &[f64], axis_max: f64, width: f64, height: f64, gap_ratio: f64) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }
    let slot = width / units(values.len());
    let bar_width = slot * (1.0 - gap_ratio.clamp(0.0, 0.9));
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let bar_height = scaled(*value, axis_max, height);
            BarRect {
                x: units(index).mul_add(slot, (slot - bar_width) / 2.0),
                y: height - bar_height,
                width: bar_width,
                height: bar_height,
            }
        })
        .collect()
}

/// Lay out horizontal bars down `height`, scaled so `axis_max` reaches `width`.
#[must_use]
pub fn horizontal_bars(values: &[f64], axis_max: f64, width: f64, height: f64, gap_ratio: f64) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }
    let slot = height / units(values.len());
    let bar_height = slot * (1.0 - gap_ratio.clamp(0.0, 0.9));
    values
        .iter()
        .enumerate()
        .map(|(index, value)| BarRect {
            x: 0.0,
            y: units(index).mul_add(slot, (slot - bar_height) / 2.0),
            width: scaled(*value, axis_max, width),
            height: bar_height,
        })
        .collect()
}

/// Evenly spaced axis ticks from zero to a rounded-up maximum.
///
/// Step sizes snap to 1, 2 or 5 times a power of ten. A zero maximum yields `[0, 1]`.
/// When the rounded maximum is not representable the axis is just `[0, max]`, and
/// no axis carries more than `2 * target_count + 1` ticks.
#[must_use]
pub fn nice_ticks(max: f64, target_count: u32) -> Vec<f64> {
    let target = target_count.max(1);
    if !max.is_finite() || max <= 0.0 {
        return vec![0.0, 1.0];
    }
    let raw_step = max / f64::from(target);
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let residual = raw_step / magnitude;
    let step = if residual <= 1.0 {
        magnitude
    } else if residual <= 2.0 {
        2.0 * magnitude
    } else if residual <= 5.0 {
        5.0 * magnitude
    } else {
        10.0 * magnitude
    };
    let top = (max / step).ceil() * step;
    if !step.is_finite() || step <= 0.0 || !top.is_finite() {
        return vec![0.0, max];
    }
    let limit = target.saturating_mul(2);
    let mut ticks = Vec::new();
    for index in 0..=limit {
        let tick = f64::from(index) * step;
        ticks.push(tick);
        if tick >= top - step / 2.0 {
            break;
        }
    }
    ticks
}

/// Line and filled-area path data for a sparkline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SparklinePath {
    /// Open polyline through every point.
    pub line: String,
    /// Line closed down to the baseline for the fill.
    pub area: String,
}

/// Build sparkline paths scaled to `width` x `height`; `None` for no points.
///
/// A single point, or a flat series, renders as a horizontal line through the middle.
#[must_use]
pub fn sparkline(values: &[f64], width: f64, height: f64) -> Option<SparklinePath> {
    if values.is_empty() {
        return None;
    }
    let finite: Vec<f64> = values
        .iter()
        .map(|value| if value.is_finite() { *value } else { 0.0 })
        .collect();
    let max = max_value(&finite);
    let min = finite.iter().copied().fold(max, f64::min);
    let range = max - min;
    let points: Vec<(f64, f64)> = if finite.len() == 1 {
        vec![(0.0, height / 2.0), (width, height / 2.0)]
    } else {
        let step = width / units(finite.len() - 1);
        finite
            .iter()
            .enumerate()
            .map(|(index, value)| {
                let y = if range > 0.0 {
                    height - (value - min) / range * height
                } else {
                    height / 2.0
                };
                (units(index) * step, y)
            })
            .collect()
    };

    let line = points
        .iter()
        .enumerate()
        .map(|(index, (x, y))| {
            let command = if index == 0 { 'M' } else { 'L' };
            format!("{command}{x:.2},{y:.2}")
        })
        .collect::<Vec<_>>()
        .join(" ");
    let last_x = points.last().map_or(0.0, |(x, _)| *x);
    let first_x = points.first().map_or(0.0, |(x, _)| *x);
    let area = format!("{line} L{last_x:.2},{height:.2} L{first_x:.2},{height:.2} Z");
    Some(SparklinePath { line, area })
}

/// Lossless count to coordinate conversion; counts past `u32::MAX` saturate.
fn units(count: usize) -> f64 {
    f64::from(u32::try_from(count).unwrap_or(u32::MAX))
}

fn scaled(value: f64, axis_max: f64, span: f64) -> f64 {
    if axis_max <= 0.0 || !axis_max.is_finite() || !value.is_finite() || value <= 0.0 {
        return 0.0;
    }
    (value / axis_max).min(1.0) * span
}
