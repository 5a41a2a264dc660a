//! Color ramp and summary figures for the deals chart.

use crate::core::logic::{max_value, sum_values};
use ezyres_api_models::CityDealCount;

/// Hue assigned to the smallest value.
pub const LOW_HUE: f64 = 220.0;
/// Hue span between the smallest and the largest value.
pub const HUE_SPAN: f64 = 60.0;

/// Fill, border and hover colors for one bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BarColor {
    /// Relative magnitude in `[0, 1]`.
    pub intensity: f64,
    /// Hue in degrees.
    pub hue: f64,
}

impl BarColor {
    /// Color for `value` against the series maximum.
    #[must_use]
    pub fn for_value(value: f64, max: f64) -> Self {
        let intensity = intensity(value, max);
        Self {
            intensity,
            hue: HUE_SPAN.mul_add(-intensity, LOW_HUE),
        }
    }

    /// Bar fill.
    #[must_use]
    pub fn fill(&self) -> String {
        format!("hsla({}, 70%, 60%, 0.8)", self.hue)
    }

    /// Bar outline.
    #[must_use]
    pub fn border(&self) -> String {
        format!("hsla({}, 70%, 50%, 1)", self.hue)
    }

    /// Fill while hovered.
    #[must_use]
    pub fn hover(&self) -> String {
        format!("hsla({}, 70%, 70%, 0.9)", self.hue)
    }
}

/// `value / max`, or zero when the maximum is not positive.
#[must_use]
pub fn intensity(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !max.is_finite() || !value.is_finite() {
        return 0.0;
    }
    (value / max).clamp(0.0, 1.0)
}

/// One bar of the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct CityBar {
    /// City name.
    pub city: String,
    /// Deal count.
    pub deals: f64,
    /// Ramp color.
    pub color: BarColor,
}

/// Normalized chart content.
#[derive(Clone, Debug, PartialEq)]
pub struct DealsChart {
    /// Bars in API order.
    pub bars: Vec<CityBar>,
    /// Sum of all deal counts.
    pub total: f64,
    /// Largest deal count.
    pub max: f64,
}

impl DealsChart {
    /// Build bars and summary figures from raw rows.
    #[must_use]
    pub fn from_rows(rows: Vec<CityDealCount>) -> Self {
        let counts: Vec<f64> = rows.iter().map(|row| row.deal_count).collect();
        let max = max_value(&counts);
        let total = sum_values(&counts);
        let bars = rows
            .into_iter()
            .map(|row| CityBar {
                color: BarColor::for_value(row.deal_count, max),
                city: row.city,
                deals: row.deal_count,
            })
            .collect();
        Self { bars, total, max }
    }

    /// Number of cities charted.
    #[must_use]
    pub fn city_count(&self) -> usize {
        self.bars.len()
    }

    /// Whether there is nothing to chart.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(city: &str, deal_count: f64) -> CityDealCount {
        CityDealCount {
            city: city.into(),
            deal_count,
        }
    }

    #[test]
    fn ramp_maps_intensity_onto_hue() {
        let chart = DealsChart::from_rows(vec![row("A", 10.0), row("B", 5.0), row("C", 0.0)]);
        let intensities: Vec<f64> = chart.bars.iter().map(|bar| bar.color.intensity).collect();
        let hues: Vec<f64> = chart.bars.iter().map(|bar| bar.color.hue).collect();
        assert_eq!(intensities, vec![1.0, 0.5, 0.0]);
        assert_eq!(hues, vec![160.0, 190.0, 220.0]);
    }

    #[test]
    fn zero_max_yields_zero_intensity() {
        assert!(intensity(0.0, 0.0).abs() < f64::EPSILON);
        let color = BarColor::for_value(0.0, 0.0);
        assert!((color.hue - LOW_HUE).abs() < f64::EPSILON);
    }

    #[test]
    fn color_variants_share_hue() {
        let color = BarColor::for_value(5.0, 10.0);
        assert_eq!(color.fill(), "hsla(190, 70%, 60%, 0.8)");
        assert_eq!(color.border(), "hsla(190, 70%, 50%, 1)");
        assert_eq!(color.hover(), "hsla(190, 70%, 70%, 0.9)");
    }

    #[test]
    fn summary_counts_totals_and_max() {
        let chart = DealsChart::from_rows(vec![row("A", 3.0), row("B", 9.0), row("C", 4.0)]);
        assert_eq!(chart.city_count(), 3);
        assert!((chart.total - 16.0).abs() < f64::EPSILON);
        assert!((chart.max - 9.0).abs() < f64::EPSILON);
        assert_eq!(chart.bars[1].city, "B");
    }
}
