//! Series kinds, slices and percentage policy for the donut group.

use crate::core::logic::{format_currency, format_fixed, format_number, format_percent, percent_of, sum_values};
use ezyres_api_models::{AccessBreakdownItem, AvgArvItem, SuccessRateItem, paths};

/// Which donut a series belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    /// Average after-repair value by property type.
    AverageArv,
    /// Deal success rate by property type.
    SuccessRate,
    /// Property count by access type.
    AccessTypes,
}

impl SeriesKind {
    /// Donuts in display order.
    pub const ALL: [Self; 3] = [Self::AverageArv, Self::SuccessRate, Self::AccessTypes];

    /// Card heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AverageArv => "Average ARV",
            Self::SuccessRate => "Success Rate",
            Self::AccessTypes => "Access Types",
        }
    }

    /// Endpoint serving the series.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::AverageArv => paths::AVG_BY_TYPE,
            Self::SuccessRate => paths::SUCCESS_RATE,
            Self::AccessTypes => paths::ACCESS_BREAKDOWN,
        }
    }

    /// Slice colors, cycled when a series has more slices.
    #[must_use]
    pub const fn palette(self) -> &'static [&'static str] {
        match self {
            Self::AverageArv => &["#6366f1", "#8b5cf6", "#06b6d4", "#10b981"],
            Self::SuccessRate => &["#22c55e", "#ef4444", "#f59e0b", "#06b6d4"],
            Self::AccessTypes => &["#f59e0b", "#06b6d4", "#8b5cf6", "#22c55e"],
        }
    }

    /// Legend rendering of a raw slice value.
    #[must_use]
    pub fn format_value(self, value: f64) -> String {
        match self {
            Self::AverageArv => format_currency(value),
            Self::SuccessRate => format_percent(value),
            Self::AccessTypes => format_number(value),
        }
    }

    /// Color of the slice at `index`.
    #[must_use]
    pub fn color(self, index: usize) -> &'static str {
        let palette = self.palette();
        palette[index % palette.len()]
    }
}

/// Decoded rows of one donut endpoint, tagged by kind.
#[derive(Clone, Debug, PartialEq)]
pub enum DonutPayload {
    /// Rows of `avg-by-type`.
    AverageArv(Vec<AvgArvItem>),
    /// Rows of `success-rate`.
    SuccessRate(Vec<SuccessRateItem>),
    /// Rows of `access-breakdown`.
    AccessTypes(Vec<AccessBreakdownItem>),
}

impl DonutPayload {
    /// Discriminator of the payload.
    #[must_use]
    pub const fn kind(&self) -> SeriesKind {
        match self {
            Self::AverageArv(_) => SeriesKind::AverageArv,
            Self::SuccessRate(_) => SeriesKind::SuccessRate,
            Self::AccessTypes(_) => SeriesKind::AccessTypes,
        }
    }

    /// Flatten into `(label, value)` pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(String, f64)> {
        match self {
            Self::AverageArv(rows) => rows
                .into_iter()
                .map(|row| (row.property_type, row.avg_arv))
                .collect(),
            Self::SuccessRate(rows) => rows
                .into_iter()
                .map(|row| (row.property_type, row.success_rate_percent))
                .collect(),
            Self::AccessTypes(rows) => rows
                .into_iter()
                .map(|row| (row.access, row.total))
                .collect(),
        }
    }
}

/// One slice of a donut.
#[derive(Clone, Debug, PartialEq)]
pub struct DonutSlice {
    /// Category label.
    pub label: String,
    /// Raw value.
    pub value: f64,
    /// Palette color.
    pub color: &'static str,
}

/// A normalized donut series with its total.
#[derive(Clone, Debug, PartialEq)]
pub struct DonutSeries {
    /// Which donut this is.
    pub kind: SeriesKind,
    /// Slices in API order.
    pub slices: Vec<DonutSlice>,
    /// Sum of slice values.
    pub total: f64,
}

impl DonutSeries {
    /// Normalize a tagged payload, assigning palette colors.
    #[must_use]
    pub fn from_payload(payload: DonutPayload) -> Self {
        let kind = payload.kind();
        let slices: Vec<DonutSlice> = payload
            .into_pairs()
            .into_iter()
            .enumerate()
            .map(|(index, (label, value))| DonutSlice {
                label,
                value,
                color: kind.color(index),
            })
            .collect();
        let values: Vec<f64> = slices.iter().map(|slice| slice.value).collect();
        Self {
            kind,
            total: sum_values(&values),
            slices,
        }
    }

    /// Whether the donut has nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty() || self.total <= 0.0
    }

    /// Series total formatted for the donut's center, e.g. `$300,000`.
    #[must_use]
    pub fn center_total(&self) -> String {
        self.kind.format_value(self.total)
    }

    /// Share of the slice at `index` as a percentage of the series total.
    #[must_use]
    pub fn percent(&self, index: usize) -> f64 {
        self.slices
            .get(index)
            .map_or(0.0, |slice| percent_of(slice.value, self.total))
    }

    /// Hover text, e.g. `SFR: 40%`.
    #[must_use]
    pub fn tooltip(&self, index: usize) -> String {
        let label = self.slices.get(index).map_or("", |slice| slice.label.as_str());
        format!("{label}: {}%", format_fixed(self.percent(index), 0))
    }

    /// Legend percentage with one decimal, e.g. `33.3%`.
    #[must_use]
    pub fn inline_percent(&self, index: usize) -> String {
        format!("{}%", format_fixed(self.percent(index), 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn access(rows: &[(&str, f64)]) -> DonutSeries {
        DonutSeries::from_payload(DonutPayload::AccessTypes(
            rows.iter()
                .map(|(access, total)| AccessBreakdownItem {
                    access: (*access).into(),
                    total: *total,
                })
                .collect(),
        ))
    }

    #[test]
    fn percentages_sum_to_hundred() {
        let series = access(&[("Lockbox", 1.0), ("Agent", 1.0), ("Owner", 1.0)]);
        let sum: f64 = (0..3).map(|index| series.percent(index)).sum();
        assert!((sum - 100.0).abs() < 1e-9);
        assert_eq!(series.inline_percent(0), "33.3%");
        assert_eq!(series.tooltip(0), "Lockbox: 33%");
    }

    #[test]
    fn percentages_use_own_series_total() {
        let series = DonutSeries::from_payload(DonutPayload::SuccessRate(vec![
            SuccessRateItem {
                success_rate_percent: 60.0,
                property_type: "SFR".into(),
            },
            SuccessRateItem {
                success_rate_percent: 20.0,
                property_type: "Condo".into(),
            },
        ]));
        assert!((series.total - 80.0).abs() < f64::EPSILON);
        assert_eq!(series.tooltip(0), "SFR: 75%");
        assert_eq!(series.inline_percent(1), "25.0%");
        assert_eq!(SeriesKind::SuccessRate.format_value(60.0), "60%");
        assert_eq!(series.center_total(), "80%");
    }

    #[test]
    fn titles_name_each_donut() {
        let titles: Vec<&str> = SeriesKind::ALL.iter().map(|kind| kind.title()).collect();
        assert_eq!(titles, vec!["Average ARV", "Success Rate", "Access Types"]);
    }

    #[test]
    fn center_total_uses_the_series_format() {
        assert_eq!(access(&[("Lockbox", 1200.0), ("Agent", 34.0)]).center_total(), "1,234");
        let arv = DonutSeries::from_payload(DonutPayload::AverageArv(vec![
            AvgArvItem {
                avg_arv: 200_000.0,
                property_type: "SFR".into(),
            },
            AvgArvItem {
                avg_arv: 100_000.0,
                property_type: "Condo".into(),
            },
        ]));
        assert_eq!(arv.center_total(), "$300,000");
    }

    #[test]
    fn empty_and_zero_series_are_empty() {
        assert!(access(&[]).is_empty());
        let zero = access(&[("Lockbox", 0.0)]);
        assert!(zero.is_empty());
        assert_eq!(zero.inline_percent(0), "0.0%");
        assert_eq!(zero.inline_percent(5), "0.0%");
    }

    #[test]
    fn palette_cycles_beyond_its_length() {
        let series = access(&[("a", 1.0), ("b", 1.0), ("c", 1.0), ("d", 1.0), ("e", 1.0)]);
        assert_eq!(series.slices[4].color, "#f59e0b");
        assert_eq!(series.slices[1].color, "#06b6d4");
    }

    #[test]
    fn arv_values_render_as_currency() {
        let series = DonutSeries::from_payload(DonutPayload::AverageArv(vec![AvgArvItem {
            avg_arv: 250_000.5,
            property_type: "SFR".into(),
        }]));
        assert_eq!(series.kind, SeriesKind::AverageArv);
        assert_eq!(series.kind.format_value(series.slices[0].value), "$250,000.5");
        assert_eq!(series.slices[0].color, "#6366f1");
    }
}
