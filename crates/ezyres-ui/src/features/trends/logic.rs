//! Bucket metadata and summary fallbacks for the trend cards.

use crate::core::logic::format_number;
use ezyres_api_models::{TrendPoint, TrendSummary, paths};

/// Time bucket of a trend series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TrendBucket {
    /// Twelve monthly buckets.
    Monthly,
    /// Twelve weekly buckets.
    Weekly,
    /// Thirty daily buckets.
    Daily,
}

impl TrendBucket {
    /// Cards in display order.
    pub const ALL: [Self; 3] = [Self::Monthly, Self::Weekly, Self::Daily];

    /// Card heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly Trends",
            Self::Weekly => "Weekly Trends",
            Self::Daily => "Daily Trends",
        }
    }

    /// Endpoint serving the bucket.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Monthly => paths::MONTHLY_TRENDS,
            Self::Weekly => paths::WEEKLY_TRENDS,
            Self::Daily => paths::DAILY_TRENDS,
        }
    }

    /// Line color.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Monthly => "#3b82f6",
            Self::Weekly => "#22c55e",
            Self::Daily => "#ef4444",
        }
    }

    /// Area fill: the line color at `0x33` alpha.
    #[must_use]
    pub fn area_color(self) -> String {
        format!("{}33", self.color())
    }

    /// Caption describing the window covered.
    #[must_use]
    pub const fn window_label(self) -> &'static str {
        match self {
            Self::Monthly => "12 months",
            Self::Weekly => "12 weeks",
            Self::Daily => "30 days",
        }
    }
}

/// First non-zero of month, week, day averages; zero when none is set.
#[must_use]
pub fn display_average(summary: &TrendSummary) -> f64 {
    [summary.avg_per_month, summary.avg_per_week, summary.avg_per_day]
        .into_iter()
        .flatten()
        .find(|value| *value != 0.0 && value.is_finite())
        .unwrap_or(0.0)
}

/// Normalized card content.
#[derive(Clone, Debug, PartialEq)]
pub struct TrendCard {
    /// Which bucket the card shows.
    pub bucket: TrendBucket,
    /// Buckets in chronological order.
    pub points: Vec<TrendPoint>,
    /// Properties submitted across the window.
    pub total: f64,
    /// Average per the fallback rule.
    pub average: f64,
}

impl TrendCard {
    /// Build a card from decoded parts.
    #[must_use]
    pub fn new(bucket: TrendBucket, points: Vec<TrendPoint>, summary: &TrendSummary) -> Self {
        Self {
            bucket,
            points,
            total: summary.total_properties.unwrap_or(0.0),
            average: display_average(summary),
        }
    }

    /// Point counts for the sparkline.
    #[must_use]
    pub fn counts(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.count).collect()
    }

    /// Formatted total.
    #[must_use]
    pub fn total_label(&self) -> String {
        format_number(self.total)
    }

    /// Formatted average.
    #[must_use]
    pub fn average_label(&self) -> String {
        format_number(self.average)
    }

    /// Whether there is nothing to plot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
