//! Top-N ranking for the repeat sellers chart.

use crate::core::logic::{email_local_part, format_number};
use ezyres_api_models::SellerSubmission;

/// Sellers kept on the chart.
pub const TOP_SELLERS: usize = 10;

/// Bar fill shared by every seller.
pub const BAR_FILL: &str = "rgba(37, 99, 235, 0.6)";
/// Bar outline.
pub const BAR_BORDER: &str = "#1e3a8a";
/// Bar fill while hovered.
pub const BAR_HOVER: &str = "rgba(37, 99, 235, 0.8)";

/// Placeholder shown for empty or failed loads.
pub const NO_DATA_MESSAGE: &str = "No data available";

/// One horizontal bar.
#[derive(Clone, Debug, PartialEq)]
pub struct SellerBar {
    /// Axis label: the email local part.
    pub label: String,
    /// Full email for the tooltip.
    pub email: String,
    /// Submissions by the seller.
    pub submissions: f64,
}

impl SellerBar {
    /// Hover text, e.g. `7 submissions`.
    #[must_use]
    pub fn tooltip(&self) -> String {
        format!("{} submissions", format_number(self.submissions))
    }
}

/// Ranked chart content.
#[derive(Clone, Debug, PartialEq)]
pub struct SellerRanking {
    /// Bars, largest first.
    pub bars: Vec<SellerBar>,
}

impl SellerRanking {
    /// Stable-sort descending by submissions and keep [`TOP_SELLERS`].
    #[must_use]
    pub fn from_rows(mut rows: Vec<SellerSubmission>) -> Self {
        rows.sort_by(|a, b| b.submission_count.total_cmp(&a.submission_count));
        rows.truncate(TOP_SELLERS);
        let bars = rows
            .into_iter()
            .map(|row| SellerBar {
                label: email_local_part(&row.email).to_string(),
                submissions: row.submission_count,
                email: row.email,
            })
            .collect();
        Self { bars }
    }

    /// Whether there is nothing to chart.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}
