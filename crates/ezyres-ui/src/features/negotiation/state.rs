//! Client-side pagination and presentation variants.

use crate::core::logic::format_number;
use ezyres_api_models::NegotiationRow;

/// Presentation preset for the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TableVariant {
    /// Ten rows per page, roomy cells.
    #[default]
    Standard,
    /// Five rows per page, tight cells.
    Compact,
}

impl TableVariant {
    /// Rows per page.
    #[must_use]
    pub const fn page_size(self) -> usize {
        match self {
            Self::Standard => 10,
            Self::Compact => 5,
        }
    }

    /// Cell padding classes.
    #[must_use]
    pub const fn cell_class(self) -> &'static str {
        match self {
            Self::Standard => "px-6 py-4 text-sm",
            Self::Compact => "px-3 py-2 text-xs",
        }
    }
}

/// Current page over a fixed row count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paginator {
    total: usize,
    page_size: usize,
    page: usize,
}

impl Paginator {
    /// Start on page one; a zero page size is treated as one.
    #[must_use]
    pub fn new(total: usize, page_size: usize) -> Self {
        Self {
            total,
            page_size: page_size.max(1),
            page: 1,
        }
    }

    /// One-based current page.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// `ceil(total / page_size)`; zero when there are no rows.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    /// Half-open row range of the current page.
    #[must_use]
    pub fn window(&self) -> std::ops::Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.total);
        let end = (self.page * self.page_size).min(self.total);
        start..end
    }

    /// Rows of the current page.
    #[must_use]
    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let range = self.window();
        rows.get(range).unwrap_or(&[])
    }

    /// Whether "Previous" is enabled.
    #[must_use]
    pub const fn can_prev(&self) -> bool {
        self.page > 1
    }

    /// Whether "Next" is enabled.
    #[must_use]
    pub const fn can_next(&self) -> bool {
        self.page < self.page_count()
    }

    /// Advance one page, staying on the last.
    #[must_use]
    pub const fn next(self) -> Self {
        if self.can_next() {
            Self {
                page: self.page + 1,
                ..self
            }
        } else {
            self
        }
    }

    /// Go back one page, staying on the first.
    #[must_use]
    pub const fn prev(self) -> Self {
        if self.can_prev() {
            Self {
                page: self.page - 1,
                ..self
            }
        } else {
            self
        }
    }

    /// Footer caption, e.g. `Page 2 of 3`.
    #[must_use]
    pub fn caption(&self) -> String {
        format!("Page {} of {}", self.page, self.page_count().max(1))
    }
}

/// Column headings, in cell order.
pub const HEADERS: [&str; 4] = [
    "Address",
    "Price ($)",
    "Dispo Price ($)",
    "Negotiation Margin ($)",
];

/// Formatted cells of one row; amounts are grouped numbers without a symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowCells {
    /// Row identifier, used as the row key.
    pub id: String,
    /// Street address.
    pub address: String,
    /// Acquisition price.
    pub price: String,
    /// Disposition price.
    pub dispo_price: String,
    /// Margin.
    pub margin: String,
    /// Whether the margin is negative.
    pub negative: bool,
}

impl From<&NegotiationRow> for RowCells {
    fn from(row: &NegotiationRow) -> Self {
        Self {
            id: row.id.clone(),
            address: row.address.clone(),
            price: format_number(row.price),
            dispo_price: format_number(row.dispo_price),
            margin: format_number(row.negotiation_margin),
            negative: row.negotiation_margin < 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_three_rows_make_three_pages() {
        let pager = Paginator::new(23, TableVariant::Standard.page_size());
        assert_eq!(pager.page_count(), 3);
        assert!(!pager.can_prev());
        assert!(pager.can_next());

        let second = pager.next();
        assert!(second.can_prev());
        assert!(second.can_next());
        assert_eq!(second.window(), 10..20);

        let third = second.next();
        assert_eq!(third.page(), 3);
        assert_eq!(third.window().len(), 3);
        assert!(!third.can_next());
        assert!(third.can_prev());
        assert_eq!(third.next(), third);
    }

    #[test]
    fn prev_clamps_at_first_page() {
        let pager = Paginator::new(23, 10);
        assert_eq!(pager.prev(), pager);
        assert_eq!(pager.next().prev().page(), 1);
    }

    #[test]
    fn zero_rows_disable_both_controls() {
        let pager = Paginator::new(0, 10);
        assert_eq!(pager.page_count(), 0);
        assert!(!pager.can_prev());
        assert!(!pager.can_next());
        assert!(pager.window().is_empty());
        assert_eq!(pager.caption(), "Page 1 of 1");
    }

    #[test]
    fn compact_variant_pages_by_five() {
        let rows: Vec<u32> = (0..12).collect();
        let pager = Paginator::new(rows.len(), TableVariant::Compact.page_size());
        assert_eq!(pager.page_count(), 3);
        assert_eq!(pager.next().next().slice(&rows), &[10, 11]);
    }

    #[test]
    fn cells_are_grouped_numbers() {
        let cells = RowCells::from(&NegotiationRow {
            id: "7".into(),
            address: "12 Elm St".into(),
            price: 100_000.0,
            dispo_price: 95_000.0,
            negotiation_margin: -5_000.0,
        });
        assert_eq!(cells.price, "100,000");
        assert_eq!(cells.dispo_price, "95,000");
        assert_eq!(cells.margin, "-5,000");
        assert!(cells.negative);
        assert_eq!(HEADERS.len(), 4);
        assert_eq!(HEADERS[3], "Negotiation Margin ($)");
    }
}
