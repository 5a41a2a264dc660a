#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! Response DTOs for the EzyRes analytics API.
//!
//! Every endpoint the dashboard reads is modelled here so the UI decodes one
//! typed shape per path. Decoding is deliberately lenient: numeric aggregates
//! may arrive as strings, `data` and `summary` may be missing, and the
//! `success` flag is only present on some endpoints.

use serde::{Deserialize, Serialize};

pub mod de;

/// Relative endpoint paths served by the analytics API.
pub mod paths {
    /// Liveness probe.
    pub const HEALTH: &str = "/health";
    /// Deal counts per city.
    pub const TOP_CITIES: &str = "/api/analytics/top-cities";
    /// Average after-repair value per property type.
    pub const AVG_BY_TYPE: &str = "/api/analytics/avg-by-type";
    /// Deal success rate per property type.
    pub const SUCCESS_RATE: &str = "/api/analytics/success-rate";
    /// Property counts per access type.
    pub const ACCESS_BREAKDOWN: &str = "/api/analytics/access-breakdown";
    /// Submissions bucketed by month.
    pub const MONTHLY_TRENDS: &str = "/api/analytics/monthly-trends";
    /// Submissions bucketed by week.
    pub const WEEKLY_TRENDS: &str = "/api/analytics/weekly-trends";
    /// Submissions bucketed by day.
    pub const DAILY_TRENDS: &str = "/api/analytics/daily-trends";
    /// Submission counts per seller email.
    pub const REPEAT_SELLERS: &str = "/api/analytics/repeat-sellers";
    /// Per-property price versus disposition price.
    pub const NEGOTIATION_MARGIN: &str = "/api/analytics/negotiation-margin";
}

/// Service name reported when the health probe cannot be reached.
pub const FALLBACK_SERVICE_NAME: &str = "EzyRes Analytics API";

/// Status string the health endpoint reports for a live service.
pub const HEALTHY_STATUS: &str = "OK";

/// Response of the `/health` probe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    /// `OK` when healthy; any other value is treated as down.
    #[serde(default)]
    pub status: String,
    /// Human-readable service name.
    #[serde(default)]
    pub service: String,
}

impl HealthStatus {
    /// Synthesized status used when the probe request fails.
    #[must_use]
    pub fn down() -> Self {
        Self {
            status: "DOWN".to_string(),
            service: FALLBACK_SERVICE_NAME.to_string(),
        }
    }

    /// Whether the service reported itself as healthy.
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status == HEALTHY_STATUS
    }
}

/// Generic `{ success?, data? }` list envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListEnvelope<T> {
    /// Success flag; absent on endpoints that do not report one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    /// Payload rows; absent or null when the query produced nothing.
    #[serde(default = "none", skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<T>>,
}

const fn none<T>() -> Option<T> {
    None
}

impl<T> ListEnvelope<T> {
    /// Whether the envelope did not explicitly report failure.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success.unwrap_or(true)
    }

    /// Whether the envelope explicitly reported `success: true`.
    ///
    /// Endpoints that always send the flag treat its absence as failure.
    #[must_use]
    pub fn reports_success(&self) -> bool {
        self.success == Some(true)
    }

    /// Rows of the envelope, substituting an empty list when absent.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}

/// Deal count for one city.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CityDealCount {
    /// City name.
    #[serde(default)]
    pub city: String,
    /// Closed deals in the city.
    #[serde(default, deserialize_with = "de::number")]
    pub deal_count: f64,
}

/// Average after-repair value for a property type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AvgArvItem {
    /// Average ARV in dollars.
    #[serde(default, deserialize_with = "de::number")]
    pub avg_arv: f64,
    /// Property type label.
    #[serde(rename = "type", default)]
    pub property_type: String,
}

/// Deal success rate for a property type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuccessRateItem {
    /// Success rate expressed as a percentage.
    #[serde(default, deserialize_with = "de::number")]
    pub success_rate_percent: f64,
    /// Property type label.
    #[serde(rename = "type", default)]
    pub property_type: String,
}

/// Property count for an access type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessBreakdownItem {
    /// Properties with this access type.
    #[serde(default, deserialize_with = "de::number")]
    pub total: f64,
    /// Access type label.
    #[serde(default)]
    pub access: String,
}

/// One bucket of a time-series trend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    /// Bucket label (month, week or day).
    #[serde(default)]
    pub label: String,
    /// Submissions in the bucket.
    #[serde(default, deserialize_with = "de::number")]
    pub count: f64,
}

/// Aggregate figures accompanying a trend series.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrendSummary {
    /// Properties submitted across the window.
    #[serde(default, deserialize_with = "de::optional_number", skip_serializing_if = "Option::is_none")]
    pub total_properties: Option<f64>,
    /// Average submissions per month.
    #[serde(default, deserialize_with = "de::optional_number", skip_serializing_if = "Option::is_none")]
    pub avg_per_month: Option<f64>,
    /// Average submissions per week.
    #[serde(default, deserialize_with = "de::optional_number", skip_serializing_if = "Option::is_none")]
    pub avg_per_week: Option<f64>,
    /// Average submissions per day.
    #[serde(default, deserialize_with = "de::optional_number", skip_serializing_if = "Option::is_none")]
    pub avg_per_day: Option<f64>,
}

/// `{ data?, summary? }` envelope returned by the trend endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrendEnvelope {
    /// Buckets in chronological order.
    #[serde(default)]
    pub data: Option<Vec<TrendPoint>>,
    /// Window aggregates.
    #[serde(default)]
    pub summary: Option<TrendSummary>,
}

impl TrendEnvelope {
    /// Split into points and summary, substituting empties when absent.
    #[must_use]
    pub fn into_parts(self) -> (Vec<TrendPoint>, TrendSummary) {
        (
            self.data.unwrap_or_default(),
            self.summary.unwrap_or_default(),
        )
    }
}

/// Submission count for one seller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SellerSubmission {
    /// Seller contact email.
    #[serde(default)]
    pub email: String,
    /// Properties the seller submitted.
    #[serde(default, deserialize_with = "de::number")]
    pub submission_count: f64,
}

/// Price versus disposition price for one property.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NegotiationRow {
    /// Row identifier, numeric or textual upstream.
    #[serde(default, deserialize_with = "de::identifier")]
    pub id: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// Acquisition price.
    #[serde(default, deserialize_with = "de::number")]
    pub price: f64,
    /// Disposition price.
    #[serde(default, deserialize_with = "de::number")]
    pub dispo_price: f64,
    /// Difference between disposition and acquisition price.
    #[serde(default, deserialize_with = "de::number")]
    pub negotiation_margin: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_envelope_substitutes_missing_data() {
        let envelope: ListEnvelope<CityDealCount> =
            serde_json::from_value(json!({"success": true})).unwrap();
        assert!(envelope.is_success());
        assert!(envelope.reports_success());
        assert!(envelope.into_items().is_empty());

        let null_data: ListEnvelope<CityDealCount> =
            serde_json::from_value(json!({"data": null})).unwrap();
        assert!(null_data.data.is_none());
    }

    #[test]
    fn list_envelope_reports_explicit_failure() {
        let envelope: ListEnvelope<SellerSubmission> =
            serde_json::from_value(json!({"success": false, "data": []})).unwrap();
        assert!(!envelope.is_success());
        assert!(!envelope.reports_success());
    }

    #[test]
    fn missing_success_flag_is_not_a_reported_success() {
        let envelope: ListEnvelope<CityDealCount> =
            serde_json::from_value(json!({"data": [{"city": "A", "deal_count": 3}]})).unwrap();
        assert!(envelope.is_success());
        assert!(!envelope.reports_success());
    }

    #[test]
    fn city_deal_counts_accept_string_counts() {
        let envelope: ListEnvelope<CityDealCount> = serde_json::from_value(json!({
            "success": true,
            "data": [
                {"city": "Austin", "deal_count": "14"},
                {"city": "Dallas", "deal_count": 9}
            ]
        }))
        .unwrap();
        let items = envelope.into_items();
        assert_eq!(items[0].city, "Austin");
        assert!((items[0].deal_count - 14.0).abs() < f64::EPSILON);
        assert!((items[1].deal_count - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn donut_items_rename_type_field() {
        let avg: AvgArvItem =
            serde_json::from_value(json!({"avg_arv": "250000.50", "type": "SFR"})).unwrap();
        assert_eq!(avg.property_type, "SFR");
        assert!((avg.avg_arv - 250_000.5).abs() < f64::EPSILON);

        let rate: SuccessRateItem =
            serde_json::from_value(json!({"success_rate_percent": "61.2", "type": "Condo"}))
                .unwrap();
        assert_eq!(rate.property_type, "Condo");

        let access: AccessBreakdownItem =
            serde_json::from_value(json!({"total": "3", "access": "Lockbox"})).unwrap();
        assert!((access.total - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn trend_envelope_defaults_missing_parts() {
        let envelope: TrendEnvelope = serde_json::from_value(json!({})).unwrap();
        let (points, summary) = envelope.into_parts();
        assert!(points.is_empty());
        assert_eq!(summary, TrendSummary::default());
    }

    #[test]
    fn trend_summary_keeps_absent_fields_none() {
        let summary: TrendSummary =
            serde_json::from_value(json!({"avg_per_week": "4", "avg_per_day": null})).unwrap();
        assert_eq!(summary.avg_per_week, Some(4.0));
        assert_eq!(summary.avg_per_month, None);
        assert_eq!(summary.avg_per_day, None);
    }

    #[test]
    fn negotiation_rows_accept_numeric_ids() {
        let row: NegotiationRow = serde_json::from_value(json!({
            "id": 7,
            "address": "12 Elm St",
            "price": "100000",
            "dispo_price": 125_000,
            "negotiation_margin": 25_000
        }))
        .unwrap();
        assert_eq!(row.id, "7");
        assert!((row.price - 100_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn health_status_distinguishes_ok() {
        let ok: HealthStatus =
            serde_json::from_value(json!({"status": "OK", "service": "analytics"})).unwrap();
        assert!(ok.is_healthy());
        let down = HealthStatus::down();
        assert!(!down.is_healthy());
        assert_eq!(down.service, FALLBACK_SERVICE_NAME);
    }
}
