//! Deals-by-city loader.

use crate::core::source::{ApiError, JsonSource, fetch_json};
use crate::features::deals::logic::DealsChart;
use ezyres_api_models::{CityDealCount, ListEnvelope, paths};

/// Fetch and normalize the per-city deal counts.
///
/// # Errors
/// Returns [`ApiError::Unsuccessful`] unless the envelope carries
/// `success: true` and a `data` list; transport and decode failures pass through.
pub async fn load_deals<S: JsonSource + ?Sized>(source: &S) -> Result<DealsChart, ApiError> {
    let envelope: ListEnvelope<CityDealCount> = fetch_json(source, paths::TOP_CITIES).await?;
    if !envelope.reports_success() || envelope.data.is_none() {
        return Err(ApiError::Unsuccessful {
            path: paths::TOP_CITIES.to_string(),
        });
    }
    Ok(DealsChart::from_rows(envelope.into_items()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fetch::{LoadState, settled};
    use crate::core::source::testing::{FakeSource, transport_error};
    use serde_json::json;

    #[tokio::test]
    async fn string_counts_are_coerced() {
        let source = FakeSource::new().with_json(
            paths::TOP_CITIES,
            json!({"success": true, "data": [
                {"city": "Austin", "deal_count": "12"},
                {"city": "Houston", "deal_count": 6}
            ]}),
        );
        let chart = load_deals(&source).await.unwrap();
        assert!((chart.total - 18.0).abs() < f64::EPSILON);
        assert!((chart.bars[1].color.intensity - 0.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn unsuccessful_envelope_fails_to_load() {
        let source = FakeSource::new()
            .with_json(paths::TOP_CITIES, json!({"success": false, "data": []}));
        let state = settled(load_deals(&source).await, DealsChart::is_empty);
        assert_eq!(state, LoadState::Error("Failed to load data".into()));
    }

    #[tokio::test]
    async fn missing_data_fails_to_load() {
        let source = FakeSource::new().with_json(paths::TOP_CITIES, json!({"success": true}));
        let err = load_deals(&source).await.unwrap_err();
        assert!(matches!(err, ApiError::Unsuccessful { .. }));
    }

    #[tokio::test]
    async fn missing_success_flag_fails_to_load() {
        let source = FakeSource::new().with_json(
            paths::TOP_CITIES,
            json!({"data": [{"city": "A", "deal_count": 3}]}),
        );
        let state = settled(load_deals(&source).await, DealsChart::is_empty);
        assert_eq!(state, LoadState::Error("Failed to load data".into()));
    }

    #[tokio::test]
    async fn transport_failure_is_unable_to_fetch() {
        let source = FakeSource::new()
            .with_error(paths::TOP_CITIES, transport_error(paths::TOP_CITIES));
        let state = settled(load_deals(&source).await, DealsChart::is_empty);
        assert_eq!(state, LoadState::Error("Unable to fetch data".into()));
    }

    #[tokio::test]
    async fn empty_list_is_empty_state() {
        let source = FakeSource::new()
            .with_json(paths::TOP_CITIES, json!({"success": true, "data": []}));
        let state = settled(load_deals(&source).await, DealsChart::is_empty);
        assert_eq!(state, LoadState::Empty);
    }
}
