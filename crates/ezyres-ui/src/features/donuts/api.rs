//! Concurrent loader for the three donut series.

use crate::core::fetch::{LoadState, settled_or_empty};
use crate::core::source::{ApiError, JsonSource, fetch_json, report_failure};
use crate::features::donuts::logic::{DonutPayload, DonutSeries, SeriesKind};
use ezyres_api_models::ListEnvelope;
use futures_util::future::join3;

/// Settled outcome of each donut, in [`SeriesKind::ALL`] order.
pub type DonutOutcomes = [Result<DonutSeries, ApiError>; 3];

/// Fetch one donut series.
///
/// # Errors
/// Returns [`ApiError::Unsuccessful`] when the envelope reports failure;
/// transport and decode failures pass through.
pub async fn load_series<S: JsonSource + ?Sized>(
    source: &S,
    kind: SeriesKind,
) -> Result<DonutSeries, ApiError> {
    let path = kind.path();
    let payload = match kind {
        SeriesKind::AverageArv => DonutPayload::AverageArv(items(fetch_json(source, path).await?, path)?),
        SeriesKind::SuccessRate => DonutPayload::SuccessRate(items(fetch_json(source, path).await?, path)?),
        SeriesKind::AccessTypes => DonutPayload::AccessTypes(items(fetch_json(source, path).await?, path)?),
    };
    Ok(DonutSeries::from_payload(payload))
}

/// Fetch all three series concurrently; each outcome is independent.
pub async fn load_donuts<S: JsonSource + ?Sized>(source: &S) -> DonutOutcomes {
    let (arv, success, access) = join3(
        load_series(source, SeriesKind::AverageArv),
        load_series(source, SeriesKind::SuccessRate),
        load_series(source, SeriesKind::AccessTypes),
    )
    .await;
    [arv, success, access]
}

/// Fetch all three series and settle each for display.
///
/// A failed series is logged and shows the "No data available" placeholder,
/// exactly like a series with no rows.
pub async fn load_donut_states<S: JsonSource + ?Sized>(source: &S) -> [LoadState<DonutSeries>; 3] {
    load_donuts(source).await.map(|outcome| {
        if let Err(err) = &outcome {
            report_failure("analytics_donut_group", err);
        }
        settled_or_empty(outcome, DonutSeries::is_empty)
    })
}

fn items<T>(envelope: ListEnvelope<T>, path: &str) -> Result<Vec<T>, ApiError> {
    if envelope.is_success() {
        Ok(envelope.into_items())
    } else {
        Err(ApiError::Unsuccessful {
            path: path.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fetch::settled;
    use crate::core::source::testing::{FakeSource, transport_error};
    use ezyres_api_models::paths;
    use serde_json::json;

    fn healthy_source() -> FakeSource {
        FakeSource::new()
            .with_json(
                paths::AVG_BY_TYPE,
                json!({"data": [{"avg_arv": "200000", "type": "SFR"}, {"avg_arv": 100_000, "type": "Condo"}]}),
            )
            .with_json(
                paths::SUCCESS_RATE,
                json!({"data": [{"success_rate_percent": 50, "type": "SFR"}]}),
            )
            .with_json(
                paths::ACCESS_BREAKDOWN,
                json!({"data": [{"total": 3, "access": "Lockbox"}, {"total": "1", "access": "Agent"}]}),
            )
    }

    #[tokio::test]
    async fn joins_all_three_endpoints() {
        let source = healthy_source();
        let [arv, success, access] = load_donuts(&source).await;
        let arv = arv.unwrap();
        assert_eq!(arv.kind, SeriesKind::AverageArv);
        assert!((arv.total - 300_000.0).abs() < f64::EPSILON);
        assert_eq!(success.unwrap().slices.len(), 1);
        assert_eq!(access.unwrap().tooltip(0), "Lockbox: 75%");
        assert_eq!(source.calls().len(), 3);
    }

    #[tokio::test]
    async fn one_failed_series_does_not_sink_the_others() {
        let source = healthy_source()
            .with_error(paths::SUCCESS_RATE, transport_error(paths::SUCCESS_RATE));
        let [arv, success, access] = load_donut_states(&source).await;
        assert!(arv.ready().is_some());
        assert!(access.ready().is_some());
        assert_eq!(success, LoadState::Empty);
    }

    #[tokio::test]
    async fn failed_series_look_like_empty_ones() {
        let source = healthy_source()
            .with_json(paths::AVG_BY_TYPE, json!({"success": false}))
            .with_json(paths::ACCESS_BREAKDOWN, json!({"data": []}))
            .with_json(paths::SUCCESS_RATE, json!("<html>"));
        let states = load_donut_states(&source).await;
        assert!(states.iter().all(|state| *state == LoadState::Empty));
    }

    #[tokio::test]
    async fn missing_data_is_an_empty_series() {
        let source = healthy_source().with_json(paths::ACCESS_BREAKDOWN, json!({}));
        let [_, _, access] = load_donuts(&source).await;
        assert_eq!(settled(access, DonutSeries::is_empty), LoadState::Empty);
    }

    #[tokio::test]
    async fn unsuccessful_envelope_is_an_error() {
        let source = healthy_source()
            .with_json(paths::AVG_BY_TYPE, json!({"success": false}));
        let err = load_series(&source, SeriesKind::AverageArv).await.unwrap_err();
        assert!(matches!(err, ApiError::Unsuccessful { .. }));
    }
}
