//! Concurrent loader for the three trend cards.

use crate::core::fetch::{LoadState, settled_or_empty};
use crate::core::source::{ApiError, JsonSource, fetch_json, report_failure};
use crate::features::trends::logic::{TrendBucket, TrendCard};
use ezyres_api_models::TrendEnvelope;
use futures_util::future::join3;

/// Settled outcome of each card, in [`TrendBucket::ALL`] order.
pub type TrendOutcomes = [Result<TrendCard, ApiError>; 3];

/// Fetch one trend series with its summary.
///
/// # Errors
/// Transport and decode failures pass through.
pub async fn load_trend<S: JsonSource + ?Sized>(
    source: &S,
    bucket: TrendBucket,
) -> Result<TrendCard, ApiError> {
    let envelope: TrendEnvelope = fetch_json(source, bucket.path()).await?;
    let (points, summary) = envelope.into_parts();
    Ok(TrendCard::new(bucket, points, &summary))
}

/// Fetch all three trends concurrently; each outcome is independent.
pub async fn load_trends<S: JsonSource + ?Sized>(source: &S) -> TrendOutcomes {
    let (monthly, weekly, daily) = join3(
        load_trend(source, TrendBucket::Monthly),
        load_trend(source, TrendBucket::Weekly),
        load_trend(source, TrendBucket::Daily),
    )
    .await;
    [monthly, weekly, daily]
}

/// Fetch all three trends and settle each for display.
///
/// A failed bucket is logged and renders like a bucket with no points.
pub async fn load_trend_states<S: JsonSource + ?Sized>(source: &S) -> [LoadState<TrendCard>; 3] {
    load_trends(source).await.map(|outcome| {
        if let Err(err) = &outcome {
            report_failure("trends_card_group", err);
        }
        settled_or_empty(outcome, TrendCard::is_empty)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::source::testing::{FakeSource, transport_error};
    use ezyres_api_models::paths;
    use serde_json::json;

    #[tokio::test]
    async fn each_bucket_settles_independently() {
        let source = FakeSource::new()
            .with_json(
                paths::MONTHLY_TRENDS,
                json!({
                    "data": [{"label": "Jan", "count": "4"}, {"label": "Feb", "count": 6}],
                    "summary": {"total_properties": 10, "avg_per_month": "5"}
                }),
            )
            .with_json(paths::WEEKLY_TRENDS, json!({"data": []}))
            .with_error(paths::DAILY_TRENDS, transport_error(paths::DAILY_TRENDS));

        let [monthly, weekly, daily] = load_trends(&source).await;
        let monthly = monthly.unwrap();
        assert_eq!(monthly.counts(), vec![4.0, 6.0]);
        assert!((monthly.total - 10.0).abs() < f64::EPSILON);
        assert!((monthly.average - 5.0).abs() < f64::EPSILON);

        let weekly = weekly.unwrap();
        assert!(weekly.is_empty());
        assert!(weekly.total.abs() < f64::EPSILON);

        assert!(daily.is_err());
    }

    #[tokio::test]
    async fn summary_fallback_applies_to_loaded_cards() {
        let source = FakeSource::new().with_json(
            paths::DAILY_TRENDS,
            json!({"data": [{"label": "d1", "count": 1}], "summary": {"avg_per_week": 4}}),
        );
        let card = load_trend(&source, TrendBucket::Daily).await.unwrap();
        assert!((card.average - 4.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn failed_bucket_settles_like_an_empty_one() {
        let source = FakeSource::new()
            .with_json(
                paths::MONTHLY_TRENDS,
                json!({"data": [{"label": "Jan", "count": 2}], "summary": {"total_properties": 2}}),
            )
            .with_json(paths::WEEKLY_TRENDS, json!({"data": []}))
            .with_error(paths::DAILY_TRENDS, transport_error(paths::DAILY_TRENDS));

        let [monthly, weekly, daily] = load_trend_states(&source).await;
        assert!(monthly.ready().is_some());
        assert_eq!(weekly, LoadState::Empty);
        assert_eq!(daily, LoadState::Empty);
    }
}
