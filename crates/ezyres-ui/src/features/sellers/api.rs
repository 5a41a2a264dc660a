//! Repeat sellers loader.

use crate::core::source::{ApiError, JsonSource, fetch_json, report_failure};
use crate::features::sellers::logic::SellerRanking;
use ezyres_api_models::{ListEnvelope, SellerSubmission, paths};

/// Fetch and rank sellers.
///
/// # Errors
/// Returns [`ApiError::Unsuccessful`] unless the envelope carries
/// `success: true`; transport and decode failures pass through.
pub async fn fetch_sellers<S: JsonSource + ?Sized>(source: &S) -> Result<SellerRanking, ApiError> {
    let envelope: ListEnvelope<SellerSubmission> = fetch_json(source, paths::REPEAT_SELLERS).await?;
    if !envelope.reports_success() {
        return Err(ApiError::Unsuccessful {
            path: paths::REPEAT_SELLERS.to_string(),
        });
    }
    Ok(SellerRanking::from_rows(envelope.into_items()))
}

/// Fetch and rank sellers; `None` when nothing can be shown.
pub async fn load_sellers<S: JsonSource + ?Sized>(source: &S) -> Option<SellerRanking> {
    match fetch_sellers(source).await {
        Ok(ranking) if ranking.is_empty() => None,
        Ok(ranking) => Some(ranking),
        Err(err) => {
            report_failure("repeat_sellers", &err);
            None
        }
    }
}
