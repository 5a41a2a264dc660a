//! Health check loader.

use crate::core::source::{JsonSource, fetch_json, report_failure};
use ezyres_api_models::{HealthStatus, paths};

/// Check API health; any failure is logged and replaced with a DOWN status.
pub async fn load_health<S: JsonSource + ?Sized>(source: &S) -> HealthStatus {
    match fetch_json::<HealthStatus, _>(source, paths::HEALTH).await {
        Ok(status) => status,
        Err(err) => {
            report_failure("health_badge", &err);
            HealthStatus::down()
        }
    }
}
