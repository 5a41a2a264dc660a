//! Negotiation margin loader.

use crate::core::source::{ApiError, JsonSource, fetch_json};
use ezyres_api_models::{ListEnvelope, NegotiationRow, paths};

/// Fetch every negotiation row; pagination happens client-side.
///
/// # Errors
/// Returns [`ApiError::Unsuccessful`] when the envelope reports failure;
/// transport and decode failures pass through.
pub async fn load_rows<S: JsonSource + ?Sized>(source: &S) -> Result<Vec<NegotiationRow>, ApiError> {
    let envelope: ListEnvelope<NegotiationRow> = fetch_json(source, paths::NEGOTIATION_MARGIN).await?;
    if !envelope.is_success() {
        return Err(ApiError::Unsuccessful {
            path: paths::NEGOTIATION_MARGIN.to_string(),
        });
    }
    Ok(envelope.into_items())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fetch::{LoadState, settled};
    use crate::core::source::testing::FakeSource;
    use crate::features::negotiation::state::Paginator;
    use serde_json::json;

    fn rows(count: usize) -> serde_json::Value {
        let data: Vec<serde_json::Value> = (0..count)
            .map(|index| {
                json!({
                    "id": index,
                    "address": format!("{index} Main St"),
                    "price": 100_000,
                    "dispo_price": "110000",
                    "negotiation_margin": 10_000
                })
            })
            .collect();
        json!({ "data": data })
    }

    #[tokio::test]
    async fn loads_all_rows_for_client_paging() {
        let source = FakeSource::new().with_json(paths::NEGOTIATION_MARGIN, rows(23));
        let loaded = load_rows(&source).await.unwrap();
        assert_eq!(loaded.len(), 23);
        let last = Paginator::new(loaded.len(), 10).next().next();
        let page = last.slice(&loaded);
        assert_eq!(page.len(), 3);
        assert_eq!(page[0].id, "20");
        assert!((page[0].dispo_price - 110_000.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn empty_payload_is_empty_state() {
        let source = FakeSource::new().with_json(paths::NEGOTIATION_MARGIN, json!({"data": []}));
        let state = settled(load_rows(&source).await, Vec::is_empty);
        assert_eq!(state, LoadState::Empty);
    }
}
