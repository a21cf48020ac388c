use serde::Serialize;

use crate::{
    models::{RecommendationItem, RecommendationRequest},
    services::{fallback::fallback_recommendations, providers::RecommendationProvider},
};

/// Where a result list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchSource {
    Live,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub items: Vec<RecommendationItem>,
    pub source: FetchSource,
}

impl FetchOutcome {
    pub fn fallback() -> Self {
        Self {
            items: fallback_recommendations(),
            source: FetchSource::Fallback,
        }
    }
}

/// Asks the provider for recommendations and never fails
///
/// Every provider error is logged and replaced by the fixed fallback list, so the
/// caller always has something to show.
pub async fn fetch_recommendations(
    provider: &dyn RecommendationProvider,
    request: &RecommendationRequest,
) -> FetchOutcome {
    match provider.recommend(request).await {
        Ok(items) => {
            tracing::info!(
                provider = provider.name(),
                results = items.len(),
                "Live recommendations fetched"
            );
            FetchOutcome {
                items,
                source: FetchSource::Live,
            }
        }
        Err(e) => {
            tracing::warn!(
                provider = provider.name(),
                error = %e,
                "Failed to get recommendations, serving fallback list"
            );
            FetchOutcome::fallback()
        }
    }
}
