//! HTTP client for the remote recommendation service
//!
//! POSTs the user's thoughts and preferences as JSON and expects
//! `{ "success": true, "recommendations": [...] }` back.

use crate::{
    error::{AppError, AppResult},
    models::{RecommendResponse, RecommendationItem, RecommendationRequest},
    services::providers::RecommendationProvider,
};
use reqwest::Client as HttpClient;
use std::time::Duration;

#[derive(Clone)]
pub struct RecommendApiProvider {
    http_client: HttpClient,
    api_url: String,
}

impl RecommendApiProvider {
    pub fn new(api_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            api_url,
        })
    }
}

#[async_trait::async_trait]
impl RecommendationProvider for RecommendApiProvider {
    async fn recommend(&self, request: &RecommendationRequest) -> AppResult<Vec<RecommendationItem>> {
        let response = self
            .http_client
            .post(&self.api_url)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Recommendation API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        tracing::debug!(response = %response_text, "Raw recommendation API response");

        let body: RecommendResponse = serde_json::from_str(&response_text).map_err(|e| {
            AppError::ExternalApi(format!("Failed to parse recommendation response: {}", e))
        })?;

        match body {
            RecommendResponse {
                success: true,
                recommendations: Some(items),
            } => {
                tracing::info!(
                    results = items.len(),
                    provider = self.name(),
                    "Recommendations received"
                );
                Ok(items)
            }
            _ => Err(AppError::ExternalApi(
                "Invalid recommendation response format".to_string(),
            )),
        }
    }

    fn name(&self) -> &'static str {
        "recommend_api"
    }
}
