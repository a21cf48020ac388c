//! IP geolocation lookup (ipapi.co by default)
//!
//! Unauthenticated GET; only `country_name` is read from the payload.

use crate::{
    error::{AppError, AppResult},
    models::GeolocationResponse,
    services::providers::RegionLocator,
};
use reqwest::Client as HttpClient;
use std::time::Duration;

#[derive(Clone)]
pub struct IpApiLocator {
    http_client: HttpClient,
    api_url: String,
}

impl IpApiLocator {
    pub fn new(api_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            api_url,
        })
    }
}

#[async_trait::async_trait]
impl RegionLocator for IpApiLocator {
    async fn locate(&self) -> AppResult<Option<String>> {
        let response = self.http_client.get(&self.api_url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "Geolocation API returned status {}",
                response.status()
            )));
        }

        let body: GeolocationResponse = response.json().await?;
        let country = body
            .country_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        tracing::debug!(country = ?country, provider = self.name(), "Geolocation lookup completed");

        Ok(country)
    }

    fn name(&self) -> &'static str {
        "ipapi"
    }
}
