use crate::services::providers::RegionLocator;

/// Region reported when geolocation fails or returns nothing usable
pub const UNKNOWN_REGION: &str = "Unknown";

/// Geolocation result as the session consumes it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedRegion {
    /// Always set; `Unknown` on failure
    pub auto_region: String,
    /// Pre-fill for the region field, only when a real country was found
    pub prefill: Option<String>,
}

/// Runs the lookup and swallows every failure into the `Unknown` sentinel
pub async fn detect_region(locator: &dyn RegionLocator) -> DetectedRegion {
    match locator.locate().await {
        Ok(Some(country)) => DetectedRegion {
            auto_region: country.clone(),
            prefill: Some(country),
        },
        Ok(None) => DetectedRegion {
            auto_region: UNKNOWN_REGION.to_string(),
            prefill: None,
        },
        Err(e) => {
            tracing::warn!(provider = locator.name(), error = %e, "Failed to detect region");
            DetectedRegion {
                auto_region: UNKNOWN_REGION.to_string(),
                prefill: None,
            }
        }
    }
}
