use serde::Deserialize;

mod category;
mod form;
mod recommendation;

pub use category::{Category, CategoryCounts};
pub use form::{
    FormState, FormUpdate, Mood, Preferences, RecommendationRequest, ANY_PREFERENCE,
    EMPTY_THOUGHTS_NOTICE, MAX_THOUGHTS_CHARS,
};
pub use recommendation::{RecommendationItem, PLACEHOLDER_POSTER};

// ============================================================================
// Recommendation Service API Types
// ============================================================================

/// Raw response body from the recommendation service
///
/// Anything short of `success: true` with a `recommendations` array present is
/// treated as a failed call by the fetcher.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub recommendations: Option<Vec<RecommendationItem>>,
}

// ============================================================================
// Geolocation API Types
// ============================================================================

/// Subset of the IP geolocation payload we read
#[derive(Debug, Clone, Deserialize)]
pub struct GeolocationResponse {
    #[serde(default)]
    pub country_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend_response_success() {
        let json = r#"{
            "success": true,
            "recommendations": [
                { "title": "Your Name", "type": "Anime", "year": 2016, "rating": 8.4 }
            ]
        }"#;

        let response: RecommendResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        let items = response.recommendations.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Your Name");
    }

    #[test]
    fn test_recommend_response_missing_fields() {
        let response: RecommendResponse = serde_json::from_str(r#"{ "success": false }"#).unwrap();
        assert!(!response.success);
        assert!(response.recommendations.is_none());

        let response: RecommendResponse = serde_json::from_str("{}").unwrap();
        assert!(!response.success);
    }

    #[test]
    fn test_geolocation_response() {
        let json = r#"{ "ip": "203.0.113.7", "country_name": "Japan", "city": "Tokyo" }"#;
        let response: GeolocationResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.country_name.as_deref(), Some("Japan"));

        let response: GeolocationResponse = serde_json::from_str(r#"{ "error": true }"#).unwrap();
        assert_eq!(response.country_name, None);
    }
}
