use reqwest::Url;
use serde::{Deserialize, Deserializer, Serialize};

use super::Category;

/// Shown in place of a poster that cannot be loaded
pub const PLACEHOLDER_POSTER: &str =
    "https://via.placeholder.com/300x400/8B5CF6/ffffff?text=No+Image";

/// A movie, series or anime suggested for the user's mood
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationItem {
    pub title: String,
    /// "Movie", "Web Series" or "Anime"; compared case-insensitively
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// 0-10
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f64,
    pub year: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub poster: String,
    /// Why this title matches the mood
    #[serde(default, deserialize_with = "null_as_default")]
    pub reason: String,
    /// Streaming services carrying the title, in display order
    #[serde(default, deserialize_with = "null_as_default")]
    pub platforms: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genre: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: String,
}

/// Treats an explicit `null` the same as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl RecommendationItem {
    pub fn is_in(&self, category: Category) -> bool {
        category.matches(&self.kind)
    }

    /// Poster URL to render, or the placeholder when the stored one is unusable
    pub fn poster_url(&self) -> &str {
        let poster = self.poster.trim();
        match Url::parse(poster) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => poster,
            _ => PLACEHOLDER_POSTER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_service_item() {
        let json = r#"{
            "title": "Inception",
            "type": "Movie",
            "description": "A thief who steals corporate secrets",
            "rating": 8.8,
            "year": 2010,
            "poster": "https://example.com/inception.jpg",
            "reason": "Twisty enough to keep you busy",
            "platforms": ["Netflix", "HBO Max"],
            "genre": "Sci-Fi",
            "language": "English"
        }"#;

        let item: RecommendationItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.title, "Inception");
        assert_eq!(item.kind, "Movie");
        assert_eq!(item.rating, 8.8);
        assert_eq!(item.platforms, vec!["Netflix", "HBO Max"]);
        assert!(item.is_in(Category::Movie));
        assert!(!item.is_in(Category::Anime));
    }

    #[test]
    fn test_deserialize_sparse_item() {
        let json = r#"{ "title": "Mushishi", "type": "anime", "year": 2005 }"#;

        let item: RecommendationItem = serde_json::from_str(json).unwrap();
        assert!(item.platforms.is_empty());
        assert_eq!(item.poster_url(), PLACEHOLDER_POSTER);
        assert!(item.is_in(Category::Anime));
    }

    #[test]
    fn test_deserialize_item_with_null_fields() {
        let json = r#"{
            "title": "Mushishi",
            "type": "Anime",
            "year": 2005,
            "rating": null,
            "poster": null,
            "description": null,
            "reason": null,
            "platforms": null,
            "genre": null,
            "language": "Japanese"
        }"#;

        let item: RecommendationItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.title, "Mushishi");
        assert_eq!(item.rating, 0.0);
        assert_eq!(item.poster, "");
        assert_eq!(item.poster_url(), PLACEHOLDER_POSTER);
        assert!(item.platforms.is_empty());
        assert_eq!(item.language, "Japanese");
    }

    #[test]
    fn test_poster_url_placeholder_for_unusable_values() {
        let mut item: RecommendationItem =
            serde_json::from_str(r#"{ "title": "X", "type": "Movie", "year": 2000 }"#).unwrap();

        for poster in ["", "not a url", "ftp://example.com/a.jpg", "/relative/path.jpg"] {
            item.poster = poster.to_string();
            assert_eq!(item.poster_url(), PLACEHOLDER_POSTER, "poster {:?}", poster);
        }

        item.poster = "https://example.com/a.jpg".to_string();
        assert_eq!(item.poster_url(), "https://example.com/a.jpg");
    }
}
