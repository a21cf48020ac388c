use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use crate::error::AppError;

/// Character budget for the free-text thoughts field
pub const MAX_THOUGHTS_CHARS: usize = 500;

/// Wire value for an unset preference
pub const ANY_PREFERENCE: &str = "Any";

/// Notice shown when the user asks for recommendations without describing their mood
pub const EMPTY_THOUGHTS_NOTICE: &str = "Please share your thoughts and feelings first!";

/// Mood tag the user can pick alongside their free-text thoughts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Excited,
    Romantic,
    Adventurous,
    Nostalgic,
    Mysterious,
    Chill,
}

impl Mood {
    pub const ALL: [Mood; 8] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Excited,
        Mood::Romantic,
        Mood::Adventurous,
        Mood::Nostalgic,
        Mood::Mysterious,
        Mood::Chill,
    ];

    /// Wire value sent to the recommendation service
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Excited => "excited",
            Mood::Romantic => "romantic",
            Mood::Adventurous => "adventurous",
            Mood::Nostalgic => "nostalgic",
            Mood::Mysterious => "mysterious",
            Mood::Chill => "chill",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Excited => "Excited",
            Mood::Romantic => "Romantic",
            Mood::Adventurous => "Adventurous",
            Mood::Nostalgic => "Nostalgic",
            Mood::Mysterious => "Mysterious",
            Mood::Chill => "Chill",
        }
    }

    /// Emoji floated over the mood button when it is picked
    pub fn glyph(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Sad => "😢",
            Mood::Excited => "🤩",
            Mood::Romantic => "💕",
            Mood::Adventurous => "⚡",
            Mood::Nostalgic => "🌅",
            Mood::Mysterious => "🔮",
            Mood::Chill => "🌙",
        }
    }
}

impl Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mood {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == wanted)
            .ok_or_else(|| AppError::InvalidInput(format!("Unknown mood: {}", s)))
    }
}

/// Everything the user has typed or picked so far
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FormState {
    pub thoughts: String,
    pub mood: Option<Mood>,
    pub region: String,
    pub language: String,
    pub genre: String,
    /// Kept as typed; range checks belong to the recommendation service
    pub year: String,
}

/// Partial form edit; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormUpdate {
    pub thoughts: Option<String>,
    pub region: Option<String>,
    pub language: Option<String>,
    pub genre: Option<String>,
    pub year: Option<String>,
}

impl FormState {
    /// Applies a user edit. A too-long `thoughts` value rejects the whole edit.
    pub fn apply(&mut self, update: FormUpdate) -> Result<(), AppError> {
        if let Some(thoughts) = &update.thoughts {
            let len = thoughts.chars().count();
            if len > MAX_THOUGHTS_CHARS {
                return Err(AppError::InvalidInput(format!(
                    "Thoughts are limited to {} characters (got {})",
                    MAX_THOUGHTS_CHARS, len
                )));
            }
        }

        if let Some(thoughts) = update.thoughts {
            self.thoughts = thoughts;
        }
        if let Some(region) = update.region {
            self.region = region;
        }
        if let Some(language) = update.language {
            self.language = language;
        }
        if let Some(genre) = update.genre {
            self.genre = genre;
        }
        if let Some(year) = update.year {
            self.year = year;
        }

        Ok(())
    }

    pub fn thoughts_len(&self) -> usize {
        self.thoughts.chars().count()
    }

    /// Builds the outbound payload, or the validation notice if there is nothing to send.
    ///
    /// `auto_region` is whatever geolocation produced so far and is only used when
    /// the user left the region field empty.
    pub fn to_request(&self, auto_region: Option<&str>) -> Result<RecommendationRequest, AppError> {
        let thoughts = self.thoughts.trim();
        if thoughts.is_empty() {
            return Err(AppError::InvalidInput(EMPTY_THOUGHTS_NOTICE.to_string()));
        }

        let region = if self.region.is_empty() {
            auto_region.unwrap_or_default().to_string()
        } else {
            self.region.clone()
        };

        Ok(RecommendationRequest {
            user_thoughts: thoughts.to_string(),
            mood: self.mood.map(|m| m.as_str().to_string()).unwrap_or_default(),
            region,
            preferences: Preferences {
                language: or_any(&self.language),
                genre: or_any(&self.genre),
                year: or_any(&self.year),
            },
        })
    }
}

fn or_any(value: &str) -> String {
    if value.is_empty() {
        ANY_PREFERENCE.to_string()
    } else {
        value.to_string()
    }
}

/// Body POSTed to the recommendation service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub user_thoughts: String,
    pub mood: String,
    pub region: String,
    pub preferences: Preferences,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    pub language: String,
    pub genre: String,
    pub year: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(thoughts: &str) -> FormState {
        FormState {
            thoughts: thoughts.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_mood_from_str_is_case_insensitive() {
        assert_eq!("Happy".parse::<Mood>().unwrap(), Mood::Happy);
        assert_eq!(" chill ".parse::<Mood>().unwrap(), Mood::Chill);
        assert!(matches!(
            "grumpy".parse::<Mood>(),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_mood_glyphs() {
        assert_eq!(Mood::Happy.glyph(), "😊");
        assert_eq!(Mood::Mysterious.glyph(), "🔮");
        assert_eq!(Mood::Chill.label(), "Chill");
    }

    #[test]
    fn test_empty_thoughts_are_rejected() {
        for thoughts in ["", "   ", "\n\t"] {
            match form(thoughts).to_request(Some("Japan")) {
                Err(AppError::InvalidInput(msg)) => assert_eq!(msg, EMPTY_THOUGHTS_NOTICE),
                other => panic!("expected validation notice, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_request_defaults_to_any() {
        let request = form("  feeling happy  ").to_request(Some("Japan")).unwrap();
        assert_eq!(request.user_thoughts, "feeling happy");
        assert_eq!(request.mood, "");
        assert_eq!(request.region, "Japan");
        assert_eq!(request.preferences.language, "Any");
        assert_eq!(request.preferences.genre, "Any");
        assert_eq!(request.preferences.year, "Any");
    }

    #[test]
    fn test_typed_region_wins_over_auto_region() {
        let mut state = form("tired");
        state.region = "Canada".to_string();
        state.mood = Some(Mood::Sad);
        let request = state.to_request(Some("Japan")).unwrap();
        assert_eq!(request.region, "Canada");
        assert_eq!(request.mood, "sad");
    }

    #[test]
    fn test_region_empty_while_detection_pending() {
        let request = form("tired").to_request(None).unwrap();
        assert_eq!(request.region, "");
    }

    #[test]
    fn test_out_of_range_year_passes_through() {
        let mut state = form("something old");
        state.year = "1850".to_string();
        let request = state.to_request(None).unwrap();
        assert_eq!(request.preferences.year, "1850");
    }

    #[test]
    fn test_request_wire_shape() {
        let mut state = form("feeling happy");
        state.mood = Some(Mood::Happy);
        state.genre = "Comedy".to_string();
        let json = serde_json::to_value(state.to_request(Some("India")).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "userThoughts": "feeling happy",
                "mood": "happy",
                "region": "India",
                "preferences": { "language": "Any", "genre": "Comedy", "year": "Any" }
            })
        );
    }

    #[test]
    fn test_apply_partial_update() {
        let mut state = form("old");
        state
            .apply(FormUpdate {
                genre: Some("Drama".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(state.thoughts, "old");
        assert_eq!(state.genre, "Drama");
    }

    #[test]
    fn test_apply_rejects_long_thoughts_without_touching_state() {
        let mut state = form("old");
        let result = state.apply(FormUpdate {
            thoughts: Some("x".repeat(MAX_THOUGHTS_CHARS + 1)),
            genre: Some("Drama".to_string()),
            ..Default::default()
        });
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
        assert_eq!(state.thoughts, "old");
        assert_eq!(state.genre, "");
    }

    #[test]
    fn test_thoughts_limit_counts_chars_not_bytes() {
        let mut state = FormState::default();
        let emoji_heavy = "😊".repeat(MAX_THOUGHTS_CHARS);
        state
            .apply(FormUpdate {
                thoughts: Some(emoji_heavy),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(state.thoughts_len(), MAX_THOUGHTS_CHARS);
    }
}
