use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::models::Mood;

/// How long a floating glyph stays on screen
pub const FEEDBACK_TTL: Duration = Duration::from_secs(2);

/// Half the rendered glyph box, so the glyph centers on the control
const GLYPH_HALF_SIZE: f64 = 25.0;

/// Transient glyph floated over a mood button after it is picked
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackEvent {
    pub id: Uuid,
    pub glyph: String,
    pub x: f64,
    pub y: f64,
    pub created_at: DateTime<Utc>,
}

impl FeedbackEvent {
    /// `center_x`/`center_y` are the screen coordinates of the control's center
    pub fn for_mood(mood: Mood, center_x: f64, center_y: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            glyph: mood.glyph().to_string(),
            x: center_x - GLYPH_HALF_SIZE,
            y: center_y - GLYPH_HALF_SIZE,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_is_centered_on_control() {
        let event = FeedbackEvent::for_mood(Mood::Romantic, 100.0, 60.0);
        assert_eq!(event.glyph, "💕");
        assert_eq!(event.x, 75.0);
        assert_eq!(event.y, 35.0);
    }

    #[test]
    fn test_events_get_distinct_ids() {
        let a = FeedbackEvent::for_mood(Mood::Happy, 0.0, 0.0);
        let b = FeedbackEvent::for_mood(Mood::Happy, 0.0, 0.0);
        assert_ne!(a.id, b.id);
    }
}
