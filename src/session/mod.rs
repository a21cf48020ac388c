//! Per-visitor UI state.
//!
//! A [`Session`] owns everything one page load needs: the form, the geolocated
//! region, transient mood feedback and the last recommendation list with its
//! category selector. Handlers mutate it only through the methods below.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::Instant;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Category, FormState, FormUpdate, Mood, RecommendationRequest, MAX_THOUGHTS_CHARS},
    services::{DetectedRegion, FetchOutcome, RecommendationSet},
};

mod feedback;
mod view;

pub use feedback::{FeedbackEvent, FEEDBACK_TTL};
pub use view::{ResultStatus, ResultsView, SessionView};

/// Delay between a completed fetch and the scroll to the result panel
pub const REVEAL_DELAY_MS: i64 = 500;

/// Region placeholder while geolocation is still pending
pub const DETECTING_HINT: &str = "Detecting...";

#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    form: FormState,
    auto_region: Option<String>,
    feedback: Vec<FeedbackEvent>,
    results: RecommendationSet,
    loading: bool,
    results_visible: bool,
    reveal_at: Option<DateTime<Utc>>,
    last_seen: Instant,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            form: FormState::default(),
            auto_region: None,
            feedback: Vec::new(),
            results: RecommendationSet::default(),
            loading: false,
            results_visible: false,
            reveal_at: None,
            last_seen: Instant::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn results(&self) -> &RecommendationSet {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Marks the session as used by its client just now
    pub fn touch(&mut self) {
        self.last_seen = Instant::now();
    }

    /// Time since the client last used this session
    pub fn idle_for(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last_seen)
    }

    pub fn update_form(&mut self, update: FormUpdate) -> AppResult<()> {
        self.form.apply(update)
    }

    /// Records the geolocation result. A typed region is never overwritten.
    pub fn apply_detected_region(&mut self, detected: DetectedRegion) {
        if self.form.region.is_empty() {
            if let Some(prefill) = detected.prefill {
                self.form.region = prefill;
            }
        }
        self.auto_region = Some(detected.auto_region);
    }

    /// Sets the mood and returns the feedback glyph to float over the control
    pub fn select_mood(&mut self, mood: Mood, center_x: f64, center_y: f64) -> FeedbackEvent {
        self.form.mood = Some(mood);
        let event = FeedbackEvent::for_mood(mood, center_x, center_y);
        self.feedback.push(event.clone());
        event
    }

    /// Removes exactly one feedback event; false if it was already gone
    pub fn retract_feedback(&mut self, id: Uuid) -> bool {
        let before = self.feedback.len();
        self.feedback.retain(|event| event.id != id);
        self.feedback.len() != before
    }

    /// Validates the form and marks the session as loading
    ///
    /// Fails without touching any state when a fetch is already in flight or the
    /// thoughts field is blank.
    pub fn begin_fetch(&mut self) -> AppResult<RecommendationRequest> {
        if self.loading {
            return Err(AppError::Conflict(
                "Recommendations are already being fetched".to_string(),
            ));
        }

        let request = self.form.to_request(self.auto_region.as_deref())?;
        self.loading = true;
        self.results_visible = false;
        Ok(request)
    }

    /// Installs a finished fetch and clears the loading flag
    pub fn complete_fetch(&mut self, outcome: FetchOutcome, completed_at: DateTime<Utc>) {
        self.results.replace(outcome.items);
        self.results_visible = true;
        self.reveal_at = Some(completed_at + chrono::Duration::milliseconds(REVEAL_DELAY_MS));
        self.loading = false;
    }

    pub fn set_filter(&mut self, category: Category) {
        self.results.set_filter(category);
    }

    pub fn view(&self) -> SessionView {
        let filtered = self.results.filtered();
        let status = if !self.results.is_fetched() {
            ResultStatus::NotFetched
        } else if filtered.is_empty() {
            ResultStatus::Empty
        } else {
            ResultStatus::Ready
        };

        let items = filtered
            .into_iter()
            .map(|item| {
                let mut item = item.clone();
                item.poster = item.poster_url().to_string();
                item
            })
            .collect();

        SessionView {
            id: self.id,
            form: self.form.clone(),
            thoughts_len: self.form.thoughts_len(),
            thoughts_max: MAX_THOUGHTS_CHARS,
            auto_region: self.auto_region.clone(),
            region_hint: self
                .auto_region
                .clone()
                .unwrap_or_else(|| DETECTING_HINT.to_string()),
            loading: self.loading,
            feedback: self.feedback.clone(),
            results: ResultsView {
                visible: self.results_visible,
                status,
                active_filter: self.results.active(),
                counts: self.results.counts(),
                items,
                reveal_at: self.reveal_at,
            },
        }
    }
}
