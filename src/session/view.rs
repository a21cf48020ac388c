use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::FeedbackEvent;
use crate::models::{Category, CategoryCounts, FormState, RecommendationItem};

/// Snapshot of a session as the client renders it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub id: Uuid,
    pub form: FormState,
    pub thoughts_len: usize,
    pub thoughts_max: usize,
    /// Geolocated country, `None` while the lookup is still running
    pub auto_region: Option<String>,
    /// Placeholder for the region field
    pub region_hint: String,
    pub loading: bool,
    pub feedback: Vec<FeedbackEvent>,
    pub results: ResultsView,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResultStatus {
    /// Nothing requested yet in this session
    NotFetched,
    /// A list exists but the active filter matches nothing in it
    Empty,
    Ready,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsView {
    pub visible: bool,
    pub status: ResultStatus,
    pub active_filter: Category,
    pub counts: CategoryCounts,
    /// Filtered items with posters already resolved
    pub items: Vec<RecommendationItem>,
    /// When the client should scroll the result panel into view
    pub reveal_at: Option<DateTime<Utc>>,
}
