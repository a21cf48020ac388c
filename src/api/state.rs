use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::{
    sync::RwLock,
    task::JoinHandle,
    time::{Instant, MissedTickBehavior},
};
use uuid::Uuid;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    services::{
        providers::{IpApiLocator, RecommendApiProvider, RecommendationProvider, RegionLocator},
        FetchOutcome,
    },
    session::{Session, SessionView},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    pub recommender: Arc<dyn RecommendationProvider>,
    pub locator: Arc<dyn RegionLocator>,
}

impl AppState {
    pub fn new(
        recommender: Arc<dyn RecommendationProvider>,
        locator: Arc<dyn RegionLocator>,
    ) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            recommender,
            locator,
        }
    }

    /// Wires the live HTTP providers from configuration
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let recommender =
            RecommendApiProvider::new(config.recommend_api_url.clone(), config.recommend_timeout())?;
        let locator =
            IpApiLocator::new(config.geolocation_url.clone(), config.geolocation_timeout())?;

        Ok(Self::new(Arc::new(recommender), Arc::new(locator)))
    }

    /// Runs `f` against one session under the write lock and marks it as used
    pub async fn with_session<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Session) -> AppResult<T>,
    ) -> AppResult<T> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Session {} not found", id)))?;
        session.touch();
        f(session)
    }

    /// Drops sessions whose client has been away for at least `max_idle`
    ///
    /// Sessions with a fetch in flight are kept; the fetch task still owns them.
    pub async fn evict_idle(&self, max_idle: Duration) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.is_loading() || session.idle_for(now) < max_idle);
        let evicted = before - sessions.len();

        if evicted > 0 {
            tracing::info!(evicted, remaining = sessions.len(), "Evicted idle sessions");
        }
        evicted
    }

    /// Periodically evicts idle sessions for the life of the process
    pub fn start_idle_sweep(&self, max_idle: Duration) -> JoinHandle<()> {
        let state = self.clone();
        let period = (max_idle / 2).max(Duration::from_secs(1));
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                state.evict_idle(max_idle).await;
            }
        })
    }

    /// Installs a finished fetch into the session and returns the new view
    pub async fn finish_fetch(&self, id: Uuid, outcome: FetchOutcome) -> AppResult<SessionView> {
        let source = outcome.source;
        let results = outcome.items.len();

        let view = self
            .with_session(id, move |session| {
                session.complete_fetch(outcome, Utc::now());
                Ok(session.view())
            })
            .await?;

        tracing::info!(session_id = %id, source = ?source, results, "Recommendations installed");
        Ok(view)
    }
}
