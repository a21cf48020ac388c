//! Outbound collaborators
//!
//! The recommendation service and the IP geolocation lookup sit behind traits so the
//! session logic can be driven by stubs in tests and the live HTTP clients in the binary.

use crate::{
    error::AppResult,
    models::{RecommendationItem, RecommendationRequest},
};

pub mod ipapi;
pub mod recommend_api;

pub use ipapi::IpApiLocator;
pub use recommend_api::RecommendApiProvider;

/// Source of mood-based recommendations
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationProvider: Send + Sync {
    /// Returns the recommended titles, in the order the service ranked them.
    ///
    /// Any transport, status or body-shape problem is an error; callers decide
    /// how to degrade.
    async fn recommend(&self, request: &RecommendationRequest) -> AppResult<Vec<RecommendationItem>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Best-effort guess of the user's country
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RegionLocator: Send + Sync {
    /// Country name, or `None` when the lookup answered without one
    async fn locate(&self) -> AppResult<Option<String>>;

    fn name(&self) -> &'static str;
}
