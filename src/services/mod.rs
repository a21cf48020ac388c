pub mod fallback;
pub mod fetcher;
pub mod filter;
pub mod providers;
pub mod region;

pub use fetcher::{fetch_recommendations, FetchOutcome, FetchSource};
pub use filter::RecommendationSet;
pub use region::{detect_region, DetectedRegion, UNKNOWN_REGION};
