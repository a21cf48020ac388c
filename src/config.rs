use serde::Deserialize;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Recommendation service endpoint (POST)
    #[serde(default = "default_recommend_api_url")]
    pub recommend_api_url: String,

    /// IP geolocation endpoint used to guess the user's region
    #[serde(default = "default_geolocation_url")]
    pub geolocation_url: String,

    /// Upper bound on a single recommendation call
    #[serde(default = "default_recommend_timeout_secs")]
    pub recommend_timeout_secs: u64,

    /// Upper bound on the startup geolocation lookup
    #[serde(default = "default_geolocation_timeout_secs")]
    pub geolocation_timeout_secs: u64,

    /// Sessions unused for this long are dropped
    #[serde(default = "default_session_idle_secs")]
    pub session_idle_secs: u64,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_recommend_api_url() -> String {
    "https://suggestions-production-80b8.up.railway.app/api/recommend".to_string()
}

fn default_geolocation_url() -> String {
    "https://ipapi.co/json/".to_string()
}

fn default_recommend_timeout_secs() -> u64 {
    15
}

fn default_geolocation_timeout_secs() -> u64 {
    5
}

fn default_session_idle_secs() -> u64 {
    1800
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn recommend_timeout(&self) -> Duration {
        Duration::from_secs(self.recommend_timeout_secs)
    }

    pub fn geolocation_timeout(&self) -> Duration {
        Duration::from_secs(self.geolocation_timeout_secs)
    }

    pub fn session_idle(&self) -> Duration {
        Duration::from_secs(self.session_idle_secs)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
