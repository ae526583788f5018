use std::env;
use std::time::Duration;

const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

/// Settings shared by every component that talks to an upstream service.
///
/// Nominatim's usage policy requires an identifying User-Agent, so the agent
/// string is an explicit field here rather than a library default.
#[derive(Debug, Clone)]
pub struct GeoConfig {
    pub user_agent: String,
    pub nominatim_url: String,
    pub overpass_url: String,
    pub lookup_timeout: Duration,
}

impl GeoConfig {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            nominatim_url: DEFAULT_NOMINATIM_URL.to_string(),
            overpass_url: DEFAULT_OVERPASS_URL.to_string(),
            lookup_timeout: Duration::from_secs(30),
        }
    }

    /// Builds a config from the environment, falling back to defaults for
    /// anything unset. Call `dotenvy::dotenv()` first if a `.env` file should
    /// be honored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(agent) = env::var("ADDRMAP_USER_AGENT") {
            config.user_agent = agent;
        }
        if let Ok(url) = env::var("ADDRMAP_NOMINATIM_URL") {
            config.nominatim_url = url;
        }
        if let Ok(url) = env::var("ADDRMAP_OVERPASS_URL") {
            config.overpass_url = url;
        }
        config
    }
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self::new(concat!("addrmap/", env!("CARGO_PKG_VERSION")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_carries_crate_version_agent() {
        let config = GeoConfig::default();
        assert!(config.user_agent.starts_with("addrmap/"));
        assert_eq!(config.lookup_timeout, Duration::from_secs(30));
    }

    #[test]
    fn explicit_agent_overrides_default() {
        let config = GeoConfig::new("my-app/1.0");
        assert_eq!(config.user_agent, "my-app/1.0");
        assert_eq!(config.nominatim_url, DEFAULT_NOMINATIM_URL);
    }
}
