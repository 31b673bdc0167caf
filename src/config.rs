//! Runtime configuration.
//!
//! Values come from the environment with typed defaults; nothing is persisted.

use bevy::prelude::*;

/// Environment variable holding the NASA API key.
pub const API_KEY_ENV: &str = "NASA_API_KEY";

/// Environment variable overriding the NeoWs base URL.
pub const API_URL_ENV: &str = "NEO_API_URL";

/// Key accepted by api.nasa.gov with a low rate limit.
pub const DEMO_API_KEY: &str = "DEMO_KEY";

/// Default NeoWs REST endpoint.
pub const DEFAULT_API_URL: &str = "https://api.nasa.gov/neo/rest/v1";

/// Camera animation duration in milliseconds.
pub const DEFAULT_ANIMATION_MS: f64 = 1000.0;

/// Screen-space pick radius in logical pixels.
pub const DEFAULT_PICK_RADIUS: f32 = 24.0;

/// Application configuration resource.
#[derive(Resource, Clone, Debug)]
pub struct OrreryConfig {
    /// API key appended to every NeoWs request.
    pub api_key: String,
    /// NeoWs base URL without trailing slash.
    pub api_url: String,
    /// Camera animation duration in milliseconds.
    pub animation_ms: f64,
    /// Number of segments per orbit polyline.
    pub orbit_segments: usize,
    /// Maximum cursor distance from an object's projection that selects it.
    pub pick_radius: f32,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            api_key: DEMO_API_KEY.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            animation_ms: DEFAULT_ANIMATION_MS,
            orbit_segments: crate::orbit::DEFAULT_SEGMENTS,
            pick_radius: DEFAULT_PICK_RADIUS,
        }
    }
}

impl OrreryConfig {
    /// Build from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(key) = non_empty(API_KEY_ENV) {
            config.api_key = key;
        }
        if let Some(url) = non_empty(API_URL_ENV) {
            config.api_url = url.trim_end_matches('/').to_string();
        }
        config
    }

    /// Whether requests go out with the shared demo key.
    pub fn uses_demo_key(&self) -> bool {
        self.api_key == DEMO_API_KEY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        let config = OrreryConfig::from_lookup(|_| None);
        assert_eq!(config.api_key, DEMO_API_KEY);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.animation_ms, 1000.0);
        assert!(config.uses_demo_key());
    }

    #[test]
    fn test_env_overrides() {
        let config = OrreryConfig::from_lookup(|key| match key {
            API_KEY_ENV => Some("abc123".to_string()),
            API_URL_ENV => Some("http://localhost:8080/neo/".to_string()),
            _ => None,
        });
        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.api_url, "http://localhost:8080/neo");
        assert!(!config.uses_demo_key());
    }

    #[test]
    fn test_blank_values_ignored() {
        let config = OrreryConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config.api_key, DEMO_API_KEY);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }
}
