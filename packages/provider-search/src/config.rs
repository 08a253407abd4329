//! Backend location, resolved once at startup and passed down explicitly.

/// Environment variable naming the backend base URL.
pub const API_URL_ENV: &str = "PROVIDER_API_URL";

/// Used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Provider directory API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// First non-blank candidate wins, else [`DEFAULT_API_URL`].
    pub fn resolve<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Self {
        let url = candidates
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_URL);
        Self::new(url)
    }

    /// Load from `PROVIDER_API_URL` (reading `.env` first, if present).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_env_or(None)
    }

    /// `explicit` (e.g. a CLI flag) wins when non-blank, then `PROVIDER_API_URL`,
    /// then the default.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env_or(explicit: Option<&str>) -> Self {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let from_env = std::env::var(API_URL_ENV).ok();
        Self::resolve([explicit, from_env.as_deref()])
    }

    /// Value baked in at compile time. Browser builds have no process environment.
    pub fn from_build_env() -> Self {
        Self::resolve([option_env!("PROVIDER_API_URL")])
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/api/health`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ApiConfig::new("http://api.example.com/");
        assert_eq!(config.base_url(), "http://api.example.com");
        assert_eq!(
            config.endpoint("/api/search/providers"),
            "http://api.example.com/api/search/providers"
        );
    }

    #[test]
    fn resolve_skips_blank_candidates() {
        let config = ApiConfig::resolve([None, Some("   "), Some("https://directory.test")]);
        assert_eq!(config.base_url(), "https://directory.test");
    }

    #[test]
    fn blank_explicit_value_falls_through_to_env() {
        std::env::set_var(API_URL_ENV, "http://env.directory.test/");

        let blank = ApiConfig::from_env_or(Some("  "));
        let explicit = ApiConfig::from_env_or(Some("http://flag.directory.test"));
        let unset = ApiConfig::from_env_or(None);

        std::env::remove_var(API_URL_ENV);

        assert_eq!(blank.base_url(), "http://env.directory.test");
        assert_eq!(explicit.base_url(), "http://flag.directory.test");
        assert_eq!(unset.base_url(), "http://env.directory.test");
    }

    #[test]
    fn resolve_falls_back_to_local_default() {
        let config = ApiConfig::resolve([None, Some("")]);
        assert_eq!(config.base_url(), DEFAULT_API_URL);
        assert_eq!(config, ApiConfig::default());
    }
}
