/// Base URL used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";

/// Environment variable consulted by [`ClientConfig::from_env`].
pub const BASE_URL_ENV: &str = "INFOHUB_API_BASE_URL";

/// Strip trailing slashes; blank input falls back to [`DEFAULT_BASE_URL`].
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Settings for [`InfoHubClient`](crate::InfoHubClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
        }
    }

    /// Read the base URL from `INFOHUB_API_BASE_URL`.
    pub fn from_env() -> Self {
        let raw = std::env::var(BASE_URL_ENV).unwrap_or_default();
        Self::new(&raw)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
