use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings shared by every screen, built once at startup and passed down.
#[derive(Debug, Clone)]
pub struct StargazersConfig {
    /// API root the stargazers path is appended to
    pub base_url: String,
    pub token: Option<String>,
    /// Sent as `per_page` when set; GitHub defaults to 30 otherwise.
    pub per_page: Option<u32>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl StargazersConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

impl Default for StargazersConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            per_page: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("Stargazers Browser/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
