use serde::{Deserialize, Serialize};

/// Identifies the repository whose stargazers are listed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoQuery {
    pub owner: String,
    pub repo: String,
}

impl RepoQuery {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// One entry of the `/stargazers` response array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stargazer {
    #[serde(rename = "login")]
    pub username: String,
    pub avatar_url: String,
}

impl Stargazer {
    pub fn new(username: impl Into<String>, avatar_url: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            avatar_url: avatar_url.into(),
        }
    }
}

/// Body GitHub sends alongside non-success statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorEnvelope {
    pub message: String,
}

/// Rate limit state read from the `X-RateLimit-*` headers of a response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitState {
    pub remaining: u32,
    pub limit: u32,
    pub reset_time: chrono::DateTime<chrono::Utc>,
    pub is_limited: bool,
}
