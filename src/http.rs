use crate::config::StargazersConfig;
use crate::error::{BoxError, Result};
use crate::models::RateLimitState;
use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use std::future::Future;
use url::Url;

/// Raw outcome of a GET that reached the server.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
    pub rate_limit: Option<RateLimitState>,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
            rate_limit: None,
        }
    }
}

/// Transport used by the stargazer service.
///
/// An `Err` means the request never produced a response (DNS, connect,
/// timeout, TLS). Any status code, including 4xx/5xx, is an `Ok`.
pub trait HttpClient: Send + Sync + 'static {
    fn get(
        &self,
        url: &Url,
    ) -> impl Future<Output = std::result::Result<HttpResponse, BoxError>> + Send;
}

/// `reqwest` backed client talking to the GitHub REST API
pub struct ReqwestClient {
    client: Client,
    token: Option<String>,
}

impl ReqwestClient {
    pub fn new(config: &StargazersConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(ReqwestClient {
            client,
            token: config.token.clone(),
        })
    }
}

impl HttpClient for ReqwestClient {
    async fn get(&self, url: &Url) -> std::result::Result<HttpResponse, BoxError> {
        let mut request = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/vnd.github.v3+json");

        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("token {}", token));
        }

        let response = request.send().await?;
        let status = response.status();
        let rate_limit = rate_limit_state(response.headers());
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse {
            status,
            body,
            rate_limit,
        })
    }
}

/// Read the rate limit headers, if the server sent any
pub fn rate_limit_state(headers: &HeaderMap) -> Option<RateLimitState> {
    let header = |name: &str| headers.get(name).and_then(|h| h.to_str().ok());

    let remaining = header("X-RateLimit-Remaining")?.parse::<u32>().ok()?;

    let limit = header("X-RateLimit-Limit")
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(remaining);

    let reset_time = header("X-RateLimit-Reset")
        .and_then(|s| s.parse::<i64>().ok())
        .and_then(|timestamp| DateTime::<Utc>::from_timestamp(timestamp, 0))
        .unwrap_or_else(|| Utc::now() + chrono::Duration::hours(1));

    Some(RateLimitState {
        remaining,
        limit,
        reset_time,
        is_limited: remaining == 0,
    })
}
