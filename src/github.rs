use crate::config::StargazersConfig;
use crate::error::{Result, StargazersError};
use crate::http::{HttpClient, HttpResponse};
use crate::models::{ApiErrorEnvelope, RepoQuery, Stargazer};
use std::future::Future;
use tracing::{debug, warn};
use url::Url;

/// Remaining-request count under which every response logs a warning
const RATE_LIMIT_WARN_THRESHOLD: u32 = 10;

/// Source of stargazer pages.
///
/// Building the request and executing it are separate steps so that a
/// failure to construct the URL can be told apart from a failed transfer.
pub trait StargazerSource: Send + Sync + 'static {
    fn stargazers_url(&self, query: &RepoQuery, page: u32) -> Result<Url>;

    fn fetch_stargazers(&self, url: Url) -> impl Future<Output = Result<Vec<Stargazer>>> + Send;
}

pub struct StargazerService<C> {
    client: C,
    base_url: String,
    per_page: Option<u32>,
}

impl<C: HttpClient> StargazerService<C> {
    pub fn new(client: C, config: &StargazersConfig) -> Self {
        StargazerService {
            client,
            base_url: config.base_url.clone(),
            per_page: config.per_page,
        }
    }

    /// Fetch one page of stargazers for a repository
    pub async fn fetch_stargazers_page(
        &self,
        query: &RepoQuery,
        page: u32,
    ) -> Result<Vec<Stargazer>> {
        let url = self.stargazers_url(query, page)?;
        self.fetch_stargazers(url).await
    }
}

impl<C: HttpClient> StargazerSource for StargazerService<C> {
    fn stargazers_url(&self, query: &RepoQuery, page: u32) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| StargazersError::InvalidRepoUrl(format!("{}: {}", self.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| {
                StargazersError::InvalidRepoUrl(format!("{} cannot be a base URL", self.base_url))
            })?
            .pop_if_empty()
            .extend(["repos", query.owner.as_str(), query.repo.as_str(), "stargazers"]);

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("page", &page.to_string());
            if let Some(per_page) = self.per_page {
                pairs.append_pair("per_page", &per_page.to_string());
            }
        }

        Ok(url)
    }

    async fn fetch_stargazers(&self, url: Url) -> Result<Vec<Stargazer>> {
        debug!(%url, "Requesting stargazers page");

        let response = self
            .client
            .get(&url)
            .await
            .map_err(StargazersError::TransportError)?;

        if let Some(rate_limit) = &response.rate_limit {
            if rate_limit.remaining < RATE_LIMIT_WARN_THRESHOLD {
                warn!(
                    remaining = rate_limit.remaining,
                    limit = rate_limit.limit,
                    reset_time = %rate_limit.reset_time,
                    "GitHub rate limit nearly exhausted"
                );
            }
        }

        decode_stargazers(response)
    }
}

/// Turn a response into stargazers, or into the error GitHub reported.
pub fn decode_stargazers(response: HttpResponse) -> Result<Vec<Stargazer>> {
    let status = response.status;

    if !status.is_success() {
        let message = match serde_json::from_slice::<ApiErrorEnvelope>(&response.body) {
            Ok(envelope) => envelope.message,
            Err(_) => format!("Request failed with status {}", status),
        };
        warn!(%status, %message, "GitHub returned an error");
        return Err(StargazersError::ApiError(message));
    }

    let stargazers: Vec<Stargazer> = serde_json::from_slice(&response.body)?;
    debug!(count = stargazers.len(), "Decoded stargazers page");
    Ok(stargazers)
}
