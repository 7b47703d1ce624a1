use crate::error::StargazersError;
use crate::github::StargazerSource;
use crate::models::{RepoQuery, Stargazer};
use std::sync::Arc;
use tracing::{debug, warn};

/// Receiver of a single fetch outcome.
///
/// Both methods take `self`, so an output can be completed at most once.
pub trait FetchOutput: Send + 'static {
    fn stargazers(self, list: Vec<Stargazer>);

    fn error(self, error: StargazersError);
}

/// Performs one stargazers fetch per call and hands the outcome to `output`.
pub trait FetchWorkflow: Send + Sync + 'static {
    fn perform<O: FetchOutput>(&self, query: &RepoQuery, page: u32, output: O);
}

pub struct GetStargazersInteractor<S> {
    service: Arc<S>,
}

impl<S> Clone for GetStargazersInteractor<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl<S: StargazerSource> GetStargazersInteractor<S> {
    pub fn new(service: S) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Run the fetch on the current task and deliver its outcome.
    pub async fn execute<O: FetchOutput>(&self, query: &RepoQuery, page: u32, output: O) {
        let outcome = match self.service.stargazers_url(query, page) {
            Ok(url) => self.service.fetch_stargazers(url).await,
            Err(e) => {
                warn!(repo = %query.full_name(), page, "Could not build stargazers request: {}", e);
                Err(e)
            }
        };

        match outcome {
            Ok(list) => {
                debug!(repo = %query.full_name(), page, count = list.len(), "Stargazers page fetched");
                output.stargazers(list);
            }
            Err(e) => {
                warn!(repo = %query.full_name(), page, "Stargazers fetch failed: {}", e);
                output.error(e);
            }
        }
    }
}

impl<S: StargazerSource> FetchWorkflow for GetStargazersInteractor<S> {
    fn perform<O: FetchOutput>(&self, query: &RepoQuery, page: u32, output: O) {
        let interactor = self.clone();
        let query = query.clone();

        tokio::spawn(async move {
            interactor.execute(&query, page, output).await;
        });
    }
}
