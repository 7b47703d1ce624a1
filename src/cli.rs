use crate::config::{StargazersConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::terminal::Paging;
use clap::Parser;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "stargazers")]
#[command(about = "Stargazers Browser - Search a GitHub repository and page through its stargazers")]
#[command(version)]
pub struct Cli {
    /// Repository owner; given together with REPO it skips the search prompt
    pub owner: Option<String>,

    /// Repository name
    pub repo: Option<String>,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// GitHub token, raises the rate limit
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Stargazers per page (GitHub default is 30)
    #[arg(long, env = "STARGAZERS_PER_PAGE", value_parser = clap::value_parser!(u32).range(1..=100))]
    pub per_page: Option<u32>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Fetch this many pages without prompting, then exit
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: Option<u32>,
}

impl Cli {
    pub fn config(&self) -> StargazersConfig {
        StargazersConfig {
            base_url: self.base_url.clone(),
            token: self.token.clone(),
            per_page: self.per_page,
            timeout: Duration::from_secs(self.timeout),
            ..Default::default()
        }
    }

    pub fn paging(&self) -> Paging {
        match self.pages {
            Some(pages) => Paging::Pages(pages),
            None => Paging::Interactive,
        }
    }
}
