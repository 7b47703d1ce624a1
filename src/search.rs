use crate::models::RepoQuery;
use tracing::info;

/// Display surface of the search screen
pub trait SearchView: Send + Sync {
    fn title(&self) -> &str {
        "Search"
    }
}

/// Performs screen transitions on behalf of presenters
pub trait Navigator: Send + Sync {
    /// Show the stargazers of `query`, coming from `origin`.
    fn present_list_screen(&self, query: RepoQuery, origin: &dyn SearchView);

    fn present_search_screen(&self);
}

pub struct SearchPresenter<V, N> {
    view: V,
    navigator: N,
}

impl<V: SearchView, N: Navigator> SearchPresenter<V, N> {
    pub fn new(view: V, navigator: N) -> Self {
        Self { view, navigator }
    }

    /// Accepts any input, empty strings included.
    pub fn search(&self, owner: impl Into<String>, repo: impl Into<String>) {
        let query = RepoQuery::new(owner, repo);
        info!(repo = %query.full_name(), "Searching stargazers");
        self.navigator.present_list_screen(query, &self.view);
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}
