use crate::actors::{ListPresenter, ListPresenterArgs};
use crate::config::StargazersConfig;
use crate::github::StargazerService;
use crate::http::ReqwestClient;
use crate::interactor::GetStargazersInteractor;
use crate::models::RepoQuery;
use crate::search::{Navigator, SearchPresenter, SearchView};
use crate::terminal::{ListScreen, TerminalListView, TerminalSearchView};
use ractor::Actor;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Screen the application should show next
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Search,
    List(RepoQuery),
}

/// Navigator that queues routes for the main loop to act on
#[derive(Debug, Clone)]
pub struct Wireframe {
    routes: mpsc::UnboundedSender<Route>,
}

impl Wireframe {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Route>) {
        let (routes, receiver) = mpsc::unbounded_channel();
        (Self { routes }, receiver)
    }

    fn push(&self, route: Route) {
        if self.routes.send(route).is_err() {
            debug!("Route receiver closed, navigation ignored");
        }
    }
}

impl Navigator for Wireframe {
    fn present_list_screen(&self, query: RepoQuery, origin: &dyn SearchView) {
        info!(from = origin.title(), repo = %query.full_name(), "Presenting stargazers list");
        self.push(Route::List(query));
    }

    fn present_search_screen(&self) {
        self.push(Route::Search);
    }
}

/// Queue the first screen. With both parts of the query known the search
/// screen is skipped; returns whether that happened.
pub fn present_initial_screen<V, N>(
    search: &SearchPresenter<V, N>,
    navigator: &N,
    owner: Option<String>,
    repo: Option<String>,
) -> bool
where
    V: SearchView,
    N: Navigator,
{
    match (owner, repo) {
        (Some(owner), Some(repo)) => {
            search.search(owner, repo);
            true
        }
        _ => {
            navigator.present_search_screen();
            false
        }
    }
}

pub type StargazersInteractor = GetStargazersInteractor<StargazerService<ReqwestClient>>;

pub type StargazersPresenter = ListPresenter<StargazersInteractor, TerminalListView>;

/// Assembles the search screen
pub struct SearchRouter {
    wireframe: Wireframe,
}

impl SearchRouter {
    pub fn new(wireframe: Wireframe) -> Self {
        Self { wireframe }
    }

    pub fn load(self) -> SearchPresenter<TerminalSearchView, Wireframe> {
        SearchPresenter::new(TerminalSearchView, self.wireframe)
    }
}

/// Assembles a stargazers list screen for one repository
pub struct ListRouter<'a> {
    config: &'a StargazersConfig,
    query: RepoQuery,
}

impl<'a> ListRouter<'a> {
    pub fn new(config: &'a StargazersConfig, query: RepoQuery) -> Self {
        Self { config, query }
    }

    pub async fn load(self) -> anyhow::Result<ListScreen> {
        let client = ReqwestClient::new(self.config)?;
        let service = StargazerService::new(client, self.config);
        let interactor = GetStargazersInteractor::new(service);

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let args = ListPresenterArgs {
            query: self.query,
            workflow: interactor,
            view: TerminalListView::new(events_tx),
        };

        let (presenter, handle) = Actor::spawn(None, StargazersPresenter::new(), args)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to start list presenter: {}", e))?;

        Ok(ListScreen::new(presenter, handle, events_rx))
    }
}
