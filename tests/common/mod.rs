#![allow(dead_code)]

use ractor::rpc::CallResult;
use ractor::{Actor, ActorRef};
use reqwest::StatusCode;
use stargazers::actors::{ListPresenter, ListPresenterArgs, ListPresenterMessage, ListView};
use stargazers::config::StargazersConfig;
use stargazers::error::{BoxError, StargazersError};
use stargazers::github::StargazerService;
use stargazers::http::{HttpClient, HttpResponse};
use stargazers::interactor::{FetchOutput, FetchWorkflow, GetStargazersInteractor};
use stargazers::models::{RepoQuery, Stargazer};
use stargazers::search::{Navigator, SearchView};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use url::Url;

pub const VALID_STARGAZERS: &str = include_str!("../fixtures/valid_stargazer.json");
pub const VALID_ERROR: &str = include_str!("../fixtures/valid_error.json");

pub const SAMPLE_BASE_URL: &str = "https://sample.com";

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct FakeError(pub String);

#[derive(Debug, Clone)]
enum Scripted {
    Respond(HttpResponse),
    Fail(String),
}

/// HTTP client answering every request the same way
pub struct MockHttpClient {
    script: Scripted,
    requests: Arc<Mutex<Vec<Url>>>,
}

impl MockHttpClient {
    pub fn respond(status: StatusCode, body: &str) -> Self {
        Self {
            script: Scripted::Respond(HttpResponse::new(status, body)),
            requests: Arc::default(),
        }
    }

    pub fn fail(message: &str) -> Self {
        Self {
            script: Scripted::Fail(message.to_string()),
            requests: Arc::default(),
        }
    }

    pub fn requests(&self) -> Arc<Mutex<Vec<Url>>> {
        Arc::clone(&self.requests)
    }
}

impl HttpClient for MockHttpClient {
    async fn get(&self, url: &Url) -> Result<HttpResponse, BoxError> {
        self.requests.lock().unwrap().push(url.clone());
        match &self.script {
            Scripted::Respond(response) => Ok(response.clone()),
            Scripted::Fail(message) => Err(Box::new(FakeError(message.clone()))),
        }
    }
}

pub fn sample_config() -> StargazersConfig {
    StargazersConfig::new(SAMPLE_BASE_URL)
}

pub fn sample_interactor(
    client: MockHttpClient,
) -> GetStargazersInteractor<StargazerService<MockHttpClient>> {
    GetStargazersInteractor::new(StargazerService::new(client, &sample_config()))
}

#[derive(Debug, Default)]
pub struct Delivered {
    pub stargazers: Vec<Vec<Stargazer>>,
    pub errors: Vec<StargazersError>,
}

/// Fetch output that keeps whatever it receives
#[derive(Clone, Default)]
pub struct RecordingOutput {
    pub delivered: Arc<Mutex<Delivered>>,
}

impl FetchOutput for RecordingOutput {
    fn stargazers(self, list: Vec<Stargazer>) {
        self.delivered.lock().unwrap().stargazers.push(list);
    }

    fn error(self, error: StargazersError) {
        self.delivered.lock().unwrap().errors.push(error);
    }
}

/// List view that keeps every call it receives
#[derive(Clone, Default)]
pub struct RecordingView {
    pub calls: Arc<Mutex<Delivered>>,
}

impl ListView for RecordingView {
    fn load(&mut self, stargazers: Vec<Stargazer>) {
        self.calls.lock().unwrap().stargazers.push(stargazers);
    }

    fn show_error(&mut self, error: StargazersError) {
        self.calls.lock().unwrap().errors.push(error);
    }
}

/// Workflow that records requested pages, optionally failing each one at once
#[derive(Clone, Default)]
pub struct RecordingWorkflow {
    pub performed: Arc<Mutex<Vec<(RepoQuery, u32)>>>,
    pub fail_with: Option<String>,
}

impl RecordingWorkflow {
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn pages(&self) -> Vec<u32> {
        self.performed.lock().unwrap().iter().map(|(_, page)| *page).collect()
    }
}

impl FetchWorkflow for RecordingWorkflow {
    fn perform<O: FetchOutput>(&self, query: &RepoQuery, page: u32, output: O) {
        self.performed.lock().unwrap().push((query.clone(), page));
        if let Some(message) = &self.fail_with {
            output.error(StargazersError::ApiError(message.clone()));
        }
    }
}

/// Navigator that records each requested transition
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    pub list_screens: Arc<Mutex<Vec<(RepoQuery, String)>>>,
    pub search_screens: Arc<Mutex<usize>>,
}

impl Navigator for RecordingNavigator {
    fn present_list_screen(&self, query: RepoQuery, origin: &dyn SearchView) {
        self.list_screens
            .lock()
            .unwrap()
            .push((query, origin.title().to_string()));
    }

    fn present_search_screen(&self) {
        *self.search_screens.lock().unwrap() += 1;
    }
}

pub async fn spawn_presenter<W, V>(
    query: RepoQuery,
    workflow: W,
    view: V,
) -> (ActorRef<ListPresenterMessage>, JoinHandle<()>)
where
    W: FetchWorkflow,
    V: ListView,
{
    let args = ListPresenterArgs {
        query,
        workflow,
        view,
    };
    Actor::spawn(None, ListPresenter::<W, V>::new(), args)
        .await
        .expect("Failed to spawn list presenter")
}

/// Ask the presenter for its page counter; also drains earlier messages.
pub async fn current_page(presenter: &ActorRef<ListPresenterMessage>) -> u32 {
    let reply = presenter
        .call(
            |reply| ListPresenterMessage::CurrentPage(reply),
            Some(Duration::from_secs(5)),
        )
        .await
        .expect("Failed to call list presenter");

    match reply {
        CallResult::Success(page) => page,
        _ => panic!("Expected page counter reply"),
    }
}

pub async fn wait_until<F: Fn() -> bool>(condition: F) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while !condition() {
        assert!(
            tokio::time::Instant::now() < deadline,
            "Condition not met within 5 seconds"
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

/// Outcome a `ScriptedWorkflow` delivers for one page
#[derive(Debug, Clone)]
pub enum PageOutcome {
    Rows(usize),
    Fail(String),
}

/// Workflow that answers pages in order from a script; pages past its end are empty
#[derive(Clone, Default)]
pub struct ScriptedWorkflow {
    pub performed: Arc<Mutex<Vec<u32>>>,
    outcomes: Arc<Mutex<std::collections::VecDeque<PageOutcome>>>,
}

impl ScriptedWorkflow {
    pub fn new(outcomes: Vec<PageOutcome>) -> Self {
        Self {
            performed: Arc::default(),
            outcomes: Arc::new(Mutex::new(outcomes.into())),
        }
    }

    pub fn pages(&self) -> Vec<u32> {
        self.performed.lock().unwrap().clone()
    }
}

impl FetchWorkflow for ScriptedWorkflow {
    fn perform<O: FetchOutput>(&self, _query: &RepoQuery, page: u32, output: O) {
        self.performed.lock().unwrap().push(page);
        let outcome = self.outcomes.lock().unwrap().pop_front();
        match outcome {
            Some(PageOutcome::Rows(count)) => output.stargazers(
                (0..count)
                    .map(|i| {
                        Stargazer::new(
                            format!("user{}-{}", page, i),
                            format!("https://avatars.example.com/{}/{}", page, i),
                        )
                    })
                    .collect(),
            ),
            Some(PageOutcome::Fail(message)) => output.error(StargazersError::ApiError(message)),
            None => output.stargazers(Vec::new()),
        }
    }
}
