use crate::error::StargazersError;
use crate::interactor::{FetchOutput, FetchWorkflow};
use crate::models::{RepoQuery, Stargazer};
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use std::marker::PhantomData;
use tracing::{debug, info};

/// Display surface driven by the list presenter
pub trait ListView: Send + 'static {
    /// Append a freshly fetched page to what is already shown.
    fn load(&mut self, stargazers: Vec<Stargazer>);

    fn show_error(&mut self, error: StargazersError);
}

/// Messages the list presenter can handle
#[derive(Debug)]
pub enum ListPresenterMessage {
    /// Fetch the current page, used once when the screen appears
    Fetch,
    /// The view reached its last row; advance the page and fetch it
    FetchNext,
    /// A fetch completed with a page of stargazers
    Stargazers(Vec<Stargazer>),
    /// A fetch failed
    Error(StargazersError),
    /// Report the page counter
    CurrentPage(RpcReplyPort<u32>),
}

/// Presenter for one stargazers list screen.
///
/// The page counter advances on every `FetchNext` whether or not the
/// previous page arrived, and nothing stops two fetches from being in
/// flight; pages are shown in the order their responses land.
pub struct ListPresenter<W, V> {
    _marker: PhantomData<fn() -> (W, V)>,
}

impl<W, V> ListPresenter<W, V> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<W, V> Default for ListPresenter<W, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// State for the list presenter
pub struct ListPresenterState<W, V> {
    query: RepoQuery,
    page: u32,
    workflow: W,
    view: V,
}

/// Arguments for starting the presenter
pub struct ListPresenterArgs<W, V> {
    pub query: RepoQuery,
    pub workflow: W,
    pub view: V,
}

#[ractor::async_trait]
impl<W, V> Actor for ListPresenter<W, V>
where
    W: FetchWorkflow,
    V: ListView,
{
    type Msg = ListPresenterMessage;
    type State = ListPresenterState<W, V>;
    type Arguments = ListPresenterArgs<W, V>;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        args: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        info!(repo = %args.query.full_name(), "List presenter starting");

        Ok(ListPresenterState {
            query: args.query,
            page: 1,
            workflow: args.workflow,
            view: args.view,
        })
    }

    async fn handle(
        &self,
        myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            ListPresenterMessage::Fetch => {
                debug!(page = state.page, "Fetching stargazers");
                state.workflow.perform(&state.query, state.page, myself);
            }
            ListPresenterMessage::FetchNext => {
                state.page += 1;
                debug!(page = state.page, "Fetching next stargazers page");
                state.workflow.perform(&state.query, state.page, myself);
            }
            ListPresenterMessage::Stargazers(list) => {
                state.view.load(list);
            }
            ListPresenterMessage::Error(error) => {
                state.view.show_error(error);
            }
            ListPresenterMessage::CurrentPage(reply) => {
                if reply.send(state.page).is_err() {
                    debug!("Page counter requester went away");
                }
            }
        }

        Ok(())
    }

    async fn post_stop(
        &self,
        _myself: ActorRef<Self::Msg>,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        info!(
            repo = %state.query.full_name(),
            last_page = state.page,
            "List presenter stopped"
        );
        Ok(())
    }
}

/// Deliveries to a stopped presenter are dropped.
impl FetchOutput for ActorRef<ListPresenterMessage> {
    fn stargazers(self, list: Vec<Stargazer>) {
        if self.send_message(ListPresenterMessage::Stargazers(list)).is_err() {
            debug!("List presenter gone, dropping stargazers page");
        }
    }

    fn error(self, error: StargazersError) {
        if self.send_message(ListPresenterMessage::Error(error)).is_err() {
            debug!("List presenter gone, dropping fetch error");
        }
    }
}
