use crate::actors::{ListPresenterMessage, ListView};
use crate::error::{Result, StargazersError};
use crate::models::Stargazer;
use crate::search::{Navigator, SearchPresenter, SearchView};
use colored::*;
use ractor::ActorRef;
use std::io::{BufRead, Write};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Rows shown so far, in arrival order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StargazerList {
    items: Vec<Stargazer>,
}

impl StargazerList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Concatenate a page onto the list. Duplicates are kept.
    pub fn append(&mut self, page: Vec<Stargazer>) {
        self.items.extend(page);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Stargazer] {
        &self.items
    }

    /// Whether `index` is the last row currently displayed
    pub fn is_last(&self, index: usize) -> bool {
        !self.items.is_empty() && index == self.items.len() - 1
    }
}

/// What the list view reports back to its screen driver
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// The last row of the list has just been displayed
    ReachedLastRow { total: usize },
    /// A page arrived without any rows
    NoMoreRows { total: usize },
    Failed(String),
}

/// Prints stargazer rows to stdout
pub struct TerminalListView {
    list: StargazerList,
    events: mpsc::UnboundedSender<ViewEvent>,
}

impl TerminalListView {
    pub fn new(events: mpsc::UnboundedSender<ViewEvent>) -> Self {
        Self {
            list: StargazerList::new(),
            events,
        }
    }

    pub fn list(&self) -> &StargazerList {
        &self.list
    }

    fn notify(&self, event: ViewEvent) {
        if self.events.send(event).is_err() {
            debug!("List screen closed, view event dropped");
        }
    }
}

impl ListView for TerminalListView {
    fn load(&mut self, stargazers: Vec<Stargazer>) {
        if stargazers.is_empty() {
            self.notify(ViewEvent::NoMoreRows {
                total: self.list.len(),
            });
            return;
        }

        let start = self.list.len();
        self.list.append(stargazers);

        for index in start..self.list.len() {
            let star = &self.list.items()[index];
            println!(
                "{:>5}. {:<32} {}",
                (index + 1).to_string().dimmed(),
                star.username.bold(),
                star.avatar_url.cyan()
            );

            if self.list.is_last(index) {
                self.notify(ViewEvent::ReachedLastRow {
                    total: self.list.len(),
                });
            }
        }
    }

    fn show_error(&mut self, error: StargazersError) {
        eprintln!("{} {}", "Error:".red().bold(), error);
        self.notify(ViewEvent::Failed(error.to_string()));
    }
}

#[derive(Debug, Default)]
pub struct TerminalSearchView;

impl SearchView for TerminalSearchView {}

/// Line-oriented input for the screens.
///
/// Lines are read on a plain OS thread and handed over through a channel,
/// so a pending read never keeps the runtime from shutting down.
pub struct Prompt {
    lines: mpsc::UnboundedReceiver<std::io::Result<String>>,
}

impl Prompt {
    pub fn stdin() -> Self {
        Self::from_reader(std::io::BufReader::new(std::io::stdin()))
    }

    pub fn from_reader<R>(reader: R) -> Self
    where
        R: BufRead + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        std::thread::spawn(move || {
            for line in reader.lines() {
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
        Self { lines: rx }
    }

    /// Answers the given lines in order, then behaves as closed input.
    pub fn scripted<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        for answer in answers {
            let _ = tx.send(Ok(answer.into()));
        }
        Self { lines: rx }
    }

    /// Returns `None` once input is closed.
    pub async fn ask(&mut self, label: &str) -> Result<Option<String>> {
        print!("{} ", label.bold());
        std::io::stdout().flush()?;
        match self.lines.recv().await {
            Some(line) => Ok(Some(line?.trim().to_string())),
            None => Ok(None),
        }
    }
}

/// How a screen driver wants the application to carry on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// When the "reached the last row" signal is raised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paging {
    /// Ask before every further page
    Interactive,
    /// Fetch this many pages, then leave the screen
    Pages(u32),
}

/// Reads owner and repository, then hands them to the presenter.
pub async fn run_search_screen<V, N>(
    presenter: &SearchPresenter<V, N>,
    prompt: &mut Prompt,
) -> Result<Flow>
where
    V: SearchView,
    N: Navigator,
{
    println!("\n{}", presenter.view().title().bold().green());

    let Some(owner) = prompt.ask("Owner:").await? else {
        return Ok(Flow::Quit);
    };
    let Some(repo) = prompt.ask("Repository:").await? else {
        return Ok(Flow::Quit);
    };

    presenter.search(owner, repo);
    Ok(Flow::Continue)
}

/// A running stargazers list: the presenter actor plus the view's event feed
pub struct ListScreen {
    presenter: ActorRef<ListPresenterMessage>,
    handle: JoinHandle<()>,
    events: mpsc::UnboundedReceiver<ViewEvent>,
}

impl ListScreen {
    pub fn new(
        presenter: ActorRef<ListPresenterMessage>,
        handle: JoinHandle<()>,
        events: mpsc::UnboundedReceiver<ViewEvent>,
    ) -> Self {
        Self {
            presenter,
            handle,
            events,
        }
    }

    pub async fn run(mut self, prompt: &mut Prompt, paging: Paging) -> anyhow::Result<Flow> {
        println!("\n{}", "Stargazers".bold().green());
        println!("{}", "=".repeat(50).dimmed());

        self.send(ListPresenterMessage::Fetch)?;
        let mut pages_requested = 1;

        let flow = loop {
            let Some(event) = self.events.recv().await else {
                break Flow::Continue;
            };

            let (exhausted, failed) = match event {
                ViewEvent::ReachedLastRow { .. } => (false, false),
                ViewEvent::NoMoreRows { total } => {
                    println!("{} ({} in total)", "No more stargazers.".yellow(), total);
                    (true, false)
                }
                ViewEvent::Failed(_) => (false, true),
            };

            match paging {
                Paging::Pages(limit) => {
                    if exhausted || failed || pages_requested >= limit {
                        break Flow::Continue;
                    }
                }
                Paging::Interactive => {
                    match prompt.ask("[Enter] next page, [q] back:").await? {
                        None => break Flow::Quit,
                        Some(answer) if answer.eq_ignore_ascii_case("q") => break Flow::Continue,
                        Some(_) => {}
                    }
                }
            }

            self.send(ListPresenterMessage::FetchNext)?;
            pages_requested += 1;
        };

        self.presenter.stop(None);
        if let Err(e) = self.handle.await {
            debug!("List presenter task ended abnormally: {}", e);
        }

        Ok(flow)
    }

    fn send(&self, message: ListPresenterMessage) -> anyhow::Result<()> {
        self.presenter
            .send_message(message)
            .map_err(|_| anyhow::anyhow!("List presenter is not running"))
    }
}
