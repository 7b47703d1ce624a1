use clap::Parser;
use colored::*;
use stargazers::cli::Cli;
use stargazers::search::Navigator;
use stargazers::terminal::{run_search_screen, Flow, Prompt};
use stargazers::wireframe::{present_initial_screen, ListRouter, Route, SearchRouter, Wireframe};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    // Logs go to stderr so they stay out of the listing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    println!("{}", "GitHub Stargazers Browser".bold().green());
    println!("{}", "=".repeat(50).dimmed());

    tokio::select! {
        result = run(cli) => result,
        _ = tokio::signal::ctrl_c() => {
            println!("\n🛑 Interrupted");
            Ok(())
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config();
    let paging = cli.paging();

    let (wireframe, mut routes) = Wireframe::new();
    let search = SearchRouter::new(wireframe.clone()).load();

    // With both positionals the app exits once the list screen is left.
    let single_query = present_initial_screen(&search, &wireframe, cli.owner, cli.repo);

    let mut prompt = Prompt::stdin();

    while let Some(route) = routes.recv().await {
        info!(?route, "Navigating");

        let flow = match route {
            Route::Search => run_search_screen(&search, &mut prompt).await?,
            Route::List(query) => {
                let screen = ListRouter::new(&config, query).load().await?;
                let flow = screen.run(&mut prompt, paging).await?;
                if single_query {
                    break;
                }
                wireframe.present_search_screen();
                flow
            }
        };

        if flow == Flow::Quit {
            break;
        }
    }

    Ok(())
}
