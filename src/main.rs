// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging and load settings (defaults < environment < flags)
// 3. Build a RepoListController on top of the chosen data source
// 4. Render every state the controller publishes
// 5. Exit with proper code (0 = loaded, 1 = failed / not found, 2 = error)
//
// Rust concepts used:
// - async/await: The fetch runs in the background while we wait for states
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Every LoadState case is handled explicitly
// =============================================================================

// Only the CLI definition lives in the binary; everything else comes from
// the library crate (src/lib.rs)
mod cli; // src/cli.rs - command-line parsing

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use github_client::config::Settings;
use github_client::controller::RepoListController;
use github_client::github::{
    MockRepoRepository, RepoApiClient, RepoDataRepository, RepoRepository,
};
use github_client::model::Repo;
use github_client::state::LoadState;
use github_client::view;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = the list (or the repo) was shown
//   Ok(1) = loading failed, or the repo wasn't found
//   Err   = bad configuration or an unexpected error
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let env_settings = Settings::from_env().context("invalid environment configuration")?;

    match cli.command {
        Commands::List { org, json, mock, no_prompt } => {
            let settings = env_settings.with_overrides(cli.api_url.as_deref(), org.as_deref())?;
            handle_list(&settings, json, mock, !no_prompt).await
        }
        Commands::Show { name, org, json, mock } => {
            let settings = env_settings.with_overrides(cli.api_url.as_deref(), org.as_deref())?;
            handle_show(&settings, &name, json, mock).await
        }
    }
}

// Logs go to stderr so they never mix with table or JSON output
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn build_repository(settings: &Settings, mock: bool) -> Result<Box<dyn RepoRepository>> {
    if mock {
        debug!("using mock repositories");
        return Ok(Box::new(MockRepoRepository::new(settings.mock_delay)));
    }

    let client = RepoApiClient::new(settings).context("could not create HTTP client")?;
    Ok(Box::new(RepoDataRepository::new(client, settings.org.clone())))
}

// Handles the 'list' subcommand
//
// Renders each published state as it arrives. When loading fails and
// prompting is on, asks the user whether to retry and loops.
async fn handle_list(settings: &Settings, json: bool, mock: bool, prompt: bool) -> Result<i32> {
    let controller = RepoListController::new(build_repository(settings, mock)?);
    let mut updates = controller.subscribe();

    if !json {
        if mock {
            println!("🔍 Sample repositories (offline)");
        } else {
            println!("🔍 Repositories of {}", settings.org);
        }
    }

    let _ = controller.on_appear();

    while let Some(state) = updates.next().await {
        match &state {
            LoadState::Idle | LoadState::Loading => {
                if !json {
                    println!("{}", view::render_list(&state));
                }
            }
            LoadState::Loaded(repos) => {
                if json {
                    println!("{}", view::render_json(repos)?);
                } else {
                    println!("\n{}", view::render_list(&state));
                }
                return Ok(0);
            }
            LoadState::Failed(_) => {
                eprintln!("{}", view::render_list(&state));
                if !prompt || !ask_retry().await? {
                    return Ok(1);
                }
                let _ = controller.on_retry();
            }
        }
    }

    // The controller is still alive here, so its publisher can't be gone
    Err(anyhow!("state updates ended before loading finished"))
}

// Handles the 'show' subcommand
//
// Loads the list once, then renders the detail screen for one repo.
async fn handle_show(settings: &Settings, name: &str, json: bool, mock: bool) -> Result<i32> {
    let controller = RepoListController::new(build_repository(settings, mock)?);
    controller
        .on_appear()
        .await
        .context("repository fetch task failed")?;

    match controller.state() {
        LoadState::Loaded(repos) => match find_repo(&repos, name) {
            Some(repo) => {
                if json {
                    println!("{}", view::render_json(repo)?);
                } else {
                    println!("{}", view::render_detail(repo));
                }
                Ok(0)
            }
            None => {
                eprintln!("❌ No repository named '{}' in {}", name, settings.org);
                Ok(1)
            }
        },
        state @ LoadState::Failed(_) => {
            eprintln!("{}", view::render_list(&state));
            Ok(1)
        }
        LoadState::Idle | LoadState::Loading => {
            Err(anyhow!("fetch finished without publishing a result"))
        }
    }
}

fn find_repo<'a>(repos: &'a [Repo], name: &str) -> Option<&'a Repo> {
    repos.iter().find(|repo| repo.name.eq_ignore_ascii_case(name))
}

// Asks "Retry? [y/N]" on the terminal. Anything but y/yes means no.
async fn ask_retry() -> Result<bool> {
    tokio::task::spawn_blocking(|| -> Result<bool> {
        print!("{} ", view::RETRY_HINT);
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(is_yes(&answer))
    })
    .await?
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
