//! InfoHub TUI Application
//!
//! A terminal dashboard for weather, INR conversion and motivational quotes.

use std::fs::OpenOptions;
use std::io::Stdout;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::event;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use infohub::tui::{
    handle_event, process_state, render, restore_terminal, setup_terminal, AppState, Tab,
};
use infohub::{ClientConfig, InfoHubClient, BASE_URL_ENV};

#[derive(Debug, Parser)]
#[command(name = "infohub-tui", version, about = "InfoHub terminal dashboard")]
struct Cli {
    /// API root, e.g. http://localhost:3001/api.
    #[arg(long, env = BASE_URL_ENV)]
    base_url: Option<String>,

    /// File that receives the diagnostic log.
    #[arg(long, env = "INFOHUB_LOG_FILE", default_value = "infohub.log")]
    log_file: PathBuf,

    /// Tab to open first.
    #[arg(long, value_enum, default_value_t = Tab::Weather)]
    tab: Tab,
}

/// Send logs to a file; stdout belongs to the terminal UI.
fn init_tracing(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state: &mut AppState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| render(f, state))?;

        process_state(state);

        if state.should_quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            handle_event(event, state);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    let config = cli
        .base_url
        .as_deref()
        .map(ClientConfig::new)
        .unwrap_or_default();
    let client = InfoHubClient::new(&config)?;
    tracing::info!(base_url = client.base_url(), "starting InfoHub dashboard");

    let mut state = AppState::new(Box::new(client), config.base_url.clone());
    state.select_tab(cli.tab);

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut state);
    restore_terminal(&mut terminal)?;

    tracing::info!("InfoHub dashboard closed");
    result
}
