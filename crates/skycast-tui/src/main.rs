//! `skycast` — terminal weather lookup built on [ratatui](https://ratatui.rs).
//!
//! Type a place name, get the current conditions from weatherapi.com,
//! and see the resolved location marked on a world map canvas.
//!
//! Logs are written to a file (default `/tmp/skycast.log`) to avoid
//! corrupting the terminal UI.
//!
//! Entry point: CLI argument parsing, tracing setup, panic hooks, and
//! app launch.

mod action;
mod app;
mod component;
mod event;
mod panels;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use secrecy::SecretString;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use skycast_api::{TransportConfig, WeatherClient};
use skycast_core::WeatherService;

use crate::app::App;

/// Terminal UI for current weather conditions.
#[derive(Parser, Debug)]
#[command(name = "skycast", version, about)]
struct Cli {
    /// Place to look up immediately on startup
    city: Option<String>,

    /// weatherapi.com API key (overrides config and keyring)
    #[arg(short = 'k', long, env = "SKYCAST_API_KEY")]
    api_key: Option<String>,

    /// Log file path
    #[arg(long, default_value = "/tmp/skycast.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr, that
/// would corrupt the TUI output. Returns a guard that must be held for
/// the lifetime of the application to ensure logs are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "skycast_tui={log_level},skycast_core={log_level},skycast_api={log_level}"
        ))
    });

    let log_dir = cli.log_file.parent().unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("skycast.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    // Tracing to file, hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cli);

    let config = skycast_config::load_config_or_default();

    // Priority: CLI flag > env var / keyring / config file
    let api_key = match &cli.api_key {
        Some(key) => SecretString::from(key.clone()),
        None => skycast_config::resolve_api_key(&config.provider)
            .map_err(|e| eyre!("{e}\nget a free key at https://www.weatherapi.com"))?,
    };

    let transport = TransportConfig {
        timeout: config.provider.timeout_duration(),
    };
    let client = WeatherClient::new(&config.provider.base_url, api_key, &transport)?;
    let service = WeatherService::new(client);

    info!(base_url = %config.provider.base_url, "starting skycast");

    let mut app = App::new(service, config.theme, Some(skycast_config::config_path()));
    if let Some(city) = cli.city {
        app.queue_lookup(city)?;
    }
    app.run().await?;

    Ok(())
}
