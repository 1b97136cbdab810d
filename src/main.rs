// folio - personal portfolio in the terminal
//
// A single scrolling page of sections (hero, about, projects, skills,
// contact) plus a resume page, rendered with ratatui.
//
// Architecture:
// - Page state (page/): active-section tracking, nav, contact form, router
// - Content (content/): static portfolio data
// - Relay (relay/): HTTP client for contact messages
// - TUI (tui/): layout, rendering and the event loop
// - Print (print.rs): plain-text render of the same layout

mod cli;
mod config;
mod content;
mod logging;
mod page;
mod print;
mod relay;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use page::router::Route;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Width used when the TUI is disabled and no width was given
const DEFAULT_PRINT_WIDTH: usize = 80;

/// Where human-readable log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogSink {
    /// In-memory buffer shown in the Logs modal
    Tui,
    /// stderr, so stdout stays clean for printed pages
    Stderr,
}

/// Initialize tracing
///
/// Precedence: RUST_LOG env var > config file > default "info".
/// The returned guard must be held until exit so the file log flushes.
fn init_tracing(
    config: &Config,
    sink: LogSink,
    log_buffer: &LogBuffer,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let default_filter = format!("folio={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let display_layer = match sink {
        LogSink::Tui => TuiLogLayer::new(log_buffer.clone()).boxed(),
        LogSink::Stderr => tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed(),
    };

    // File logging: rotating JSON files, written from a background thread
    let mut guard = None;
    let file_layer = if config.logging.file_enabled {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Ok(()) => {
                let dir = &config.logging.file_dir;
                let prefix = &config.logging.file_prefix;
                let file_appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(dir, prefix),
                    LogRotation::Daily => tracing_appender::rolling::daily(dir, prefix),
                    LogRotation::Never => tracing_appender::rolling::never(dir, prefix),
                };
                let (non_blocking, file_guard) = tracing_appender::non_blocking(file_appender);
                guard = Some(file_guard);
                Some(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                None
            }
        }
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(display_layer)
        .with(file_layer)
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config subcommands run before anything else is set up
    if let Some(Commands::Config { show, path, reset }) = cli.command {
        return cli::handle_config(show, path, reset);
    }

    let config = Config::from_env().context("Failed to load configuration")?;

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let log_buffer = LogBuffer::new();

    match cli.command {
        Some(Commands::Print { page, width }) => {
            let _guard = init_tracing(&config, LogSink::Stderr, &log_buffer);
            print::print_page(page.into(), usize::from(width))
        }
        _ if !config.enable_tui => {
            let _guard = init_tracing(&config, LogSink::Stderr, &log_buffer);
            tracing::debug!("TUI disabled, printing instead");
            print::print_page(Route::from(cli.page), DEFAULT_PRINT_WIDTH)
        }
        _ => {
            let _guard = init_tracing(&config, LogSink::Tui, &log_buffer);
            tracing::info!(version = config::VERSION, theme = %config.theme, "Starting folio");
            tui::run_tui(config, log_buffer, cli.page.into()).await
        }
    }
}
