// folio: terminal form builder.
// Parses flags, loads settings, starts file logging, and owns the terminal.

mod app;
mod cli;
mod config;
mod error;
mod state;
mod ui;

use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*, reload};

use crate::app::App;
use crate::cli::Cli;
use crate::config::{Settings, paths};
use crate::error::{FolioError, Result};

type FilterHandle = reload::Handle<EnvFilter, Registry>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().or_else(paths::log_path);
    let filter = init_logging(log_path.as_deref())?;

    let settings_path = cli.config.clone().or_else(paths::settings_path);
    let mut settings = Settings::load_or_default(settings_path.as_deref());
    if let Some(policy) = cli.navigation {
        settings.navigation = policy;
    }
    if let Some(filter) = &filter {
        apply_log_level(filter, &settings.log_level);
    }

    if cli.write_config {
        let path = settings_path.ok_or_else(|| {
            FolioError::Config("no settings location on this platform; pass --config".to_string())
        })?;
        settings.save_to(&path)?;
        info!(path = %path.display(), "wrote settings");
        println!("Wrote settings to {}", path.display());
        return Ok(());
    }

    info!(
        pages = settings.initial_pages.len(),
        navigation = ?settings.navigation,
        "starting folio"
    );
    let mut app = App::new(&settings);
    run_terminal(&mut app)?;
    info!("folio exited");
    Ok(())
}

/// Send tracing output to `path`. The terminal belongs to the TUI, so
/// without a log file nothing is recorded.
///
/// The filter starts from `RUST_LOG` (or `info`) so settings loading is
/// logged too; the returned handle swaps in the configured level later.
fn init_logging(path: Option<&Path>) -> Result<Option<FilterHandle>> {
    let Some(path) = path else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::options().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|e| FolioError::Other(format!("failed to start logging: {e}")))?;

    Ok(Some(handle))
}

/// Apply the `log_level` setting unless `RUST_LOG` already chose a filter.
fn apply_log_level(handle: &FilterHandle, level: &str) {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        return;
    }
    match EnvFilter::try_new(level) {
        Ok(filter) => {
            if let Err(e) = handle.reload(filter) {
                warn!(error = %e, "could not apply log_level setting");
            }
        }
        Err(e) => warn!(level, error = %e, "ignoring invalid log_level setting"),
    }
}

fn run_terminal(app: &mut App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    // Restore the terminal even when the loop failed.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result.map_err(FolioError::from)
}
