//! Terminal front end: wires config, scan, engine and the ratatui loop together.
mod app;
mod effects;
mod input;
mod logging;
mod setup;
mod terminal;
mod ui;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use engine_logging::{engine_info, engine_warn};
use mdpdf_core::{AppState, Candidate};
use mdpdf_engine::{app_config_dir, scan, ConfigStore, EngineHandle, GotenbergConverter};

use crate::Cli;
use effects::EffectRunner;
use logging::LogDestination;
use setup::SetupOutcome;
use terminal::TerminalSession;

pub(crate) const LOG_FILE: &str = "md2pdf.log";

pub(crate) fn run(cli: Cli) -> Result<()> {
    let log_destination = match cli.log_file {
        Some(path) => LogDestination::File(path),
        None => match app_config_dir() {
            Ok(dir) => LogDestination::File(dir.join(LOG_FILE)),
            Err(_) => LogDestination::Disabled,
        },
    };
    logging::initialize(log_destination);
    engine_info!("md2pdf {} starting", env!("CARGO_PKG_VERSION"));

    let store = ConfigStore::locate().context("loading configuration")?;
    let existing = store.load().context("loading configuration")?;
    let root = resolve_root(cli.cwd)?;

    let mut session = TerminalSession::start().context("setting up the terminal")?;

    let config = match existing {
        Some(config) => config,
        None => {
            engine_info!("No config at {:?}; running setup", store.path());
            match setup::run_setup(&mut session, &store)? {
                SetupOutcome::Completed(config) => config,
                SetupOutcome::Aborted => {
                    engine_info!("Setup aborted");
                    return Ok(());
                }
            }
        }
    };
    engine_info!("Using endpoint {}", config.endpoint());

    let report = scan(&root, &cli.suffix);
    for issue in &report.issues {
        engine_warn!("Skipped {:?}: {}", issue.path, issue.message);
    }
    engine_info!(
        "Found {} candidate(s) under {:?}",
        report.files.len(),
        root
    );
    let candidates = report
        .files
        .into_iter()
        .map(|file| Candidate {
            name: file.name,
            path: file.path,
            modified: file.modified,
        })
        .collect();
    let state = AppState::new(candidates).with_scan_issues(report.issues.len());

    let converter = GotenbergConverter::new(config.endpoint())
        .context("building the HTTP client")?;
    let engine = EngineHandle::new(Arc::new(converter)).context("starting the engine")?;
    let runner = EffectRunner::new(engine, root);

    app::run_app(session.terminal(), state, &runner)
}

fn resolve_root(cwd: Option<PathBuf>) -> Result<PathBuf> {
    match cwd {
        Some(path) => std::fs::canonicalize(&path)
            .with_context(|| format!("resolving --cwd {}", path.display())),
        None => std::env::current_dir().context("reading the current directory"),
    }
}
