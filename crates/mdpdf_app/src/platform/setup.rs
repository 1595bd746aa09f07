//! First-run form: asks for the endpoint and writes the config file.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use engine_logging::{engine_info, engine_warn};
use mdpdf_core::{update_setup, SetupEffect, SetupState, SetupViewModel};
use mdpdf_engine::{Config, ConfigStore};

use super::input;
use super::terminal::TerminalSession;
use super::ui;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SetupOutcome {
    Completed(Config),
    /// Quit before finishing. The config may already be saved.
    Aborted,
}

pub(crate) fn run_setup(session: &mut TerminalSession, store: &ConfigStore) -> Result<SetupOutcome> {
    let terminal = session.terminal();
    drive_setup(store, next_key, |view| {
        terminal
            .draw(|frame| ui::render::render_setup(frame, view))
            .context("drawing the setup form")?;
        Ok(())
    })
}

/// Blocks for the next key press. `None` means the screen needs a redraw.
fn next_key() -> Result<Option<KeyEvent>> {
    loop {
        match event::read().context("reading terminal input")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(Some(key)),
            Event::Resize(..) => return Ok(None),
            _ => {}
        }
    }
}

/// Runs the form to completion against any key source and renderer.
pub(crate) fn drive_setup<K, D>(store: &ConfigStore, mut next_key: K, mut draw: D) -> Result<SetupOutcome>
where
    K: FnMut() -> Result<Option<KeyEvent>>,
    D: FnMut(&SetupViewModel) -> Result<()>,
{
    let mut state = SetupState::new();
    let mut saved: Option<Config> = None;
    let mut force_redraw = false;

    loop {
        if state.consume_dirty() || force_redraw {
            force_redraw = false;
            draw(&state.view())?;
        }

        let Some(key) = next_key()? else {
            force_redraw = true;
            continue;
        };
        let Some(msg) = input::map_setup_key(key) else {
            continue;
        };

        let (next, effects) = update_setup(state, msg);
        state = next;
        for effect in effects {
            match effect {
                SetupEffect::SaveEndpoint(endpoint) => {
                    let config = Config::with_endpoint(endpoint);
                    store.save(&config).context("saving configuration")?;
                    engine_info!("Saved config to {:?}", store.path());
                    saved = Some(config);
                }
                SetupEffect::Finish => match saved.take() {
                    Some(config) => return Ok(SetupOutcome::Completed(config)),
                    None => engine_warn!("Setup finished before anything was saved"),
                },
                SetupEffect::Abort => return Ok(SetupOutcome::Aborted),
            }
        }
    }
}
