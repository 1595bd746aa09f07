use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use engine_logging::engine_debug;
use mdpdf_core::{update, AppState, Msg};

use super::effects::EffectRunner;
use super::input;
use super::terminal::Tui;
use super::ui;

/// Input poll interval; engine completions are drained once per tick.
const TICK: Duration = Duration::from_millis(75);

pub(crate) fn run_app(terminal: &mut Tui, mut state: AppState, runner: &EffectRunner) -> Result<()> {
    let mut force_redraw = true;

    loop {
        if state.consume_dirty() || force_redraw {
            force_redraw = false;
            let view = state.view();
            terminal
                .draw(|frame| ui::render::render(frame, &view))
                .context("drawing the screen")?;
        }

        let msg = if event::poll(TICK).context("polling terminal input")? {
            match event::read().context("reading terminal input")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::map_key(key, state.mode())
                }
                Event::Resize(..) => {
                    force_redraw = true;
                    Msg::NoOp
                }
                _ => Msg::NoOp,
            }
        } else {
            Msg::Tick
        };
        state = dispatch(state, msg, runner);

        while let Some(msg) = runner.poll() {
            engine_debug!("Engine message: {:?}", msg);
            state = dispatch(state, msg, runner);
        }

        if state.should_quit() {
            return Ok(());
        }
    }
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (state, effects) = update(state, msg);
    runner.enqueue(effects);
    state
}
