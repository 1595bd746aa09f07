use crate::{AppState, Effect, Mode, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::CursorUp | Msg::CursorDown | Msg::CursorTop | Msg::CursorBottom => {
            // Navigation is only live while the list is interactive.
            if state.mode() == Mode::Idle {
                match msg {
                    Msg::CursorUp => state.cursor_up(),
                    Msg::CursorDown => state.cursor_down(),
                    Msg::CursorTop => state.cursor_top(),
                    _ => state.cursor_bottom(),
                }
            }
            Vec::new()
        }
        Msg::ConvertRequested => {
            if state.mode() != Mode::Idle {
                return (state, Vec::new());
            }
            match state.begin_conversion() {
                Some((job_id, source)) => vec![Effect::StartConversion { job_id, source }],
                None => Vec::new(),
            }
        }
        Msg::ConversionFinished { job_id, result } => {
            state.finish_conversion(job_id, result);
            Vec::new()
        }
        Msg::DismissError => {
            if state.mode() == Mode::Error {
                state.dismiss_error();
            }
            Vec::new()
        }
        Msg::QuitRequested => {
            state.request_quit();
            vec![Effect::Quit]
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
