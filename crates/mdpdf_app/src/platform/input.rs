use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mdpdf_core::{Mode, Msg, SetupMsg};

/// Maps a key press on the main screen to a message.
pub(crate) fn map_key(key: KeyEvent, mode: Mode) -> Msg {
    if is_ctrl_c(&key) || key.code == KeyCode::Char('q') {
        return Msg::QuitRequested;
    }

    match mode {
        Mode::Error => match key.code {
            KeyCode::Esc | KeyCode::Enter => Msg::DismissError,
            _ => Msg::NoOp,
        },
        Mode::Idle | Mode::Converting => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Msg::CursorUp,
            KeyCode::Down | KeyCode::Char('j') => Msg::CursorDown,
            KeyCode::Home | KeyCode::Char('g') => Msg::CursorTop,
            KeyCode::End | KeyCode::Char('G') => Msg::CursorBottom,
            KeyCode::Enter => Msg::ConvertRequested,
            _ => Msg::NoOp,
        },
    }
}

/// Maps a key press in the setup form. `q` is text here; only Ctrl+C and Esc quit.
pub(crate) fn map_setup_key(key: KeyEvent) -> Option<SetupMsg> {
    if is_ctrl_c(&key) {
        return Some(SetupMsg::Quit);
    }
    match key.code {
        KeyCode::Esc => Some(SetupMsg::Quit),
        KeyCode::Enter => Some(SetupMsg::Submit),
        KeyCode::Backspace => Some(SetupMsg::Backspace),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(SetupMsg::CharTyped(c))
        }
        _ => None,
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
