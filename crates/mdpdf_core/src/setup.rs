//! First-run setup form: collects the conversion endpoint.

/// Pre-filled endpoint, matching a Gotenberg container on its default port.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupStep {
    #[default]
    EditingEndpoint,
    Confirmed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupState {
    step: SetupStep,
    endpoint: String,
    dirty: bool,
}

impl Default for SetupState {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupState {
    pub fn new() -> Self {
        Self {
            step: SetupStep::EditingEndpoint,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            dirty: true,
        }
    }

    pub fn step(&self) -> SetupStep {
        self.step
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn view(&self) -> SetupViewModel {
        SetupViewModel {
            step: self.step,
            endpoint: self.endpoint.clone(),
        }
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupMsg {
    CharTyped(char),
    Backspace,
    /// Enter.
    Submit,
    /// Ctrl+C or Esc.
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupEffect {
    /// Persist the entered endpoint.
    SaveEndpoint(String),
    /// Leave the form and continue into the main list.
    Finish,
    /// Leave the form and exit the program.
    Abort,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupViewModel {
    pub step: SetupStep,
    pub endpoint: String,
}

pub fn update_setup(mut state: SetupState, msg: SetupMsg) -> (SetupState, Vec<SetupEffect>) {
    let effects = match (state.step, msg) {
        (_, SetupMsg::Quit) => vec![SetupEffect::Abort],
        (SetupStep::EditingEndpoint, SetupMsg::CharTyped(c)) => {
            if !c.is_control() {
                state.endpoint.push(c);
                state.dirty = true;
            }
            Vec::new()
        }
        (SetupStep::EditingEndpoint, SetupMsg::Backspace) => {
            if state.endpoint.pop().is_some() {
                state.dirty = true;
            }
            Vec::new()
        }
        (SetupStep::EditingEndpoint, SetupMsg::Submit) => {
            if state.endpoint.is_empty() {
                Vec::new()
            } else {
                state.step = SetupStep::Confirmed;
                state.dirty = true;
                vec![SetupEffect::SaveEndpoint(state.endpoint.clone())]
            }
        }
        (SetupStep::Confirmed, SetupMsg::Submit) => vec![SetupEffect::Finish],
        (SetupStep::Confirmed, SetupMsg::CharTyped(_) | SetupMsg::Backspace) => Vec::new(),
    };

    (state, effects)
}
