//! md2pdf core: pure state machines and view-model helpers.
mod effect;
mod msg;
mod setup;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use setup::{
    update_setup, SetupEffect, SetupMsg, SetupState, SetupStep, SetupViewModel, DEFAULT_ENDPOINT,
};
pub use state::{AppState, Candidate, ConversionResult, JobId, Mode};
pub use update::update;
pub use view_model::{AppViewModel, CandidateRowView};
