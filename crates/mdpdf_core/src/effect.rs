use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand the source file to the conversion engine.
    StartConversion {
        job_id: crate::JobId,
        source: PathBuf,
    },
    /// Leave the run loop. In-flight work is abandoned.
    Quit,
}
