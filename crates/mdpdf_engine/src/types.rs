use std::path::PathBuf;

use crate::ConvertError;

pub type JobId = u64;

#[derive(Debug)]
pub enum EngineEvent {
    /// Sent exactly once per enqueued job.
    ConversionCompleted {
        job_id: JobId,
        result: Result<PathBuf, ConvertError>,
    },
}
