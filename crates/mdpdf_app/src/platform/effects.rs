use std::path::{Path, PathBuf};

use engine_logging::{engine_info, engine_warn};
use mdpdf_core::{ConversionResult, Effect, Msg};
use mdpdf_engine::{EngineEvent, EngineHandle};

/// Executes core effects against the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
    root: PathBuf,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, root: PathBuf) -> Self {
        Self { engine, root }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartConversion { job_id, source } => {
                    let absolute = self.root.join(&source);
                    engine_info!("StartConversion job_id={} source={:?}", job_id, absolute);
                    self.engine.enqueue(job_id, absolute);
                }
                Effect::Quit => {
                    // the run loop observes should_quit
                    engine_info!("Quit requested");
                }
            }
        }
    }

    /// Next completed conversion, if one has arrived.
    pub fn poll(&self) -> Option<Msg> {
        self.engine
            .try_recv()
            .map(|event| event_to_msg(event, &self.root))
    }
}

fn event_to_msg(event: EngineEvent, root: &Path) -> Msg {
    match event {
        EngineEvent::ConversionCompleted { job_id, result } => {
            let result = match result {
                Ok(output) => {
                    engine_info!("Job {} wrote {:?}", job_id, output);
                    let shown = output
                        .strip_prefix(root)
                        .map(Path::to_path_buf)
                        .unwrap_or(output);
                    ConversionResult::Succeeded { output: shown }
                }
                Err(err) => {
                    engine_warn!("Job {} failed: {}", job_id, err);
                    ConversionResult::Failed {
                        message: err.to_string(),
                    }
                }
            };
            Msg::ConversionFinished { job_id, result }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdpdf_engine::ConvertError;

    #[test]
    fn success_is_shown_relative_to_root() {
        let root = Path::new("/work");
        let msg = event_to_msg(
            EngineEvent::ConversionCompleted {
                job_id: 3,
                result: Ok(PathBuf::from("/work/docs/a.pdf")),
            },
            root,
        );
        assert_eq!(
            msg,
            Msg::ConversionFinished {
                job_id: 3,
                result: ConversionResult::Succeeded {
                    output: PathBuf::from("docs/a.pdf"),
                },
            }
        );
    }

    #[test]
    fn failure_carries_the_error_text() {
        let msg = event_to_msg(
            EngineEvent::ConversionCompleted {
                job_id: 7,
                result: Err(ConvertError::HttpStatus {
                    status: 503,
                    body: "busy".to_string(),
                }),
            },
            Path::new("/work"),
        );
        assert_eq!(
            msg,
            Msg::ConversionFinished {
                job_id: 7,
                result: ConversionResult::Failed {
                    message: "conversion failed with status: 503, body: busy".to_string(),
                },
            }
        );
    }
}
