use std::io;
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use engine_logging::{engine_debug, engine_warn};

use crate::{Converter, EngineEvent, JobId};

enum EngineCommand {
    Convert { job_id: JobId, source: PathBuf },
}

/// Runs conversions on a background tokio runtime and reports completions over a channel.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(converter: Arc<dyn Converter>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("mdpdf-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let converter = converter.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(converter.as_ref(), command, event_tx).await;
                    });
                }
                engine_debug!("Engine command channel closed");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn enqueue(&self, job_id: JobId, source: impl Into<PathBuf>) {
        let command = EngineCommand::Convert {
            job_id,
            source: source.into(),
        };
        if self.cmd_tx.send(command).is_err() {
            engine_warn!("Engine worker is gone; job {} dropped", job_id);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    converter: &dyn Converter,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Convert { job_id, source } => {
            let result = converter.convert(&source).await;
            let _ = event_tx.send(EngineEvent::ConversionCompleted { job_id, result });
        }
    }
}
