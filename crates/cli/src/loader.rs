//! Asynchronous file loading.
//!
//! Every file is read on its own task. The token is taken *before* the task is
//! spawned, so completions can arrive in any order and the board still knows
//! which load is newest.

use std::path::{Path, PathBuf};

use anyhow::Context;
use jobboard_core::{LoadSequence, LoadToken};
use jobboard_listings::{IngestError, Ingested, ingest};
use tokio::sync::mpsc;

/// A finished read, waiting to be ingested on the main task.
#[derive(Debug)]
pub struct Completion {
    pub token: LoadToken,
    pub path: PathBuf,
    pub text: anyhow::Result<String>,
}

impl Completion {
    /// Ingest the text. A read failure is reported like any other invalid file.
    pub fn ingest(&self) -> Result<Ingested, IngestError> {
        match &self.text {
            Ok(text) => ingest(text),
            Err(err) => {
                tracing::error!(token = %self.token, error = %format!("{err:#}"), "read failed");
                Err(IngestError::Unreadable(format!("{err:#}")))
            }
        }
    }
}

/// Start reading every path; completions are delivered in arrival order.
pub fn spawn_loads(paths: &[PathBuf], seq: &LoadSequence) -> mpsc::UnboundedReceiver<Completion> {
    let (tx, rx) = mpsc::unbounded_channel();

    for path in paths {
        let token = seq.next();
        let path = path.clone();
        let tx = tx.clone();

        tracing::debug!(%token, path = %path.display(), "load started");

        tokio::spawn(async move {
            let text = read_listings(&path).await;
            // The receiver only disappears when the process is shutting down.
            let _ = tx.send(Completion { token, path, text });
        });
    }

    rx
}

async fn read_listings(path: &Path) -> anyhow::Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read listings file {}", path.display()))
}
