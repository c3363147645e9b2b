//! Debounced live preview.
//!
//! Edits are sent to a background task that waits for the input to go
//! quiet for [`ImportConfig::debounce`] before parsing. Each new edit
//! restarts the wait. Parsing runs inside the task, so previews are
//! published strictly in input order and an older parse can never replace
//! a newer one.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};

use aria_instruments::catalog::Catalog;

use crate::config::ImportConfig;
use crate::session::{ImportPreview, ImportSession};

#[derive(Debug)]
enum PreviewInput {
    Text(String),
    AssessmentType(Option<String>),
    Clear,
}

pub type PreviewReceiver = watch::Receiver<Option<Arc<ImportPreview>>>;

/// Handle to the preview task. Dropping it stops the task.
pub struct LivePreview {
    inputs: mpsc::UnboundedSender<PreviewInput>,
    previews: PreviewReceiver,
    busy: watch::Receiver<bool>,
    task: JoinHandle<()>,
}

impl LivePreview {
    /// Start the preview task on the current tokio runtime.
    pub fn spawn(catalog: Arc<Catalog>, config: ImportConfig) -> Self {
        let (inputs, input_rx) = mpsc::unbounded_channel();
        let (preview_tx, previews) = watch::channel(None);
        let (busy_tx, busy) = watch::channel(false);

        let session = ImportSession::new(catalog, config);
        let task = tokio::spawn(run(session, input_rx, preview_tx, busy_tx));

        Self {
            inputs,
            previews,
            busy,
            task,
        }
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.send(PreviewInput::Text(text.into()));
    }

    /// Manual selection skips the debounce and re-parses right away.
    pub fn select_assessment_type(&self, assessment_type: Option<String>) {
        self.send(PreviewInput::AssessmentType(assessment_type));
    }

    pub fn clear(&self) {
        self.send(PreviewInput::Clear);
    }

    fn send(&self, input: PreviewInput) {
        if self.inputs.send(input).is_err() {
            tracing::warn!("preview task has stopped, input dropped");
        }
    }

    pub fn latest(&self) -> Option<Arc<ImportPreview>> {
        self.previews.borrow().clone()
    }

    pub fn subscribe(&self) -> PreviewReceiver {
        self.previews.clone()
    }

    /// True while a parse is running.
    ///
    /// The flag is raised and lowered around the synchronous parse step
    /// inside the task, so a poll between awaits only ever sees `false`.
    /// Watch [`LivePreview::subscribe_busy`] to learn that a parse ran.
    pub fn is_busy(&self) -> bool {
        *self.busy.borrow()
    }

    pub fn subscribe_busy(&self) -> watch::Receiver<bool> {
        self.busy.clone()
    }
}

impl Drop for LivePreview {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run(
    mut session: ImportSession,
    mut inputs: mpsc::UnboundedReceiver<PreviewInput>,
    previews: watch::Sender<Option<Arc<ImportPreview>>>,
    busy: watch::Sender<bool>,
) {
    let debounce = session.config().debounce;
    let mut deadline: Option<Instant> = None;

    loop {
        // Evaluated even when the branch is disabled, so it needs a value.
        let wake_at = deadline.unwrap_or_else(Instant::now);

        tokio::select! {
            input = inputs.recv() => {
                let Some(input) = input else { break };
                match input {
                    PreviewInput::Text(text) => {
                        if !session.set_text(text) {
                            continue;
                        }
                        if session.text().trim().is_empty() {
                            deadline = None;
                            previews.send_replace(None);
                        } else {
                            deadline = Some(Instant::now() + debounce);
                        }
                    }
                    PreviewInput::AssessmentType(assessment_type) => {
                        deadline = None;
                        busy.send_replace(true);
                        session.select_assessment_type(assessment_type);
                        busy.send_replace(false);
                        if session.preview().is_some() {
                            previews.send_replace(session.shared_preview());
                        }
                    }
                    PreviewInput::Clear => {
                        deadline = None;
                        session.clear();
                        previews.send_replace(None);
                    }
                }
            }
            _ = sleep_until(wake_at), if deadline.is_some() => {
                deadline = None;
                busy.send_replace(true);
                session.parse();
                busy.send_replace(false);
                previews.send_replace(session.shared_preview());
            }
        }
    }

    tracing::debug!("preview task stopped");
}
