use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::backend::Backend;
use crate::config::ClientConfig;
use crate::page::{PageHandle, View};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Both readiness flags were true; the form is enabled.
    Ready,
    /// Stopped through the handle before the backend became ready.
    Cancelled,
}

/// Polls `/status` until the backend reports ready.
///
/// Not ready: check again after `not_ready_delay`. Request failure: show the
/// waiting banner and retry after `retry_delay`. No cap on attempts. Once
/// ready, polling stops for good.
pub struct ReadinessPoller {
    backend: Arc<dyn Backend>,
    page: PageHandle,
    not_ready_delay: Duration,
    retry_delay: Duration,
}

impl ReadinessPoller {
    pub fn new(backend: Arc<dyn Backend>, page: PageHandle, cfg: &ClientConfig) -> Self {
        Self {
            backend,
            page,
            not_ready_delay: cfg.not_ready_delay,
            retry_delay: cfg.retry_delay,
        }
    }

    /// Start polling on the current runtime. Dropping the returned handle
    /// cancels the poller.
    #[must_use = "dropping the handle cancels the poller"]
    pub fn spawn(self) -> PollerHandle {
        let (cancel_tx, cancel_rx) = oneshot::channel();
        let task = tokio::spawn(self.run(cancel_rx));
        PollerHandle { cancel: Some(cancel_tx), task: Some(task) }
    }

    async fn run(self, mut cancel: oneshot::Receiver<()>) -> PollOutcome {
        let mut attempt: u64 = 0;
        loop {
            attempt += 1;
            self.page.update(|p| {
                p.form_enabled = false;
                p.loading_visible = true;
                p.view = View::Loading;
            });

            let result = tokio::select! {
                _ = &mut cancel => return PollOutcome::Cancelled,
                r = self.backend.status() => r,
            };

            let delay = match result {
                Ok(status) if status.is_ready() => {
                    self.page.update(|p| {
                        p.form_enabled = true;
                        p.loading_visible = false;
                        p.view = View::Ready;
                    });
                    info!(target: "catalog_client", "backend ready after {attempt} check(s)");
                    return PollOutcome::Ready;
                }
                Ok(status) => {
                    debug!(
                        target: "catalog_client",
                        "backend not ready (model_loaded={}, embeddings_loaded={})",
                        status.model_loaded,
                        status.embeddings_loaded
                    );
                    self.not_ready_delay
                }
                Err(e) => {
                    warn!(target: "catalog_client", "readiness check failed: {e}");
                    self.page.update(|p| p.view = View::Waiting);
                    self.retry_delay
                }
            };

            tokio::select! {
                _ = &mut cancel => return PollOutcome::Cancelled,
                _ = tokio::time::sleep(delay) => {}
            }
        }
    }
}

pub struct PollerHandle {
    cancel: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<PollOutcome>>,
}

impl PollerHandle {
    /// Stop polling. A no-op once the poller has finished.
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel.take() {
            let _ = tx.send(());
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, |t| t.is_finished())
    }

    /// Wait for the poller to end.
    pub async fn wait(mut self) -> PollOutcome {
        match self.task.take() {
            Some(task) => task.await.unwrap_or(PollOutcome::Cancelled),
            None => PollOutcome::Cancelled,
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
