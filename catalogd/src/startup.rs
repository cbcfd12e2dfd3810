use std::sync::Arc;
use std::time::Instant;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::services::Services;

/// Load the model and catalog embeddings in the background so the accept
/// loop, and with it `GET /status`, is available immediately.
pub fn spawn_warmup(services: Arc<Services>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let start = Instant::now();
        match services.load().await {
            Ok(()) => info!(target: "catalogd", "warmup complete in {:?}", start.elapsed()),
            Err(e) => warn!(target: "catalogd", "warmup failed after {:?}: {e}", start.elapsed()),
        }
    })
}
