use std::sync::Arc;

use anyhow::{Context, Result};
use dotenv::dotenv;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use catalog_client::{
    Backend, ClientConfig, HttpBackend, PageHandle, PollOutcome, ReadinessPoller,
    SearchController,
};

/// Terminal host for the search page: waits for the backend, then reads one
/// query per line from stdin and prints the rendered results container.
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cfg = ClientConfig::from_env();
    let backend: Arc<dyn Backend> = Arc::new(
        HttpBackend::new(&cfg.base_url).with_context(|| format!("bad CATALOG_URL {}", cfg.base_url))?,
    );
    let page = PageHandle::default();
    let mut stdout = io::stdout();

    let poller = ReadinessPoller::new(backend.clone(), page.clone(), &cfg).spawn();
    let mut changes = page.subscribe();
    let mut poller = Box::pin(poller.wait());
    let mut shown = String::new();
    let outcome = loop {
        tokio::select! {
            outcome = &mut poller => break outcome,
            changed = changes.changed() => {
                if changed.is_err() {
                    break PollOutcome::Cancelled;
                }
                let html = changes.borrow_and_update().results_html(&cfg.render);
                if html != shown {
                    stdout.write_all(html.as_bytes()).await?;
                    stdout.flush().await?;
                    shown = html;
                }
            }
            _ = tokio::signal::ctrl_c() => break PollOutcome::Cancelled,
        }
    };
    if outcome != PollOutcome::Ready {
        info!("stopped before the backend became ready");
        return Ok(());
    }
    let ready = page.snapshot().results_html(&cfg.render);
    if ready != shown {
        stdout.write_all(ready.as_bytes()).await?;
    }

    let controller = SearchController::new(backend, page.clone());
    let mut lines = BufReader::new(io::stdin()).lines();
    loop {
        stdout.write_all(b"query> ").await?;
        stdout.flush().await?;
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else { break };
        controller.submit(&line).await;
        let html = page.snapshot().results_html(&cfg.render);
        stdout.write_all(html.as_bytes()).await?;
    }
    Ok(())
}
