use std::sync::Arc;

use tracing::{info, warn};

use crate::backend::Backend;
use crate::page::{PageHandle, View};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Blank query: no request was sent and the page was not touched.
    Ignored,
    /// Results (possibly none) were rendered.
    Rendered { results: usize },
    /// The error banner was rendered with this message.
    Failed(String),
}

/// Handles search form submissions.
///
/// Overlapping submissions are not serialized: each one renders when its
/// response arrives, so the last response to complete wins.
#[derive(Clone)]
pub struct SearchController {
    backend: Arc<dyn Backend>,
    page: PageHandle,
}

impl SearchController {
    pub fn new(backend: Arc<dyn Backend>, page: PageHandle) -> Self {
        Self { backend, page }
    }

    pub async fn submit(&self, raw_query: &str) -> Submission {
        let query = raw_query.trim();
        if query.is_empty() {
            return Submission::Ignored;
        }

        self.page.update(|p| {
            p.loading_visible = true;
            p.view = View::Blank;
        });

        let outcome = match self.backend.search(query).await {
            Ok(results) => {
                let count = results.len();
                info!(target: "catalog_client", "search {:?}: {count} result(s)", query);
                let view = View::from_results(query, results);
                self.page.update(|p| p.view = view);
                Submission::Rendered { results: count }
            }
            Err(e) => {
                warn!(target: "catalog_client", "search {:?} failed: {e}", query);
                let message = e.banner_message();
                let view = View::Error(message.clone());
                self.page.update(|p| p.view = view);
                Submission::Failed(message)
            }
        };

        self.page.update(|p| p.loading_visible = false);
        outcome
    }
}
