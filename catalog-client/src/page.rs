//! Explicit page state. The markup the user sees is always
//! `render(&page.view, ..)`; nothing else writes to the results container.

use std::sync::Arc;

use catalog_api::response::SearchResult;
use tokio::sync::watch;

use crate::render::{group_by_category, render, RenderOptions, ResultGroup};

pub const FORM_ID: &str = "search-form";
pub const QUERY_INPUT_ID: &str = "search-query";
pub const RESULTS_ID: &str = "search-results";
pub const LOADING_ID: &str = "loading";

/// What the results container shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum View {
    /// Cleared, e.g. while a search is in flight.
    #[default]
    Blank,
    /// Readiness check in progress.
    Loading,
    /// Readiness check failed; a retry is scheduled.
    Waiting,
    /// Backend ready, nothing searched yet.
    Ready,
    Results { query: String, groups: Vec<ResultGroup> },
    NoResults,
    Error(String),
}

impl View {
    /// `NoResults` for an empty list, otherwise results grouped by category.
    pub fn from_results(query: &str, results: Vec<SearchResult>) -> Self {
        if results.is_empty() {
            return View::NoResults;
        }
        View::Results { query: query.to_string(), groups: group_by_category(results) }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub form_enabled: bool,
    pub loading_visible: bool,
    pub view: View,
}

impl Page {
    /// Class list of `#search-form`.
    pub fn form_class(&self) -> &'static str {
        if self.form_enabled {
            ""
        } else {
            "disabled"
        }
    }

    /// Class list of `#loading`.
    pub fn loading_class(&self) -> &'static str {
        if self.loading_visible {
            ""
        } else {
            "d-none"
        }
    }

    pub fn query_input_disabled(&self) -> bool {
        !self.form_enabled
    }

    /// Inner HTML of `#search-results`.
    pub fn results_html(&self, options: &RenderOptions) -> String {
        render(&self.view, options)
    }
}

/// Shared, observable page. Cloning yields another handle to the same page.
#[derive(Clone)]
pub struct PageHandle {
    tx: Arc<watch::Sender<Page>>,
}

impl Default for PageHandle {
    fn default() -> Self {
        Self::new(Page::default())
    }
}

impl PageHandle {
    pub fn new(initial: Page) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// Apply `f` and notify subscribers. Every call notifies, so callers
    /// that must leave the page untouched simply don't call this.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut Page),
    {
        self.tx.send_modify(f);
    }

    pub fn snapshot(&self) -> Page {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Page> {
        self.tx.subscribe()
    }
}
