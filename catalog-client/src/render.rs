use catalog_api::response::SearchResult;

use crate::html::escape_html;
use crate::page::View;

pub const DEFAULT_CATEGORY: &str = "Other";

/// Cosmetic band of a match percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreTier::High
        } else if score >= 50.0 {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ScoreTier::High => "score-high",
            ScoreTier::Medium => "score-medium",
            ScoreTier::Low => "score-low",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultGroup {
    pub category: String,
    pub results: Vec<SearchResult>,
}

/// Partition by category in first-seen order, keeping response order inside
/// each group. A missing or empty category becomes `"Other"`.
pub fn group_by_category(results: Vec<SearchResult>) -> Vec<ResultGroup> {
    let mut groups: Vec<ResultGroup> = Vec::new();
    for result in results {
        let category = match result.category.as_deref() {
            Some(c) if !c.is_empty() => c.to_string(),
            _ => DEFAULT_CATEGORY.to_string(),
        };
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.results.push(result),
            None => groups.push(ResultGroup { category, results: vec![result] }),
        }
    }
    groups
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape backend-supplied text (result fields, category names, error
    /// messages). Off by default: only the user's query is escaped.
    pub escape_result_fields: bool,
}

impl RenderOptions {
    fn field(&self, text: &str) -> String {
        if self.escape_result_fields {
            escape_html(text)
        } else {
            text.to_string()
        }
    }
}

/// Inner HTML of the results container for `view`.
pub fn render(view: &View, options: &RenderOptions) -> String {
    match view {
        View::Blank => String::new(),
        View::Loading => alert(
            "info",
            "Loading model...",
            "The sentence transformer model is being loaded. This may take a few moments.",
        ),
        View::Waiting => alert(
            "warning",
            "Loading model...",
            "Still waiting for the model to load. This may take a minute or two.",
        ),
        View::Ready => alert(
            "success",
            "Ready!",
            "The model is loaded and ready for your search queries.",
        ),
        View::Error(message) => alert("danger", "Error", &options.field(message)),
        View::NoResults => no_results(),
        View::Results { query, groups } => render_groups(query, groups, options),
    }
}

fn alert(kind: &str, title: &str, body: &str) -> String {
    format!("<div class=\"alert alert-{kind}\">\n  <h4>{title}</h4>\n  <p>{body}</p>\n</div>\n")
}

fn no_results() -> String {
    "<div class=\"no-results\">\n  <h4>No matching products found</h4>\n  <p>Try a different search term or browse our categories</p>\n</div>\n"
        .to_string()
}

fn render_groups(query: &str, groups: &[ResultGroup], options: &RenderOptions) -> String {
    if groups.iter().all(|g| g.results.is_empty()) {
        return no_results();
    }
    let total: usize = groups.iter().map(|g| g.results.len()).sum();

    let mut html = format!(
        "<h3>Search Results for \"{}\"</h3>\n<p class=\"search-tip\">Showing {} product(s) ranked by relevance</p>\n",
        escape_html(query),
        total
    );
    for group in groups {
        html.push_str(&format!(
            "<div class=\"category-section mb-4\">\n  <h4 class=\"category-heading\">{} <span class=\"badge bg-secondary\">{}</span></h4>\n  <div class=\"row\">\n",
            options.field(&group.category),
            group.results.len()
        ));
        for result in &group.results {
            html.push_str(&render_card(result, options));
        }
        html.push_str("  </div>\n</div>\n");
    }
    html
}

fn render_card(result: &SearchResult, options: &RenderOptions) -> String {
    let tier = ScoreTier::from_score(result.score);
    format!(
        "    <div class=\"col-md-6 col-lg-4 mb-3\">\n\
         \x20     <div class=\"card product-card {tier} h-100\">\n\
         \x20       <div class=\"card-header bg-light d-flex justify-content-between align-items-center\">\n\
         \x20         <h5 class=\"card-title mb-0\">{name}</h5>\n\
         \x20         <span class=\"badge bg-primary score-badge\">{score}% match</span>\n\
         \x20       </div>\n\
         \x20       <div class=\"card-body\">\n\
         \x20         <p class=\"card-text\">{description}</p>\n\
         {id_badge}\
         \x20       </div>\n\
         \x20     </div>\n\
         \x20   </div>\n",
        tier = tier.css_class(),
        name = options.field(&result.name),
        score = result.score,
        description = options.field(&result.description),
        id_badge = id_badge(result, options),
    )
}

fn id_badge(result: &SearchResult, options: &RenderOptions) -> String {
    match &result.id {
        Some(id) => format!(
            "          <div class=\"text-end\"><span class=\"badge bg-light text-dark\">ID: {}</span></div>\n",
            options.field(&id.to_string())
        ),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(ScoreTier::from_score(100.0), ScoreTier::High);
        assert_eq!(ScoreTier::from_score(80.0), ScoreTier::High);
        assert_eq!(ScoreTier::from_score(79.99), ScoreTier::Medium);
        assert_eq!(ScoreTier::from_score(50.0), ScoreTier::Medium);
        assert_eq!(ScoreTier::from_score(49.99), ScoreTier::Low);
        assert_eq!(ScoreTier::from_score(0.0), ScoreTier::Low);
    }

    #[test]
    fn blank_renders_nothing() {
        assert_eq!(render(&View::Blank, &RenderOptions::default()), "");
    }

    #[test]
    fn banners_use_alert_kinds() {
        let o = RenderOptions::default();
        assert!(render(&View::Loading, &o).contains("alert-info"));
        assert!(render(&View::Waiting, &o).contains("alert-warning"));
        assert!(render(&View::Ready, &o).contains("alert-success"));
        assert!(render(&View::Error("boom".into()), &o).contains("alert-danger"));
    }
}
