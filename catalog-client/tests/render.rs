mod common;

use catalog_api::response::{ResultId, SearchResult};
use catalog_client::render::{group_by_category, ScoreTier, DEFAULT_CATEGORY};
use catalog_client::{render, RenderOptions, View};
use common::item;

#[test]
fn query_is_always_escaped() {
    let view = View::from_results("<script>alert(1)</script>", vec![item(1, "x", None, 90.0)]);
    for options in [RenderOptions::default(), RenderOptions { escape_result_fields: true }] {
        let out = render(&view, &options);
        assert!(out.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!out.contains("<script>"));
    }
}

#[test]
fn result_fields_are_raw_unless_escaping_is_enabled() {
    let view = View::from_results("q", vec![item(1, "<b>Bold</b>", Some("<i>Cat</i>"), 90.0)]);

    let raw = render(&view, &RenderOptions::default());
    assert!(raw.contains("<b>Bold</b>"));
    assert!(raw.contains("<i>Cat</i>"));

    let escaped = render(&view, &RenderOptions { escape_result_fields: true });
    assert!(escaped.contains("&lt;b&gt;Bold&lt;/b&gt;"));
    assert!(escaped.contains("&lt;i&gt;Cat&lt;/i&gt;"));
    assert!(!escaped.contains("<b>"));
}

#[test]
fn missing_or_empty_category_becomes_other() {
    let groups = group_by_category(vec![
        item(1, "a", None, 90.0),
        item(2, "b", Some("Food"), 80.0),
        item(3, "c", Some(""), 70.0),
        item(4, "d", Some("Food"), 60.0),
    ]);
    let summary: Vec<_> = groups
        .iter()
        .map(|g| (g.category.as_str(), g.results.iter().map(|r| r.name.as_str()).collect::<Vec<_>>()))
        .collect();
    assert_eq!(
        summary,
        vec![(DEFAULT_CATEGORY, vec!["a", "c"]), ("Food", vec!["b", "d"])]
    );
}

#[test]
fn empty_results_render_no_results_block() {
    let view = View::from_results("anything", vec![]);
    assert_eq!(view, View::NoResults);
    let out = render(&view, &RenderOptions::default());
    assert!(out.contains("No matching products found"));
    assert!(!out.contains("category-section"));
    assert!(!out.contains("Search Results for"));
}

#[test]
fn card_shows_name_score_description_and_id() {
    let result = SearchResult {
        id: Some(ResultId::Text("sku-7".into())),
        name: "Smart Watch".into(),
        description: "Tracks steps".into(),
        category: Some("Electronics".into()),
        score: 87.5,
    };
    let out = render(&View::from_results("watch", vec![result]), &RenderOptions::default());

    assert!(out.contains("Search Results for \"watch\""));
    assert!(out.contains("Showing 1 product(s) ranked by relevance"));
    assert!(out.contains("Electronics <span class=\"badge bg-secondary\">1</span>"));
    assert!(out.contains("Smart Watch"));
    assert!(out.contains("87.5% match"));
    assert!(out.contains("Tracks steps"));
    assert!(out.contains("ID: sku-7"));
    assert!(out.contains("product-card score-high"));
}

#[test]
fn tier_of_each_card_follows_its_score() {
    assert_eq!(ScoreTier::from_score(80.0).css_class(), "score-high");
    assert_eq!(ScoreTier::from_score(50.0).css_class(), "score-medium");
    assert_eq!(ScoreTier::from_score(49.9).css_class(), "score-low");

    let view = View::from_results("q", vec![item(1, "low", Some("X"), 12.0)]);
    assert!(render(&view, &RenderOptions::default()).contains("product-card score-low"));
}

#[test]
fn each_render_replaces_the_previous_view() {
    let options = RenderOptions::default();
    let results = render(&View::from_results("q", vec![item(1, "a", None, 90.0)]), &options);
    let error = render(&View::Error("boom".into()), &options);
    assert!(!error.contains("category-section"));
    assert!(!results.contains("alert-danger"));
}

#[test]
fn card_without_id_omits_the_id_badge() {
    let mut result = item(1, "Rug", Some("Home"), 55.0);
    result.id = None;
    let out = render(&View::from_results("rug", vec![result]), &RenderOptions::default());
    assert!(out.contains("Rug"));
    assert!(out.contains("55% match"));
    assert!(!out.contains("ID:"));
}
