use super::*;
use crate::config::OptimizeConfig;

// ── parse_pages ───────────────────────────────────────────────────────────

#[test]
fn test_parse_pages_full_records() {
    let src = r#"[
        {"id": "a", "title": "Alpha", "links": ["b"]},
        {"id": "b", "title": "Beta", "links": []}
    ]"#;
    let pages = parse_pages(src).unwrap();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0], PageData::new("a", "Alpha", &["b"]));
    assert_eq!(pages[1].title, "Beta");
    assert!(pages[1].links.is_empty());
}

#[test]
fn test_parse_pages_defaults_title_and_links() {
    let pages = parse_pages(r#"[{"id": "solo"}]"#).unwrap();
    assert_eq!(pages[0].id, "solo");
    assert_eq!(pages[0].title, "");
    assert!(pages[0].links.is_empty());
}

#[test]
fn test_parse_pages_keeps_dangling_links() {
    let pages = parse_pages(r#"[{"id": "a", "links": ["ghost"]}]"#).unwrap();
    assert_eq!(pages[0].links, vec!["ghost".to_string()]);
}

#[test]
fn test_parse_pages_empty_list() {
    assert!(parse_pages("[]").unwrap().is_empty());
}

#[test]
fn test_parse_pages_rejects_duplicate_id() {
    let err = parse_pages(r#"[{"id": "a"}, {"id": "b"}, {"id": "a"}]"#).unwrap_err();
    match err {
        Error::DuplicatePageId { id } => assert_eq!(id, "a"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parse_pages_rejects_malformed_json() {
    let err = parse_pages("{not json").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert!(err.to_string().starts_with("invalid page list"));
}

// ── annotate_display_order ────────────────────────────────────────────────

#[test]
fn test_annotate_display_order_positions() {
    let order = vec![
        PageData::bare("c", &["a"]),
        PageData::bare("a", &[]),
        PageData::bare("b", &["c"]),
    ];
    let ranked = annotate_display_order(&order);
    let got: Vec<(&str, usize)> = ranked
        .iter()
        .map(|r| (r.id.as_str(), r.display_order))
        .collect();
    assert_eq!(got, vec![("c", 0), ("a", 1), ("b", 2)]);
    assert_eq!(ranked[0].links, vec!["a".to_string()]);
    assert_eq!(ranked[2].title, "b");
}

#[test]
fn test_ranked_page_serializes_camel_case() {
    let ranked = annotate_display_order(&[PageData::new("a", "Alpha", &["b"])]);
    let value = serde_json::to_value(&ranked[0]).unwrap();
    assert_eq!(value["displayOrder"], 0);
    assert_eq!(value["title"], "Alpha");
    assert!(value.get("display_order").is_none());
}

// ── optimize_json ─────────────────────────────────────────────────────────

#[test]
fn test_optimize_json_removes_crossing() {
    let src = r#"[
        {"id": "A", "title": "A", "links": ["C"]},
        {"id": "B", "title": "B", "links": ["D"]},
        {"id": "C", "title": "C", "links": []},
        {"id": "D", "title": "D", "links": []}
    ]"#;
    let out = crate::optimize_json(src, &OptimizeConfig::default()).unwrap();
    let ranked: Vec<RankedPage> = serde_json::from_str(&out).unwrap();
    assert_eq!(ranked.len(), 4);
    let order: Vec<PageData> = ranked
        .iter()
        .map(|r| PageData {
            id: r.id.clone(),
            title: r.title.clone(),
            links: r.links.clone(),
        })
        .collect();
    assert_eq!(crate::Score::of(&order).crossings, 0);
    for (i, r) in ranked.iter().enumerate() {
        assert_eq!(r.display_order, i);
    }
}

#[test]
fn test_optimize_json_propagates_parse_error() {
    let err = crate::optimize_json(r#"[{"id": "x"}, {"id": "x"}]"#, &OptimizeConfig::default());
    assert!(matches!(err, Err(Error::DuplicatePageId { .. })));
}
