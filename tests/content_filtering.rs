//! Filtering against a real content file.
//!
//! Exercises the catalog loader and the filter engine together the way the
//! projects page uses them.

use std::path::Path;

use folio::filter::{apply_filter, available_filters, clear_filters, toggle_filter, Selection};
use folio::models::Project;
use folio::{ContentCatalog, ContentError};

fn bundled_catalog() -> ContentCatalog {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/content.toml");
    ContentCatalog::load(&path).unwrap()
}

fn ids<'a>(projects: &[&'a Project]) -> Vec<&'a str> {
    projects.iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn test_bundled_content_loads() {
    let catalog = bundled_catalog();
    assert_eq!(catalog.projects.len(), 4);
    assert_eq!(catalog.testimonials.len(), 3);
    assert!(catalog.project("portfolio-site").is_some());
}

#[test]
fn test_bundled_facets_sorted_unique() {
    let catalog = bundled_catalog();
    let facets = available_filters(&catalog.projects);

    let mut sorted = facets.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(facets, sorted);
    assert!(facets.contains(&"Rust".to_string()));
    assert!(facets.contains(&"AI/ML".to_string()));
}

#[test]
fn test_toggle_session_over_bundled_content() {
    let catalog = bundled_catalog();

    let selection = toggle_filter(&Selection::new(), "Rust");
    assert_eq!(
        ids(&apply_filter(&catalog.projects, &selection)),
        vec!["edge-llm", "portfolio-site"]
    );

    let selection = toggle_filter(&selection, "EdTech");
    assert_eq!(
        ids(&apply_filter(&catalog.projects, &selection)),
        vec!["marking-automation", "edge-llm", "portfolio-site"]
    );

    let selection = toggle_filter(&selection, "Rust");
    assert_eq!(
        ids(&apply_filter(&catalog.projects, &selection)),
        vec!["marking-automation"]
    );

    let selection = clear_filters(&selection);
    assert_eq!(apply_filter(&catalog.projects, &selection).len(), 4);
}

#[test]
fn test_four_item_scenario() {
    let projects = vec![
        Project::new("1", "One", &["A"], &["B"]),
        Project::new("2", "Two", &["B"], &["C"]),
        Project::new("3", "Three", &["C"], &["D"]),
        Project::new("4", "Four", &["A"], &["D"]),
    ];

    let selection: Selection = ["B"].into_iter().collect();
    assert_eq!(ids(&apply_filter(&projects, &selection)), vec!["1", "2"]);

    let cleared = clear_filters(&selection);
    assert_eq!(
        ids(&apply_filter(&projects, &cleared)),
        vec!["1", "2", "3", "4"]
    );
}

#[test]
fn test_yaml_content_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content.yaml");
    std::fs::write(
        &path,
        "projects:\n  - id: solo\n    title: Solo\n    description: Only one\n    tags: [Web]\n",
    )
    .unwrap();

    let catalog = ContentCatalog::load(&path).unwrap();
    assert_eq!(available_filters(&catalog.projects), vec!["Web"]);
}

#[test]
fn test_missing_content_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ContentCatalog::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ContentError::Io { .. }));
}
