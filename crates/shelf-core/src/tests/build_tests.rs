//! Tests for building a view from a catalog

use super::fixtures::{RecordingView, make_catalog};
use crate::catalog::build;

#[test]
fn test_build_one_button_per_application() {
    let catalog = make_catalog(&[
        ("Internet", &["Firefox", "Thunderbird"]),
        ("Graphics", &["GIMP", "Inkscape", "Blender"]),
    ]);
    let mut view = RecordingView::default();

    let registry = build(&mut view, &catalog);

    assert_eq!(registry.len(), 5);
    assert_eq!(view.buttons.len(), 5);
}

#[test]
fn test_build_groups_under_correct_panel() {
    let catalog = make_catalog(&[
        ("Internet", &["Firefox", "Thunderbird"]),
        ("Graphics", &["GIMP"]),
        ("Empty", &[]),
    ]);
    let mut view = RecordingView::default();

    build(&mut view, &catalog);

    assert_eq!(
        view.layout(),
        vec![
            (
                "Internet".to_string(),
                vec!["Firefox".to_string(), "Thunderbird".to_string()]
            ),
            ("Graphics".to_string(), vec!["GIMP".to_string()]),
            ("Empty".to_string(), vec![]),
        ]
    );
}

#[test]
fn test_build_registry_follows_catalog_order() {
    let catalog = make_catalog(&[("B", &["Zeta", "Alpha"]), ("A", &["Mid"])]);
    let mut view = RecordingView::default();

    let registry = build(&mut view, &catalog);

    let names: Vec<&str> = registry.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    let categories: Vec<usize> = registry.iter().map(|e| e.category).collect();
    assert_eq!(categories, vec![0, 0, 1]);
}

#[test]
fn test_each_button_launches_its_own_record() {
    let catalog = make_catalog(&[("Dev", &["Editor", "Terminal"]), ("Web", &["Browser"])]);
    let mut view = RecordingView::default();

    let registry = build(&mut view, &catalog);

    let launched: Vec<String> = registry
        .iter()
        .map(|e| e.element.activate().path.clone())
        .collect();
    assert_eq!(
        launched,
        vec!["/usr/bin/editor", "/usr/bin/terminal", "/usr/bin/browser"]
    );
}

#[test]
fn test_duplicate_names_get_independent_buttons() {
    let catalog = make_catalog(&[("Dev", &["Shell"]), ("Ops", &["Shell"])]);
    let mut view = RecordingView::default();

    let registry = build(&mut view, &catalog);

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.get(0).unwrap().category, 0);
    assert_eq!(registry.get(1).unwrap().category, 1);
    assert!(!std::rc::Rc::ptr_eq(
        &registry.get(0).unwrap().element,
        &registry.get(1).unwrap().element
    ));
}

#[test]
fn test_rebuild_destroys_previous_buttons() {
    let mut view = RecordingView::default();
    let old = build(&mut view, &make_catalog(&[("Dev", &["Editor", "Terminal"])]));
    let new = build(&mut view, &make_catalog(&[("Games", &["Steam"])]));

    assert_eq!(view.clears, 2);
    assert!(old.iter().all(|e| e.element.destroyed.get()));
    assert!(old.iter().all(|e| !e.element.visible.get()));
    assert_eq!(new.len(), 1);
    assert_eq!(view.visible_names(), vec!["Steam"]);
    assert_eq!(view.panels, vec!["Games"]);
}

#[test]
fn test_build_empty_catalog() {
    let mut view = RecordingView::default();
    build(&mut view, &make_catalog(&[("Dev", &["Editor"])]));

    let registry = build(&mut view, &make_catalog(&[]));

    assert!(registry.is_empty());
    assert!(view.panels.is_empty());
    assert!(view.buttons.is_empty());
}
