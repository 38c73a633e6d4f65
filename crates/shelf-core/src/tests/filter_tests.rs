//! Tests for live filtering

use super::fixtures::{DEV_EDITOR_JSON, RecordingView, make_catalog};
use crate::catalog::{build, filter};
use crate::config::Catalog;
use std::rc::Rc;

#[test]
fn test_filter_scenario_editor() {
    let catalog = Catalog::from_json_str(DEV_EDITOR_JSON).unwrap();
    let mut view = RecordingView::default();
    let registry = build(&mut view, &catalog);

    assert_eq!(view.layout(), vec![("Dev".to_string(), vec!["Editor".to_string()])]);

    assert_eq!(filter(&view, &registry, "ed"), 1);
    assert_eq!(view.visible_names(), vec!["Editor"]);

    assert_eq!(filter(&view, &registry, "edz"), 0);
    assert!(view.visible_names().is_empty());
}

#[test]
fn test_filter_is_case_insensitive() {
    let mut view = RecordingView::default();
    let registry = build(&mut view, &make_catalog(&[("Web", &["FireFox", "Chromium"])]));

    filter(&view, &registry, "FIREF");

    assert_eq!(view.visible_names(), vec!["FireFox"]);
}

#[test]
fn test_filter_empty_query_shows_everything() {
    let mut view = RecordingView::default();
    let registry = build(&mut view, &make_catalog(&[("Web", &["Firefox", "Chromium"])]));

    filter(&view, &registry, "zzz");
    assert!(view.visible_names().is_empty());

    assert_eq!(filter(&view, &registry, ""), 2);
    assert_eq!(view.visible_names(), vec!["Firefox", "Chromium"]);
}

#[test]
fn test_filter_keeps_order_across_categories() {
    let mut view = RecordingView::default();
    let registry = build(
        &mut view,
        &make_catalog(&[
            ("Office", &["Writer", "Calc"]),
            ("Dev", &["Terminal", "Rust Analyzer"]),
        ]),
    );

    filter(&view, &registry, "r");

    assert_eq!(
        view.visible_names(),
        vec!["Writer", "Terminal", "Rust Analyzer"]
    );
}

#[test]
fn test_filter_preserves_element_identity() {
    let mut view = RecordingView::default();
    let registry = build(&mut view, &make_catalog(&[("Dev", &["Editor", "Terminal"])]));
    let before: Vec<_> = registry.iter().map(|e| Rc::clone(&e.element)).collect();

    filter(&view, &registry, "term");
    filter(&view, &registry, "");

    for (entry, original) in registry.iter().zip(&before) {
        assert!(Rc::ptr_eq(&entry.element, original));
        assert!(!entry.element.destroyed.get());
    }
    assert_eq!(registry.get(1).unwrap().element.activate().name, "Terminal");
}

#[test]
fn test_filter_matches_unicode_names() {
    let mut view = RecordingView::default();
    let registry = build(&mut view, &make_catalog(&[("Media", &["Éditeur", "Player"])]));

    filter(&view, &registry, "éDIT");

    assert_eq!(view.visible_names(), vec!["Éditeur"]);
}

mod properties {
    use super::super::fixtures::RecordingView;
    use crate::catalog::{build, filter};
    use crate::config::{Application, Catalog, Category};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn arb_name() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[a-zA-Z ]{0,12}").unwrap()
    }

    prop_compose! {
        fn arb_catalog()(
            categories in proptest::collection::vec(
                proptest::collection::vec(arb_name(), 0..6),
                0..5,
            )
        ) -> Catalog {
            Catalog {
                categories: categories
                    .into_iter()
                    .enumerate()
                    .map(|(i, apps)| Category {
                        name: format!("Category {i}"),
                        applications: apps
                            .into_iter()
                            .map(|name| Application::new(name, "/bin/true", ""))
                            .collect(),
                    })
                    .collect(),
            }
        }
    }

    fn visible_set(view: &RecordingView) -> BTreeSet<usize> {
        view.buttons
            .iter()
            .enumerate()
            .filter(|(_, b)| b.visible.get())
            .map(|(i, _)| i)
            .collect()
    }

    proptest! {
        #[test]
        fn filter_shows_exactly_the_matching_entries(
            catalog in arb_catalog(),
            query in "[a-zA-Z ]{0,4}",
        ) {
            let mut view = RecordingView::default();
            let registry = build(&mut view, &catalog);

            let shown = filter(&view, &registry, &query);

            let expected: BTreeSet<usize> = view
                .buttons
                .iter()
                .enumerate()
                .filter(|(_, b)| b.app.name.to_lowercase().contains(&query.to_lowercase()))
                .map(|(i, _)| i)
                .collect();
            prop_assert_eq!(visible_set(&view), expected.clone());
            prop_assert_eq!(shown, expected.len());
        }

        #[test]
        fn longer_query_refines_shorter(
            catalog in arb_catalog(),
            query in "[a-zA-Z ]{0,3}",
            extra in "[a-zA-Z ]",
        ) {
            let mut view = RecordingView::default();
            let registry = build(&mut view, &catalog);

            filter(&view, &registry, &query);
            let broad = visible_set(&view);

            filter(&view, &registry, &format!("{query}{extra}"));
            let narrow = visible_set(&view);

            prop_assert!(narrow.is_subset(&broad));
        }

        #[test]
        fn build_creates_one_element_per_application(catalog in arb_catalog()) {
            let mut view = RecordingView::default();
            let registry = build(&mut view, &catalog);

            prop_assert_eq!(registry.len(), catalog.application_count());
            let expected: Vec<&str> = catalog
                .categories
                .iter()
                .flat_map(|c| c.applications.iter().map(|a| a.name.as_str()))
                .collect();
            let actual: Vec<&str> = view.buttons.iter().map(|b| b.app.name.as_str()).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
