//! Property-based tests using proptest
//!
//! These tests verify path construction: template fidelity, percent-encoding
//! of dynamic segments, and query-string behavior for optional filters,
//! using randomized inputs.

use proptest::prelude::*;
use visionboard_api::resource::dispatch::{
    action_path, collection_path, item_path, nested_item_path,
};

/// Generate printable, non-blank identifiers (including path-hostile chars)
fn arb_id() -> impl Strategy<Value = String> {
    "[ -~]{1,40}".prop_filter("must not be blank", |s| !s.trim().is_empty())
}

/// Generate printable filter values
fn arb_filter() -> impl Strategy<Value = String> {
    "[ -~]{0,40}"
}

#[test]
fn collection_templates_are_exact() {
    let cases = [
        ("strategy-pillars", "strategy/pillars"),
        ("strategy-swot-entries", "strategy/swot-entries"),
        ("targets-okrs", "targets/okrs"),
        ("targets-smart-goals", "targets/smart-goals"),
        ("resources-team-members", "resources/team-members"),
        ("resources-raci-entries", "resources/raci-entries"),
        ("execution-milestones", "execution/milestones"),
        ("execution-risks", "execution/risks"),
        ("financial-budget-lines", "financial/budget-lines"),
        ("collaboration-discussions", "collaboration/discussions"),
        (
            "collaboration-knowledge-articles",
            "collaboration/knowledge-articles",
        ),
    ];

    for (key, expected) in cases {
        assert_eq!(collection_path(key, None).unwrap(), expected, "key {}", key);
    }
}

#[test]
fn no_filter_means_no_query_string() {
    for key in [
        "collaboration-discussions",
        "collaboration-knowledge-articles",
    ] {
        assert!(!collection_path(key, None).unwrap().contains('?'));
    }
}

#[test]
fn action_templates_are_exact() {
    assert_eq!(
        action_path("targets-okr-check-in", Some("okr-1")).unwrap(),
        "targets/okrs/okr-1/check-in"
    );
    assert_eq!(
        action_path("financial-run-forecast", None).unwrap(),
        "financial/forecasts/run"
    );
    assert_eq!(
        action_path("collaboration-ask-coach", None).unwrap(),
        "collaboration/coach/ask"
    );
}

proptest! {
    /// Item paths always have exactly three segments: dynamic ids can never
    /// smuggle in extra path delimiters
    #[test]
    fn item_path_has_fixed_segment_count(id in arb_id()) {
        let path = item_path("execution-risks", &id).unwrap();
        prop_assert_eq!(path.matches('/').count(), 2, "path was {}", path);
        prop_assert!(path.starts_with("execution/risks/"));
    }

    /// Nested item paths always have exactly five segments
    #[test]
    fn nested_item_path_has_fixed_segment_count(id in arb_id(), sub_id in arb_id()) {
        let path = nested_item_path("targets-okrs", &id, "key-results", &sub_id).unwrap();
        prop_assert_eq!(path.matches('/').count(), 4, "path was {}", path);
        prop_assert!(path.starts_with("targets/okrs/"));
    }

    /// Supplying a filter appends exactly one ?key=value pair with an
    /// encoded value
    #[test]
    fn filter_appends_exactly_one_pair(value in arb_filter()) {
        let path = collection_path("collaboration-discussions", Some(&value)).unwrap();
        prop_assert_eq!(path.matches('?').count(), 1);

        let query = path.split('?').nth(1).unwrap();
        prop_assert!(query.starts_with("workspace="));
        let encoded = &query["workspace=".len()..];
        // Encoded values contain no raw delimiters
        prop_assert!(!encoded.contains(' '));
        prop_assert!(!encoded.contains('&'));
        prop_assert!(!encoded.contains('?'));
        prop_assert!(!encoded.contains('/'));
    }

    /// Path construction is deterministic
    #[test]
    fn path_construction_is_deterministic(id in arb_id()) {
        let a = item_path("targets-okrs", &id).unwrap();
        let b = item_path("targets-okrs", &id).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Blank ids are always rejected
    #[test]
    fn blank_ids_rejected(spaces in " {0,10}") {
        prop_assert!(item_path("targets-okrs", &spaces).is_err());
    }

    /// Action id substitution always lands in the documented position
    #[test]
    fn check_in_action_path_shape(id in arb_id()) {
        let path = action_path("targets-okr-check-in", Some(&id)).unwrap();
        prop_assert!(path.starts_with("targets/okrs/"));
        prop_assert!(path.ends_with("/check-in"));
        prop_assert_eq!(path.matches('/').count(), 3, "path was {}", path);
    }
}
