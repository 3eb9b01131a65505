//! Property-based tests for lynk_reasoning decisions and tag splitting.
//!
//! The decision engine must be total over arbitrary inputs, and the tag
//! splitter must never hand the memory layer a blank or padded token.

use lynk_core::{Action, AgentInput};
use lynk_reasoning::skills::split_tags;
use lynk_reasoning::DecisionEngine;
use proptest::prelude::*;

fn arb_field() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("RESOURCE_ENRICH".to_string())),
        Just(Some("LINK_SAVED".to_string())),
        "\\PC{0,40}".prop_map(Some),
    ]
}

fn arb_input() -> impl Strategy<Value = AgentInput> {
    (arb_field(), arb_field(), arb_field(), arb_field()).prop_map(|(event, resource_id, url, persona)| {
        AgentInput {
            event,
            resource_id,
            url,
            persona,
            ..Default::default()
        }
    })
}

// ============================================================================
// Decision Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Every input gets a decision with confidence in [0, 1] and a reason.
    #[test]
    fn decision_is_total(input in arb_input()) {
        let d = DecisionEngine::with_defaults().decide(&input);
        prop_assert!((0.0..=1.0).contains(&d.confidence));
        prop_assert!(!d.reason.is_empty());
    }

    /// Identifying fields always win, whatever the event says.
    #[test]
    fn resource_fields_always_enrich(input in arb_input(), id in "[a-z0-9]{1,12}", url in "https://[a-z]{1,10}\\.com") {
        let input = AgentInput { resource_id: Some(id), url: Some(url), ..input };
        let d = DecisionEngine::with_defaults().decide(&input);
        prop_assert_eq!(d.action, Action::Enrich);
        prop_assert_eq!(d.confidence, 0.75);
    }

    /// Without an id or url, only the two known events enrich.
    #[test]
    fn only_known_events_enrich_bare_input(event in arb_field()) {
        let input = AgentInput { event: event.clone(), ..Default::default() };
        let d = DecisionEngine::with_defaults().decide(&input);
        let known = matches!(event.as_deref(), Some("RESOURCE_ENRICH") | Some("LINK_SAVED"));
        prop_assert_eq!(d.should_enrich(), known);
    }

    /// Deciding twice gives the same answer.
    #[test]
    fn decision_is_deterministic(input in arb_input()) {
        let engine = DecisionEngine::with_defaults();
        let a = engine.decide(&input);
        let b = engine.decide(&input);
        prop_assert_eq!(a.action, b.action);
        prop_assert_eq!(a.confidence, b.confidence);
        prop_assert_eq!(a.reason, b.reason);
    }
}

// ============================================================================
// Tag Splitting Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn split_tags_yields_trimmed_non_empty(s in "\\PC{0,200}") {
        for tag in split_tags(&s) {
            prop_assert!(!tag.is_empty());
            prop_assert_eq!(tag.trim(), tag.as_str());
            prop_assert!(!tag.contains(','));
        }
    }

    /// Joining with ", " and splitting again is lossless.
    #[test]
    fn split_tags_recovers_joined_list(tags in prop::collection::vec("[a-z][a-z0-9 /-]{0,15}[a-z0-9]", 0..8)) {
        let joined = tags.join(", ");
        prop_assert_eq!(split_tags(&joined), tags);
    }
}
