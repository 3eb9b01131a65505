//! Property-based tests for lynk_core.
//!
//! The normalizer feeds the canonical memory store, so it must be total,
//! idempotent, and produce a stable alphabet for every possible input.

use lynk_core::normalize;
use proptest::prelude::*;

// ============================================================================
// Normalizer Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// **Idempotency**: normalize(normalize(x)) == normalize(x) for all x.
    #[test]
    fn normalize_idempotent(s in "\\PC{0,200}") {
        let once = normalize(&s);
        let twice = normalize(&once);
        prop_assert_eq!(&once, &twice,
            "Not idempotent!\nInput:  {:?}\nOnce:   {:?}\nTwice:  {:?}", s, once, twice);
    }

    /// **Alphabet**: output only contains lowercase ASCII letters, digits and hyphens.
    #[test]
    fn normalize_output_alphabet(s in "\\PC{0,200}") {
        let out = normalize(&s);
        prop_assert!(
            out.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "Unexpected character in {:?} (input {:?})", out, s
        );
    }

    /// **Hyphen placement**: never leading, trailing, or doubled.
    #[test]
    fn normalize_hyphens_separate_words(s in "[ a-zA-Z0-9/_.-]{0,80}") {
        let out = normalize(&s);
        prop_assert!(!out.starts_with('-'));
        prop_assert!(!out.ends_with('-'));
        prop_assert!(!out.contains("--"));
    }

    /// **Case insensitivity**: ASCII case never changes the canonical value.
    #[test]
    fn normalize_ignores_ascii_case(s in "[ a-zA-Z0-9]{0,80}") {
        prop_assert_eq!(normalize(&s.to_ascii_uppercase()), normalize(&s.to_ascii_lowercase()));
    }
}

#[test]
fn normalize_examples_from_the_product() {
    assert_eq!(normalize("UI/UX"), normalize("ui ux"));
    assert_eq!(normalize("Open Source"), "open-source");
    assert_eq!(normalize("  Design  "), "design");
}
