//! Property-based tests for wordpack parsing

use proptest::prelude::*;

use crate::core::wordpack::{parse_source, WordpackStore};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// A word without surrounding whitespace that is never the separator.
fn arb_word() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,10}[A-Za-z]|[A-Za-z]"
}

/// A line as a user might type it: padded word or blank.
fn arb_line() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => (arb_word(), "[ \t]{0,3}", "[ \t]{0,3}").prop_map(|(w, l, r)| format!("{l}{w}{r}")),
        1 => "[ \t]{0,4}",
    ]
}

fn expected_words(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: without a separator the pack equals the trimmed non-blank lines
    #[test]
    fn prop_parse_without_separator(lines in prop::collection::vec(arb_line(), 0..40)) {
        let raw = lines.join("\n");
        let parsed = parse_source(&raw);

        prop_assert_eq!(parsed.base, expected_words(&lines));
        prop_assert!(parsed.extended.is_none());
    }

    /// Property: with a separator the variant is base then the rest
    #[test]
    fn prop_parse_with_separator(
        before in prop::collection::vec(arb_line(), 0..20),
        after in prop::collection::vec(arb_line(), 0..20),
    ) {
        let raw = format!("{}\n===\n{}", before.join("\n"), after.join("\n"));
        let parsed = parse_source(&raw);

        let base = expected_words(&before);
        let mut extended = base.clone();
        extended.extend(expected_words(&after));

        prop_assert_eq!(&parsed.base, &base);
        prop_assert_eq!(parsed.extended, Some(extended));
    }

    /// Property: the store exposes `name+` exactly when the text has a separator
    #[test]
    fn prop_store_variant_presence(
        lines in prop::collection::vec(arb_line(), 0..20),
        with_separator in any::<bool>(),
    ) {
        let mut raw = lines.join("\n");
        if with_separator {
            raw.push_str("\n===\nExtra");
        }
        let mut store = WordpackStore::new();
        store.parse("Pack", raw.clone()).unwrap();
        // Re-parsing the same text is a no-op.
        store.parse("Pack", raw).unwrap();

        prop_assert_eq!(store.contains("Pack+"), with_separator);
        if with_separator {
            let base = store.get("Pack").unwrap().to_vec();
            prop_assert!(store.get("Pack+").unwrap().starts_with(&base));
        }
    }
}
