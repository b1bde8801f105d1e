//! Property-based tests for the sampling engine
//!
//! Tests invariants:
//! - No duplicate words within one player-copy
//! - Group sizes match the request exactly
//! - Exhaustion boundary is exact
//! - Deterministic given same seed

use std::collections::HashSet;

use proptest::prelude::*;

use crate::core::errors::GeneratorError;
use crate::core::generator::{GenerationRequest, GroupSpec, PlayerSpec, WordGenerator};
use crate::core::wordpack::WordpackStore;

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Two overlapping packs: `A` holds words 0..a, `B` holds words b_start..b_end.
fn arb_store() -> impl Strategy<Value = (WordpackStore, usize)> {
    (1usize..30, 0usize..30, 1usize..30).prop_map(|(a, b_start, b_len)| {
        let pack_a: Vec<String> = (0..a).map(|i| format!("w{i}")).collect();
        let pack_b: Vec<String> = (b_start..b_start + b_len).map(|i| format!("w{i}")).collect();
        let distinct: HashSet<&String> = pack_a.iter().chain(pack_b.iter()).collect();
        let distinct = distinct.len();
        let store = WordpackStore::from_sources([("A", pack_a.join("\n")), ("B", pack_b.join("\n"))])
            .unwrap();
        (store, distinct)
    })
}

/// Groups whose total never exceeds `budget`.
fn arb_groups(budget: usize) -> impl Strategy<Value = Vec<GroupSpec>> {
    let wordpacks = prop_oneof![
        Just(vec!["A"]),
        Just(vec!["B"]),
        Just(vec!["A", "B"]),
        Just(vec!["B", "A"]),
    ];
    prop::collection::vec((wordpacks, 1u32..4), 1..4).prop_map(move |groups| {
        let mut remaining = budget as u32;
        groups
            .into_iter()
            .filter_map(|(packs, n)| {
                let n = n.min(remaining);
                remaining -= n;
                (n > 0).then(|| GroupSpec::new(packs, n))
            })
            .collect()
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: drawing from one combined group never repeats a word
    #[test]
    fn prop_no_duplicates_within_player(
        (store, distinct) in arb_store(),
        take in 1usize..60,
        seed in any::<u64>(),
    ) {
        let n = take.min(distinct) as u32;
        let request = GenerationRequest::new(vec![
            PlayerSpec::new(vec![GroupSpec::new(["A", "B"], n)]).with_copies(3),
        ]);
        let result = WordGenerator::with_seed(seed).generate(&request, &store).unwrap();

        prop_assert_eq!(result.len(), 3);
        for player in &result.players {
            let words: Vec<&str> = player.word_texts().collect();
            let unique: HashSet<&str> = words.iter().copied().collect();
            prop_assert_eq!(words.len(), n as usize);
            prop_assert_eq!(unique.len(), words.len());
        }
    }

    /// Property: each group contributes exactly `num_words` words, tagged with its index
    #[test]
    fn prop_group_counts((groups, seed) in (1usize..8).prop_flat_map(|budget| (arb_groups(budget), any::<u64>()))) {
        // Both packs hold at least 8 words and overlap entirely on w0..w7.
        let words: Vec<String> = (0..8).map(|i| format!("w{i}")).collect();
        let store = WordpackStore::from_sources([("A", words.join("\n")), ("B", words.join("\n"))]).unwrap();

        let request = GenerationRequest::new(vec![PlayerSpec::new(groups.clone())]);
        let result = WordGenerator::with_seed(seed).generate(&request, &store).unwrap();

        let player = &result.players[0];
        for (index, group) in groups.iter().enumerate() {
            prop_assert_eq!(player.group_words(index).count(), group.num_words as usize);
        }
        let unique: HashSet<&str> = player.word_texts().collect();
        prop_assert_eq!(unique.len(), player.words.len());
    }

    /// Property: a pool of k distinct words satisfies k and rejects k + 1
    #[test]
    fn prop_exhaustion_boundary((store, distinct) in arb_store(), seed in any::<u64>()) {
        let mut generator = WordGenerator::with_seed(seed);

        let exact = GenerationRequest::new(vec![
            PlayerSpec::new(vec![GroupSpec::new(["A", "B"], distinct as u32)]),
        ]);
        let result = generator.generate(&exact, &store).unwrap();
        prop_assert_eq!(result.players[0].words.len(), distinct);

        let over = GenerationRequest::new(vec![
            PlayerSpec::new(vec![GroupSpec::new(["A", "B"], distinct as u32 + 1)]),
        ]);
        let is_insufficient = matches!(
            generator.generate(&over, &store),
            Err(GeneratorError::InsufficientWords { .. })
        );
        prop_assert!(is_insufficient);
    }

    /// Property: the same seed yields the same result
    #[test]
    fn prop_deterministic_with_seed((store, distinct) in arb_store(), seed in any::<u64>()) {
        let n = (distinct as u32).min(5);
        let request = GenerationRequest::new(vec![
            PlayerSpec::new(vec![GroupSpec::new(["B", "A"], n)]).with_copies(2),
            PlayerSpec::new(vec![GroupSpec::new(["A"], 1)]).with_name("GM"),
        ]);

        let first = WordGenerator::with_seed(seed).generate(&request, &store).unwrap();
        let second = WordGenerator::with_seed(seed).generate(&request, &store).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: copies expand in order with stable names
    #[test]
    fn prop_copy_expansion(copies in 1u32..6, seed in any::<u64>()) {
        let store = WordpackStore::from_sources([("A", "x\ny\nz")]).unwrap();
        let request = GenerationRequest::new(vec![
            PlayerSpec::new(vec![GroupSpec::new(["A"], 1)]).with_copies(copies),
            PlayerSpec::new(vec![GroupSpec::new(["A"], 1)]).with_name("GM"),
        ]);
        let result = WordGenerator::with_seed(seed).generate(&request, &store).unwrap();

        prop_assert_eq!(result.len(), copies as usize + 1);
        for (copy, player) in result.players.iter().take(copies as usize).enumerate() {
            let expected = if copies > 1 {
                format!("Player 1 [{copy}]")
            } else {
                "Player 1".to_string()
            };
            prop_assert_eq!(&player.name, &expected);
        }
        prop_assert_eq!(&result.players[copies as usize].name, "GM");
    }
}
