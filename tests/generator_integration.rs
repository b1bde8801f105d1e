//! Integration tests for the word-set generator.
//!
//! These tests drive the public API end to end: wordpacks loaded from a
//! directory, presets read from JSON, generation through a session and
//! Markdown rendering of the result.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test generator_integration
//! ```

use std::collections::HashSet;
use std::fs;

use sygil::core::errors::GeneratorError;
use sygil::core::generator::{GenerationRequest, GroupSpec, PlayerSpec, Session, WordGenerator};
use sygil::core::presets::PresetStore;
use sygil::core::render::{render_markdown, RenderOptions};
use sygil::core::wordpack::WordpackStore;

/// Write a wordpack directory and return its handle.
fn wordpack_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("Elements.txt"),
        "Fire\nWater\n\n  Earth  \nAir\n===\nAether\nVoid\n",
    )
    .unwrap();
    fs::write(dir.path().join("Verbs.txt"), "Burn\nFreeze\nFire\n").unwrap();
    fs::write(dir.path().join("notes.md"), "not a wordpack").unwrap();
    dir
}

fn loaded_store() -> (tempfile::TempDir, WordpackStore) {
    let dir = wordpack_dir();
    let mut store = WordpackStore::new();
    let loaded = store.load_dir(dir.path()).unwrap();
    assert_eq!(loaded, 2);
    (dir, store)
}

#[test]
fn test_load_dir_parses_variants() {
    let (_dir, store) = loaded_store();

    assert_eq!(store.names(), vec!["Elements", "Elements+", "Verbs"]);
    assert_eq!(store.get("Elements").unwrap(), ["Fire", "Water", "Earth", "Air"]);
    assert_eq!(
        store.get("Elements+").unwrap(),
        ["Fire", "Water", "Earth", "Air", "Aether", "Void"]
    );
    assert!(store.is_default("Verbs"));
    assert!(!store.contains("Verbs+"));
}

#[test]
fn test_load_dir_missing_directory() {
    let mut store = WordpackStore::new();
    assert!(store.load_dir("/definitely/not/a/wordpack/dir").is_err());
}

#[test]
fn test_generate_from_loaded_packs() {
    let (_dir, store) = loaded_store();
    let request = GenerationRequest::new(vec![
        PlayerSpec::new(vec![
            GroupSpec::new(["Elements+"], 3),
            GroupSpec::new(["Verbs", "Elements"], 3),
        ])
        .with_copies(2),
        PlayerSpec::new(vec![GroupSpec::new(["Verbs"], 1)]).with_name("GM"),
    ]);

    let mut session = Session::new(store, WordGenerator::with_seed(11));
    let result = session.generate(&request).unwrap();

    assert_eq!(result.names(), vec!["Player 1 [0]", "Player 1 [1]", "GM"]);
    for player in &result.players[..2] {
        assert_eq!(player.words.len(), 6);
        let unique: HashSet<&str> = player.word_texts().collect();
        assert_eq!(unique.len(), 6);
        assert!(player.group_words(0).all(|w| w.wordpack_origin == "Elements+"));
    }
    assert_eq!(result.players[2].words.len(), 1);
}

#[test]
fn test_failed_generation_keeps_previous_result() {
    let (_dir, store) = loaded_store();
    let mut session = Session::new(store, WordGenerator::with_seed(5));

    let ok = GenerationRequest::new(vec![PlayerSpec::new(vec![GroupSpec::new(["Verbs"], 3)])]);
    let first = session.generate(&ok).unwrap().clone();

    // Verbs only holds three words.
    let too_many = GenerationRequest::new(vec![PlayerSpec::new(vec![GroupSpec::new(["Verbs"], 4)])]);
    let err = session.generate(&too_many).unwrap_err();
    assert!(matches!(err, GeneratorError::InsufficientWords { available: 3, .. }));
    assert_eq!(
        err.to_string(),
        "Cannot generate 4 unique words from wordpacks [\"Verbs\"]. \
         Please reduce the number of words or add more wordpacks."
    );

    assert_eq!(session.last_result(), Some(&first));
}

#[test]
fn test_presets_from_json_drive_generation() {
    let dir = tempfile::tempdir().unwrap();
    let presets_path = dir.path().join("presets.json");
    fs::write(
        &presets_path,
        r#"{
            "Duel": {
                "schema_version": 1,
                "players": [
                    {"name": "Red", "groups": [{"wordpacks": ["Basic"], "num_words": 4}]},
                    {"name": "Blue", "groups": [{"wordpacks": ["Basic+"], "num_words": 4}]}
                ]
            }
        }"#,
    )
    .unwrap();

    let mut presets = PresetStore::with_defaults().unwrap();
    assert_eq!(presets.load_json(&presets_path).unwrap(), 1);
    assert!(presets.is_default("Default"));
    assert!(!presets.is_default("Duel"));

    let request = presets.get("Duel").unwrap();
    let result = WordGenerator::with_seed(3)
        .generate(&request, &WordpackStore::with_defaults())
        .unwrap();
    assert_eq!(result.names(), vec!["Red", "Blue"]);

    let rendered = render_markdown(&result, &RenderOptions::default());
    assert!(rendered.starts_with("### Red\n"));
    assert!(rendered.contains("\n### Blue\n"));
    assert_eq!(rendered.lines().count(), 4);
}

#[test]
fn test_default_preset_with_bundled_wordpacks() {
    let presets = PresetStore::with_defaults().unwrap();
    let request = presets.get("Default").unwrap();
    let result = WordGenerator::with_seed(1)
        .generate(&request, &WordpackStore::with_defaults())
        .unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result.players[0].words.len(), 10);
    let rendered = render_markdown(&result, &RenderOptions::default());
    assert!(!rendered.starts_with("###"));
    assert_eq!(rendered.matches(", ").count(), 9);
}

#[test]
fn test_request_json_round_trip_through_generation() {
    let json = r#"{"players": [{"copies": 3, "groups": [{"wordpacks": ["Goes words"], "num_words": 2}]}]}"#;
    let request = GenerationRequest::from_json(json).unwrap();
    assert_eq!(request.schema_version, 1);

    let result = WordGenerator::with_seed(9)
        .generate(&request, &WordpackStore::with_defaults())
        .unwrap();
    assert_eq!(result.names(), vec!["Player 1", "Player 2", "Player 3"]);

    let encoded = result.to_json_pretty().unwrap();
    let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 3);
    assert_eq!(value[0]["words"][0]["wordpack_origin"], "Goes words");
}
