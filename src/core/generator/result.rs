//! Generation result data model.

use serde::{Deserialize, Serialize};

/// A drawn word tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratedWord {
    pub word: String,
    pub wordpack_origin: String,
    pub group_origin: usize,
}

/// Words assigned to one player-copy, in group order then draw order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerResult {
    pub name: String,
    pub words: Vec<GeneratedWord>,
}

impl PlayerResult {
    /// Word texts in output order.
    pub fn word_texts(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.word.as_str())
    }

    /// Words drawn for the group at `group_index`.
    pub fn group_words(&self, group_index: usize) -> impl Iterator<Item = &GeneratedWord> {
        self.words.iter().filter(move |w| w.group_origin == group_index)
    }
}

/// One entry per (player, copy), in request order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenerationResult {
    pub players: Vec<PlayerResult>,
}

impl GenerationResult {
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.players.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
