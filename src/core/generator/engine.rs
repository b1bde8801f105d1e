//! Word Sampling Engine
//!
//! Expands a [`GenerationRequest`] into a [`GenerationResult`]:
//!
//! 1. each player is emitted once per copy, copies contiguous and in order
//! 2. for every group a candidate pool is built from its wordpacks, skipping
//!    words already in the pool and words the player-copy already holds
//! 3. `num_words` candidates are drawn uniformly without replacement
//!
//! Any failure aborts the whole request. The random source is injected so
//! callers can seed it.

use std::collections::HashSet;

use rand::prelude::*;
use rand::rngs::StdRng;

use super::naming::resolve_player_name;
use super::request::{GenerationRequest, GroupSpec, PlayerSpec, SchemaVersion};
use super::result::{GeneratedWord, GenerationResult, PlayerResult};
use crate::core::errors::GeneratorError;
use crate::core::wordpack::WordpackStore;

/// Random word-set generator.
#[derive(Debug, Clone)]
pub struct WordGenerator<R = StdRng> {
    rng: R,
}

impl WordGenerator<StdRng> {
    /// Generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Generator with a fixed seed, for reproducible output.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for WordGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> WordGenerator<R> {
    /// Generator drawing from a caller-supplied random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Expand `request` against `store`.
    #[tracing::instrument(level = "debug", skip_all, fields(players = request.players.len()))]
    pub fn generate(
        &mut self,
        request: &GenerationRequest,
        store: &WordpackStore,
    ) -> Result<GenerationResult, GeneratorError> {
        match request.schema()? {
            SchemaVersion::V1 => self.generate_v1(request, store),
        }
    }

    fn generate_v1(
        &mut self,
        request: &GenerationRequest,
        store: &WordpackStore,
    ) -> Result<GenerationResult, GeneratorError> {
        validate_v1(request)?;

        let player_count = request.players.len();
        let qualify_names = request.output_count() > 1;
        let mut players = Vec::new();

        for (player_index, player) in request.players.iter().enumerate() {
            let copy_count = player.copies as usize;
            for copy_index in 0..copy_count {
                let name = resolve_player_name(
                    player.display_name(),
                    player_index,
                    copy_index,
                    player_count,
                    copy_count,
                );
                let words = self.draw_player(player, store, qualify_names.then_some(name.as_str()))?;
                players.push(PlayerResult { name, words });
            }
        }

        log::debug!(
            "Generated {} word sets for {} configured players",
            players.len(),
            player_count
        );
        Ok(GenerationResult { players })
    }

    /// Draw every group for one player-copy.
    fn draw_player(
        &mut self,
        player: &PlayerSpec,
        store: &WordpackStore,
        qualifier: Option<&str>,
    ) -> Result<Vec<GeneratedWord>, GeneratorError> {
        let mut words: Vec<GeneratedWord> = Vec::new();
        let mut held: HashSet<String> = HashSet::new();

        for (group_index, group) in player.groups.iter().enumerate() {
            let mut pool = candidate_pool(group, group_index, store, &held)?;
            let wanted = group.num_words as usize;

            if pool.len() < wanted {
                let available = group
                    .wordpacks
                    .iter()
                    .map(|name| store.get(name).map(|w| w.len()).unwrap_or(0))
                    .sum();
                log::debug!(
                    "Group {} wants {} words but only {} candidates remain",
                    group_index,
                    wanted,
                    pool.len()
                );
                return Err(GeneratorError::insufficient_words(
                    group.num_words,
                    group.wordpacks.clone(),
                    qualifier.map(str::to_string),
                    available,
                ));
            }

            let (drawn, _) = pool.partial_shuffle(&mut self.rng, wanted);
            for word in drawn.iter() {
                held.insert(word.word.clone());
            }
            words.extend(drawn.iter().cloned());
        }

        Ok(words)
    }
}

/// Candidates for `group`, in wordpack then store order.
///
/// A word is skipped if an earlier wordpack in the group already supplied it
/// or if it is in `held`.
pub fn candidate_pool(
    group: &GroupSpec,
    group_index: usize,
    store: &WordpackStore,
    held: &HashSet<String>,
) -> Result<Vec<GeneratedWord>, GeneratorError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut pool = Vec::new();

    for wordpack in &group.wordpacks {
        let words = store
            .get(wordpack)
            .map_err(|_| GeneratorError::unknown_wordpack(wordpack))?;
        for word in words {
            if held.contains(word) || !seen.insert(word.as_str()) {
                continue;
            }
            pool.push(GeneratedWord {
                word: word.clone(),
                wordpack_origin: wordpack.clone(),
                group_origin: group_index,
            });
        }
    }

    Ok(pool)
}

fn validate_v1(request: &GenerationRequest) -> Result<(), GeneratorError> {
    for (player_index, player) in request.players.iter().enumerate() {
        if player.copies == 0 {
            return Err(GeneratorError::invalid_request(format!(
                "player {} has zero copies",
                player_index + 1
            )));
        }
        if player.groups.is_empty() {
            return Err(GeneratorError::invalid_request(format!(
                "player {} has no groups",
                player_index + 1
            )));
        }
        if let Some(group_index) = player.groups.iter().position(|g| g.num_words == 0) {
            return Err(GeneratorError::invalid_request(format!(
                "group {} of player {} requests zero words",
                group_index + 1,
                player_index + 1
            )));
        }
    }
    Ok(())
}
