//! Property-based tests for the word-set generator
//!
//! ## Test Modules
//!
//! - `wordpack_props`: source-text parsing
//!   - Without `===`, the pack is the trimmed non-blank lines in order
//!   - With `===`, the `+` variant is base lines then the remaining lines
//!
//! - `generator_props`: sampling engine
//!   - No word repeats within one player-copy
//!   - Each group yields exactly `num_words` words
//!   - A pool of exactly `k` words satisfies `k` and rejects `k + 1`
//!   - Copies expand in order with the documented names
//!
//! By default, proptest runs 256 cases per property. Override with
//! `PROPTEST_CASES`.

mod generator_props;
mod wordpack_props;
