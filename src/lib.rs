//! Sygil - word-set generator for the Sygil tabletop magic system
//!
//! Loads wordpacks, expands per-player generation requests and draws unique
//! random words for each player.

pub mod cli;
pub mod config;
pub mod core;

#[cfg(test)]
mod tests;

pub use crate::core::errors::{GeneratorError, Result, SygilError, WordpackError};
pub use crate::core::generator::{
    GeneratedWord, GenerationRequest, GenerationResult, GroupSpec, PlayerResult, PlayerSpec, Session,
    WordGenerator,
};
pub use crate::core::wordpack::WordpackStore;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
