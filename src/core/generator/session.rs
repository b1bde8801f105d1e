//! Generation session.
//!
//! Owns the wordpack store and the last successful result. A failed
//! generation leaves the previous result in place.

use rand::rngs::StdRng;
use rand::Rng;

use super::engine::WordGenerator;
use super::request::GenerationRequest;
use super::result::GenerationResult;
use crate::core::errors::GeneratorError;
use crate::core::wordpack::WordpackStore;

#[derive(Debug)]
pub struct Session<R = StdRng> {
    store: WordpackStore,
    generator: WordGenerator<R>,
    last_result: Option<GenerationResult>,
}

impl<R: Rng> Session<R> {
    pub fn new(store: WordpackStore, generator: WordGenerator<R>) -> Self {
        Self {
            store,
            generator,
            last_result: None,
        }
    }

    pub fn store(&self) -> &WordpackStore {
        &self.store
    }

    /// Mutable store access; only reachable between generation calls.
    pub fn store_mut(&mut self) -> &mut WordpackStore {
        &mut self.store
    }

    /// Result of the most recent successful generation.
    pub fn last_result(&self) -> Option<&GenerationResult> {
        self.last_result.as_ref()
    }

    /// Generate and, on success, replace the stored result.
    pub fn generate(&mut self, request: &GenerationRequest) -> Result<&GenerationResult, GeneratorError> {
        match self.generator.generate(request, &self.store) {
            Ok(result) => Ok(&*self.last_result.insert(result)),
            Err(e) => {
                log::debug!("Generation failed, keeping previous result: {}", e);
                Err(e)
            }
        }
    }

    pub fn into_store(self) -> WordpackStore {
        self.store
    }
}
