//! Generation Presets
//!
//! Named generation requests. Bundled presets are defaults: they can be read
//! but never overwritten or removed.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::core::errors::{FileError, PresetError};
use crate::core::generator::GenerationRequest;

const BUNDLED_PRESETS: &str = include_str!("../../data/presets.json");

/// Name of the preset used when nothing else is selected.
pub const DEFAULT_PRESET: &str = "Default";

#[derive(Debug, Clone, Default)]
pub struct PresetStore {
    presets: IndexMap<String, GenerationRequest>,
    defaults: Vec<String>,
}

impl PresetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the bundled default presets.
    pub fn with_defaults() -> Result<Self, PresetError> {
        let mut store = Self::new();
        for (name, request) in parse_presets(BUNDLED_PRESETS, "bundled presets")? {
            store.insert_default(name, request);
        }
        Ok(store)
    }

    /// Add presets from a JSON file mapping names to requests.
    ///
    /// Returns the number of presets added.
    pub fn load_json(&mut self, path: impl AsRef<Path>) -> Result<usize, PresetError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| FileError::read_failed(path, e))?;
        let parsed = parse_presets(&contents, &path.display().to_string())?;
        let count = parsed.len();
        for (name, request) in parsed {
            self.set(name, request)?;
        }
        log::info!("Loaded {} presets from {}", count, path.display());
        Ok(count)
    }

    /// A copy of the named preset.
    pub fn get(&self, name: &str) -> Result<GenerationRequest, PresetError> {
        self.presets
            .get(name)
            .cloned()
            .ok_or_else(|| PresetError::not_found(name))
    }

    /// Add or replace a user preset.
    pub fn set(&mut self, name: impl Into<String>, request: GenerationRequest) -> Result<(), PresetError> {
        let name = name.into();
        if name.is_empty() {
            return Err(PresetError::MissingName);
        }
        if self.is_default(&name) {
            return Err(PresetError::protected(name, "overwrite"));
        }
        self.presets.insert(name, request);
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<GenerationRequest, PresetError> {
        if self.is_default(name) {
            return Err(PresetError::protected(name, "delete"));
        }
        self.presets
            .shift_remove(name)
            .ok_or_else(|| PresetError::not_found(name))
    }

    pub fn names(&self) -> Vec<&str> {
        self.presets.keys().map(String::as_str).collect()
    }

    pub fn default_names(&self) -> &[String] {
        &self.defaults
    }

    pub fn is_default(&self, name: &str) -> bool {
        self.defaults.iter().any(|d| d == name)
    }

    fn insert_default(&mut self, name: String, request: GenerationRequest) {
        if !self.is_default(&name) {
            self.defaults.push(name.clone());
        }
        self.presets.insert(name, request);
    }
}

fn parse_presets(json: &str, origin: &str) -> Result<IndexMap<String, GenerationRequest>, PresetError> {
    serde_json::from_str(json).map_err(|source| PresetError::Parse {
        origin: origin.to_string(),
        source,
    })
}
