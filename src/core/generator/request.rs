//! Generation request data model.
//!
//! Wire shape (schema version 1):
//!
//! ```text
//! GenerationRequest
//!   +-- schema_version: 1
//!   +-- players: Vec<PlayerSpec>
//!         +-- name: Option<String>
//!         +-- copies: u32 (default 1)
//!         +-- groups: Vec<GroupSpec>
//!               +-- wordpacks: Vec<String>
//!               +-- num_words: u32
//! ```

use serde::{Deserialize, Serialize};

use crate::core::errors::GeneratorError;

/// Schema version written by this crate.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Request schema versions this generator implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaVersion {
    V1,
}

impl TryFrom<u32> for SchemaVersion {
    type Error = GeneratorError;

    fn try_from(version: u32) -> Result<Self, Self::Error> {
        match version {
            1 => Ok(Self::V1),
            version => Err(GeneratorError::UnsupportedSchemaVersion { version }),
        }
    }
}

fn default_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

fn default_copies() -> u32 {
    1
}

// ============================================================================
// Request
// ============================================================================

/// Ordered list of players to generate words for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub players: Vec<PlayerSpec>,
}

impl GenerationRequest {
    /// Create a request at the current schema version.
    pub fn new(players: Vec<PlayerSpec>) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            players,
        }
    }

    /// Resolve the declared schema version.
    pub fn schema(&self) -> Result<SchemaVersion, GeneratorError> {
        SchemaVersion::try_from(self.schema_version)
    }

    /// Parse a request from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Number of player results this request expands to.
    pub fn output_count(&self) -> u64 {
        self.players.iter().map(|p| u64::from(p.copies)).sum()
    }

    /// Every wordpack name referenced by any group, first mention first.
    pub fn wordpack_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for group in self.players.iter().flat_map(|p| &p.groups) {
            for name in &group.wordpacks {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }
}

// ============================================================================
// Player
// ============================================================================

/// One configured player, expanded into `copies` identical results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpec {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_copies")]
    pub copies: u32,
    pub groups: Vec<GroupSpec>,
}

impl PlayerSpec {
    /// An unnamed single-copy player.
    pub fn new(groups: Vec<GroupSpec>) -> Self {
        Self {
            name: None,
            copies: 1,
            groups,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_copies(mut self, copies: u32) -> Self {
        self.copies = copies;
        self
    }

    /// Configured name, treating an empty string as unset.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

// ============================================================================
// Group
// ============================================================================

/// Request for `num_words` unique words from the union of `wordpacks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSpec {
    #[serde(default)]
    pub wordpacks: Vec<String>,
    pub num_words: u32,
}

impl GroupSpec {
    pub fn new<I, S>(wordpacks: I, num_words: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            wordpacks: wordpacks.into_iter().map(Into::into).collect(),
            num_words,
        }
    }
}
