//! Sygil Error Types
//!
//! Error enums for the wordpack store, the generator, presets and file loading.
//! Uses thiserror for structured context and miette for user-facing help.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Wordpack Errors
// ============================================================================

/// Errors raised by the wordpack store.
#[derive(Error, Debug, Diagnostic)]
pub enum WordpackError {
    /// Lookup of a name the store does not know.
    #[error("Unknown wordpack '{name}'")]
    #[diagnostic(code(sygil::unknown_wordpack), help("Run `sygil wordpacks list` to see available wordpacks"))]
    UnknownWordpack { name: String },

    /// Name is empty or collides with the `+` variant convention.
    #[error("Invalid wordpack name '{name}': {reason}")]
    #[diagnostic(code(sygil::invalid_wordpack_name))]
    InvalidName { name: String, reason: String },

    /// A wordpack with this name already exists.
    #[error("A wordpack named '{name}' already exists")]
    #[diagnostic(code(sygil::wordpack_exists))]
    AlreadyExists { name: String },

    /// Bundled defaults cannot be deleted or renamed.
    #[error("Wordpack '{name}' is a default wordpack and cannot be {action}")]
    #[diagnostic(code(sygil::protected_wordpack))]
    ProtectedWordpack { name: String, action: String },

    /// Reading wordpack sources from disk failed.
    #[error(transparent)]
    #[diagnostic(code(sygil::wordpack_load))]
    Load(#[from] FileError),
}

impl WordpackError {
    /// Create an UnknownWordpack error.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownWordpack { name: name.into() }
    }

    /// Create an InvalidName error.
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a ProtectedWordpack error.
    pub fn protected(name: impl Into<String>, action: impl Into<String>) -> Self {
        Self::ProtectedWordpack {
            name: name.into(),
            action: action.into(),
        }
    }

    /// Check if the caller can fix this by changing its input and retrying.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Load(_))
    }
}

// ============================================================================
// Generator Errors
// ============================================================================

/// Errors raised while expanding a generation request.
///
/// Every variant aborts the whole request; no partial result is produced.
#[derive(Error, Debug, Diagnostic)]
pub enum GeneratorError {
    /// A group references a wordpack the store does not hold.
    #[error("Unknown wordpack '{name}'")]
    #[diagnostic(code(sygil::unknown_wordpack), help("Fix the request or add the wordpack, then generate again"))]
    UnknownWordpack { name: String },

    /// The request declares a schema version this generator does not implement.
    #[error("Unsupported generator schema version: {version}")]
    #[diagnostic(code(sygil::unsupported_schema_version), help("Only schema version 1 is supported"))]
    UnsupportedSchemaVersion { version: u32 },

    /// A group's de-duplicated candidate pool is smaller than the requested count.
    #[error(
        "Cannot generate {num_words} unique words from wordpacks {wordpacks:?}{}. \
         Please reduce the number of words or add more wordpacks.",
        .player.as_ref().map(|p| format!(" ({p})")).unwrap_or_default()
    )]
    #[diagnostic(code(sygil::insufficient_words))]
    InsufficientWords {
        num_words: u32,
        wordpacks: Vec<String>,
        player: Option<String>,
        /// Raw summed length of the listed wordpacks.
        available: usize,
        #[help]
        hint: String,
    },

    /// Structurally invalid request (zero copies, zero words).
    #[error("Invalid generation request: {reason}")]
    #[diagnostic(code(sygil::invalid_request))]
    InvalidRequest { reason: String },
}

impl GeneratorError {
    /// Create an UnknownWordpack error.
    pub fn unknown_wordpack(name: impl Into<String>) -> Self {
        Self::UnknownWordpack { name: name.into() }
    }

    /// Create an InsufficientWords error with its validation hint.
    pub fn insufficient_words(
        num_words: u32,
        wordpacks: Vec<String>,
        player: Option<String>,
        available: usize,
    ) -> Self {
        let hint = if wordpacks.is_empty() {
            "No wordpacks selected.".to_string()
        } else {
            format!(
                "These wordpacks only have {available} word{}.",
                if available == 1 { "" } else { "s" }
            )
        };
        Self::InsufficientWords {
            num_words,
            wordpacks,
            player,
            available,
            hint,
        }
    }

    /// Create an InvalidRequest error.
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            reason: reason.into(),
        }
    }

    /// All generator failures are reported and leave prior state intact.
    pub fn is_recoverable(&self) -> bool {
        true
    }
}

// ============================================================================
// Preset Errors
// ============================================================================

/// Errors raised by the preset store.
#[derive(Error, Debug, Diagnostic)]
pub enum PresetError {
    #[error("Preset '{name}' not found")]
    #[diagnostic(code(sygil::preset_not_found), help("Run `sygil presets list` to see available presets"))]
    NotFound { name: String },

    #[error("Preset must have a name")]
    #[diagnostic(code(sygil::preset_missing_name))]
    MissingName,

    #[error("Cannot {action} default preset \"{name}\"")]
    #[diagnostic(code(sygil::protected_preset))]
    ProtectedPreset { name: String, action: String },

    #[error("Failed to parse presets from {origin}: {source}")]
    #[diagnostic(code(sygil::preset_parse))]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    #[diagnostic(code(sygil::preset_load))]
    Load(#[from] FileError),
}

impl PresetError {
    /// Create a NotFound error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Create a ProtectedPreset error.
    pub fn protected(name: impl Into<String>, action: impl Into<String>) -> Self {
        Self::ProtectedPreset {
            name: name.into(),
            action: action.into(),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::MissingName | Self::ProtectedPreset { .. }
        )
    }
}

// ============================================================================
// File Errors
// ============================================================================

/// Errors that can occur while reading wordpack or preset files.
#[derive(Error, Debug, Diagnostic)]
pub enum FileError {
    /// File or directory not found.
    #[error("File not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read file.
    #[error("Failed to read file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory scan failed.
    #[error("Failed to scan directory {path}: {source}")]
    ScanFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FileError {
    /// Classify an I/O error from reading `path`.
    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::ReadFailed { path, source }
        }
    }

    /// Create a ScanFailed error.
    pub fn scan_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ScanFailed {
            path: path.into(),
            source,
        }
    }
}

// ============================================================================
// Config Errors
// ============================================================================

/// Errors reading `config.toml`. The binary falls back to defaults on these.
#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("Failed to parse config at {path}: {source}")]
    #[diagnostic(code(sygil::config_parse), help("Fix or remove the file; defaults are used until then"))]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    #[diagnostic(code(sygil::config_read))]
    Read(#[from] FileError),
}

impl ConfigError {
    /// A parse error is fixed by editing the file; read errors need the environment fixed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

// ============================================================================
// Unified Error
// ============================================================================

/// Unified error type for the library surface.
#[derive(Error, Debug, Diagnostic)]
pub enum SygilError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Wordpack(#[from] WordpackError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Generator(#[from] GeneratorError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Preset(#[from] PresetError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    File(#[from] FileError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

/// Type alias for Result with SygilError.
pub type Result<T> = std::result::Result<T, SygilError>;

// ============================================================================
// Tests
// ============================================================================
