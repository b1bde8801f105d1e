//! Wordpack Store
//!
//! Owns every parsed wordpack for a session. Entries are keyed by base name;
//! the `+` variant of an entry is addressed through the same entry, so
//! re-parsing a text without a separator drops the stale variant.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use super::parse::{parse_source, split_variant, variant_name, ParsedWordpack, VARIANT_SUFFIX};
use crate::core::errors::{FileError, WordpackError};

/// Wordpacks compiled into the binary.
const BUNDLED_WORDPACKS: &[(&str, &str)] = &[
    ("Basic", include_str!("../../../data/wordpacks/Basic.txt")),
    ("Goes words", include_str!("../../../data/wordpacks/Goes words.txt")),
];

#[derive(Debug, Clone)]
struct WordpackEntry {
    raw: String,
    parsed: ParsedWordpack,
    /// Source text this pack shipped with, if it is a default.
    default_raw: Option<String>,
}

impl WordpackEntry {
    fn new(raw: String) -> Self {
        Self {
            parsed: parse_source(&raw),
            raw,
            default_raw: None,
        }
    }

    fn reparse(&mut self, raw: String) {
        self.parsed = parse_source(&raw);
        self.raw = raw;
    }
}

/// Mapping from wordpack name to its word list.
#[derive(Debug, Clone, Default)]
pub struct WordpackStore {
    entries: IndexMap<String, WordpackEntry>,
}

impl WordpackStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the bundled default wordpacks.
    pub fn with_defaults() -> Self {
        let mut store = Self::new();
        for (name, raw) in BUNDLED_WORDPACKS {
            store.insert_default(name, raw);
        }
        store
    }

    /// Build a store from `(name, raw_text)` pairs, none of them defaults.
    pub fn from_sources<I, N, R>(sources: I) -> Result<Self, WordpackError>
    where
        I: IntoIterator<Item = (N, R)>,
        N: Into<String>,
        R: Into<String>,
    {
        let mut store = Self::new();
        for (name, raw) in sources {
            store.parse(name, raw)?;
        }
        Ok(store)
    }

    /// Parse `raw` and (re)write the entries for `name` and `name+`.
    pub fn parse(&mut self, name: impl Into<String>, raw: impl Into<String>) -> Result<(), WordpackError> {
        let name = name.into();
        validate_name(&name)?;
        let raw = raw.into();
        match self.entries.get_mut(&name) {
            Some(entry) => entry.reparse(raw),
            None => {
                self.entries.insert(name.clone(), WordpackEntry::new(raw));
            }
        }
        log::debug!("Parsed wordpack '{}'", name);
        Ok(())
    }

    /// Word list for `name`, which may address a `+` variant.
    pub fn get(&self, name: &str) -> Result<&[String], WordpackError> {
        let (base, extended) = split_variant(name);
        let entry = self
            .entries
            .get(base)
            .ok_or_else(|| WordpackError::unknown(name))?;
        if extended {
            entry
                .parsed
                .extended
                .as_deref()
                .ok_or_else(|| WordpackError::unknown(name))
        } else {
            Ok(&entry.parsed.base)
        }
    }

    /// Whether `name` (base or `+` variant) resolves.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    /// All known names, each base followed by its `+` variant when present.
    pub fn names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.entries.len() * 2);
        for (name, entry) in &self.entries {
            names.push(name.clone());
            if entry.parsed.extended.is_some() {
                names.push(variant_name(name));
            }
        }
        names
    }

    /// Base names only, in insertion order.
    pub fn base_names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw source text behind `name` (a `+` name resolves to its base entry).
    pub fn raw(&self, name: &str) -> Result<&str, WordpackError> {
        let (base, _) = split_variant(name);
        self.entries
            .get(base)
            .map(|entry| entry.raw.as_str())
            .ok_or_else(|| WordpackError::unknown(name))
    }

    // ------------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------------

    /// Add a wordpack that ships with the application.
    pub fn insert_default(&mut self, name: &str, raw: &str) {
        let mut entry = WordpackEntry::new(raw.to_string());
        entry.default_raw = Some(raw.to_string());
        self.entries.insert(name.to_string(), entry);
    }

    /// Load every `*.txt` file in `dir` as a default wordpack named by its stem.
    ///
    /// Returns the number of wordpacks loaded.
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> Result<usize, WordpackError> {
        let dir = dir.as_ref();
        let read_dir = fs::read_dir(dir).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FileError::NotFound { path: dir.to_path_buf() }
            } else {
                FileError::scan_failed(dir, e)
            }
        })?;

        let mut paths: Vec<_> = read_dir
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "txt"))
            .collect();
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                log::warn!("Skipping wordpack with non UTF-8 name: {}", path.display());
                continue;
            };
            if let Err(e) = validate_name(name) {
                log::warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
            let raw = match fs::read_to_string(&path) {
                Ok(raw) => raw,
                Err(e) => {
                    log::warn!("Skipping unreadable wordpack {}: {}", path.display(), e);
                    continue;
                }
            };
            self.insert_default(name, &raw);
            loaded += 1;
        }

        log::info!("Loaded {} wordpacks from {}", loaded, dir.display());
        Ok(loaded)
    }

    /// Create a new wordpack, empty or copying another's raw text.
    pub fn create(&mut self, name: &str, copy_from: Option<&str>) -> Result<(), WordpackError> {
        validate_name(name)?;
        if self.entries.contains_key(name) {
            return Err(WordpackError::AlreadyExists { name: name.to_string() });
        }
        let raw = match copy_from {
            Some(source) => self.raw(source)?.to_string(),
            None => String::new(),
        };
        self.entries.insert(name.to_string(), WordpackEntry::new(raw));
        log::info!("Created wordpack '{}'", name);
        Ok(())
    }

    /// Replace the text of an existing wordpack.
    pub fn edit(&mut self, name: &str, raw: impl Into<String>) -> Result<(), WordpackError> {
        let entry = self
            .entries
            .get_mut(name)
            .ok_or_else(|| WordpackError::unknown(name))?;
        entry.reparse(raw.into());
        log::debug!("Edited wordpack '{}'", name);
        Ok(())
    }

    /// Remove a user wordpack.
    pub fn delete(&mut self, name: &str) -> Result<(), WordpackError> {
        if self.is_default(name) {
            return Err(WordpackError::protected(name, "deleted"));
        }
        self.entries
            .shift_remove(name)
            .ok_or_else(|| WordpackError::unknown(name))?;
        log::info!("Deleted wordpack '{}'", name);
        Ok(())
    }

    /// Rename a user wordpack, keeping its position.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<(), WordpackError> {
        validate_name(new)?;
        if self.is_default(old) {
            return Err(WordpackError::protected(old, "renamed"));
        }
        if old == new {
            return if self.entries.contains_key(old) {
                Ok(())
            } else {
                Err(WordpackError::unknown(old))
            };
        }
        if self.entries.contains_key(new) {
            return Err(WordpackError::AlreadyExists { name: new.to_string() });
        }
        let index = self
            .entries
            .get_index_of(old)
            .ok_or_else(|| WordpackError::unknown(old))?;
        let (_, entry) = self
            .entries
            .shift_remove_index(index)
            .ok_or_else(|| WordpackError::unknown(old))?;
        self.entries.shift_insert(index, new.to_string(), entry);
        log::info!("Renamed wordpack '{}' to '{}'", old, new);
        Ok(())
    }

    pub fn is_default(&self, name: &str) -> bool {
        let (base, _) = split_variant(name);
        self.entries
            .get(base)
            .is_some_and(|entry| entry.default_raw.is_some())
    }

    /// Whether a default wordpack has been edited away from its shipped text.
    pub fn is_default_modified(&self, name: &str) -> bool {
        let (base, _) = split_variant(name);
        self.entries.get(base).is_some_and(|entry| {
            entry
                .default_raw
                .as_deref()
                .is_some_and(|default| default != entry.raw)
        })
    }

    /// Base names of all default wordpacks.
    pub fn default_names(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.default_raw.is_some())
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// `name` if unused, otherwise the first free `name (k)`.
    pub fn nearest_free_name(&self, name: &str) -> String {
        let mut candidate = name.to_string();
        while self.contains(&candidate) {
            let next = split_numbered(&candidate).and_then(|(stem, n)| n.checked_add(1).map(|n| (stem, n)));
            candidate = match next {
                Some((stem, next)) => format!("{stem} ({next})"),
                None => format!("{candidate} (2)"),
            };
        }
        candidate
    }
}

/// Split `"stem (k)"` into `("stem", k)`.
fn split_numbered(name: &str) -> Option<(&str, u64)> {
    let (stem, number) = name.strip_suffix(')')?.rsplit_once(" (")?;
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    number.parse().ok().map(|n| (stem, n))
}

fn validate_name(name: &str) -> Result<(), WordpackError> {
    if name.trim().is_empty() {
        return Err(WordpackError::invalid_name(name, "name cannot be empty"));
    }
    if name.ends_with(VARIANT_SUFFIX) {
        return Err(WordpackError::invalid_name(
            name,
            format!("names ending in '{VARIANT_SUFFIX}' are reserved for extended variants"),
        ));
    }
    Ok(())
}
