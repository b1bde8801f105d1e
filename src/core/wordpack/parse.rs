//! Wordpack source-text parsing.
//!
//! One word per line, lines trimmed, blank lines dropped. The first line that
//! is exactly `===` splits the text into a base segment and an additional
//! segment; the extended list is base followed by the additional segment.

use serde::{Deserialize, Serialize};

/// Separator line between the base and additional segments.
pub const VARIANT_SEPARATOR: &str = "===";

/// Suffix appended to a wordpack name to address its extended variant.
pub const VARIANT_SUFFIX: char = '+';

/// Word lists produced from one source text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedWordpack {
    /// Words before the separator (or all words if there is none).
    pub base: Vec<String>,
    /// Base words followed by the words after the separator.
    pub extended: Option<Vec<String>>,
}

/// Parse raw wordpack text.
pub fn parse_source(raw: &str) -> ParsedWordpack {
    let lines: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    match lines.iter().position(|line| line == VARIANT_SEPARATOR) {
        Some(split) => {
            let base = lines[..split].to_vec();
            let mut extended = base.clone();
            extended.extend_from_slice(&lines[split + 1..]);
            ParsedWordpack {
                base,
                extended: Some(extended),
            }
        }
        None => ParsedWordpack {
            base: lines,
            extended: None,
        },
    }
}

/// Split a lookup name into its base name and whether it addresses the
/// extended variant.
pub fn split_variant(name: &str) -> (&str, bool) {
    match name.strip_suffix(VARIANT_SUFFIX) {
        Some(base) => (base, true),
        None => (name, false),
    }
}

/// Name of the extended variant for `base`.
pub fn variant_name(base: &str) -> String {
    format!("{base}{VARIANT_SUFFIX}")
}
