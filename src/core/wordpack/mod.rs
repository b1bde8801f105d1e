//! Wordpacks
//!
//! Named word lists parsed from plain text, including `+` extended variants.

pub mod parse;
pub mod store;

pub use parse::{parse_source, split_variant, variant_name, ParsedWordpack, VARIANT_SEPARATOR, VARIANT_SUFFIX};
pub use store::WordpackStore;
