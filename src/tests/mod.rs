//! Crate-level test suites and shared helpers

pub mod common;
mod property;
