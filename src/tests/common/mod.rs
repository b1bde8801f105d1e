//! Common Test Utilities
//!
//! Shared test helpers used across test modules:
//! - `log` record capture (`log_capture`)

pub mod log_capture;
