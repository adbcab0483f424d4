//! Common utility functions shared across the LoreKeepr crates.
//!
//! Pure functions only - no side effects, no I/O.

pub mod string;

pub use string::{none_if_empty, some_if_not_empty, trimmed_non_empty};
