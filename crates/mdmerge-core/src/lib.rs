// Rust guideline compliant 2026-02-06

//! mdmerge Core Library
//!
//! This crate provides the foundational components for the mdmerge tool:
//! - Configuration (defaults, TOML file, environment overrides)
//! - Candidate enumeration (name-based Markdown filter)
//! - The merge operation itself (reset, enumerate, append)
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod merge;

pub use config::Config;
pub use error::{Error, Result};
pub use merge::{candidates, merge, MergeOutcome};
