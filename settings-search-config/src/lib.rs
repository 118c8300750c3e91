//! Configuration system for the settings-search filter engine.
//!
//! This crate provides loading, saving, and default values for the engine's
//! tunables:
//!
//! - Matching options (case sensitivity)
//! - Collapsible auto-expand policy
//! - The implicit key/value row heuristic
//! - Log verbosity for the command-line tool

pub mod config;
pub mod defaults;
mod error;
pub mod types;

pub use config::SearchConfig;
pub use error::ConfigError;
pub use types::LogLevel;
