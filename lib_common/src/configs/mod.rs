//! # Configuration Modules
//!
//! This module aggregates the configuration providers of the crate.

/// Alpha Vantage client settings from the environment or a JSON5 file.
pub mod config_av;
