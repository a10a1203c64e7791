//! # Utilities Module
//!
//! This module serves as a collection point for general-purpose helpers that
//! are shared by the other `lib_common` feature modules.
//!
//! ## Contained Modules:
//!
//! - **`misc`**: Miscellaneous helpers. At the moment this is the time
//!   formatting used by log records and by the Alpha Vantage normalizer, which
//!   both emit the same millisecond-precision UTC representation.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

/// Miscellaneous utility functions.
pub mod misc;
