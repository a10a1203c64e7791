//! # Financial Market APIs Module
//!
//! This module groups together all logic and client implementations related to
//! specific financial market data providers and their APIs. Its purpose is to
//! abstract the details of interacting with external market services, providing
//! normalized data to the rest of the system.
//!
//! ## Contained Modules:
//!
//! - **`alphavantage`**: Query URL construction, response normalization and an
//!   HTTP caller for the Alpha Vantage quotes API (time series and sector
//!   performance).

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

/// Client and normalizer for the Alpha Vantage quotes API.
pub mod alphavantage;
