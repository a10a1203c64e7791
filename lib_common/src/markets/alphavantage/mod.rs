//! # Alpha Vantage API Integration Module
//!
//! This module provides the query and normalization toolkit for the Alpha
//! Vantage quotes API.
//!
//! ## Contained Modules:
//!
//! - **`keys`**: The static table mapping Alpha Vantage member labels to
//!   short stable keys.
//!
//! - **`polish`**: The recursive response normalizer (`Polisher`). Renames
//!   labelled keys and rewrites date keys to ISO-8601 UTC timestamps.
//!
//! - **`util`**: `AlphaUtil`, configured once with the query base; builds
//!   query URLs and normalizes responses.
//!
//! - **`params`**: Typed `function`, `outputsize` and `interval` values.
//!
//! - **`apicall`**: `ApiCallAv`, the HTTP caller that detects Alpha Vantage
//!   error payloads.
//!
//! - **`data`** and **`performance`**: Endpoint helpers for the time series
//!   and sector performance functions.

/// Static rename table for Alpha Vantage member labels.
pub mod keys;
/// Recursive response normalizer.
pub mod polish;
/// URL builder and normalizer bound to a query base.
pub mod util;
/// Typed query parameters.
pub mod params;
/// HTTP caller with Alpha Vantage error detection.
pub mod apicall;
/// Time series endpoints.
pub mod data;
/// Sector performance endpoint.
pub mod performance;

pub use apicall::{ApiCallAv, AvError};
pub use data::TimeSeries;
pub use params::{Function, Interval, OutputSize};
pub use performance::Performance;
pub use polish::{polish, PolishError, Polisher};
pub use util::AlphaUtil;
