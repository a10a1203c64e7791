//! # Data Retrieval Module
//!
//! This module provides a centralized location for generic data retrieval
//! clients, primarily focused on HTTP-based interactions.
//!
//! ## Contained Modules:
//!
//! - **`ky_http`**: A generic HTTP `ApiClient` built on `reqwest`. It joins
//!   paths onto a base URL, sends one `GET` per call, and wraps every
//!   answer in an `ApiResponse` so market clients (e.g., Alpha Vantage) can
//!   focus on payload handling.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

/// Generic HTTP API client for JSON endpoints.
pub mod ky_http;
