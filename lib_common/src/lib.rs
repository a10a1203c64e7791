//! # lib_common
//!
//! Shared library for the `rsdev` market tools. Modules are gated by cargo
//! features so binaries only pull the dependencies they use:
//!
//! | Feature    | Module      | Contents |
//! |------------|-------------|----------|
//! | `utils`    | `utils`     | time formatting helpers |
//! | `loggers`  | `loggers`   | `LoggerLocal` and `Logrecord` |
//! | `configs`  | `configs`   | `AvConfig` (environment / JSON5) |
//! | `retrieve` | `retrieve`  | `ApiClient` over `reqwest` |
//! | `markets`  | `markets`   | Alpha Vantage toolkit |
//! | `full`     | all of the above | |

#[cfg(feature = "configs")]
pub mod configs;
#[cfg(feature = "loggers")]
pub mod loggers;
#[cfg(feature = "markets")]
pub mod markets;
#[cfg(feature = "retrieve")]
pub mod retrieve;
#[cfg(feature = "utils")]
pub mod utils;
