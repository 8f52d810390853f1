// SPDX-License-Identifier: MIT OR Apache-2.0
//! Core types and transforms for growplot
//!
//! This crate provides everything the `growplot` binary needs short of
//! rendering:
//!
//! - [`error`] - Error types and Result alias
//! - [`normalize`] - In-place cleanup of runner-mangled XML
//! - [`results`] - Benchmark result parsing and the Y-value pipeline
//! - [`refdata`] - Strict reference-cost interpretation of the `Data` label
//! - [`units`] - Time-unit selection and conversion
//! - [`fit`] - Log-log least-squares growth-rate fitting

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::cargo)]

/// Error types for growplot operations
pub mod error;
/// Log-log least-squares fitting
pub mod fit;
/// XML normalization applied before parsing
pub mod normalize;
/// Reference cost data parsed from the `Data` label
pub mod refdata;
/// Benchmark result documents and metadata
pub mod results;
/// Time units and nanosecond rescaling
pub mod units;

// Re-exports for convenience
pub use error::{GrowplotError, Result};
pub use fit::{GrowthFit, fit_loglog};
pub use normalize::{normalize_content, normalize_file};
pub use refdata::RefData;
pub use results::{BenchmarkEntry, ResultsFile, RunMetadata};
pub use units::{TimeUnit, convert_from_ns, unit_for_ns};
