// SPDX-License-Identifier: MIT OR Apache-2.0
//! # growplot-cli
//!
//! Command-line interface for growplot - log-log growth-rate plots from
//! XML benchmark result files.
//!
//! ## Usage
//!
//! ```bash
//! # One scatter series per file, shared axes, PNG next to the first input
//! growplot copy.bench.xml insert.bench.xml
//! ```
//!
//! For each input file the tool prints the empirical growth exponent (the
//! slope of a least-squares fit through log(size) vs log(mean time)) and
//! adds one scatter series to a shared figure. The time unit is chosen
//! once for the whole run: the coarsest unit any single file needs.
//!
//! Input files are rewritten in place before parsing: benchmark runners
//! escape `<` as `&lt;` and square brackets as doubled braces, and the
//! cleanup is destructive.
//!
//! ## Library Usage
//!
//! This crate is primarily a CLI tool. For programmatic access use
//! [`growplot-core`](https://docs.rs/growplot-core) directly; this crate
//! only adds the [`figure`] rendering layer and the [`pipeline`] driver.

#![warn(missing_docs)]

/// The explicit figure object that accumulates per-file scatter series.
pub mod figure;
/// The two-pass file pipeline behind the `growplot` binary.
pub mod pipeline;

/// Re-export of growplot-core for the underlying types.
pub use growplot_core;
