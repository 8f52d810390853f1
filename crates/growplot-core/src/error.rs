// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for growplot operations
//!
//! Every fatal condition in the pipeline is a [`GrowplotError`] variant;
//! recoverable conditions (missing optional labels, entries without a mean)
//! never surface here.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while reading, parsing, or fitting benchmark results.
#[derive(Debug, Error)]
pub enum GrowplotError {
    /// The input file could not be read or written back.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// Path of the file being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not well-formed XML after normalization.
    #[error("malformed xml in {}: {source}", path.display())]
    Xml {
        /// Path of the offending file.
        path: PathBuf,
        /// Parser failure detail.
        #[source]
        source: roxmltree::Error,
    },

    /// A `BenchmarkResults` element whose `name` attribute is not an
    /// integer input size.
    #[error("entry name {text:?} is not an integer input size")]
    EntryName {
        /// The attribute text that failed to parse.
        text: String,
    },

    /// A `mean` element whose `value` attribute is missing or not a float.
    /// Only a genuinely absent `mean` element marks an entry as skippable.
    #[error("mean value {text:?} is not a number")]
    MeanValue {
        /// The attribute text that failed to parse.
        text: String,
    },

    /// The `Data` label is present but is neither a number nor a sequence
    /// of numbers.
    #[error("invalid <Data> value {text:?}: expected a number or a sequence of numbers")]
    RefData {
        /// The label text that failed to parse.
        text: String,
    },

    /// The reference series is shorter than the entry list.
    #[error("reference data has {len} values but entry {index} needs a divisor")]
    RefDataIndex {
        /// Length of the parsed series.
        len: usize,
        /// Entry position that had no matching divisor.
        index: usize,
    },

    /// Input that cannot support a log-log least-squares fit.
    #[error("cannot fit growth curve: {0}")]
    DegenerateFit(String),
}

/// Result alias used across growplot.
pub type Result<T> = std::result::Result<T, GrowplotError>;
