// SPDX-License-Identifier: MIT OR Apache-2.0
//! Reference cost data from the `Data` label
//!
//! The `Data` label carries an external cost to divide raw timings by, for
//! example the number of items per operation to get per-item cost. The
//! accepted grammar is deliberately strict: a single number, or a
//! `[..]`-bracketed comma-separated sequence of numbers aligned
//! positionally with the benchmark entries. Anything else is a fatal
//! configuration error.

use crate::error::{GrowplotError, Result};

/// Reference cost used to normalize raw timings before plotting.
#[derive(Debug, Clone, PartialEq)]
pub enum RefData {
    /// Every entry is divided by the same value.
    Scalar(f64),
    /// Entry `i` is divided by the `i`-th value.
    Series(Vec<f64>),
}

impl RefData {
    /// Parses the textual content of a `Data` label.
    ///
    /// # Errors
    ///
    /// Returns [`GrowplotError::RefData`] when the text is neither a number
    /// nor a bracketed sequence of numbers.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let invalid = || GrowplotError::RefData {
            text: text.to_owned(),
        };

        if let Some(inner) = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            let inner = inner.trim();
            if inner.is_empty() {
                return Ok(Self::Series(Vec::new()));
            }
            let values = inner
                .split(',')
                .map(|item| item.trim().parse::<f64>().map_err(|_| invalid()))
                .collect::<Result<Vec<f64>>>()?;
            return Ok(Self::Series(values));
        }

        trimmed.parse::<f64>().map(Self::Scalar).map_err(|_| invalid())
    }

    /// The divisor for the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GrowplotError::RefDataIndex`] when a series has no value
    /// at `index`.
    pub fn divisor(&self, index: usize) -> Result<f64> {
        match self {
            Self::Scalar(value) => Ok(*value),
            Self::Series(values) => {
                values
                    .get(index)
                    .copied()
                    .ok_or(GrowplotError::RefDataIndex {
                        len: values.len(),
                        index,
                    })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RefData;
    use crate::error::GrowplotError;

    #[test]
    fn parses_scalar() {
        assert_eq!(RefData::parse("1000").unwrap(), RefData::Scalar(1000.0));
        assert_eq!(RefData::parse(" 2.5 ").unwrap(), RefData::Scalar(2.5));
    }

    #[test]
    fn parses_sequence() {
        assert_eq!(
            RefData::parse("[1, 2, 4.5]").unwrap(),
            RefData::Series(vec![1.0, 2.0, 4.5])
        );
        assert_eq!(RefData::parse("[]").unwrap(), RefData::Series(Vec::new()));
    }

    #[test]
    fn rejects_other_shapes() {
        for text in ["{'a': 1}", "(1, 2)", "[1; 2]", "abc", "[1, x]", "__import__('os')"] {
            assert!(matches!(
                RefData::parse(text),
                Err(GrowplotError::RefData { .. })
            ));
        }
    }

    #[test]
    fn scalar_divisor_ignores_index() {
        let data = RefData::Scalar(8.0);
        assert_eq!(data.divisor(0).unwrap(), 8.0);
        assert_eq!(data.divisor(99).unwrap(), 8.0);
    }

    #[test]
    fn series_divisor_is_positional_and_bounded() {
        let data = RefData::Series(vec![1.0, 2.0]);
        assert_eq!(data.divisor(1).unwrap(), 2.0);
        assert!(matches!(
            data.divisor(2),
            Err(GrowplotError::RefDataIndex { len: 2, index: 2 })
        ));
    }
}
