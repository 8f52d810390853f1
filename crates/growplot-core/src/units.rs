// SPDX-License-Identifier: MIT OR Apache-2.0
//! Time units and nanosecond rescaling
//!
//! Raw timings arrive in nanoseconds. A run-wide display unit is chosen by
//! walking from nanoseconds towards seconds while strictly more than 80% of
//! the values exceed 1000 in the current unit; when several files are
//! plotted together the coarsest per-file choice wins and finer files are
//! rescaled to match.

use std::fmt;

/// A display unit for benchmark timings, ordered from finest to coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeUnit {
    /// Raw input unit.
    Nanoseconds,
    /// 10^3 nanoseconds.
    Microseconds,
    /// 10^6 nanoseconds.
    Milliseconds,
    /// 10^9 nanoseconds.
    Seconds,
}

impl TimeUnit {
    /// All units, finest first.
    pub const ALL: [Self; 4] = [
        Self::Nanoseconds,
        Self::Microseconds,
        Self::Milliseconds,
        Self::Seconds,
    ];

    /// The power-of-1000 factor that converts nanoseconds into this unit.
    #[must_use]
    pub const fn divisor(self) -> f64 {
        match self {
            Self::Nanoseconds => 1.0,
            Self::Microseconds => 1e3,
            Self::Milliseconds => 1e6,
            Self::Seconds => 1e9,
        }
    }

    /// The next coarser unit, or `None` at seconds.
    #[must_use]
    pub const fn next_coarser(self) -> Option<Self> {
        match self {
            Self::Nanoseconds => Some(Self::Microseconds),
            Self::Microseconds => Some(Self::Milliseconds),
            Self::Milliseconds => Some(Self::Seconds),
            Self::Seconds => None,
        }
    }

    /// Lowercase English name, as printed in axis labels and console output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nanoseconds => "nanoseconds",
            Self::Microseconds => "microseconds",
            Self::Milliseconds => "milliseconds",
            Self::Seconds => "seconds",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn over_threshold(values: &[f64]) -> bool {
    let over = values.iter().filter(|v| **v > 1000.0).count();
    over as f64 > 0.80 * values.len() as f64
}

/// Selects the display unit for one file's nanosecond values.
///
/// Starting at nanoseconds, while strictly more than 80% of the current
/// values exceed 1000 and a coarser unit remains, every value is divided by
/// 1000 and the unit advances. Empty input selects nanoseconds.
#[must_use]
pub fn unit_for_ns(values: &[f64]) -> TimeUnit {
    let mut unit = TimeUnit::Nanoseconds;
    let mut scaled = values.to_vec();
    while over_threshold(&scaled) {
        let Some(coarser) = unit.next_coarser() else {
            break;
        };
        for value in &mut scaled {
            *value /= 1000.0;
        }
        unit = coarser;
    }
    unit
}

/// Rescales nanosecond values into `unit`. Pure.
#[must_use]
pub fn convert_from_ns(unit: TimeUnit, values: &[f64]) -> Vec<f64> {
    let divisor = unit.divisor();
    values.iter().map(|value| value / divisor).collect()
}
