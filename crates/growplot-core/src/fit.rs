// SPDX-License-Identifier: MIT OR Apache-2.0
//! Log-log least-squares growth-rate fitting
//!
//! Fitting a line through (ln x, ln y) gives an empirical estimate of the
//! algorithmic complexity order: the slope is the exponent b in
//! `y ~ a * x^b`. Input validation is strict because the logarithm is
//! undefined for non-positive values; degenerate input is a fatal error
//! rather than a NaN in the output.

use crate::error::{GrowplotError, Result};

/// Least-squares line through (ln x, ln y).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthFit {
    /// Slope of the fitted line: the empirical growth exponent.
    pub exponent: f64,
    /// Intercept of the fitted line, ln(a) in `y ~ a * x^b`.
    pub intercept: f64,
}

/// Fits `y ~ a * x^b` to `points` by least squares in log-log space.
///
/// # Errors
///
/// Returns [`GrowplotError::DegenerateFit`] when fewer than two points are
/// given, when any coordinate is non-positive or non-finite, or when all x
/// values coincide.
pub fn fit_loglog(points: &[(f64, f64)]) -> Result<GrowthFit> {
    if points.len() < 2 {
        return Err(GrowplotError::DegenerateFit(format!(
            "need at least 2 points, got {}",
            points.len()
        )));
    }
    for &(x, y) in points {
        if !(x.is_finite() && y.is_finite() && x > 0.0 && y > 0.0) {
            return Err(GrowplotError::DegenerateFit(format!(
                "point ({x}, {y}) is outside the domain of the log transform"
            )));
        }
    }

    let n = points.len() as f64;
    let (mut sx, mut sy, mut sxx, mut sxy) = (0.0, 0.0, 0.0, 0.0);
    for &(x, y) in points {
        let lx = x.ln();
        let ly = y.ln();
        sx += lx;
        sy += ly;
        sxx += lx * lx;
        sxy += lx * ly;
    }

    let denom = n * sxx - sx * sx;
    if denom.abs() < f64::EPSILON * n * n {
        return Err(GrowplotError::DegenerateFit(
            "all x values coincide".to_owned(),
        ));
    }

    let exponent = (n * sxy - sx * sy) / denom;
    let intercept = (sy - exponent * sx) / n;
    Ok(GrowthFit {
        exponent,
        intercept,
    })
}
