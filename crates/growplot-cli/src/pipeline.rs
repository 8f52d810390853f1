// SPDX-License-Identifier: MIT OR Apache-2.0
//! The two-pass file pipeline
//!
//! Pass one loads every file to pick the run-wide time unit: the coarsest
//! unit any single file needs on its own. Pass two reloads each file
//! (normalization is idempotent, so the rewrite is a no-op by then), fits
//! the growth curve, and appends one scatter series per file to the shared
//! [`Figure`]. Files are deliberately parsed twice rather than cached,
//! matching the batch-tool character of the pipeline.

use std::path::{Path, PathBuf};

use anyhow::Context;
use growplot_core::{ResultsFile, TimeUnit, convert_from_ns, fit_loglog, unit_for_ns};
use log::debug;

use crate::figure::Figure;

/// Runs the whole pipeline over `files` and returns the written PNG path.
///
/// # Errors
///
/// Propagates every fatal condition: unreadable input, malformed XML,
/// invalid reference data, degenerate fit input, and rendering failures.
pub fn run(files: &[PathBuf]) -> anyhow::Result<PathBuf> {
    anyhow::ensure!(!files.is_empty(), "no input files given");

    // First determine the coarsest time unit any file needs.
    let mut unit = TimeUnit::Nanoseconds;
    for path in files {
        println!("Reading {} . . .", path.display());
        let file = ResultsFile::load(path)?;
        let values = file.y_values_ns()?;
        unit = unit.max(unit_for_ns(&values));
    }
    println!("Time unit is {unit} . . .");

    let mut figure = Figure::new();
    for path in files {
        add_plot(&mut figure, path, unit)?;
    }

    let out = output_path(&files[0]);
    println!("Writing {} . . .", out.display());
    figure.save_png(&out, unit)?;
    Ok(out)
}

/// Loads one file, fits its growth curve, and appends its series.
fn add_plot(figure: &mut Figure, path: &Path, unit: TimeUnit) -> anyhow::Result<()> {
    let file = ResultsFile::load(path)?;
    debug!(
        "{}: {} entries, unit {unit}",
        path.display(),
        file.entries.len()
    );

    figure.set_title(file.metadata.title.clone());
    figure.set_x_label(file.metadata.x_label.clone());
    figure.set_y_label(file.metadata.y_label.clone());

    let ns_points = file.points_ns()?;
    let ys = convert_from_ns(unit, &ns_points.iter().map(|&(_, y)| y).collect::<Vec<_>>());
    let points: Vec<(f64, f64)> = ns_points
        .iter()
        .map(|&(x, _)| x)
        .zip(ys)
        .collect();

    let fit = fit_loglog(&points)
        .with_context(|| format!("fitting growth curve for {}", path.display()))?;
    println!("Growth rate is O(x ^ {}) for {}", fit.exponent, path.display());

    figure.add_series(file.metadata.label.clone(), points);
    Ok(())
}

/// Derives the output path from the first input: the last two dot-separated
/// segments of the file name are stripped and `.png` is appended, keeping
/// the parent directory. `copy.bench.xml` becomes `copy.png`.
#[must_use]
pub fn output_path(first: &Path) -> PathBuf {
    let name = first
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    let parts: Vec<&str> = name.split('.').collect();
    let stem = if parts.len() > 2 {
        parts[..parts.len() - 2].join(".")
    } else {
        (*parts.first().unwrap_or(&"")).to_owned()
    };
    first.with_file_name(format!("{stem}.png"))
}
