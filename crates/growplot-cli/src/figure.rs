// SPDX-License-Identifier: MIT OR Apache-2.0
//! The shared figure
//!
//! Every processed file appends one scatter series here; title and axis
//! labels are overwritten by later files that carry their own metadata and
//! left alone by files that do not. Rendering happens once, at the end of
//! the run, to a PNG sized for the original's 300 DPI output.

use std::path::Path;

use anyhow::Context;
use growplot_core::TimeUnit;
use plotters::prelude::*;

// 6.4 x 4.8 inch canvas at 300 DPI.
const WIDTH_PX: u32 = 1920;
const HEIGHT_PX: u32 = 1440;

/// One file's scatter series.
#[derive(Debug, Clone)]
pub struct Series {
    /// Legend entry, when the file carried a `Label`.
    pub label: Option<String>,
    /// (input size, time in the run unit) points.
    pub points: Vec<(f64, f64)>,
}

/// The figure every processed file appends to.
#[derive(Debug, Clone, Default)]
pub struct Figure {
    series: Vec<Series>,
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
}

impl Figure {
    /// An empty figure with no series or labels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one scatter series.
    pub fn add_series(&mut self, label: Option<String>, points: Vec<(f64, f64)>) {
        self.series.push(Series { label, points });
    }

    /// Overwrites the title when `title` is present.
    pub fn set_title(&mut self, title: Option<String>) {
        if title.is_some() {
            self.title = title;
        }
    }

    /// Overwrites the x-axis description when `label` is present.
    pub fn set_x_label(&mut self, label: Option<String>) {
        if label.is_some() {
            self.x_label = label;
        }
    }

    /// Overwrites the y-axis description when `label` is present.
    pub fn set_y_label(&mut self, label: Option<String>) {
        if label.is_some() {
            self.y_label = label;
        }
    }

    fn bounds(&self) -> ((f64, f64), (f64, f64)) {
        let mut x = (f64::INFINITY, f64::NEG_INFINITY);
        let mut y = (f64::INFINITY, f64::NEG_INFINITY);
        for series in &self.series {
            for &(px, py) in &series.points {
                x = (x.0.min(px), x.1.max(px));
                y = (y.0.min(py), y.1.max(py));
            }
        }
        (pad(x), pad(y))
    }

    /// Renders every series as cross markers on shared linear axes and
    /// writes the result to `path` as a PNG.
    ///
    /// # Errors
    ///
    /// Fails when the figure holds no points or the backend cannot write
    /// the image.
    pub fn save_png(&self, path: &Path, unit: TimeUnit) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.series.iter().any(|series| !series.points.is_empty()),
            "nothing to plot"
        );

        let ((x_min, x_max), (y_min, y_max)) = self.bounds();
        let root = BitMapBackend::new(path, (WIDTH_PX, HEIGHT_PX)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut builder = ChartBuilder::on(&root);
        builder
            .margin(30)
            .x_label_area_size(90)
            .y_label_area_size(110);
        if let Some(title) = &self.title {
            builder.caption(title, ("sans-serif", 48));
        }
        let mut chart = builder.build_cartesian_2d(x_min..x_max, y_min..y_max)?;

        let y_desc = self.y_label.as_ref().map_or_else(
            || format!("Time in {unit}"),
            |label| format!("{label} {unit}"),
        );
        chart
            .configure_mesh()
            .x_desc(self.x_label.clone().unwrap_or_default())
            .y_desc(y_desc)
            .label_style(("sans-serif", 28))
            .axis_desc_style(("sans-serif", 32))
            .draw()?;

        for (index, series) in self.series.iter().enumerate() {
            let color = Palette99::pick(index).to_rgba();
            let anno = chart.draw_series(
                series
                    .points
                    .iter()
                    .map(|&point| Cross::new(point, 8, color)),
            )?;
            if let Some(label) = &series.label {
                anno.label(label)
                    .legend(move |(x, y)| Cross::new((x + 12, y), 6, color));
            }
        }

        if self.series.iter().any(|series| series.label.is_some()) {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .label_font(("sans-serif", 28))
                .draw()?;
        }

        root.present()
            .with_context(|| format!("writing figure to {}", path.display()))?;
        Ok(())
    }
}

fn pad((min, max): (f64, f64)) -> (f64, f64) {
    let span = max - min;
    if span > 0.0 {
        (min - 0.05 * span, max + 0.05 * span)
    } else {
        (min - 1.0, max + 1.0)
    }
}
