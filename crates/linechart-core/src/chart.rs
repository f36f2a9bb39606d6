// File: crates/linechart-core/src/chart.rs
// Summary: Chart builder (rows → scales, axes, paths) and the frame painter.

use tracing::debug;

use crate::axis::Axis;
use crate::backend::DrawingBackend;
use crate::error::Result;
use crate::geometry::{ChartGeometry, Point, SeriesPath};
use crate::model::{Descriptor, Row};
use crate::normalize::Normalized;
use crate::scale::{BandScale, ValueScale};
use crate::series::{extract, value_max, Series};
use crate::theme::Theme;
use crate::types::{Insets, Viewport, MARGINS};

pub struct RenderOptions {
    pub viewport: Viewport,
    pub insets: Insets,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            insets: MARGINS,
            theme: Theme::light(),
        }
    }
}

/// Build geometry for `rows` with the fixed chart margins.
///
/// Fails only on incomplete rows; empty inputs and tiny viewports give
/// degenerate but well-formed geometry.
pub fn build(
    dimensions: &[Descriptor],
    measures: &[Descriptor],
    rows: &[Row],
    viewport: Viewport,
) -> Result<ChartGeometry> {
    build_with_insets(dimensions, measures, rows, viewport, &MARGINS)
}

pub fn build_with_insets(
    dimensions: &[Descriptor],
    measures: &[Descriptor],
    rows: &[Row],
    viewport: Viewport,
    insets: &Insets,
) -> Result<ChartGeometry> {
    let extracted = extract(dimensions, measures, rows)?;
    let plot = viewport.plot_rect(insets);

    let band = BandScale::new(extracted.categories.len(), (0.0, plot.width));
    let value = ValueScale::new_linear(0.0, plot.height, 0.0, value_max(&extracted.series));

    let paths = extracted
        .series
        .iter()
        .map(|s| series_path(s, &band, &value))
        .collect();

    debug!(
        rows = rows.len(),
        series = extracted.series.len(),
        vmax = value.vmax,
        plot_w = plot.width,
        plot_h = plot.height,
        "built chart geometry"
    );

    Ok(ChartGeometry {
        viewport,
        plot,
        x_axis: Axis::bottom(&band, &extracted.categories, &plot),
        y_axis: Axis::left(&value, &plot),
        categories: extracted.categories,
        series: extracted.series,
        band,
        value,
        paths,
    })
}

fn series_path(series: &Series, band: &BandScale, value: &ValueScale) -> SeriesPath {
    let points = series
        .data
        .iter()
        .enumerate()
        .filter_map(|(i, &v)| band.center_px(i).map(|x| Point::new(x, value.to_px(v))))
        .collect();
    SeriesPath { key: series.key.clone(), points }
}

/// Paint one frame: clear, both axes, then every series in measure order.
pub fn paint<B: DrawingBackend + ?Sized>(geometry: &ChartGeometry, backend: &mut B, theme: &Theme) -> Result<()> {
    backend.begin_frame(geometry.viewport, theme)?;
    backend.draw_axis(&geometry.x_axis, theme)?;
    backend.draw_axis(&geometry.y_axis, theme)?;
    for (i, path) in geometry.paths.iter().enumerate() {
        backend.draw_series(path, i, &geometry.plot, theme)?;
    }
    backend.end_frame()
}

/// Metadata-normalized chart input, ready to build at any viewport.
pub struct Chart<'a> {
    pub normalized: &'a Normalized,
    pub rows: &'a [Row],
}

impl<'a> Chart<'a> {
    pub fn new(normalized: &'a Normalized, rows: &'a [Row]) -> Self {
        Self { normalized, rows }
    }

    pub fn build(&self, opts: &RenderOptions) -> Result<ChartGeometry> {
        build_with_insets(&self.normalized.dimensions, &self.normalized.measures, self.rows, opts.viewport, &opts.insets)
    }

    /// Build, then paint. Nothing reaches the backend if the build fails.
    pub fn render<B: DrawingBackend + ?Sized>(&self, opts: &RenderOptions, backend: &mut B) -> Result<ChartGeometry> {
        let geometry = self.build(opts)?;
        paint(&geometry, backend, &opts.theme)?;
        Ok(geometry)
    }
}
