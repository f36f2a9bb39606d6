// File: crates/linechart-core/src/backend.rs
// Summary: Drawing backend seam; the painter drives any backend through this trait.

use crate::axis::Axis;
use crate::error::Result;
use crate::geometry::SeriesPath;
use crate::theme::Theme;
use crate::types::{PlotRect, Viewport};

/// Renderer-agnostic sink for chart primitives.
///
/// A frame is `begin_frame`, any number of axes and series, then `end_frame`.
/// `begin_frame` must drop whatever the previous frame drew.
pub trait DrawingBackend {
    fn begin_frame(&mut self, viewport: Viewport, theme: &Theme) -> Result<()>;
    fn draw_axis(&mut self, axis: &Axis, theme: &Theme) -> Result<()>;
    /// `path` is in plot coordinates; `plot` gives the offset into the viewport.
    fn draw_series(&mut self, path: &SeriesPath, index: usize, plot: &PlotRect, theme: &Theme) -> Result<()>;
    fn end_frame(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<B: DrawingBackend + ?Sized> DrawingBackend for Box<B> {
    fn begin_frame(&mut self, viewport: Viewport, theme: &Theme) -> Result<()> {
        (**self).begin_frame(viewport, theme)
    }
    fn draw_axis(&mut self, axis: &Axis, theme: &Theme) -> Result<()> {
        (**self).draw_axis(axis, theme)
    }
    fn draw_series(&mut self, path: &SeriesPath, index: usize, plot: &PlotRect, theme: &Theme) -> Result<()> {
        (**self).draw_series(path, index, plot, theme)
    }
    fn end_frame(&mut self) -> Result<()> {
        (**self).end_frame()
    }
}
