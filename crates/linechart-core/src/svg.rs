// File: crates/linechart-core/src/svg.rs
// Summary: SVG document backend; axis groups and one `path.line` per series.

use std::fmt::Write as _;

use crate::axis::{Axis, AxisOrient};
use crate::backend::DrawingBackend;
use crate::error::{ChartError, Result};
use crate::geometry::{fmt_coord, SeriesPath};
use crate::theme::Theme;
use crate::types::{PlotRect, Viewport};

/// Tick mark length in pixels.
const TICK_SIZE: f64 = 6.0;
/// Gap between tick mark and label.
const TICK_PADDING: f64 = 3.0;
const FONT_SIZE: f64 = 10.0;

/// Builds a standalone SVG document per frame.
#[derive(Debug, Default)]
pub struct SvgBackend {
    viewport: Option<Viewport>,
    body: String,
    document: String,
}

impl SvgBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last completed document; empty before the first `end_frame`.
    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn into_document(self) -> String {
        self.document
    }

    fn check_frame(&self) -> Result<()> {
        if self.viewport.is_none() {
            return Err(ChartError::backend("draw call outside of a frame"));
        }
        Ok(())
    }
}

impl DrawingBackend for SvgBackend {
    fn begin_frame(&mut self, viewport: Viewport, theme: &Theme) -> Result<()> {
        self.viewport = Some(viewport);
        self.body.clear();
        if theme.background.a > 0 {
            let _ = writeln!(
                self.body,
                r#"<rect class="background" width="100%" height="100%" fill="{}"/>"#,
                theme.background.to_css()
            );
        }
        Ok(())
    }

    fn draw_axis(&mut self, axis: &Axis, theme: &Theme) -> Result<()> {
        self.check_frame()?;
        let (class, domain) = match axis.orient {
            AxisOrient::Bottom => (
                "x-axis",
                format!(
                    "M{},{}V0H{}V{}",
                    fmt_coord(axis.range.0),
                    TICK_SIZE,
                    fmt_coord(axis.range.1),
                    TICK_SIZE
                ),
            ),
            AxisOrient::Left => (
                "y-axis",
                format!(
                    "M{},{}H0V{}H{}",
                    -TICK_SIZE,
                    fmt_coord(axis.range.0),
                    fmt_coord(axis.range.1),
                    -TICK_SIZE
                ),
            ),
        };
        let stroke = theme.axis_line.to_css();
        let label_fill = theme.axis_label.to_css();
        let tick_stroke = theme.tick.to_css();

        let _ = writeln!(
            self.body,
            r#"<g class="{class}" transform="translate({},{})" fill="none" font-size="{FONT_SIZE}" font-family="sans-serif">"#,
            fmt_coord(axis.translate.0),
            fmt_coord(axis.translate.1),
        );
        let _ = writeln!(self.body, r#"<path class="domain" stroke="{stroke}" d="{domain}"/>"#);
        for tick in &axis.ticks {
            let label = escape(&tick.label);
            let at = fmt_coord(tick.offset);
            match axis.orient {
                AxisOrient::Bottom => {
                    let _ = writeln!(
                        self.body,
                        r#"<g class="tick" transform="translate({at},0)"><line stroke="{tick_stroke}" y2="{TICK_SIZE}"/><text fill="{label_fill}" y="{}" dy="0.71em" text-anchor="middle">{label}</text></g>"#,
                        TICK_SIZE + TICK_PADDING
                    );
                }
                AxisOrient::Left => {
                    let _ = writeln!(
                        self.body,
                        r#"<g class="tick" transform="translate(0,{at})"><line stroke="{tick_stroke}" x2="{}"/><text fill="{label_fill}" x="{}" dy="0.32em" text-anchor="end">{label}</text></g>"#,
                        -TICK_SIZE,
                        -(TICK_SIZE + TICK_PADDING)
                    );
                }
            }
        }
        self.body.push_str("</g>\n");
        Ok(())
    }

    fn draw_series(&mut self, path: &SeriesPath, index: usize, plot: &PlotRect, theme: &Theme) -> Result<()> {
        self.check_frame()?;
        let _ = writeln!(
            self.body,
            r#"<path class="line" data-key="{}" fill="none" stroke="{}" stroke-width="{}" transform="translate({},{})" d="{}"/>"#,
            escape(&path.key),
            theme.stroke_for(index).to_css(),
            theme.line_width,
            fmt_coord(plot.left),
            fmt_coord(plot.top),
            path.to_path_data(),
        );
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        let viewport = self.viewport.take().ok_or_else(|| ChartError::backend("end_frame without begin_frame"))?;
        let (w, h) = (fmt_coord(viewport.width.max(0.0)), fmt_coord(viewport.height.max(0.0)));
        self.document.clear();
        let _ = writeln!(
            self.document,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );
        self.document.push_str(&self.body);
        self.document.push_str("</svg>\n");
        self.body.clear();
        Ok(())
    }
}

/// Escape text for XML content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
