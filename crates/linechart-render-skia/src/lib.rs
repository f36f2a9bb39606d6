// File: crates/linechart-render-skia/src/lib.rs
// Summary: Skia CPU raster backend; paints chart frames and exports PNG / RGBA8 pixels.

pub mod text;

use std::io::Cursor;

use anyhow::{anyhow, Context, Result};
use linechart_core::error::{ChartError, Result as ChartResult};
use linechart_core::{Axis, AxisOrient, DrawingBackend, PlotRect, Rgba, SeriesPath, Theme, Viewport};
use skia_safe as skia;
use tracing::debug;

use crate::text::{Anchor, TextShaper};

const TICK_SIZE: f32 = 6.0;
const TICK_PADDING: f32 = 3.0;
const FONT_SIZE: f32 = 10.0;

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn stroke_paint(c: Rgba, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color(c));
    paint
}

/// Raster surface sized to the viewport (at least 1×1).
///
/// The surface is recreated when the viewport size changes and cleared at the
/// start of every frame.
pub struct SkiaBackend {
    surface: Option<skia::Surface>,
    size: (i32, i32),
    in_frame: bool,
    frames: u64,
    draw_labels: bool,
    text: TextShaper,
}

impl SkiaBackend {
    pub fn new() -> Self {
        Self {
            surface: None,
            size: (0, 0),
            in_frame: false,
            frames: 0,
            draw_labels: true,
            text: TextShaper::new(),
        }
    }

    /// Skip tick labels (keeps pixels independent of installed fonts).
    pub fn without_labels(mut self) -> Self {
        self.draw_labels = false;
        self
    }

    pub fn size(&self) -> (i32, i32) {
        self.size
    }

    /// Number of completed frames.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn surface_size(viewport: Viewport) -> (i32, i32) {
        let px = |v: f64| if v.is_finite() { (v.round() as i32).max(1) } else { 1 };
        (px(viewport.width), px(viewport.height))
    }

    fn canvas(&mut self) -> ChartResult<&skia::Canvas> {
        if !self.in_frame {
            return Err(ChartError::backend("draw call outside of a frame"));
        }
        self.surface
            .as_mut()
            .map(|s| s.canvas())
            .ok_or_else(|| ChartError::backend("no raster surface"))
    }

    /// Pixels of the last frame as tightly packed RGBA8: `(pixels, width, height)`.
    pub fn rgba8(&mut self) -> Result<(Vec<u8>, u32, u32)> {
        let (w, h) = self.size;
        let surface = self.surface.as_mut().ok_or_else(|| anyhow!("nothing rendered yet"))?;
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(anyhow!("failed to read {w}x{h} pixels from raster surface"));
        }
        Ok((pixels, w as u32, h as u32))
    }

    /// Last frame encoded as PNG.
    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let (pixels, w, h) = self.rgba8()?;
        let img = image::RgbaImage::from_raw(w, h, pixels).ok_or_else(|| anyhow!("pixel buffer does not match {w}x{h}"))?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).context("encode PNG failed")?;
        Ok(out.into_inner())
    }

    /// Write the last frame as PNG, creating parent directories.
    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.png_bytes()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

impl Default for SkiaBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingBackend for SkiaBackend {
    fn begin_frame(&mut self, viewport: Viewport, theme: &Theme) -> ChartResult<()> {
        let size = Self::surface_size(viewport);
        if self.surface.is_none() || size != self.size {
            let surface = skia::surfaces::raster_n32_premul(size)
                .ok_or_else(|| ChartError::backend(format!("failed to create {}x{} raster surface", size.0, size.1)))?;
            debug!(width = size.0, height = size.1, "created raster surface");
            self.surface = Some(surface);
            self.size = size;
        }
        self.in_frame = true;
        let background = color(theme.background);
        self.canvas()?.clear(background);
        Ok(())
    }

    fn draw_axis(&mut self, axis: &Axis, theme: &Theme) -> ChartResult<()> {
        let draw_labels = self.draw_labels;
        if !self.in_frame {
            return Err(ChartError::backend("draw call outside of a frame"));
        }
        let Some(surface) = self.surface.as_mut() else {
            return Err(ChartError::backend("no raster surface"));
        };
        let canvas = surface.canvas();
        let text = &self.text;

        let (ox, oy) = (axis.translate.0 as f32, axis.translate.1 as f32);
        let (r0, r1) = (axis.range.0 as f32, axis.range.1 as f32);
        let line = stroke_paint(theme.axis_line, 1.0);
        let tick = stroke_paint(theme.tick, 1.0);
        let label = color(theme.axis_label);

        match axis.orient {
            AxisOrient::Bottom => {
                canvas.draw_line((ox + r0, oy), (ox + r1, oy), &line);
                for t in &axis.ticks {
                    let x = ox + t.offset as f32;
                    canvas.draw_line((x, oy), (x, oy + TICK_SIZE), &tick);
                    if draw_labels {
                        text.draw(canvas, &t.label, x, oy + TICK_SIZE + TICK_PADDING, FONT_SIZE, label, Anchor::Middle);
                    }
                }
            }
            AxisOrient::Left => {
                canvas.draw_line((ox, oy + r0), (ox, oy + r1), &line);
                for t in &axis.ticks {
                    let y = oy + t.offset as f32;
                    canvas.draw_line((ox - TICK_SIZE, y), (ox, y), &tick);
                    if draw_labels {
                        let top = y - FONT_SIZE * 0.6;
                        text.draw(canvas, &t.label, ox - TICK_SIZE - TICK_PADDING, top, FONT_SIZE, label, Anchor::End);
                    }
                }
            }
        }
        Ok(())
    }

    fn draw_series(&mut self, path: &SeriesPath, index: usize, plot: &PlotRect, theme: &Theme) -> ChartResult<()> {
        let mut points = path.points.iter().filter(|p| p.x.is_finite() && p.y.is_finite());
        let Some(first) = points.next() else {
            return Ok(());
        };
        let (dx, dy) = (plot.left as f32, plot.top as f32);
        let mut sk_path = skia::Path::new();
        sk_path.move_to((dx + first.x as f32, dy + first.y as f32));
        for p in points {
            sk_path.line_to((dx + p.x as f32, dy + p.y as f32));
        }
        let paint = stroke_paint(theme.stroke_for(index), theme.line_width);
        self.canvas()?.draw_path(&sk_path, &paint);
        Ok(())
    }

    fn end_frame(&mut self) -> ChartResult<()> {
        if !self.in_frame {
            return Err(ChartError::backend("end_frame without begin_frame"));
        }
        self.in_frame = false;
        self.frames += 1;
        Ok(())
    }
}
