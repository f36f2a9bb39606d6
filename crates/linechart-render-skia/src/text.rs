// File: crates/linechart-render-skia/src/text.rs
// Summary: Tick label shaping/drawing via Skia textlayout with system font fallback.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

/// Horizontal anchor of a label relative to its x coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Middle,
    End,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let mut style = TextStyle::new();
        style.set_font_size(size.max(1.0));
        style.set_color(color);
        style.set_font_families(&["Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` with its top edge at `top`, anchored at `x`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, top: f32, size: f32, color: skia::Color, anchor: Anchor) {
        if text.is_empty() {
            return;
        }
        let mut p = self.layout(text, size, color);
        let width = p.longest_line();
        let left = match anchor {
            Anchor::Middle => x - width * 0.5,
            Anchor::End => x - width,
        };
        p.paint(canvas, (left, top));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
