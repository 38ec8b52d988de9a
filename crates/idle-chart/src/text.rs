// File: crates/idle-chart/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; supports rotated labels for slanted axis ticks.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Where a drawn string sits relative to its anchor x.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, mono_numeric: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        if mono_numeric {
            ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        } else {
            ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, mono_numeric: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, mono_numeric);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, mono_numeric: bool) -> f32 {
        self.layout(text, size, skia::Color::TRANSPARENT, mono_numeric).longest_line()
    }

    /// Draw with the baseline at `y` and the text anchored horizontally at `x`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        anchor: Anchor,
        size: f32,
        color: skia::Color,
        mono_numeric: bool,
    ) {
        let mut p = self.layout(text, size, color, mono_numeric);
        let w = p.longest_line();
        let left = match anchor {
            Anchor::Start => x,
            Anchor::Middle => x - w * 0.5,
            Anchor::End => x - w,
        };
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (left, y - size * 0.8));
    }

    /// Draw rotated by `deg` around the anchor point `at`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_rotated(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        at: (f32, f32),
        deg: f32,
        anchor: Anchor,
        size: f32,
        color: skia::Color,
        mono_numeric: bool,
    ) {
        canvas.save();
        canvas.translate(at);
        canvas.rotate(deg, None);
        self.draw(canvas, text, (0.0, 0.0), anchor, size, color, mono_numeric);
        canvas.restore();
    }
}
