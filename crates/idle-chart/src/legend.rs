// File: crates/idle-chart/src/legend.rs
// Summary: Legend layout: one swatch + label per series, wrapped into rows.

/// Swatch edge length in pixels.
pub const SWATCH: f32 = 12.0;
const SWATCH_GAP: f32 = 6.0;
const ENTRY_GAP: f32 = 18.0;
pub const ROW_HEIGHT: f32 = 18.0;

/// Placement of one legend entry; `x`/`y` is the swatch's top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendSlot {
    pub series_index: usize,
    pub x: f32,
    pub y: f32,
    /// Where the label text starts.
    pub text_x: f32,
}

/// Lay out `entries` (series index, label) left to right starting at (`left`, `top`),
/// wrapping before `right`. `measure` returns the label width in pixels.
pub fn layout_legend<F>(entries: &[(usize, &str)], measure: F, left: f32, right: f32, top: f32) -> Vec<LegendSlot>
where
    F: Fn(&str) -> f32,
{
    let mut out = Vec::with_capacity(entries.len());
    let mut x = left;
    let mut y = top;
    for &(series_index, label) in entries {
        let w = SWATCH + SWATCH_GAP + measure(label);
        if x > left && x + w > right {
            x = left;
            y += ROW_HEIGHT;
        }
        out.push(LegendSlot { series_index, x, y, text_x: x + SWATCH + SWATCH_GAP });
        x += w + ENTRY_GAP;
    }
    out
}
