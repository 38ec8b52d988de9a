// File: crates/idle-chart/src/geometry.rs
// Summary: Plot rectangle helper for pixel math.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// The area left inside a `width` x `height` surface once `insets` are removed.
    pub fn plot_area(width: i32, height: i32, insets: &Insets) -> Self {
        Self::from_ltrb(
            insets.left as i32,
            insets.top as i32,
            width - insets.right as i32,
            height - insets.bottom as i32,
        )
    }

    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
    pub const fn is_empty(&self) -> bool { self.width() <= 0 || self.height() <= 0 }
}
