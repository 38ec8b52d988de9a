// File: crates/idle-chart/src/types.rs
// Summary: Default surface size and the margins reserved around the plot.

pub const WIDTH: i32 = 1024;
pub const HEIGHT: i32 = 640;

/// Pixels kept free on each side of the plot for titles, tick labels and the legend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const NONE: Insets = Insets::new(0, 0, 0, 0);

    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Plot width and height left on a `width` x `height` surface; zero when the margins eat it all.
    pub fn plot_size(&self, width: i32, height: i32) -> (u32, u32) {
        let w = (width.max(0) as u32).saturating_sub(self.left + self.right);
        let h = (height.max(0) as u32).saturating_sub(self.top + self.bottom);
        (w, h)
    }
}

impl Default for Insets {
    // Right side carries the remaining-time axis, bottom the slanted date labels and legend rows.
    fn default() -> Self {
        Self::new(80, 80, 48, 150)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_size_saturates() {
        assert_eq!(Insets::default().plot_size(WIDTH, HEIGHT), (864, 442));
        assert_eq!(Insets::default().plot_size(100, 100), (0, 0));
        assert_eq!(Insets::NONE.plot_size(-5, 10), (0, 10));
    }
}
