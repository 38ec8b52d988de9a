// File: crates/idle-chart/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    /// Series colors, cycled by series index.
    pub palette: [skia::Color; 8],
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 245, 245, 250),
            palette: [
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 255, 170, 60),
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 220, 80, 80),
                skia::Color::from_argb(255, 180, 120, 255),
                skia::Color::from_argb(255, 255, 230, 70),
                skia::Color::from_argb(255, 70, 220, 220),
                skia::Color::from_argb(255, 240, 120, 200),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            title: skia::Color::from_argb(255, 10, 10, 20),
            palette: [
                skia::Color::from_argb(255, 32, 120, 200),
                skia::Color::from_argb(255, 220, 120, 20),
                skia::Color::from_argb(255, 20, 160, 90),
                skia::Color::from_argb(255, 200, 60, 60),
                skia::Color::from_argb(255, 130, 80, 200),
                skia::Color::from_argb(255, 170, 140, 0),
                skia::Color::from_argb(255, 0, 150, 150),
                skia::Color::from_argb(255, 200, 70, 150),
            ],
        }
    }

    pub fn series_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_with_fallback() {
        assert_eq!(find("LIGHT").name, "light");
        assert_eq!(find("sepia").name, "dark");
    }

    #[test]
    fn palette_cycles() {
        let t = Theme::dark();
        assert_eq!(t.series_color(1), t.series_color(9));
    }
}
