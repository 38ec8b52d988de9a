// File: crates/idle-chart/src/scale.rs
// Summary: Linear value <-> pixel transform shared by the time and value axes.

/// Maps the value range [v0, v1] onto the pixel range [px0, px1].
/// Value axes pass `px0 = bottom`, `px1 = top` so larger values sit higher.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub v0: f64,
    pub v1: f64,
    pub px0: f32,
    pub px1: f32,
}

impl LinearScale {
    pub fn new(v0: f64, v1: f64, px0: f32, px1: f32) -> Self {
        let v1 = if (v1 - v0).abs() < 1e-12 { v0 + 1.0 } else { v1 };
        Self { v0, v1, px0, px1 }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.px0 + ((v - self.v0) / (self.v1 - self.v0)) as f32 * (self.px1 - self.px0)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let span_px = self.px1 - self.px0;
        if span_px.abs() < 1e-6 {
            return self.v0;
        }
        self.v0 + ((px - self.px0) / span_px) as f64 * (self.v1 - self.v0)
    }

    pub fn span(&self) -> f64 { self.v1 - self.v0 }
}
