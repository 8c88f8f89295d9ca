//! Height-to-color mapping for the surface chart.

use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};

/// Color mapping schemes for surface heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMap {
    Inferno,
    Viridis,
    Gray,
}

impl Default for ColorMap {
    fn default() -> Self {
        Self::Inferno
    }
}

impl ColorMap {
    /// Anchor colors at evenly spaced positions in [0, 1].
    fn stops(self) -> &'static [(u8, u8, u8)] {
        match self {
            ColorMap::Inferno => &[
                (0, 0, 4),
                (87, 16, 110),
                (188, 55, 84),
                (249, 142, 9),
                (252, 255, 164),
            ],
            ColorMap::Viridis => &[
                (68, 1, 84),
                (59, 82, 139),
                (33, 145, 140),
                (94, 201, 98),
                (253, 231, 37),
            ],
            ColorMap::Gray => &[(0, 0, 0), (255, 255, 255)],
        }
    }

    /// Sample the map at `t`, clamped to [0, 1].
    pub fn sample(self, t: f64) -> RGBColor {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let scaled = t * (stops.len() - 1) as f64;
        let idx = (scaled.floor() as usize).min(stops.len() - 2);
        let frac = scaled - idx as f64;
        let (r0, g0, b0) = stops[idx];
        let (r1, g1, b1) = stops[idx + 1];
        let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * frac) as u8;
        RGBColor(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
    }
}
