use glam::Vec2;

use super::constants::{GLOW_BLUR, GLOW_RGBA, PARTICLE_RGBA};

/// Straight (non-premultiplied) colour with channels in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_array(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS colour string, e.g. `rgba(0,255,255,0.8)`.
    pub fn to_css(&self) -> String {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "rgba({},{},{},{})",
            byte(self.r),
            byte(self.g),
            byte(self.b),
            self.a.clamp(0.0, 1.0)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub blur: f32,
    pub color: Rgba,
}

/// How a particle circle is filled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleStyle {
    pub fill: Rgba,
    pub glow: Option<Glow>,
}

impl Default for CircleStyle {
    fn default() -> Self {
        Self {
            fill: Rgba::from_array(PARTICLE_RGBA),
            glow: Some(Glow {
                blur: GLOW_BLUR,
                color: Rgba::from_array(GLOW_RGBA),
            }),
        }
    }
}

/// 2D drawing target for the particle field.
///
/// Coordinates are canvas pixels with the origin at the top-left corner.
pub trait Surface {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, style: &CircleStyle);
}
