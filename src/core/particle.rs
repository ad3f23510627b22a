use glam::Vec2;
use rand::Rng;

use super::constants::{RADIUS_MAX, RADIUS_MIN, VELOCITY_MAX};
use super::error::FieldError;
use super::surface::{CircleStyle, Surface};

/// Viewport the particles bounce inside, in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: u32, height: u32) -> Result<Self, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::EmptyViewport { width, height });
        }
        Ok(Self {
            width: width as f32,
            height: height as f32,
        })
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }

    #[inline]
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        p.clamp(Vec2::ZERO, self.size())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
        }
    }

    /// Random particle somewhere inside `bounds` with a random heading.
    pub fn spawn<R: Rng + ?Sized>(bounds: Bounds, rng: &mut R) -> Self {
        let position = Vec2::new(
            rng.gen::<f32>() * bounds.width,
            rng.gen::<f32>() * bounds.height,
        );
        let velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * 2.0 * VELOCITY_MAX,
            (rng.gen::<f32>() - 0.5) * 2.0 * VELOCITY_MAX,
        );
        let radius = RADIUS_MIN + rng.gen::<f32>() * (RADIUS_MAX - RADIUS_MIN);
        Self::new(position, velocity, radius)
    }
}

/// Move one frame, then flip the velocity on every axis that ended up outside `bounds`.
///
/// Positions are never clamped here, so a particle can overshoot an edge by up
/// to one frame of travel before it heads back.
#[inline]
pub fn advance(mut particle: Particle, bounds: Bounds) -> Particle {
    particle.position += particle.velocity;
    if particle.position.x < 0.0 || particle.position.x > bounds.width {
        particle.velocity.x = -particle.velocity.x;
    }
    if particle.position.y < 0.0 || particle.position.y > bounds.height {
        particle.velocity.y = -particle.velocity.y;
    }
    particle
}

#[inline]
pub fn render<S: Surface + ?Sized>(particle: &Particle, style: &CircleStyle, surface: &mut S) {
    surface.fill_circle(particle.position, particle.radius, style);
}
