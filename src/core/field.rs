use glam::Vec2;
use rand::Rng;

use super::constants::TRAIL_RGBA;
use super::error::FieldError;
use super::particle::{advance, render, Bounds, Particle};
use super::surface::{CircleStyle, Rgba, Surface};

/// Fixed-size set of bouncing particles plus the look used to draw them.
///
/// The particle count is fixed at construction; frames only ever mutate
/// particles in place, in insertion order.
#[derive(Clone, Debug)]
pub struct ParticleField {
    bounds: Option<Bounds>,
    particles: Vec<Particle>,
    trail: Rgba,
    style: CircleStyle,
}

impl ParticleField {
    pub fn try_new<R: Rng + ?Sized>(
        width: u32,
        height: u32,
        count: usize,
        rng: &mut R,
    ) -> Result<Self, FieldError> {
        let bounds = Bounds::new(width, height)?;
        let particles = (0..count)
            .map(|_| Particle::spawn(bounds, rng))
            .collect::<Vec<_>>();
        log::debug!(
            "[field] spawned {} particles in {}x{}",
            particles.len(),
            width,
            height
        );
        Ok(Self::from_particles(bounds, particles))
    }

    /// Like [`ParticleField::try_new`], but an unusable viewport yields an inert field.
    pub fn new<R: Rng + ?Sized>(width: u32, height: u32, count: usize, rng: &mut R) -> Self {
        match Self::try_new(width, height, count, rng) {
            Ok(field) => field,
            Err(e) => {
                log::warn!("[field] {e}; background disabled");
                Self::inert()
            }
        }
    }

    pub fn from_particles(bounds: Bounds, particles: Vec<Particle>) -> Self {
        Self {
            bounds: Some(bounds),
            particles,
            trail: Rgba::from_array(TRAIL_RGBA),
            style: CircleStyle::default(),
        }
    }

    /// Field with nothing to draw.
    pub fn inert() -> Self {
        Self {
            bounds: None,
            particles: Vec::new(),
            trail: Rgba::from_array(TRAIL_RGBA),
            style: CircleStyle::default(),
        }
    }

    pub fn with_trail(mut self, trail: Rgba) -> Self {
        self.trail = trail;
        self
    }

    pub fn with_style(mut self, style: CircleStyle) -> Self {
        self.style = style;
        self
    }

    #[inline]
    pub fn is_inert(&self) -> bool {
        self.bounds.is_none() || self.particles.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn trail(&self) -> Rgba {
        self.trail
    }

    pub fn style(&self) -> &CircleStyle {
        &self.style
    }

    /// Advance every particle one frame without drawing.
    pub fn step(&mut self) {
        let Some(bounds) = self.bounds else {
            return;
        };
        for p in &mut self.particles {
            *p = advance(*p, bounds);
        }
    }

    /// Fade the previous frame, then advance and draw each particle.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let Some(bounds) = self.bounds else {
            return;
        };
        if self.particles.is_empty() {
            return;
        }
        // Trail must land before any particle of this frame.
        surface.fill_rect(Vec2::ZERO, bounds.size(), self.trail);
        for p in &mut self.particles {
            *p = advance(*p, bounds);
            render(p, &self.style, surface);
        }
    }

    /// Adopt a new viewport. Particles left outside it are pulled onto its edge.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), FieldError> {
        let bounds = Bounds::new(width, height)?;
        for p in &mut self.particles {
            p.position = bounds.clamp(p.position);
        }
        if self.bounds != Some(bounds) {
            log::debug!("[field] resized to {}x{}", width, height);
        }
        self.bounds = Some(bounds);
        Ok(())
    }
}
