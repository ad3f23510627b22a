use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::constants::{DEFAULT_PARTICLE_COUNT, MAX_PARTICLE_COUNT, TRAIL_RGBA};

pub const DEFAULT_CANVAS_ID: &str = "bg";

// Optional overrides read from the canvas element.
pub const ATTR_PARTICLE_COUNT: &str = "data-particle-count";
pub const ATTR_TRAIL_ALPHA: &str = "data-trail-alpha";
pub const ATTR_SEED: &str = "data-seed";
pub const ATTR_FOLLOW_RESIZE: &str = "data-follow-resize";

/// Per-mount settings for a particle background.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub canvas_id: String,
    pub particle_count: usize,
    pub trail_alpha: f32,
    /// Fixed seed for reproducible layouts; `None` draws from entropy.
    pub seed: Option<u64>,
    pub follow_resize: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            canvas_id: DEFAULT_CANVAS_ID.to_string(),
            particle_count: DEFAULT_PARTICLE_COUNT,
            trail_alpha: TRAIL_RGBA[3],
            seed: None,
            follow_resize: true,
        }
    }
}

impl FieldConfig {
    /// Build from attribute lookups (usually `Element::get_attribute`).
    ///
    /// Missing attributes keep their defaults; malformed ones are logged and ignored.
    pub fn from_attributes(canvas_id: &str, attr: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self {
            canvas_id: canvas_id.to_string(),
            ..Self::default()
        };

        if let Some(raw) = attr(ATTR_PARTICLE_COUNT) {
            match raw.trim().parse::<usize>() {
                Ok(n) => cfg.particle_count = n.min(MAX_PARTICLE_COUNT),
                Err(_) => log::warn!("[config] ignoring {ATTR_PARTICLE_COUNT}={raw:?}"),
            }
        }
        if let Some(raw) = attr(ATTR_TRAIL_ALPHA) {
            match raw.trim().parse::<f32>() {
                Ok(a) if a.is_finite() => cfg.trail_alpha = a.clamp(0.0, 1.0),
                _ => log::warn!("[config] ignoring {ATTR_TRAIL_ALPHA}={raw:?}"),
            }
        }
        if let Some(raw) = attr(ATTR_SEED) {
            match raw.trim().parse::<u64>() {
                Ok(s) => cfg.seed = Some(s),
                Err(_) => log::warn!("[config] ignoring {ATTR_SEED}={raw:?}"),
            }
        }
        if let Some(raw) = attr(ATTR_FOLLOW_RESIZE) {
            match parse_flag(&raw) {
                Some(b) => cfg.follow_resize = b,
                None => log::warn!("[config] ignoring {ATTR_FOLLOW_RESIZE}={raw:?}"),
            }
        }
        cfg
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[inline]
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
