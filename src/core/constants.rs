// Particle field tuning constants shared by the simulation and the web frontend.

// Population
pub const DEFAULT_PARTICLE_COUNT: usize = 70;
pub const MAX_PARTICLE_COUNT: usize = 2000; // upper bound accepted from page config

// Motion (canvas pixels per frame)
pub const VELOCITY_MAX: f32 = 1.0; // per-axis speed drawn from [-VELOCITY_MAX, VELOCITY_MAX]

// Sizing
pub const RADIUS_MIN: f32 = 0.5;
pub const RADIUS_MAX: f32 = 2.5;

// Trail: translucent black painted over the previous frame
pub const TRAIL_RGBA: [f32; 4] = [0.0, 0.0, 0.0, 0.6];

// Particle look
pub const PARTICLE_RGBA: [f32; 4] = [0.0, 1.0, 1.0, 0.8]; // cyan
pub const GLOW_RGBA: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
pub const GLOW_BLUR: f32 = 6.0;
