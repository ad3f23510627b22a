// Host-side tests for canvas attribute configuration.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
}
mod config {
    include!("../src/config.rs");
}

use config::*;
use crate::core::constants::{DEFAULT_PARTICLE_COUNT, MAX_PARTICLE_COUNT};
use rand::Rng;
use std::collections::HashMap;

fn from(pairs: &[(&str, &str)]) -> FieldConfig {
    let attrs: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    FieldConfig::from_attributes("bg", |name| attrs.get(name).cloned())
}

#[test]
fn defaults_match_reference_look() {
    let cfg = FieldConfig::default();
    assert_eq!(cfg.canvas_id, DEFAULT_CANVAS_ID);
    assert_eq!(cfg.particle_count, 70);
    assert_eq!(cfg.particle_count, DEFAULT_PARTICLE_COUNT);
    assert!((cfg.trail_alpha - 0.6).abs() < 1e-6);
    assert_eq!(cfg.seed, None);
    assert!(cfg.follow_resize);
}

#[test]
fn no_attributes_keeps_defaults() {
    let cfg = FieldConfig::from_attributes("hero-bg", |_| None);
    assert_eq!(cfg.canvas_id, "hero-bg");
    assert_eq!(
        FieldConfig {
            canvas_id: DEFAULT_CANVAS_ID.to_string(),
            ..cfg
        },
        FieldConfig::default()
    );
}

#[test]
fn attributes_override_defaults() {
    let cfg = from(&[
        (ATTR_PARTICLE_COUNT, "120"),
        (ATTR_TRAIL_ALPHA, " 0.25 "),
        (ATTR_SEED, "42"),
        (ATTR_FOLLOW_RESIZE, "false"),
    ]);
    assert_eq!(cfg.particle_count, 120);
    assert!((cfg.trail_alpha - 0.25).abs() < 1e-6);
    assert_eq!(cfg.seed, Some(42));
    assert!(!cfg.follow_resize);
}

#[test]
fn malformed_attributes_are_ignored() {
    let cfg = from(&[
        (ATTR_PARTICLE_COUNT, "lots"),
        (ATTR_TRAIL_ALPHA, "NaN"),
        (ATTR_SEED, "-1"),
        (ATTR_FOLLOW_RESIZE, "maybe"),
    ]);
    assert_eq!(
        FieldConfig {
            canvas_id: DEFAULT_CANVAS_ID.to_string(),
            ..cfg
        },
        FieldConfig::default()
    );
}

#[test]
fn values_are_clamped() {
    let cfg = from(&[(ATTR_PARTICLE_COUNT, "1000000"), (ATTR_TRAIL_ALPHA, "3.5")]);
    assert_eq!(cfg.particle_count, MAX_PARTICLE_COUNT);
    assert_eq!(cfg.trail_alpha, 1.0);

    let cfg = from(&[(ATTR_TRAIL_ALPHA, "-0.2")]);
    assert_eq!(cfg.trail_alpha, 0.0);
}

#[test]
fn boolean_flag_spellings() {
    for (raw, expected) in [
        ("", true),
        ("TRUE", true),
        ("1", true),
        ("on", true),
        ("0", false),
        ("No", false),
        ("off", false),
    ] {
        let cfg = from(&[(ATTR_FOLLOW_RESIZE, raw)]);
        assert_eq!(cfg.follow_resize, expected, "flag {raw:?}");
    }
}

#[test]
fn seeded_rng_is_reproducible() {
    let cfg = from(&[(ATTR_SEED, "1234")]);
    let a: Vec<u32> = cfg.rng().sample_iter(rand::distributions::Standard).take(8).collect();
    let b: Vec<u32> = cfg.rng().sample_iter(rand::distributions::Standard).take(8).collect();
    assert_eq!(a, b);
}
