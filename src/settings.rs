//! Game settings and tuning
//!
//! Every constant the simulation uses can be overridden from a JSON document.
//! Missing keys fall back to the defaults in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Playfield size in pixels; entities outside `[0, width] x [0, height]` are culled
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ok = |v: f32| v > 0.0 && sampleable_span(v);
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(ConfigError::InvalidBounds {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// A closed interval `[low, low + span]` can be drawn from uniformly only if
/// the sampler's internal scale stays finite
fn sampleable_span(span: f32) -> bool {
    (span / (1.0 - f32::EPSILON)).is_finite()
}

/// Closed interval `[min, max]` used for random draws
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        if self.min.is_finite()
            && self.max.is_finite()
            && 0.0 <= self.min
            && self.min <= self.max
            && sampleable_span(self.max - self.min)
        {
            Ok(())
        } else {
            Err(ConfigError::InvalidRange {
                field,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Runtime configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub bounds: Bounds,

    // === Ship ===
    pub ship_speed: f32,
    pub rotation_speed: f32,
    /// Per-frame velocity multiplier while coasting, in `[0, 1)`
    pub friction: f32,

    // === Projectiles ===
    pub projectile_speed: f32,
    pub fire_offset: f32,
    pub projectile_radius: f32,

    // === Asteroids ===
    pub spawn_interval_ms: u32,
    /// Velocity components are drawn from `[-asteroid_max_speed, asteroid_max_speed]`
    pub asteroid_max_speed: f32,
    pub asteroid_radius: Range,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),

            ship_speed: SHIP_SPEED,
            rotation_speed: ROTATIONAL_SPEED,
            friction: FRICTION,

            projectile_speed: PROJECTILE_SPEED,
            fire_offset: FIRE_OFFSET,
            projectile_radius: PROJECTILE_RADIUS,

            spawn_interval_ms: ASTEROID_SPAWN_INTERVAL_MS,
            asteroid_max_speed: ASTEROID_MAX_SPEED,
            asteroid_radius: Range::new(ASTEROID_MIN_RADIUS, ASTEROID_MAX_RADIUS),
        }
    }
}

impl Settings {
    /// Parse and validate a JSON settings document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Same settings on a different playfield
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Reject values that would put NaN or runaway motion into the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bounds.validate()?;

        for (field, value) in [
            ("ship_speed", self.ship_speed),
            ("rotation_speed", self.rotation_speed),
            ("friction", self.friction),
            ("projectile_speed", self.projectile_speed),
            ("fire_offset", self.fire_offset),
            ("projectile_radius", self.projectile_radius),
            ("asteroid_max_speed", self.asteroid_max_speed),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }

        if !(0.0..1.0).contains(&self.friction) {
            return Err(ConfigError::OutOfRange {
                field: "friction",
                value: self.friction as f64,
                expected: "0 <= friction < 1",
            });
        }
        if self.projectile_radius < 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "projectile_radius",
                value: self.projectile_radius as f64,
                expected: ">= 0",
            });
        }
        if self.asteroid_max_speed < 0.0 || !sampleable_span(2.0 * self.asteroid_max_speed) {
            return Err(ConfigError::OutOfRange {
                field: "asteroid_max_speed",
                value: self.asteroid_max_speed as f64,
                expected: ">= 0 with a finite 2 * max span",
            });
        }
        if self.spawn_interval_ms == 0 {
            return Err(ConfigError::OutOfRange {
                field: "spawn_interval_ms",
                value: 0.0,
                expected: "> 0",
            });
        }

        self.asteroid_radius.validate("asteroid_radius")
    }
}
