//! Astro Drift - a drifting ship in a field of asteroids
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (ship, projectiles, asteroids, controls)
//! - `renderer`: Drawing-surface abstraction the simulation writes to
//! - `settings`: Runtime configuration and validation
//! - `error`: Configuration errors

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::{Bounds, Range, Settings};

use glam::Vec2;

/// Game configuration constants (defaults for [`Settings`])
pub mod consts {
    /// Default playfield size (replaced by the canvas size in the browser)
    pub const DEFAULT_WIDTH: f32 = 1280.0;
    pub const DEFAULT_HEIGHT: f32 = 720.0;

    /// Ship speed while thrusting (pixels per frame)
    pub const SHIP_SPEED: f32 = 3.0;
    /// Rotation per frame while a turn key is held (radians)
    pub const ROTATIONAL_SPEED: f32 = 0.05;
    /// Velocity multiplier per frame while coasting
    pub const FRICTION: f32 = 0.97;

    /// Projectile speed (pixels per frame)
    pub const PROJECTILE_SPEED: f32 = 5.0;
    /// Distance ahead of the ship where projectiles appear (the triangle nose)
    pub const FIRE_OFFSET: f32 = 30.0;
    pub const PROJECTILE_RADIUS: f32 = 5.0;

    /// Asteroid spawn period (wall clock, milliseconds)
    pub const ASTEROID_SPAWN_INTERVAL_MS: u32 = 3000;
    /// Asteroid velocity components are drawn from [-max, max]
    pub const ASTEROID_MAX_SPEED: f32 = 2.0;
    pub const ASTEROID_MIN_RADIUS: f32 = 10.0;
    pub const ASTEROID_MAX_RADIUS: f32 = 40.0;

    /// Ship body circle radius
    pub const SHIP_BODY_RADIUS: f32 = 5.0;
    /// Triangle outline: nose ahead of the center, tail corners behind it
    pub const SHIP_NOSE_LENGTH: f32 = 30.0;
    pub const SHIP_TAIL_LENGTH: f32 = 10.0;
    pub const SHIP_TAIL_HALF_WIDTH: f32 = 10.0;
}

/// Unit direction for a rotation in radians
#[inline]
pub fn heading(rotation: f32) -> Vec2 {
    Vec2::new(rotation.cos(), rotation.sin())
}

/// Rotate `offset` by `rotation` radians and translate it to `origin`
#[inline]
pub fn rotate_about(origin: Vec2, offset: Vec2, rotation: f32) -> Vec2 {
    origin + Vec2::from_angle(rotation).rotate(offset)
}
