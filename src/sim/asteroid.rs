//! Drifting asteroids

use glam::Vec2;
use rand::Rng;

use super::body::Body;
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Asteroid {
    pub body: Body,
    /// Fixed at spawn
    pub radius: f32,
}

impl Asteroid {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            body: Body::new(pos, vel),
            radius,
        }
    }

    /// Spawn somewhere on screen with a random drift and size.
    ///
    /// Position, velocity and radius are independent uniform draws. `settings`
    /// must have passed [`Settings::validate`], which guarantees every range is
    /// non-empty.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, settings: &Settings) -> Self {
        let bounds = settings.bounds;
        let pos = Vec2::new(
            rng.random_range(0.0..=bounds.width),
            rng.random_range(0.0..=bounds.height),
        );

        let max_speed = settings.asteroid_max_speed;
        let vel = Vec2::new(
            rng.random_range(-max_speed..=max_speed),
            rng.random_range(-max_speed..=max_speed),
        );

        let radius = rng.random_range(settings.asteroid_radius.min..=settings.asteroid_radius.max);

        Self::new(pos, vel, radius)
    }
}
