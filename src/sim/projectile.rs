//! Shots fired by the ship

use glam::Vec2;

use super::body::Body;

/// A projectile flies in a straight line until it leaves the screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub body: Body,
    pub radius: f32,
}

impl Projectile {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            body: Body::new(pos, vel),
            radius,
        }
    }
}
