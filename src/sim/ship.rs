//! The player's ship
//!
//! Thrust sets velocity outright along the heading; coasting bleeds it off
//! with friction. The speed never snaps to zero, it just decays.

use glam::Vec2;

use super::body::Body;
use super::controls::{Control, ControlState};
use super::projectile::Projectile;
use crate::consts::{SHIP_NOSE_LENGTH, SHIP_TAIL_HALF_WIDTH, SHIP_TAIL_LENGTH};
use crate::settings::Settings;
use crate::{heading, rotate_about};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ship {
    pub body: Body,
    /// Radians, unbounded (no wraparound)
    pub rotation: f32,
}

impl Ship {
    /// Ship at rest at `pos`, facing +X
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Body::new(pos, Vec2::ZERO),
            rotation: 0.0,
        }
    }

    #[inline]
    pub fn heading(&self) -> Vec2 {
        heading(self.rotation)
    }

    /// Apply held controls for one frame
    pub fn apply_controls(&mut self, controls: &ControlState, settings: &Settings) {
        if controls.is_pressed(Control::Forward) {
            self.body.vel = self.heading() * settings.ship_speed;
        } else {
            self.body.vel *= settings.friction;
        }

        // Left then right, summed first so holding both is an exact no-op
        let mut turn = 0.0;
        if controls.is_pressed(Control::RotateLeft) {
            turn -= settings.rotation_speed;
        }
        if controls.is_pressed(Control::RotateRight) {
            turn += settings.rotation_speed;
        }
        self.rotation += turn;
    }

    /// Spawn a projectile ahead of the ship, travelling along the heading
    pub fn fire(&self, settings: &Settings) -> Projectile {
        let dir = self.heading();
        Projectile::new(
            self.body.pos + dir * settings.fire_offset,
            dir * settings.projectile_speed,
            settings.projectile_radius,
        )
    }

    /// Triangle outline in world space: nose, then the two tail corners
    pub fn outline(&self) -> [Vec2; 3] {
        let pos = self.body.pos;
        [
            rotate_about(pos, Vec2::new(SHIP_NOSE_LENGTH, 0.0), self.rotation),
            rotate_about(
                pos,
                Vec2::new(-SHIP_TAIL_LENGTH, -SHIP_TAIL_HALF_WIDTH),
                self.rotation,
            ),
            rotate_about(
                pos,
                Vec2::new(-SHIP_TAIL_LENGTH, SHIP_TAIL_HALF_WIDTH),
                self.rotation,
            ),
        ]
    }
}
