//! Per-entity draw calls

use super::{Canvas, Color};
use crate::consts::SHIP_BODY_RADIUS;
use crate::sim::{Asteroid, Projectile, Ship};

/// Filled body circle plus the stroked heading triangle
pub fn draw_ship(canvas: &mut dyn Canvas, ship: &Ship) {
    canvas.fill_circle(ship.body.pos, SHIP_BODY_RADIUS, Color::SAGE);
    canvas.stroke_polygon(&ship.outline(), Color::WHITE);
}

pub fn draw_projectile(canvas: &mut dyn Canvas, projectile: &Projectile) {
    canvas.fill_circle(projectile.body.pos, projectile.radius, Color::WHITE);
}

pub fn draw_asteroid(canvas: &mut dyn Canvas, asteroid: &Asteroid) {
    canvas.stroke_circle(asteroid.body.pos, asteroid.radius, Color::WHITE);
}
