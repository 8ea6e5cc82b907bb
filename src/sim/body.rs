//! Kinematic body shared by every moving entity

use glam::Vec2;

use crate::settings::Bounds;

/// Position and per-frame velocity
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// One explicit Euler step with a time step of one frame
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// True once the position has left `[0, width] x [0, height]` on any axis.
    /// The edges themselves count as inside.
    #[inline]
    pub fn is_outside(&self, bounds: &Bounds) -> bool {
        self.pos.x < 0.0
            || self.pos.x > bounds.width
            || self.pos.y < 0.0
            || self.pos.y > bounds.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_adds_velocity() {
        let mut body = Body::new(Vec2::new(10.0, 20.0), Vec2::new(1.5, -2.25));
        body.advance();
        assert_eq!(body.pos, Vec2::new(11.5, 17.75));
        // Velocity is untouched
        assert_eq!(body.vel, Vec2::new(1.5, -2.25));
    }

    #[test]
    fn test_is_outside_each_axis() {
        let bounds = Bounds::new(100.0, 50.0);
        let at = |x, y| Body::new(Vec2::new(x, y), Vec2::ZERO);

        assert!(!at(50.0, 25.0).is_outside(&bounds));
        assert!(at(-0.1, 25.0).is_outside(&bounds));
        assert!(at(100.1, 25.0).is_outside(&bounds));
        assert!(at(50.0, -0.1).is_outside(&bounds));
        assert!(at(50.0, 50.1).is_outside(&bounds));
    }

    #[test]
    fn test_edges_are_inside() {
        let bounds = Bounds::new(100.0, 50.0);
        for (x, y) in [(0.0, 0.0), (100.0, 50.0), (0.0, 50.0), (100.0, 0.0)] {
            assert!(!Body::new(Vec2::new(x, y), Vec2::ZERO).is_outside(&bounds));
        }
    }
}
