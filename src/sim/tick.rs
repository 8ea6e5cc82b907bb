//! Per-frame simulation tick
//!
//! Core game loop step. The driver calls [`tick`] once per display refresh;
//! keyboard events go through [`key_down`] / [`key_up`] between ticks.

use super::controls::{Control, ControlState};
use super::state::GameState;
use crate::renderer::{Canvas, Color, draw_asteroid, draw_projectile, draw_ship};

/// Something that will call [`tick`] again before the next display refresh
pub trait FrameScheduler {
    fn request_tick(&mut self);
}

/// Advance the game by one frame.
///
/// Each entity is drawn before it moves, so a frame shows where things were
/// after the previous tick. Projectiles and asteroids are walked from the back
/// so removing one never skips or repeats another; survivors keep their order.
pub fn tick(
    state: &mut GameState,
    controls: &ControlState,
    canvas: &mut dyn Canvas,
    scheduler: &mut dyn FrameScheduler,
) {
    canvas.clear(Color::BLACK);
    scheduler.request_tick();

    state.time_ticks += 1;
    let bounds = state.settings().bounds;

    draw_ship(canvas, &state.ship);
    state.ship.body.advance();

    for i in (0..state.projectiles.len()).rev() {
        let projectile = &mut state.projectiles[i];
        draw_projectile(canvas, projectile);
        projectile.body.advance();

        if projectile.body.is_outside(&bounds) {
            state.projectiles.remove(i);
            log::trace!("Culled projectile {} at tick {}", i, state.time_ticks);
        }
    }

    for i in (0..state.asteroids.len()).rev() {
        let asteroid = &mut state.asteroids[i];
        draw_asteroid(canvas, asteroid);
        asteroid.body.advance();

        if asteroid.body.is_outside(&bounds) {
            state.asteroids.remove(i);
            log::trace!("Culled asteroid {} at tick {}", i, state.time_ticks);
        }
    }

    state.apply_controls(controls);
}

/// Key pressed (including OS auto-repeat). Fire shoots once per delivery.
pub fn key_down(state: &mut GameState, controls: &mut ControlState, code: &str) {
    let Some(control) = Control::from_key_code(code) else {
        return;
    };
    controls.set_pressed(control, true);
    if control == Control::Fire {
        state.fire();
    }
}

/// Key released
pub fn key_up(controls: &mut ControlState, code: &str) {
    if let Some(control) = Control::from_key_code(code) {
        controls.set_pressed(control, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::renderer::{DrawCommand, RecordingCanvas};
    use crate::settings::{Bounds, Settings};
    use crate::sim::{Asteroid, Projectile};
    use glam::Vec2;

    #[derive(Default)]
    struct CountingScheduler {
        requests: u32,
    }

    impl FrameScheduler for CountingScheduler {
        fn request_tick(&mut self) {
            self.requests += 1;
        }
    }

    fn new_state() -> GameState {
        let settings = Settings::default().with_bounds(Bounds::new(400.0, 300.0));
        GameState::new(settings, 12345).unwrap()
    }

    fn run(state: &mut GameState, controls: &ControlState) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        let mut scheduler = CountingScheduler::default();
        tick(state, controls, &mut canvas, &mut scheduler);
        assert_eq!(scheduler.requests, 1);
        canvas
    }

    #[test]
    fn test_tick_requests_next_frame_once() {
        let mut state = new_state();
        let controls = ControlState::new();
        let mut canvas = RecordingCanvas::new();
        let mut scheduler = CountingScheduler::default();

        for _ in 0..3 {
            tick(&mut state, &controls, &mut canvas, &mut scheduler);
        }
        assert_eq!(scheduler.requests, 3);
        assert_eq!(state.time_ticks, 3);
    }

    #[test]
    fn test_frame_draw_list() {
        let mut state = new_state();
        state.fire();
        state.fire();
        state.spawn_asteroid();

        let canvas = run(&mut state, &ControlState::new());
        assert_eq!(canvas.commands[0], DrawCommand::Clear(Color::BLACK));
        // clear + ship (2) + projectiles (2) + asteroid (1)
        assert_eq!(canvas.commands.len(), 6);
    }

    #[test]
    fn test_draws_before_moving() {
        let mut state = new_state();
        state.ship.body.vel = Vec2::new(2.0, 0.0);
        let start = state.ship.body.pos;

        let canvas = run(&mut state, &ControlState::new());
        match &canvas.commands[1] {
            DrawCommand::FillCircle { center, .. } => assert_eq!(*center, start),
            other => panic!("expected ship body, got {other:?}"),
        }
        assert_eq!(state.ship.body.pos, start + Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_controls_apply_after_integration() {
        let mut state = new_state();
        let start = state.ship.body.pos;
        let mut controls = ControlState::new();
        controls.set_pressed(Control::Forward, true);

        // Velocity was zero when this tick integrated, so the ship has not moved
        run(&mut state, &controls);
        assert_eq!(state.ship.body.pos, start);
        assert_eq!(state.ship.body.vel, Vec2::new(SHIP_SPEED, 0.0));

        run(&mut state, &controls);
        assert_eq!(state.ship.body.pos, start + Vec2::new(SHIP_SPEED, 0.0));
    }

    #[test]
    fn test_forward_overrides_each_tick() {
        let mut state = new_state();
        let mut controls = ControlState::new();
        controls.set_pressed(Control::Forward, true);
        controls.set_pressed(Control::RotateRight, true);

        for _ in 0..10 {
            run(&mut state, &controls);
            // Rotation changed after thrust was applied within the same tick
            let thrust_rotation = state.ship.rotation - ROTATIONAL_SPEED;
            let expected = Vec2::new(
                SHIP_SPEED * thrust_rotation.cos(),
                SHIP_SPEED * thrust_rotation.sin(),
            );
            assert!((state.ship.body.vel - expected).length() < 1e-5);
        }
    }

    #[test]
    fn test_release_forward_decays() {
        let mut state = new_state();
        let mut controls = ControlState::new();
        controls.set_pressed(Control::Forward, true);
        run(&mut state, &controls);

        controls.set_pressed(Control::Forward, false);
        let before = state.ship.body.vel;
        run(&mut state, &controls);
        assert_eq!(state.ship.body.vel, before * FRICTION);
    }

    #[test]
    fn test_projectile_culled_same_tick() {
        let mut state = new_state();
        state
            .projectiles
            .push(Projectile::new(Vec2::new(398.0, 150.0), Vec2::new(5.0, 0.0), 5.0));

        run(&mut state, &ControlState::new());
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_culling_follows_configured_field() {
        let mut small = new_state();
        let wide = Settings::default().with_bounds(Bounds::new(800.0, 600.0));
        let mut large = GameState::new(wide, 12345).unwrap();

        let mut canvas = RecordingCanvas::new();
        let mut scheduler = CountingScheduler::default();
        for state in [&mut small, &mut large] {
            state
                .projectiles
                .push(Projectile::new(Vec2::new(500.0, 150.0), Vec2::new(1.0, 0.0), 5.0));
            tick(state, &ControlState::new(), &mut canvas, &mut scheduler);
        }

        assert!(small.projectiles.is_empty());
        assert_eq!(large.projectiles[0].body.pos, Vec2::new(501.0, 150.0));
    }

    #[test]
    fn test_asteroid_culled_same_tick() {
        let mut state = new_state();
        state
            .asteroids
            .push(Asteroid::new(Vec2::new(10.0, 1.0), Vec2::new(0.0, -2.0), 20.0));
        state
            .asteroids
            .push(Asteroid::new(Vec2::new(10.0, 100.0), Vec2::new(0.0, -2.0), 20.0));

        run(&mut state, &ControlState::new());
        assert_eq!(state.asteroids.len(), 1);
        assert_eq!(state.asteroids[0].body.pos, Vec2::new(10.0, 98.0));
    }

    #[test]
    fn test_removal_keeps_order_and_advances_each_once() {
        let mut state = new_state();
        // Alternate survivors and leavers so removals sit next to each other
        for (i, x) in [100.0, 399.0, 200.0, 399.5, 300.0].into_iter().enumerate() {
            state.projectiles.push(Projectile::new(
                Vec2::new(x, i as f32 * 10.0),
                Vec2::new(2.0, 0.0),
                5.0,
            ));
        }

        run(&mut state, &ControlState::new());
        let xs: Vec<f32> = state.projectiles.iter().map(|p| p.body.pos.x).collect();
        assert_eq!(xs, vec![102.0, 202.0, 302.0]);
        let ys: Vec<f32> = state.projectiles.iter().map(|p| p.body.pos.y).collect();
        assert_eq!(ys, vec![0.0, 20.0, 40.0]);
    }

    #[test]
    fn test_key_events() {
        let mut state = new_state();
        let mut controls = ControlState::new();

        key_down(&mut state, &mut controls, "KeyW");
        key_down(&mut state, &mut controls, "KeyA");
        assert!(controls.is_pressed(Control::Forward));
        assert!(controls.is_pressed(Control::RotateLeft));

        key_up(&mut controls, "KeyW");
        assert!(!controls.is_pressed(Control::Forward));
        assert!(controls.is_pressed(Control::RotateLeft));
    }

    #[test]
    fn test_fire_key_shoots_per_keydown() {
        let mut state = new_state();
        let mut controls = ControlState::new();

        key_down(&mut state, &mut controls, "Space");
        key_down(&mut state, &mut controls, "Space"); // auto-repeat
        assert_eq!(state.projectiles.len(), 2);

        // Holding fire does not shoot on its own
        run(&mut state, &controls);
        assert_eq!(state.projectiles.len(), 2);

        key_up(&mut controls, "Space");
        assert!(!controls.is_pressed(Control::Fire));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut state = new_state();
        let mut controls = ControlState::new();

        key_down(&mut state, &mut controls, "KeyQ");
        key_down(&mut state, &mut controls, "Enter");
        key_up(&mut controls, "Escape");

        assert_eq!(controls, ControlState::new());
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_spawned_asteroids_survive_until_exit() {
        let mut state = new_state();
        let mut timer = state.spawn_timer();
        let controls = ControlState::new();

        // 60 fps for 7 seconds
        let mut max_seen = 0;
        for _ in 0..420 {
            state.run_spawn_timer(&mut timer, 1000.0 / 60.0);
            max_seen = max_seen.max(state.asteroids.len());
            run(&mut state, &controls);
            for asteroid in &state.asteroids {
                assert!(!asteroid.body.is_outside(&state.settings().bounds));
            }
        }
        assert!(max_seen >= 1);
        assert!(max_seen <= 2);
    }
}
