//! Game state and core simulation types
//!
//! Everything the tick mutates lives here, except the held-key flags, which
//! belong to the driver and are handed to [`super::tick`] each frame.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::asteroid::Asteroid;
use super::controls::ControlState;
use super::projectile::Projectile;
use super::ship::Ship;
use super::spawner::SpawnTimer;
use crate::error::ConfigError;
use crate::settings::Settings;

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Validated configuration
    settings: Settings,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// The player's ship (exactly one)
    pub ship: Ship,
    /// Live projectiles, in firing order
    pub projectiles: Vec<Projectile>,
    /// Live asteroids, in spawn order
    pub asteroids: Vec<Asteroid>,
}

impl GameState {
    /// Validate `settings` and place the ship at the center of the playfield
    pub fn new(settings: Settings, seed: u64) -> Result<Self, ConfigError> {
        settings.validate()?;

        let ship = Ship::new(settings.bounds.center());
        log::debug!(
            "New game {}x{} seed {}",
            settings.bounds.width,
            settings.bounds.height,
            seed
        );

        Ok(Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            settings,
            time_ticks: 0,
            ship,
            projectiles: Vec::new(),
            asteroids: Vec::new(),
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Fire one projectile from the ship's nose
    pub fn fire(&mut self) {
        let projectile = self.ship.fire(&self.settings);
        log::debug!(
            "Fired projectile at ({:.1}, {:.1})",
            projectile.body.pos.x,
            projectile.body.pos.y
        );
        self.projectiles.push(projectile);
    }

    /// Spawn one asteroid at a random on-screen position
    pub fn spawn_asteroid(&mut self) {
        let asteroid = Asteroid::random(&mut self.rng, &self.settings);
        log::debug!(
            "Spawned asteroid r={:.1} at ({:.1}, {:.1}), {} live",
            asteroid.radius,
            asteroid.body.pos.x,
            asteroid.body.pos.y,
            self.asteroids.len() + 1
        );
        self.asteroids.push(asteroid);
    }

    /// Steer the ship from the held controls
    pub fn apply_controls(&mut self, controls: &ControlState) {
        self.ship.apply_controls(controls, &self.settings);
    }

    /// Feed wall-clock time to `timer` and spawn one asteroid per completed period
    pub fn run_spawn_timer(&mut self, timer: &mut SpawnTimer, dt_ms: f64) -> u32 {
        let due = timer.advance(dt_ms);
        for _ in 0..due {
            self.spawn_asteroid();
        }
        due
    }

    /// A spawn timer running at the configured interval
    pub fn spawn_timer(&self) -> SpawnTimer {
        SpawnTimer::new(self.settings.spawn_interval_ms)
    }
}
