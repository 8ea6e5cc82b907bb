//! Frame-stepped simulation module
//!
//! All gameplay logic lives here:
//! - One step per display frame, no delta-time scaling
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - Drawing only through the [`crate::renderer::Canvas`] trait

pub mod asteroid;
pub mod body;
pub mod controls;
pub mod projectile;
pub mod ship;
pub mod spawner;
pub mod state;
pub mod tick;

pub use asteroid::Asteroid;
pub use body::Body;
pub use controls::{Control, ControlState};
pub use projectile::Projectile;
pub use ship::Ship;
pub use spawner::{MAX_SPAWNS_PER_ADVANCE, SpawnTimer};
pub use state::GameState;
pub use tick::{FrameScheduler, key_down, key_up, tick};
