//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` is one fixed step
//! - Seeded RNG only (level generation)
//! - Stable iteration order (platforms, collectibles and enemies keep their order)
//! - No rendering or platform dependencies; wall-clock time is passed in

pub mod aabb;
pub mod level;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use level::generate_level;
pub use state::{Collectible, Enemy, GameEvent, GameState, Level, Platform, Player};
pub use tick::{TickInput, tick};
