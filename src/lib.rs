//! Cube Climb - a tiny 3D cube platformer
//!
//! Core modules:
//! - `sim`: Fixed-step simulation (movement, gravity, jumps, AABB collisions)
//! - `camera`: Follow camera and perspective projection
//! - `platform`: Browser input adapter
//! - `tuning`: Data-driven game balance

pub mod camera;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use camera::Camera;
pub use tuning::{Tuning, TuningError};

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    use glam::Vec3;

    /// Player spawn point (cube resting on the ground plane)
    pub const SPAWN: Vec3 = Vec3::new(0.0, 0.5, 0.0);
    /// Player cube is 1x1x1
    pub const PLAYER_HALF_EXTENTS: Vec3 = Vec3::splat(0.5);
    /// Lowest the player's center may sit (ground plane + half height)
    pub const GROUND_Y: f32 = 0.5;

    /// Horizontal distance per frame per held direction
    pub const MOVE_SPEED: f32 = 0.1;
    /// Added to vertical velocity every frame
    pub const GRAVITY: f32 = -0.01;
    /// Vertical velocity set by a jump
    pub const JUMP_POWER: f32 = 0.2;
    /// Double jump impulse as a fraction of JUMP_POWER
    pub const DOUBLE_JUMP_FACTOR: f32 = 0.8;

    /// Platforms are 5 x 0.2 x 5 slabs
    pub const PLATFORM_HALF_EXTENTS: Vec3 = Vec3::new(2.5, 0.1, 2.5);
    /// Collectible sphere radius
    pub const COLLECTIBLE_RADIUS: f32 = 0.3;
    /// Enemies are 0.8 cubes
    pub const ENEMY_HALF_EXTENTS: Vec3 = Vec3::splat(0.4);

    /// Score per collectible
    pub const COLLECTIBLE_REWARD: u32 = 10;
    pub const STARTING_LIVES: u32 = 3;
    /// Score needed to win
    pub const WIN_SCORE: u32 = 100;
    /// Player must be above this height to win
    pub const WIN_ALTITUDE: f32 = 8.0;

    /// Enemy bob: y += sin(clock * FREQ + id) * AMPLITUDE, every frame
    pub const ENEMY_BOB_FREQUENCY: f64 = 1.0;
    pub const ENEMY_BOB_AMPLITUDE: f32 = 0.5;

    /// Level layout
    pub const PLATFORM_COUNT: usize = 5;
    pub const COLLECTIBLE_COUNT: usize = 10;
    pub const ENEMY_COUNT: usize = 3;
    /// Platforms stack this far apart vertically
    pub const PLATFORM_SPACING: f32 = 2.0;
    /// Height of the lowest platform's center above the ground plane
    pub const PLATFORM_BASE_Y: f32 = 0.1;
    /// Entities scatter over x/z in [-SPREAD/2, SPREAD/2)
    pub const LEVEL_SPREAD: f32 = 10.0;
    /// Collectibles and enemies spawn in [MIN, MIN + RANGE)
    pub const PICKUP_MIN_Y: f32 = 0.5;
    pub const PICKUP_Y_RANGE: f32 = 8.0;

    /// Camera sits this far behind the player (+z)
    pub const CAMERA_DISTANCE: f32 = 10.0;
    /// Camera height (fixed, does not follow the player's y)
    pub const CAMERA_HEIGHT: f32 = 2.0;
    /// Vertical field of view in degrees
    pub const CAMERA_FOV_DEG: f32 = 75.0;
    pub const CAMERA_NEAR: f32 = 0.1;
    pub const CAMERA_FAR: f32 = 1000.0;
}

/// Center-and-half-extents to (min, max) corners
#[inline]
pub fn extents_to_corners(center: Vec3, half_extents: Vec3) -> (Vec3, Vec3) {
    (center - half_extents, center + half_extents)
}
