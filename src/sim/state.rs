//! Game state and core simulation types
//!
//! Everything the update loop reads or writes lives in `GameState`.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::consts::*;
use crate::tuning::Tuning;

/// Outcome of a single tick, consumed by the host loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Nothing terminal happened
    Continue,
    /// Lives ran out; state has already been reset
    GameOver,
    /// Win condition met; state has already been reset
    Win,
}

impl GameEvent {
    /// Text for the blocking dialog the host shows, if any
    pub fn alert_message(&self) -> Option<&'static str> {
        match self {
            GameEvent::Continue => None,
            GameEvent::GameOver => Some("Game Over! Refresh to restart."),
            GameEvent::Win => Some("You Win! Refresh to restart."),
        }
    }
}

/// The player's cube
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec3,
    pub velocity_y: f32,
    pub is_jumping: bool,
    pub can_double_jump: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: SPAWN,
            velocity_y: 0.0,
            is_jumping: false,
            can_double_jump: false,
        }
    }
}

impl Player {
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos, PLAYER_HALF_EXTENTS)
    }

    /// Back to spawn with no vertical motion (jump flags are left alone)
    pub fn respawn(&mut self) {
        self.pos = SPAWN;
        self.velocity_y = 0.0;
    }

    /// Rest at height `y`: stop falling and re-arm jumping
    pub fn land(&mut self, y: f32) {
        self.pos.y = y;
        self.velocity_y = 0.0;
        self.is_jumping = false;
        self.can_double_jump = false;
    }
}

/// A static slab the player can stand on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub pos: Vec3,
}

impl Platform {
    pub fn new(pos: Vec3) -> Self {
        Self { pos }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos, PLATFORM_HALF_EXTENTS)
    }

    /// Height of the top face
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + PLATFORM_HALF_EXTENTS.y
    }
}

/// A one-shot pickup sphere
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub pos: Vec3,
}

impl Collectible {
    pub fn new(pos: Vec3) -> Self {
        Self { pos }
    }

    /// Bounding box of the sphere
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec3::splat(COLLECTIBLE_RADIUS))
    }
}

/// A bobbing hazard cube
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Stable identity, also the phase offset of the bob
    pub id: u32,
    pub pos: Vec3,
}

impl Enemy {
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos, ENEMY_HALF_EXTENTS)
    }

    /// Nudge the enemy vertically by this frame's bob offset.
    ///
    /// The offset is added to the current height rather than to a fixed
    /// center, so consecutive frames accumulate drift.
    pub fn bob(&mut self, clock_secs: f64, amplitude: f32) {
        let phase = clock_secs * ENEMY_BOB_FREQUENCY + f64::from(self.id);
        self.pos.y += phase.sin() as f32 * amplitude;
    }
}

/// Initial entity layout, kept so a full reset can restore pickups
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Level {
    pub seed: u64,
    pub platforms: Vec<Platform>,
    pub collectibles: Vec<Collectible>,
    pub enemies: Vec<Enemy>,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Balance knobs
    pub tuning: Tuning,
    /// Layout the session started from
    pub level: Level,
    pub player: Player,
    pub score: u32,
    pub lives: u32,
    /// Static, fixed count
    pub platforms: Vec<Platform>,
    /// Active pickups; shrinks until a full reset
    pub collectibles: Vec<Collectible>,
    /// Fixed count, positions drift
    pub enemies: Vec<Enemy>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game with a seeded level and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new game with a seeded level built from `tuning`
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let level = super::level::generate_level(seed, &tuning);
        Self::from_level(level, tuning)
    }

    /// Create a game around an explicit layout
    pub fn from_level(level: Level, tuning: Tuning) -> Self {
        Self {
            lives: tuning.starting_lives,
            score: 0,
            player: Player::default(),
            platforms: level.platforms.clone(),
            collectibles: level.collectibles.clone(),
            enemies: level.enemies.clone(),
            level,
            tuning,
            time_ticks: 0,
        }
    }

    /// Full reset after game over or win: score, lives, player and pickups.
    ///
    /// Enemies keep their drifted positions and platforms never move.
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = self.tuning.starting_lives;
        self.player.respawn();
        self.collectibles = self.level.collectibles.clone();
    }

    /// Whether every pickup has been taken
    pub fn all_collected(&self) -> bool {
        self.collectibles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_level() -> Level {
        Level {
            seed: 0,
            platforms: vec![Platform::new(Vec3::new(0.0, 2.1, 0.0))],
            collectibles: vec![
                Collectible::new(Vec3::new(1.0, 1.0, 1.0)),
                Collectible::new(Vec3::new(-1.0, 3.0, 2.0)),
            ],
            enemies: vec![Enemy {
                id: 7,
                pos: Vec3::new(3.0, 4.0, 0.0),
            }],
        }
    }

    #[test]
    fn test_new_game_starts_at_spawn() {
        let state = GameState::new(42);
        assert_eq!(state.player.pos, SPAWN);
        assert_eq!(state.player.velocity_y, 0.0);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.platforms.len(), PLATFORM_COUNT);
        assert_eq!(state.collectibles.len(), COLLECTIBLE_COUNT);
        assert_eq!(state.enemies.len(), ENEMY_COUNT);
    }

    #[test]
    fn test_platform_top() {
        let platform = Platform::new(Vec3::new(0.0, 2.1, 0.0));
        assert!((platform.top() - 2.2).abs() < 1e-6);
        assert!((platform.aabb().max.y - platform.top()).abs() < 1e-6);
    }

    #[test]
    fn test_reset_restores_pickups_and_counters() {
        let mut state = GameState::from_level(small_level(), Tuning::default());
        state.collectibles.clear();
        state.score = 70;
        state.lives = 1;
        state.player.pos = Vec3::new(4.0, 9.0, -2.0);
        state.player.velocity_y = 0.3;

        state.reset();

        assert_eq!(state.score, 0);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.player.pos, SPAWN);
        assert_eq!(state.player.velocity_y, 0.0);
        assert_eq!(state.collectibles.len(), 2);
    }

    #[test]
    fn test_enemy_bob_accumulates() {
        let mut enemy = Enemy {
            id: 1,
            pos: Vec3::new(0.0, 4.0, 0.0),
        };
        let step = (1.0_f64).sin() as f32 * 0.5;
        enemy.bob(0.0, 0.5);
        enemy.bob(0.0, 0.5);
        assert!((enemy.pos.y - (4.0 + 2.0 * step)).abs() < 1e-5);
    }

    #[test]
    fn test_only_terminal_events_alert() {
        assert_eq!(GameEvent::Continue.alert_message(), None);
        assert_eq!(
            GameEvent::GameOver.alert_message(),
            Some("Game Over! Refresh to restart.")
        );
        assert_eq!(
            GameEvent::Win.alert_message(),
            Some("You Win! Refresh to restart.")
        );
    }

    #[test]
    fn test_land_clears_jump_flags() {
        let mut player = Player {
            pos: Vec3::new(1.0, 3.0, 1.0),
            velocity_y: -0.2,
            is_jumping: true,
            can_double_jump: true,
        };
        player.land(2.7);
        assert_eq!(player.pos.y, 2.7);
        assert_eq!(player.velocity_y, 0.0);
        assert!(!player.is_jumping);
        assert!(!player.can_double_jump);
    }

    #[test]
    fn test_state_serializes() {
        let state = GameState::from_level(small_level(), Tuning::default());
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.collectibles.len(), state.collectibles.len());
        assert_eq!(back.enemies[0].id, 7);
    }
}
