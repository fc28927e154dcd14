//! Data-driven game balance
//!
//! Defaults come from `consts`; a JSON document may override any subset.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors from loading a tuning document
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Gameplay balance knobs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Movement ===
    pub move_speed: f32,
    /// Must be negative
    pub gravity: f32,
    pub jump_power: f32,
    /// Fraction of `jump_power` used by the double jump, in (0, 1]
    pub double_jump_factor: f32,

    // === Scoring ===
    pub collectible_reward: u32,
    pub starting_lives: u32,
    pub win_score: u32,
    pub win_altitude: f32,

    // === Enemies ===
    pub enemy_bob_amplitude: f32,

    // === Level layout ===
    pub platform_count: usize,
    pub collectible_count: usize,
    pub enemy_count: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
            gravity: GRAVITY,
            jump_power: JUMP_POWER,
            double_jump_factor: DOUBLE_JUMP_FACTOR,

            collectible_reward: COLLECTIBLE_REWARD,
            starting_lives: STARTING_LIVES,
            win_score: WIN_SCORE,
            win_altitude: WIN_ALTITUDE,

            enemy_bob_amplitude: ENEMY_BOB_AMPLITUDE,

            platform_count: PLATFORM_COUNT,
            collectible_count: COLLECTIBLE_COUNT,
            enemy_count: ENEMY_COUNT,
        }
    }
}

impl Tuning {
    /// Parse and validate a tuning document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would break the movement model
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.move_speed > 0.0) {
            return Err(TuningError::Invalid {
                field: "move_speed",
                reason: "must be positive",
            });
        }
        if !(self.gravity < 0.0) {
            return Err(TuningError::Invalid {
                field: "gravity",
                reason: "must be negative",
            });
        }
        if !(self.jump_power > 0.0) {
            return Err(TuningError::Invalid {
                field: "jump_power",
                reason: "must be positive",
            });
        }
        if !(self.double_jump_factor > 0.0 && self.double_jump_factor <= 1.0) {
            return Err(TuningError::Invalid {
                field: "double_jump_factor",
                reason: "must be in (0, 1]",
            });
        }
        if self.starting_lives == 0 {
            return Err(TuningError::Invalid {
                field: "starting_lives",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Impulse applied by the mid-air jump
    #[inline]
    pub fn double_jump_power(&self) -> f32 {
        self.jump_power * self.double_jump_factor
    }
}
