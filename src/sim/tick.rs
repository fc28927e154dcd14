//! Fixed timestep simulation tick
//!
//! Core game loop that advances the platformer by exactly one frame.

use super::state::{GameEvent, GameState, Platform, Player};
use crate::consts::*;

/// Logical actions held during this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// -x
    pub move_left: bool,
    /// +x
    pub move_right: bool,
    /// -z (away from the camera)
    pub move_forward: bool,
    /// +z
    pub move_back: bool,
    /// Held, not edge-triggered
    pub jump: bool,
    /// Return to spawn without touching score or lives
    pub reset: bool,
}

/// Advance the game state by one fixed step.
///
/// `clock_secs` is wall-clock time and only drives the cosmetic enemy bob.
/// Game over and win have already reset the state when they are returned.
pub fn tick(state: &mut GameState, input: &TickInput, clock_secs: f64) -> GameEvent {
    state.time_ticks += 1;

    let tuning = state.tuning;
    let player = &mut state.player;

    // Horizontal movement: no normalization, so diagonals are faster
    if input.move_left {
        player.pos.x -= tuning.move_speed;
    }
    if input.move_right {
        player.pos.x += tuning.move_speed;
    }
    if input.move_forward {
        player.pos.z -= tuning.move_speed;
    }
    if input.move_back {
        player.pos.z += tuning.move_speed;
    }

    // Jump is read as a level: holding it fires the double jump next frame
    if input.jump && !player.is_jumping {
        player.velocity_y = tuning.jump_power;
        player.is_jumping = true;
        player.can_double_jump = true;
    } else if input.jump && player.can_double_jump {
        player.velocity_y = tuning.double_jump_power();
        player.can_double_jump = false;
    }

    player.velocity_y += tuning.gravity;
    player.pos.y += player.velocity_y;

    if !land_on_platform(player, &state.platforms) && player.pos.y <= GROUND_Y {
        player.land(GROUND_Y);
    }

    collect_pickups(state);

    let mut event = update_enemies(state, clock_secs);

    if state.score >= tuning.win_score && state.player.pos.y > tuning.win_altitude {
        log::info!("You win! (tick {})", state.time_ticks);
        state.reset();
        event = GameEvent::Win;
    }

    if input.reset {
        state.player.respawn();
    }

    event
}

/// Snap a falling player onto the first platform it overlaps.
/// Returns whether a platform caught the player.
fn land_on_platform(player: &mut Player, platforms: &[Platform]) -> bool {
    if player.velocity_y > 0.0 {
        return false;
    }
    let player_box = player.aabb();
    match platforms.iter().find(|p| p.aabb().intersects(&player_box)) {
        Some(platform) => {
            player.land(platform.top() + PLAYER_HALF_EXTENTS.y);
            true
        }
        None => false,
    }
}

/// Remove every touched pickup and award its score
fn collect_pickups(state: &mut GameState) {
    let player_box = state.player.aabb();
    let before = state.collectibles.len();
    state.collectibles.retain(|c| !c.aabb().intersects(&player_box));
    let taken = (before - state.collectibles.len()) as u32;
    let reward = taken.saturating_mul(state.tuning.collectible_reward);
    state.score = state.score.saturating_add(reward);
}

/// Bob every enemy, then apply hits in enemy order
fn update_enemies(state: &mut GameState, clock_secs: f64) -> GameEvent {
    let mut event = GameEvent::Continue;
    let amplitude = state.tuning.enemy_bob_amplitude;

    for i in 0..state.enemies.len() {
        state.enemies[i].bob(clock_secs, amplitude);

        if !state.enemies[i].aabb().intersects(&state.player.aabb()) {
            continue;
        }

        state.lives = state.lives.saturating_sub(1);
        state.player.respawn();
        log::debug!(
            "Hit by enemy {}, {} lives left",
            state.enemies[i].id,
            state.lives
        );

        if state.lives == 0 {
            log::info!("Game over (tick {})", state.time_ticks);
            state.reset();
            event = GameEvent::GameOver;
        }
    }

    event
}
