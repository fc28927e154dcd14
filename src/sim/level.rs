//! Seeded level generation
//!
//! Platforms form a loose staircase; pickups and enemies are scattered over
//! the same square. The layout is a pure function of the seed.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{Collectible, Enemy, Level, Platform};
use crate::consts::*;
use crate::tuning::Tuning;

/// Uniform offset in [-LEVEL_SPREAD/2, LEVEL_SPREAD/2)
fn scatter(rng: &mut Pcg32) -> f32 {
    (rng.random::<f32>() - 0.5) * LEVEL_SPREAD
}

/// Random point over the play square at pickup heights
fn scatter_point(rng: &mut Pcg32) -> Vec3 {
    let x = scatter(rng);
    let y = rng.random::<f32>() * PICKUP_Y_RANGE + PICKUP_MIN_Y;
    let z = scatter(rng);
    Vec3::new(x, y, z)
}

/// Build a level from `seed`
pub fn generate_level(seed: u64, tuning: &Tuning) -> Level {
    let mut rng = Pcg32::seed_from_u64(seed);

    // Platform i sits just above 2i
    let platforms = (0..tuning.platform_count)
        .map(|i| {
            let x = scatter(&mut rng);
            let z = scatter(&mut rng);
            let y = i as f32 * PLATFORM_SPACING + PLATFORM_BASE_Y;
            Platform::new(Vec3::new(x, y, z))
        })
        .collect::<Vec<_>>();

    let collectibles = (0..tuning.collectible_count)
        .map(|_| Collectible::new(scatter_point(&mut rng)))
        .collect::<Vec<_>>();

    let enemies = (0..tuning.enemy_count)
        .map(|i| Enemy {
            id: i as u32 + 1,
            pos: scatter_point(&mut rng),
        })
        .collect::<Vec<_>>();

    log::info!(
        "Level {}: {} platforms, {} collectibles, {} enemies",
        seed,
        platforms.len(),
        collectibles.len(),
        enemies.len()
    );

    Level {
        seed,
        platforms,
        collectibles,
        enemies,
    }
}
