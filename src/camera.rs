//! Follow camera
//!
//! Trails the player at a fixed distance behind (+z) and a fixed height,
//! always looking at the player. Purely derived from player state.

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::consts::*;
use crate::sim::Player;

/// Perspective camera that follows the player.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye position.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Vertical field of view in radians.
    fov: f32,
    /// Aspect ratio (width / height).
    aspect: f32,
    near: f32,
    far: f32,
}

impl Camera {
    /// Camera at its starting pose, looking at the spawn point.
    pub fn new(width: u32, height: u32) -> Self {
        let mut camera = Self {
            position: Vec3::new(0.0, CAMERA_HEIGHT, CAMERA_DISTANCE),
            target: SPAWN,
            fov: CAMERA_FOV_DEG.to_radians(),
            aspect: 1.0,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        };
        camera.resize(width, height);
        camera
    }

    /// Track the player's x/z; height stays fixed.
    pub fn follow(&mut self, player: &Player) {
        self.position.x = player.pos.x;
        self.position.z = player.pos.z + CAMERA_DISTANCE;
        self.target = player.pos;
    }

    /// Update aspect ratio for a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Combined view-projection matrix.
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a world point to pixel coordinates (origin top-left).
    ///
    /// Returns `None` for points behind the camera.
    pub fn project(&self, world: Vec3, width: f32, height: f32) -> Option<Vec2> {
        let clip = self.view_projection() * Vec4::new(world.x, world.y, world.z, 1.0);
        if clip.w <= self.near {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * width,
            (1.0 - ndc.y) * 0.5 * height,
        ))
    }
}
