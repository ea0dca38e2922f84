use glam::Vec3;

use crate::model::Raycaster;
use crate::utils::UP;

/// Probe origin height above the body position (roughly chest level)
pub const PROBE_HEIGHT: f32 = 0.5;

/// Short forward ray that vetoes movement into colliders
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleProbe {
    pub ray_distance: f32,
}

impl ObstacleProbe {
    pub fn new(ray_distance: f32) -> Self {
        Self { ray_distance }
    }

    pub fn origin(position: Vec3) -> Vec3 {
        position + UP * PROBE_HEIGHT
    }

    /// True if anything lies within `ray_distance` along `direction`
    pub fn is_blocked(&self, world: &impl Raycaster, position: Vec3, direction: Vec3) -> bool {
        world.raycast(Self::origin(position), direction, self.ray_distance)
    }
}
