use glam::{Quat, Vec3};

use crate::utils::yaw_rotation;

/// Whether the character is trying to move this step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locomotion {
    /// No move intent. Rotation still tracks the yaw target.
    Idle,
    Moving,
}

/// Latest sampled intent, shared by the frame and fixed-step passes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionState {
    /// Local-space planar direction, unit length or zero
    pub move_direction: Vec3,
    /// Degrees about world up, unbounded
    pub accumulated_yaw: f32,
}

impl MotionState {
    pub fn locomotion(&self) -> Locomotion {
        if self.move_direction == Vec3::ZERO {
            Locomotion::Idle
        } else {
            Locomotion::Moving
        }
    }

    /// Orientation the body is easing toward
    pub fn target_rotation(&self) -> Quat {
        yaw_rotation(self.accumulated_yaw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locomotion_follows_direction() {
        let mut m = MotionState::default();
        assert_eq!(m.locomotion(), Locomotion::Idle);
        m.move_direction = Vec3::Z;
        assert_eq!(m.locomotion(), Locomotion::Moving);
    }

    #[test]
    fn test_target_rotation_identity_at_zero_yaw() {
        let m = MotionState::default();
        assert!(m.target_rotation().abs_diff_eq(Quat::IDENTITY, 1e-6));
    }
}
