use glam::Vec3;
use tracing::trace;

use crate::controller::probe::ObstacleProbe;
use crate::model::{ControllerConfig, Locomotion, MotionState, PhysicsBody, Raycaster};

/// What one fixed step did
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub locomotion: Locomotion,
    /// Target handed to `request_move`, if any
    pub requested: Option<Vec3>,
    /// The probe vetoed movement this step
    pub blocked: bool,
}

/// Slerp factor for one step. Clamped so large `rotation_speed * dt`
/// products ease all the way instead of overshooting.
pub fn rotation_factor(rotation_speed: f32, fixed_delta: f32) -> f32 {
    (rotation_speed * fixed_delta).clamp(0.0, 1.0)
}

/// Advance the body by one fixed step.
///
/// The move direction is taken from the orientation the body had before
/// this step's rotation is applied. A blocked probe cancels the whole move.
pub fn step(
    body: &mut impl PhysicsBody,
    world: &impl Raycaster,
    config: &ControllerConfig,
    motion: &MotionState,
    fixed_delta: f32,
) -> StepOutcome {
    let orientation = body.rotation();

    // Rotation
    let t = rotation_factor(config.rotation_speed(), fixed_delta);
    body.set_rotation(orientation.slerp(motion.target_rotation(), t));

    // Movement
    let locomotion = motion.locomotion();
    if locomotion == Locomotion::Idle {
        return StepOutcome { locomotion, requested: None, blocked: false };
    }

    let world_dir = orientation * motion.move_direction;
    let position = body.position();
    let probe = ObstacleProbe::new(config.ray_distance());
    if probe.is_blocked(world, position, world_dir) {
        trace!(?position, ?world_dir, "move blocked by obstacle");
        return StepOutcome { locomotion, requested: None, blocked: true };
    }

    let target = position + world_dir * (config.move_speed() * fixed_delta);
    body.request_move(target);
    trace!(?position, ?target, "move requested");
    StepOutcome { locomotion, requested: Some(target), blocked: false }
}
