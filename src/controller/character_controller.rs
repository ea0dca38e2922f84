use tracing::{debug, info};

use crate::controller::input::{self, InputSource};
use crate::controller::{animation, integrator};
use crate::controller::integrator::StepOutcome;
use crate::frame_loop::FrameTime;
use crate::model::{AnimationSink, BodySettings, ControllerConfig, Locomotion, MotionState, PhysicsBody, Raycaster};

/// Third-person locomotion for one rigid body.
///
/// Creating the controller is activation: it takes the body and animator
/// it drives and pushes [`BodySettings::CHARACTER`] to the body.
/// [`deactivate`](Self::deactivate) hands both back and drops all state.
///
/// Call [`update`](Self::update) once per rendered frame and
/// [`fixed_update`](Self::fixed_update) once per physics step.
pub struct CharacterController<B: PhysicsBody, A: AnimationSink> {
    config: ControllerConfig,
    motion: MotionState,
    locomotion: Locomotion,
    body: B,
    animator: A,
}

impl<B: PhysicsBody, A: AnimationSink> CharacterController<B, A> {
    pub fn new(config: ControllerConfig, mut body: B, animator: A) -> Self {
        body.configure(BodySettings::CHARACTER);
        info!(?config, position = ?body.position(), "character controller activated");
        Self {
            config,
            motion: MotionState::default(),
            locomotion: Locomotion::Idle,
            body,
            animator,
        }
    }

    /// Frame pass: sample input, then feed the animator
    pub fn update(&mut self, input: &impl InputSource, time: &FrameTime) {
        input::sample(input, &self.config, &mut self.motion);
        animation::push_parameters(&mut self.animator, &self.motion, time.delta);
    }

    /// Physics pass: rotate toward the yaw target and try to move
    pub fn fixed_update(&mut self, world: &impl Raycaster, time: &FrameTime) -> StepOutcome {
        let outcome = integrator::step(&mut self.body, world, &self.config, &self.motion, time.fixed_delta);

        if outcome.locomotion != self.locomotion {
            debug!(from = ?self.locomotion, to = ?outcome.locomotion, "locomotion changed");
            self.locomotion = outcome.locomotion;
        }
        if outcome.blocked {
            debug!(position = ?self.body.position(), "movement blocked");
        }
        outcome
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Replace the whole configuration (already clamped by construction)
    pub fn set_config(&mut self, config: ControllerConfig) {
        info!(?config, "controller config changed");
        self.config = config;
    }

    /// Edit in place through the clamping setters
    pub fn edit_config(&mut self, edit: impl FnOnce(&mut ControllerConfig)) {
        let mut config = self.config;
        edit(&mut config);
        self.set_config(config);
    }

    pub fn motion(&self) -> &MotionState {
        &self.motion
    }

    /// State seen by the most recent fixed step
    pub fn locomotion(&self) -> Locomotion {
        self.locomotion
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    /// Teardown: return the collaborators, discard motion state
    pub fn deactivate(self) -> (B, A) {
        info!(position = ?self.body.position(), yaw = self.motion.accumulated_yaw, "character controller deactivated");
        (self.body, self.animator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::input::axis;
    use crate::model::{Animator, Interpolation, ParamId};
    use crate::scene::{Aabb, KinematicBody, Scene};
    use glam::{Quat, Vec3};

    fn time() -> FrameTime {
        FrameTime { delta: 1.0 / 60.0, fixed_delta: 0.02 }
    }

    fn axes(h: f32, v: f32) -> impl Fn(&str) -> f32 {
        move |name: &str| match name {
            axis::HORIZONTAL => h,
            axis::VERTICAL => v,
            _ => 0.0,
        }
    }

    fn controller() -> CharacterController<KinematicBody, Animator> {
        let config = ControllerConfig::default().with_move_speed(5.0);
        CharacterController::new(config, KinematicBody::new(Vec3::ZERO, Quat::IDENTITY), Animator::new())
    }

    #[test]
    fn test_activation_configures_body() {
        let c = controller();
        assert_eq!(c.body().settings(), BodySettings::CHARACTER);
        assert_eq!(c.body().settings().interpolation, Interpolation::Interpolate);
    }

    #[test]
    fn test_strafe_right_unblocked() {
        let mut c = controller();
        let t = time();
        c.update(&axes(1.0, 0.0), &t);
        let out = c.fixed_update(&Scene::new(), &t);
        c.body_mut().step();

        assert!(out.requested.is_some());
        let delta = c.body().position();
        assert!((delta.length() - 0.1).abs() < 1e-6);
        assert!(delta.abs_diff_eq(Vec3::X * 0.1, 1e-6));
    }

    #[test]
    fn test_strafe_right_blocked() {
        let mut c = controller();
        let t = time();
        let scene = Scene::new().with_collider(Aabb::from_center_half_extents(
            Vec3::new(0.4, 0.5, 0.0),
            Vec3::new(0.1, 1.0, 1.0),
        ));
        c.update(&axes(1.0, 0.0), &t);
        let out = c.fixed_update(&scene, &t);
        c.body_mut().step();

        assert!(out.blocked);
        assert_eq!(c.body().position(), Vec3::ZERO);
    }

    #[test]
    fn test_update_feeds_animator() {
        let mut c = controller();
        c.update(&axes(0.0, 1.0), &time());
        assert_eq!(c.animator().get_float(ParamId::HORIZONTAL), 0.0);
        assert!(c.animator().get_float(ParamId::VERTICAL) > 0.0);
    }

    #[test]
    fn test_locomotion_tracks_fixed_steps() {
        let mut c = controller();
        let t = time();
        let scene = Scene::new();
        assert_eq!(c.locomotion(), Locomotion::Idle);
        c.update(&axes(0.0, -1.0), &t);
        c.fixed_update(&scene, &t);
        assert_eq!(c.locomotion(), Locomotion::Moving);
        c.update(&axes(0.0, 0.0), &t);
        c.fixed_update(&scene, &t);
        assert_eq!(c.locomotion(), Locomotion::Idle);
    }

    #[test]
    fn test_edit_config_clamps() {
        let mut c = controller();
        c.edit_config(|cfg| {
            cfg.set_ray_distance(0.0);
            cfg.set_move_speed(-5.0);
        });
        assert_eq!(c.config().ray_distance(), 0.1);
        assert_eq!(c.config().move_speed(), 0.0);
    }

    #[test]
    fn test_deactivate_returns_collaborators() {
        let mut c = controller();
        let t = time();
        c.update(&axes(0.0, 1.0), &t);
        c.fixed_update(&Scene::new(), &t);
        c.body_mut().step();
        let (body, animator) = c.deactivate();
        assert!(body.position().z > 0.0);
        assert!(animator.get_float(ParamId::VERTICAL) > 0.0);
    }
}
