use tracing::{trace, warn};

use crate::controller::{CharacterController, InputSource};
use crate::model::{Animator, ControllerConfig};
use crate::scene::{KinematicBody, Scene};

/// Default physics step (50 Hz)
pub const DEFAULT_FIXED_DELTA: f32 = 0.02;
/// Longest frame the loop will account for, in seconds
pub const MAX_FRAME_DELTA: f32 = 0.1;
pub const DEFAULT_MAX_STEPS: u32 = 8;

/// Time source handed to the controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Presentation frame elapsed seconds
    pub delta: f32,
    /// Physics step elapsed seconds
    pub fixed_delta: f32,
}

/// Accumulator that turns variable frame deltas into whole fixed steps
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    fixed_delta: f32,
    max_steps: u32,
    accumulator: f32,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(DEFAULT_FIXED_DELTA)
    }
}

impl FixedTimestep {
    pub fn new(fixed_delta: f32) -> Self {
        Self {
            fixed_delta: fixed_delta.max(1e-4),
            max_steps: DEFAULT_MAX_STEPS,
            accumulator: 0.0,
        }
    }

    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    pub fn fixed_delta(&self) -> f32 {
        self.fixed_delta
    }

    /// Add a frame's worth of time; returns how many fixed steps to run
    pub fn advance(&mut self, frame_delta: f32) -> u32 {
        let dt = if frame_delta.is_finite() { frame_delta.clamp(0.0, MAX_FRAME_DELTA) } else { 0.0 };
        self.accumulator += dt;

        let mut steps = 0;
        while self.accumulator >= self.fixed_delta && steps < self.max_steps {
            self.accumulator -= self.fixed_delta;
            steps += 1;
        }
        if self.accumulator >= self.fixed_delta {
            // too far behind, drop the backlog instead of spiralling
            warn!(backlog = self.accumulator, steps, "fixed step backlog dropped");
            self.accumulator %= self.fixed_delta;
        }
        steps
    }

    /// Fraction of a step left in the accumulator, for render interpolation
    pub fn alpha(&self) -> f32 {
        (self.accumulator / self.fixed_delta).clamp(0.0, 1.0)
    }
}

/// Per-frame summary
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameReport {
    pub steps: u32,
    pub blocked_steps: u32,
}

/// Host loop for one character in a static scene.
///
/// Each frame runs the due physics steps first (controller step, then body
/// step), then the frame pass, which samples input for the next steps.
pub struct Simulation {
    pub controller: CharacterController<KinematicBody, Animator>,
    pub scene: Scene,
    stepper: FixedTimestep,
}

impl Simulation {
    pub fn new(config: ControllerConfig, body: KinematicBody, scene: Scene, stepper: FixedTimestep) -> Self {
        Self {
            controller: CharacterController::new(config, body, Animator::new()),
            scene,
            stepper,
        }
    }

    pub fn stepper(&self) -> &FixedTimestep {
        &self.stepper
    }

    pub fn frame(&mut self, input: &impl InputSource, frame_delta: f32) -> FrameReport {
        let time = FrameTime { delta: frame_delta, fixed_delta: self.stepper.fixed_delta() };
        let mut report = FrameReport { steps: self.stepper.advance(frame_delta), blocked_steps: 0 };

        for _ in 0..report.steps {
            let outcome = self.controller.fixed_update(&self.scene, &time);
            if outcome.blocked {
                report.blocked_steps += 1;
            }
            self.controller.body_mut().step();
        }
        self.controller.update(input, &time);

        trace!(?report, "frame");
        report
    }
}
