use glam::{Quat, Vec3};
use tracing::{error, info};

use stride::controller::{InputEvent, InputState};
use stride::frame_loop::{FixedTimestep, Simulation, DEFAULT_FIXED_DELTA};
use stride::model::{ControllerConfig, ParamId, PhysicsBody};
use stride::scene::{Aabb, KinematicBody, Scene};
use stride::logging;

const FRAME_DELTA: f32 = 1.0 / 60.0;

/// Scripted input: (frame, event)
fn script() -> Vec<(u32, InputEvent)> {
    vec![
        (0, InputEvent::PointerLockChanged { locked: true }),
        // strafe right for a second
        (10, InputEvent::KeyDown("d".to_string())),
        (70, InputEvent::KeyUp("d".to_string())),
        // walk forward toward the wall, turning a little on the way
        (80, InputEvent::KeyDown("w".to_string())),
        (90, InputEvent::MouseMove { dx: 30.0, dy: 0.0 }),
        (100, InputEvent::MouseMove { dx: -30.0, dy: 0.0 }),
        (260, InputEvent::KeyUp("w".to_string())),
        // look around in place
        (270, InputEvent::MouseMove { dx: 120.0, dy: 0.0 }),
    ]
}

fn build_scene() -> Scene {
    Scene::new()
        // wall across the path, 3 units ahead
        .with_collider(Aabb::new(Vec3::new(-10.0, 0.0, 3.0), Vec3::new(10.0, 3.0, 3.5)))
        // pillar off to the right
        .with_collider(Aabb::from_center_half_extents(Vec3::new(4.0, 1.0, 0.0), Vec3::new(0.5, 1.0, 0.5)))
}

fn main() {
    logging::init();

    let config = match ControllerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {e}");
            std::process::exit(2);
        }
    };

    let mut sim = Simulation::new(
        config,
        KinematicBody::new(Vec3::ZERO, Quat::IDENTITY),
        build_scene(),
        FixedTimestep::new(DEFAULT_FIXED_DELTA),
    );
    let mut input = InputState::new();
    let events = script();

    let mut total_steps = 0;
    let mut blocked_steps = 0;
    for frame in 0..330u32 {
        for (_, event) in events.iter().filter(|(at, _)| *at == frame) {
            input.process_event(event);
        }

        let report = sim.frame(&input, FRAME_DELTA);
        input.end_frame();
        total_steps += report.steps;
        blocked_steps += report.blocked_steps;

        if frame % 30 == 0 {
            let pose = sim.controller.body().render_pose(sim.stepper().alpha());
            let animator = sim.controller.animator();
            info!(
                frame,
                position = ?pose.position,
                yaw = sim.controller.motion().accumulated_yaw,
                locomotion = ?sim.controller.locomotion(),
                horizontal = animator.get_float(ParamId::HORIZONTAL),
                vertical = animator.get_float(ParamId::VERTICAL),
                "tick"
            );
        }
    }

    let (body, _animator) = sim.controller.deactivate();
    info!(
        total_steps,
        blocked_steps,
        final_position = ?body.position(),
        "run finished"
    );
}
