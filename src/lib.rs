//! Third-person character locomotion.
//!
//! Raw axis and mouse input is sampled once per rendered frame into a
//! planar move intent and a running yaw. Each physics step eases the body
//! toward that yaw and, unless a short chest-height ray hits something,
//! asks the physics engine to move it. Two animation parameters follow the
//! intent with damping.
//!
//! The physics body, scene queries, input device and animator are traits
//! in [`model`]; [`scene`] and [`model::Animator`] are small reference
//! implementations, and [`frame_loop`] drives everything at fixed steps.

pub mod logging;
pub mod utils;

pub mod model;
pub mod controller;

pub mod frame_loop;
pub mod scene;

pub use controller::{CharacterController, InputSource, StepOutcome};
pub use frame_loop::{FixedTimestep, FrameTime, Simulation};
pub use model::{AnimationSink, ControllerConfig, PhysicsBody, Raycaster};
