// MODEL: controller data and the collaborator contracts
pub mod animator;
pub mod body;
pub mod config;
pub mod motion;

pub use animator::{AnimationSink, Animator, ParamId};
pub use body::{BodyConstraints, BodySettings, CollisionDetection, Interpolation, PhysicsBody, Raycaster};
pub use config::{ConfigError, ControllerConfig, MIN_RAY_DISTANCE};
pub use motion::{Locomotion, MotionState};
