// CONTROLLER: input sampling, animation feedback and fixed-step motion
pub mod animation;
pub mod character_controller;
pub mod input;
pub mod integrator;
pub mod probe;

pub use character_controller::CharacterController;
pub use input::{InputEvent, InputSource, InputState, KeyBindings};
pub use integrator::StepOutcome;
pub use probe::ObstacleProbe;
