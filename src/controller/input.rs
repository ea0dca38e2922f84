//! Platform-agnostic input handling and per-frame sampling

use std::collections::HashSet;

use crate::model::{ControllerConfig, MotionState};
use crate::utils::planar_intent;

/// Axis names understood by [`InputSource::axis`]
pub mod axis {
    pub const HORIZONTAL: &str = "Horizontal";
    pub const VERTICAL: &str = "Vertical";
    pub const MOUSE_X: &str = "Mouse X";
}

/// Named analog axes. Unknown names and absent devices read as zero.
pub trait InputSource {
    fn axis(&self, name: &str) -> f32;
}

impl<F> InputSource for F
where
    F: Fn(&str) -> f32,
{
    fn axis(&self, name: &str) -> f32 {
        self(name)
    }
}

/// Read the device once and overwrite the motion state.
///
/// Movement axes become a planar unit vector (or zero); mouse X is scaled
/// by sensitivity and added to the running yaw.
pub fn sample(input: &impl InputSource, config: &ControllerConfig, motion: &mut MotionState) {
    let horizontal = input.axis(axis::HORIZONTAL);
    let vertical = input.axis(axis::VERTICAL);
    let mouse_x = input.axis(axis::MOUSE_X);

    motion.accumulated_yaw += mouse_x * config.mouse_sensitivity() * config.look_sign();
    motion.move_direction = planar_intent(horizontal, vertical);
}

/// Platform-independent input events
#[derive(Debug, Clone)]
pub enum InputEvent {
    KeyDown(String),
    KeyUp(String),
    MouseMove { dx: f32, dy: f32 },
    FocusLost,
    VisibilityChanged { visible: bool },
    PointerLockChanged { locked: bool },
}

/// Key mapping configuration
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub forward: String,
    pub backward: String,
    pub left: String,
    pub right: String,
    /// Pixels to "Mouse X" axis units
    pub mouse_scale: f32,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: "w".to_string(),
            backward: "s".to_string(),
            left: "a".to_string(),
            right: "d".to_string(),
            mouse_scale: 0.1,
        }
    }
}

/// Keyboard + mouse state exposed as raw axes
#[derive(Debug, Clone)]
pub struct InputState {
    pub pressed_keys: HashSet<String>,
    pub look_delta: (f32, f32),
    pub pointer_locked: bool,
    bindings: KeyBindings,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::with_bindings(KeyBindings::default())
    }

    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            pressed_keys: HashSet::new(),
            look_delta: (0.0, 0.0),
            pointer_locked: false,
            bindings,
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Process an input event and update state
    pub fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                self.pressed_keys.insert(key.to_lowercase());
            }
            InputEvent::KeyUp(key) => {
                self.pressed_keys.remove(&key.to_lowercase());
            }
            InputEvent::MouseMove { dx, dy } => {
                if self.pointer_locked {
                    self.look_delta.0 += dx;
                    self.look_delta.1 += dy;
                }
            }
            InputEvent::FocusLost | InputEvent::VisibilityChanged { .. } => {
                self.clear_keys();
            }
            InputEvent::PointerLockChanged { locked } => {
                self.pointer_locked = *locked;
                if !locked {
                    self.look_delta = (0.0, 0.0);
                }
            }
        }
    }

    pub fn is_key_pressed(&self, key: &str) -> bool {
        self.pressed_keys.contains(&key.to_lowercase())
    }

    pub fn clear_keys(&mut self) {
        self.pressed_keys.clear();
    }

    /// Drop the mouse delta gathered this frame. Call after sampling.
    pub fn end_frame(&mut self) -> (f32, f32) {
        std::mem::take(&mut self.look_delta)
    }

    fn digital_axis(&self, negative: &str, positive: &str) -> f32 {
        let mut value = 0.0;
        if self.is_key_pressed(positive) {
            value += 1.0;
        }
        if self.is_key_pressed(negative) {
            value -= 1.0;
        }
        value
    }
}

impl InputSource for InputState {
    fn axis(&self, name: &str) -> f32 {
        let b = &self.bindings;
        match name {
            axis::HORIZONTAL => self.digital_axis(&b.left, &b.right),
            axis::VERTICAL => self.digital_axis(&b.backward, &b.forward),
            axis::MOUSE_X => self.look_delta.0 * b.mouse_scale,
            _ => 0.0,
        }
    }
}
