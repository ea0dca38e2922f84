use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shortest obstacle probe the controller accepts
pub const MIN_RAY_DISTANCE: f32 = 0.1;

pub const ENV_MOVE_SPEED: &str = "STRIDE_MOVE_SPEED";
pub const ENV_ROTATION_SPEED: &str = "STRIDE_ROTATION_SPEED";
pub const ENV_RAY_DISTANCE: &str = "STRIDE_RAY_DISTANCE";
pub const ENV_MOUSE_SENSITIVITY: &str = "STRIDE_MOUSE_SENSITIVITY";
pub const ENV_INVERT_MOUSE: &str = "STRIDE_INVERT_MOUSE";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var}: expected a number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var}: expected a boolean, got {value:?}")]
    InvalidBool { var: &'static str, value: String },
}

/// Tuning for a character controller.
///
/// Fields are private so every write goes through a clamping setter:
/// speeds and sensitivity never go below zero and the probe never gets
/// shorter than [`MIN_RAY_DISTANCE`]. Deserialization clamps too.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawControllerConfig")]
pub struct ControllerConfig {
    move_speed: f32,
    rotation_speed: f32,
    ray_distance: f32,
    mouse_sensitivity: f32,
    invert_mouse: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            rotation_speed: 10.0,
            ray_distance: 0.5,
            mouse_sensitivity: 2.0,
            invert_mouse: false,
        }
    }
}

impl ControllerConfig {
    pub fn new(
        move_speed: f32,
        rotation_speed: f32,
        ray_distance: f32,
        mouse_sensitivity: f32,
        invert_mouse: bool,
    ) -> Self {
        let mut config = Self::default();
        config.set_move_speed(move_speed);
        config.set_rotation_speed(rotation_speed);
        config.set_ray_distance(ray_distance);
        config.set_mouse_sensitivity(mouse_sensitivity);
        config.set_invert_mouse(invert_mouse);
        config
    }

    /// Units per second
    pub fn move_speed(&self) -> f32 { self.move_speed }
    /// Interpolation rate per second
    pub fn rotation_speed(&self) -> f32 { self.rotation_speed }
    pub fn ray_distance(&self) -> f32 { self.ray_distance }
    pub fn mouse_sensitivity(&self) -> f32 { self.mouse_sensitivity }
    pub fn invert_mouse(&self) -> bool { self.invert_mouse }

    /// +1 or -1 depending on `invert_mouse`
    pub fn look_sign(&self) -> f32 {
        if self.invert_mouse { -1.0 } else { 1.0 }
    }

    // f32::max drops NaN, so a NaN edit lands on the lower bound.
    pub fn set_move_speed(&mut self, value: f32) {
        self.move_speed = value.max(0.0);
    }

    pub fn set_rotation_speed(&mut self, value: f32) {
        self.rotation_speed = value.max(0.0);
    }

    pub fn set_ray_distance(&mut self, value: f32) {
        self.ray_distance = value.max(MIN_RAY_DISTANCE);
    }

    pub fn set_mouse_sensitivity(&mut self, value: f32) {
        self.mouse_sensitivity = value.max(0.0);
    }

    pub fn set_invert_mouse(&mut self, value: bool) {
        self.invert_mouse = value;
    }

    pub fn with_move_speed(mut self, value: f32) -> Self {
        self.set_move_speed(value);
        self
    }

    pub fn with_rotation_speed(mut self, value: f32) -> Self {
        self.set_rotation_speed(value);
        self
    }

    pub fn with_ray_distance(mut self, value: f32) -> Self {
        self.set_ray_distance(value);
        self
    }

    pub fn with_mouse_sensitivity(mut self, value: f32) -> Self {
        self.set_mouse_sensitivity(value);
        self
    }

    pub fn with_invert_mouse(mut self, value: bool) -> Self {
        self.set_invert_mouse(value);
        self
    }

    /// Defaults overridden by `STRIDE_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().apply_env()
    }

    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides from any key/value lookup (unset keys are skipped)
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = parse_number(&lookup, ENV_MOVE_SPEED)? {
            self.set_move_speed(v);
        }
        if let Some(v) = parse_number(&lookup, ENV_ROTATION_SPEED)? {
            self.set_rotation_speed(v);
        }
        if let Some(v) = parse_number(&lookup, ENV_RAY_DISTANCE)? {
            self.set_ray_distance(v);
        }
        if let Some(v) = parse_number(&lookup, ENV_MOUSE_SENSITIVITY)? {
            self.set_mouse_sensitivity(v);
        }
        if let Some(raw) = lookup(ENV_INVERT_MOUSE) {
            let value = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => return Err(ConfigError::InvalidBool { var: ENV_INVERT_MOUSE, value: raw }),
            };
            self.set_invert_mouse(value);
        }
        Ok(self)
    }
}

fn parse_number<F>(lookup: &F, var: &'static str) -> Result<Option<f32>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<f32>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { var, value: raw }),
    }
}

/// Unvalidated mirror used as the deserialization target
#[derive(Deserialize)]
#[serde(default)]
struct RawControllerConfig {
    move_speed: f32,
    rotation_speed: f32,
    ray_distance: f32,
    mouse_sensitivity: f32,
    invert_mouse: bool,
}

impl Default for RawControllerConfig {
    fn default() -> Self {
        let d = ControllerConfig::default();
        Self {
            move_speed: d.move_speed,
            rotation_speed: d.rotation_speed,
            ray_distance: d.ray_distance,
            mouse_sensitivity: d.mouse_sensitivity,
            invert_mouse: d.invert_mouse,
        }
    }
}

impl From<RawControllerConfig> for ControllerConfig {
    fn from(raw: RawControllerConfig) -> Self {
        ControllerConfig::new(
            raw.move_speed,
            raw.rotation_speed,
            raw.ray_distance,
            raw.mouse_sensitivity,
            raw.invert_mouse,
        )
    }
}
