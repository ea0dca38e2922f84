use std::collections::HashMap;

use crate::utils::smooth_damp;

/// Hashed animation parameter name (FNV-1a), computed at compile time
/// for the names the controller drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(u32);

impl ParamId {
    pub const HORIZONTAL: ParamId = ParamId::from_name("Horizontal");
    pub const VERTICAL: ParamId = ParamId::from_name("Vertical");

    pub const fn from_name(name: &str) -> Self {
        let bytes = name.as_bytes();
        let mut hash: u32 = 0x811c_9dc5;
        let mut i = 0;
        while i < bytes.len() {
            hash ^= bytes[i] as u32;
            hash = hash.wrapping_mul(0x0100_0193);
            i += 1;
        }
        ParamId(hash)
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

/// Where smoothed animation parameters go (the blend tree side)
pub trait AnimationSink {
    fn set_float_damped(&mut self, param: ParamId, value: f32, damp_time: f32, delta_time: f32);
}

#[derive(Debug, Clone, Copy, Default)]
struct DampedFloat {
    value: f32,
    velocity: f32,
}

/// Minimal animator: a bag of float parameters with damped writes
#[derive(Debug, Default)]
pub struct Animator {
    params: HashMap<ParamId, DampedFloat>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value; unknown parameters read as zero
    pub fn get_float(&self, param: ParamId) -> f32 {
        self.params.get(&param).map(|p| p.value).unwrap_or(0.0)
    }

    /// Immediate write, discards any smoothing velocity
    pub fn set_float(&mut self, param: ParamId, value: f32) {
        self.params.insert(param, DampedFloat { value, velocity: 0.0 });
    }
}

impl AnimationSink for Animator {
    fn set_float_damped(&mut self, param: ParamId, value: f32, damp_time: f32, delta_time: f32) {
        if damp_time <= 0.0 {
            self.set_float(param, value);
            return;
        }
        let p = self.params.entry(param).or_default();
        p.value = smooth_damp(p.value, value, &mut p.velocity, damp_time, delta_time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_ids_are_stable_and_distinct() {
        assert_eq!(ParamId::HORIZONTAL, ParamId::from_name("Horizontal"));
        assert_ne!(ParamId::HORIZONTAL, ParamId::VERTICAL);
        // FNV-1a of the empty string is the offset basis
        assert_eq!(ParamId::from_name("").raw(), 0x811c_9dc5);
    }

    #[test]
    fn test_damped_write_moves_partway() {
        let mut a = Animator::new();
        a.set_float_damped(ParamId::VERTICAL, 1.0, 0.1, 1.0 / 60.0);
        let v = a.get_float(ParamId::VERTICAL);
        assert!(v > 0.0 && v < 1.0, "v={v}");
    }

    #[test]
    fn test_damped_write_settles_on_target() {
        let mut a = Animator::new();
        for _ in 0..200 {
            a.set_float_damped(ParamId::HORIZONTAL, -1.0, 0.1, 1.0 / 60.0);
        }
        assert!((a.get_float(ParamId::HORIZONTAL) + 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_zero_damp_time_writes_directly() {
        let mut a = Animator::new();
        a.set_float_damped(ParamId::HORIZONTAL, 0.7, 0.0, 1.0 / 60.0);
        assert_eq!(a.get_float(ParamId::HORIZONTAL), 0.7);
        assert_eq!(a.get_float(ParamId::from_name("Speed")), 0.0);
    }
}
