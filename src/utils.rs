use glam::{Quat, Vec3};

/// World up axis
pub const UP: Vec3 = Vec3::Y;

/// Compose two raw axes into a planar direction (x = horizontal, z = forward).
///
/// The result is unit length, or exactly zero when both axes are idle.
pub fn planar_intent(horizontal: f32, vertical: f32) -> Vec3 {
    Vec3::new(horizontal, 0.0, vertical).normalize_or_zero()
}

/// Rotation of `degrees` about the world up axis.
///
/// Positive yaw turns +Z toward +X. The angle is wrapped first so that large
/// accumulated values keep their precision.
pub fn yaw_rotation(degrees: f32) -> Quat {
    Quat::from_rotation_y(degrees.rem_euclid(360.0).to_radians())
}

/// Critically damped approach of `current` toward `target`.
///
/// `velocity` carries state between calls. Never overshoots the target.
pub fn smooth_damp(current: f32, target: f32, velocity: &mut f32, smooth_time: f32, dt: f32) -> f32 {
    if dt <= 0.0 {
        return current;
    }
    let smooth_time = smooth_time.max(1e-4);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    // clamp overshoot
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = 0.0;
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planar_intent_is_unit_or_zero() {
        let samples = [-1.0, -0.5, 0.0, 0.3, 1.0];
        for &h in &samples {
            for &v in &samples {
                let len = planar_intent(h, v).length();
                if h == 0.0 && v == 0.0 {
                    assert_eq!(len, 0.0);
                } else {
                    assert!((len - 1.0).abs() < 1e-6, "h={h} v={v} len={len}");
                }
            }
        }
    }

    #[test]
    fn test_planar_intent_stays_planar() {
        let dir = planar_intent(1.0, 1.0);
        assert_eq!(dir.y, 0.0);
        assert!((dir.x - dir.z).abs() < 1e-6);
    }

    #[test]
    fn test_yaw_rotation_turns_forward_toward_right() {
        let right = yaw_rotation(90.0) * Vec3::Z;
        assert!(right.abs_diff_eq(Vec3::X, 1e-5), "got {right:?}");
    }

    #[test]
    fn test_yaw_rotation_is_periodic() {
        let a = yaw_rotation(30.0);
        let b = yaw_rotation(30.0 + 360.0 * 4.0);
        let c = yaw_rotation(30.0 - 720.0);
        assert!(a.abs_diff_eq(b, 1e-5));
        assert!(a.abs_diff_eq(c, 1e-5));
    }

    #[test]
    fn test_smooth_damp_converges_without_overshoot() {
        let mut value = 0.0;
        let mut velocity = 0.0;
        for _ in 0..120 {
            value = smooth_damp(value, 1.0, &mut velocity, 0.1, 1.0 / 60.0);
            assert!(value <= 1.0);
        }
        assert!((value - 1.0).abs() < 1e-3, "value={value}");
    }

    #[test]
    fn test_smooth_damp_zero_dt_is_noop() {
        let mut velocity = 0.5;
        assert_eq!(smooth_damp(0.25, 1.0, &mut velocity, 0.1, 0.0), 0.25);
        assert_eq!(velocity, 0.5);
    }
}
