use crate::model::{AnimationSink, MotionState, ParamId};

/// Damping time handed to the animator for both locomotion parameters
pub const DAMP_TIME: f32 = 0.1;

/// Feed the blend tree: `Horizontal` <- x, `Vertical` <- z
pub fn push_parameters(sink: &mut impl AnimationSink, motion: &MotionState, delta_time: f32) {
    sink.set_float_damped(ParamId::HORIZONTAL, motion.move_direction.x, DAMP_TIME, delta_time);
    sink.set_float_damped(ParamId::VERTICAL, motion.move_direction.z, DAMP_TIME, delta_time);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(ParamId, f32, f32, f32)>,
    }

    impl AnimationSink for Recorder {
        fn set_float_damped(&mut self, param: ParamId, value: f32, damp_time: f32, delta_time: f32) {
            self.calls.push((param, value, damp_time, delta_time));
        }
    }

    #[test]
    fn test_pushes_both_axes_with_fixed_damping() {
        let motion = MotionState { move_direction: Vec3::new(0.6, 0.0, 0.8), accumulated_yaw: 45.0 };
        let mut rec = Recorder::default();
        push_parameters(&mut rec, &motion, 0.016);
        assert_eq!(
            rec.calls,
            vec![
                (ParamId::HORIZONTAL, 0.6, 0.1, 0.016),
                (ParamId::VERTICAL, 0.8, 0.1, 0.016),
            ]
        );
    }
}
