use glam::{EulerRot, Quat, Vec3};

use crate::model::{BodySettings, Interpolation, PhysicsBody, Raycaster};

/// Axis-aligned box collider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self { min: a.min(b), max: a.max(b) }
    }

    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self::new(center - half_extents.abs(), center + half_extents.abs())
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Slab test. Returns the entry distance along the normalized `direction`.
    ///
    /// Rays starting inside the box don't report it, and zero directions
    /// never hit.
    pub fn ray_hit(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<f32> {
        let dir = direction.normalize_or_zero();
        if dir == Vec3::ZERO {
            return None;
        }

        let mut t_enter = f32::NEG_INFINITY;
        let mut t_exit = f32::INFINITY;
        for axis in 0..3 {
            let o = origin[axis];
            let d = dir[axis];
            if d.abs() < f32::EPSILON {
                // parallel to this slab: must already be between the planes
                if o < self.min[axis] || o > self.max[axis] {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / d;
            let mut t0 = (self.min[axis] - o) * inv;
            let mut t1 = (self.max[axis] - o) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_enter = t_enter.max(t0);
            t_exit = t_exit.min(t1);
            if t_enter > t_exit {
                return None;
            }
        }

        if t_enter < 0.0 || t_enter > max_distance {
            return None;
        }
        Some(t_enter)
    }
}

/// Static collision world: a list of boxes
#[derive(Debug, Clone, Default)]
pub struct Scene {
    colliders: Vec<Aabb>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collider(mut self, collider: Aabb) -> Self {
        self.colliders.push(collider);
        self
    }

    pub fn add_collider(&mut self, collider: Aabb) {
        self.colliders.push(collider);
    }

    pub fn colliders(&self) -> &[Aabb] {
        &self.colliders
    }

    /// Distance to the closest collider along the ray, if any
    pub fn first_hit(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<f32> {
        self.colliders
            .iter()
            .filter_map(|c| c.ray_hit(origin, direction, max_distance))
            .min_by(|a, b| a.total_cmp(b))
    }
}

impl Raycaster for Scene {
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> bool {
        self.first_hit(origin, direction, max_distance).is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

/// Kinematic body driven purely by move/rotate requests.
///
/// Requested moves are committed on the next [`step`](Self::step); the pose
/// from before that step is kept for render interpolation.
#[derive(Debug, Clone)]
pub struct KinematicBody {
    position: Vec3,
    rotation: Quat,
    settled_rotation: Quat,
    previous: Pose,
    pending_move: Option<Vec3>,
    settings: BodySettings,
}

impl KinematicBody {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        let rotation = rotation.normalize();
        Self {
            position,
            rotation,
            settled_rotation: rotation,
            previous: Pose { position, rotation },
            pending_move: None,
            settings: BodySettings::default(),
        }
    }

    pub fn settings(&self) -> BodySettings {
        self.settings
    }

    pub fn pending_move(&self) -> Option<Vec3> {
        self.pending_move
    }

    /// Physics substep: commit the latest requested move
    pub fn step(&mut self) {
        self.previous = Pose { position: self.position, rotation: self.settled_rotation };
        if let Some(target) = self.pending_move.take() {
            self.position = self.constrain_position(target);
        }
        self.settled_rotation = self.rotation;
    }

    /// Pose to draw, `alpha` in [0, 1] between the last two steps
    pub fn render_pose(&self, alpha: f32) -> Pose {
        let alpha = alpha.clamp(0.0, 1.0);
        match self.settings.interpolation {
            Interpolation::None => Pose { position: self.position, rotation: self.rotation },
            Interpolation::Interpolate => Pose {
                position: self.previous.position.lerp(self.position, alpha),
                rotation: self.previous.rotation.slerp(self.settled_rotation, alpha),
            },
            Interpolation::Extrapolate => Pose {
                position: self.position + (self.position - self.previous.position) * alpha,
                rotation: self.rotation,
            },
        }
    }

    fn constrain_position(&self, target: Vec3) -> Vec3 {
        let frozen = self.settings.constraints.freeze_position;
        Vec3::select(frozen, self.position, target)
    }

    fn constrain_rotation(&self, rotation: Quat) -> Quat {
        let frozen = self.settings.constraints.freeze_rotation;
        if !frozen.any() {
            return rotation;
        }
        let (y, x, z) = rotation.to_euler(EulerRot::YXZ);
        let (cy, cx, cz) = self.rotation.to_euler(EulerRot::YXZ);
        Quat::from_euler(
            EulerRot::YXZ,
            if frozen.y { cy } else { y },
            if frozen.x { cx } else { x },
            if frozen.z { cz } else { z },
        )
    }
}

impl PhysicsBody for KinematicBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn request_move(&mut self, target: Vec3) {
        self.pending_move = Some(target);
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = self.constrain_rotation(rotation.normalize());
    }

    fn configure(&mut self, settings: BodySettings) {
        self.settings = settings;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::yaw_rotation;

    fn wall() -> Aabb {
        Aabb::new(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(1.0, 2.0, 2.5))
    }

    #[test]
    fn test_ray_hits_box_in_front() {
        let t = wall().ray_hit(Vec3::new(0.0, 0.5, 0.0), Vec3::Z, 5.0);
        assert_eq!(t, Some(2.0));
    }

    #[test]
    fn test_ray_respects_max_distance() {
        assert_eq!(wall().ray_hit(Vec3::new(0.0, 0.5, 0.0), Vec3::Z, 1.5), None);
    }

    #[test]
    fn test_ray_misses_behind_and_beside() {
        assert_eq!(wall().ray_hit(Vec3::new(0.0, 0.5, 0.0), -Vec3::Z, 5.0), None);
        assert_eq!(wall().ray_hit(Vec3::new(3.0, 0.5, 0.0), Vec3::Z, 5.0), None);
    }

    #[test]
    fn test_ray_ignores_unnormalized_length() {
        let t = wall().ray_hit(Vec3::new(0.0, 0.5, 0.0), Vec3::Z * 10.0, 5.0);
        assert_eq!(t, Some(2.0));
    }

    #[test]
    fn test_ray_from_inside_or_zero_direction_misses() {
        assert_eq!(wall().ray_hit(Vec3::new(0.0, 1.0, 2.2), Vec3::Z, 5.0), None);
        assert_eq!(wall().ray_hit(Vec3::new(0.0, 0.5, 0.0), Vec3::ZERO, 5.0), None);
    }

    #[test]
    fn test_scene_first_hit_picks_closest() {
        let scene = Scene::new()
            .with_collider(wall())
            .with_collider(Aabb::from_center_half_extents(Vec3::new(0.0, 0.5, 1.0), Vec3::splat(0.25)));
        assert_eq!(scene.first_hit(Vec3::new(0.0, 0.5, 0.0), Vec3::Z, 5.0), Some(0.75));
        assert!(scene.raycast(Vec3::new(0.0, 0.5, 0.0), Vec3::Z, 1.0));
        assert!(!Scene::new().raycast(Vec3::ZERO, Vec3::Z, 100.0));
    }

    #[test]
    fn test_body_commits_move_on_step() {
        let mut body = KinematicBody::new(Vec3::ZERO, Quat::IDENTITY);
        body.request_move(Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(body.position(), Vec3::ZERO);
        assert!(body.pending_move().is_some());
        body.step();
        assert_eq!(body.position(), Vec3::Z);
        assert_eq!(body.pending_move(), None);
    }

    #[test]
    fn test_frozen_axes_keep_only_yaw() {
        let mut body = KinematicBody::new(Vec3::ZERO, Quat::IDENTITY);
        body.configure(BodySettings::CHARACTER);
        let tilted = yaw_rotation(40.0) * Quat::from_rotation_x(0.3);
        body.set_rotation(tilted);
        assert!(body.rotation().abs_diff_eq(yaw_rotation(40.0), 1e-5));
    }

    #[test]
    fn test_render_pose_interpolates() {
        let mut body = KinematicBody::new(Vec3::ZERO, Quat::IDENTITY);
        body.configure(BodySettings::CHARACTER);
        body.request_move(Vec3::new(2.0, 0.0, 0.0));
        body.step();
        let mid = body.render_pose(0.5);
        assert!(mid.position.abs_diff_eq(Vec3::new(1.0, 0.0, 0.0), 1e-6));

        body.configure(BodySettings::default());
        assert_eq!(body.render_pose(0.5).position, Vec3::new(2.0, 0.0, 0.0));
    }
}
