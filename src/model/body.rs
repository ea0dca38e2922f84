use glam::{BVec3, Quat, Vec3};

/// How the physics engine smooths the rendered pose between steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    #[default]
    None,
    Interpolate,
    Extrapolate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionDetection {
    #[default]
    Discrete,
    Continuous,
    ContinuousSpeculative,
}

/// Axes the engine must not rotate or translate the body around
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyConstraints {
    pub freeze_position: BVec3,
    pub freeze_rotation: BVec3,
}

impl Default for BodyConstraints {
    fn default() -> Self {
        Self {
            freeze_position: BVec3::FALSE,
            freeze_rotation: BVec3::FALSE,
        }
    }
}

/// One-time setup pushed to a body when a controller takes it over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BodySettings {
    pub constraints: BodyConstraints,
    pub interpolation: Interpolation,
    pub collision_detection: CollisionDetection,
}

impl BodySettings {
    /// Upright character: only yaw may change, rendered pose interpolated,
    /// continuous collision so fast moves don't tunnel.
    pub const CHARACTER: Self = Self {
        constraints: BodyConstraints {
            freeze_position: BVec3::FALSE,
            freeze_rotation: BVec3::new(true, false, true),
        },
        interpolation: Interpolation::Interpolate,
        collision_detection: CollisionDetection::Continuous,
    };
}

/// Rigid body owned by the physics engine
pub trait PhysicsBody {
    fn position(&self) -> Vec3;
    fn rotation(&self) -> Quat;
    /// Collision-aware move, resolved by the engine on its next step
    fn request_move(&mut self, target: Vec3);
    fn set_rotation(&mut self, rotation: Quat);
    fn configure(&mut self, settings: BodySettings);
}

/// Scene query: does a ray hit any collider?
pub trait Raycaster {
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> bool;
}

impl<F> Raycaster for F
where
    F: Fn(Vec3, Vec3, f32) -> bool,
{
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> bool {
        self(origin, direction, max_distance)
    }
}
