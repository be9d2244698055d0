use glam::{Affine3A, Quat, Vec3};

/// Component used to represent the entity's pose in stage space.
/// For hand proxies this is mirrored from the physics simulation at the end of each
/// frame by `update_global_transform_with_rigid_body_system`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalTransform(pub Affine3A);

impl Default for GlobalTransform {
    fn default() -> Self {
        Self(Affine3A::IDENTITY)
    }
}

impl GlobalTransform {
    /// Convenience function to decompose the [`GlobalTransform`] into its components
    pub fn to_scale_rotation_translation(&self) -> (Vec3, Quat, Vec3) {
        self.0.to_scale_rotation_translation()
    }
}
