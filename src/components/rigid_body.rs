use rapier3d::prelude::RigidBodyHandle;

/// A non-owning handle to the rapier rigid body that simulates this entity.
///
/// The body itself lives in [`crate::contexts::PhysicsContext`]; this component is
/// attached once the body has been created there. Entities without it (or whose handle
/// no longer resolves) are skipped by `hands_system` until it appears.
#[derive(Debug, Clone)]
pub struct RigidBody {
    /// The handle into [`crate::contexts::PhysicsContext::rigid_bodies`]
    pub handle: RigidBodyHandle,
}
