use glam::Affine3A;
use hecs::World;

use crate::{
    components::{GlobalTransform, RigidBody},
    contexts::PhysicsContext,
    util,
};

/// Walks through each pair of `RigidBody`s and `GlobalTransform`s and writes the
/// body's simulated pose back into the scene transform. Run after
/// [`crate::contexts::PhysicsContext::update`], so that next frame's control law sees
/// the pose this frame's physics step produced.
pub fn update_global_transform_with_rigid_body_system(
    world: &mut World,
    physics_context: &PhysicsContext,
) {
    for (_, (rigid_body, global_transform)) in
        world.query_mut::<(&RigidBody, &mut GlobalTransform)>()
    {
        let Some(body) = physics_context.rigid_bodies.get(rigid_body.handle) else {
            continue;
        };
        let (rotation, translation) = util::decompose_isometry(body.position());
        global_transform.0 = Affine3A::from_rotation_translation(rotation, translation);
    }
}
