use glam::Vec3;
use hecs::{Entity, World};
use rapier3d::prelude::{ColliderBuilder, RigidBody as RapierBody, RigidBodyBuilder};

use crate::{
    components::{hand::Handedness, GlobalTransform, Hand, RigidBody},
    contexts::{InputContext, PhysicsContext},
    follow::{follow_commands, FollowCommands, FollowConfig, PositionCommand, RotationCommand},
    util,
};

/// Half extents of the palm collider created by [`add_hand`], in metres
pub const HAND_HALF_EXTENTS: [f32; 3] = [0.04, 0.02, 0.09];

/// Drives each hand proxy's rigid body towards its tracked controller.
///
/// An entity is skipped for the frame - silently, retried next frame - if its
/// controller has not produced a pose yet, or if its rigid body handle no longer
/// resolves. The proxy pose used by the control law is the entity's
/// [`GlobalTransform`], ie. the scene pose mirrored from the *previous* frame's
/// physics step.
pub fn hands_system(
    world: &mut World,
    input_context: &InputContext,
    physics_context: &mut PhysicsContext,
) {
    for (_, (hand, global_transform, rigid_body)) in
        world.query_mut::<(&Hand, &GlobalTransform, &RigidBody)>()
    {
        let Some(stage_from_grip) = input_context.stage_from_grip(hand.handedness) else {
            continue;
        };
        let Some(body) = physics_context.rigid_bodies.get_mut(rigid_body.handle) else {
            continue;
        };

        let angular_velocity = util::glam_vec_from_na(body.angvel());
        let principal_inertia = util::principal_inertia(body.mass_properties());

        let commands = follow_commands(
            &hand.config,
            &global_transform.0,
            &stage_from_grip,
            angular_velocity,
            principal_inertia,
        );
        apply_commands(&commands, body);
    }
}

/// Apply one frame's follow commands to the hand's rapier body.
///
/// The position command is applied first; a rotation snap then keeps whatever
/// translation the position command left in place.
pub fn apply_commands(commands: &FollowCommands, body: &mut RapierBody) {
    match commands.position {
        PositionCommand::Snap {
            translation,
            rotation,
        } => {
            body.set_position(
                util::isometry_from_rotation_translation(rotation, translation),
                true,
            );
        }
        PositionCommand::SetLinearVelocity(velocity) => {
            body.set_linvel(util::na_vector_from_glam(velocity), true);
        }
    }

    // rapier torques are persistent, so last frame's torque is cleared either way
    body.reset_torques(false);
    match commands.rotation {
        RotationCommand::Snap { rotation } => {
            let mut position = *body.position();
            position.rotation = util::na_rotation_from_glam(rotation);
            body.set_position(position, true);
            body.set_angvel(util::na_vector_from_glam(Vec3::ZERO), true);
        }
        RotationCommand::ApplyTorque(torque) => {
            body.add_torque(util::na_vector_from_glam(torque), true);
        }
    }
}

/// Spawn a hand proxy: a dynamic rapier body with a palm-sized collider, plus the
/// components [`hands_system`] needs.
pub fn add_hand(
    handedness: Handedness,
    config: FollowConfig,
    world: &mut World,
    physics_context: &mut PhysicsContext,
) -> Entity {
    println!("[PHYSICS_HAND] Adding {handedness:?} hand");
    let entity = world.spawn((Hand::with_config(handedness, config), GlobalTransform::default()));

    let collider = ColliderBuilder::cuboid(
        HAND_HALF_EXTENTS[0],
        HAND_HALF_EXTENTS[1],
        HAND_HALF_EXTENTS[2],
    )
    .density(1000.)
    .build();
    let rigid_body = RigidBodyBuilder::dynamic().build();
    let component = physics_context.create_rigid_body_and_collider(entity, rigid_body, collider);
    world.insert_one(entity, component).unwrap();

    entity
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Quat;
    use crate::systems::update_global_transform_with_rigid_body_system;

    fn setup() -> (World, PhysicsContext, InputContext, Entity) {
        let mut world = World::default();
        let mut physics_context = PhysicsContext::default();
        let input_context = InputContext::default();
        let entity = add_hand(
            Handedness::Left,
            FollowConfig::default(),
            &mut world,
            &mut physics_context,
        );
        (world, physics_context, input_context, entity)
    }

    fn track(input_context: &mut InputContext, translation: Vec3, rotation: Quat) {
        input_context.update_grip_pose(
            Handedness::Left,
            mint::Vector3::from(translation),
            mint::Quaternion::from(rotation),
        );
    }

    #[test]
    pub fn test_skips_until_controller_tracked() {
        let (mut world, mut physics_context, input_context, entity) = setup();

        hands_system(&mut world, &input_context, &mut physics_context);

        let handle = world.get::<&RigidBody>(entity).unwrap().handle;
        let body = &physics_context.rigid_bodies[handle];
        assert_relative_eq!(util::glam_vec_from_na(body.linvel()), Vec3::ZERO);
        assert_relative_eq!(
            util::glam_vec_from_na(&body.position().translation.vector),
            Vec3::ZERO
        );
    }

    #[test]
    pub fn test_skips_when_rigid_body_is_gone() {
        let (mut world, mut physics_context, mut input_context, entity) = setup();
        track(&mut input_context, Vec3::new(0.5, 0.0, 0.0), Quat::IDENTITY);

        let handle = world.get::<&RigidBody>(entity).unwrap().handle;
        physics_context.rigid_bodies.remove(
            handle,
            &mut physics_context.island_manager,
            &mut physics_context.colliders,
            &mut physics_context.impulse_joints,
            &mut physics_context.multibody_joints,
            true,
        );

        // The dangling handle is skipped without panicking or touching the scene pose.
        hands_system(&mut world, &input_context, &mut physics_context);

        let global_transform = world.get::<&GlobalTransform>(entity).unwrap();
        let (_, rotation, translation) = global_transform.to_scale_rotation_translation();
        assert_relative_eq!(translation, Vec3::ZERO);
        assert_relative_eq!(rotation, Quat::IDENTITY);
    }

    #[test]
    pub fn test_sets_proportional_velocity() {
        let (mut world, mut physics_context, mut input_context, entity) = setup();
        track(&mut input_context, Vec3::new(0.5, 0.0, 0.0), Quat::IDENTITY);

        hands_system(&mut world, &input_context, &mut physics_context);

        let handle = world.get::<&RigidBody>(entity).unwrap().handle;
        let body = &physics_context.rigid_bodies[handle];
        assert_relative_eq!(
            util::glam_vec_from_na(body.linvel()),
            Vec3::new(10.0, 0.0, 0.0)
        );
    }

    #[test]
    pub fn test_snaps_position_when_out_of_range() {
        let (mut world, mut physics_context, mut input_context, entity) = setup();
        track(&mut input_context, Vec3::new(0.0, 2.0, 0.0), Quat::IDENTITY);

        hands_system(&mut world, &input_context, &mut physics_context);

        let handle = world.get::<&RigidBody>(entity).unwrap().handle;
        let body = &physics_context.rigid_bodies[handle];
        assert_relative_eq!(
            util::glam_vec_from_na(&body.position().translation.vector),
            Vec3::new(0.0, 2.0, 0.0)
        );
    }

    #[test]
    pub fn test_snaps_rotation_and_zeroes_angular_velocity() {
        let (mut world, mut physics_context, mut input_context, entity) = setup();
        let grip_rotation = Quat::from_rotation_y(0.1);
        track(&mut input_context, Vec3::ZERO, grip_rotation);

        let handle = world.get::<&RigidBody>(entity).unwrap().handle;
        physics_context.rigid_bodies[handle]
            .set_angvel(util::na_vector_from_glam(Vec3::new(1.0, 0.0, 0.0)), true);

        hands_system(&mut world, &input_context, &mut physics_context);

        let body = &physics_context.rigid_bodies[handle];
        let (rotation, _) = util::decompose_isometry(body.position());
        assert_relative_eq!(rotation, grip_rotation, epsilon = 1e-6);
        assert_relative_eq!(util::glam_vec_from_na(body.angvel()), Vec3::ZERO);
    }

    #[test]
    pub fn test_torque_turns_body_towards_controller() {
        let (mut world, mut physics_context, mut input_context, entity) = setup();
        track(&mut input_context, Vec3::ZERO, Quat::from_rotation_y(1.0));

        hands_system(&mut world, &input_context, &mut physics_context);
        physics_context.update();

        let handle = world.get::<&RigidBody>(entity).unwrap().handle;
        let body = &physics_context.rigid_bodies[handle];
        assert!(
            body.angvel().y > 0.0,
            "Expected the torque to start the body turning towards the controller"
        );
    }

    #[test]
    pub fn test_hand_converges_on_controller() {
        let (mut world, mut physics_context, mut input_context, entity) = setup();
        let grip_translation = Vec3::new(0.5, 0.2, -0.3);
        let grip_rotation = Quat::from_rotation_y(1.0);
        track(&mut input_context, grip_translation, grip_rotation);

        // A second's worth of frames is plenty for both controllers to settle.
        for _ in 0..72 {
            hands_system(&mut world, &input_context, &mut physics_context);
            physics_context.update();
            update_global_transform_with_rigid_body_system(&mut world, &physics_context);
        }

        let handle = world.get::<&RigidBody>(entity).unwrap().handle;
        let body = &physics_context.rigid_bodies[handle];
        let (rotation, translation) = util::decompose_isometry(body.position());
        assert_relative_eq!(translation, grip_translation, epsilon = 0.01);
        assert!(rotation.angle_between(grip_rotation) < 0.01);
    }
}
