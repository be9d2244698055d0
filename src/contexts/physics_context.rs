use hecs::{Entity, World};
use rapier3d::na::Vector3;
use rapier3d::prelude::*;

use crate::{components::RigidBody as RigidBodyComponent, HandError, HandResult};

/// Wraps the rapier physics simulation that hand proxies live in.
///
/// Gravity defaults to zero - hands float. Hosts embedding this alongside their own
/// physics content can set `gravity` to whatever their world needs.
pub struct PhysicsContext {
    pub physics_pipeline: PhysicsPipeline,
    pub gravity: Vector3<f32>,
    pub colliders: ColliderSet,
    pub broad_phase: BroadPhase,
    pub narrow_phase: NarrowPhase,
    pub rigid_bodies: RigidBodySet,
    pub island_manager: IslandManager,
    pub integration_parameters: IntegrationParameters,
    pub impulse_joints: ImpulseJointSet,
    pub multibody_joints: MultibodyJointSet,
    pub ccd_solver: CCDSolver,
}

impl Default for PhysicsContext {
    fn default() -> Self {
        let mut integration_parameters = IntegrationParameters::default();

        // TODO: This is *usually* 72fps on the Quest 2, but we may support higher refresh rates later.
        integration_parameters.dt = 1. / 72.;

        PhysicsContext {
            physics_pipeline: PhysicsPipeline::new(),
            gravity: vector![0.0, 0.0, 0.0],
            colliders: ColliderSet::new(),
            broad_phase: BroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            rigid_bodies: RigidBodySet::new(),
            island_manager: IslandManager::new(),
            integration_parameters,
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
        }
    }
}

impl PhysicsContext {
    /// Advance the simulation by one tick. Called once per frame by the host, after
    /// `hands_system` has issued its commands.
    pub fn update(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
    }

    /// Insert a rigid body and its collider for the given entity and return the
    /// component that refers back to them. The collider's `user_data` is set to the
    /// entity's bits so hosts can attribute contacts back to the entity.
    pub fn create_rigid_body_and_collider(
        &mut self,
        entity: Entity,
        rigid_body: RigidBody,
        mut collider: Collider,
    ) -> RigidBodyComponent {
        collider.user_data = entity.to_bits().get() as _;
        let rigid_body_handle = self.rigid_bodies.insert(rigid_body);
        self.colliders
            .insert_with_parent(collider, rigid_body_handle, &mut self.rigid_bodies);

        RigidBodyComponent {
            handle: rigid_body_handle,
        }
    }

    /// Fallible accessor for the rapier body behind an entity's
    /// [`RigidBodyComponent`].
    pub fn get_rigid_body<'a>(
        &'a mut self,
        world: &World,
        entity: Entity,
    ) -> HandResult<&'a mut RigidBody> {
        let rigid_body_handle = world
            .get::<&RigidBodyComponent>(entity)
            .map_err(anyhow::Error::new)?
            .handle;
        self.rigid_bodies
            .get_mut(rigid_body_handle)
            .ok_or(HandError::MissingRigidBody)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_get_rigid_body() {
        let mut world = World::new();
        let mut physics_context = PhysicsContext::default();

        let entity = world.spawn(());
        let component = physics_context.create_rigid_body_and_collider(
            entity,
            RigidBodyBuilder::dynamic().build(),
            ColliderBuilder::cuboid(0.1, 0.1, 0.1).build(),
        );
        world.insert_one(entity, component).unwrap();

        assert!(physics_context.get_rigid_body(&world, entity).is_ok());

        let orphan = world.spawn(());
        assert!(physics_context.get_rigid_body(&world, orphan).is_err());
    }
}
