//! The per-frame control law that pulls a hand proxy towards its controller.
//!
//! Position is driven by a proportional velocity controller, orientation by a
//! critically damped PD torque, following the spring tuning derived in
//! <https://amebouslabs.com/developing-physics-based-vr-hands-in-unity/>. Both are
//! bypassed with a direct pose warp when the tracking error falls below a threshold or
//! grows too large to chase physically.
//!
//! Everything here is pure: [`follow_commands`] reads poses and body state and returns
//! a [`FollowCommands`] describing what should be done to the rigid body, without
//! touching any engine state itself.

use glam::{Affine3A, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Angular distances (radians) above this are warped rather than torqued, as the PD
/// controller tends to overshoot violently across large errors.
pub const ROTATION_SNAP_LIMIT: f32 = 2.0;

/// Attach-time tuning for a hand's follow behaviour. Immutable after attach.
///
/// Serialized field names use the host-facing camelCase schema, so a config blob like
/// `{"positionStrength": 20.0, "rotationThreshold": 0.3}` deserializes directly; any
/// omitted option takes its default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FollowConfig {
    /// Gain applied to the position error when setting linear velocity
    pub position_strength: f32,
    /// Distances (metres) below this are warped instead of chased
    pub position_threshold: f32,
    /// Distances (metres) above this are warped instead of chased
    pub max_distance: f32,
    /// Spring strength of the orientation PD controller
    pub rotation_strength: f32,
    /// Angular distances (radians) below this are warped instead of torqued
    pub rotation_threshold: f32,
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            position_strength: 20.0,
            position_threshold: 0.005,
            max_distance: 1.0,
            rotation_strength: 30.0,
            rotation_threshold: 0.3,
        }
    }
}

/// What to do to the body about its position error this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionCommand {
    /// Warp the body to the controller's position, keeping the proxy's current
    /// orientation. A discontinuous correction, not a velocity command.
    Snap {
        /// The controller's position
        translation: Vec3,
        /// The proxy's current orientation, preserved by the warp
        rotation: Quat,
    },
    /// Drive the body towards the controller with a proportional linear velocity
    SetLinearVelocity(Vec3),
}

/// What to do to the body about its orientation error this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotationCommand {
    /// Warp the body to the controller's orientation and zero its angular velocity,
    /// bypassing the control law entirely. The body keeps its current translation.
    Snap {
        /// The controller's orientation
        rotation: Quat,
    },
    /// Apply a world-space PD torque turning the body towards the controller
    ApplyTorque(Vec3),
}

/// One frame's output of the follow control law
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowCommands {
    /// Command for the position error
    pub position: PositionCommand,
    /// Command for the orientation error
    pub rotation: RotationCommand,
}

/// Evaluate one frame of the follow control law.
///
/// `stage_from_proxy` is the hand proxy's scene pose, `stage_from_grip` the tracked
/// controller's. `angular_velocity` and `principal_inertia` are read from the proxy's
/// rigid body. The caller applies the returned commands; see
/// [`crate::systems::hands_system`].
pub fn follow_commands(
    config: &FollowConfig,
    stage_from_proxy: &Affine3A,
    stage_from_grip: &Affine3A,
    angular_velocity: Vec3,
    principal_inertia: Vec3,
) -> FollowCommands {
    let (_, proxy_rotation, proxy_translation) = stage_from_proxy.to_scale_rotation_translation();
    let (_, grip_rotation, grip_translation) = stage_from_grip.to_scale_rotation_translation();

    let distance = proxy_translation.distance(grip_translation);
    let position = if distance > config.max_distance || distance < config.position_threshold {
        // NOTE: warping while still colliding with something can leave the hand
        // bouncing and unresponsive until shaken, so keep max_distance reasonably high.
        PositionCommand::Snap {
            translation: grip_translation,
            rotation: proxy_rotation,
        }
    } else {
        let direction = (grip_translation - proxy_translation).normalize();
        PositionCommand::SetLinearVelocity(direction * config.position_strength * distance)
    };

    let angle_distance = proxy_rotation.angle_between(grip_rotation);
    let rotation =
        if angle_distance < config.rotation_threshold || angle_distance > ROTATION_SNAP_LIMIT {
            RotationCommand::Snap {
                rotation: grip_rotation,
            }
        } else {
            RotationCommand::ApplyTorque(pd_torque(
                config.rotation_strength,
                proxy_rotation,
                grip_rotation,
                angular_velocity,
                principal_inertia,
            ))
        };

    FollowCommands { position, rotation }
}

/// The world-space torque of a critically damped PD controller on orientation.
///
/// Gains are derived from `rotation_strength` so that the spring is critically damped:
/// `kp = (6 * strength)^2 / 4`, `kd = 4.5 * strength`. The raw PD output is scaled by
/// the body's principal moments of inertia in its local frame, so the resulting
/// angular acceleration is independent of the body's mass distribution.
pub fn pd_torque(
    rotation_strength: f32,
    proxy_rotation: Quat,
    grip_rotation: Quat,
    angular_velocity: Vec3,
    principal_inertia: Vec3,
) -> Vec3 {
    let kp = (6.0 * rotation_strength).powi(2) * 0.25;
    let kd = 4.5 * rotation_strength;

    let mut grip_from_proxy = grip_rotation * proxy_rotation.inverse();
    // Take the short way around.
    if grip_from_proxy.w < 0.0 {
        grip_from_proxy = -grip_from_proxy;
    }
    let (axis, angle) = grip_from_proxy.to_axis_angle();

    let pid = axis * kp * angle - angular_velocity * kd;

    // Into the body's local inertial frame, scale by the inertia tensor, back out.
    let inertia_to_world = proxy_rotation;
    inertia_to_world * (inertia_to_world.inverse() * pid * principal_inertia)
}
