#![deny(missing_docs)]

//! Drive a physics-simulated hand proxy from a tracked VR controller.
//!
//! Hands that are posed directly from controller tracking clip straight through the
//! world. `physics-hand` keeps the visible hand on a dynamic [`rapier3d`] rigid body
//! instead, and chases the controller with a proportional velocity controller for
//! position and a critically damped PD torque for orientation. When the tracking error
//! is too small to matter, or too large to recover from physically, the body is warped
//! into place instead.
//!
//! The crate is host-agnostic: it never talks to a tracking runtime itself. Each frame
//! the host feeds controller poses into an [`contexts::InputContext`], runs
//! [`systems::hands_system`], steps the [`contexts::PhysicsContext`], then mirrors the
//! simulated poses back into the scene with
//! [`systems::update_global_transform_with_rigid_body_system`]:
//!
//! ```
//! use physics_hand::{
//!     components::hand::Handedness,
//!     contexts::{InputContext, PhysicsContext},
//!     follow::FollowConfig,
//!     systems::{add_hand, hands_system, update_global_transform_with_rigid_body_system},
//! };
//!
//! let mut world = physics_hand::hecs::World::new();
//! let mut physics_context = PhysicsContext::default();
//! let mut input_context = InputContext::default();
//! add_hand(
//!     Handedness::Left,
//!     FollowConfig::default(),
//!     &mut world,
//!     &mut physics_context,
//! );
//!
//! // Each frame, fed by the host's tracking layer:
//! input_context.update_grip_pose(
//!     Handedness::Left,
//!     [0.0, 1.4, -0.3].into(),
//!     physics_hand::mint::Quaternion {
//!         v: [0.0, 0.0, 0.0].into(),
//!         s: 1.0,
//!     },
//! );
//! hands_system(&mut world, &input_context, &mut physics_context);
//! physics_context.update();
//! update_global_transform_with_rigid_body_system(&mut world, &physics_context);
//! ```

pub use glam;
pub use hecs;
pub use mint;
pub use rapier3d;

pub use error::HandError;
pub use follow::{FollowCommands, FollowConfig, PositionCommand, RotationCommand};

/// Components are data attached to hand entities in the [`hecs::World`]
pub mod components;
/// Contexts are wrappers around external state the systems interact with
pub mod contexts;
mod error;
/// The follow control law, expressed as pure functions over poses
pub mod follow;
/// Systems are functions called each frame to update the simulation
pub mod systems;
/// Kitchen sink utility functions
pub mod util;

/// physics-hand result type
pub type HandResult<T> = std::result::Result<T, HandError>;
