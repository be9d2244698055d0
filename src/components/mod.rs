#![allow(missing_docs)]
pub mod global_transform;
pub mod hand;
pub mod rigid_body;

pub use global_transform::GlobalTransform;
pub use hand::Hand;
pub use rigid_body::RigidBody;
