#![allow(missing_docs)]
pub mod hands;
pub mod update_global_transform_with_rigid_body;

pub use hands::{add_hand, hands_system};
pub use update_global_transform_with_rigid_body::update_global_transform_with_rigid_body_system;
