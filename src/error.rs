use thiserror::Error;

/// Errors produced at the crate's fallible boundaries
#[derive(Error, Debug)]
pub enum HandError {
    /// The entity's rigid body handle no longer resolves to a body in the physics
    /// context
    #[error("The rigid body for this entity is missing from the physics context")]
    MissingRigidBody,
    /// Catch-all for errors bubbled up from other crates
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
