use serde::{Deserialize, Serialize};

use crate::follow::FollowConfig;

/// A component that represents the "side" or "handedness" that an entity is on.
/// Used to identify which tracked controller a hand should follow.
///
/// Serializes as the host-facing `"left"` / `"right"` strings.
#[derive(Debug, PartialEq, Clone, Copy, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handedness {
    /// Left hand side
    Left,
    /// Right hand side
    Right,
}

/// A component that's added to an entity to make it a physics-simulated hand proxy,
/// driven towards its tracked controller each frame.
/// Requires `hands_system`.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Which side is this hand on?
    pub handedness: Handedness,
    /// Follow tuning, supplied at attach time and immutable thereafter
    pub config: FollowConfig,
}

impl Hand {
    /// Shortcut helper to create a left hand with default tuning
    pub fn left() -> Hand {
        Hand {
            handedness: Handedness::Left,
            config: FollowConfig::default(),
        }
    }

    /// Shortcut helper to create a right hand with default tuning
    pub fn right() -> Hand {
        Hand {
            handedness: Handedness::Right,
            config: FollowConfig::default(),
        }
    }

    /// Create a hand with explicit tuning
    pub fn with_config(handedness: Handedness, config: FollowConfig) -> Hand {
        Hand { handedness, config }
    }
}
