use glam::Affine3A;

use crate::{components::hand::Handedness, util};

#[derive(Debug, Default, Clone, Copy)]
struct ControllerState {
    stage_from_grip: Affine3A,
    tracked: bool,
}

/// Context that holds the tracked controller poses hand proxies follow.
///
/// The host feeds a pose in for each controller every frame it has valid tracking;
/// on frames where tracking drops, skip the call and the previous pose is retained.
/// Until a controller has produced at least one valid pose, hands bound to it are
/// skipped entirely by `hands_system`.
#[derive(Debug, Default)]
pub struct InputContext {
    left: ControllerState,
    right: ControllerState,
}

impl InputContext {
    /// Record a valid grip pose for one controller, in stage space.
    pub fn update_grip_pose(
        &mut self,
        handedness: Handedness,
        position: mint::Vector3<f32>,
        orientation: mint::Quaternion<f32>,
    ) {
        let state = self.state_mut(handedness);
        state.stage_from_grip = util::affine_from_pose(position, orientation);
        state.tracked = true;
    }

    /// The controller's grip pose in stage space, or `None` if the controller has
    /// never been tracked.
    pub fn stage_from_grip(&self, handedness: Handedness) -> Option<Affine3A> {
        let state = self.state(handedness);
        state.tracked.then_some(state.stage_from_grip)
    }

    fn state(&self, handedness: Handedness) -> &ControllerState {
        match handedness {
            Handedness::Left => &self.left,
            Handedness::Right => &self.right,
        }
    }

    fn state_mut(&mut self, handedness: Handedness) -> &mut ControllerState {
        match handedness {
            Handedness::Left => &mut self.left,
            Handedness::Right => &mut self.right,
        }
    }
}
