//! Player controller: pure pose → pose functions.
//!
//! Collision is a single point test against the *destination* cell.  There
//! is no sliding along walls and no sweep between start and end, so a step
//! longer than a cell can cut across the corner of a wall cell diagonally.
//! At the reference 3 units/frame against 64-unit cells this cannot happen.

use crate::world::{GridMap, Pose};

use super::components::{Actions, InputCmd, Tuning};

/// Move `forward_delta` units along the heading (negative = backwards).
/// Returns `pose` unchanged if the destination point is blocked.
pub fn propose_move(map: &GridMap, pose: Pose, forward_delta: f32) -> Pose {
    let target = pose.pos + pose.forward() * forward_delta;
    if map.is_blocked(target) {
        return pose;
    }
    Pose { pos: target, ..pose }
}

/// Turn by `delta` radians.  Never blocked.
#[inline]
pub fn rotate(pose: Pose, delta: f32) -> Pose {
    Pose {
        heading: pose.heading + delta,
        ..pose
    }
}

/// Apply one frame of held keys in order: forward, backward, left, right.
pub fn apply_input(map: &GridMap, mut pose: Pose, cmd: &InputCmd, tuning: Tuning) -> Pose {
    let held = cmd.held;
    if held.contains(Actions::FORWARD) {
        pose = propose_move(map, pose, tuning.move_step);
    }
    if held.contains(Actions::BACKWARD) {
        pose = propose_move(map, pose, -tuning.move_step);
    }
    if held.contains(Actions::TURN_LEFT) {
        pose = rotate(pose, -tuning.turn_step);
    }
    if held.contains(Actions::TURN_RIGHT) {
        pose = rotate(pose, tuning.turn_step);
    }
    pose
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
