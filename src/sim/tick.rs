//! Per-frame input to motion mapping
//!
//! The host samples direction keys once per frame and applies the returned
//! command to the player body. Last-read state wins; nothing is buffered.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Input sampled for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Player body is resting on something (set by the physics host)
    pub grounded: bool,
}

/// Sprite facing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// What the host should do with the player body this frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionCommand {
    /// Horizontal velocity to set
    pub velocity_x: f32,
    /// Vertical velocity to set for a jump (negative is up), if any
    pub jump_velocity: Option<f32>,
    pub facing: Facing,
    /// Play the walk cycle (stop it otherwise)
    pub walking: bool,
}

/// Map input to a motion command. Left wins when both directions are held.
pub fn motion_for(input: &TickInput, facing: Facing, tuning: &Tuning) -> MotionCommand {
    let (velocity_x, facing, walking) = if input.left {
        (-tuning.walk_speed, Facing::Left, true)
    } else if input.right {
        (tuning.walk_speed, Facing::Right, true)
    } else {
        (0.0, facing, false)
    };

    let jump_velocity = (input.jump && input.grounded).then_some(-tuning.jump_speed);

    MotionCommand {
        velocity_x,
        jump_velocity,
        facing,
        walking,
    }
}
