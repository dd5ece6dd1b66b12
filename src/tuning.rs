//! Data-driven layout, motion and timing constants
//!
//! Defaults mirror [`crate::consts`]. A tuning file only needs the fields it
//! overrides.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GameError, Result};

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Layout ===
    /// Horizontal distance between tokens (also world width added per entry)
    pub token_spacing: f32,
    /// X position of the first token
    pub token_start_x: f32,
    /// Token height above the ground line
    pub token_hover: f32,
    /// Ground tile width
    pub tile_width: f32,
    /// Ground strip height
    pub ground_height: f32,
    /// Ground fill colour (0xRRGGBB)
    pub ground_color: u32,

    // === Player ===
    pub player_spawn_x: f32,
    pub player_spawn_hover: f32,
    pub player_gravity: f32,
    pub walk_speed: f32,
    pub jump_speed: f32,

    // === Overlay timing (seconds) ===
    pub detail_hide_delay: f64,
    pub summary_delay: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            token_spacing: TOKEN_SPACING,
            token_start_x: TOKEN_START_X,
            token_hover: TOKEN_HOVER,
            tile_width: TILE_WIDTH,
            ground_height: GROUND_HEIGHT,
            ground_color: GROUND_COLOR,

            player_spawn_x: PLAYER_SPAWN_X,
            player_spawn_hover: PLAYER_SPAWN_HOVER,
            player_gravity: PLAYER_GRAVITY,
            walk_speed: WALK_SPEED,
            jump_speed: JUMP_SPEED,

            detail_hide_delay: DETAIL_HIDE_DELAY,
            summary_delay: SUMMARY_DELAY,
        }
    }
}

impl Tuning {
    /// Parse and validate a tuning file
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would break layout or timers
    pub fn validate(&self) -> Result<()> {
        if !(self.tile_width > 0.0) {
            return Err(GameError::InvalidTuning(format!(
                "tile_width must be positive, got {}",
                self.tile_width
            )));
        }
        if !(self.token_spacing > 0.0) {
            return Err(GameError::InvalidTuning(format!(
                "token_spacing must be positive, got {}",
                self.token_spacing
            )));
        }
        if !(self.detail_hide_delay >= 0.0) || !(self.summary_delay >= 0.0) {
            return Err(GameError::InvalidTuning(
                "overlay delays must be non-negative".to_string(),
            ));
        }
        if !(self.ground_height >= 0.0) {
            return Err(GameError::InvalidTuning(
                "ground_height must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let t = Tuning::default();
        assert_eq!(t.token_spacing, 300.0);
        assert_eq!(t.token_start_x, 200.0);
        assert_eq!(t.tile_width, 64.0);
        assert_eq!(t.detail_hide_delay, 6.0);
        assert_eq!(t.summary_delay, 7.0);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "walk_speed": 200.0 }"#).unwrap();
        assert_eq!(t.walk_speed, 200.0);
        assert_eq!(t.jump_speed, JUMP_SPEED);
    }

    #[test]
    fn test_rejects_zero_tile_width() {
        let err = Tuning::from_json(r#"{ "tile_width": 0.0 }"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidTuning(_)));
    }

    #[test]
    fn test_rejects_negative_delay() {
        let t = Tuning {
            detail_hide_delay: -1.0,
            ..Default::default()
        };
        assert!(t.validate().is_err());
    }
}
