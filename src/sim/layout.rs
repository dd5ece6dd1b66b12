//! Level layout derived from the résumé entry count
//!
//! The world is a horizontal strip: one token every `token_spacing` units,
//! plus one viewport of run-out so the last token is never at the edge.
//! Coordinates follow the host engine: origin top-left, y pointing down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// One static ground tile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundSegment {
    /// Tile centre
    pub center: Vec2,
    /// Tile width and height
    pub size: Vec2,
}

/// Everything the host engine needs to build the level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldLayout {
    /// Exact world width; `size.x` is this rounded to `f32`
    pub width: f64,
    /// World (and camera) bounds: (0, 0) to `size`
    pub size: Vec2,
    /// Y coordinate of the top of the ground strip
    pub ground_line: f32,
    /// Ground tiles covering `[0, size.x)`
    pub ground: Vec<GroundSegment>,
    /// Ground fill colour (0xRRGGBB)
    pub ground_color: u32,
    /// Token positions, indexed like the résumé entries
    pub tokens: Vec<Vec2>,
    pub player_spawn: Vec2,
    pub player_gravity: f32,
}

/// World width for `total_count` tokens
///
/// Computed in `f64`: `f32` loses whole units past 2^24, which a long
/// résumé at 300 units per entry reaches.
#[inline]
pub fn world_width(total_count: usize, viewport_width: f32, tuning: &Tuning) -> f64 {
    total_count as f64 * tuning.token_spacing as f64 + viewport_width.max(0.0) as f64
}

/// Number of `tile_width` tiles needed to cover `[0, width)`
///
/// Exact multiples get no trailing tile; non-positive widths get none.
pub fn segment_count(width: f64, tile_width: f32) -> usize {
    if width <= 0.0 || tile_width <= 0.0 {
        return 0;
    }
    (width / tile_width as f64).ceil() as usize
}

/// Position of token `index`
#[inline]
pub fn token_position(index: usize, viewport_height: f32, tuning: &Tuning) -> Vec2 {
    let x = tuning.token_start_x as f64 + tuning.token_spacing as f64 * index as f64;
    Vec2::new(
        x as f32,
        viewport_height - tuning.ground_height - tuning.token_hover,
    )
}

/// Build the full layout for a scene
pub fn derive_layout(total_count: usize, viewport: Vec2, tuning: &Tuning) -> WorldLayout {
    let width = world_width(total_count, viewport.x, tuning);
    let height = viewport.y.max(0.0);
    let ground_line = height - tuning.ground_height;

    let segments = segment_count(width, tuning.tile_width);
    let size = Vec2::new(tuning.tile_width, tuning.ground_height);
    let ground = (0..segments)
        .map(|i| GroundSegment {
            center: Vec2::new(
                (i as f64 * tuning.tile_width as f64 + tuning.tile_width as f64 / 2.0) as f32,
                height - tuning.ground_height / 2.0,
            ),
            size,
        })
        .collect();

    let tokens = (0..total_count)
        .map(|i| token_position(i, height, tuning))
        .collect();

    WorldLayout {
        width,
        size: Vec2::new(width as f32, height),
        ground_line,
        ground,
        ground_color: tuning.ground_color,
        tokens,
        player_spawn: Vec2::new(tuning.player_spawn_x, ground_line - tuning.player_spawn_hover),
        player_gravity: tuning.player_gravity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_width_grows_per_entry() {
        let t = Tuning::default();
        assert_eq!(world_width(0, 800.0, &t), 800.0);
        assert_eq!(world_width(3, 800.0, &t), 1700.0);
    }

    #[test]
    fn test_segment_count_boundaries() {
        assert_eq!(segment_count(640.0, 64.0), 10);
        assert_eq!(segment_count(641.0, 64.0), 11);
        assert_eq!(segment_count(1.0, 64.0), 1);
        assert_eq!(segment_count(0.0, 64.0), 0);
        assert_eq!(segment_count(100.0, 0.0), 0);
    }

    #[test]
    fn test_token_positions() {
        let t = Tuning::default();
        let layout = derive_layout(3, Vec2::new(800.0, 600.0), &t);
        assert_eq!(layout.tokens.len(), 3);
        assert_eq!(layout.tokens[0], Vec2::new(200.0, 508.0));
        assert_eq!(layout.tokens[2], Vec2::new(800.0, 508.0));
    }

    #[test]
    fn test_ground_tiles_cover_world() {
        let t = Tuning::default();
        let layout = derive_layout(3, Vec2::new(800.0, 600.0), &t);
        // 1700 / 64 = 26.56
        assert_eq!(layout.ground.len(), 27);
        let first = layout.ground[0];
        assert_eq!(first.center, Vec2::new(32.0, 584.0));
        assert_eq!(first.size, Vec2::new(64.0, 32.0));
        let last = layout.ground.last().unwrap();
        assert!(last.center.x + last.size.x / 2.0 >= layout.size.x);
    }

    #[test]
    fn test_world_width_exact_for_long_resumes() {
        let t = Tuning::default();
        // Past the f32 integer range: 100_000 * 300 + 801
        assert_eq!(world_width(100_000, 801.0, &t), 30_000_801.0);
        assert_eq!(segment_count(30_000_801.0, 64.0), 468_763);
        // 100_000 * 300 + 64 = 64 * 468_751, no trailing tile
        assert_eq!(segment_count(world_width(100_000, 64.0, &t), 64.0), 468_751);
    }

    #[test]
    fn test_empty_resume_is_viewport_sized() {
        let t = Tuning::default();
        let layout = derive_layout(0, Vec2::new(1024.0, 768.0), &t);
        assert_eq!(layout.size, Vec2::new(1024.0, 768.0));
        assert!(layout.tokens.is_empty());
        assert_eq!(layout.ground.len(), 16);
    }

    #[test]
    fn test_player_spawn_above_ground() {
        let t = Tuning::default();
        let layout = derive_layout(1, Vec2::new(800.0, 600.0), &t);
        assert_eq!(layout.ground_line, 568.0);
        assert_eq!(layout.player_spawn, Vec2::new(64.0, 518.0));
    }
}
