//! Resume Quest - A side-scrolling résumé platformer
//!
//! Core modules:
//! - `sim`: Deterministic progress/layout model (layout, collection, overlay timers)
//! - `resume`: Résumé data file model
//! - `tuning`: Data-driven layout, motion and timing constants
//! - `ui`: Overlay display surface and markup
//! - `platform`: Browser integration (wasm32 only)
//!
//! Physics, rendering and input polling are owned by the host engine, which
//! drives a [`sim::ResumeScene`] through `on_overlap` and `on_tick`.

pub mod error;
pub mod platform;
pub mod resume;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use error::{GameError, Result};
pub use resume::{Contact, ResumeData, ResumeEntry};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Horizontal distance between consecutive tokens
    pub const TOKEN_SPACING: f32 = 300.0;
    /// X position of the first token
    pub const TOKEN_START_X: f32 = 200.0;
    /// Token height above the ground line
    pub const TOKEN_HOVER: f32 = 60.0;

    /// Ground tiles
    pub const TILE_WIDTH: f32 = 64.0;
    pub const GROUND_HEIGHT: f32 = 32.0;
    pub const GROUND_COLOR: u32 = 0x854c30;

    /// Player spawn (x, height above the ground line)
    pub const PLAYER_SPAWN_X: f32 = 64.0;
    pub const PLAYER_SPAWN_HOVER: f32 = 50.0;
    /// Player gravity (pixels/s², y points down)
    pub const PLAYER_GRAVITY: f32 = 500.0;
    /// Horizontal walk speed (pixels/s)
    pub const WALK_SPEED: f32 = 160.0;
    /// Upward jump speed (pixels/s)
    pub const JUMP_SPEED: f32 = 350.0;

    /// Seconds an entry detail stays on screen
    pub const DETAIL_HIDE_DELAY: f64 = 6.0;
    /// Seconds between the final collection and the summary
    pub const SUMMARY_DELAY: f64 = 7.0;
}
