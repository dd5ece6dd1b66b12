//! Deterministic progress/layout model
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes from the host as a parameter, never from a system clock
//! - Timers fire in due-time order, ties in scheduling order
//! - No rendering or platform dependencies (display goes through `ui::DisplaySurface`)

pub mod layout;
pub mod overlay;
pub mod scene;
pub mod state;
pub mod tick;
pub mod timer;

pub use layout::{
    GroundSegment, WorldLayout, derive_layout, segment_count, token_position, world_width,
};
pub use overlay::{Overlay, OverlayContent, OverlayState};
pub use scene::ResumeScene;
pub use state::{Collection, GameEvent, GamePhase, GameState, ProgressState, Token};
pub use tick::{Facing, MotionCommand, TickInput, motion_for};
pub use timer::{GameTime, TimerId, TimerKind, Timers};
