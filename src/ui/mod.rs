//! Overlay presentation
//!
//! The simulation never touches the page directly; it drives a
//! [`DisplaySurface`]. Markup generation is shared by every surface that
//! renders HTML.

pub mod markup;
pub mod surface;

pub use markup::{escape_html, render_overlay};
pub use surface::{DisplaySurface, RecordingSurface};
