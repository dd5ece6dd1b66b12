//! Platform integration layer
//!
//! Browser (wasm32): DOM overlay surface and the `wasm-bindgen` API the JS
//! engine calls into. Native builds only use the headless runner in `main.rs`.

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{DomOverlay, WebGame};
