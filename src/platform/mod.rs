//! Platform abstraction layer
//!
//! Browser builds hand the engine to a JS front end that owns the camera,
//! the hand-pose model, the interval timer, and drawing. Native builds use
//! `runner` instead.

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::WebGame;
