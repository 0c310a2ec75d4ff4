//! Hand Breaker - Brick Breaker physics core for a hand-tracked paddle
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, collisions, block grid, round state)
//! - `config`: Field geometry and tuning, validated once at startup
//! - `input`: Input Adapter boundary (camera space → field space, latest-value slot)
//! - `engine`: Owns the round state and reads the paddle slot each tick
//! - `snapshot`: Read-only render state for the presentation layer
//! - `runner`: Fixed-interval ticker (native only)
//! - `platform`: Browser bindings (wasm32 only)

pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod platform;
#[cfg(not(target_arch = "wasm32"))]
pub mod runner;
pub mod sim;
pub mod snapshot;

pub use config::GameConfig;
pub use engine::Engine;
pub use error::ConfigError;
pub use input::{PaddleInput, PaddleTarget};
pub use snapshot::RenderSnapshot;

/// Default configuration constants
///
/// Screen-space pixels, y grows downward. Velocities are pixels per tick.
pub mod consts {
    /// Fixed simulation tick (~60 Hz)
    pub const TICK_INTERVAL_MS: u64 = 16;

    /// Default play field (portrait phone)
    pub const FIELD_WIDTH: f32 = 390.0;
    pub const FIELD_HEIGHT: f32 = 844.0;

    /// Camera preview strip at the top of the screen
    pub const CAMERA_STRIP_HEIGHT: f32 = 160.0;
    /// How far the play area reaches up into the camera strip
    pub const CAMERA_STRIP_INSET: f32 = 150.0;

    /// Ball defaults
    pub const BALL_DIAMETER: f32 = 20.0;
    pub const BALL_START_VX: f32 = 3.0;
    pub const BALL_START_VY: f32 = 3.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Distance from the bottom of the field to the paddle's top edge
    pub const PADDLE_OFFSET_FROM_BOTTOM: f32 = 280.0;

    /// Block grid defaults
    pub const BLOCK_WIDTH: f32 = 50.0;
    pub const BLOCK_HEIGHT: f32 = 20.0;
    pub const BLOCK_SPACING: f32 = 10.0;
    pub const BLOCK_ROWS: u32 = 5;
    /// Upper bound on blocks per round; larger grids are rejected at startup
    pub const MAX_BLOCKS: usize = 4096;

    /// Width of the camera frame the hand tracker reports in
    pub const CAMERA_FRAME_WIDTH: f32 = 640.0;
}

/// Keep a value only if it is a usable number
#[inline]
pub fn finite(value: f32) -> Option<f32> {
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_filters_nan_and_infinity() {
        assert_eq!(finite(12.5), Some(12.5));
        assert_eq!(finite(-3.0), Some(-3.0));
        assert_eq!(finite(f32::NAN), None);
        assert_eq!(finite(f32::INFINITY), None);
        assert_eq!(finite(f32::NEG_INFINITY), None);
    }
}
