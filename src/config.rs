//! Field geometry and tuning
//!
//! Fixed at initialization. Loaded from JSON (missing keys fall back to
//! `consts`) and validated once before the first tick.

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,
    /// Height of the camera preview strip above the play area
    pub camera_strip_height: f32,
    /// How far the play area reaches up into the camera strip
    pub camera_strip_inset: f32,

    // === Ball ===
    pub ball_diameter: f32,
    /// Velocity at round start and after every respawn (pixels/tick)
    pub initial_velocity: Vec2,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_offset_from_bottom: f32,

    // === Blocks ===
    pub block_width: f32,
    pub block_height: f32,
    pub block_spacing: f32,
    pub block_rows: u32,

    // === Timing / input ===
    pub tick_interval_ms: u64,
    /// Width of the camera frame hand-tracker coordinates are reported in
    pub camera_frame_width: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            camera_strip_height: CAMERA_STRIP_HEIGHT,
            camera_strip_inset: CAMERA_STRIP_INSET,

            ball_diameter: BALL_DIAMETER,
            initial_velocity: Vec2::new(BALL_START_VX, BALL_START_VY),

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_offset_from_bottom: PADDLE_OFFSET_FROM_BOTTOM,

            block_width: BLOCK_WIDTH,
            block_height: BLOCK_HEIGHT,
            block_spacing: BLOCK_SPACING,
            block_rows: BLOCK_ROWS,

            tick_interval_ms: TICK_INTERVAL_MS,
            camera_frame_width: CAMERA_FRAME_WIDTH,
        }
    }
}

impl GameConfig {
    /// Default tuning on a field of the given size
    pub fn with_field(field_width: f32, field_height: f32) -> Self {
        Self {
            field_width,
            field_height,
            ..Self::default()
        }
    }

    /// Top play boundary; also the y of the first block row
    #[inline]
    pub fn top_boundary(&self) -> f32 {
        self.camera_strip_height - self.camera_strip_inset
    }

    /// Paddle top edge (constant for the whole run)
    #[inline]
    pub fn paddle_y(&self) -> f32 {
        self.field_height - self.paddle_offset_from_bottom
    }

    /// Largest legal paddle x
    #[inline]
    pub fn max_paddle_x(&self) -> f32 {
        self.field_width - self.paddle_width
    }

    /// Paddle x when centered on the field
    #[inline]
    pub fn centered_paddle_x(&self) -> f32 {
        self.field_width / 2.0 - self.paddle_width / 2.0
    }

    /// Ball spawn point: horizontally centered, halfway down below the camera strip
    pub fn ball_start(&self) -> Vec2 {
        Vec2::new(
            self.field_width / 2.0 - self.ball_diameter / 2.0,
            (self.field_height - self.camera_strip_height) / 2.0 - self.ball_diameter / 2.0,
        )
    }

    /// Largest ball x/y before the right wall / floor checks fire
    pub fn ball_max(&self) -> Vec2 {
        Vec2::new(
            self.field_width - self.ball_diameter,
            self.field_height - self.ball_diameter,
        )
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Tick interval for JS timers, saturating at `u32::MAX`
    pub fn tick_interval_ms_u32(&self) -> u32 {
        u32::try_from(self.tick_interval_ms).unwrap_or(u32::MAX)
    }

    /// Reject geometry the simulation cannot run on
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("ball_diameter", self.ball_diameter),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("block_width", self.block_width),
            ("block_height", self.block_height),
            ("camera_frame_width", self.camera_frame_width),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        for (name, value) in [
            ("camera_strip_height", self.camera_strip_height),
            ("camera_strip_inset", self.camera_strip_inset),
            ("paddle_offset_from_bottom", self.paddle_offset_from_bottom),
            ("block_spacing", self.block_spacing),
            ("initial_velocity.x", self.initial_velocity.x),
            ("initial_velocity.y", self.initial_velocity.y),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }

        if self.paddle_width > self.field_width {
            return Err(ConfigError::PaddleWiderThanField {
                field_width: self.field_width,
                paddle_width: self.paddle_width,
            });
        }
        if self.field_height <= self.camera_strip_height + self.ball_diameter {
            return Err(ConfigError::NoPlayArea {
                field_height: self.field_height,
            });
        }
        if self.block_rows == 0 {
            return Err(ConfigError::NoBlockRows);
        }
        if self.block_spacing < 0.0 {
            return Err(ConfigError::NegativeSpacing {
                spacing: self.block_spacing,
            });
        }
        let layout = crate::sim::grid_layout(self);
        if layout.cols == 0 {
            return Err(ConfigError::NoBlockColumns {
                field_width: self.field_width,
            });
        }
        match layout.block_count() {
            Some(count) if count <= MAX_BLOCKS => {}
            count => {
                return Err(ConfigError::TooManyBlocks {
                    rows: layout.rows,
                    cols: layout.cols,
                    count,
                });
            }
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        Ok(())
    }

    /// Parse and validate a JSON config (missing keys take defaults)
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
