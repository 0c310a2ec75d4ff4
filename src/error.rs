//! Startup configuration errors
//!
//! The simulation itself never fails: bad input is dropped and each tick is
//! self-correcting. Everything fallible happens once, before the first tick.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a finite positive number, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },
    #[error("field width {field_width} cannot fit a {paddle_width}px paddle")]
    PaddleWiderThanField { field_width: f32, paddle_width: f32 },
    #[error("field width {field_width} cannot fit a single block column")]
    NoBlockColumns { field_width: f32 },
    #[error("field height {field_height} leaves no play area below the camera strip")]
    NoPlayArea { field_height: f32 },
    #[error("block spacing must not be negative, got {spacing}")]
    NegativeSpacing { spacing: f32 },
    #[error("{rows}x{cols} block grid is too large ({count:?} blocks, max {max})", max = crate::consts::MAX_BLOCKS)]
    TooManyBlocks {
        rows: u32,
        cols: u32,
        count: Option<usize>,
    },
    #[error("block grid needs at least one row")]
    NoBlockRows,
    #[error("tick interval must be at least 1ms")]
    ZeroTickInterval,
    #[error("invalid configuration file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("could not read configuration: {0}")]
    Io(#[from] std::io::Error),
}
