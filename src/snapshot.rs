//! Render-ready view of the round
//!
//! The presentation layer draws fixed-size shapes at these coordinates. It
//! never holds a reference into `GameState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::GameState;

/// Read-only snapshot emitted once per tick
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderSnapshot {
    /// Tick this snapshot was taken after
    pub tick: u64,
    /// Ball top-left corner
    pub ball: Vec2,
    /// Paddle left edge
    pub paddle_x: f32,
    /// Surviving blocks (top-left corners)
    pub blocks: Vec<Vec2>,
}

impl From<&GameState> for RenderSnapshot {
    fn from(state: &GameState) -> Self {
        Self {
            tick: state.tick_count,
            ball: state.ball.pos,
            paddle_x: state.paddle.x,
            blocks: state.blocks.iter().map(|b| b.pos).collect(),
        }
    }
}

impl RenderSnapshot {
    /// JSON for a JS front end
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
