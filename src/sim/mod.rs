//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No randomness, no clocks
//! - Stable block order (grid order)
//! - No rendering, input, or platform dependencies

pub mod collision;
pub mod grid;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{
    WallContact, ball_block_collision, ball_paddle_collision, ball_reached_floor, wall_contact,
};
pub use grid::{GridLayout, generate_blocks, grid_layout};
pub use rect::Aabb;
pub use state::{Ball, Block, GameEvent, GameState, Paddle, RoundPhase, Wall};
pub use tick::{TickInput, tick};
