//! Round state and core simulation types
//!
//! Everything the tick reads or writes lives in `GameState`. The presentation
//! layer only ever sees a `RenderSnapshot` built from it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::grid::generate_blocks;
use super::rect::Aabb;
use crate::config::GameConfig;

/// Current phase of the round
///
/// `BallLost` only exists inside a tick: the tick that detects floor contact
/// also applies the `BallLost → Playing` transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Ball in flight
    Playing,
    /// Ball touched the floor, respawn pending
    BallLost,
}

/// Field edge the ball bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Left,
    Right,
    Top,
}

/// Things that happened during a tick (for sound/effects, never for physics)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce { wall: Wall },
    PaddleHit,
    BlockCleared { pos: Vec2 },
    BallLost,
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner of the ball's bounding box
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    pub diameter: f32,
}

impl Ball {
    /// Ball at the spawn point with the initial velocity
    pub fn spawn(config: &GameConfig) -> Self {
        Self {
            pos: config.ball_start(),
            vel: config.initial_velocity,
            diameter: config.ball_diameter,
        }
    }

    /// Bounding box if the ball were at `pos`
    pub fn bounds_at(&self, pos: Vec2) -> Aabb {
        Aabb::square(pos, self.diameter)
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge, always within `[0, field_width - width]`
    pub x: f32,
    /// Top edge (constant)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Paddle centered on the field
    pub fn centered(config: &GameConfig) -> Self {
        Self {
            x: config.centered_paddle_x(),
            y: config.paddle_y(),
            width: config.paddle_width,
            height: config.paddle_height,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(Vec2::new(self.x, self.y), Vec2::new(self.width, self.height))
    }

    /// Center the paddle on `center_x`, clamped to the field
    ///
    /// Non-finite input is ignored. Returns whether the paddle was updated.
    pub fn move_to(&mut self, center_x: f32, field_width: f32) -> bool {
        let Some(center_x) = crate::finite(center_x) else {
            return false;
        };
        let max_x = (field_width - self.width).max(0.0);
        self.x = (center_x - self.width / 2.0).clamp(0.0, max_x);
        true
    }
}

/// A block (identity is its position; blocks never move)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Top-left corner
    pub pos: Vec2,
}

impl Block {
    pub fn bounds(&self, config: &GameConfig) -> Aabb {
        Aabb::new(
            self.pos,
            Vec2::new(config.block_width, config.block_height),
        )
    }
}

/// Complete round state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub phase: RoundPhase,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Surviving blocks, in grid order
    pub blocks: Vec<Block>,
    /// Simulation tick counter
    pub tick_count: u64,
    /// Blocks removed since the round started
    pub blocks_cleared: u32,
    /// Times the ball reached the floor since the round started
    pub balls_lost: u32,
}

impl GameState {
    /// Start a fresh round. `config` is expected to be validated.
    pub fn new(config: GameConfig) -> Self {
        let blocks = generate_blocks(&config);
        Self {
            phase: RoundPhase::Playing,
            ball: Ball::spawn(&config),
            paddle: Paddle::centered(&config),
            blocks,
            tick_count: 0,
            blocks_cleared: 0,
            balls_lost: 0,
            config,
        }
    }

    /// Full round restart: new block grid, ball at spawn, paddle centered
    pub fn restart_round(&mut self) {
        self.blocks = generate_blocks(&self.config);
        self.ball = Ball::spawn(&self.config);
        self.paddle = Paddle::centered(&self.config);
        self.phase = RoundPhase::Playing;
        self.blocks_cleared = 0;
        self.balls_lost = 0;
        log::info!("Round restarted with {} blocks", self.blocks.len());
    }

    /// `BallLost → Playing`: ball back to spawn, blocks untouched
    pub fn respawn_ball(&mut self) {
        if self.phase != RoundPhase::BallLost {
            return;
        }
        self.ball = Ball::spawn(&self.config);
        self.phase = RoundPhase::Playing;
        log::info!(
            "Ball respawned ({} lost, {} blocks left)",
            self.balls_lost,
            self.blocks.len()
        );
    }

    /// Apply a field-space paddle target (the tracked fingertip x)
    pub fn set_paddle_target(&mut self, center_x: f32) -> bool {
        let applied = self.paddle.move_to(center_x, self.config.field_width);
        if !applied {
            log::debug!("Ignoring non-finite paddle target {center_x}");
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round() {
        let state = GameState::new(GameConfig::default());
        assert_eq!(state.phase, RoundPhase::Playing);
        assert_eq!(state.ball.pos, Vec2::new(185.0, (844.0 - 160.0) / 2.0 - 10.0));
        assert_eq!(state.ball.vel, Vec2::new(3.0, 3.0));
        assert_eq!(state.paddle.x, 145.0);
        assert_eq!(state.paddle.y, 564.0);
        assert_eq!(state.blocks.len(), 30);
    }

    #[test]
    fn test_paddle_centers_and_clamps() {
        let mut state = GameState::new(GameConfig::default());

        assert!(state.set_paddle_target(200.0));
        assert_eq!(state.paddle.x, 150.0);

        state.set_paddle_target(-500.0);
        assert_eq!(state.paddle.x, 0.0);

        state.set_paddle_target(3900.0);
        assert_eq!(state.paddle.x, 290.0);
    }

    #[test]
    fn test_paddle_ignores_nan() {
        let mut state = GameState::new(GameConfig::default());
        state.set_paddle_target(60.0);
        assert!(!state.set_paddle_target(f32::NAN));
        assert!(!state.set_paddle_target(f32::INFINITY));
        assert_eq!(state.paddle.x, 10.0);
    }

    #[test]
    fn test_respawn_only_from_ball_lost() {
        let mut state = GameState::new(GameConfig::default());
        state.ball.pos = Vec2::new(5.0, 5.0);

        state.respawn_ball();
        assert_eq!(state.ball.pos, Vec2::new(5.0, 5.0));

        state.phase = RoundPhase::BallLost;
        state.respawn_ball();
        assert_eq!(state.phase, RoundPhase::Playing);
        assert_eq!(state.ball, Ball::spawn(&state.config));
    }

    #[test]
    fn test_restart_round_regenerates_blocks() {
        let mut state = GameState::new(GameConfig::default());
        state.blocks.truncate(4);
        state.blocks_cleared = 26;
        state.paddle.x = 0.0;

        state.restart_round();
        assert_eq!(state.blocks.len(), 30);
        assert_eq!(state.blocks_cleared, 0);
        assert_eq!(state.paddle.x, 145.0);
    }
}
