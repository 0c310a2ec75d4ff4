//! Fixed timestep simulation tick
//!
//! One call advances the round by exactly one step. Velocity changes made
//! during a tick take effect on the next one.

use super::collision::{
    ball_block_collision, ball_paddle_collision, ball_reached_floor, wall_contact,
};
use super::state::{GameEvent, GameState, RoundPhase, Wall};

/// Input sampled at the start of a tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Latest field-space fingertip x, if the tracker has produced one
    pub paddle_target: Option<f32>,
}

impl TickInput {
    pub fn target(x: f32) -> Self {
        Self {
            paddle_target: Some(x),
        }
    }
}

/// Advance the round by one fixed step
///
/// Order: paddle target, Euler step, walls, paddle, blocks, floor. Every
/// condition toggles its own axis independently, so e.g. two blocks hit in
/// the same tick cancel each other's flip.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.tick_count += 1;

    if let Some(target) = input.paddle_target {
        state.set_paddle_target(target);
    }

    let config = &state.config;
    let vel = state.ball.vel;

    // Integrate (no sub-stepping)
    let new_pos = state.ball.pos + vel;
    let ball_box = state.ball.bounds_at(new_pos);

    // Walls
    let walls = wall_contact(new_pos, config);
    let mut next_vel = walls.reflect(vel);
    if next_vel.x != vel.x {
        let wall = if walls.left { Wall::Left } else { Wall::Right };
        events.push(GameEvent::WallBounce { wall });
    }
    if walls.top && vel.y < 0.0 {
        events.push(GameEvent::WallBounce { wall: Wall::Top });
    }

    // Paddle
    if ball_paddle_collision(&ball_box, &state.paddle.bounds()) {
        next_vel.y = -next_vel.y;
        events.push(GameEvent::PaddleHit);
    }

    // Blocks
    let before = state.blocks.len();
    state.blocks.retain(|block| {
        let hit = ball_block_collision(&ball_box, &block.bounds(config));
        if hit {
            next_vel.y = -next_vel.y;
            events.push(GameEvent::BlockCleared { pos: block.pos });
        }
        !hit
    });
    let cleared = (before - state.blocks.len()) as u32;
    state.blocks_cleared += cleared;

    let floor = ball_reached_floor(new_pos, config);

    state.ball.pos = new_pos;
    state.ball.vel = next_vel;

    // Floor: life lost, ball respawns, blocks stay as they are
    if floor {
        state.phase = RoundPhase::BallLost;
        state.balls_lost += 1;
        events.push(GameEvent::BallLost);
        state.respawn_ball();
    }

    log::trace!(
        "tick {}: pos={:?} vel={:?} blocks={} events={}",
        state.tick_count,
        state.ball.pos,
        state.ball.vel,
        state.blocks.len(),
        events.len()
    );

    events
}
