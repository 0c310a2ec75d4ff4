//! Physics/collision engine
//!
//! Owns the round state and the reader half of the paddle slot. Each `step`
//! samples the slot, runs one tick, and leaves a fresh snapshot to read.

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::input::{PaddleInput, PaddleTarget};
use crate::sim::{GameEvent, GameState, TickInput, tick};
use crate::snapshot::RenderSnapshot;

/// Physics engine: round state plus the paddle slot it samples each tick
pub struct Engine {
    state: GameState,
    input: PaddleInput,
    target: PaddleTarget,
}

impl Engine {
    /// Validate `config` and start the first round
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let (input, target) = PaddleInput::new(&config);
        let state = GameState::new(config);
        log::info!(
            "Engine ready: field {}x{}, {} blocks, tick {}ms",
            state.config.field_width,
            state.config.field_height,
            state.blocks.len(),
            state.config.tick_interval_ms
        );
        Ok(Self {
            state,
            input,
            target,
        })
    }

    /// Writer for the Input Adapter
    pub fn input(&self) -> PaddleInput {
        self.input.clone()
    }

    /// Advance one tick using the latest paddle target
    pub fn step(&mut self) -> Vec<GameEvent> {
        let input = TickInput {
            paddle_target: self.target.latest(),
        };
        tick(&mut self.state, &input)
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::from(&self.state)
    }

    pub fn restart_round(&mut self) {
        self.state.restart_round();
    }

    pub fn config(&self) -> &GameConfig {
        &self.state.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}
