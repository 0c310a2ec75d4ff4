//! Fixed-interval ticker
//!
//! Runs the engine on a tokio interval. Ticks never overlap: each one runs to
//! completion inside the task before the interval is polled again. Snapshots
//! go out on a `watch` channel (presentation reads the latest one), events on
//! a `broadcast` channel. `stop` unregisters the interval and hands back run
//! stats; dropping the handle aborts the task.

use std::sync::Arc;

use tokio::sync::{Notify, broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::engine::Engine;
use crate::input::PaddleInput;
use crate::sim::GameEvent;
use crate::snapshot::RenderSnapshot;

const COMMAND_CHANNEL_CAPACITY: usize = 16;
const EVENT_BROADCAST_CAPACITY: usize = 128;

/// Requests handled between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    RestartRound,
}

/// Totals reported when the ticker stops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub ticks: u64,
    pub blocks_cleared: u32,
    pub blocks_left: usize,
    pub balls_lost: u32,
}

/// Handle to a running ticker; stop it or drop it to release the interval
pub struct RunnerHandle {
    input: PaddleInput,
    snapshots: watch::Receiver<RenderSnapshot>,
    events: broadcast::Sender<GameEvent>,
    commands: mpsc::Sender<Command>,
    shutdown: Arc<Notify>,
    task: Option<JoinHandle<RunStats>>,
}

/// Start ticking `engine`. Must be called from inside a tokio runtime.
pub fn spawn(engine: Engine) -> RunnerHandle {
    let input = engine.input();
    let (snapshot_tx, snapshot_rx) = watch::channel(engine.snapshot());
    let (event_tx, _) = broadcast::channel(EVENT_BROADCAST_CAPACITY);
    let (command_tx, command_rx) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);
    let shutdown = Arc::new(Notify::new());

    let task = tokio::spawn(tick_task(
        engine,
        snapshot_tx,
        event_tx.clone(),
        command_rx,
        shutdown.clone(),
    ));

    RunnerHandle {
        input,
        snapshots: snapshot_rx,
        events: event_tx,
        commands: command_tx,
        shutdown,
        task: Some(task),
    }
}

async fn tick_task(
    mut engine: Engine,
    snapshot_tx: watch::Sender<RenderSnapshot>,
    event_tx: broadcast::Sender<GameEvent>,
    mut command_rx: mpsc::Receiver<Command>,
    shutdown: Arc<Notify>,
) -> RunStats {
    let mut interval = tokio::time::interval(engine.config().tick_interval());
    // A late tick is dropped, not replayed in a burst
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    log::info!("Ticker started ({}ms)", engine.config().tick_interval_ms);

    loop {
        tokio::select! {
            biased;
            _ = shutdown.notified() => break,
            _ = interval.tick() => {}
        }

        while let Ok(command) = command_rx.try_recv() {
            match command {
                Command::RestartRound => engine.restart_round(),
            }
        }

        for event in engine.step() {
            // No subscribers is fine
            let _ = event_tx.send(event);
        }
        snapshot_tx.send_replace(engine.snapshot());
    }

    let state = engine.state();
    let stats = RunStats {
        ticks: state.tick_count,
        blocks_cleared: state.blocks_cleared,
        blocks_left: state.blocks.len(),
        balls_lost: state.balls_lost,
    };
    log::info!("Ticker stopped after {} ticks", stats.ticks);
    stats
}

impl RunnerHandle {
    /// Writer for the Input Adapter
    pub fn input(&self) -> PaddleInput {
        self.input.clone()
    }

    /// Latest-snapshot feed for the presentation layer
    pub fn snapshots(&self) -> watch::Receiver<RenderSnapshot> {
        self.snapshots.clone()
    }

    /// Per-tick events (bounces, cleared blocks, lost balls)
    pub fn events(&self) -> broadcast::Receiver<GameEvent> {
        self.events.subscribe()
    }

    /// Regenerate blocks and respawn the ball before the next tick
    pub async fn restart_round(&self) {
        if self.commands.send(Command::RestartRound).await.is_err() {
            log::warn!("Restart requested after ticker stopped");
        }
    }

    /// Stop ticking and wait for the task to finish
    ///
    /// Returns `None` if the task had already died.
    pub async fn stop(mut self) -> Option<RunStats> {
        self.shutdown.notify_one();
        let task = self.task.take()?;
        match task.await {
            Ok(stats) => Some(stats),
            Err(e) => {
                log::error!("Ticker task failed: {e}");
                None
            }
        }
    }
}

impl Drop for RunnerHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            log::debug!("Runner handle dropped, aborting ticker");
            task.abort();
        }
    }
}
