//! Hand Breaker entry point
//!
//! Native builds run a headless session: the engine ticks on its interval
//! while a simulated hand tracker chases the ball from its own jittery loop.
//! Browser builds are driven from JS through `platform::WebGame`.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::time::Duration;

    use anyhow::Context;
    use clap::Parser;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;
    use tokio::sync::broadcast::error::RecvError;

    use hand_breaker::runner;
    use hand_breaker::sim::GameEvent;
    use hand_breaker::{Engine, GameConfig, PaddleInput, RenderSnapshot};

    #[derive(Parser, Debug)]
    #[command(version, about = "Headless Brick Breaker session with a simulated hand tracker")]
    struct Args {
        /// JSON config file (missing keys take defaults)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Override field width
        #[arg(long)]
        width: Option<f32>,
        /// Override field height
        #[arg(long)]
        height: Option<f32>,
        /// How long to run
        #[arg(long, default_value_t = 10.0)]
        seconds: f64,
        /// Tracker RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Fraction of tracker frames that find no hand
        #[arg(long, default_value_t = 0.1)]
        miss_rate: f64,
    }

    /// Event tallies seen by the presentation side
    #[derive(Debug, Default)]
    struct Tally {
        wall_bounces: u32,
        paddle_hits: u32,
        blocks_cleared: u32,
        balls_lost: u32,
    }

    pub async fn run() -> anyhow::Result<()> {
        let args = Args::parse();

        let mut config = match &args.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => GameConfig::default(),
        };
        if let Some(width) = args.width {
            config.field_width = width;
        }
        if let Some(height) = args.height {
            config.field_height = height;
        }

        let engine = Engine::new(config.clone()).context("invalid configuration")?;
        let handle = runner::spawn(engine);

        let tracker = tokio::spawn(simulated_tracker(
            handle.input(),
            handle.snapshots(),
            config,
            args.seed,
            args.miss_rate.clamp(0.0, 1.0),
        ));
        let presenter = tokio::spawn(count_events(handle.events()));

        tokio::select! {
            _ = tokio::time::sleep(Duration::from_secs_f64(args.seconds.max(0.0))) => {}
            _ = tokio::signal::ctrl_c() => log::info!("Interrupted"),
        }

        tracker.abort();
        let last = handle.snapshots().borrow().clone();
        let stats = handle.stop().await.context("ticker task failed")?;
        let tally = presenter.await.context("event counter failed")?;

        log::info!("Final snapshot: {}", last.to_json());
        println!(
            "ticks={} blocks_cleared={} blocks_left={} balls_lost={}",
            stats.ticks, stats.blocks_cleared, stats.blocks_left, stats.balls_lost
        );
        println!(
            "events: wall={} paddle={} blocks={} lost={}",
            tally.wall_bounces, tally.paddle_hits, tally.blocks_cleared, tally.balls_lost
        );
        Ok(())
    }

    /// Stand-in for camera + hand-pose model: noisy fingertip that follows the
    /// ball, on an irregular cadence, sometimes losing the hand entirely
    async fn simulated_tracker(
        input: PaddleInput,
        snapshots: tokio::sync::watch::Receiver<RenderSnapshot>,
        config: GameConfig,
        seed: u64,
        miss_rate: f64,
    ) {
        let mut rng = Pcg32::seed_from_u64(seed);
        loop {
            let frame_ms = rng.random_range(25..70);
            tokio::time::sleep(Duration::from_millis(frame_ms)).await;

            if rng.random_bool(miss_rate) {
                log::trace!("Tracker: no hand");
                continue;
            }

            let ball_center = snapshots.borrow().ball.x + config.ball_diameter / 2.0;
            let noise = rng.random_range(-20.0..20.0);
            let raw_x =
                ball_center / config.field_width * config.camera_frame_width + noise;
            input.submit_camera_sample(raw_x);
        }
    }

    async fn count_events(mut events: tokio::sync::broadcast::Receiver<GameEvent>) -> Tally {
        let mut tally = Tally::default();
        loop {
            match events.recv().await {
                Ok(GameEvent::WallBounce { .. }) => tally.wall_bounces += 1,
                Ok(GameEvent::PaddleHit) => tally.paddle_hits += 1,
                Ok(GameEvent::BlockCleared { .. }) => tally.blocks_cleared += 1,
                Ok(GameEvent::BallLost) => tally.balls_lost += 1,
                Err(RecvError::Lagged(n)) => log::warn!("Event counter lagged by {n}"),
                Err(RecvError::Closed) => break,
            }
        }
        tally
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Hand Breaker (native) starting...");
    native::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::WebGame, this is just to satisfy the compiler
}
