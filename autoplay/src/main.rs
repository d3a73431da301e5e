mod ai;

use anyhow::{ensure, Result};
use clap::Parser;
use pong_core::{Config, InputIntents, Params, ServePolicy, Simulation};
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "autoplay")]
#[command(about = "Headless bot-vs-bot Pong runner for soak and determinism checks")]
struct Cli {
    /// RNG seed; the same seed and tick rate replay identically
    #[arg(long, default_value_t = 12345)]
    seed: u64,
    /// Ticks to run (stops early once the match has a winner)
    #[arg(long, default_value_t = 36_000)]
    ticks: u32,
    /// Simulation tick rate in Hz
    #[arg(long, default_value_t = 60.0)]
    tick_rate: f32,
    /// Field width in pixels
    #[arg(long, default_value_t = 800.0)]
    width: f32,
    /// Field height in pixels
    #[arg(long, default_value_t = 600.0)]
    height: f32,
    /// Points needed to win; 0 plays forever
    #[arg(long, default_value_t = 5)]
    win_score: u8,
    /// Re-serve from center after each goal instead of keeping the ball in
    /// flight
    #[arg(long)]
    respawn: bool,
    /// Seconds between a goal and the re-serve (with --respawn)
    #[arg(long, default_value_t = Params::SERVE_DELAY)]
    serve_delay: f32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();
    ensure!(cli.tick_rate > 0.0, "tick rate must be positive");
    ensure!(
        cli.width > 0.0 && cli.height > 0.0,
        "field dimensions must be positive"
    );

    let mut config = Config::new();
    config.win_score = cli.win_score;
    if cli.respawn {
        ensure!(cli.serve_delay >= 0.0, "serve delay must be non-negative");
        config.serve_policy = ServePolicy::Respawn {
            delay: cli.serve_delay,
        };
    }

    let mut sim = Simulation::new(config, cli.seed);
    let dt = 1.0 / cli.tick_rate;

    info!(
        seed = cli.seed,
        ticks = cli.ticks,
        width = cli.width,
        height = cli.height,
        win_score = cli.win_score,
        "starting match"
    );

    let mut intents = InputIntents::new();
    let mut played = 0u32;
    for tick in 0..cli.ticks {
        sim.step(dt, cli.width, cli.height, &intents);
        played = tick + 1;

        let events = *sim.events();
        if events.ball_hit_wall {
            debug!(tick, "wall bounce");
        }
        if events.paddle_hit_left {
            debug!(tick, "left paddle hit");
        }
        if events.paddle_hit_right {
            debug!(tick, "right paddle hit");
        }
        if events.scored_left || events.scored_right {
            let score = sim.score();
            info!(tick, left = score.left, right = score.right, "goal");
        }

        if let Some(winner) = sim.winner() {
            info!(tick, ?winner, "match over");
            break;
        }

        intents = ai::plan(&sim.snapshot(), sim.field(), sim.config());
    }

    let snapshot = sim.snapshot();
    info!(
        ticks = played,
        seconds = played as f32 * dt,
        left = snapshot.score_left,
        right = snapshot.score_right,
        "finished"
    );
    Ok(())
}
