#![deny(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use conway_life::patterns::PATTERNS;
use conway_life::{
    Loc, Pattern, SimulationConfig, SimulationController, Snapshot, DEFAULT_COLS, DEFAULT_ROWS,
    DEFAULT_SEED_DENSITY, DEFAULT_STEP_INTERVAL_MS,
};
use log::info;
use std::time::Duration;
use tokio::time::{sleep_until, Instant};

/// Plays Conway's Game of Life in the terminal.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of grid rows.
    #[arg(long, default_value_t = DEFAULT_ROWS, value_parser = clap::value_parser!(u32).range(1..))]
    rows: u32,
    /// Number of grid columns.
    #[arg(long, default_value_t = DEFAULT_COLS, value_parser = clap::value_parser!(u32).range(1..))]
    cols: u32,
    /// Milliseconds between generations.
    #[arg(
        long = "interval-ms",
        value_name = "MILLISECONDS",
        default_value_t = DEFAULT_STEP_INTERVAL_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    interval_ms: u64,
    /// Probability that a cell starts alive when no pattern is given.
    #[arg(long, default_value_t = DEFAULT_SEED_DENSITY)]
    density: f64,
    /// Seed for repeatable random starts.
    #[arg(long)]
    seed: Option<u64>,
    /// Named pattern to center on an empty grid instead of random life.
    #[arg(long)]
    pattern: Option<String>,
    /// Stop after this many generations. Runs until Ctrl-C otherwise.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    generations: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = build_config(&args)?;
    info!(
        "{}x{} grid, {:?} per generation",
        config.rows(),
        config.cols(),
        config.step_interval()
    );

    let mut life = SimulationController::new(config);
    seed(&mut life, args.pattern.as_deref())?;
    print_snapshot(&life.snapshot());
    life.register_observer(print_snapshot);

    run(&mut life, args.generations).await;
    info!("stopped at generation {}", life.generation());
    Ok(())
}

fn build_config(args: &Args) -> Result<SimulationConfig> {
    let config = SimulationConfig::new(
        args.rows,
        args.cols,
        Duration::from_millis(args.interval_ms),
    )
    .context("invalid grid settings")?
    .with_seed_density(args.density)
    .context("invalid --density")?;
    Ok(match args.seed {
        Some(seed) => config.with_rng_seed(seed),
        None => config,
    })
}

fn seed(life: &mut SimulationController, pattern: Option<&str>) -> Result<()> {
    let Some(name) = pattern else {
        life.randomize_and_reset(None)?;
        return Ok(());
    };

    let pattern = Pattern::by_name(name).with_context(|| {
        let known: Vec<&str> = PATTERNS.iter().map(|pattern| pattern.name).collect();
        format!("unknown pattern {name:?}, expected one of: {}", known.join(", "))
    })?;
    let config = life.config();
    let origin = Loc::new(
        config.rows().saturating_sub(pattern.height()) / 2,
        config.cols().saturating_sub(pattern.width()) / 2,
    );
    let (rows, cols) = (config.rows(), config.cols());
    life.place_pattern(pattern, origin)
        .with_context(|| format!("{} does not fit in a {rows}x{cols} grid", pattern.name))
}

/// The host run loop: sleeps until the scheduler's deadline, then ticks.
async fn run(life: &mut SimulationController, generations: Option<u64>) {
    let done = |life: &SimulationController| {
        generations.is_some_and(|limit| life.generation() >= limit)
    };

    life.start();
    while !done(life) {
        let Some(next_update) = life.next_update() else {
            break;
        };
        tokio::select! {
            _ = sleep_until(Instant::from_std(next_update)) => {
                life.tick(std::time::Instant::now());
            }
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                break;
            }
        }
    }
    life.pause();
}

fn print_snapshot(snapshot: &Snapshot) {
    println!(
        "generation {} ({} alive)\n{snapshot}",
        snapshot.generation(),
        snapshot.live_count()
    );
}
