use std::time::Duration;
use world_grid::{GridError, Result};

pub const DEFAULT_ROWS: u32 = 24;
pub const DEFAULT_COLS: u32 = 24;
pub const DEFAULT_STEP_INTERVAL_MS: u64 = 100;
pub const DEFAULT_SEED_DENSITY: f64 = 0.5;

/// Fixed parameters of one simulation. Every constructor validates, so a
/// value of this type is always usable.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    rows: u32,
    cols: u32,
    step_interval: Duration,
    seed_density: f64,
    rng_seed: Option<u64>,
}

impl SimulationConfig {
    pub fn new(rows: u32, cols: u32, step_interval: Duration) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidArgument(format!(
                "grid size must be positive, got {rows}x{cols}"
            )));
        }
        if step_interval.is_zero() {
            return Err(GridError::InvalidArgument(
                "step interval must be positive".to_string(),
            ));
        }
        Ok(Self {
            rows,
            cols,
            step_interval,
            seed_density: DEFAULT_SEED_DENSITY,
            rng_seed: None,
        })
    }

    pub fn with_seed_density(mut self, seed_density: f64) -> Result<Self> {
        self.seed_density = validate_density(seed_density)?;
        Ok(self)
    }

    /// Makes randomization repeatable.
    pub fn with_rng_seed(mut self, rng_seed: u64) -> Self {
        self.rng_seed = Some(rng_seed);
        self
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn step_interval(&self) -> Duration {
        self.step_interval
    }

    pub fn seed_density(&self) -> f64 {
        self.seed_density
    }

    pub fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            step_interval: Duration::from_millis(DEFAULT_STEP_INTERVAL_MS),
            seed_density: DEFAULT_SEED_DENSITY,
            rng_seed: None,
        }
    }
}

/// Accepts a probability in [0, 1]. NaN is rejected.
pub(crate) fn validate_density(density: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&density) {
        Ok(density)
    } else {
        Err(GridError::InvalidArgument(format!(
            "density must be within [0, 1], got {density}"
        )))
    }
}
