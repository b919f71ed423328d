use crate::config::{validate_density, SimulationConfig};
use crate::grid_state::{CellState, GridState};
use crate::patterns::Pattern;
use crate::rules;
use crate::scheduler::{RunState, Scheduler};
use crate::snapshot::Snapshot;
use log::{debug, trace};
use std::fmt;
use std::time::Instant;
use world_grid::{Loc, Random, Result};

type Observer = Box<dyn FnMut(&Snapshot)>;

/// One independent simulation: grid, rule step, scheduler and observer.
pub struct SimulationController {
    config: SimulationConfig,
    grid: GridState,
    scheduler: Scheduler,
    rand: Random,
    generation: u64,
    observer: Option<Observer>,
}

impl SimulationController {
    pub fn new(config: SimulationConfig) -> Self {
        let rand = match config.rng_seed() {
            Some(seed) => Random::seeded(seed),
            None => Random::new(),
        };
        Self {
            grid: GridState::new(config.rows(), config.cols()),
            scheduler: Scheduler::new(config.step_interval()),
            rand,
            generation: 0,
            observer: None,
            config,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn run_state(&self) -> RunState {
        self.scheduler.run_state()
    }

    /// Advances since the last clear or randomize.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The host should call [`SimulationController::tick`] at this instant.
    pub fn next_update(&self) -> Option<Instant> {
        self.scheduler.next_update()
    }

    pub fn cell(&self, row: u32, col: u32) -> Result<CellState> {
        self.grid.get(row, col)
    }

    pub fn live_count(&self) -> usize {
        self.grid.live_count()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.grid, self.generation)
    }

    /// Replaces any previously registered observer.
    pub fn register_observer<F>(&mut self, observer: F)
    where
        F: FnMut(&Snapshot) + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    /// Returns the cell's new state.
    pub fn toggle_cell(&mut self, row: u32, col: u32) -> Result<CellState> {
        let state = self.grid.get(row, col)?.toggled();
        self.grid.set(row, col, state)?;
        self.notify();
        Ok(state)
    }

    /// Clears and reseeds the grid. Ignored while playing, in which case this
    /// returns `Ok(false)`. `None` uses the configured seed density.
    pub fn randomize_and_reset(&mut self, density: Option<f64>) -> Result<bool> {
        if self.scheduler.is_playing() {
            debug!("randomize ignored while playing");
            return Ok(false);
        }
        let density = validate_density(density.unwrap_or(self.config.seed_density()))?;
        self.grid.clear();
        self.grid.randomize(density, &mut self.rand)?;
        self.generation = 0;
        self.notify();
        Ok(true)
    }

    /// Stops playback if running and kills every cell.
    pub fn clear_all(&mut self) {
        self.scheduler.pause();
        self.grid.clear();
        self.generation = 0;
        debug!("cleared");
        self.notify();
    }

    /// Sets every cell of `pattern` alive with its top-left corner at `origin`.
    /// Nothing is written unless the whole pattern fits.
    pub fn place_pattern(&mut self, pattern: &Pattern, origin: Loc) -> Result<()> {
        for loc in pattern.locs_at(origin) {
            self.grid.cells().check(loc)?;
        }
        for loc in pattern.locs_at(origin) {
            self.grid.set(loc.row, loc.col, CellState::Alive)?;
        }
        debug!("placed {} at {}, {}", pattern.name, origin.row, origin.col);
        self.notify();
        Ok(())
    }

    pub fn start(&mut self) -> bool {
        self.start_at(Instant::now())
    }

    /// Starts playback as of `now`, advancing once immediately. Returns `false`
    /// if already playing.
    pub fn start_at(&mut self, now: Instant) -> bool {
        if !self.scheduler.start(now) {
            return false;
        }
        self.advance();
        true
    }

    /// Returns `false` if not playing.
    pub fn pause(&mut self) -> bool {
        self.scheduler.pause()
    }

    /// Advances exactly one generation regardless of run state.
    pub fn step(&mut self) {
        self.advance();
    }

    /// Runs the pending timer firing if it is due. Returns `true` if a
    /// generation advanced.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.scheduler.poll(now) {
            return false;
        }
        self.advance();
        true
    }

    fn advance(&mut self) {
        rules::compute_next_generation(&mut self.grid);
        self.grid.commit_step();
        self.generation += 1;
        trace!(
            "generation {}: {} alive",
            self.generation,
            self.grid.live_count()
        );
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            let snapshot = Snapshot::capture(&self.grid, self.generation);
            observer(&snapshot);
        }
    }
}

impl fmt::Debug for SimulationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulationController")
            .field("config", &self.config)
            .field("run_state", &self.run_state())
            .field("generation", &self.generation)
            .field("observer", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}
