#![deny(clippy::all)]
#![forbid(unsafe_code)]

//! Conway's Game of Life on a bounded, dense grid.
//!
//! [`SimulationController`] owns the grid, the rule step and the play/pause
//! scheduler for one simulation. Hosts drive it by calling mutators and, while
//! playing, [`SimulationController::tick`] whenever
//! [`SimulationController::next_update`] comes due. A registered observer
//! receives a [`Snapshot`] after every change.

mod config;
mod controller;
mod grid_state;
pub mod patterns;
pub mod rules;
mod scheduler;
mod snapshot;

pub use config::{
    SimulationConfig, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_SEED_DENSITY, DEFAULT_STEP_INTERVAL_MS,
};
pub use controller::SimulationController;
pub use grid_state::{CellState, GridState};
pub use patterns::Pattern;
pub use scheduler::{RunState, Scheduler};
pub use snapshot::Snapshot;
pub use world_grid::{GridError, Loc, Random, Result};
