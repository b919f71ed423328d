//! The B3/S23 transition rule.

use crate::grid_state::{CellState, GridState};
use world_grid::{GridCell, Neighborhood};

/// Fills the staging grid of `state` with the next generation. Only the
/// visible generation is read, so the result does not depend on visiting order.
/// The caller publishes it with [`GridState::commit_step`].
pub fn compute_next_generation(state: &mut GridState) {
    state.begin_step().apply_rule();
}

pub fn next_state(cell: CellState, live_neighbors: usize) -> CellState {
    match (cell, live_neighbors) {
        (CellState::Alive, 2) | (CellState::Alive, 3) => CellState::Alive, // survival
        (CellState::Dead, 3) => CellState::Alive,                         // birth
        _ => CellState::Dead,
    }
}

pub fn num_live_neighbors(neighborhood: &Neighborhood<CellState>) -> usize {
    neighborhood.count_matching(|neighbor| neighbor.is_alive())
}

impl GridCell for CellState {
    fn update(&self, neighborhood: &Neighborhood<CellState>) -> CellState {
        next_state(*self, num_live_neighbors(neighborhood))
    }
}
