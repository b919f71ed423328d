use crate::config::validate_density;
use log::debug;
use world_grid::{Loc, Random, Result, StepWriter, WorldGrid, WorldGridCells};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    pub fn toggled(self) -> Self {
        match self {
            CellState::Alive => CellState::Dead,
            CellState::Dead => CellState::Alive,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

/// The visible generation plus the staging grid the next generation is built in.
#[derive(Clone, Debug)]
pub struct GridState {
    grid: WorldGrid<CellState>,
}

impl GridState {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            grid: WorldGrid::new(rows, cols),
        }
    }

    pub fn rows(&self) -> u32 {
        self.grid.rows()
    }

    pub fn cols(&self) -> u32 {
        self.grid.cols()
    }

    pub fn cells(&self) -> &WorldGridCells<CellState> {
        self.grid.cells()
    }

    pub fn get(&self, row: u32, col: u32) -> Result<CellState> {
        self.grid.get(Loc::new(row, col))
    }

    pub fn set(&mut self, row: u32, col: u32, state: CellState) -> Result<()> {
        self.grid.set(Loc::new(row, col), state)
    }

    pub fn begin_step(&mut self) -> StepWriter<'_, CellState> {
        self.grid.begin_step()
    }

    pub fn commit_step(&mut self) {
        self.grid.commit_step();
    }

    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Each cell independently becomes alive with probability `density`.
    pub fn randomize(&mut self, density: f64, rand: &mut Random) -> Result<()> {
        let density = validate_density(density)?;
        for cell in self.grid.cells_mut().cells_iter_mut() {
            *cell = CellState::from(rand.next_bool(density));
        }
        debug!(
            "randomized {}x{} grid at density {density}: {} alive",
            self.rows(),
            self.cols(),
            self.live_count()
        );
        Ok(())
    }

    pub fn live_count(&self) -> usize {
        self.grid.cells_iter().filter(|cell| cell.is_alive()).count()
    }
}
