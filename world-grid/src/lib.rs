#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod error;

pub use error::{GridError, Result};

use arrayvec::ArrayVec;
use log::trace;
use rand::prelude::*;
use rand::rngs::SmallRng;
use std::fmt::Debug;
use std::mem;
use std::ops::{Index, IndexMut};

/// A cell whose next value depends only on itself and its bounded Moore neighborhood.
pub trait GridCell
where
    Self: Copy + Default,
{
    fn update(&self, neighborhood: &Neighborhood<Self>) -> Self;
}

/// Two equally sized grids: `cells` is the visible generation, `next_cells` is
/// scratch space that is all-default except while a step is being computed.
#[derive(Clone, Debug)]
pub struct WorldGrid<C>
where
    C: GridCell,
{
    cells: WorldGridCells<C>,
    next_cells: WorldGridCells<C>,
}

impl<C> WorldGrid<C>
where
    C: Debug + GridCell,
{
    pub fn new(rows: u32, cols: u32) -> Self {
        assert!(rows > 0 && cols > 0);
        Self {
            cells: WorldGridCells::new(rows, cols),
            next_cells: WorldGridCells::new(rows, cols),
        }
    }

    pub fn rows(&self) -> u32 {
        self.cells.rows()
    }

    pub fn cols(&self) -> u32 {
        self.cells.cols()
    }

    pub fn num_cells(&self) -> usize {
        self.cells.num_cells()
    }

    pub fn cells(&self) -> &WorldGridCells<C> {
        &self.cells
    }

    /// Mutable access to the visible generation. The staging grid is never exposed.
    pub fn cells_mut(&mut self) -> &mut WorldGridCells<C> {
        &mut self.cells
    }

    pub fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &C> + Clone {
        self.cells.cells_iter()
    }

    pub fn get(&self, loc: Loc) -> Result<C> {
        self.cells.get(loc)
    }

    pub fn set(&mut self, loc: Loc, cell: C) -> Result<()> {
        self.cells.set(loc, cell)
    }

    /// Borrows the visible generation for reading and the staging grid for writing.
    pub fn begin_step(&mut self) -> StepWriter<'_, C> {
        StepWriter {
            current: &self.cells,
            staging: &mut self.next_cells,
        }
    }

    /// Publishes the staging grid as the visible generation and resets staging.
    pub fn commit_step(&mut self) {
        mem::swap(&mut self.next_cells, &mut self.cells);
        self.next_cells.fill(C::default());
        trace!("committed {} staged cells", self.num_cells());
    }

    pub fn clear(&mut self) {
        self.cells.fill(C::default());
    }

    pub fn update(&mut self) {
        self.begin_step().apply_rule();
        self.commit_step();
    }

    #[cfg(test)]
    fn staging(&self) -> &WorldGridCells<C> {
        &self.next_cells
    }
}

/// Write access to the staging grid for the duration of one step.
pub struct StepWriter<'a, C>
where
    C: GridCell,
{
    current: &'a WorldGridCells<C>,
    staging: &'a mut WorldGridCells<C>,
}

impl<C> StepWriter<'_, C>
where
    C: GridCell,
{
    pub fn current(&self) -> &WorldGridCells<C> {
        self.current
    }

    pub fn write(&mut self, loc: Loc, cell: C) -> Result<()> {
        self.staging.set(loc, cell)
    }

    /// Fills every staging cell from the visible generation.
    pub fn apply<F>(&mut self, mut next_cell: F)
    where
        F: FnMut(&C, &Neighborhood<C>) -> C,
    {
        for loc in self.current.locs() {
            let neighborhood = Neighborhood::new(self.current, loc);
            self.staging[loc] = next_cell(&self.current[loc], &neighborhood);
        }
    }

    pub fn apply_rule(&mut self) {
        self.apply(|cell, neighborhood| cell.update(neighborhood));
    }
}

/// Dense row-major storage.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldGridCells<C>
where
    C: GridCell,
{
    cells: Vec<C>,
    rows: u32,
    cols: u32,
}

impl<C> WorldGridCells<C>
where
    C: GridCell,
{
    pub fn new(rows: u32, cols: u32) -> Self {
        assert!(rows != 0 && cols != 0);
        Self {
            cells: vec![C::default(); rows as usize * cols as usize],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &C> + Clone {
        self.cells.iter()
    }

    pub fn cells_iter_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut C> {
        self.cells.iter_mut()
    }

    /// Every location in row-major order.
    pub fn locs(&self) -> impl Iterator<Item = Loc> + use<C> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Loc::new(row, col)))
    }

    /// Fails with `OutOfBounds` rather than clamping.
    pub fn check(&self, loc: Loc) -> Result<usize> {
        loc.grid_index(self.rows, self.cols)
            .ok_or(GridError::OutOfBounds {
                row: loc.row,
                col: loc.col,
                rows: self.rows,
                cols: self.cols,
            })
    }

    pub fn get(&self, loc: Loc) -> Result<C> {
        let index = self.check(loc)?;
        Ok(self.cells[index])
    }

    pub fn set(&mut self, loc: Loc, cell: C) -> Result<()> {
        let index = self.check(loc)?;
        self.cells[index] = cell;
        Ok(())
    }

    fn cell(&self, loc: Loc) -> Option<&C> {
        loc.grid_index(self.rows, self.cols)
            .map(|index| &self.cells[index])
    }

    fn cell_mut(&mut self, loc: Loc) -> Option<&mut C> {
        loc.grid_index(self.rows, self.cols)
            .map(|index| &mut self.cells[index])
    }

    pub fn fill(&mut self, cell: C) {
        self.cells.fill(cell);
    }
}

impl<C> Index<Loc> for WorldGridCells<C>
where
    C: GridCell,
{
    type Output = C;

    fn index(&self, loc: Loc) -> &Self::Output {
        self.cell(loc)
            .unwrap_or_else(|| panic!("Index indices {}, {} out of bounds", loc.row, loc.col))
    }
}

impl<C> IndexMut<Loc> for WorldGridCells<C>
where
    C: GridCell,
{
    fn index_mut(&mut self, loc: Loc) -> &mut Self::Output {
        self.cell_mut(loc)
            .unwrap_or_else(|| panic!("Index_mut indices {}, {} out of bounds", loc.row, loc.col))
    }
}

/// The in-bounds Moore neighbors of one cell. Edges are not wrapped, so a
/// corner cell has three neighbors and an edge cell five.
pub struct Neighborhood<'a, C>
where
    C: GridCell,
{
    cells: &'a WorldGridCells<C>,
    neighbors: ArrayVec<Loc, 8>,
}

impl<'a, C> Neighborhood<'a, C>
where
    C: GridCell,
{
    const OFFSETS: [(i64, i64); 8] = [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];

    pub fn new(cells: &'a WorldGridCells<C>, center: Loc) -> Self {
        let neighbors = Self::OFFSETS
            .iter()
            .filter_map(|&(d_row, d_col)| center.offset(d_row, d_col, cells.rows(), cells.cols()))
            .collect();
        Self { cells, neighbors }
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    pub fn locs(&self) -> &[Loc] {
        &self.neighbors
    }

    pub fn for_neighbor_cells<F>(&self, mut f: F)
    where
        F: FnMut(&C),
    {
        for &loc in &self.neighbors {
            f(&self.cells[loc]);
        }
    }

    pub fn count_matching<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&C) -> bool,
    {
        let mut result = 0;
        self.for_neighbor_cells(|neighbor| {
            if predicate(neighbor) {
                result += 1;
            }
        });
        result
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Loc {
    pub row: u32,
    pub col: u32,
}

impl Loc {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    pub fn grid_index(&self, rows: u32, cols: u32) -> Option<usize> {
        if self.row < rows && self.col < cols {
            Some(self.row as usize * cols as usize + self.col as usize)
        } else {
            None
        }
    }

    /// The location shifted by the given deltas, or `None` if that leaves the grid.
    pub fn offset(&self, d_row: i64, d_col: i64, rows: u32, cols: u32) -> Option<Loc> {
        let row = self.row as i64 + d_row;
        let col = self.col as i64 + d_col;
        if (0..rows as i64).contains(&row) && (0..cols as i64).contains(&col) {
            Some(Loc::new(row as u32, col as u32))
        } else {
            None
        }
    }
}

#[derive(Debug)]
pub struct Random {
    rng: SmallRng,
}

impl Random {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// `p` must already be within [0, 1].
    pub fn next_bool(&mut self, p: f64) -> bool {
        self.rng.random_bool(p)
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}
