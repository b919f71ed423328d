use crate::grid_state::GridState;
use std::fmt;

/// An immutable copy of the visible generation, handed to observers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    rows: u32,
    cols: u32,
    generation: u64,
    cells: Vec<bool>,
}

impl Snapshot {
    pub(crate) fn capture(state: &GridState, generation: u64) -> Self {
        Self {
            rows: state.rows(),
            cols: state.cols(),
            generation,
            cells: state.cells().cells_iter().map(|cell| cell.is_alive()).collect(),
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// `None` outside the grid.
    pub fn is_alive(&self, row: u32, col: u32) -> Option<bool> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row as usize * self.cols as usize + col as usize])
        } else {
            None
        }
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|alive| **alive).count()
    }

    pub fn rows_iter(&self) -> impl DoubleEndedIterator<Item = &[bool]> + Clone {
        self.cells.chunks_exact(self.cols as usize)
    }

    /// Coordinates of every live cell in row-major order.
    pub fn live_cells(&self) -> Vec<(u32, u32)> {
        let cols = self.cols as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(index, _)| ((index / cols) as u32, (index % cols) as u32))
            .collect()
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows_iter() {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid_state::CellState;

    #[test]
    fn captures_current_generation() {
        let mut state = GridState::new(2, 3);
        state.set(0, 1, CellState::Alive).unwrap();
        state.set(1, 2, CellState::Alive).unwrap();
        let snapshot = Snapshot::capture(&state, 7);

        assert_eq!((snapshot.rows(), snapshot.cols()), (2, 3));
        assert_eq!(snapshot.generation(), 7);
        assert_eq!(snapshot.is_alive(0, 1), Some(true));
        assert_eq!(snapshot.is_alive(0, 0), Some(false));
        assert_eq!(snapshot.is_alive(2, 0), None);
        assert_eq!(snapshot.live_count(), 2);
        assert_eq!(snapshot.live_cells(), vec![(0, 1), (1, 2)]);
        assert_eq!(snapshot.to_string(), ".#.\n..#\n");
    }

    #[test]
    fn is_detached_from_later_changes() {
        let mut state = GridState::new(2, 2);
        let snapshot = Snapshot::capture(&state, 0);
        state.set(0, 0, CellState::Alive).unwrap();
        assert_eq!(snapshot.live_count(), 0);
    }
}
