//! Well-known seed patterns, stored as live-cell offsets from their top-left corner.

use world_grid::Loc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(u32, u32)],
}

impl Pattern {
    pub const GLIDER: Pattern = Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    };

    pub const BLINKER: Pattern = Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    };

    pub const TOAD: Pattern = Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    };

    pub const BEACON: Pattern = Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    };

    pub const BLOCK: Pattern = Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    };

    pub const R_PENTOMINO: Pattern = Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    };

    pub const PULSAR: Pattern = Pattern {
        name: "Pulsar",
        cells: &[
            // horizontal bars
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
            // vertical bars
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    };

    /// Case-insensitive lookup in [`PATTERNS`].
    pub fn by_name(name: &str) -> Option<&'static Pattern> {
        PATTERNS
            .iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
    }

    pub fn height(&self) -> u32 {
        self.cells.iter().map(|&(row, _)| row + 1).max().unwrap_or(0)
    }

    pub fn width(&self) -> u32 {
        self.cells.iter().map(|&(_, col)| col + 1).max().unwrap_or(0)
    }

    /// Live cells translated to `origin`. Locations past `u32::MAX` saturate,
    /// which is outside any grid.
    pub fn locs_at(&self, origin: Loc) -> impl Iterator<Item = Loc> + use<> {
        let cells = self.cells;
        cells.iter().map(move |&(row, col)| {
            Loc::new(origin.row.saturating_add(row), origin.col.saturating_add(col))
        })
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern::GLIDER,
    Pattern::BLINKER,
    Pattern::TOAD,
    Pattern::BEACON,
    Pattern::BLOCK,
    Pattern::R_PENTOMINO,
    Pattern::PULSAR,
];
