//! Demo board backing the viewer.
//!
//! The demo board is not a game: it has no mines and no rules. Tapping a cell
//! cycles it through covered, revealed and flagged, and a revealed cell shows
//! how many of its neighbours are flagged. That is enough to exercise the
//! viewport's targeted refresh, since one tap can change several cells.

use serde::{Deserialize, Serialize};
use sweepview::{CellContent, CellCoord, CellDataSource};

/// Standard board sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BoardPreset {
    #[default]
    Beginner,
    Intermediate,
    Expert,
}

impl BoardPreset {
    pub const ALL: [BoardPreset; 3] = [Self::Beginner, Self::Intermediate, Self::Expert];

    pub fn rows(self) -> usize {
        match self {
            Self::Beginner => 9,
            Self::Intermediate => 16,
            Self::Expert => 16,
        }
    }

    pub fn columns(self) -> usize {
        match self {
            Self::Beginner => 9,
            Self::Intermediate => 16,
            Self::Expert => 30,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Expert => "Expert",
        }
    }

    /// Parses a preset name as given on the command line (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.label().eq_ignore_ascii_case(name.trim()))
    }
}

/// Row-major grid of cell presentation states.
#[derive(Debug, Clone)]
pub struct DemoBoard {
    rows: usize,
    columns: usize,
    cells: Vec<CellContent>,
}

impl DemoBoard {
    /// Creates a fully covered board.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![CellContent::Covered; rows * columns],
        }
    }

    pub fn for_preset(preset: BoardPreset) -> Self {
        Self::new(preset.rows(), preset.columns())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, coord: CellCoord) -> Option<CellContent> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Advances a cell to its next state and returns every cell whose content changed.
    ///
    /// Flagging or unflagging a cell also changes the count shown by its
    /// revealed neighbours.
    pub fn cycle(&mut self, coord: CellCoord) -> Vec<CellCoord> {
        let Some(index) = self.index(coord) else {
            return Vec::new();
        };

        let next = match self.cells[index] {
            CellContent::Covered => CellContent::Revealed {
                adjacent: self.flagged_neighbours(coord),
            },
            CellContent::Revealed { .. } => CellContent::Flagged,
            CellContent::Flagged | CellContent::Mine | CellContent::Exploded => CellContent::Covered,
        };
        let flag_changed = matches!(next, CellContent::Flagged)
            || matches!(self.cells[index], CellContent::Flagged);
        self.cells[index] = next;

        let mut changed = vec![coord];
        if flag_changed {
            let neighbours: Vec<CellCoord> = self.neighbours(coord).collect();
            for neighbour in neighbours {
                let adjacent = self.flagged_neighbours(neighbour);
                let i = neighbour.row * self.columns + neighbour.column;
                if let CellContent::Revealed { adjacent: shown } = &mut self.cells[i] {
                    if *shown != adjacent {
                        *shown = adjacent;
                        changed.push(neighbour);
                    }
                }
            }
        }
        changed
    }

    /// Covers every cell again and returns the cells that were not covered.
    pub fn reset(&mut self) -> Vec<CellCoord> {
        let columns = self.columns;
        let mut changed = Vec::new();
        for (i, cell) in self.cells.iter_mut().enumerate() {
            if *cell != CellContent::Covered {
                *cell = CellContent::Covered;
                changed.push(CellCoord::new(i / columns, i % columns));
            }
        }
        changed
    }

    fn index(&self, coord: CellCoord) -> Option<usize> {
        (coord.row < self.rows && coord.column < self.columns)
            .then(|| coord.row * self.columns + coord.column)
    }

    fn neighbours(&self, coord: CellCoord) -> impl Iterator<Item = CellCoord> + '_ {
        let rows = coord.row.saturating_sub(1)..=(coord.row + 1).min(self.rows.saturating_sub(1));
        rows.flat_map(move |row| {
            let columns =
                coord.column.saturating_sub(1)..=(coord.column + 1).min(self.columns.saturating_sub(1));
            columns.map(move |column| CellCoord::new(row, column))
        })
        .filter(move |&c| c != coord)
    }

    fn flagged_neighbours(&self, coord: CellCoord) -> u8 {
        self.neighbours(coord)
            .filter(|&c| self.get(c) == Some(CellContent::Flagged))
            .count() as u8
    }
}

impl CellDataSource for DemoBoard {
    fn cell(&self, coord: CellCoord) -> CellContent {
        self.get(coord).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!((BoardPreset::Expert.rows(), BoardPreset::Expert.columns()), (16, 30));
        assert_eq!(BoardPreset::from_name(" expert "), Some(BoardPreset::Expert));
        assert_eq!(BoardPreset::from_name("huge"), None);
    }

    #[test]
    fn test_cycle_order() {
        let mut board = DemoBoard::new(3, 3);
        let c = CellCoord::new(1, 1);

        assert_eq!(board.cycle(c), vec![c]);
        assert_eq!(board.get(c), Some(CellContent::Revealed { adjacent: 0 }));
        board.cycle(c);
        assert_eq!(board.get(c), Some(CellContent::Flagged));
        board.cycle(c);
        assert_eq!(board.get(c), Some(CellContent::Covered));
    }

    #[test]
    fn test_flag_updates_revealed_neighbours() {
        let mut board = DemoBoard::new(3, 3);
        let corner = CellCoord::new(0, 0);
        let center = CellCoord::new(1, 1);
        let far = CellCoord::new(2, 2);

        board.cycle(corner);
        board.cycle(far);

        // reveal then flag the center: both revealed corners now count one flag
        board.cycle(center);
        let changed = board.cycle(center);
        assert_eq!(changed, vec![center, corner, far]);
        assert_eq!(board.get(corner), Some(CellContent::Revealed { adjacent: 1 }));
    }

    #[test]
    fn test_reset_reports_uncovered_cells() {
        let mut board = DemoBoard::new(2, 2);
        board.cycle(CellCoord::new(0, 1));
        board.cycle(CellCoord::new(1, 0));

        assert_eq!(board.reset(), vec![CellCoord::new(0, 1), CellCoord::new(1, 0)]);
        assert!(board.reset().is_empty());
    }

    #[test]
    fn test_out_of_range_cycle_is_ignored() {
        let mut board = DemoBoard::new(2, 2);
        assert!(board.cycle(CellCoord::new(5, 5)).is_empty());
        assert_eq!(board.cell(CellCoord::new(5, 5)), CellContent::Covered);
    }
}
