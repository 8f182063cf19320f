use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Detached copy of a board's visible state, safe to keep or send around while play continues.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    pub size: Coord2,
    pub mine_count: CellCount,
    pub flagged_count: CellCount,
    pub cells: Array2<DisplayCell>,
}

impl DisplaySnapshot {
    pub fn new(
        size: Coord2,
        mine_count: CellCount,
        flagged_count: CellCount,
        cells: Array2<DisplayCell>,
    ) -> Result<Self> {
        let snapshot = Self {
            size,
            mine_count,
            flagged_count,
            cells,
        };
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn from_board<G>(board: &Board<G>) -> Self {
        Self {
            size: board.size(),
            mine_count: board.mine_count(),
            flagged_count: board.flagged_count(),
            cells: board.display().to_owned(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let expected = (self.size.0 as usize, self.size.1 as usize);
        if self.cells.dim() != expected {
            return Err(GameError::InvalidBoardShape);
        }

        if self.mine_count > mult(self.size.0, self.size.1) {
            return Err(GameError::TooManyMines);
        }

        Ok(())
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<DisplayCell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_hidden()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_board_copies_revealed_and_flagged_cells() {
        let layout = MineLayout::from_mine_coords((2, 2), &[(0, 0)]).unwrap();
        let mut board = Board::from_layout(layout);

        board.reveal_square((1, 1)).unwrap();
        board.flag_square((0, 0)).unwrap();

        let snapshot = board.snapshot();

        assert_eq!(snapshot.mine_count, 1);
        assert_eq!(snapshot.flagged_count, 1);
        assert_eq!(snapshot.cell_at((1, 1)), Some(DisplayCell::Revealed(1)));
        assert_eq!(snapshot.cell_at((0, 0)), Some(DisplayCell::Flagged));
        assert_eq!(snapshot.cell_at((2, 0)), None);
        assert_eq!(snapshot.hidden_count(), 2);
    }

    #[test]
    fn snapshot_is_detached_from_board() {
        let layout = MineLayout::from_mine_coords((2, 2), &[(0, 0)]).unwrap();
        let mut board = Board::from_layout(layout);
        let snapshot = board.snapshot();

        board.flag_square((1, 0)).unwrap();

        assert_eq!(snapshot.cell_at((1, 0)), Some(DisplayCell::Hidden));
        assert_eq!(board.cell_at((1, 0)), Ok(DisplayCell::Flagged));
    }

    #[test]
    fn validate_rejects_shape_mismatch() {
        let snapshot = DisplaySnapshot {
            size: (2, 2),
            mine_count: 1,
            flagged_count: 0,
            cells: Array2::default([1, 2]),
        };

        assert_eq!(snapshot.validate(), Err(GameError::InvalidBoardShape));
    }

    #[test]
    fn new_rejects_too_many_mines() {
        assert_eq!(
            DisplaySnapshot::new((1, 2), 3, 0, Array2::default([1, 2])).err(),
            Some(GameError::TooManyMines)
        );
    }

    #[test]
    fn serializes_to_json() {
        let layout = MineLayout::from_mine_coords((1, 2), &[(0, 1)]).unwrap();
        let mut board = Board::from_layout(layout);
        board.reveal_square((0, 0)).unwrap();

        let json = serde_json::to_string(&board.snapshot()).unwrap();
        let back: DisplaySnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(back, board.snapshot());
        assert_eq!(back.validate(), Ok(()));
    }
}
