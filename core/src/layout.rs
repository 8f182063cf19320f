use alloc::vec::Vec;
use core::ops::Index;
use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::*;

/// Hidden ground truth of a board: where the mines are and how many surround every other square.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMineLayout")]
pub struct MineLayout {
    ground: Array2<GroundCell>,
    size: Coord2,
    mine_count: CellCount,
}

/// Unchecked wire form, only accepted once it agrees with its own ground grid.
#[derive(Deserialize)]
struct RawMineLayout {
    ground: Array2<GroundCell>,
    size: Coord2,
    mine_count: CellCount,
}

impl TryFrom<RawMineLayout> for MineLayout {
    type Error = GameError;

    fn try_from(raw: RawMineLayout) -> Result<Self> {
        if raw.ground.dim() != (raw.size.0 as usize, raw.size.1 as usize) {
            return Err(GameError::InvalidBoardShape);
        }

        let mines: Vec<Coord2> = raw
            .ground
            .indexed_iter()
            .filter(|(_, cell)| cell.is_mine())
            .map(|((row, col), _)| (row as Coord, col as Coord))
            .collect();
        if mines.len() != usize::from(raw.mine_count) {
            return Err(GameError::MineCountMismatch);
        }

        // neighbour counts must match the mines as well
        let layout = Self::from_mine_coords(raw.size, &mines)?;
        if layout.ground != raw.ground {
            return Err(GameError::MineCountMismatch);
        }
        Ok(layout)
    }
}

impl MineLayout {
    /// Builds a layout from mine positions, rejecting out-of-bounds and repeated coordinates.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::EmptyBoard);
        }

        let mut seen: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            if core::mem::replace(&mut seen[coords.to_nd_index()], true) {
                return Err(GameError::DuplicateMine);
            }
        }

        Ok(Self::from_distinct_coords(size, mine_coords))
    }

    /// Every square is a mine.
    pub fn full(size: Coord2) -> Self {
        Self {
            ground: Array2::from_elem(size.to_nd_index(), GroundCell::Mine),
            size,
            mine_count: mult(size.0, size.1),
        }
    }

    /// Callers guarantee the coordinates are in bounds and distinct.
    pub(crate) fn from_distinct_coords(size: Coord2, mine_coords: &[Coord2]) -> Self {
        let mut counts: Array2<u8> = Array2::zeros(size.to_nd_index());

        // neighbour counts first, a mine never counts itself
        for &mine in mine_coords {
            for pos in NeighborIter::new(mine, size) {
                counts[pos.to_nd_index()] += 1;
            }
        }

        let mut ground = counts.mapv(GroundCell::Clear);
        for &mine in mine_coords {
            ground[mine.to_nd_index()] = GroundCell::Mine;
        }

        Self {
            ground,
            size,
            mine_count: mine_coords.len() as CellCount,
        }
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size, self.mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.size.0 && coords.1 < self.size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }

    pub fn ground(&self) -> ArrayView2<'_, GroundCell> {
        self.ground.view()
    }

    pub fn mine_positions(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.ground
            .indexed_iter()
            .filter(|(_, cell)| cell.is_mine())
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = GroundCell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.ground[coords.to_nd_index()]
    }
}

/// Replays the same layout on every new game.
impl MineGenerator for MineLayout {
    fn generate(&mut self, config: GameConfig) -> MineLayout {
        if config != self.game_config() {
            log::warn!(
                "Fixed layout {:?} does not match requested config {:?}, using layout anyway",
                self.game_config(),
                config
            );
        }
        self.clone()
    }
}
