use alloc::vec::Vec;
use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Uniform placement: draws a square at random and draws again whenever it already holds a mine.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator<R = SmallRng> {
    rng: R,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomMineGenerator<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MineGenerator for RandomMineGenerator<R> {
    fn generate(&mut self, config: GameConfig) -> MineLayout {
        let total_cells = config.total_cells();
        let (rows, cols) = config.size;

        // optimize for full boards
        if config.mines >= total_cells {
            if config.mines > total_cells {
                log::warn!(
                    "Minefield already full, generated anyway, requested {} but only fits {}",
                    config.mines,
                    total_cells
                );
            }
            return MineLayout::full(config.size);
        }

        let mut occupied: Array2<bool> = Array2::default(config.size.to_nd_index());
        let mut mines = Vec::with_capacity(config.mines.into());
        let mut collisions = 0usize;

        while mines.len() < usize::from(config.mines) {
            let coords: Coord2 = (
                self.rng.random_range(0..rows),
                self.rng.random_range(0..cols),
            );
            let cell = &mut occupied[coords.to_nd_index()];
            if *cell {
                collisions += 1;
                continue;
            }
            *cell = true;
            mines.push(coords);
        }

        log::trace!(
            "Placed {} mines on {:?} with {} collisions",
            mines.len(),
            config.size,
            collisions
        );
        MineLayout::from_distinct_coords(config.size, &mines)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn assert_counts_match_mines(layout: &MineLayout) {
        let (rows, cols) = layout.size();
        for row in 0..rows {
            for col in 0..cols {
                let coords = (row, col);
                if let GroundCell::Clear(count) = layout[coords] {
                    let expected = layout
                        .iter_neighbors(coords)
                        .filter(|&pos| layout.contains_mine(pos))
                        .count();
                    assert_eq!(usize::from(count), expected, "at {coords:?}");
                }
            }
        }
    }

    #[test]
    fn places_requested_number_of_mines() {
        for seed in 0..50 {
            let config = GameConfig::expert();
            let layout = RandomMineGenerator::new(seed).generate(config);

            assert_eq!(layout.size(), config.size);
            assert_eq!(layout.mine_count(), config.mines);
            assert_eq!(layout.mine_positions().count(), usize::from(config.mines));
            assert_counts_match_mines(&layout);
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let config = GameConfig::intermediate();

        let first = RandomMineGenerator::new(7).generate(config);
        let second = RandomMineGenerator::new(7).generate(config);

        assert_eq!(first, second);
    }

    #[test]
    fn successive_games_differ() {
        let config = GameConfig::intermediate();
        let mut generator = RandomMineGenerator::new(7);

        let first: Vec<_> = generator.generate(config).mine_positions().collect();
        let second: Vec<_> = generator.generate(config).mine_positions().collect();

        assert_ne!(first, second);
    }

    #[test]
    fn single_square_single_mine() {
        let config = GameConfig::try_new((1, 1), 1).unwrap();

        let layout = RandomMineGenerator::new(0).generate(config);

        assert_eq!(layout[(0, 0)], GroundCell::Mine);
    }

    #[test]
    fn nearly_full_board_leaves_one_safe_square() {
        let config = GameConfig::try_new((4, 4), 15).unwrap();

        let layout = RandomMineGenerator::new(3).generate(config);

        assert_eq!(layout.safe_cell_count(), 1);
        let safe: Vec<_> = layout
            .ground()
            .iter()
            .filter_map(|cell| cell.adjacent_mines())
            .collect();
        assert_eq!(safe.len(), 1);
        assert_counts_match_mines(&layout);
    }

    #[test]
    fn overfull_request_is_clamped() {
        let config = GameConfig::new_unchecked((2, 2), 10);

        let layout = RandomMineGenerator::new(0).generate(config);

        assert_eq!(layout.mine_count(), 4);
    }

    #[test]
    fn no_mines_means_all_zero() {
        let config = GameConfig::try_new((5, 5), 0).unwrap();

        let layout = RandomMineGenerator::new(0).generate(config);

        assert!(
            layout
                .ground()
                .iter()
                .all(|&cell| cell == GroundCell::Clear(0))
        );
    }
}
