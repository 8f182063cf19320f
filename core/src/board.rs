use alloc::collections::VecDeque;
use ndarray::{Array2, ArrayView2, Zip};

use crate::*;

/// A minesweeper board: hidden mine layout, what the player sees, and the generator used for new games.
///
/// Cells only move `Hidden <-> Flagged` through [`Board::flag_square`] and `Hidden -> Revealed` through
/// [`Board::reveal_square`]. A revealed cell never changes again until the next [`Board::new_game`].
/// Revealing a mine is reported as [`RevealOutcome::HitMine`] and leaves the display untouched.
#[derive(Clone, Debug)]
pub struct Board<G = RandomMineGenerator> {
    config: GameConfig,
    generator: G,
    layout: MineLayout,
    display: Array2<DisplayCell>,
    flagged_count: CellCount,
}

impl Board {
    /// Board with uniformly random mines drawn from `seed`, already set up for play.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, RandomMineGenerator::new(seed))
    }
}

impl Board<MineLayout> {
    /// Board whose mines are always exactly `layout`, including after [`Board::new_game`].
    pub fn from_layout(layout: MineLayout) -> Self {
        let config = layout.game_config();
        Self::start(config, layout)
    }
}

impl<G: MineGenerator> Board<G> {
    pub fn with_generator(config: GameConfig, generator: G) -> Result<Self> {
        config.validate()?;
        Ok(Self::start(config, generator))
    }

    fn start(config: GameConfig, mut generator: G) -> Self {
        let layout = generator.generate(config);
        debug_assert_eq!(layout.size(), config.size);
        log::debug!("New game on {:?} with {} mines", config.size, layout.mine_count());
        Self {
            config,
            generator,
            display: Array2::default(config.size.to_nd_index()),
            layout,
            flagged_count: 0,
        }
    }

    /// Hides every square and draws a fresh mine layout with the same dimensions and mine count.
    pub fn new_game(&mut self) {
        self.layout = self.generator.generate(self.config);
        debug_assert_eq!(self.layout.size(), self.config.size);
        self.display.fill(DisplayCell::Hidden);
        self.flagged_count = 0;
        log::debug!(
            "New game on {:?} with {} mines",
            self.config.size,
            self.layout.mine_count()
        );
    }
}

impl<G> Board<G> {
    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn rows(&self) -> Coord {
        self.config.rows()
    }

    pub fn cols(&self) -> Coord {
        self.config.cols()
    }

    pub fn mine_count(&self) -> CellCount {
        self.layout.mine_count()
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// How many mines have not been flagged yet, negative when there are more flags than mines.
    pub fn mines_left(&self) -> isize {
        (self.layout.mine_count() as isize) - (self.flagged_count as isize)
    }

    /// Read-only view of what the player sees.
    pub fn display(&self) -> ArrayView2<'_, DisplayCell> {
        self.display.view()
    }

    /// Owned copy of what the player sees.
    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot::from_board(self)
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<DisplayCell> {
        let coords = self.layout.validate_coords(coords)?;
        Ok(self.display[coords.to_nd_index()])
    }

    /// Where the mines are, for showing the board once the game is over.
    pub fn mine_positions(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.layout.mine_positions()
    }

    /// Toggles a flag on a hidden square.
    pub fn flag_square(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use DisplayCell::*;

        let coords = self.layout.validate_coords(coords)?;
        let cell = &mut self.display[coords.to_nd_index()];

        match *cell {
            Hidden => {
                *cell = Flagged;
                self.flagged_count += 1;
                Ok(MarkOutcome::Flagged)
            }
            Flagged => {
                *cell = Hidden;
                self.flagged_count -= 1;
                Ok(MarkOutcome::Unflagged)
            }
            Revealed(_) => Err(GameError::CannotFlagRevealed),
        }
    }

    /// Reveals a square, opening the surrounding area when it has no adjacent mines.
    ///
    /// The mine check comes first: a mine reports [`RevealOutcome::HitMine`] whatever its display
    /// state, including flagged.
    pub fn reveal_square(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.layout.validate_coords(coords)?;

        if self.layout.contains_mine(coords) {
            log::debug!("Hit mine at {:?}", coords);
            return Ok(RevealOutcome::HitMine);
        }

        if !self.display[coords.to_nd_index()].is_hidden() {
            return Err(GameError::CannotRevealNotHidden);
        }

        let opened = self.flood_reveal(coords);
        log::debug!("Revealed {} squares from {:?}", opened, coords);
        Ok(RevealOutcome::Safe { opened })
    }

    /// Whether flags and mines match exactly: every mine flagged and nothing else flagged.
    ///
    /// An unfinished game and a game with misplaced flags both give `false`; there is no way to
    /// tell them apart from this result.
    pub fn check_for_win(&self) -> bool {
        Zip::from(&self.display)
            .and(self.layout.ground())
            .all(|display, ground| display.is_flagged() == ground.is_mine())
    }

    /// Opens `start` and spreads through zero-count squares, returns how many squares were opened.
    fn flood_reveal(&mut self, start: Coord2) -> CellCount {
        let mut opened = 0;
        let mut to_visit = VecDeque::new();

        if let Some(count) = self.open_cell(start) {
            opened += 1;
            if count == 0 {
                to_visit.push_back(start);
            }
        }

        while let Some(visit_coords) = to_visit.pop_front() {
            for pos in self.layout.iter_neighbors(visit_coords) {
                // flags and already opened squares stop the spread
                let Some(count) = self.open_cell(pos) else {
                    continue;
                };
                opened += 1;
                log::trace!("Flood opened square at {:?}, mine count: {}", pos, count);

                if count == 0 {
                    to_visit.push_back(pos);
                }
            }
        }

        opened
    }

    /// Reveals a hidden non-mine square, returning its count, or `None` if it can't be opened.
    fn open_cell(&mut self, coords: Coord2) -> Option<u8> {
        let cell = &mut self.display[coords.to_nd_index()];
        if !cell.is_hidden() {
            return None;
        }

        let count = self.layout[coords].adjacent_mines()?;
        *cell = DisplayCell::Revealed(count);
        Some(count)
    }
}
