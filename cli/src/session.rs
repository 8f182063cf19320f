use sweeper_core::{Board, Coord2, GameError, MineGenerator, RandomMineGenerator, RevealOutcome};

use crate::command::Command;

/// What happened after a command, for the front end to report.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Updated,
    Won,
    Lost(Coord2),
    Rejected(GameError),
    /// Move ignored because the game is over.
    GameOver,
    NewGame,
    Help,
    Quit,
}

impl Event {
    /// Whether the board should be drawn again.
    pub const fn needs_redraw(self) -> bool {
        matches!(self, Self::Updated | Self::Won | Self::Lost(_) | Self::NewGame)
    }
}

/// One board plus whether moves are still accepted.
#[derive(Debug)]
pub struct Session<G = RandomMineGenerator> {
    board: Board<G>,
    playing: bool,
}

impl<G: MineGenerator> Session<G> {
    pub fn new(board: Board<G>) -> Self {
        Self {
            board,
            playing: true,
        }
    }

    pub fn board(&self) -> &Board<G> {
        &self.board
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn apply(&mut self, command: Command) -> Event {
        match command {
            Command::Reveal(coords) if self.playing => self.reveal(coords),
            Command::Flag(coords) if self.playing => self.flag(coords),
            Command::Reveal(_) | Command::Flag(_) => Event::GameOver,
            Command::NewGame => {
                self.board.new_game();
                self.playing = true;
                Event::NewGame
            }
            Command::Help => Event::Help,
            Command::Quit => Event::Quit,
        }
    }

    fn reveal(&mut self, coords: Coord2) -> Event {
        match self.board.reveal_square(coords) {
            Ok(RevealOutcome::HitMine) => {
                log::info!("Mine hit at {:?}", coords);
                self.playing = false;
                Event::Lost(coords)
            }
            Ok(RevealOutcome::Safe { .. }) => self.check_for_win(),
            Err(err) => Event::Rejected(err),
        }
    }

    fn flag(&mut self, coords: Coord2) -> Event {
        match self.board.flag_square(coords) {
            Ok(_) => self.check_for_win(),
            Err(err) => Event::Rejected(err),
        }
    }

    fn check_for_win(&mut self) -> Event {
        if self.board.check_for_win() {
            log::info!("All {} mines flagged", self.board.mine_count());
            self.playing = false;
            Event::Won
        } else {
            Event::Updated
        }
    }
}
