use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board must have at least one row and one column")]
    EmptyBoard,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Mine placed twice on the same square")]
    DuplicateMine,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Mine count does not match the board")]
    MineCountMismatch,
    #[error("Cannot flag a revealed square")]
    CannotFlagRevealed,
    #[error("Cannot reveal a square that is not hidden")]
    CannotRevealNotHidden,
}

impl GameError {
    /// Whether the error comes from asking for a move the square's current state does not allow.
    pub const fn is_invalid_operation(self) -> bool {
        matches!(self, Self::CannotFlagRevealed | Self::CannotRevealNotHidden)
    }
}

pub type Result<T> = core::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_move_errors_are_invalid_operations() {
        assert!(GameError::CannotFlagRevealed.is_invalid_operation());
        assert!(GameError::CannotRevealNotHidden.is_invalid_operation());
        assert!(!GameError::InvalidCoords.is_invalid_operation());
        assert!(!GameError::InvalidBoardShape.is_invalid_operation());
    }
}
