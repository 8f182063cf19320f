use serde::{Deserialize, Serialize};

/// Player-visible state of a square.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayCell {
    Hidden,
    Flagged,
    Revealed(u8),
}

impl DisplayCell {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }
}

impl Default for DisplayCell {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Ground truth of a square: a mine, or the number of mines around it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroundCell {
    Mine,
    Clear(u8),
}

impl GroundCell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// Adjacent mine count, `None` for a mine.
    pub const fn adjacent_mines(self) -> Option<u8> {
        match self {
            Self::Mine => None,
            Self::Clear(count) => Some(count),
        }
    }
}

impl Default for GroundCell {
    fn default() -> Self {
        Self::Clear(0)
    }
}
