use crate::*;
pub use random::*;

mod random;

/// Source of mine layouts for new games.
///
/// The returned layout must have exactly `config.size`.
pub trait MineGenerator {
    fn generate(&mut self, config: GameConfig) -> MineLayout;
}
