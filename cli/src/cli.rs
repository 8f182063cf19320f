//! Command-line options for the terminal minesweeper.

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use sweeper_core::{CellCount, Coord, GameConfig};

/// Classic minesweeper in the terminal
#[derive(Parser, Debug)]
#[command(name = "sweeper")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Board preset, individual sizes below override it
    #[arg(short, long, value_enum, default_value_t = Preset::Beginner)]
    pub preset: Preset,

    /// Number of rows
    #[arg(long)]
    pub rows: Option<Coord>,

    /// Number of columns
    #[arg(long)]
    pub cols: Option<Coord>,

    /// Number of mines
    #[arg(short, long)]
    pub mines: Option<CellCount>,

    /// Seed for mine placement, random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    Beginner,
    Intermediate,
    Expert,
}

impl From<Preset> for GameConfig {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Beginner => GameConfig::beginner(),
            Preset::Intermediate => GameConfig::intermediate(),
            Preset::Expert => GameConfig::expert(),
        }
    }
}

impl Cli {
    /// Preset with any explicit overrides applied, not yet validated.
    pub fn game_config(&self) -> GameConfig {
        let base = GameConfig::from(self.preset);
        let rows = self.rows.unwrap_or(base.rows());
        let cols = self.cols.unwrap_or(base.cols());
        let mines = self.mines.unwrap_or(base.mines);
        GameConfig::new_unchecked((rows, cols), mines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_beginner() {
        let cli = Cli::parse_from(["sweeper"]);

        assert_eq!(cli.game_config(), GameConfig::beginner());
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn overrides_apply_on_top_of_preset() {
        let cli = Cli::parse_from(["sweeper", "--preset", "expert", "--rows", "20", "-m", "5"]);

        assert_eq!(cli.game_config(), GameConfig::new_unchecked((20, 30), 5));
    }

    #[test]
    fn oversized_override_is_left_for_validation() {
        let cli = Cli::parse_from(["sweeper", "--rows", "2", "--cols", "2", "--mines", "9"]);

        assert!(cli.game_config().validate().is_err());
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
