use std::str::FromStr;

use anyhow::{Context, anyhow, bail};
use sweeper_core::{Coord, Coord2};

pub const HELP: &str = "\
commands:
  r <row> <col>   reveal a square
  f <row> <col>   flag or unflag a square
  n               new game
  h               this help
  q               quit";

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    NewGame,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            bail!("empty command");
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Command::Reveal(parse_coords(&mut words)?),
            "f" | "flag" => Command::Flag(parse_coords(&mut words)?),
            "n" | "new" => Command::NewGame,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            other => bail!("unknown command {other:?}, type h for help"),
        };

        if let Some(extra) = words.next() {
            bail!("unexpected {extra:?} after command");
        }
        Ok(command)
    }
}

fn parse_coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> anyhow::Result<Coord2> {
    let row = parse_axis(words.next(), "row")?;
    let col = parse_axis(words.next(), "column")?;
    Ok((row, col))
}

fn parse_axis(word: Option<&str>, name: &str) -> anyhow::Result<Coord> {
    let word = word.ok_or_else(|| anyhow!("missing {name}"))?;
    word.parse()
        .with_context(|| format!("invalid {name} {word:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves() {
        assert_eq!("r 3 4".parse::<Command>().unwrap(), Command::Reveal((3, 4)));
        assert_eq!("  F 0  8 ".parse::<Command>().unwrap(), Command::Flag((0, 8)));
        assert_eq!("reveal 1 2".parse::<Command>().unwrap(), Command::Reveal((1, 2)));
    }

    #[test]
    fn parses_control_commands() {
        assert_eq!("n".parse::<Command>().unwrap(), Command::NewGame);
        assert_eq!("help".parse::<Command>().unwrap(), Command::Help);
        assert_eq!("q".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn rejects_bad_input() {
        assert!("".parse::<Command>().is_err());
        assert!("x 1 1".parse::<Command>().is_err());
        assert!("r 1".parse::<Command>().is_err());
        assert!("r 1 -2".parse::<Command>().is_err());
        assert!("r 1 300".parse::<Command>().is_err());
        assert!("f 1 2 3".parse::<Command>().is_err());
    }

    #[test]
    fn error_names_the_bad_axis() {
        let err = "r a 1".parse::<Command>().unwrap_err();

        assert_eq!(err.to_string(), "invalid row \"a\"");
    }
}
