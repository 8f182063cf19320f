use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use sweeper_core::{Board, Coord2};

use crate::cli::Cli;
use crate::command::{Command, HELP};
use crate::render::render;
use crate::session::{Event, Session};

mod cli;
mod command;
mod render;
mod session;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let config = cli.game_config();
    let seed = cli.seed.unwrap_or_else(rand::random);
    log::debug!("Starting {:?} with seed {}", config, seed);

    let board = Board::new(config, seed).with_context(|| {
        format!(
            "cannot start a {}x{} game with {} mines",
            config.rows(),
            config.cols(),
            config.mines
        )
    })?;
    let mut session = Session::new(board);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "{HELP}")?;
    draw(&mut stdout, &session, &[])?;
    prompt(&mut stdout, &session)?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read command")?;
        if line.trim().is_empty() {
            prompt(&mut stdout, &session)?;
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(stdout, "{err:#}")?;
                prompt(&mut stdout, &session)?;
                continue;
            }
        };

        let event = session.apply(command);
        match event {
            Event::Lost(_) => {
                let mines: Vec<_> = session.board().mine_positions().collect();
                draw(&mut stdout, &session, &mines)?;
            }
            event if event.needs_redraw() => draw(&mut stdout, &session, &[])?,
            _ => {}
        }

        match event {
            Event::Won => writeln!(stdout, "Victory! Type n for a new game.")?,
            Event::Lost(_) => writeln!(stdout, "You lose! Type n for a new game.")?,
            Event::Rejected(err) => writeln!(stdout, "{err}")?,
            Event::GameOver => writeln!(stdout, "The game is over, type n for a new game.")?,
            Event::Help => writeln!(stdout, "{HELP}")?,
            Event::Quit => break,
            Event::Updated | Event::NewGame => {}
        }
        prompt(&mut stdout, &session)?;
    }

    Ok(())
}

fn draw(out: &mut impl Write, session: &Session, mines: &[Coord2]) -> io::Result<()> {
    let board = session.board();
    write!(out, "{}", render(board.display(), mines))?;
    writeln!(out, "mines left: {}", board.mines_left())?;
    out.flush()
}

fn prompt(out: &mut impl Write, session: &Session) -> io::Result<()> {
    if session.is_playing() {
        write!(out, "> ")?;
    } else {
        write!(out, "(game over) > ")?;
    }
    out.flush()
}
