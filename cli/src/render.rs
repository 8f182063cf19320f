use std::fmt;

use ndarray::ArrayView2;
use sweeper_core::{Coord2, DisplayCell};

const HIDDEN: char = '#';
const FLAG: char = 'F';
const EMPTY: char = '.';
const MINE: char = '*';

fn cell_char(cell: DisplayCell) -> char {
    match cell {
        DisplayCell::Hidden => HIDDEN,
        DisplayCell::Flagged => FLAG,
        DisplayCell::Revealed(0) => EMPTY,
        DisplayCell::Revealed(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
    }
}

/// The grid with row and column numbers; `mines` are drawn over hidden squares.
pub struct Render<'a> {
    display: ArrayView2<'a, DisplayCell>,
    mines: &'a [Coord2],
}

pub fn render<'a>(display: ArrayView2<'a, DisplayCell>, mines: &'a [Coord2]) -> Render<'a> {
    Render { display, mines }
}

impl Render<'_> {
    fn is_mine(&self, row: usize, col: usize) -> bool {
        self.mines
            .iter()
            .any(|&(r, c)| usize::from(r) == row && usize::from(c) == col)
    }
}

impl fmt::Display for Render<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.display.dim();
        let width = rows.max(cols).saturating_sub(1).to_string().len();

        write!(f, "{:width$} ", "")?;
        for col in 0..cols {
            write!(f, " {col:>width$}")?;
        }
        writeln!(f)?;

        for (row, line) in self.display.outer_iter().enumerate() {
            write!(f, "{row:>width$} ")?;
            for (col, &cell) in line.iter().enumerate() {
                let ch = if cell.is_hidden() && self.is_mine(row, col) {
                    MINE
                } else {
                    cell_char(cell)
                };
                write!(f, " {ch:>width$}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
