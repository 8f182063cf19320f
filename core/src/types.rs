/// Single coordinate axis used for row/column counts and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Iterates the up-to-8 cells surrounding `center`, clipped to `bounds`.
///
/// The center itself is never yielded. Cells come out in row-major order.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    row: Coord,
    col: Coord,
    row_end: Coord,
    col_start: Coord,
    col_end: Coord,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        let (row, col) = center;
        let (rows, cols) = bounds;
        let row_start = row.saturating_sub(1);
        let col_start = col.saturating_sub(1);
        // one past the last neighbour, clipped to the board
        let row_end = row.saturating_add(2).min(rows);
        let col_end = col.saturating_add(2).min(cols);

        Self {
            center,
            row: row_start,
            col: col_start,
            row_end,
            col_start,
            col_end,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while self.row < self.row_end {
            if self.col >= self.col_end {
                self.row += 1;
                self.col = self.col_start;
                continue;
            }

            let item = (self.row, self.col);
            self.col += 1;

            if item != self.center {
                return Some(item);
            }
        }
        None
    }
}
