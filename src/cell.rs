use core::fmt;
use core::ops::Add;
use grid_util::point::Point;

use crate::moves::Direction;

/// A grid coordinate. Cells are compared by coordinates only and serve as the identity of a
/// node throughout a search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }

    /// Absolute per-axis distance to `other` as `(rows, cols)`.
    pub fn abs_delta(&self, other: &Cell) -> (i32, i32) {
        ((self.row - other.row).abs(), (self.col - other.col).abs())
    }

    /// The move vector leading from `self` to `other`.
    pub fn delta(&self, other: &Cell) -> (i32, i32) {
        (other.row - self.row, other.col - self.col)
    }
}

impl Add<Direction> for Cell {
    type Output = Cell;

    fn add(self, dir: Direction) -> Cell {
        Cell::new(self.row + dir.d_row, self.col + dir.d_col)
    }
}

impl From<Point> for Cell {
    fn from(p: Point) -> Cell {
        Cell::new(p.y, p.x)
    }
}

impl From<Cell> for Point {
    fn from(c: Cell) -> Point {
        Point::new(c.col, c.row)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Cell {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
