use serde::{Deserialize, Serialize};
use std::fmt;

/// A board coordinate. Rows and columns are 1-indexed; values outside the
/// grid are representable so that neighbors of edge points can be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub row: i16,
    pub col: i16,
}

impl Point {
    pub const fn new(row: i16, col: i16) -> Self {
        Point { row, col }
    }

    /// The four orthogonally adjacent points: up, down, left, right.
    ///
    /// Coordinates wrap at the `i16` limits; wrapped points are never on a grid.
    pub fn neighbors(self) -> [Point; 4] {
        [
            Point::new(self.row.wrapping_sub(1), self.col),
            Point::new(self.row.wrapping_add(1), self.col),
            Point::new(self.row, self.col.wrapping_sub(1)),
            Point::new(self.row, self.col.wrapping_add(1)),
        ]
    }
}

impl From<(i16, i16)> for Point {
    fn from((row, col): (i16, i16)) -> Self {
        Point::new(row, col)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}
