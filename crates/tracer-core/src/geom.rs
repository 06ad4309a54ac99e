//! Geometry primitives: [`Coord`] and [`Bounds`].
//!
//! Coordinates are `(row, col)` pairs, zero-indexed from the top-left
//! corner of the board. They are signed so that neighbours falling off the
//! edge of a board can still be expressed and then rejected by a bounds
//! check.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A board position. Rows grow downwards, columns grow to the right.
///
/// Ordering is row-major: first by row, then by column.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

/// Unit steps to the four cardinal neighbours, listed in row-major order
/// of the cells they reach (up, left, right, down).
const ROW_MAJOR_STEPS: [Coord; 4] = [
    Coord::new(-1, 0),
    Coord::new(0, -1),
    Coord::new(0, 1),
    Coord::new(1, 0),
];

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The four cardinal neighbours in row-major order. Some of them may
    /// lie outside any particular board.
    #[inline]
    pub fn neighbors_4(self) -> [Coord; 4] {
        ROW_MAJOR_STEPS.map(|d| self + d)
    }

    /// Whether `other` differs from `self` by exactly one in exactly one axis.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        adjacent(self, other)
    }
}

/// 4-directional adjacency test. Symmetric in its arguments.
#[inline]
pub fn adjacent(a: Coord, b: Coord) -> bool {
    manhattan(a, b) == 1
}

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    let d = a - b;
    d.row.abs() + d.col.abs()
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The extent of a board: `rows × cols` cells anchored at the origin.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    rows: i32,
    cols: i32,
}

impl Bounds {
    /// Create bounds of the given size. Negative sizes are clamped to zero.
    #[inline]
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows: rows.max(0),
            cols: cols.max(0),
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether the bounds contain no cells at all.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether `c` lies inside the bounds.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Flat row-major index of `c`, or `None` when out of bounds.
    #[inline]
    pub fn index(self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some((c.row as usize) * (self.cols as usize) + (c.col as usize))
    }

    /// Row-major iterator over every coordinate.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            cur: Coord::ZERO,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Coord;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

// ---------------------------------------------------------------------------
// BoundsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the coordinates in a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    cur: Coord,
}

impl Iterator for BoundsIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.cur.row >= self.bounds.rows || self.bounds.is_empty() {
            return None;
        }
        let c = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.bounds.cols {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.bounds.is_empty() || self.cur.row >= self.bounds.rows {
            return (0, Some(0));
        }
        let w = self.bounds.cols as usize;
        let remaining_in_row = (self.bounds.cols - self.cur.col) as usize;
        let remaining_rows = (self.bounds.rows - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for BoundsIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_arithmetic() {
        let a = Coord::new(1, 2);
        let b = Coord::new(3, 4);
        assert_eq!(a + b, Coord::new(4, 6));
        assert_eq!(b - a, Coord::new(2, 2));
    }

    #[test]
    fn manhattan_is_symmetric() {
        let a = Coord::new(1, 2);
        let b = Coord::new(3, -1);
        assert_eq!(manhattan(a, b), 5);
        assert_eq!(manhattan(b, a), 5);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn coord_orders_row_major() {
        let mut cs = vec![Coord::new(1, 0), Coord::new(0, 2), Coord::new(0, 1)];
        cs.sort();
        assert_eq!(cs, vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 0)]);
    }

    #[test]
    fn neighbors_are_row_major() {
        let n = Coord::new(1, 1).neighbors_4();
        let mut sorted = n;
        sorted.sort();
        assert_eq!(n, sorted);
        assert!(n.iter().all(|&c| adjacent(c, Coord::new(1, 1))));
    }

    #[test]
    fn adjacency_is_symmetric() {
        let b = Bounds::new(4, 4);
        for p in b.iter() {
            for q in b.iter() {
                assert_eq!(adjacent(p, q), adjacent(q, p), "{p} vs {q}");
            }
        }
    }

    #[test]
    fn adjacency_excludes_self_and_diagonals() {
        let c = Coord::new(2, 2);
        assert!(!adjacent(c, c));
        assert!(!adjacent(c, Coord::new(3, 3)));
        assert!(!adjacent(c, Coord::new(1, 3)));
        assert!(!adjacent(c, Coord::new(2, 4)));
        assert!(adjacent(c, Coord::new(2, 1)));
        assert!(adjacent(c, Coord::new(3, 2)));
    }

    #[test]
    fn bounds_contains_and_index() {
        let b = Bounds::new(2, 3);
        assert_eq!(b.len(), 6);
        assert!(b.contains(Coord::new(1, 2)));
        assert!(!b.contains(Coord::new(2, 0)));
        assert!(!b.contains(Coord::new(0, -1)));
        assert_eq!(b.index(Coord::new(1, 0)), Some(3));
        assert_eq!(b.index(Coord::new(-1, 0)), None);
    }

    #[test]
    fn bounds_iter_count() {
        let b = Bounds::new(2, 3);
        let cs: Vec<_> = b.iter().collect();
        assert_eq!(cs.len(), 6);
        assert_eq!(cs[0], Coord::new(0, 0));
        assert_eq!(cs[3], Coord::new(1, 0));
        assert_eq!(cs[5], Coord::new(1, 2));
        assert_eq!(b.iter().len(), 6);
    }

    #[test]
    fn empty_bounds_iter() {
        let b = Bounds::new(0, 5);
        assert!(b.is_empty());
        assert_eq!(b.iter().count(), 0);
        assert_eq!(Bounds::new(-2, 3), Bounds::new(0, 3));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn coord_round_trip() {
        let c = Coord::new(3, 7);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"row":3,"col":7}"#);
        let back: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
