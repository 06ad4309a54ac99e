//! The [`Board`] type — a rectangular grid of [`Cell`]s with two terminals.
//!
//! Unlike a shared-buffer view, a `Board` owns its cells by value: cloning
//! (or [`duplicate`](Board::duplicate)) yields a fully independent copy, so
//! search branches never observe each other's trace marks.

use std::fmt;
use std::str::FromStr;

use crate::cell::Cell;
use crate::geom::{Bounds, Coord};
use crate::loader::{self, LoadError, Terminal};

/// A circuit board: fixed dimensions, one start, one end, and a mutable
/// set of cells that can only ever move from [`Cell::Open`] to
/// [`Cell::Trace`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    bounds: Bounds,
    cells: Vec<Cell>,
    start: Coord,
    end: Coord,
}

impl Board {
    /// Build a board from row-major cells.
    ///
    /// `cells` must hold exactly `rows * cols` entries with exactly one
    /// [`Cell::Start`] and one [`Cell::End`].
    pub fn from_cells(rows: i32, cols: i32, cells: Vec<Cell>) -> Result<Self, LoadError> {
        if rows <= 0 || cols <= 0 {
            return Err(LoadError::Dimensions(format!(
                "board must have at least one row and column, got {rows} {cols}"
            )));
        }
        let bounds = Bounds::new(rows, cols);
        if cells.len() != bounds.len() {
            return Err(LoadError::Dimensions(format!(
                "{} cells do not fill a {bounds} board",
                cells.len()
            )));
        }

        let find = |terminal: Terminal, wanted: Cell| -> Result<Coord, LoadError> {
            let mut found = bounds
                .iter()
                .zip(cells.iter())
                .filter(|&(_, &cell)| cell == wanted)
                .map(|(c, _)| c);
            match (found.next(), found.count()) {
                (Some(c), 0) => Ok(c),
                (first, rest) => Err(LoadError::TerminalCount {
                    terminal,
                    found: usize::from(first.is_some()) + rest,
                }),
            }
        };
        let start = find(Terminal::Start, Cell::Start)?;
        let end = find(Terminal::End, Cell::End)?;

        Ok(Self {
            bounds,
            cells,
            start,
            end,
        })
    }

    /// The board's extent.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// Location of the start terminal (`1`).
    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Location of the end terminal (`2`).
    #[inline]
    pub fn end(&self) -> Coord {
        self.end
    }

    /// The cell at `c`, or `None` if `c` is off the board.
    #[inline]
    pub fn cell(&self, c: Coord) -> Option<Cell> {
        self.bounds.index(c).map(|i| self.cells[i])
    }

    /// Whether `c` is on the board and [`Cell::Open`]. Terminals and
    /// traced cells are never open.
    #[inline]
    pub fn is_open(&self, c: Coord) -> bool {
        self.cell(c) == Some(Cell::Open)
    }

    /// Mark an open cell as part of a trace.
    ///
    /// This is the only way a board changes after construction. Anything
    /// other than an open, in-bounds cell is rejected and the board is
    /// left untouched.
    pub fn trace(&mut self, c: Coord) -> Result<(), OccupiedPositionError> {
        match self.bounds.index(c) {
            Some(i) if self.cells[i] == Cell::Open => {
                self.cells[i] = Cell::Trace;
                Ok(())
            }
            Some(i) => Err(OccupiedPositionError {
                coord: c,
                found: Some(self.cells[i]),
            }),
            None => Err(OccupiedPositionError {
                coord: c,
                found: None,
            }),
        }
    }

    /// Every open cell 4-adjacent to `c`, in row-major order.
    ///
    /// The order decides in which order search branches are generated.
    pub fn adjacent_open(&self, c: Coord) -> Vec<Coord> {
        c.neighbors_4()
            .into_iter()
            .filter(|&n| self.is_open(n))
            .collect()
    }

    /// An independent deep copy of this board.
    #[inline]
    pub fn duplicate(&self) -> Board {
        self.clone()
    }

    /// How many cells currently hold `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Row-major iterator over `(Coord, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// One string per row, glyphs separated by single spaces.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.chunks(self.bounds.cols().max(1) as usize).map(|row| {
            let mut line = String::with_capacity(row.len() * 2);
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    line.push(' ');
                }
                line.push(cell.glyph());
            }
            line
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        loader::parse(s)
    }
}

/// Attempt to trace a cell that is not open.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OccupiedPositionError {
    /// The rejected position.
    pub coord: Coord,
    /// What the position held, or `None` if it is off the board.
    pub found: Option<Cell>,
}

impl fmt::Display for OccupiedPositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.found {
            Some(cell) => write!(
                f,
                "row {}, col {} contains '{}'",
                self.coord.row, self.coord.col, cell
            ),
            None => write!(
                f,
                "row {}, col {} is outside the board",
                self.coord.row, self.coord.col
            ),
        }
    }
}

impl std::error::Error for OccupiedPositionError {}
