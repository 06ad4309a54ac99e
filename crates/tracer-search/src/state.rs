//! Partial traces explored by the search.

use std::fmt;

use tracer_core::{Board, Coord, OccupiedPositionError, adjacent};

/// One branch of the search: a private board plus the trace laid so far.
///
/// Every coordinate in [`path`](Self::path) is marked [`Trace`] on the
/// state's own board, and the last one is the most recently traced cell.
/// States are never modified after construction; branching copies the
/// board.
///
/// [`Trace`]: tracer_core::Cell::Trace
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathState {
    board: Board,
    path: Vec<Coord>,
}

impl PathState {
    /// Begin a trace at `first`, which should be an open cell next to the
    /// start terminal. `board` is copied, not modified.
    pub fn root(board: &Board, first: Coord) -> Result<Self, OccupiedPositionError> {
        let mut board = board.duplicate();
        board.trace(first)?;
        Ok(Self {
            board,
            path: vec![first],
        })
    }

    /// A new state one step longer, tracing `next` on a copy of this
    /// state's board.
    pub fn extend(&self, next: Coord) -> Result<Self, OccupiedPositionError> {
        let mut board = self.board.duplicate();
        board.trace(next)?;
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(next);
        Ok(Self { board, path })
    }

    /// Whether the trace ends next to the end terminal.
    #[inline]
    pub fn is_complete(&self) -> bool {
        adjacent(self.last(), self.board.end())
    }

    /// Number of traced cells.
    #[inline]
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    /// The most recently traced cell.
    #[inline]
    pub fn last(&self) -> Coord {
        // Both constructors push at least one coordinate.
        self.path[self.path.len() - 1]
    }

    /// Traced cells in the order they were laid.
    #[inline]
    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    /// Borrow this state's board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// A copy of this state's board, free to be modified.
    pub fn board_snapshot(&self) -> Board {
        self.board.duplicate()
    }
}

impl fmt::Display for PathState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}
