//! The [`Cell`] type — the state of a single board position.

use std::fmt;

/// State of one board position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Free for tracing.
    #[default]
    Open,
    /// Occupied by something else; can never be traced.
    Blocked,
    /// The first component to connect.
    Start,
    /// The second component to connect.
    End,
    /// Part of a trace.
    Trace,
}

impl Cell {
    /// Every cell state, in glyph order `O X 1 2 T`.
    pub const ALL: [Cell; 5] = [Cell::Open, Cell::Blocked, Cell::Start, Cell::End, Cell::Trace];

    /// The character used for this state in board files and dumps.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Cell::Open => 'O',
            Cell::Blocked => 'X',
            Cell::Start => '1',
            Cell::End => '2',
            Cell::Trace => 'T',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    #[inline]
    pub const fn from_glyph(ch: char) -> Option<Cell> {
        match ch {
            'O' => Some(Cell::Open),
            'X' => Some(Cell::Blocked),
            '1' => Some(Cell::Start),
            '2' => Some(Cell::End),
            'T' => Some(Cell::Trace),
            _ => None,
        }
    }

    /// Whether this is one of the two terminals.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Cell::Start | Cell::End)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_round_trip() {
        for cell in Cell::ALL {
            assert_eq!(Cell::from_glyph(cell.glyph()), Some(cell));
        }
        assert_eq!(Cell::from_glyph('o'), None);
        assert_eq!(Cell::from_glyph('3'), None);
    }

    #[test]
    fn terminals() {
        assert!(Cell::Start.is_terminal());
        assert!(Cell::End.is_terminal());
        assert!(!Cell::Trace.is_terminal());
        assert_eq!(Cell::default(), Cell::Open);
    }
}
