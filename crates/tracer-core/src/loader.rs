//! Board files.
//!
//! A board file starts with a line holding the number of rows and columns,
//! followed by one line per row with one whitespace-separated glyph per
//! column:
//!
//! ```text
//! 3 3
//! 1 O O
//! X O O
//! O O 2
//! ```
//!
//! Valid glyphs are `O` (open), `X` (blocked), `1` (start), `2` (end) and
//! `T` (trace). Blank lines are ignored. Parsing is a pure function of the
//! text; [`load`] only adds the file read.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::board::Board;
use crate::cell::Cell;
use crate::geom::Coord;

/// Glyphs accepted in a board file.
pub const ALLOWED_GLYPHS: &str = "OXT12";

/// Read and parse a board file.
pub fn load(path: impl AsRef<Path>) -> Result<Board, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text)
}

/// Parse and validate a board description.
pub fn parse(text: &str) -> Result<Board, LoadError> {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

    let header = lines
        .next()
        .ok_or_else(|| LoadError::Dimensions("missing dimension line".to_string()))?;
    let (rows, cols) = parse_dimensions(header)?;

    let grid: Vec<&str> = lines.collect();
    if grid.len() != rows as usize {
        return Err(LoadError::RowCount {
            expected: rows as usize,
            found: grid.len(),
        });
    }

    // Sized per validated row; the header column count is unchecked here.
    let mut cells = Vec::new();
    for (row, line) in grid.iter().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != cols as usize {
            return Err(LoadError::ColumnCount {
                row: row as i32,
                expected: cols as usize,
                found: tokens.len(),
            });
        }
        cells.reserve(tokens.len());
        for (col, token) in tokens.into_iter().enumerate() {
            let mut chars = token.chars();
            let cell = match (chars.next(), chars.next()) {
                (Some(ch), None) => Cell::from_glyph(ch),
                _ => None,
            };
            let Some(cell) = cell else {
                return Err(LoadError::InvalidGlyph {
                    token: token.to_string(),
                    coord: Coord::new(row as i32, col as i32),
                });
            };
            cells.push(cell);
        }
    }

    Board::from_cells(rows, cols, cells)
}

fn parse_dimensions(header: &str) -> Result<(i32, i32), LoadError> {
    let tokens: Vec<&str> = header.split_whitespace().collect();
    let [rows, cols] = tokens.as_slice() else {
        return Err(LoadError::Dimensions(format!(
            "expected \"rows cols\", got {header:?}"
        )));
    };
    let positive = |s: &str| -> Result<i32, LoadError> {
        match s.parse::<i32>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(LoadError::Dimensions(format!(
                "{s:?} is not a positive integer"
            ))),
        }
    };
    Ok((positive(*rows)?, positive(*cols)?))
}

/// Which terminal a [`LoadError::TerminalCount`] refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Terminal {
    Start,
    End,
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terminal::Start => write!(f, "starting"),
            Terminal::End => write!(f, "ending"),
        }
    }
}

/// Errors that can occur when loading a board.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The dimension line is missing or malformed.
    Dimensions(String),
    /// The number of rows differs from the declared row count.
    RowCount { expected: usize, found: usize },
    /// A row holds the wrong number of glyphs.
    ColumnCount {
        row: i32,
        expected: usize,
        found: usize,
    },
    /// A token is not one of [`ALLOWED_GLYPHS`].
    InvalidGlyph { token: String, coord: Coord },
    /// The board does not hold exactly one of a terminal.
    TerminalCount { terminal: Terminal, found: usize },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Dimensions(msg) => write!(f, "format error in dimensions: {msg}"),
            Self::RowCount { expected, found } => {
                write!(f, "expected {expected} rows, found {found}")
            }
            Self::ColumnCount {
                row,
                expected,
                found,
            } => write!(f, "row {row}: expected {expected} columns, found {found}"),
            Self::InvalidGlyph { token, coord } => write!(
                f,
                "invalid glyph \u{201c}{token}\u{201d} at {coord}; valid glyphs are {ALLOWED_GLYPHS}"
            ),
            Self::TerminalCount { terminal, found } => write!(
                f,
                "board must have exactly one {terminal} position, found {found}"
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_board() {
        let b = parse("2 3\nO O 1\n2 X O\n").unwrap();
        assert_eq!(b.rows(), 2);
        assert_eq!(b.cols(), 3);
        assert_eq!(b.start(), Coord::new(0, 2));
        assert_eq!(b.end(), Coord::new(1, 0));
        assert_eq!(b.cell(Coord::new(1, 1)), Some(Cell::Blocked));
    }

    #[test]
    fn tolerates_blank_lines_and_padding() {
        let b = parse("\n  1 2  \n\n 1 2 \n\n").unwrap();
        assert_eq!(b.to_string(), "1 2\n");
    }

    #[test]
    fn accepts_trace_glyph() {
        let b = parse("1 4\n1 T O 2\n").unwrap();
        assert!(!b.is_open(Coord::new(0, 1)));
        assert!(b.is_open(Coord::new(0, 2)));
    }

    #[test]
    fn rejects_bad_dimensions() {
        for text in ["", "3\n", "a b\n", "0 2\n", "2 -1\n", "1 2 3\n1 2\n"] {
            let err = parse(text).unwrap_err();
            assert!(matches!(err, LoadError::Dimensions(_)), "{text:?}: {err}");
        }
    }

    #[test]
    fn rejects_wrong_row_count() {
        let err = parse("3 2\n1 O\nO 2\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::RowCount {
                expected: 3,
                found: 2
            }
        ));
        let err = parse("1 2\n1 2\nO O\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::RowCount {
                expected: 1,
                found: 2
            }
        ));
    }

    #[test]
    fn rejects_wrong_column_count() {
        let err = parse("2 3\n1 O O\nO 2\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::ColumnCount {
                row: 1,
                expected: 3,
                found: 2
            }
        ));
        let err = parse("1 2\n1 2 O\n").unwrap_err();
        assert!(matches!(err, LoadError::ColumnCount { found: 3, .. }));
    }

    #[test]
    fn huge_header_width_is_a_column_error() {
        let text = format!("1000 {}\n{}", i32::MAX, "1 2\n".repeat(1000));
        let err = parse(&text).unwrap_err();
        assert!(matches!(
            err,
            LoadError::ColumnCount {
                row: 0,
                expected,
                found: 2
            } if expected == i32::MAX as usize
        ));
    }

    #[test]
    fn rejects_invalid_glyphs() {
        let err = parse("1 3\n1 Q 2\n").unwrap_err();
        match err {
            LoadError::InvalidGlyph { token, coord } => {
                assert_eq!(token, "Q");
                assert_eq!(coord, Coord::new(0, 1));
            }
            other => panic!("unexpected error: {other}"),
        }
        let err = parse("1 3\n1 OO 2\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidGlyph { .. }));
        // Lowercase 'o' is not the open glyph.
        let err = parse("1 3\n1 o 2\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidGlyph { .. }));
    }

    #[test]
    fn rejects_wrong_terminal_counts() {
        let err = parse("1 3\n1 1 2\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::TerminalCount {
                terminal: Terminal::Start,
                found: 2
            }
        ));
        let err = parse("1 3\n1 O O\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::TerminalCount {
                terminal: Terminal::End,
                found: 0
            }
        ));
        assert_eq!(
            err.to_string(),
            "board must have exactly one ending position, found 0"
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load("/definitely/not/a/board.dat").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn loads_from_disk() {
        let path = std::env::temp_dir().join(format!("tracer-core-{}.dat", std::process::id()));
        std::fs::write(&path, "1 3\n1 O 2\n").unwrap();
        let b = load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(b.adjacent_open(b.start()), vec![Coord::new(0, 1)]);
    }
}
