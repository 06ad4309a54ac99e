//! Presentation of search results.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use serde::Serialize;
use tracer_core::{Board, Cell, Coord};
use tracer_search::PathState;

/// Write each trace as a board dump followed by a blank line.
pub fn console<W: Write>(out: &mut W, paths: &[PathState], color: bool) -> io::Result<()> {
    for state in paths {
        if color {
            colored_board(out, state.board())?;
        } else {
            write!(out, "{state}")?;
        }
        writeln!(out)?;
    }
    out.flush()
}

fn cell_color(cell: Cell) -> Option<Color> {
    match cell {
        Cell::Trace => Some(Color::Yellow),
        c if c.is_terminal() => Some(Color::Green),
        Cell::Blocked => Some(Color::DarkGrey),
        _ => None,
    }
}

fn colored_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    let last_col = board.cols() - 1;
    for (c, cell) in board.iter() {
        match cell_color(cell) {
            Some(color) => {
                if cell == Cell::Trace {
                    queue!(out, SetAttribute(Attribute::Bold))?;
                }
                queue!(
                    out,
                    SetForegroundColor(color),
                    Print(cell.glyph()),
                    ResetColor,
                    SetAttribute(Attribute::Reset)
                )?;
            }
            None => queue!(out, Print(cell.glyph()))?,
        }
        let sep = if c.col == last_col { '\n' } else { ' ' };
        queue!(out, Print(sep))?;
    }
    Ok(())
}

#[derive(Serialize)]
struct Report<'a> {
    length: usize,
    path: &'a [Coord],
    board: Vec<String>,
}

/// Write all traces as one pretty-printed JSON array.
pub fn json<W: Write>(out: &mut W, paths: &[PathState]) -> io::Result<()> {
    let reports: Vec<Report<'_>> = paths
        .iter()
        .map(|state| Report {
            length: state.path_len(),
            path: state.path(),
            board: state.board().lines().collect(),
        })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &reports)?;
    writeln!(out)?;
    out.flush()
}
