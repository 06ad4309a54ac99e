//! **tracer-core** — board model for the circuit tracer.
//!
//! This crate provides the foundational types used by the search engine:
//! grid coordinates, cell states, the traceable [`Board`] and the text
//! loader that turns a board description into a validated [`Board`].

pub mod board;
pub mod cell;
pub mod geom;
pub mod loader;

pub use board::{Board, OccupiedPositionError};
pub use cell::Cell;
pub use geom::{Bounds, Coord, adjacent, manhattan};
pub use loader::{LoadError, Terminal, load, parse};
