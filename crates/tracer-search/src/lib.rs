//! Exhaustive shortest-trace search on circuit boards.
//!
//! Given a [`Board`](tracer_core::Board) with a start and an end terminal,
//! the [`Tracer`] enumerates every simple 4-directional path through open
//! cells that begins next to the start and ends next to the end, and keeps
//! all of the shortest ones.
//!
//! - **Frontier** containers decide exploration order ([`Storage`] with a
//!   [`Discipline`] of stack or queue, or any other [`Frontier`])
//! - **Path states** ([`PathState`]) carry a private board copy plus the
//!   coordinates traced so far
//! - **The driver** ([`Tracer`], or the [`search`] shortcut) runs the loop
//!
//! The result set does not depend on the frontier discipline, only the
//! order in which tied paths are discovered does.

mod config;
mod engine;
mod frontier;
mod state;

pub use config::SearchConfig;
pub use engine::{SearchError, SearchStats, Tracer, search, search_with_stats};
pub use frontier::{Discipline, EmptyContainerError, Frontier, ParseDisciplineError, Storage};
pub use state::PathState;
