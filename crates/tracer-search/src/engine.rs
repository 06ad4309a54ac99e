//! The search driver.
//!
//! [`Tracer`] seeds its frontier with one single-cell trace per open
//! neighbour of the start terminal, then repeatedly removes a state and
//! either records it (when it ends next to the end terminal) or pushes
//! every one-step extension back. Recording keeps only the shortest
//! completed traces seen so far, ties included:
//!
//! | completed length vs best | action |
//! |---|---|
//! | no best yet, or shorter | clear results, keep this one |
//! | equal | keep this one as well |
//! | longer | discard |
//!
//! Completed traces are never extended. Every branch owns its board, so a
//! branch cannot revisit its own cells and the search always terminates.

use std::fmt;

use log::{debug, trace};
use tracer_core::{Board, OccupiedPositionError};

use crate::config::SearchConfig;
use crate::frontier::{EmptyContainerError, Frontier, Storage};
use crate::state::PathState;

/// Counters describing one search run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Root states built from the start terminal's neighbours.
    pub seeded: usize,
    /// States taken out of the frontier.
    pub removed: usize,
    /// Incomplete states whose successors were generated.
    pub expanded: usize,
    /// Successor states built during expansion.
    pub generated: usize,
    /// Completed states encountered, whether kept or not.
    pub completed: usize,
    /// Completed states dropped for being longer than the best.
    pub discarded: usize,
    /// Incomplete states dropped by pruning.
    pub pruned: usize,
    /// Largest number of states pending at once.
    pub peak_frontier: usize,
    /// Length of the shortest traces found, if any.
    pub best_len: Option<usize>,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} states removed ({} expanded, {} completed, {} discarded, {} pruned), \
             {} seeded, {} generated, peak frontier {}, best length ",
            self.removed,
            self.expanded,
            self.completed,
            self.discarded,
            self.pruned,
            self.seeded,
            self.generated,
            self.peak_frontier,
        )?;
        match self.best_len {
            Some(len) => write!(f, "{len}"),
            None => write!(f, "none"),
        }
    }
}

/// A violated search invariant. Either case is a bug, not a property of
/// the input board, and aborts the whole run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// A successor tried to trace a cell that was not open.
    Occupied(OccupiedPositionError),
    /// The frontier was asked for a state while empty.
    Empty(EmptyContainerError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Occupied(e) => write!(f, "search tried to trace an occupied position: {e}"),
            Self::Empty(e) => write!(f, "search frontier misuse: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Occupied(e) => Some(e),
            Self::Empty(e) => Some(e),
        }
    }
}

impl From<OccupiedPositionError> for SearchError {
    fn from(e: OccupiedPositionError) -> Self {
        Self::Occupied(e)
    }
}

impl From<EmptyContainerError> for SearchError {
    fn from(e: EmptyContainerError) -> Self {
        Self::Empty(e)
    }
}

/// Search driver over any [`Frontier`] of [`PathState`]s.
///
/// The frontier decides exploration order only; [`SearchConfig::discipline`]
/// is not consulted here (see [`search`] for the convenience path that
/// builds a [`Storage`] from it).
pub struct Tracer<F> {
    frontier: F,
    config: SearchConfig,
    best: Vec<PathState>,
    stats: SearchStats,
}

impl<F: Frontier<PathState>> Tracer<F> {
    /// Create a driver around an empty `frontier`.
    pub fn new(frontier: F, config: SearchConfig) -> Self {
        Self {
            frontier,
            config,
            best: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    /// The options this driver runs with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Counters from the most recent [`run`](Self::run).
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Find every shortest trace on `board`.
    ///
    /// Returns the tied shortest completed states in discovery order. An
    /// unreachable end terminal is not an error: the result is empty.
    pub fn run(&mut self, board: &Board) -> Result<Vec<PathState>, SearchError> {
        self.best.clear();
        self.stats = SearchStats::default();
        // Leftovers from an aborted run.
        while !self.frontier.is_empty() {
            self.frontier.remove()?;
        }

        debug!(
            "tracing {} board from {} to {} (prune: {})",
            board.bounds(),
            board.start(),
            board.end(),
            self.config.prune
        );

        for first in board.adjacent_open(board.start()) {
            self.push(PathState::root(board, first)?);
            self.stats.seeded += 1;
        }
        debug!("seeded {} root states", self.stats.seeded);

        while !self.frontier.is_empty() {
            let current = self.frontier.remove()?;
            self.stats.removed += 1;

            if current.is_complete() {
                self.record(current);
                continue;
            }

            if self.config.prune
                && self
                    .best_len()
                    .is_some_and(|best| current.path_len() >= best)
            {
                self.stats.pruned += 1;
                continue;
            }

            self.expand(&current)?;
        }

        self.stats.best_len = self.best_len();
        debug!("search finished: {}", self.stats);
        Ok(std::mem::take(&mut self.best))
    }

    fn best_len(&self) -> Option<usize> {
        self.best.first().map(PathState::path_len)
    }

    fn push(&mut self, state: PathState) {
        self.frontier.insert(state);
        self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());
    }

    fn record(&mut self, current: PathState) {
        self.stats.completed += 1;
        let len = current.path_len();
        match self.best_len() {
            Some(best) if len > best => {
                self.stats.discarded += 1;
            }
            Some(best) if len == best => {
                trace!("tie at length {len} ending at {}", current.last());
                self.best.push(current);
            }
            _ => {
                trace!("new best length {len} ending at {}", current.last());
                self.best.clear();
                self.best.push(current);
            }
        }
    }

    fn expand(&mut self, current: &PathState) -> Result<(), SearchError> {
        self.stats.expanded += 1;
        for next in current.board().adjacent_open(current.last()) {
            self.push(current.extend(next)?);
            self.stats.generated += 1;
        }
        Ok(())
    }
}

/// Find every shortest trace on `board`, using a [`Storage`] with the
/// configured discipline.
pub fn search(board: &Board, config: &SearchConfig) -> Result<Vec<PathState>, SearchError> {
    search_with_stats(board, config).map(|(paths, _)| paths)
}

/// Like [`search`], also returning the run's counters.
pub fn search_with_stats(
    board: &Board,
    config: &SearchConfig,
) -> Result<(Vec<PathState>, SearchStats), SearchError> {
    let mut tracer = Tracer::new(Storage::new(config.discipline), *config);
    let paths = tracer.run(board)?;
    Ok((paths, *tracer.stats()))
}
