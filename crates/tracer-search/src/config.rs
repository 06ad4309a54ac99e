//! Search options.

use crate::frontier::Discipline;

/// Options for one search run.
///
/// The defaults reproduce the reference behaviour: depth-first order and
/// no pruning.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Frontier discipline used by [`search`](crate::search).
    pub discipline: Discipline,
    /// Drop incomplete branches that are already as long as the best
    /// completed trace. Explores fewer states; the result set is unchanged.
    pub prune: bool,
}

impl SearchConfig {
    /// Set the frontier discipline (builder).
    #[inline]
    pub const fn with_discipline(mut self, discipline: Discipline) -> Self {
        self.discipline = discipline;
        self
    }

    /// Enable or disable pruning (builder).
    #[inline]
    pub const fn with_prune(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_behaviour() {
        let c = SearchConfig::default();
        assert_eq!(c.discipline, Discipline::Stack);
        assert!(!c.prune);
    }

    #[test]
    fn builders() {
        let c = SearchConfig::default()
            .with_discipline(Discipline::Queue)
            .with_prune(true);
        assert_eq!(
            c,
            SearchConfig {
                discipline: Discipline::Queue,
                prune: true
            }
        );
    }
}
