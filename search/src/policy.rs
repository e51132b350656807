//! `SearchPolicy`: search mode, top-K sizing, and return-policy selection.

use crate::error::SearchError;

/// Which pruning discipline the driver runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Only sound prunings are enabled (feasibility + admissible upper
    /// bound). No per-slot candidate truncation. The returned top-K is
    /// exactly what brute-force enumeration would produce.
    Exhaustive,
    /// The driver additionally trims each slot's candidate list to the
    /// top-N by a cheap per-rune heuristic. Accuracy is not guaranteed.
    Fast,
}

/// How the ranked result list is assembled from the bounded top-K.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnPolicy {
    /// The `top_n` highest-scoring builds.
    TopN,
    /// Every build whose objective value equals the maximum, up to `top_n`.
    AllAtBest,
}

/// Search-specific budget and mode configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    pub mode: SearchMode,
    /// Bound on the number of retained results (`k` in the search pseudocode).
    pub top_n: u64,
    pub return_policy: ReturnPolicy,
    /// Bypass `top_n` entirely and return every feasible build.
    pub return_all: bool,
    /// `Fast` mode's per-slot candidate cap. Ignored in `Exhaustive` mode.
    pub fast_candidates_per_slot: u64,
    /// Hard cap on DFS node expansions, as a safety rail against runaway
    /// searches; large enough that it never binds a realistic exhaustive
    /// run (worst case `Π|candidates_per_slot|`, bounded by pruning).
    pub max_expansions: u64,
}

impl SearchPolicy {
    /// Validate this policy before any search step runs.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::ZeroTopN`], [`SearchError::ZeroFastCandidateCap`],
    /// or [`SearchError::ZeroExpansionBudget`] for the corresponding
    /// nonsensical configuration.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.top_n == 0 {
            return Err(SearchError::ZeroTopN);
        }
        if self.mode == SearchMode::Fast && self.fast_candidates_per_slot == 0 {
            return Err(SearchError::ZeroFastCandidateCap);
        }
        if self.max_expansions == 0 {
            return Err(SearchError::ZeroExpansionBudget);
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            mode: SearchMode::Exhaustive,
            top_n: 10,
            return_policy: ReturnPolicy::TopN,
            return_all: false,
            fast_candidates_per_slot: 20,
            max_expansions: 50_000_000,
        }
    }
}
