//! Search failures.

use aoc_solver::SolveError;
use thiserror::Error;

/// Which limit stopped a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// `SearchLimits::max_expansions` was reached
    ExpansionLimit,
    /// `SearchLimits::deadline` passed
    Deadline,
}

impl std::fmt::Display for AbortReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbortReason::ExpansionLimit => f.write_str("expansion limit reached"),
            AbortReason::Deadline => f.write_str("deadline passed"),
        }
    }
}

/// Error returned by every search entry point.
///
/// `NoPathFound` is the expected, recoverable outcome (try another start);
/// `SearchAborted` means a limit stopped the search before it could decide.
/// The remaining variants are caller precondition violations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("no path found: goal is unreachable from start")]
    NoPathFound,

    #[error("search aborted ({reason}) after expanding {expanded} nodes")]
    SearchAborted { reason: AbortReason, expanded: usize },

    #[error("invalid edge cost {cost}: costs must be non-negative or +infinity")]
    InvalidEdgeCost { cost: f64 },

    #[error("invalid heuristic estimate {estimate}: estimates must be non-negative")]
    InvalidHeuristic { estimate: f64 },

    #[error("{0} node is not part of the graph")]
    UnknownNode(&'static str),
}

impl From<SearchError> for SolveError {
    fn from(e: SearchError) -> Self {
        SolveError::SolveFailed(Box::new(e))
    }
}
