//! Best path to a fixed goal from any of several starts.
//!
//! Each candidate runs its own independent search; nothing is shared between
//! them except the read-only graph, which is what makes the parallel variant
//! trivial.

use log::debug;
use rayon::prelude::*;

use super::astar::{AStar, Path, SearchLimits};
use super::error::SearchError;
use super::graph::{Graph, Heuristic};

/// Keep the cheaper of two candidates; equal costs keep the earlier one.
fn better<N>(a: Option<(usize, Path<N>)>, b: Option<(usize, Path<N>)>) -> Option<(usize, Path<N>)> {
    match (a, b) {
        (None, other) | (other, None) => other,
        (Some(a), Some(b)) => {
            let b_wins = b.1.cost() < a.1.cost() || (b.1.cost() == a.1.cost() && b.0 < a.0);
            Some(if b_wins { b } else { a })
        }
    }
}

fn search_one<G, H>(
    graph: &G,
    heuristic: &H,
    limits: SearchLimits,
    index: usize,
    start: &G::Node,
    goal: &G::Node,
) -> Result<Option<(usize, Path<G::Node>)>, SearchError>
where
    G: Graph,
    H: Heuristic<G::Node>,
{
    let search = AStar::new(graph)
        .heuristic(|node: &G::Node| heuristic.estimate(node))
        .limits(limits);
    match search.find_path(start, goal) {
        Ok(path) => Ok(Some((index, path))),
        Err(SearchError::NoPathFound) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Cheapest path to `goal` from any node in `starts`.
///
/// Starts that cannot reach the goal are skipped. Equal costs resolve to the
/// earliest start. Returns [`SearchError::NoPathFound`] when no start reaches
/// the goal; any other error stops the whole query.
pub fn shortest_from_any<G, H, I>(
    graph: &G,
    starts: I,
    goal: &G::Node,
    heuristic: &H,
) -> Result<Path<G::Node>, SearchError>
where
    G: Graph,
    H: Heuristic<G::Node>,
    I: IntoIterator<Item = G::Node>,
{
    shortest_from_any_with_limits(graph, starts, goal, heuristic, SearchLimits::UNLIMITED)
}

/// [`shortest_from_any`] where every individual search obeys `limits`.
pub fn shortest_from_any_with_limits<G, H, I>(
    graph: &G,
    starts: I,
    goal: &G::Node,
    heuristic: &H,
    limits: SearchLimits,
) -> Result<Path<G::Node>, SearchError>
where
    G: Graph,
    H: Heuristic<G::Node>,
    I: IntoIterator<Item = G::Node>,
{
    let mut best = None;
    let mut candidates = 0usize;
    for (index, start) in starts.into_iter().enumerate() {
        candidates += 1;
        let found = search_one(graph, heuristic, limits, index, &start, goal)?;
        best = better(best, found);
    }
    finish(best, candidates)
}

/// Parallel [`shortest_from_any`] on the current rayon pool; same result.
pub fn par_shortest_from_any<G, H>(
    graph: &G,
    starts: &[G::Node],
    goal: &G::Node,
    heuristic: &H,
) -> Result<Path<G::Node>, SearchError>
where
    G: Graph + Sync,
    G::Node: Send + Sync,
    H: Heuristic<G::Node> + Sync,
{
    let best = starts
        .par_iter()
        .enumerate()
        .map(|(index, start)| {
            search_one(graph, heuristic, SearchLimits::UNLIMITED, index, start, goal)
        })
        .try_reduce(|| None, |a, b| Ok(better(a, b)))?;
    finish(best, starts.len())
}

fn finish<N>(best: Option<(usize, Path<N>)>, candidates: usize) -> Result<Path<N>, SearchError> {
    match best {
        Some((index, path)) => {
            debug!(
                "best of {} starts is #{} with cost {}",
                candidates,
                index,
                path.cost()
            );
            Ok(path)
        }
        None => Err(SearchError::NoPathFound),
    }
}
