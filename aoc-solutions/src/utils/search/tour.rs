//! Greedy value tour over a weighted graph under a time budget.
//!
//! Starting somewhere, repeatedly walk to the not-yet-activated node with the
//! best `remaining * value / (steps + 1)` ratio and activate it. Every edge
//! walked costs one time unit and every activation costs one more; an
//! activated node then yields `value` for each remaining unit.
//!
//! This is a greedy approximation and can miss the optimum: it never looks
//! more than one activation ahead. An exact answer needs a search over
//! subsets of valuable nodes, which is a different algorithm.

use log::debug;

use super::astar::{AStar, SearchLimits};
use super::error::SearchError;
use super::graph::Graph;

/// One time unit of a tour
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TourStep<N> {
    /// Walk one edge to `to`
    Traverse { to: N },
    /// Activate the current node, releasing `value` per remaining unit
    Activate { node: N, value: u64 },
}

/// Result of [`GreedyTour::plan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour<N> {
    steps: Vec<TourStep<N>>,
    time_budget: u32,
}

impl<N> Tour<N> {
    /// Steps in order; step `i` happens during time unit `i + 1`
    pub fn steps(&self) -> &[TourStep<N>] {
        &self.steps
    }

    pub fn time_budget(&self) -> u32 {
        self.time_budget
    }

    /// Time units spent walking and activating
    pub fn time_used(&self) -> u32 {
        u32::try_from(self.steps.len()).unwrap_or(u32::MAX)
    }

    /// Activated nodes in activation order
    pub fn activated(&self) -> impl Iterator<Item = &N> {
        self.steps.iter().filter_map(|step| match step {
            TourStep::Activate { node, .. } => Some(node),
            TourStep::Traverse { .. } => None,
        })
    }

    /// Total value released by the end of the budget.
    ///
    /// An activation finishing at time unit `t` contributes
    /// `value * (time_budget - t)`; steps past the budget contribute nothing.
    pub fn total_value(&self) -> u64 {
        let budget = u64::from(self.time_budget);
        self.steps
            .iter()
            .enumerate()
            .map(|(index, step)| match step {
                TourStep::Traverse { .. } => 0,
                TourStep::Activate { value, .. } => {
                    let finished_at = index as u64 + 1;
                    value * budget.saturating_sub(finished_at)
                }
            })
            .sum()
    }
}

/// Planner for a greedy tour over `graph`.
///
/// ```
/// use aoc_solutions::utils::search::{AdjacencyGraph, GreedyTour};
///
/// let mut graph = AdjacencyGraph::new();
/// graph.add_undirected_edge("AA", "BB", 1.0);
/// graph.add_undirected_edge("AA", "CC", 1.0);
///
/// let tour = GreedyTour::new(&graph, 10)
///     .plan(&"AA", [("BB", 5), ("CC", 20)])
///     .unwrap();
///
/// // CC first (20 per unit from t=2), back through AA to BB (5 per unit from t=5)
/// assert_eq!(tour.activated().copied().collect::<Vec<_>>(), vec!["CC", "BB"]);
/// assert_eq!(tour.total_value(), 20 * 8 + 5 * 5);
/// ```
pub struct GreedyTour<'g, G: Graph> {
    search: AStar<'g, G>,
    time_budget: u32,
}

/// Candidate chosen in one round
struct Choice<N> {
    index: usize,
    route: Vec<N>,
    /// Time to walk there plus one unit to activate
    cost: u64,
    value: u64,
}

impl<'g, G: Graph> GreedyTour<'g, G> {
    pub fn new(graph: &'g G, time_budget: u32) -> Self {
        Self {
            search: AStar::new(graph),
            time_budget,
        }
    }

    /// Limits applied to every shortest-path search the planner runs
    pub fn limits(mut self, limits: SearchLimits) -> Self {
        self.search = self.search.limits(limits);
        self
    }

    /// Plan a tour from `start` over `candidates` (`(node, value)` pairs).
    ///
    /// Zero-valued and unreachable candidates are ignored; ties go to the
    /// earlier candidate. Stops when no candidate can still release anything
    /// within the budget.
    pub fn plan<I>(&self, start: &G::Node, candidates: I) -> Result<Tour<G::Node>, SearchError>
    where
        I: IntoIterator<Item = (G::Node, u64)>,
    {
        let mut pending: Vec<(G::Node, u64)> = candidates
            .into_iter()
            .filter(|(_, value)| *value > 0)
            .collect();
        let mut steps = Vec::new();
        let mut remaining = u64::from(self.time_budget);
        let mut current = start.clone();

        while remaining > 0 {
            let Some(choice) = self.choose(&current, &pending, remaining)? else {
                break;
            };

            let (node, value) = pending.remove(choice.index);
            debug!(
                "activating candidate #{} (value {}) after {} steps, {} units left",
                choice.index,
                value,
                choice.cost - 1,
                remaining - choice.cost
            );
            steps.extend(
                choice
                    .route
                    .into_iter()
                    .skip(1)
                    .map(|to| TourStep::Traverse { to }),
            );
            steps.push(TourStep::Activate {
                node: node.clone(),
                value: choice.value,
            });
            remaining -= choice.cost;
            current = node;
        }

        Ok(Tour {
            steps,
            time_budget: self.time_budget,
        })
    }

    /// Best viable candidate from `current`, if any.
    fn choose(
        &self,
        current: &G::Node,
        pending: &[(G::Node, u64)],
        remaining: u64,
    ) -> Result<Option<Choice<G::Node>>, SearchError> {
        let mut best: Option<Choice<G::Node>> = None;
        for (index, (node, value)) in pending.iter().enumerate() {
            let path = match self.search.find_path(current, node) {
                Ok(path) => path,
                Err(SearchError::NoPathFound) => continue,
                Err(e) => return Err(e),
            };
            let cost = path.steps() as u64 + 1;
            if cost >= remaining {
                continue;
            }

            // Compare remaining * value / cost exactly: a/b > c/d <=> a*d > c*b
            let score = u128::from(remaining) * u128::from(*value);
            let better = best.as_ref().is_none_or(|b| {
                let best_score = u128::from(remaining) * u128::from(b.value);
                score * u128::from(b.cost) > best_score * u128::from(cost)
            });
            if better {
                best = Some(Choice {
                    index,
                    route: path.into_nodes(),
                    cost,
                    value: *value,
                });
            }
        }
        Ok(best)
    }
}
