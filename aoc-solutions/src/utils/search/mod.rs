//! Weighted-graph shortest-path search.
//!
//! One A*/Dijkstra hybrid parameterized by a [`Graph`] (neighbors and edge
//! costs) and an optional [`Heuristic`], plus two thin layers on top:
//!
//! - [`shortest_from_any`] / [`par_shortest_from_any`]: the best of several
//!   independent searches toward one goal,
//! - [`GreedyTour`]: a greedy time-budgeted tour that uses the search for
//!   every leg.
//!
//! # Costs
//!
//! Edge costs are `f64`. `f64::INFINITY` means "no edge here" and is simply
//! skipped; negative or NaN costs are rejected with
//! [`SearchError::InvalidEdgeCost`].
//!
//! # Determinism
//!
//! The frontier pops the lowest `g + h`; ties go to the node that entered the
//! open set first. Node values are never compared, so `Node` only needs
//! `Eq + Hash`.
//!
//! # Example: grid with a forbidden climb
//!
//! ```rust
//! use aoc_solutions::utils::search::{astar, Graph, SearchError};
//!
//! /// A 1-D strip of elevations; climbing more than one level is forbidden.
//! struct Strip(Vec<u8>);
//!
//! impl Graph for Strip {
//!     type Node = usize;
//!
//!     fn neighbors(&self, node: &usize, buf: &mut Vec<usize>) {
//!         if *node > 0 {
//!             buf.push(node - 1);
//!         }
//!         if node + 1 < self.0.len() {
//!             buf.push(node + 1);
//!         }
//!     }
//!
//!     fn edge_cost(&self, from: &usize, to: &usize) -> f64 {
//!         if self.0[*to] > self.0[*from] + 1 { f64::INFINITY } else { 1.0 }
//!     }
//!
//!     fn contains(&self, node: &usize) -> bool {
//!         *node < self.0.len()
//!     }
//! }
//!
//! let strip = Strip(vec![0, 1, 2, 4]);
//! let to_goal = |n: &usize| (2 - *n.min(&2)) as f64;
//! assert_eq!(astar(&strip, &0, &2, to_goal).unwrap().steps(), 2);
//! assert_eq!(astar(&strip, &0, &3, |_: &usize| 0.0), Err(SearchError::NoPathFound));
//! ```

mod astar;
mod error;
mod graph;
mod multi_source;
mod tour;

pub use astar::{astar, dijkstra, AStar, Path, SearchLimits};
pub use error::{AbortReason, SearchError};
pub use graph::{AdjacencyGraph, Graph, Heuristic, Zero};
pub use multi_source::{par_shortest_from_any, shortest_from_any, shortest_from_any_with_limits};
pub use tour::{GreedyTour, Tour, TourStep};

#[cfg(test)]
mod tests;
