//! Graph and heuristic capabilities consumed by the search.

use std::collections::HashMap;
use std::hash::Hash;

/// A weighted graph the search can walk.
///
/// The graph may be defined lazily; only nodes reachable from the start are
/// ever asked for their neighbors.
pub trait Graph {
    /// Position in the search space. Equality and hashing identify a node;
    /// no ordering is needed.
    type Node: Clone + Eq + Hash;

    /// Append the neighbors of `node` to `buf`. The caller clears `buf`
    /// before calling.
    fn neighbors(&self, node: &Self::Node, buf: &mut Vec<Self::Node>);

    /// Cost of the edge `from -> to`: non-negative, or `f64::INFINITY`
    /// when the edge is forbidden.
    fn edge_cost(&self, from: &Self::Node, to: &Self::Node) -> f64;

    /// Whether `node` belongs to the graph. Bounded graphs override this so
    /// that a bad start or goal fails fast instead of searching forever.
    fn contains(&self, _node: &Self::Node) -> bool {
        true
    }
}

/// Estimated remaining cost from a node to the goal.
///
/// Must never overestimate (admissible) for the returned path to be optimal;
/// an overestimating heuristic still terminates.
pub trait Heuristic<N> {
    fn estimate(&self, node: &N) -> f64;
}

/// The zero heuristic: turns A* into Dijkstra.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zero;

impl<N> Heuristic<N> for Zero {
    #[inline]
    fn estimate(&self, _node: &N) -> f64 {
        0.0
    }
}

impl<N, F> Heuristic<N> for F
where
    F: Fn(&N) -> f64,
{
    #[inline]
    fn estimate(&self, node: &N) -> f64 {
        self(node)
    }
}

/// Sparse graph stored as adjacency lists.
///
/// Neighbors are reported in the order their edges were added, which keeps
/// tie-breaking in the search deterministic.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N> {
    order: Vec<N>,
    edges: HashMap<N, Vec<(N, f64)>>,
}

impl<N: Clone + Eq + Hash> AdjacencyGraph<N> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            edges: HashMap::new(),
        }
    }

    /// Add `node` without edges; no-op if it is already present.
    pub fn add_node(&mut self, node: N) {
        if !self.edges.contains_key(&node) {
            self.order.push(node.clone());
            self.edges.insert(node, Vec::new());
        }
    }

    /// Add the directed edge `from -> to`, replacing the cost of an existing
    /// edge between the same nodes.
    pub fn add_edge(&mut self, from: N, to: N, cost: f64) {
        self.add_node(from.clone());
        self.add_node(to.clone());
        let list = self.edges.entry(from).or_default();
        match list.iter_mut().find(|(n, _)| *n == to) {
            Some(edge) => edge.1 = cost,
            None => list.push((to, cost)),
        }
    }

    /// Add `a -> b` and `b -> a` with the same cost.
    pub fn add_undirected_edge(&mut self, a: N, b: N, cost: f64) {
        self.add_edge(a.clone(), b.clone(), cost);
        self.add_edge(b, a, cost);
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<N: Clone + Eq + Hash> Default for AdjacencyGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone + Eq + Hash> Graph for AdjacencyGraph<N> {
    type Node = N;

    fn neighbors(&self, node: &N, buf: &mut Vec<N>) {
        if let Some(list) = self.edges.get(node) {
            buf.extend(list.iter().map(|(n, _)| n.clone()));
        }
    }

    fn edge_cost(&self, from: &N, to: &N) -> f64 {
        self.edges
            .get(from)
            .and_then(|list| list.iter().find(|(n, _)| n == to))
            .map_or(f64::INFINITY, |(_, cost)| *cost)
    }

    fn contains(&self, node: &N) -> bool {
        self.edges.contains_key(node)
    }
}
