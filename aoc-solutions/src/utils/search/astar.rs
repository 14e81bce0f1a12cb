//! A* / Dijkstra shortest-path search with a binary-heap frontier.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;
use std::time::{Duration, Instant};

use log::{debug, trace};

use super::error::{AbortReason, SearchError};
use super::graph::{Graph, Heuristic, Zero};

/// Expansions between two deadline checks
const DEADLINE_CHECK_INTERVAL: usize = 256;

/// Optional cutoffs that turn a long search into [`SearchError::SearchAborted`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of nodes to expand
    pub max_expansions: Option<usize>,
    /// Wall-clock instant after which the search gives up
    pub deadline: Option<Instant>,
}

impl SearchLimits {
    /// No limits at all
    pub const UNLIMITED: Self = Self {
        max_expansions: None,
        deadline: None,
    };

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Deadline `timeout` from now
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    fn check(&self, expanded: usize) -> Result<(), SearchError> {
        if self.max_expansions.is_some_and(|max| expanded >= max) {
            return Err(SearchError::SearchAborted {
                reason: AbortReason::ExpansionLimit,
                expanded,
            });
        }
        if let Some(deadline) = self.deadline
            && expanded % DEADLINE_CHECK_INTERVAL == 0
            && Instant::now() >= deadline
        {
            return Err(SearchError::SearchAborted {
                reason: AbortReason::Deadline,
                expanded,
            });
        }
        Ok(())
    }
}

/// A cheapest route, start and goal included.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<N> {
    nodes: Vec<N>,
    cost: f64,
    expanded: usize,
}

impl<N> Path<N> {
    /// Nodes from start to goal; never empty
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }

    /// Sum of the edge costs along the path
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of edges traversed
    pub fn steps(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Nodes the search expanded to find this path
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    pub fn start(&self) -> &N {
        &self.nodes[0]
    }

    pub fn goal(&self) -> &N {
        &self.nodes[self.nodes.len() - 1]
    }
}

/// Heap entry; the frontier pops the lowest `f`, then the earliest `seq`.
///
/// Entries are never removed when a node improves: an entry whose `g` is
/// above the node's current g-score, or whose node is closed, is stale and
/// skipped on pop. A closed node that improves is reopened with a fresh
/// insertion sequence.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    f: f64,
    g: f64,
    seq: u64,
    slot: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (max-heap) pops the smallest f first.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

struct NodeRecord<N> {
    node: N,
    g: f64,
    h: f64,
    came_from: Option<usize>,
    /// Insertion sequence while the node sits in the open set
    open_seq: Option<u64>,
    closed: bool,
}

/// Everything one search call owns; dropped when the call returns.
struct SearchState<N> {
    slots: HashMap<N, usize>,
    records: Vec<NodeRecord<N>>,
    open: BinaryHeap<FrontierEntry>,
    next_seq: u64,
    expanded: usize,
}

impl<N: Clone + Eq + Hash> SearchState<N> {
    fn new() -> Self {
        Self {
            slots: HashMap::new(),
            records: Vec::new(),
            open: BinaryHeap::new(),
            next_seq: 0,
            expanded: 0,
        }
    }

    fn slot(&self, node: &N) -> Option<usize> {
        self.slots.get(node).copied()
    }

    fn insert(&mut self, node: N, h: f64) -> usize {
        let slot = self.records.len();
        self.slots.insert(node.clone(), slot);
        self.records.push(NodeRecord {
            node,
            g: f64::INFINITY,
            h,
            came_from: None,
            open_seq: None,
            closed: false,
        });
        slot
    }

    /// Put `slot` in the open set with its current g-score. A node already
    /// open keeps its first insertion sequence.
    fn open(&mut self, slot: usize) {
        let seq = match self.records[slot].open_seq {
            Some(seq) => seq,
            None => {
                let seq = self.next_seq;
                self.next_seq += 1;
                self.records[slot].open_seq = Some(seq);
                seq
            }
        };
        let record = &self.records[slot];
        self.open.push(FrontierEntry {
            f: record.g + record.h,
            g: record.g,
            seq,
            slot,
        });
    }

    /// Pop the best live frontier entry and close its node.
    fn pop(&mut self) -> Option<usize> {
        while let Some(entry) = self.open.pop() {
            let record = &mut self.records[entry.slot];
            if record.closed || entry.g > record.g {
                continue;
            }
            record.closed = true;
            record.open_seq = None;
            return Some(entry.slot);
        }
        None
    }

    fn reconstruct(&self, goal: usize) -> Vec<N> {
        let mut nodes = Vec::new();
        let mut current = Some(goal);
        while let Some(slot) = current {
            let record = &self.records[slot];
            nodes.push(record.node.clone());
            current = record.came_from;
        }
        nodes.reverse();
        nodes
    }
}

/// Configured shortest-path search over a borrowed graph.
///
/// ```
/// use aoc_solutions::utils::search::{AdjacencyGraph, AStar};
///
/// let mut graph = AdjacencyGraph::new();
/// graph.add_undirected_edge("A", "B", 1.0);
/// graph.add_undirected_edge("B", "C", 1.0);
///
/// let path = AStar::new(&graph).find_path(&"A", &"C").unwrap();
/// assert_eq!(path.nodes(), &["A", "B", "C"]);
/// assert_eq!(path.cost(), 2.0);
/// ```
///
/// A closure heuristic needs its parameter type spelled out:
///
/// ```
/// use aoc_solutions::utils::search::{AdjacencyGraph, AStar};
///
/// let mut graph = AdjacencyGraph::new();
/// for x in 0..4i32 {
///     graph.add_undirected_edge(x, x + 1, 1.0);
/// }
/// let path = AStar::new(&graph)
///     .heuristic(|n: &i32| f64::from(4 - *n))
///     .find_path(&0, &4)
///     .unwrap();
/// assert_eq!(path.steps(), 4);
/// ```
pub struct AStar<'g, G: Graph, H = Zero> {
    graph: &'g G,
    heuristic: H,
    limits: SearchLimits,
}

impl<'g, G: Graph> AStar<'g, G, Zero> {
    /// Search `graph` with the zero heuristic and no limits
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            heuristic: Zero,
            limits: SearchLimits::UNLIMITED,
        }
    }
}

impl<'g, G, H> AStar<'g, G, H>
where
    G: Graph,
    H: Heuristic<G::Node>,
{
    /// Replace the heuristic
    pub fn heuristic<H2: Heuristic<G::Node>>(self, heuristic: H2) -> AStar<'g, G, H2> {
        AStar {
            graph: self.graph,
            heuristic,
            limits: self.limits,
        }
    }

    pub fn limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Lowest-cost path from `start` to `goal`.
    ///
    /// # Errors
    ///
    /// - [`SearchError::NoPathFound`] when the open set empties first
    /// - [`SearchError::SearchAborted`] when a limit is hit
    /// - [`SearchError::InvalidEdgeCost`], [`SearchError::InvalidHeuristic`]
    ///   and [`SearchError::UnknownNode`] on precondition violations
    pub fn find_path(
        &self,
        start: &G::Node,
        goal: &G::Node,
    ) -> Result<Path<G::Node>, SearchError> {
        if !self.graph.contains(start) {
            return Err(SearchError::UnknownNode("start"));
        }
        if !self.graph.contains(goal) {
            return Err(SearchError::UnknownNode("goal"));
        }

        let mut state = SearchState::new();
        let start_slot = state.insert(start.clone(), self.estimate(start)?);
        state.records[start_slot].g = 0.0;
        state.open(start_slot);

        let mut buf = Vec::new();
        while let Some(current) = state.pop() {
            if state.records[current].node == *goal {
                let cost = state.records[current].g;
                let nodes = state.reconstruct(current);
                debug!(
                    "path found: cost {}, {} steps, {} nodes expanded",
                    cost,
                    nodes.len() - 1,
                    state.expanded
                );
                return Ok(Path {
                    nodes,
                    cost,
                    expanded: state.expanded,
                });
            }

            self.limits.check(state.expanded)?;
            state.expanded += 1;

            let node = state.records[current].node.clone();
            let g = state.records[current].g;
            trace!("expanding node #{} at g = {}", state.expanded, g);

            buf.clear();
            self.graph.neighbors(&node, &mut buf);
            for neighbor in buf.drain(..) {
                let cost = self.graph.edge_cost(&node, &neighbor);
                if cost.is_nan() || cost < 0.0 {
                    return Err(SearchError::InvalidEdgeCost { cost });
                }
                let tentative = g + cost;
                if !tentative.is_finite() {
                    continue;
                }

                let slot = match state.slot(&neighbor) {
                    Some(slot) => slot,
                    None => {
                        let h = self.estimate(&neighbor)?;
                        state.insert(neighbor, h)
                    }
                };
                let record = &mut state.records[slot];
                if tentative >= record.g {
                    continue;
                }
                if record.closed {
                    trace!("reopening node at g = {}", tentative);
                    record.closed = false;
                }
                record.g = tentative;
                record.came_from = Some(current);
                state.open(slot);
            }
        }

        debug!("no path found after expanding {} nodes", state.expanded);
        Err(SearchError::NoPathFound)
    }

    fn estimate(&self, node: &G::Node) -> Result<f64, SearchError> {
        let estimate = self.heuristic.estimate(node);
        if estimate.is_nan() || estimate < 0.0 {
            return Err(SearchError::InvalidHeuristic { estimate });
        }
        Ok(estimate)
    }
}

/// A* from `start` to `goal` with `heuristic` and no limits.
pub fn astar<G, H>(
    graph: &G,
    start: &G::Node,
    goal: &G::Node,
    heuristic: H,
) -> Result<Path<G::Node>, SearchError>
where
    G: Graph,
    H: Heuristic<G::Node>,
{
    AStar::new(graph).heuristic(heuristic).find_path(start, goal)
}

/// Plain Dijkstra: A* with the zero heuristic.
pub fn dijkstra<G: Graph>(
    graph: &G,
    start: &G::Node,
    goal: &G::Node,
) -> Result<Path<G::Node>, SearchError> {
    AStar::new(graph).find_path(start, goal)
}
