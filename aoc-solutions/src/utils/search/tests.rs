//! Tests for the search module.

use std::time::{Duration, Instant};

use proptest::prelude::*;

use super::*;

fn line_graph() -> AdjacencyGraph<&'static str> {
    let mut graph = AdjacencyGraph::new();
    graph.add_undirected_edge("A", "B", 1.0);
    graph.add_undirected_edge("B", "C", 1.0);
    graph
}

/// Elevation grid, (x, y) with y = 0 at the top. One step may climb at most
/// one level.
struct Elevations {
    rows: Vec<Vec<u8>>,
}

impl Elevations {
    fn new(rows: &[&str]) -> Self {
        Self {
            rows: rows.iter().map(|r| r.bytes().collect()).collect(),
        }
    }

    fn width(&self) -> i32 {
        self.rows[0].len() as i32
    }

    fn height(&self) -> i32 {
        self.rows.len() as i32
    }

    fn at(&self, (x, y): (i32, i32)) -> u8 {
        self.rows[y as usize][x as usize]
    }
}

impl Graph for Elevations {
    type Node = (i32, i32);

    fn neighbors(&self, &(x, y): &(i32, i32), buf: &mut Vec<(i32, i32)>) {
        for (dx, dy) in [(-1, 0), (0, -1), (1, 0), (0, 1)] {
            let next = (x + dx, y + dy);
            if self.contains(&next) {
                buf.push(next);
            }
        }
    }

    fn edge_cost(&self, from: &(i32, i32), to: &(i32, i32)) -> f64 {
        if self.at(*to) > self.at(*from) + 1 {
            f64::INFINITY
        } else {
            1.0
        }
    }

    fn contains(&self, &(x, y): &(i32, i32)) -> bool {
        (0..self.width()).contains(&x) && (0..self.height()).contains(&y)
    }
}

fn euclidean(goal: (i32, i32)) -> impl Fn(&(i32, i32)) -> f64 {
    move |&(x, y): &(i32, i32)| f64::from((x - goal.0).pow(2) + (y - goal.1).pow(2)).sqrt()
}

// ----------------------------------------------------------------------------
// Concrete scenarios
// ----------------------------------------------------------------------------

#[test]
fn test_line_graph_path() {
    let path = dijkstra(&line_graph(), &"A", &"C").unwrap();
    assert_eq!(path.nodes(), &["A", "B", "C"]);
    assert_eq!(path.cost(), 2.0);
    assert_eq!(path.steps(), 2);
    assert_eq!(*path.start(), "A");
    assert_eq!(*path.goal(), "C");
}

#[test]
fn test_disconnected_nodes() {
    let mut graph = AdjacencyGraph::new();
    graph.add_node("A");
    graph.add_node("B");
    assert_eq!(dijkstra(&graph, &"A", &"B"), Err(SearchError::NoPathFound));
}

#[test]
fn test_start_equals_goal() {
    let path = dijkstra(&line_graph(), &"B", &"B").unwrap();
    assert_eq!(path.nodes(), &["B"]);
    assert_eq!(path.cost(), 0.0);
    assert_eq!(path.expanded(), 0);
}

#[test]
fn test_only_infinite_edges_is_unreachable() {
    let mut graph = AdjacencyGraph::new();
    graph.add_edge("A", "B", f64::INFINITY);
    graph.add_edge("B", "C", 1.0);
    assert_eq!(dijkstra(&graph, &"A", &"C"), Err(SearchError::NoPathFound));
}

#[test]
fn test_directed_edges() {
    let mut graph = AdjacencyGraph::new();
    graph.add_edge("A", "B", 1.0);
    assert!(dijkstra(&graph, &"A", &"B").is_ok());
    assert_eq!(dijkstra(&graph, &"B", &"A"), Err(SearchError::NoPathFound));
}

#[test]
fn test_five_by_five_grid_detour() {
    // The only way up is the serpentine through the `b`/`c` row.
    let grid = Elevations::new(&["deeee", "ceeee", "cccbb", "eeeeb", "aaaaa"]);
    let (start, goal) = ((0, 4), (4, 0));

    let path = astar(&grid, &start, &goal, euclidean(goal)).unwrap();
    assert_eq!(path.steps(), 16);
    assert_eq!(path.cost(), 16.0);
    assert_eq!(dijkstra(&grid, &start, &goal).unwrap().steps(), 16);

    for pair in path.nodes().windows(2) {
        assert!(grid.at(pair[1]) <= grid.at(pair[0]) + 1);
    }
}

#[test]
fn test_five_by_five_grid_no_ascent_possible() {
    let grid = Elevations::new(&["eeeee", "eeeee", "eeeee", "eeeee", "aaaaa"]);
    assert_eq!(
        astar(&grid, &(0, 4), &(4, 0), euclidean((4, 0))),
        Err(SearchError::NoPathFound)
    );
}

#[test]
fn test_ties_prefer_earliest_insertion() {
    let mut graph = AdjacencyGraph::new();
    graph.add_edge("A", "B", 1.0);
    graph.add_edge("A", "C", 1.0);
    graph.add_edge("B", "D", 1.0);
    graph.add_edge("C", "D", 1.0);
    assert_eq!(dijkstra(&graph, &"A", &"D").unwrap().nodes(), &["A", "B", "D"]);

    let mut graph = AdjacencyGraph::new();
    graph.add_edge("A", "C", 1.0);
    graph.add_edge("A", "B", 1.0);
    graph.add_edge("B", "D", 1.0);
    graph.add_edge("C", "D", 1.0);
    assert_eq!(dijkstra(&graph, &"A", &"D").unwrap().nodes(), &["A", "C", "D"]);
}

#[test]
fn test_cheaper_longer_route_wins() {
    let mut graph = AdjacencyGraph::new();
    graph.add_edge("A", "D", 10.0);
    graph.add_edge("A", "B", 1.0);
    graph.add_edge("B", "C", 1.0);
    graph.add_edge("C", "D", 1.0);
    let path = dijkstra(&graph, &"A", &"D").unwrap();
    assert_eq!(path.nodes(), &["A", "B", "C", "D"]);
    assert_eq!(path.cost(), 3.0);
}

#[test]
fn test_zero_cost_edges() {
    let mut graph = AdjacencyGraph::new();
    graph.add_edge(0, 1, 0.0);
    graph.add_edge(1, 2, 0.0);
    graph.add_edge(0, 2, 0.5);
    let path = dijkstra(&graph, &0, &2).unwrap();
    assert_eq!(path.nodes(), &[0, 1, 2]);
    assert_eq!(path.cost(), 0.0);
}

#[test]
fn test_heuristic_expands_fewer_nodes() {
    let grid = Elevations::new(&["aaaaaaaaaa"; 10]);
    let goal = (9, 0);

    let informed = astar(&grid, &(0, 0), &goal, euclidean(goal)).unwrap();
    let blind = dijkstra(&grid, &(0, 0), &goal).unwrap();

    assert_eq!(informed.cost(), blind.cost());
    assert_eq!(informed.steps(), 9);
    assert_eq!(informed.expanded(), 9);
    assert!(informed.expanded() < blind.expanded());
}

#[test]
fn test_inconsistent_heuristic_reopens_closed_node() {
    // h(B) = 3 is admissible but inconsistent: C is first closed through A at
    // g = 3, then improved to g = 2 through B.
    let mut graph = AdjacencyGraph::new();
    graph.add_edge("S", "A", 1.0);
    graph.add_edge("S", "B", 2.0);
    graph.add_edge("A", "C", 2.0);
    graph.add_edge("B", "C", 0.0);
    graph.add_edge("C", "G", 3.0);
    let heuristic = |n: &&str| if *n == "B" { 3.0 } else { 0.0 };

    let path = astar(&graph, &"S", &"G", heuristic).unwrap();
    assert_eq!(path.nodes(), &["S", "B", "C", "G"]);
    assert_eq!(path.cost(), 5.0);
    assert_eq!(path.expanded(), 5);
    assert_eq!(path.cost(), dijkstra(&graph, &"S", &"G").unwrap().cost());
}

// ----------------------------------------------------------------------------
// Preconditions and limits
// ----------------------------------------------------------------------------

#[test]
fn test_negative_edge_cost_rejected() {
    let mut graph = AdjacencyGraph::new();
    graph.add_edge("A", "B", -1.0);
    assert_eq!(
        dijkstra(&graph, &"A", &"B"),
        Err(SearchError::InvalidEdgeCost { cost: -1.0 })
    );
}

#[test]
fn test_nan_edge_cost_rejected() {
    let mut graph = AdjacencyGraph::new();
    graph.add_edge("A", "B", f64::NAN);
    assert!(matches!(
        dijkstra(&graph, &"A", &"B"),
        Err(SearchError::InvalidEdgeCost { cost }) if cost.is_nan()
    ));
}

#[test]
fn test_negative_heuristic_rejected() {
    let result = astar(&line_graph(), &"A", &"C", |_: &&str| -1.0);
    assert_eq!(result, Err(SearchError::InvalidHeuristic { estimate: -1.0 }));
}

#[test]
fn test_unknown_nodes_rejected() {
    let graph = line_graph();
    assert_eq!(dijkstra(&graph, &"X", &"A"), Err(SearchError::UnknownNode("start")));
    assert_eq!(dijkstra(&graph, &"A", &"X"), Err(SearchError::UnknownNode("goal")));

    let grid = Elevations::new(&["ab"]);
    assert_eq!(dijkstra(&grid, &(0, 0), &(5, 0)), Err(SearchError::UnknownNode("goal")));
}

fn chain(len: u32) -> AdjacencyGraph<u32> {
    let mut graph = AdjacencyGraph::new();
    for n in 0..len {
        graph.add_edge(n, n + 1, 1.0);
    }
    graph
}

#[test]
fn test_expansion_limit_aborts() {
    let graph = chain(10);
    let result = AStar::new(&graph)
        .limits(SearchLimits::default().with_max_expansions(3))
        .find_path(&0, &10);
    assert_eq!(
        result,
        Err(SearchError::SearchAborted {
            reason: AbortReason::ExpansionLimit,
            expanded: 3,
        })
    );
}

#[test]
fn test_expansion_limit_large_enough() {
    let graph = chain(10);
    let path = AStar::new(&graph)
        .limits(SearchLimits::default().with_max_expansions(10))
        .find_path(&0, &10)
        .unwrap();
    assert_eq!(path.steps(), 10);
    assert_eq!(path.expanded(), 10);
}

#[test]
fn test_unreachable_within_limit_is_not_an_abort() {
    let mut graph = chain(3);
    graph.add_node(99);
    let result = AStar::new(&graph)
        .limits(SearchLimits::default().with_max_expansions(100))
        .find_path(&0, &99);
    assert_eq!(result, Err(SearchError::NoPathFound));
}

#[test]
fn test_past_deadline_aborts() {
    let graph = chain(10);
    let result = AStar::new(&graph)
        .limits(SearchLimits::default().with_deadline(Instant::now() - Duration::from_millis(1)))
        .find_path(&0, &10);
    assert!(matches!(
        result,
        Err(SearchError::SearchAborted {
            reason: AbortReason::Deadline,
            ..
        })
    ));
}

#[test]
fn test_generous_timeout_finishes() {
    let graph = chain(10);
    let path = AStar::new(&graph)
        .limits(SearchLimits::UNLIMITED.with_timeout(Duration::from_secs(60)))
        .find_path(&0, &10)
        .unwrap();
    assert_eq!(path.steps(), 10);
}

// ----------------------------------------------------------------------------
// Adjacency graph
// ----------------------------------------------------------------------------

#[test]
fn test_adjacency_graph_bookkeeping() {
    let mut graph = AdjacencyGraph::new();
    graph.add_edge("B", "A", 4.0);
    graph.add_edge("B", "A", 2.0);
    graph.add_node("C");

    assert_eq!(graph.nodes().copied().collect::<Vec<_>>(), vec!["B", "A", "C"]);
    assert_eq!(graph.len(), 3);
    assert_eq!(graph.edge_cost(&"B", &"A"), 2.0);
    assert_eq!(graph.edge_cost(&"A", &"B"), f64::INFINITY);

    let mut buf = Vec::new();
    graph.neighbors(&"B", &mut buf);
    assert_eq!(buf, vec!["A"]);
}

// ----------------------------------------------------------------------------
// Multi-source
// ----------------------------------------------------------------------------

fn spokes() -> AdjacencyGraph<&'static str> {
    // far -> mid -> goal, near -> goal, lonely is isolated
    let mut graph = AdjacencyGraph::new();
    graph.add_edge("far", "mid", 1.0);
    graph.add_edge("mid", "goal", 1.0);
    graph.add_edge("near", "goal", 1.0);
    graph.add_edge("twin", "goal", 1.0);
    graph.add_node("lonely");
    graph
}

#[test]
fn test_multi_source_picks_cheapest() {
    let graph = spokes();
    let path = shortest_from_any(&graph, ["lonely", "far", "near"], &"goal", &Zero).unwrap();
    assert_eq!(path.nodes(), &["near", "goal"]);
}

#[test]
fn test_multi_source_tie_goes_to_first_candidate() {
    let graph = spokes();
    let path = shortest_from_any(&graph, ["twin", "near"], &"goal", &Zero).unwrap();
    assert_eq!(*path.start(), "twin");

    let path = par_shortest_from_any(&graph, &["twin", "near"], &"goal", &Zero).unwrap();
    assert_eq!(*path.start(), "twin");
}

#[test]
fn test_multi_source_none_reachable() {
    let graph = spokes();
    assert_eq!(
        shortest_from_any(&graph, ["lonely"], &"goal", &Zero),
        Err(SearchError::NoPathFound)
    );
    assert_eq!(
        shortest_from_any(&graph, Vec::<&str>::new(), &"goal", &Zero),
        Err(SearchError::NoPathFound)
    );
    assert_eq!(
        par_shortest_from_any(&graph, &["lonely"], &"goal", &Zero),
        Err(SearchError::NoPathFound)
    );
}

#[test]
fn test_multi_source_propagates_aborts() {
    let graph = chain(10);
    let result = shortest_from_any_with_limits(
        &graph,
        [0, 9],
        &10,
        &Zero,
        SearchLimits::default().with_max_expansions(2),
    );
    assert!(matches!(result, Err(SearchError::SearchAborted { .. })));
}

#[test]
fn test_multi_source_on_grid() {
    let grid = Elevations::new(&["aaca", "abcd", "aaae"]);
    let goal = (3, 2);
    let starts: Vec<(i32, i32)> = (0..grid.height())
        .flat_map(|y| (0..grid.width()).map(move |x| (x, y)))
        .filter(|p| grid.at(*p) == b'a')
        .collect();

    let seq = shortest_from_any(&grid, starts.iter().copied(), &goal, &euclidean(goal)).unwrap();
    let par = par_shortest_from_any(&grid, &starts, &goal, &euclidean(goal)).unwrap();
    assert_eq!(seq, par);
    assert_eq!(seq.steps(), 4);
    assert_eq!(*seq.start(), (1, 0));
}

// ----------------------------------------------------------------------------
// Greedy tour
// ----------------------------------------------------------------------------

/// AA - BB - CC - DD in a line, EE hanging off AA
fn tunnels() -> AdjacencyGraph<&'static str> {
    let mut graph = AdjacencyGraph::new();
    graph.add_undirected_edge("AA", "BB", 1.0);
    graph.add_undirected_edge("BB", "CC", 1.0);
    graph.add_undirected_edge("CC", "DD", 1.0);
    graph.add_undirected_edge("AA", "EE", 1.0);
    graph
}

#[test]
fn test_tour_prefers_value_per_time() {
    let graph = tunnels();
    // From AA: BB 10/2, DD 30/4, EE 12/2 -> DD (7.5) wins over EE (6) and BB (5).
    let tour = GreedyTour::new(&graph, 20)
        .plan(&"AA", [("BB", 10), ("DD", 30), ("EE", 12)])
        .unwrap();

    assert_eq!(tour.activated().copied().collect::<Vec<_>>(), vec!["DD", "BB", "EE"]);
    assert_eq!(
        tour.steps(),
        &[
            TourStep::Traverse { to: "BB" },
            TourStep::Traverse { to: "CC" },
            TourStep::Traverse { to: "DD" },
            TourStep::Activate { node: "DD", value: 30 },
            TourStep::Traverse { to: "CC" },
            TourStep::Traverse { to: "BB" },
            TourStep::Activate { node: "BB", value: 10 },
            TourStep::Traverse { to: "AA" },
            TourStep::Traverse { to: "EE" },
            TourStep::Activate { node: "EE", value: 12 },
        ]
    );
    assert_eq!(tour.time_used(), 10);
    assert_eq!(tour.total_value(), 30 * 16 + 10 * 13 + 12 * 10);
}

#[test]
fn test_tour_ignores_zero_and_unreachable_candidates() {
    let mut graph = tunnels();
    graph.add_node("ZZ");
    let tour = GreedyTour::new(&graph, 30)
        .plan(&"AA", [("ZZ", 100), ("CC", 0), ("BB", 3)])
        .unwrap();
    assert_eq!(tour.activated().copied().collect::<Vec<_>>(), vec!["BB"]);
    assert_eq!(tour.total_value(), 3 * 28);
}

#[test]
fn test_tour_skips_candidates_that_cannot_pay_off() {
    let graph = tunnels();
    // DD needs 4 units: with a budget of 4 it would finish with nothing left.
    let tour = GreedyTour::new(&graph, 4).plan(&"AA", [("DD", 50)]).unwrap();
    assert!(tour.steps().is_empty());
    assert_eq!(tour.total_value(), 0);

    let tour = GreedyTour::new(&graph, 5).plan(&"AA", [("DD", 50)]).unwrap();
    assert_eq!(tour.total_value(), 50);
}

#[test]
fn test_tour_can_activate_start() {
    let graph = tunnels();
    let tour = GreedyTour::new(&graph, 3).plan(&"AA", [("AA", 7)]).unwrap();
    assert_eq!(tour.steps(), &[TourStep::Activate { node: "AA", value: 7 }]);
    assert_eq!(tour.total_value(), 14);
}

#[test]
fn test_tour_zero_budget() {
    let graph = tunnels();
    let tour = GreedyTour::new(&graph, 0).plan(&"AA", [("BB", 7)]).unwrap();
    assert!(tour.steps().is_empty());
    assert_eq!(tour.time_budget(), 0);
}

#[test]
fn test_tour_propagates_aborts() {
    let graph = tunnels();
    let result = GreedyTour::new(&graph, 30)
        .limits(SearchLimits::default().with_max_expansions(0))
        .plan(&"AA", [("DD", 5)]);
    assert!(matches!(result, Err(SearchError::SearchAborted { .. })));
}

// ----------------------------------------------------------------------------
// Properties against brute force
// ----------------------------------------------------------------------------

/// Small directed graph as an adjacency matrix of optional costs.
#[derive(Debug, Clone)]
struct Matrix {
    n: usize,
    costs: Vec<Option<u8>>,
}

impl Matrix {
    fn cost(&self, from: usize, to: usize) -> Option<f64> {
        if from == to {
            return None;
        }
        self.costs[from * self.n + to].map(f64::from)
    }

    fn to_graph(&self) -> AdjacencyGraph<usize> {
        let mut graph = AdjacencyGraph::new();
        for node in 0..self.n {
            graph.add_node(node);
        }
        for from in 0..self.n {
            for to in 0..self.n {
                if let Some(cost) = self.cost(from, to) {
                    graph.add_edge(from, to, cost);
                }
            }
        }
        graph
    }

    /// Cheapest cost over every simple path, by exhaustive DFS.
    fn brute_force(&self, start: usize, goal: usize) -> Option<f64> {
        fn walk(
            m: &Matrix,
            at: usize,
            goal: usize,
            seen: &mut Vec<bool>,
            cost: f64,
            best: &mut Option<f64>,
        ) {
            if at == goal {
                if best.is_none_or(|b| cost < b) {
                    *best = Some(cost);
                }
                return;
            }
            for next in 0..m.n {
                if let Some(c) = m.cost(at, next)
                    && !seen[next]
                {
                    seen[next] = true;
                    walk(m, next, goal, seen, cost + c, best);
                    seen[next] = false;
                }
            }
        }
        let mut seen = vec![false; self.n];
        seen[start] = true;
        let mut best = None;
        walk(self, start, goal, &mut seen, 0.0, &mut best);
        best
    }

    /// Textbook O(n²) Dijkstra with a linear-scan minimum.
    fn reference_dijkstra(&self, start: usize, goal: usize) -> Option<f64> {
        let mut dist = vec![f64::INFINITY; self.n];
        let mut done = vec![false; self.n];
        dist[start] = 0.0;
        loop {
            let current = (0..self.n)
                .filter(|&i| !done[i] && dist[i].is_finite())
                .min_by(|&a, &b| dist[a].total_cmp(&dist[b]))?;
            if current == goal {
                return Some(dist[goal]);
            }
            done[current] = true;
            for next in 0..self.n {
                if let Some(c) = self.cost(current, next) {
                    dist[next] = dist[next].min(dist[current] + c);
                }
            }
        }
    }
}

fn matrix_strategy() -> impl Strategy<Value = (Matrix, usize, usize)> {
    (2usize..7).prop_flat_map(|n| {
        (
            prop::collection::vec(prop::option::weighted(0.4, 0u8..10), n * n),
            0..n,
            0..n,
        )
            .prop_map(move |(costs, start, goal)| (Matrix { n, costs }, start, goal))
    })
}

/// Path is made of real edges and its cost is their sum.
fn assert_consistent(
    m: &Matrix,
    path: &Path<usize>,
    start: usize,
    goal: usize,
) -> Result<(), TestCaseError> {
    prop_assert_eq!(*path.start(), start);
    prop_assert_eq!(*path.goal(), goal);
    let mut total = 0.0;
    for pair in path.nodes().windows(2) {
        let cost = m.cost(pair[0], pair[1]);
        prop_assert!(cost.is_some(), "{} -> {} is not an edge", pair[0], pair[1]);
        total += cost.unwrap_or_default();
    }
    prop_assert_eq!(total, path.cost());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_dijkstra_matches_brute_force((m, start, goal) in matrix_strategy()) {
        let expected = m.brute_force(start, goal);
        match dijkstra(&m.to_graph(), &start, &goal) {
            Ok(path) => {
                prop_assert_eq!(Some(path.cost()), expected);
                assert_consistent(&m, &path, start, goal)?;
            }
            Err(SearchError::NoPathFound) => prop_assert_eq!(expected, None),
            Err(e) => prop_assert!(false, "unexpected error {:?}", e),
        }
    }

    #[test]
    fn prop_zero_heuristic_matches_reference_dijkstra((m, start, goal) in matrix_strategy()) {
        let expected = m.reference_dijkstra(start, goal);
        let found = astar(&m.to_graph(), &start, &goal, Zero).ok().map(|p| p.cost());
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn prop_overestimating_heuristic_terminates(
        (m, start, goal) in matrix_strategy(),
        estimates in prop::collection::vec(0u8..100, 7),
    ) {
        let heuristic = |n: &usize| if *n == goal { 0.0 } else { f64::from(estimates[*n]) };
        let optimum = m.brute_force(start, goal);
        match astar(&m.to_graph(), &start, &goal, heuristic) {
            Ok(path) => {
                assert_consistent(&m, &path, start, goal)?;
                prop_assert!(optimum.is_some_and(|o| path.cost() >= o));
            }
            Err(SearchError::NoPathFound) => prop_assert_eq!(optimum, None),
            Err(e) => prop_assert!(false, "unexpected error {:?}", e),
        }
    }

    #[test]
    fn prop_admissible_heuristic_finds_optimum(
        (m, start, goal) in matrix_strategy(),
        percents in prop::collection::vec(0u8..=100, 7),
    ) {
        // A random fraction of the true distance per node: admissible, rarely consistent.
        let heuristic = |n: &usize| {
            m.brute_force(*n, goal)
                .map_or(50.0, |d| d * f64::from(percents[*n]) / 100.0)
        };
        let optimum = m.brute_force(start, goal);
        match astar(&m.to_graph(), &start, &goal, heuristic) {
            Ok(path) => {
                prop_assert_eq!(Some(path.cost()), optimum);
                assert_consistent(&m, &path, start, goal)?;
            }
            Err(SearchError::NoPathFound) => prop_assert_eq!(optimum, None),
            Err(e) => prop_assert!(false, "unexpected error {:?}", e),
        }
    }

    #[test]
    fn prop_parallel_multi_source_matches_sequential(
        (m, _, goal) in matrix_strategy(),
        picks in prop::collection::vec(0usize..7, 1..5),
    ) {
        let starts: Vec<usize> = picks.into_iter().map(|p| p % m.n).collect();
        let graph = m.to_graph();
        let seq = shortest_from_any(&graph, starts.iter().copied(), &goal, &Zero);
        let par = par_shortest_from_any(&graph, &starts, &goal, &Zero);
        prop_assert_eq!(&seq, &par);

        let best = starts.iter().filter_map(|&s| m.brute_force(s, goal)).min_by(f64::total_cmp);
        prop_assert_eq!(seq.ok().map(|p| p.cost()), best);
    }
}
