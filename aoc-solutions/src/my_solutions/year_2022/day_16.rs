use std::collections::HashSet;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

use crate::utils::search::{AdjacencyGraph, GreedyTour};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2022, day = 16, tags = ["graph-search", "greedy"])]
pub struct Solver;

const START: &str = "AA";
const TIME_BUDGET: u32 = 30;

const VALVE_PATTERN: &str =
    r"^Valve ([A-Z]+) has flow rate=(\d+); tunnels? leads? to valves? ([A-Z]+(?:, [A-Z]+)*)$";

/// Tunnel network; every tunnel takes one minute.
#[derive(Debug)]
pub struct Valves<'a> {
    tunnels: AdjacencyGraph<&'a str>,
    /// Flow rates in input order
    rates: Vec<(&'a str, u64)>,
}

struct ValveLine<'a> {
    name: &'a str,
    rate: u64,
    leads_to: Vec<&'a str>,
}

fn parse_line<'a>(pattern: &Regex, line: &'a str) -> anyhow::Result<ValveLine<'a>> {
    let caps = pattern
        .captures(line)
        .ok_or_else(|| anyhow!("expected `Valve XX has flow rate=N; tunnels lead to valves ...`"))?;
    let (_, [name, rate, leads_to]) = caps.extract();
    Ok(ValveLine {
        name,
        rate: rate.parse()?,
        leads_to: leads_to.split(", ").collect(),
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Valves<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let pattern = Regex::new(VALVE_PATTERN).map_err(|e| ParseError::Other(e.to_string()))?;

        let lines = input
            .trim()
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                parse_line(&pattern, line.trim_end())
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", idx + 1, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let known: HashSet<&str> = lines.iter().map(|v| v.name).collect();
        if !known.contains(START) {
            return Err(ParseError::MissingData(format!("no valve {START}")));
        }

        let mut tunnels = AdjacencyGraph::new();
        for valve in &lines {
            tunnels.add_node(valve.name);
        }
        for valve in &lines {
            for &to in &valve.leads_to {
                if !known.contains(to) {
                    return Err(ParseError::MissingData(format!(
                        "valve {} leads to undefined valve {}",
                        valve.name, to
                    )));
                }
                tunnels.add_edge(valve.name, to, 1.0);
            }
        }

        Ok(Valves {
            tunnels,
            rates: lines.iter().map(|v| (v.name, v.rate)).collect(),
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(valves: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let tour = GreedyTour::new(&valves.tunnels, TIME_BUDGET)
            .plan(&START, valves.rates.iter().copied())?;
        Ok(tour.total_value().to_string())
    }
}
