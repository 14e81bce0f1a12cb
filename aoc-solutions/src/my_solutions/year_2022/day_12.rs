use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::search::{astar, par_shortest_from_any, Graph, Heuristic};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 12, tags = ["graph-search", "grid"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    x: usize,
    y: usize,
}

/// Elevation grid; `a` is 0 and `z` is 25.
#[derive(Debug)]
pub struct HeightMap {
    width: usize,
    height: usize,
    elevations: Vec<u8>,
    start: Point,
    end: Point,
}

impl HeightMap {
    fn elevation(&self, p: Point) -> u8 {
        self.elevations[p.y * self.width + p.x]
    }

    fn lowest_points(&self) -> Vec<Point> {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| Point { x, y }))
            .filter(|p| self.elevation(*p) == 0)
            .collect()
    }
}

impl Graph for HeightMap {
    type Node = Point;

    fn neighbors(&self, p: &Point, buf: &mut Vec<Point>) {
        if p.x > 0 {
            buf.push(Point { x: p.x - 1, y: p.y });
        }
        if p.y > 0 {
            buf.push(Point { x: p.x, y: p.y - 1 });
        }
        if p.x + 1 < self.width {
            buf.push(Point { x: p.x + 1, y: p.y });
        }
        if p.y + 1 < self.height {
            buf.push(Point { x: p.x, y: p.y + 1 });
        }
    }

    /// One step, unless it climbs more than one level.
    fn edge_cost(&self, from: &Point, to: &Point) -> f64 {
        if self.elevation(*to) > self.elevation(*from) + 1 {
            f64::INFINITY
        } else {
            1.0
        }
    }

    fn contains(&self, p: &Point) -> bool {
        p.x < self.width && p.y < self.height
    }
}

/// Straight-line distance to a fixed target
struct Euclidean(Point);

impl Heuristic<Point> for Euclidean {
    fn estimate(&self, p: &Point) -> f64 {
        let dx = p.x.abs_diff(self.0.x) as f64;
        let dy = p.y.abs_diff(self.0.y) as f64;
        dx.hypot(dy)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = HeightMap;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut width = None;
        let mut elevations = Vec::new();
        let mut start = None;
        let mut end = None;

        for (y, line) in input.trim().lines().enumerate() {
            let line = line.trim_end();
            let row_width = *width.get_or_insert(line.len());
            if line.len() != row_width {
                return Err(ParseError::InvalidFormat(format!(
                    "(line {}) expected {} cells, found {}",
                    y + 1,
                    row_width,
                    line.len()
                )));
            }

            for (x, ch) in line.bytes().enumerate() {
                let level = parse_cell(ch, Point { x, y }, &mut start, &mut end)
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", y + 1, e)))?;
                elevations.push(level);
            }
        }

        let width = width
            .filter(|w| *w > 0)
            .ok_or_else(|| ParseError::MissingData("empty height map".into()))?;
        let start = start.ok_or_else(|| ParseError::MissingData("no start marker 'S'".into()))?;
        let end = end.ok_or_else(|| ParseError::MissingData("no end marker 'E'".into()))?;

        Ok(HeightMap {
            width,
            height: elevations.len() / width,
            elevations,
            start,
            end,
        })
    }
}

fn parse_cell(
    ch: u8,
    p: Point,
    start: &mut Option<Point>,
    end: &mut Option<Point>,
) -> anyhow::Result<u8> {
    let (marker, level) = match ch {
        b'a'..=b'z' => return Ok(ch - b'a'),
        b'S' => (start, 0),
        b'E' => (end, b'z' - b'a'),
        _ => return Err(anyhow!("unexpected character {:?} at column {}", ch as char, p.x + 1)),
    };
    if marker.is_some() {
        bail!("duplicate marker {:?} at column {}", ch as char, p.x + 1);
    }
    *marker = Some(p);
    Ok(level)
}

impl PartSolver<1> for Solver {
    fn solve(map: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let path = astar(&*map, &map.start, &map.end, Euclidean(map.end))?;
        Ok(path.steps().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(map: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let starts = map.lowest_points();
        let path = par_shortest_from_any(&*map, &starts, &map.end, &Euclidean(map.end))?;
        Ok(path.steps().to_string())
    }
}
