//! Advent of Code solver framework
//!
//! Puzzles are written against two small traits and collected into a
//! registry that the `aoc` binary drives:
//!
//! - [`AocParser`] turns the raw input into `SharedData<'a>` (which may borrow
//!   from the input),
//! - [`PartSolver<N>`](PartSolver) answers part `N` from that shared data,
//! - `#[derive(AocSolver)]` generates the [`Solver`] impl that dispatches a
//!   runtime part number to the right `PartSolver`,
//! - `#[derive(AutoRegisterSolver)]` submits a [`SolverPlugin`] so the solver
//!   shows up in [`SolverRegistryBuilder::register_all_plugins`].
//!
//! # Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverInstance, DynSolver};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Depths;
//!
//! impl AocParser for Depths {
//!     type SharedData<'a> = Vec<u32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(format!("not a number: {l}"))))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Depths {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.windows(2).filter(|w| w[1] > w[0]).count().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Depths {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<u32>().to_string())
//!     }
//! }
//!
//! let mut instance = SolverInstance::<Depths>::new(2021, 1, "1\n3\n2\n4").unwrap();
//! assert_eq!(instance.solve(1).unwrap().answer, "2");
//! assert_eq!(instance.solve(2).unwrap().answer, "10");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverPlugin, SolverRegistry,
    SolverRegistryBuilder, BASE_YEAR, CAPACITY, DAYS_PER_YEAR, MAX_YEARS,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// The derive macro expands to `::aoc_solver::inventory::submit!`
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
