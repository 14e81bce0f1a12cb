//! Advent of Code puzzle solutions with automatic registration
//!
//! This crate holds the shortest-path search in [`utils::search`] and the
//! puzzle solutions built on it, organized by year. Each solution uses the
//! `AutoRegisterSolver` derive macro for automatic plugin registration with
//! the solver framework.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
