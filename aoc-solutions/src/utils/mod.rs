//! Helpers shared by several puzzle solutions.

pub mod search;
