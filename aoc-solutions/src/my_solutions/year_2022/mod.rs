//! Advent of Code 2022

pub mod day_12;
pub mod day_16;
