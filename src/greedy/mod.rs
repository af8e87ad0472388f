//! Greedy constructive heuristic.
//!
//! Walks the catalog in density order and takes every item that still
//! fits. In fractional mode the first item that does not fit is taken
//! partially and the walk stops, which yields the linear relaxation
//! optimum (Dantzig's bound) rather than a 0-1 solution.
//!
//! # References
//!
//! Dantzig, G. B. (1957). "Discrete-Variable Extremum Problems",
//! *Operations Research* 5(2), 266-288.

mod config;
mod runner;

pub use config::GreedyConfig;
pub use runner::{GreedyRunner, GreedySolver};
