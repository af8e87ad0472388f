//! Tabu Search (TS).
//!
//! A single-solution trajectory metaheuristic. Starting from the integral
//! greedy fill, every iteration flips the single item whose flip yields
//! the best feasible importance, while a short-term memory (the tabu
//! list) forbids flipping recently touched items back. This lets the
//! search walk through worse solutions to escape the greedy local optimum
//! without cycling.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search - Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search - Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod runner;
mod types;

pub use config::TabuConfig;
pub use runner::{TabuResult, TabuRunner, TabuSearchSolver};
pub use types::{FlipMove, TabuList};
