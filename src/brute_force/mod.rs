//! Exhaustive enumeration of every subset.
//!
//! Reference solver for small catalogs: it visits all `2^n` subsets and
//! keeps the best feasible one, so its answer is optimal by construction.
//! Ties go to the subset with the lowest bit mask over density-ordered
//! positions. With the `parallel` feature the masks can be split across
//! rayon workers; the tie rule keeps the answer identical.

mod config;
mod runner;

pub use config::BruteForceConfig;
pub use runner::BruteForceSolver;
