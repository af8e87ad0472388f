//! Dynamic programming over integral cost units.
//!
//! Classic bottom-up table: `best[c]` is the highest importance reachable
//! with at most `c` units of budget using the items seen so far. A
//! decision table records which item improved which cell so the chosen
//! set can be rebuilt. Runs in `O(n * C)` time and memory, where `C` is
//! the capacity measured in cost units, so it suits small integral
//! budgets and degrades with large or finely divided ones.
//!
//! Costs must be whole multiples of `1 / cost_scale`; the capacity is
//! rounded down to the same resolution.
//!
//! # References
//!
//! Bellman, R. (1957). *Dynamic Programming*, Princeton University Press.

mod config;
mod runner;

pub use config::DpConfig;
pub use runner::DynamicProgrammingSolver;
