//! 0-1 knapsack solvers behind one interchangeable strategy interface.
//!
//! Given items with an importance and a cost, pick the subset with the
//! highest total importance whose total cost stays within a capacity.
//! Several strategies are provided:
//!
//! - **Branch and Bound**: Best-first search over include/exclude
//!   decisions, bounded by the fractional relaxation. Exact.
//! - **Dynamic Programming**: Bottom-up table over integral cost units.
//!   Exact when costs are whole multiples of a chosen scale.
//! - **Brute Force**: Enumerates every subset. Exact, small inputs only.
//! - **Greedy**: Density-ordered fill, optionally with one fractional item.
//! - **Tabu Search**: Single-flip local search with short-term memory,
//!   started from the greedy fill.
//!
//! Every solver validates its input at construction and implements
//! [`KnapsackSolver`]; [`SolverFactory`] builds one by [`SolverKind`].
//!
//! # Examples
//!
//! ```
//! use u_knapsack::{Item, SolverFactory, SolverKind};
//!
//! let items = [
//!     Item::new(60.0, 10.0),
//!     Item::new(100.0, 20.0),
//!     Item::new(120.0, 30.0),
//! ];
//! let solver = SolverFactory::create(SolverKind::BranchAndBound, 50.0, &items).unwrap();
//! let selection = solver.solve();
//!
//! assert_eq!(selection.selected_indices(), vec![1, 2]);
//! assert_eq!(selection.total_importance(&items), 220.0);
//! ```
//!
//! # Logging
//!
//! Solvers report progress through the [`log`] facade at `debug` and
//! `trace` level. Install any logger to see it.

pub mod bnb;
pub mod brute_force;
pub mod catalog;
pub mod dp;
pub mod error;
pub mod greedy;
pub mod selection;
pub mod solver;
pub mod tabu;

pub use catalog::{validate_capacity, Catalog, Item};
pub use error::{KnapsackError, Result};
pub use selection::Selection;
pub use solver::{KnapsackSolver, SolverFactory, SolverKind};
