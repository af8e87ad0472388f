//! Best-first branch-and-bound.
//!
//! The exact solver of the crate. Each search node fixes some items in or
//! out; its bound is the linear relaxation of the remaining subproblem,
//! computed with a greedy fill over the density-ordered [`Catalog`](crate::Catalog).
//! Nodes are expanded highest bound first, and a node is split on the
//! single item that only fits fractionally.
//!
//! # Key Components
//!
//! - [`Node`] / [`EvaluatedNode`]: decision paths before and after bounding
//! - [`BoundEvaluator`]: fractional-relaxation bound and concrete fill
//! - [`Frontier`]: max-bound priority queue with first-in tie breaking
//! - [`BnbRunner`]: the search loop, limits and cancellation
//! - [`BranchAndBoundSolver`]: the [`KnapsackSolver`](crate::KnapsackSolver) front end
//!
//! # References
//!
//! - Land & Doig (1960), "An Automatic Method of Solving Discrete
//!   Programming Problems", *Econometrica* 28(3), 497-520.
//! - Kellerer, Pferschy & Pisinger (2004), *Knapsack Problems*, ch. 5.

mod config;
mod frontier;
mod incumbent;
mod node;
mod runner;
mod stats;

pub use config::BnbConfig;
pub use frontier::{EmptyFrontier, Frontier};
pub use incumbent::Incumbent;
pub use node::{
    BoundEvaluator, Decision, Decisions, EvaluatedNode, Node, NodeState, PathArena, PathId,
};
pub use runner::{BnbResult, BnbRunner, BnbTermination, BranchAndBoundSolver};
pub use stats::BnbStatistics;
