//! Branch-and-bound driver.
//!
//! # Algorithm
//!
//! 1. Evaluate the root (every item free). If its bound is not positive
//!    there is nothing to gain and the empty selection is returned.
//! 2. Admit the root to the frontier, then repeatedly extract the node
//!    with the highest bound:
//!    a. a branchable node whose bound beats the incumbent is split on
//!       its fractional item and both children are admitted (infeasible
//!       children are refused);
//!    b. any other node offers its concrete fill to the incumbent.
//! 3. Stop when the frontier is empty, or early when a configured limit
//!    or the cancellation flag trips.
//!
//! Branchable nodes with `bound <= incumbent` are dropped without
//! branching: no completion of their path can do better.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, trace};

use super::config::BnbConfig;
use super::frontier::{EmptyFrontier, Frontier};
use super::incumbent::Incumbent;
use super::node::{BoundEvaluator, Node, NodeState, PathArena};
use super::stats::BnbStatistics;
use crate::catalog::{validate_capacity, Catalog, Item};
use crate::error::{KnapsackError, Result};
use crate::selection::Selection;
use crate::solver::KnapsackSolver;

/// Why the search stopped.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BnbTermination {
    /// The frontier was exhausted; the result is optimal.
    Optimal,
    /// The evaluated-node ceiling was reached.
    NodeLimit,
    /// The live-frontier ceiling was exceeded.
    FrontierLimit,
    /// The wall-clock budget ran out.
    TimeLimit,
    /// The cancellation flag was raised.
    Cancelled,
}

impl BnbTermination {
    /// Whether the search proved optimality.
    pub fn is_optimal(&self) -> bool {
        matches!(self, BnbTermination::Optimal)
    }
}

/// Result of a branch-and-bound run.
#[derive(Debug, Clone)]
pub struct BnbResult {
    /// Chosen items in caller order.
    pub selection: Selection,
    /// Total importance of the chosen items.
    pub best_importance: f64,
    /// Total cost of the chosen items.
    pub best_cost: f64,
    /// Why the search stopped.
    pub termination: BnbTermination,
    /// Search counters.
    pub statistics: BnbStatistics,
}

/// Executes best-first branch-and-bound over a catalog.
pub struct BnbRunner;

impl BnbRunner {
    /// Runs the search to completion or until a configured limit trips.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::bnb::{BnbConfig, BnbRunner};
    /// use u_knapsack::{Catalog, Item};
    ///
    /// let items = [
    ///     Item::new(60.0, 10.0),
    ///     Item::new(100.0, 20.0),
    ///     Item::new(120.0, 30.0),
    /// ];
    /// let catalog = Catalog::new(&items).unwrap();
    /// let result = BnbRunner::run(&catalog, 50.0, &BnbConfig::default());
    /// assert_eq!(result.best_importance, 220.0);
    /// assert_eq!(result.selection.selected_indices(), vec![1, 2]);
    /// ```
    pub fn run(catalog: &Catalog, capacity: f64, config: &BnbConfig) -> BnbResult {
        Self::run_with_cancel(catalog, capacity, config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// The flag is polled between node extractions. When it is set the
    /// search stops and the incumbent found so far is returned.
    pub fn run_with_cancel(
        catalog: &Catalog,
        capacity: f64,
        config: &BnbConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> BnbResult {
        let start = Instant::now();
        let time_limit = config.time_limit_ms.map(Duration::from_millis);

        let mut stats = BnbStatistics::default();
        let mut arena = PathArena::new();
        let mut evaluator = BoundEvaluator::new(catalog, capacity);
        let mut frontier = Frontier::new();
        let mut incumbent = Incumbent::new();
        let mut termination = BnbTermination::Optimal;

        let root = evaluator.evaluate(Node::root(), &arena);
        stats.on_node_evaluated(root.depth());
        stats.root_bound = root.bound();
        debug!(
            "branch-and-bound start: {} items, capacity {}, root bound {}",
            catalog.len(),
            capacity,
            root.bound()
        );

        if root.bound() > 0.0 && frontier.admit(root) {
            stats.on_frontier_size(frontier.len());
            loop {
                if let Some(reason) =
                    limit_reached(config, time_limit, &start, &stats, &frontier, cancel.as_deref())
                {
                    termination = reason;
                    break;
                }

                let node = match frontier.extract_best() {
                    Ok(node) => node,
                    Err(EmptyFrontier) => break,
                };

                match node.state() {
                    NodeState::Branchable { .. } if node.bound() > incumbent.importance() => {
                        // Both children are evaluated at once; stop before overshooting.
                        if config
                            .node_limit
                            .is_some_and(|limit| stats.nodes_evaluated + 2 > limit)
                        {
                            termination = BnbTermination::NodeLimit;
                            break;
                        }
                        let Some((excluded, included)) = node.branch(&mut arena) else {
                            continue;
                        };
                        stats.on_branch();
                        for child in [excluded, included] {
                            let child = evaluator.evaluate(child, &arena);
                            stats.on_node_evaluated(child.depth());
                            if !frontier.admit(child) {
                                stats.on_pruning_infeasible();
                            }
                        }
                        stats.on_frontier_size(frontier.len());
                    }
                    state => {
                        if incumbent.offer(&node) {
                            stats.on_incumbent_update();
                            trace!(
                                "incumbent improved to {} (cost {}) at depth {}",
                                incumbent.importance(),
                                incumbent.cost(),
                                node.depth()
                            );
                        } else if matches!(state, NodeState::Branchable { .. }) {
                            stats.on_pruning_bound();
                        }
                    }
                }
            }
        }

        stats.time_total = start.elapsed();
        debug!(
            "branch-and-bound finished ({:?}): importance {}, cost {}, {} nodes in {:.2?}",
            termination,
            incumbent.importance(),
            incumbent.cost(),
            stats.nodes_evaluated,
            stats.time_total
        );

        BnbResult {
            selection: catalog.selection_from_positions(incumbent.positions().iter().copied()),
            best_importance: incumbent.importance(),
            best_cost: incumbent.cost(),
            termination,
            statistics: stats,
        }
    }
}

fn limit_reached(
    config: &BnbConfig,
    time_limit: Option<Duration>,
    start: &Instant,
    stats: &BnbStatistics,
    frontier: &Frontier,
    cancel: Option<&AtomicBool>,
) -> Option<BnbTermination> {
    if let Some(flag) = cancel {
        if flag.load(Ordering::Relaxed) {
            return Some(BnbTermination::Cancelled);
        }
    }
    if let Some(limit) = config.node_limit {
        if stats.nodes_evaluated >= limit {
            return Some(BnbTermination::NodeLimit);
        }
    }
    if let Some(limit) = config.frontier_limit {
        if frontier.len() > limit {
            return Some(BnbTermination::FrontierLimit);
        }
    }
    if let Some(limit) = time_limit {
        if start.elapsed() >= limit {
            return Some(BnbTermination::TimeLimit);
        }
    }
    None
}

/// Exact solver using best-first branch-and-bound.
///
/// # Examples
///
/// ```
/// use u_knapsack::bnb::BranchAndBoundSolver;
/// use u_knapsack::{Item, KnapsackSolver};
///
/// let items = [Item::new(10.0, 5.0), Item::new(40.0, 4.0), Item::new(30.0, 6.0)];
/// let solver = BranchAndBoundSolver::new(10.0, &items).unwrap();
/// let selection = solver.solve();
/// assert_eq!(selection.total_importance(&items), 70.0);
/// ```
#[derive(Debug, Clone)]
pub struct BranchAndBoundSolver {
    capacity: f64,
    catalog: Catalog,
    config: BnbConfig,
}

impl BranchAndBoundSolver {
    /// Validates the input and builds a solver with default limits.
    pub fn new(capacity: f64, items: &[Item]) -> Result<Self> {
        Self::with_config(capacity, items, BnbConfig::default())
    }

    /// Validates the input and builds a solver with the given limits.
    pub fn with_config(capacity: f64, items: &[Item], config: BnbConfig) -> Result<Self> {
        config.validate().map_err(KnapsackError::InvalidConfig)?;
        Ok(Self {
            capacity: validate_capacity(capacity)?,
            catalog: Catalog::new(items)?,
            config,
        })
    }

    /// The density-ordered catalog the search runs on.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Runs the search and returns the full result.
    pub fn run(&self) -> BnbResult {
        BnbRunner::run(&self.catalog, self.capacity, &self.config)
    }

    /// Runs the search with a cancellation token.
    pub fn run_with_cancel(&self, cancel: Arc<AtomicBool>) -> BnbResult {
        BnbRunner::run_with_cancel(&self.catalog, self.capacity, &self.config, Some(cancel))
    }
}

impl KnapsackSolver for BranchAndBoundSolver {
    fn name(&self) -> &str {
        "Branch and Bound"
    }

    fn solve(&self) -> Selection {
        self.run().selection
    }
}
