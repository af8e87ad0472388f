//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from the integral greedy fill
//! 2. At each iteration:
//!    a. Evaluate single-item flips (all of them, or a seeded sample)
//!    b. Discard flips that overflow the capacity
//!    c. Select the best non-tabu flip (or a tabu flip satisfying aspiration)
//!    d. Apply the flip, add the item to the tabu list
//!    e. Update global best if improved
//! 3. Terminate after max iterations, stagnation or the time limit
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search - Part I", *ORSA Journal on Computing* 1(3), 190-206.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::TabuConfig;
use super::types::{FlipMove, TabuList};
use crate::catalog::{validate_capacity, Catalog, Item};
use crate::error::{KnapsackError, Result};
use crate::selection::Selection;
use crate::solver::KnapsackSolver;

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult {
    /// Best selection found, in caller order.
    pub selection: Selection,
    /// Importance of the best selection.
    pub best_importance: f64,
    /// Cost of the best selection.
    pub best_cost: f64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Iteration at which the best solution was found (0 = greedy start).
    pub best_iteration: usize,
    /// Whether the run was cancelled externally.
    pub cancelled: bool,
    /// Best importance after each iteration.
    pub importance_history: Vec<f64>,
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search over the catalog.
    pub fn run(catalog: &Catalog, capacity: f64, config: &TabuConfig) -> TabuResult {
        Self::run_with_cancel(catalog, capacity, config, None)
    }

    /// Executes Tabu Search with an optional cancellation token.
    pub fn run_with_cancel(
        catalog: &Catalog,
        capacity: f64,
        config: &TabuConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> TabuResult {
        let start = Instant::now();
        let time_limit = config.time_limit_ms.map(Duration::from_millis);
        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or(42));
        let n = catalog.len();

        // Initialize from the greedy fill
        let mut current = vec![false; n];
        let mut importance = 0.0;
        let mut cost = 0.0;
        for (position, slot) in current.iter_mut().enumerate() {
            let item = catalog.item(position);
            if cost + item.cost <= capacity {
                *slot = true;
                importance += item.importance;
                cost += item.cost;
            }
        }

        let mut best = current.clone();
        let mut best_importance = importance;
        let mut best_cost = cost;
        let mut best_iteration = 0;

        let mut tabu = TabuList::new(config.tabu_tenure);
        let mut history = Vec::with_capacity(config.max_iterations);
        let mut no_improve_count = 0;
        let mut cancelled = false;

        for iteration in 1..=config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if time_limit.is_some_and(|limit| start.elapsed() >= limit) {
                break;
            }

            let candidates: Vec<usize> = match config.neighborhood_sample {
                Some(k) if k < n => {
                    let mut sample = rand::seq::index::sample(&mut rng, n, k).into_vec();
                    sample.sort_unstable();
                    sample
                }
                _ => (0..n).collect(),
            };

            // Find best admissible move, remembering the best tabu one as fallback
            let mut best_move: Option<FlipMove> = None;
            let mut fallback: Option<FlipMove> = None;
            for position in candidates {
                let item = catalog.item(position);
                let mv = if current[position] {
                    FlipMove {
                        position,
                        importance: importance - item.importance,
                        cost: cost - item.cost,
                    }
                } else {
                    FlipMove {
                        position,
                        importance: importance + item.importance,
                        cost: cost + item.cost,
                    }
                };
                if mv.cost > capacity {
                    continue;
                }

                let admissible = !tabu.contains(position)
                    || (config.aspiration && mv.importance > best_importance);
                let slot = if admissible {
                    &mut best_move
                } else {
                    &mut fallback
                };
                if slot.map_or(true, |b| mv.importance > b.importance) {
                    *slot = Some(mv);
                }
            }

            // All feasible flips are tabu: take the least bad one
            let Some(mv) = best_move.or(fallback) else {
                history.push(best_importance);
                break;
            };

            current[mv.position] = !current[mv.position];
            importance = mv.importance;
            cost = mv.cost;
            tabu.push(mv.position);

            if importance > best_importance {
                best.clone_from(&current);
                best_importance = importance;
                best_cost = cost;
                best_iteration = iteration;
                no_improve_count = 0;
            } else {
                no_improve_count += 1;
            }

            history.push(best_importance);

            // Stagnation check
            if no_improve_count >= config.max_no_improve {
                break;
            }
        }

        debug!(
            "tabu search: importance {} after {} iterations (best at {})",
            best_importance,
            history.len(),
            best_iteration
        );

        TabuResult {
            selection: catalog.selection_from_positions((0..n).filter(|&p| best[p])),
            best_importance,
            best_cost,
            iterations: history.len(),
            best_iteration,
            cancelled,
            importance_history: history,
        }
    }
}

/// Tabu Search seeded with the greedy solution.
///
/// # Examples
///
/// ```
/// use u_knapsack::tabu::TabuSearchSolver;
/// use u_knapsack::{Item, KnapsackSolver};
///
/// let items = [Item::new(60.0, 10.0), Item::new(100.0, 20.0), Item::new(120.0, 30.0)];
/// let selection = TabuSearchSolver::new(50.0, &items).unwrap().solve();
/// assert_eq!(selection.total_importance(&items), 220.0);
/// ```
#[derive(Debug, Clone)]
pub struct TabuSearchSolver {
    capacity: f64,
    catalog: Catalog,
    config: TabuConfig,
}

impl TabuSearchSolver {
    /// Validates the input and builds a solver with default parameters.
    pub fn new(capacity: f64, items: &[Item]) -> Result<Self> {
        Self::with_config(capacity, items, TabuConfig::default())
    }

    /// Validates the input and builds a solver with the given parameters.
    pub fn with_config(capacity: f64, items: &[Item], config: TabuConfig) -> Result<Self> {
        config.validate().map_err(KnapsackError::InvalidConfig)?;
        Ok(Self {
            capacity: validate_capacity(capacity)?,
            catalog: Catalog::new(items)?,
            config,
        })
    }

    /// Runs the search and returns the full result.
    pub fn run(&self) -> TabuResult {
        TabuRunner::run(&self.catalog, self.capacity, &self.config)
    }
}

impl KnapsackSolver for TabuSearchSolver {
    fn name(&self) -> &str {
        "Tabu Search"
    }

    fn solve(&self) -> Selection {
        self.run().selection
    }
}
