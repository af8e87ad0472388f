//! Greedy fill over the density-ordered catalog.

use log::debug;

use super::config::GreedyConfig;
use crate::catalog::{validate_capacity, Catalog, Item};
use crate::error::Result;
use crate::selection::Selection;
use crate::solver::KnapsackSolver;

/// Executes the greedy fill.
pub struct GreedyRunner;

impl GreedyRunner {
    /// Fills the knapsack in density order.
    ///
    /// Returns proportions in caller order. In integral mode items that
    /// do not fit are skipped and later, smaller items may still be
    /// taken.
    pub fn run(catalog: &Catalog, capacity: f64, config: &GreedyConfig) -> Selection {
        let mut proportions = vec![0.0; catalog.len()];
        let mut remaining = capacity;

        for position in 0..catalog.len() {
            let item = catalog.item(position);
            let index = catalog.original_index(position);
            if item.cost <= remaining {
                remaining -= item.cost;
                proportions[index] = 1.0;
            } else if config.fractional {
                if remaining > 0.0 {
                    proportions[index] = remaining / item.cost;
                }
                break;
            }
        }

        debug!(
            "greedy fill: {} of {} items, {} capacity left",
            proportions.iter().filter(|&&p| p > 0.0).count(),
            catalog.len(),
            remaining.max(0.0)
        );
        Selection::from_proportions(proportions)
    }
}

/// Density-ordered greedy heuristic.
///
/// # Examples
///
/// ```
/// use u_knapsack::greedy::GreedySolver;
/// use u_knapsack::{Item, KnapsackSolver};
///
/// let items = [Item::new(60.0, 10.0), Item::new(100.0, 20.0), Item::new(120.0, 30.0)];
/// let selection = GreedySolver::new(50.0, &items).unwrap().solve();
/// assert_eq!(selection.selected_indices(), vec![0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct GreedySolver {
    capacity: f64,
    catalog: Catalog,
    config: GreedyConfig,
}

impl GreedySolver {
    /// Validates the input and builds an integral greedy solver.
    pub fn new(capacity: f64, items: &[Item]) -> Result<Self> {
        Self::with_config(capacity, items, GreedyConfig::default())
    }

    /// Validates the input and builds a solver with the given config.
    pub fn with_config(capacity: f64, items: &[Item], config: GreedyConfig) -> Result<Self> {
        Ok(Self {
            capacity: validate_capacity(capacity)?,
            catalog: Catalog::new(items)?,
            config,
        })
    }
}

impl KnapsackSolver for GreedySolver {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn solve(&self) -> Selection {
        GreedyRunner::run(&self.catalog, self.capacity, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(pairs: &[(f64, f64)]) -> Vec<Item> {
        pairs.iter().copied().map(Item::from).collect()
    }

    #[test]
    fn test_integral_skips_overflowing_items() {
        let items = items(&[(60.0, 10.0), (100.0, 20.0), (120.0, 30.0), (15.0, 15.0)]);
        let selection = GreedySolver::new(50.0, &items).unwrap().solve();

        // 120/30 does not fit after 60 + 100, but the 15/15 item does.
        assert_eq!(selection.selected_indices(), vec![0, 1, 3]);
        assert!(selection.is_integral());
        assert!((selection.total_importance(&items) - 175.0).abs() < 1e-9);
    }

    #[test]
    fn test_fractional_last_item() {
        let items = items(&[(60.0, 10.0), (100.0, 20.0), (120.0, 30.0), (15.0, 15.0)]);
        let config = GreedyConfig::default().with_fractional(true);
        let selection = GreedySolver::with_config(50.0, &items, config).unwrap().solve();

        assert_eq!(selection.selected_indices(), vec![0, 1]);
        assert!((selection.proportion(2) - 20.0 / 30.0).abs() < 1e-9);
        assert_eq!(selection.proportion(3), 0.0, "fill must stop after the fractional item");
        assert!((selection.total_importance(&items) - 240.0).abs() < 1e-9);
        assert!((selection.total_cost(&items) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_capacity() {
        let items = items(&[(1.0, 1.0), (2.0, 3.0)]);
        let selection = GreedySolver::new(0.0, &items).unwrap().solve();
        assert!(selection.selected_indices().is_empty());

        let config = GreedyConfig::default().with_fractional(true);
        let selection = GreedySolver::with_config(0.0, &items, config).unwrap().solve();
        assert_eq!(selection.proportions(), &[0.0, 0.0]);
    }

    #[test]
    fn test_greedy_can_be_suboptimal() {
        // Density favours the small item, which blocks the big one.
        let items = items(&[(2.0, 1.0), (9.0, 10.0)]);
        let selection = GreedySolver::new(10.0, &items).unwrap().solve();

        assert_eq!(selection.selected_indices(), vec![0]);
        assert!((selection.total_importance(&items) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_name() {
        let solver = GreedySolver::new(1.0, &[]).unwrap();
        assert_eq!(solver.name(), "Greedy");
        assert!(solver.solve().is_empty());
    }
}
