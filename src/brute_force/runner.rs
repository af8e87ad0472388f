//! Subset enumeration.

use log::debug;

use super::config::BruteForceConfig;
use crate::catalog::{validate_capacity, Catalog, Item};
use crate::error::{KnapsackError, Result};
use crate::selection::Selection;
use crate::solver::KnapsackSolver;

/// Exact solver that tries every subset.
///
/// # Examples
///
/// ```
/// use u_knapsack::brute_force::BruteForceSolver;
/// use u_knapsack::{Item, KnapsackSolver};
///
/// let items = [Item::new(60.0, 10.0), Item::new(100.0, 20.0), Item::new(120.0, 30.0)];
/// let selection = BruteForceSolver::new(50.0, &items).unwrap().solve();
/// assert_eq!(selection.selected_indices(), vec![1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct BruteForceSolver {
    capacity: f64,
    catalog: Catalog,
    config: BruteForceConfig,
}

impl BruteForceSolver {
    /// Validates the input and builds a solver with default limits.
    pub fn new(capacity: f64, items: &[Item]) -> Result<Self> {
        Self::with_config(capacity, items, BruteForceConfig::default())
    }

    /// Validates the input and builds a solver with the given config.
    pub fn with_config(capacity: f64, items: &[Item], config: BruteForceConfig) -> Result<Self> {
        config.validate().map_err(KnapsackError::InvalidConfig)?;
        let capacity = validate_capacity(capacity)?;
        let catalog = Catalog::new(items)?;
        if catalog.len() > config.max_items {
            return Err(KnapsackError::TooManyItems {
                items: catalog.len(),
                limit: config.max_items,
            });
        }
        Ok(Self {
            capacity,
            catalog,
            config,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &BruteForceConfig {
        &self.config
    }

    /// Importance of the subset `mask`, or `None` if it overflows.
    fn evaluate(&self, mask: u64) -> Option<f64> {
        let mut importance = 0.0;
        let mut cost = 0.0;
        let mut bits = mask;
        while bits != 0 {
            let position = bits.trailing_zeros() as usize;
            let item = self.catalog.item(position);
            importance += item.importance;
            cost += item.cost;
            bits &= bits - 1;
        }
        (cost <= self.capacity).then_some(importance)
    }

    fn search_sequential(&self, total: u64) -> (f64, u64) {
        let mut best = (0.0, 0);
        for mask in 1..total {
            if let Some(importance) = self.evaluate(mask) {
                if importance > best.0 {
                    best = (importance, mask);
                }
            }
        }
        best
    }

    #[cfg(feature = "parallel")]
    fn search_parallel(&self, total: u64) -> (f64, u64) {
        use rayon::prelude::*;

        (1..total)
            .into_par_iter()
            .filter_map(|mask| self.evaluate(mask).map(|importance| (importance, mask)))
            .reduce(|| (0.0, 0), prefer)
    }

    fn search(&self, total: u64) -> (f64, u64) {
        #[cfg(feature = "parallel")]
        if self.config.parallel {
            return self.search_parallel(total);
        }
        self.search_sequential(total)
    }
}

/// Higher importance wins; equal importance keeps the lower mask.
#[cfg(feature = "parallel")]
fn prefer(a: (f64, u64), b: (f64, u64)) -> (f64, u64) {
    if b.0 > a.0 || (b.0 == a.0 && b.1 < a.1) {
        b
    } else {
        a
    }
}

impl KnapsackSolver for BruteForceSolver {
    fn name(&self) -> &str {
        "Brute Force"
    }

    fn solve(&self) -> Selection {
        let n = self.catalog.len();
        if self.capacity < 0.0 {
            return Selection::empty(n);
        }
        let total = 1u64 << n;
        let (importance, mask) = self.search(total);
        debug!(
            "brute force: {} subsets, best importance {}",
            total, importance
        );
        self.catalog
            .selection_from_positions((0..n).filter(|&p| mask & (1 << p) != 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(pairs: &[(f64, f64)]) -> Vec<Item> {
        pairs.iter().copied().map(Item::from).collect()
    }

    #[test]
    fn test_classic_instance() {
        let items = items(&[(60.0, 10.0), (100.0, 20.0), (120.0, 30.0), (50.0, 50.0)]);
        let selection = BruteForceSolver::new(50.0, &items).unwrap().solve();

        assert_eq!(selection.selected_indices(), vec![1, 2]);
        assert!(selection.is_integral());
    }

    #[test]
    fn test_too_many_items() {
        let many = vec![Item::new(1.0, 1.0); 21];
        let err = BruteForceSolver::new(5.0, &many).unwrap_err();
        assert_eq!(err, KnapsackError::TooManyItems { items: 21, limit: 20 });

        let config = BruteForceConfig::default().with_max_items(21);
        assert!(BruteForceSolver::with_config(5.0, &many, config).is_ok());
    }

    #[test]
    fn test_nothing_fits() {
        let items = items(&[(5.0, 3.0), (7.0, 4.0)]);
        let selection = BruteForceSolver::new(2.0, &items).unwrap().solve();
        assert!(selection.selected_indices().is_empty());

        let selection = BruteForceSolver::new(-1.0, &items).unwrap().solve();
        assert!(selection.selected_indices().is_empty());
    }

    #[test]
    fn test_tie_prefers_lowest_mask() {
        // Equal density, so position follows caller order.
        let items = items(&[(2.0, 1.0), (2.0, 1.0), (4.0, 2.0)]);
        let selection = BruteForceSolver::new(2.0, &items).unwrap().solve();

        // {0, 1} is mask 0b011, {2} is mask 0b100.
        assert_eq!(selection.selected_indices(), vec![0, 1]);
    }

    #[test]
    fn test_parallel_flag_same_answer() {
        let items = items(&[
            (360.0, 7.0),
            (83.0, 1.0),
            (59.0, 30.0),
            (130.0, 22.0),
            (431.0, 80.0),
            (67.0, 94.0),
            (230.0, 11.0),
            (52.0, 81.0),
            (93.0, 70.0),
            (125.0, 64.0),
        ]);
        let sequential = BruteForceSolver::new(150.0, &items).unwrap().solve();
        let config = BruteForceConfig::default().with_parallel(true);
        let parallel = BruteForceSolver::with_config(150.0, &items, config)
            .unwrap()
            .solve();

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_empty_catalog() {
        let selection = BruteForceSolver::new(10.0, &[]).unwrap().solve();
        assert!(selection.is_empty());
    }
}
