//! Table construction and solution reconstruction.

use log::debug;

use super::config::DpConfig;
use crate::catalog::{validate_capacity, Catalog, Item};
use crate::error::{KnapsackError, Result};
use crate::selection::Selection;
use crate::solver::KnapsackSolver;

const INTEGRALITY_TOLERANCE: f64 = 1e-9;

/// Exact solver using a bottom-up dynamic programming table.
///
/// Input is converted to integral units at construction, so a solver
/// that builds successfully always solves.
///
/// # Examples
///
/// ```
/// use u_knapsack::dp::DynamicProgrammingSolver;
/// use u_knapsack::{Item, KnapsackSolver};
///
/// let items = [Item::new(10.0, 2.0), Item::new(21.0, 3.0), Item::new(50.0, 5.0)];
/// let selection = DynamicProgrammingSolver::new(7.0, &items).unwrap().solve();
/// assert_eq!(selection.selected_indices(), vec![0, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct DynamicProgrammingSolver {
    catalog: Catalog,
    weights: Vec<usize>,
    /// Capacity in table units; `None` when nothing can be selected.
    capacity_units: Option<usize>,
}

impl DynamicProgrammingSolver {
    /// Validates the input and builds a solver for integral costs.
    pub fn new(capacity: f64, items: &[Item]) -> Result<Self> {
        Self::with_config(capacity, items, DpConfig::default())
    }

    /// Validates the input and builds a solver with the given config.
    pub fn with_config(capacity: f64, items: &[Item], config: DpConfig) -> Result<Self> {
        config.validate().map_err(KnapsackError::InvalidConfig)?;
        let capacity = validate_capacity(capacity)?;
        let catalog = Catalog::new(items)?;

        let mut weights = Vec::with_capacity(catalog.len());
        for position in 0..catalog.len() {
            let cost = catalog.item(position).cost;
            let scaled = cost * config.cost_scale;
            let units = scaled.round();
            if (scaled - units).abs() > INTEGRALITY_TOLERANCE * scaled.abs().max(1.0)
                || units > usize::MAX as f64
            {
                return Err(KnapsackError::NonIntegralCost {
                    index: catalog.original_index(position),
                    cost,
                });
            }
            weights.push(units as usize);
        }

        let total: u128 = weights.iter().map(|&w| w as u128).sum();
        let capacity_units = if capacity < 0.0 {
            None
        } else {
            let scaled = (capacity * config.cost_scale).floor();
            // Budget beyond the total cost of all items is never used.
            let units = if scaled >= total as f64 {
                total
            } else {
                scaled as u128
            };
            let cells = catalog.len() as u128 * (units + 1);
            if cells > config.max_table_cells as u128 {
                return Err(KnapsackError::TableTooLarge {
                    cells,
                    limit: config.max_table_cells,
                });
            }
            Some(units as usize)
        };

        Ok(Self {
            catalog,
            weights,
            capacity_units,
        })
    }

    /// Capacity in table units, if any item could fit.
    pub fn capacity_units(&self) -> Option<usize> {
        self.capacity_units
    }
}

impl KnapsackSolver for DynamicProgrammingSolver {
    fn name(&self) -> &str {
        "Dynamic Programming"
    }

    fn solve(&self) -> Selection {
        let n = self.catalog.len();
        let Some(capacity) = self.capacity_units else {
            return Selection::empty(n);
        };
        let width = capacity + 1;

        let mut best = vec![0.0_f64; width];
        let mut take = vec![false; n * width];
        for (position, &weight) in self.weights.iter().enumerate() {
            if weight > capacity {
                continue;
            }
            let importance = self.catalog.item(position).importance;
            let row = &mut take[position * width..(position + 1) * width];
            for c in (weight..=capacity).rev() {
                let candidate = best[c - weight] + importance;
                if candidate > best[c] {
                    best[c] = candidate;
                    row[c] = true;
                }
            }
        }

        let mut chosen = Vec::new();
        let mut c = capacity;
        for position in (0..n).rev() {
            if take[position * width + c] {
                chosen.push(position);
                c -= self.weights[position];
            }
        }

        debug!(
            "dynamic programming: {} items, {} capacity units, importance {}",
            n, capacity, best[capacity]
        );
        self.catalog.selection_from_positions(chosen)
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
        let selection = DynamicProgrammingSolver::new(50.0, &items).unwrap().solve();

        assert_eq!(selection.selected_indices(), vec![1, 2]);
        assert!((selection.total_importance(&items) - 220.0).abs() < 1e-9);
    }

    #[test]
    fn test_fractional_capacity_rounds_down() {
        let items = items(&[(5.0, 3.0), (4.0, 2.0)]);
        let solver = DynamicProgrammingSolver::new(4.9, &items).unwrap();

        assert_eq!(solver.capacity_units(), Some(4));
        assert_eq!(solver.solve().selected_indices(), vec![0]);
    }

    #[test]
    fn test_cost_scale() {
        let items = items(&[(1.0, 1.5), (2.0, 2.5), (2.0, 2.4), (3.5, 3.3), (0.5, 0.1)]);
        let config = DpConfig::default().with_cost_scale(10.0);
        let selection = DynamicProgrammingSolver::with_config(6.15, &items, config)
            .unwrap()
            .solve();

        // 2.5 + 3.3 + 0.1 costs 5.9 for importance 6.0; the budget rounds down to 6.1.
        assert!((selection.total_importance(&items) - 6.0).abs() < 1e-9);
        assert!(selection.total_cost(&items) <= 6.15);
    }

    #[test]
    fn test_capacity_just_below_a_unit_is_not_rounded_up() {
        let capacity = 3.0 - 1e-10;
        let items = items(&[(10.0, 3.0), (4.0, 2.0)]);
        let solver = DynamicProgrammingSolver::new(capacity, &items).unwrap();
        let selection = solver.solve();

        assert_eq!(solver.capacity_units(), Some(2));
        assert!(
            selection.total_cost(&items) <= capacity,
            "cost {} over capacity {}",
            selection.total_cost(&items),
            capacity
        );
        assert_eq!(selection.selected_indices(), vec![1]);
    }

    #[test]
    fn test_non_integral_cost_rejected() {
        let err = DynamicProgrammingSolver::new(10.0, &items(&[(1.0, 1.0), (1.0, 2.5)])).unwrap_err();
        assert!(matches!(err, KnapsackError::NonIntegralCost { index: 1, .. }));
    }

    #[test]
    fn test_table_too_large_rejected() {
        let config = DpConfig::default().with_max_table_cells(100);
        let err = DynamicProgrammingSolver::with_config(1_000.0, &items(&[(1.0, 500.0), (1.0, 600.0)]), config)
            .unwrap_err();
        assert!(matches!(err, KnapsackError::TableTooLarge { .. }));
    }

    #[test]
    fn test_capacity_clamped_to_total_cost() {
        let items = items(&[(1.0, 2.0), (1.0, 3.0)]);
        let solver = DynamicProgrammingSolver::new(f64::INFINITY, &items).unwrap();

        assert_eq!(solver.capacity_units(), Some(5));
        assert_eq!(solver.solve().selected_indices(), vec![0, 1]);
    }

    #[test]
    fn test_negative_and_zero_capacity() {
        let items = items(&[(1.0, 2.0), (3.0, 0.0)]);

        let solver = DynamicProgrammingSolver::new(-1.0, &items).unwrap();
        assert_eq!(solver.capacity_units(), None);
        assert!(solver.solve().selected_indices().is_empty());

        // Zero-cost items still fit a zero budget.
        let solver = DynamicProgrammingSolver::new(0.0, &items).unwrap();
        assert_eq!(solver.solve().selected_indices(), vec![1]);
    }

    #[test]
    fn test_empty_items() {
        let selection = DynamicProgrammingSolver::new(10.0, &[]).unwrap().solve();
        assert!(selection.is_empty());
    }
}
