//! Solver output aligned to caller order.

use crate::catalog::Item;

/// Proportion of each item placed in the knapsack, in caller order.
///
/// Exact solvers only produce `0.0` or `1.0`. The fractional greedy
/// heuristic may give its last overflowing item a value in between.
///
/// # Examples
///
/// ```
/// use u_knapsack::{Item, Selection};
///
/// let items = [Item::new(60.0, 10.0), Item::new(100.0, 20.0)];
/// let selection = Selection::from_indices(2, [1]);
/// assert_eq!(selection.total_importance(&items), 100.0);
/// assert_eq!(selection.total_cost(&items), 20.0);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    proportions: Vec<f64>,
}

impl Selection {
    /// A selection of `len` items with nothing chosen.
    pub fn empty(len: usize) -> Self {
        Self {
            proportions: vec![0.0; len],
        }
    }

    /// A binary selection that includes exactly `indices`.
    pub fn from_indices<I>(len: usize, indices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut selection = Self::empty(len);
        for i in indices {
            selection.proportions[i] = 1.0;
        }
        selection
    }

    /// Wraps raw proportions, clamped to `[0, 1]`. NaN becomes `0`.
    pub fn from_proportions(mut proportions: Vec<f64>) -> Self {
        for p in &mut proportions {
            *p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        }
        Self { proportions }
    }

    /// Number of items covered.
    pub fn len(&self) -> usize {
        self.proportions.len()
    }

    /// Whether the selection covers no items.
    pub fn is_empty(&self) -> bool {
        self.proportions.is_empty()
    }

    /// All proportions in caller order.
    pub fn proportions(&self) -> &[f64] {
        &self.proportions
    }

    /// Proportion of item `index`.
    pub fn proportion(&self, index: usize) -> f64 {
        self.proportions[index]
    }

    /// Whether item `index` is fully included.
    pub fn is_selected(&self, index: usize) -> bool {
        self.proportions[index] >= 1.0
    }

    /// Indices of fully included items, ascending.
    pub fn selected_indices(&self) -> Vec<usize> {
        (0..self.len()).filter(|&i| self.is_selected(i)).collect()
    }

    /// Whether every proportion is exactly 0 or 1.
    pub fn is_integral(&self) -> bool {
        self.proportions.iter().all(|&p| p == 0.0 || p == 1.0)
    }

    /// Sum of `importance * proportion`.
    pub fn total_importance(&self, items: &[Item]) -> f64 {
        self.weighted_sum(items, |item| item.importance)
    }

    /// Sum of `cost * proportion`.
    pub fn total_cost(&self, items: &[Item]) -> f64 {
        self.weighted_sum(items, |item| item.cost)
    }

    fn weighted_sum(&self, items: &[Item], field: impl Fn(&Item) -> f64) -> f64 {
        debug_assert_eq!(items.len(), self.len(), "selection and items differ in length");
        self.proportions
            .iter()
            .zip(items)
            .filter(|(&p, _)| p > 0.0)
            .map(|(&p, item)| field(item) * p)
            .sum()
    }
}
