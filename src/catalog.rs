//! Candidate items and the density-ordered catalog.
//!
//! Every solver works on a [`Catalog`]: a read-only view of the caller's
//! items sorted by value density (importance per unit of cost), highest
//! first. The catalog remembers where each item came from so that results
//! can be mapped back to caller order.

use crate::error::{KnapsackError, Result};
use crate::selection::Selection;

/// A candidate item.
///
/// # Examples
///
/// ```
/// use u_knapsack::Item;
///
/// let item = Item::new(60.0, 10.0);
/// assert_eq!(item.density(), 6.0);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    /// Value gained when the item is selected.
    pub importance: f64,
    /// Budget consumed when the item is selected.
    pub cost: f64,
}

impl Item {
    /// Creates an item.
    pub fn new(importance: f64, cost: f64) -> Self {
        Self { importance, cost }
    }

    /// Importance per unit of cost.
    ///
    /// Zero-cost items have infinite density when they carry any
    /// importance, and zero density otherwise.
    pub fn density(&self) -> f64 {
        if self.cost > 0.0 {
            self.importance / self.cost
        } else if self.importance > 0.0 {
            f64::INFINITY
        } else {
            0.0
        }
    }

    fn validate(&self, index: usize) -> Result<()> {
        let reason = if !self.importance.is_finite() {
            "importance must be finite"
        } else if self.importance < 0.0 {
            "importance must be non-negative"
        } else if !self.cost.is_finite() {
            "cost must be finite"
        } else if self.cost < 0.0 {
            "cost must be non-negative"
        } else {
            return Ok(());
        };
        Err(KnapsackError::InvalidItem {
            index,
            reason: reason.into(),
        })
    }
}

impl From<(f64, f64)> for Item {
    fn from((importance, cost): (f64, f64)) -> Self {
        Self::new(importance, cost)
    }
}

/// Checks that a capacity can be searched.
///
/// Zero, negative and infinite capacities are accepted; only NaN is
/// rejected.
pub fn validate_capacity(capacity: f64) -> Result<f64> {
    if capacity.is_nan() {
        return Err(KnapsackError::InvalidCapacity(capacity));
    }
    Ok(capacity)
}

/// Items sorted by density, highest first.
///
/// Ties keep caller order, so the same input always yields the same
/// catalog. Positions in the catalog are `0..len()`; use
/// [`Catalog::original_index`] to map a position back to caller order.
///
/// # Examples
///
/// ```
/// use u_knapsack::{Catalog, Item};
///
/// let items = [Item::new(50.0, 50.0), Item::new(60.0, 10.0)];
/// let catalog = Catalog::new(&items).unwrap();
/// assert_eq!(catalog.original_index(0), 1);
/// assert_eq!(catalog.original_index(1), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
    densities: Vec<f64>,
    original: Vec<usize>,
}

impl Catalog {
    /// Validates `items` and builds the density-ordered view.
    pub fn new(items: &[Item]) -> Result<Self> {
        for (index, item) in items.iter().enumerate() {
            item.validate(index)?;
        }

        let mut original: Vec<usize> = (0..items.len()).collect();
        // Stable sort: equal densities stay in caller order.
        original.sort_by(|&a, &b| items[b].density().total_cmp(&items[a].density()));

        let sorted: Vec<Item> = original.iter().map(|&i| items[i]).collect();
        let densities = sorted.iter().map(Item::density).collect();

        Ok(Self {
            items: sorted,
            densities,
            original,
        })
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at a catalog position.
    pub fn item(&self, position: usize) -> &Item {
        &self.items[position]
    }

    /// Density of the item at a catalog position.
    pub fn density(&self, position: usize) -> f64 {
        self.densities[position]
    }

    /// Caller-order index of the item at a catalog position.
    pub fn original_index(&self, position: usize) -> usize {
        self.original[position]
    }

    /// Items in density order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Builds a caller-order selection that includes the given catalog
    /// positions and excludes everything else.
    pub fn selection_from_positions<I>(&self, positions: I) -> Selection
    where
        I: IntoIterator<Item = usize>,
    {
        Selection::from_indices(
            self.len(),
            positions.into_iter().map(|p| self.original[p]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(pairs: &[(f64, f64)]) -> Vec<Item> {
        pairs.iter().copied().map(Item::from).collect()
    }

    #[test]
    fn test_catalog_sorted_by_density() {
        let items = items(&[(60.0, 10.0), (100.0, 20.0), (120.0, 30.0), (50.0, 50.0)]);
        let catalog = Catalog::new(&items).unwrap();

        for pos in 1..catalog.len() {
            assert!(
                catalog.density(pos - 1) >= catalog.density(pos),
                "density must be non-increasing at position {pos}"
            );
        }
        assert_eq!(catalog.original_index(0), 0);
        assert_eq!(catalog.original_index(3), 3);
    }

    #[test]
    fn test_catalog_ties_keep_caller_order() {
        let items = items(&[(2.0, 2.0), (9.0, 3.0), (1.0, 1.0), (3.0, 3.0)]);
        let catalog = Catalog::new(&items).unwrap();

        let order: Vec<usize> = (0..catalog.len()).map(|p| catalog.original_index(p)).collect();
        assert_eq!(order, vec![1, 0, 2, 3]);
    }

    #[test]
    fn test_zero_cost_items_come_first() {
        let items = items(&[(5.0, 1.0), (3.0, 0.0), (0.0, 0.0)]);
        let catalog = Catalog::new(&items).unwrap();

        assert_eq!(catalog.original_index(0), 1);
        assert_eq!(catalog.density(0), f64::INFINITY);
        assert_eq!(catalog.density(2), 0.0);
    }

    #[test]
    fn test_rejects_negative_cost() {
        let err = Catalog::new(&items(&[(1.0, 1.0), (1.0, -2.0)])).unwrap_err();
        assert!(matches!(err, KnapsackError::InvalidItem { index: 1, .. }));
    }

    #[test]
    fn test_rejects_negative_importance() {
        let err = Catalog::new(&items(&[(-1.0, 1.0)])).unwrap_err();
        assert!(matches!(err, KnapsackError::InvalidItem { index: 0, .. }));
    }

    #[test]
    fn test_rejects_non_finite_values() {
        assert!(Catalog::new(&items(&[(f64::NAN, 1.0)])).is_err());
        assert!(Catalog::new(&items(&[(1.0, f64::INFINITY)])).is_err());
    }

    #[test]
    fn test_validate_capacity() {
        assert!(validate_capacity(0.0).is_ok());
        assert!(validate_capacity(-5.0).is_ok());
        assert!(validate_capacity(f64::INFINITY).is_ok());
        assert!(matches!(
            validate_capacity(f64::NAN),
            Err(KnapsackError::InvalidCapacity(_))
        ));
    }

    #[test]
    fn test_selection_from_positions_maps_to_caller_order() {
        let items = items(&[(50.0, 50.0), (60.0, 10.0), (100.0, 20.0)]);
        let catalog = Catalog::new(&items).unwrap();

        // Positions 0 and 1 are caller items 1 and 2.
        let selection = catalog.selection_from_positions([0, 1]);
        assert_eq!(selection.selected_indices(), vec![1, 2]);
        assert_eq!(selection.len(), 3);
    }
}
