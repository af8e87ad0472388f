//! Best feasible solution found so far.

use super::node::EvaluatedNode;

/// The incumbent (primal bound) of one search.
///
/// Starts empty at importance zero and only ever improves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Incumbent {
    importance: f64,
    cost: f64,
    positions: Vec<usize>,
}

impl Incumbent {
    /// An empty incumbent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Importance of the best solution.
    pub fn importance(&self) -> f64 {
        self.importance
    }

    /// Cost of the best solution.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Catalog positions of the best solution.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Installs the concrete fill of `node` if it strictly improves on the
    /// current best. Returns whether it did.
    pub fn offer(&mut self, node: &EvaluatedNode) -> bool {
        if !node.is_feasible() || node.importance() <= self.importance {
            return false;
        }
        self.importance = node.importance();
        self.cost = node.cost();
        self.positions.clear();
        self.positions.extend_from_slice(node.selected_positions());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bnb::node::{BoundEvaluator, Node, PathArena};
    use crate::catalog::{Catalog, Item};

    #[test]
    fn test_offer_is_monotone() {
        let items = [Item::new(60.0, 10.0), Item::new(100.0, 20.0), Item::new(120.0, 30.0)];
        let catalog = Catalog::new(&items).unwrap();
        let mut arena = PathArena::new();
        let mut evaluator = BoundEvaluator::new(&catalog, 50.0);

        let root = evaluator.evaluate(Node::root(), &arena);
        let (excluded, included) = root.branch(&mut arena).unwrap();
        let excluded = evaluator.evaluate(excluded, &arena);
        let included = evaluator.evaluate(included, &arena);

        let mut incumbent = Incumbent::new();
        assert_eq!(incumbent.importance(), 0.0);

        assert!(incumbent.offer(&excluded));
        assert!((incumbent.importance() - 160.0).abs() < 1e-9);
        assert!(incumbent.offer(&included));
        assert!((incumbent.importance() - 180.0).abs() < 1e-9);
        assert!(!incumbent.offer(&excluded), "a worse node must not replace the incumbent");
        assert!(!incumbent.offer(&included), "ties keep the first solution");
        assert_eq!(incumbent.positions(), included.selected_positions());
        assert!((incumbent.cost() - 40.0).abs() < 1e-9);
    }
}
