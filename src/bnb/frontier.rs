//! Best-first priority frontier.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use thiserror::Error;

use super::node::EvaluatedNode;

/// Returned when the frontier has no node left to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("frontier is empty")]
pub struct EmptyFrontier;

struct Entry {
    node: EvaluatedNode,
    seq: u64,
}

impl Ord for Entry {
    // Highest bound first; on equal bounds the earlier admission wins.
    fn cmp(&self, other: &Self) -> Ordering {
        self.node
            .bound()
            .total_cmp(&other.node.bound())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Active nodes ordered by bound, highest first, ties first-in first-out.
///
/// Infeasible nodes are refused at admission, so every node in the
/// frontier respects the capacity.
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    /// Creates an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no nodes are live.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Inserts `node` unless it is infeasible. Returns whether it was
    /// admitted.
    pub fn admit(&mut self, node: EvaluatedNode) -> bool {
        if !node.is_feasible() {
            return false;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { node, seq });
        true
    }

    /// Removes and returns the node with the highest bound.
    pub fn extract_best(&mut self) -> Result<EvaluatedNode, EmptyFrontier> {
        self.heap.pop().map(|entry| entry.node).ok_or(EmptyFrontier)
    }

    /// Bound of the node [`extract_best`](Self::extract_best) would return.
    pub fn best_bound(&self) -> Option<f64> {
        self.heap.peek().map(|entry| entry.node.bound())
    }
}

impl std::fmt::Debug for Frontier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frontier")
            .field("len", &self.heap.len())
            .field("best_bound", &self.best_bound())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bnb::node::{BoundEvaluator, Node, PathArena};
    use crate::catalog::{Catalog, Item};

    #[test]
    fn test_extract_in_bound_order() {
        let items = [
            Item::new(60.0, 10.0),
            Item::new(100.0, 20.0),
            Item::new(120.0, 30.0),
            Item::new(50.0, 50.0),
        ];
        let catalog = Catalog::new(&items).unwrap();
        let mut arena = PathArena::new();
        let mut evaluator = BoundEvaluator::new(&catalog, 50.0);

        let root = evaluator.evaluate(Node::root(), &arena);
        let (excluded, included) = root.branch(&mut arena).unwrap();
        let excluded = evaluator.evaluate(excluded, &arena);
        let included = evaluator.evaluate(included, &arena);

        let mut frontier = Frontier::new();
        assert!(frontier.admit(excluded));
        assert!(frontier.admit(root));
        assert!(frontier.admit(included));
        assert_eq!(frontier.best_bound(), Some(240.0));

        let mut last = f64::INFINITY;
        while let Ok(node) = frontier.extract_best() {
            assert!(node.bound() <= last, "bounds must come out non-increasing");
            last = node.bound();
        }
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_equal_bounds_keep_admission_order() {
        // Every node here has bound 6: one whole item plus half of another.
        let items = [Item::new(4.0, 2.0), Item::new(4.0, 2.0), Item::new(4.0, 2.0)];
        let catalog = Catalog::new(&items).unwrap();
        let mut arena = PathArena::new();
        let mut evaluator = BoundEvaluator::new(&catalog, 3.0);

        let root = evaluator.evaluate(Node::root(), &arena);
        let (excluded, included) = root.branch(&mut arena).unwrap();
        let excluded = evaluator.evaluate(excluded, &arena);
        let included = evaluator.evaluate(included, &arena);
        for node in [&root, &excluded, &included] {
            assert!((node.bound() - 6.0).abs() < 1e-9);
        }

        let mut frontier = Frontier::new();
        frontier.admit(excluded.clone());
        frontier.admit(root.clone());
        frontier.admit(included.clone());

        assert_eq!(frontier.extract_best().unwrap(), excluded);
        assert_eq!(frontier.extract_best().unwrap(), root);
        assert_eq!(frontier.extract_best().unwrap(), included);
    }

    #[test]
    fn test_infeasible_not_admitted() {
        let items = [Item::new(10.0, 8.0), Item::new(9.0, 8.0)];
        let catalog = Catalog::new(&items).unwrap();
        let mut arena = PathArena::new();
        let mut evaluator = BoundEvaluator::new(&catalog, 10.0);

        let root = evaluator.evaluate(Node::root(), &arena);
        let (_, included) = root.branch(&mut arena).unwrap();
        let mut included = evaluator.evaluate(included, &arena);
        // Forced second item plus the first overflow the budget.
        while included.is_feasible() {
            let (_, next) = included.branch(&mut arena).unwrap();
            included = evaluator.evaluate(next, &arena);
        }

        let mut frontier = Frontier::new();
        assert!(!frontier.admit(included));
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_extract_from_empty_fails() {
        let mut frontier = Frontier::new();
        assert_eq!(frontier.extract_best().unwrap_err(), EmptyFrontier);
        assert_eq!(frontier.best_bound(), None);
    }
}
