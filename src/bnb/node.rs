//! Search nodes and the fractional-relaxation bound.
//!
//! A node is identified by its decision path: the set of items that have
//! been forced in or out on the way down from the root. Paths are stored
//! as fragments in a [`PathArena`]; every fragment records one decision
//! and points at its parent, so a child shares its parent's prefix
//! without copying it.
//!
//! Nodes move through two types:
//!
//! - [`Node`]: a freshly created path, not yet evaluated.
//! - [`EvaluatedNode`]: the result of running the [`BoundEvaluator`]
//!   exactly once, carrying the bound, the concrete greedy fill and the
//!   branching item (if any).
//!
//! # Bound
//!
//! Forced-in items are always counted first. Free items follow in
//! density order and are added while they fit; the first free item that
//! does not fit contributes `remaining * density` to the bound and ends
//! the fill. Because the catalog is density-sorted this is the linear
//! relaxation optimum of the node's subproblem, so the bound is never
//! below the value of any completion of the path.

use crate::catalog::Catalog;

/// A forced decision on one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// The item may not be selected.
    Excluded,
    /// The item must be selected.
    Included,
}

/// Handle to a path fragment inside a [`PathArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathId(usize);

#[derive(Debug, Clone, Copy)]
struct PathFragment {
    parent: Option<PathId>,
    position: usize,
    decision: Decision,
}

/// Append-only storage for decision path fragments.
#[derive(Debug, Clone, Default)]
pub struct PathArena {
    fragments: Vec<PathFragment>,
}

impl PathArena {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fragments stored.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether no fragments are stored.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Records `decision` for the item at `position` on top of `parent`.
    pub fn extend(
        &mut self,
        parent: Option<PathId>,
        position: usize,
        decision: Decision,
    ) -> PathId {
        let id = PathId(self.fragments.len());
        self.fragments.push(PathFragment {
            parent,
            position,
            decision,
        });
        id
    }

    /// Walks a path from its newest decision back to the root.
    pub fn decisions(&self, path: Option<PathId>) -> Decisions<'_> {
        Decisions {
            arena: self,
            cursor: path,
        }
    }
}

/// Iterator over the `(position, decision)` pairs of one path.
#[derive(Debug, Clone)]
pub struct Decisions<'a> {
    arena: &'a PathArena,
    cursor: Option<PathId>,
}

impl Iterator for Decisions<'_> {
    type Item = (usize, Decision);

    fn next(&mut self) -> Option<Self::Item> {
        let PathId(index) = self.cursor?;
        let fragment = &self.arena.fragments[index];
        self.cursor = fragment.parent;
        Some((fragment.position, fragment.decision))
    }
}

/// A node that has not been evaluated yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    path: Option<PathId>,
    depth: usize,
}

impl Node {
    /// The root: every item is free.
    pub fn root() -> Self {
        Self {
            path: None,
            depth: 0,
        }
    }

    /// Handle of the newest decision, `None` for the root.
    pub fn path(&self) -> Option<PathId> {
        self.path
    }

    /// Number of forced decisions.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Branching status of an evaluated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    /// The greedy fill stopped at a partially fitting item; the node can
    /// be split on that catalog position.
    Branchable {
        /// Catalog position of the fractional item.
        fractional: usize,
    },
    /// The greedy fill is integral and equals the bound.
    Leaf,
}

/// A node whose bound and concrete fill have been computed.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedNode {
    path: Option<PathId>,
    depth: usize,
    bound: f64,
    importance: f64,
    cost: f64,
    feasible: bool,
    selected: Vec<usize>,
    state: NodeState,
}

impl EvaluatedNode {
    /// Fractional-relaxation upper bound.
    pub fn bound(&self) -> f64 {
        self.bound
    }

    /// Importance of the concrete (integral) fill.
    pub fn importance(&self) -> f64 {
        self.importance
    }

    /// Cost of the concrete fill.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Whether the concrete fill respects the capacity.
    pub fn is_feasible(&self) -> bool {
        self.feasible
    }

    /// Catalog positions in the concrete fill, forced items first.
    pub fn selected_positions(&self) -> &[usize] {
        &self.selected
    }

    /// Branching status.
    pub fn state(&self) -> NodeState {
        self.state
    }

    /// Whether the node can be split.
    pub fn is_branchable(&self) -> bool {
        matches!(self.state, NodeState::Branchable { .. })
    }

    /// Number of forced decisions.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Splits the node on its fractional item.
    ///
    /// Returns `(excluded, included)`: both children extend this node's
    /// path with one decision on the fractional item. Leaves return
    /// `None`.
    pub fn branch(&self, arena: &mut PathArena) -> Option<(Node, Node)> {
        let NodeState::Branchable { fractional } = self.state else {
            return None;
        };
        let depth = self.depth + 1;
        let excluded = arena.extend(self.path, fractional, Decision::Excluded);
        let included = arena.extend(self.path, fractional, Decision::Included);
        Some((
            Node {
                path: Some(excluded),
                depth,
            },
            Node {
                path: Some(included),
                depth,
            },
        ))
    }
}

/// Computes bounds for nodes over one catalog and capacity.
///
/// Holds a scratch buffer sized to the catalog so repeated evaluations
/// do not allocate for the path lookup.
#[derive(Debug)]
pub struct BoundEvaluator<'a> {
    catalog: &'a Catalog,
    capacity: f64,
    forced: Vec<Option<Decision>>,
}

impl<'a> BoundEvaluator<'a> {
    /// Creates an evaluator for `catalog` under `capacity`.
    pub fn new(catalog: &'a Catalog, capacity: f64) -> Self {
        Self {
            catalog,
            capacity,
            forced: vec![None; catalog.len()],
        }
    }

    /// The capacity nodes are evaluated against.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Evaluates `node`, consuming it.
    pub fn evaluate(&mut self, node: Node, arena: &PathArena) -> EvaluatedNode {
        self.forced.fill(None);
        for (position, decision) in arena.decisions(node.path) {
            debug_assert!(
                self.forced[position].is_none(),
                "path decides position {position} twice"
            );
            self.forced[position] = Some(decision);
        }

        let mut importance = 0.0;
        let mut cost = 0.0;
        let mut selected = Vec::new();

        // Forced items bypass the capacity check.
        for (position, decision) in self.forced.iter().enumerate() {
            if *decision == Some(Decision::Included) {
                let item = self.catalog.item(position);
                importance += item.importance;
                cost += item.cost;
                selected.push(position);
            }
        }

        let mut relaxation = 0.0;
        let mut state = NodeState::Leaf;
        for (position, decision) in self.forced.iter().enumerate() {
            if decision.is_some() {
                continue;
            }
            let item = self.catalog.item(position);
            if cost + item.cost <= self.capacity {
                importance += item.importance;
                cost += item.cost;
                selected.push(position);
                continue;
            }
            let remaining = self.capacity - cost;
            if remaining > 0.0 {
                relaxation = remaining * self.catalog.density(position);
                state = NodeState::Branchable {
                    fractional: position,
                };
            }
            break;
        }

        EvaluatedNode {
            path: node.path,
            depth: node.depth,
            bound: importance + relaxation,
            importance,
            cost,
            feasible: cost <= self.capacity,
            selected,
            state,
        }
    }
}
