//! Moves and short-term memory for Tabu Search.

use std::collections::{HashSet, VecDeque};

/// Flipping one item in or out of the current solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipMove {
    /// Catalog position of the flipped item.
    pub position: usize,
    /// Importance of the solution after the flip.
    pub importance: f64,
    /// Cost of the solution after the flip.
    pub cost: f64,
}

/// FIFO list of recently flipped positions.
///
/// Holds at most `tenure` positions; pushing onto a full list evicts the
/// oldest entry. A tenure of zero disables the memory.
#[derive(Debug, Clone)]
pub struct TabuList {
    tenure: usize,
    queue: VecDeque<usize>,
    members: HashSet<usize>,
}

impl TabuList {
    /// Creates an empty list.
    pub fn new(tenure: usize) -> Self {
        Self {
            tenure,
            queue: VecDeque::with_capacity(tenure),
            members: HashSet::with_capacity(tenure),
        }
    }

    /// Whether `position` is currently tabu.
    pub fn contains(&self, position: usize) -> bool {
        self.members.contains(&position)
    }

    /// Number of tabu positions.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing is tabu.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Marks `position` tabu, evicting the oldest entry when full.
    pub fn push(&mut self, position: usize) {
        if self.tenure == 0 {
            return;
        }
        if self.queue.len() >= self.tenure {
            if let Some(old) = self.queue.pop_front() {
                // The same position may sit in the queue twice.
                if !self.queue.contains(&old) {
                    self.members.remove(&old);
                }
            }
        }
        self.queue.push_back(position);
        self.members.insert(position);
    }
}
