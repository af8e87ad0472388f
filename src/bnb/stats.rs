//! Counters collected while the branch-and-bound driver runs.

use std::time::Duration;

/// Statistics of one branch-and-bound search.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BnbStatistics {
    /// Nodes whose bound was computed, the root included.
    pub nodes_evaluated: u64,
    /// Nodes split into two children.
    pub nodes_branched: u64,
    /// Branchable nodes discarded because their bound could not beat
    /// the incumbent.
    pub prunings_bound: u64,
    /// Children refused by the frontier because forced items overflowed
    /// the capacity.
    pub prunings_infeasible: u64,
    /// Times the incumbent improved.
    pub incumbent_updates: u64,
    /// Largest number of live nodes seen in the frontier.
    pub max_frontier_size: usize,
    /// Deepest decision path evaluated.
    pub max_depth: usize,
    /// Bound of the root node.
    pub root_bound: f64,
    /// Wall-clock time of the search.
    pub time_total: Duration,
}

impl BnbStatistics {
    #[inline]
    pub fn on_node_evaluated(&mut self, depth: usize) {
        self.nodes_evaluated = self.nodes_evaluated.saturating_add(1);
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub fn on_branch(&mut self) {
        self.nodes_branched = self.nodes_branched.saturating_add(1);
    }

    #[inline]
    pub fn on_pruning_bound(&mut self) {
        self.prunings_bound = self.prunings_bound.saturating_add(1);
    }

    #[inline]
    pub fn on_pruning_infeasible(&mut self) {
        self.prunings_infeasible = self.prunings_infeasible.saturating_add(1);
    }

    #[inline]
    pub fn on_incumbent_update(&mut self) {
        self.incumbent_updates = self.incumbent_updates.saturating_add(1);
    }

    #[inline]
    pub fn on_frontier_size(&mut self, size: usize) {
        self.max_frontier_size = self.max_frontier_size.max(size);
    }
}

impl std::fmt::Display for BnbStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Branch-and-bound statistics:")?;
        writeln!(f, "  Nodes evaluated:        {}", self.nodes_evaluated)?;
        writeln!(f, "  Nodes branched:         {}", self.nodes_branched)?;
        writeln!(f, "  Prunings (bound):       {}", self.prunings_bound)?;
        writeln!(f, "  Prunings (infeasible):  {}", self.prunings_infeasible)?;
        writeln!(f, "  Incumbent updates:      {}", self.incumbent_updates)?;
        writeln!(f, "  Max frontier size:      {}", self.max_frontier_size)?;
        writeln!(f, "  Max depth:              {}", self.max_depth)?;
        writeln!(f, "  Root bound:             {}", self.root_bound)?;
        writeln!(f, "  Total time:             {:.2?}", self.time_total)?;
        Ok(())
    }
}
