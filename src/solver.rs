//! Shared solver contract and the strategy factory.

use std::fmt;
use std::str::FromStr;

use crate::bnb::BranchAndBoundSolver;
use crate::brute_force::BruteForceSolver;
use crate::catalog::Item;
use crate::dp::DynamicProgrammingSolver;
use crate::error::{KnapsackError, Result};
use crate::greedy::GreedySolver;
use crate::selection::Selection;
use crate::tabu::TabuSearchSolver;

/// A strategy for the 0-1 knapsack problem.
///
/// Implementors are built from a capacity and a list of items, validate
/// both up front, and afterwards always produce a selection aligned to
/// the caller's item order.
pub trait KnapsackSolver: Send + Sync {
    /// Human-readable strategy name.
    fn name(&self) -> &str;

    /// Computes the selection.
    fn solve(&self) -> Selection;
}

/// Identifier of a solver strategy.
///
/// Parses from a name (`"bnb"`, `"branch-and-bound"`, `"dp"`, ...) or
/// converts from the numeric identifiers `0..=4`.
///
/// # Examples
///
/// ```
/// use u_knapsack::SolverKind;
///
/// let kind: SolverKind = "branch-and-bound".parse().unwrap();
/// assert_eq!(kind, SolverKind::BranchAndBound);
/// assert_eq!(SolverKind::try_from(1).unwrap(), SolverKind::BranchAndBound);
/// assert!("simplex".parse::<SolverKind>().is_err());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverKind {
    /// Table-based dynamic programming over integral cost units.
    DynamicProgramming,
    /// Best-first branch-and-bound. Exact and scales to many items.
    BranchAndBound,
    /// Density-ordered constructive heuristic.
    Greedy,
    /// Tabu search seeded with the greedy solution.
    TabuSearch,
    /// Exhaustive enumeration for small inputs.
    BruteForce,
}

impl SolverKind {
    /// All strategies, in identifier order.
    pub const ALL: [SolverKind; 5] = [
        SolverKind::DynamicProgramming,
        SolverKind::BranchAndBound,
        SolverKind::Greedy,
        SolverKind::TabuSearch,
        SolverKind::BruteForce,
    ];

    /// Canonical name accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            SolverKind::DynamicProgramming => "dynamic-programming",
            SolverKind::BranchAndBound => "branch-and-bound",
            SolverKind::Greedy => "greedy",
            SolverKind::TabuSearch => "tabu-search",
            SolverKind::BruteForce => "brute-force",
        }
    }

    /// Whether the strategy always returns an optimal selection.
    pub fn is_exact(&self) -> bool {
        matches!(
            self,
            SolverKind::DynamicProgramming | SolverKind::BranchAndBound | SolverKind::BruteForce
        )
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SolverKind {
    type Err = KnapsackError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "dp" | "dynamic-programming" => Ok(SolverKind::DynamicProgramming),
            "bnb" | "branch-and-bound" => Ok(SolverKind::BranchAndBound),
            "greedy" => Ok(SolverKind::Greedy),
            "tabu" | "tabu-search" => Ok(SolverKind::TabuSearch),
            "brute-force" | "exhaustive" => Ok(SolverKind::BruteForce),
            _ => Err(KnapsackError::InvalidSolverKind(s.to_string())),
        }
    }
}

impl TryFrom<u8> for SolverKind {
    type Error = KnapsackError;

    fn try_from(id: u8) -> Result<Self> {
        SolverKind::ALL
            .get(usize::from(id))
            .copied()
            .ok_or_else(|| KnapsackError::InvalidSolverKind(id.to_string()))
    }
}

/// Builds solvers by strategy identifier with default configuration.
///
/// # Examples
///
/// ```
/// use u_knapsack::{Item, SolverFactory, SolverKind};
///
/// let items = [Item::new(60.0, 10.0), Item::new(100.0, 20.0), Item::new(120.0, 30.0)];
/// let solver = SolverFactory::create(SolverKind::BranchAndBound, 50.0, &items).unwrap();
/// assert_eq!(solver.solve().total_importance(&items), 220.0);
/// ```
pub struct SolverFactory;

impl SolverFactory {
    /// Builds the solver for `kind`.
    pub fn create(
        kind: SolverKind,
        capacity: f64,
        items: &[Item],
    ) -> Result<Box<dyn KnapsackSolver>> {
        let solver: Box<dyn KnapsackSolver> = match kind {
            SolverKind::DynamicProgramming => {
                Box::new(DynamicProgrammingSolver::new(capacity, items)?)
            }
            SolverKind::BranchAndBound => Box::new(BranchAndBoundSolver::new(capacity, items)?),
            SolverKind::Greedy => Box::new(GreedySolver::new(capacity, items)?),
            SolverKind::TabuSearch => Box::new(TabuSearchSolver::new(capacity, items)?),
            SolverKind::BruteForce => Box::new(BruteForceSolver::new(capacity, items)?),
        };
        Ok(solver)
    }

    /// Parses `name` and builds the matching solver.
    pub fn create_by_name(
        name: &str,
        capacity: f64,
        items: &[Item],
    ) -> Result<Box<dyn KnapsackSolver>> {
        Self::create(name.parse()?, capacity, items)
    }
}
