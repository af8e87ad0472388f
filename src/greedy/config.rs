//! Greedy configuration.

/// Configuration for the greedy heuristic.
///
/// # Examples
///
/// ```
/// use u_knapsack::greedy::GreedyConfig;
///
/// let config = GreedyConfig::default().with_fractional(true);
/// assert!(config.fractional);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GreedyConfig {
    /// Take the first overflowing item partially and stop there.
    pub fractional: bool,
}

impl GreedyConfig {
    /// Enables or disables the fractional last item.
    pub fn with_fractional(mut self, fractional: bool) -> Self {
        self.fractional = fractional;
        self
    }
}
