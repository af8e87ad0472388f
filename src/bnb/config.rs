//! Branch-and-bound configuration.

/// Search limits for the branch-and-bound driver.
///
/// The search is exact when no limit is hit. Each limit turns it into a
/// best-effort search that returns the incumbent found so far.
///
/// # Examples
///
/// ```
/// use u_knapsack::bnb::BnbConfig;
///
/// let config = BnbConfig::default()
///     .with_node_limit(100_000)
///     .with_time_limit_ms(500);
/// assert_eq!(config.node_limit, Some(100_000));
/// assert!(config.validate().is_ok());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BnbConfig {
    /// Maximum number of evaluated nodes (None = unlimited). The search
    /// never evaluates more than this, root included.
    pub node_limit: Option<u64>,
    /// Maximum number of live frontier nodes (None = unlimited).
    pub frontier_limit: Option<usize>,
    /// Wall-clock budget in milliseconds (None = unlimited).
    pub time_limit_ms: Option<u64>,
}

impl BnbConfig {
    /// Sets the evaluated-node ceiling.
    pub fn with_node_limit(mut self, n: u64) -> Self {
        self.node_limit = Some(n);
        self
    }

    /// Sets the live-frontier ceiling.
    pub fn with_frontier_limit(mut self, n: usize) -> Self {
        self.frontier_limit = Some(n);
        self
    }

    /// Sets the wall-clock budget.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Checks the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.node_limit == Some(0) {
            return Err("node_limit must be positive or None".into());
        }
        if self.frontier_limit == Some(0) {
            return Err("frontier_limit must be positive or None".into());
        }
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive or None".into());
        }
        Ok(())
    }
}
