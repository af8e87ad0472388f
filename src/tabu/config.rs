//! Tabu Search configuration.

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_knapsack::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_tabu_tenure(7)
///     .with_aspiration(true);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.tabu_tenure, 7);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabuConfig {
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// How many iterations a flipped item stays tabu.
    pub tabu_tenure: usize,
    /// Whether a tabu flip is allowed when it produces a new global best.
    pub aspiration: bool,
    /// Maximum iterations without improvement before stopping.
    pub max_no_improve: usize,
    /// Number of items sampled per iteration (None = full neighborhood).
    pub neighborhood_sample: Option<usize>,
    /// Wall-clock budget in milliseconds (None = unlimited).
    pub time_limit_ms: Option<u64>,
    /// Random seed for neighborhood sampling (None = fixed default).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            tabu_tenure: 7,
            aspiration: true,
            max_no_improve: 200,
            neighborhood_sample: None,
            time_limit_ms: None,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu tenure (number of iterations an item remains tabu).
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = tenure;
        self
    }

    /// Enables or disables aspiration criterion.
    pub fn with_aspiration(mut self, aspiration: bool) -> Self {
        self.aspiration = aspiration;
        self
    }

    /// Sets maximum iterations without improvement.
    pub fn with_max_no_improve(mut self, n: usize) -> Self {
        self.max_no_improve = n;
        self
    }

    /// Evaluates only `n` randomly chosen flips per iteration.
    pub fn with_neighborhood_sample(mut self, n: usize) -> Self {
        self.neighborhood_sample = Some(n);
        self
    }

    /// Sets the wall-clock budget.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        if self.max_no_improve == 0 {
            return Err("max_no_improve must be at least 1".into());
        }
        if self.neighborhood_sample == Some(0) {
            return Err("neighborhood_sample must be positive or None".into());
        }
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive or None".into());
        }
        Ok(())
    }
}
