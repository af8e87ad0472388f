//! Dynamic programming configuration.

/// Configuration for the dynamic programming solver.
///
/// # Examples
///
/// ```
/// use u_knapsack::dp::DpConfig;
///
/// // Costs given in currency with two decimals.
/// let config = DpConfig::default().with_cost_scale(100.0);
/// assert!(config.validate().is_ok());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DpConfig {
    /// Factor turning costs into integral table units.
    pub cost_scale: f64,
    /// Largest decision table (items x capacity units) allowed.
    pub max_table_cells: usize,
}

impl Default for DpConfig {
    fn default() -> Self {
        Self {
            cost_scale: 1.0,
            max_table_cells: 50_000_000,
        }
    }
}

impl DpConfig {
    /// Sets the cost scale.
    pub fn with_cost_scale(mut self, scale: f64) -> Self {
        self.cost_scale = scale;
        self
    }

    /// Sets the table size ceiling.
    pub fn with_max_table_cells(mut self, cells: usize) -> Self {
        self.max_table_cells = cells;
        self
    }

    /// Checks the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.cost_scale.is_finite() && self.cost_scale > 0.0) {
            return Err("cost_scale must be positive and finite".into());
        }
        if self.max_table_cells == 0 {
            return Err("max_table_cells must be at least 1".into());
        }
        Ok(())
    }
}
