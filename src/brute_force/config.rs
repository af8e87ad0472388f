//! Brute force configuration.

/// Hard ceiling on `max_items`; masks are 64-bit.
pub const MAX_ENUMERABLE_ITEMS: usize = 40;

/// Configuration for exhaustive enumeration.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BruteForceConfig {
    /// Largest catalog accepted at construction.
    pub max_items: usize,
    /// Spread masks across threads (requires the `parallel` feature,
    /// otherwise ignored).
    pub parallel: bool,
}

impl Default for BruteForceConfig {
    fn default() -> Self {
        Self {
            max_items: 20,
            parallel: false,
        }
    }
}

impl BruteForceConfig {
    /// Sets the catalog size ceiling.
    pub fn with_max_items(mut self, n: usize) -> Self {
        self.max_items = n;
        self
    }

    /// Enables or disables parallel enumeration.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Checks the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_items > MAX_ENUMERABLE_ITEMS {
            return Err(format!(
                "max_items must be at most {MAX_ENUMERABLE_ITEMS}, got {}",
                self.max_items
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BruteForceConfig::default();
        assert_eq!(config.max_items, 20);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_ceiling() {
        assert!(BruteForceConfig::default().with_max_items(40).validate().is_ok());
        assert!(BruteForceConfig::default().with_max_items(41).validate().is_err());
    }
}
