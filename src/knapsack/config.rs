//! Branch-and-bound configuration.

use crate::error::SolveError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the best-first knapsack search.
///
/// # Examples
///
/// ```
/// use u_branchbound::knapsack::BnbConfig;
///
/// let config = BnbConfig::default()
///     .with_epsilon(1e-6)
///     .with_max_nodes(10_000)
///     .with_record_trace(false);
/// assert!(config.validate().is_ok());
/// assert!(config.improves(1.0, 0.5, 1.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct BnbConfig {
    /// Relative tolerance for every bound and incumbent comparison.
    ///
    /// A quantity counts as better than the incumbent only when it exceeds
    /// it by more than `epsilon` times the largest item value, so the
    /// margin follows the units of the instance. Use `0.0` for exact
    /// comparison on integral inputs.
    pub epsilon: f64,

    /// Maximum frontier pops. 0 = no limit.
    ///
    /// A search stopped by this limit reports its best solution so far,
    /// which is feasible but not proven optimal.
    pub max_nodes: usize,

    /// Whether to record every transition in the trace.
    ///
    /// When `false`, only the root and final entries are kept.
    pub record_trace: bool,
}

impl Default for BnbConfig {
    fn default() -> Self {
        Self {
            epsilon: 1e-9,
            max_nodes: 0,
            record_trace: true,
        }
    }
}

impl BnbConfig {
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_max_nodes(mut self, n: usize) -> Self {
        self.max_nodes = n;
        self
    }

    pub fn with_record_trace(mut self, record: bool) -> Self {
        self.record_trace = record;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SolveError> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(SolveError::InvalidConfig(format!(
                "epsilon must be finite and non-negative, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }

    /// Absolute margin for an instance whose largest item value is `scale`.
    pub fn tolerance(&self, scale: f64) -> f64 {
        self.epsilon * scale
    }

    /// Whether `candidate` beats `best` on an instance of value `scale`.
    ///
    /// The single comparison behind pruning at pop, pruning at birth, and
    /// incumbent updates.
    pub fn improves(&self, candidate: f64, best: f64, scale: f64) -> bool {
        candidate > best + self.tolerance(scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BnbConfig::default();
        assert!((config.epsilon - 1e-9).abs() < 1e-15);
        assert_eq!(config.max_nodes, 0);
        assert!(config.record_trace);
    }

    #[test]
    fn test_validate_ok() {
        assert!(BnbConfig::default().validate().is_ok());
        assert!(BnbConfig::default().with_epsilon(0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_bad_epsilon() {
        assert!(BnbConfig::default().with_epsilon(-1.0).validate().is_err());
        assert!(BnbConfig::default()
            .with_epsilon(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_improves_respects_tolerance() {
        let config = BnbConfig::default().with_epsilon(0.01);
        assert!(config.improves(1.02, 1.0, 1.0));
        assert!(!config.improves(1.005, 1.0, 1.0));
        assert!(!config.improves(1.0, 1.0, 1.0));

        let exact = BnbConfig::default().with_epsilon(0.0);
        assert!(exact.improves(1.0 + 1e-12, 1.0, 1.0));
        assert!(!exact.improves(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_tolerance_scales_with_values() {
        let config = BnbConfig::default();
        assert!(config.improves(5e-10, 0.0, 5e-10));
        assert!(config.improves(4e-9, 3e-9, 3.5e-9));
        assert!(!config.improves(1e6 + 1e-4, 1e6, 1e6));
        assert_eq!(config.tolerance(0.0), 0.0);
    }

    #[test]
    fn test_config_builder() {
        let config = BnbConfig::default()
            .with_epsilon(0.5)
            .with_max_nodes(42)
            .with_record_trace(false);
        assert_eq!(config.epsilon, 0.5);
        assert_eq!(config.max_nodes, 42);
        assert!(!config.record_trace);
    }
}
