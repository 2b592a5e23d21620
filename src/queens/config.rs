//! N-Queens configuration.

use crate::error::SolveError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the N-Queens backtracker.
///
/// # Examples
///
/// ```
/// use u_branchbound::queens::QueensConfig;
///
/// let config = QueensConfig::new(8).with_max_solutions(1);
/// assert_eq!(config.n, 8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct QueensConfig {
    /// Board size (rows, columns, and queens).
    pub n: usize,

    /// Stop after this many solutions. 0 = enumerate all.
    pub max_solutions: usize,

    /// Whether to record placements, conflicts, and backtracks.
    pub record_trace: bool,
}

impl QueensConfig {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            max_solutions: 0,
            record_trace: true,
        }
    }

    pub fn with_max_solutions(mut self, max: usize) -> Self {
        self.max_solutions = max;
        self
    }

    pub fn with_record_trace(mut self, record: bool) -> Self {
        self.record_trace = record;
        self
    }

    pub fn validate(&self) -> Result<(), SolveError> {
        if self.n == 0 {
            return Err(SolveError::InvalidBoardSize { n: self.n });
        }
        Ok(())
    }
}
