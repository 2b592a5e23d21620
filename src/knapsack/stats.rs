//! Search statistics.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Counters collected during one branch-and-bound run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct BnbStats {
    /// Nodes taken from the frontier.
    pub nodes_popped: u64,
    /// Nodes added to the frontier, root included.
    pub nodes_pushed: u64,
    /// Popped nodes discarded because their bound could not beat the incumbent.
    pub pruned_at_pop: u64,
    /// Children discarded before reaching the frontier.
    pub pruned_at_birth: u64,
    /// Include-children never built because the item did not fit.
    pub infeasible_includes: u64,
    /// Times the incumbent improved.
    pub incumbent_updates: u64,
    /// Largest frontier size observed.
    pub max_frontier: usize,
}

impl BnbStats {
    /// Total nodes created, whether pushed or pruned at birth.
    pub fn nodes_created(&self) -> u64 {
        self.nodes_pushed + self.pruned_at_birth
    }
}

impl fmt::Display for BnbStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Branch-and-bound statistics:")?;
        writeln!(f, "  Nodes popped:         {}", self.nodes_popped)?;
        writeln!(f, "  Nodes pushed:         {}", self.nodes_pushed)?;
        writeln!(f, "  Pruned at pop:        {}", self.pruned_at_pop)?;
        writeln!(f, "  Pruned at birth:      {}", self.pruned_at_birth)?;
        writeln!(f, "  Infeasible includes:  {}", self.infeasible_includes)?;
        writeln!(f, "  Incumbent updates:    {}", self.incumbent_updates)?;
        writeln!(f, "  Max frontier size:    {}", self.max_frontier)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodes_created() {
        let stats = BnbStats {
            nodes_pushed: 5,
            pruned_at_birth: 3,
            ..BnbStats::default()
        };
        assert_eq!(stats.nodes_created(), 8);
    }

    #[test]
    fn test_display_lists_counters() {
        let stats = BnbStats {
            nodes_popped: 12,
            ..BnbStats::default()
        };
        let text = stats.to_string();
        assert!(text.starts_with("Branch-and-bound statistics:"));
        assert!(text.contains("Nodes popped:         12"));
    }
}
