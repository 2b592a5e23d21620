//! Knapsack problem definition.

use crate::error::SolveError;
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A candidate item.
///
/// `id` is stable across ranking: the solver reports selections by id
/// so callers can map them back to their own records.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    /// Unique, caller-assigned identifier.
    pub id: usize,
    /// Weight. Must be finite and positive.
    pub weight: f64,
    /// Value. Must be finite and non-negative.
    pub value: f64,
}

impl Item {
    pub fn new(id: usize, weight: f64, value: f64) -> Self {
        Self { id, weight, value }
    }

    /// Value per unit weight.
    ///
    /// Only meaningful for validated items (`weight > 0`).
    pub fn density(&self) -> f64 {
        self.value / self.weight
    }
}

/// A 0/1 knapsack instance.
///
/// # Examples
///
/// ```
/// use u_branchbound::knapsack::KnapsackProblem;
///
/// let problem = KnapsackProblem::from_pairs(50.0, &[(10.0, 60.0), (20.0, 100.0), (30.0, 120.0)]);
/// assert_eq!(problem.items.len(), 3);
/// assert_eq!(problem.items[2].id, 2);
/// assert!(problem.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KnapsackProblem {
    /// Items in caller order.
    pub items: Vec<Item>,
    /// Maximum total weight.
    pub capacity: f64,
}

impl KnapsackProblem {
    pub fn new(capacity: f64, items: Vec<Item>) -> Self {
        Self { items, capacity }
    }

    /// Builds a problem from `(weight, value)` pairs, assigning ids by position.
    pub fn from_pairs(capacity: f64, pairs: &[(f64, f64)]) -> Self {
        let items = pairs
            .iter()
            .enumerate()
            .map(|(id, &(weight, value))| Item::new(id, weight, value))
            .collect();
        Self { items, capacity }
    }

    /// Largest item value, or `0` when every value is zero.
    pub fn max_value(&self) -> f64 {
        self.items.iter().map(|item| item.value).fold(0.0, f64::max)
    }

    /// Checks the input contract.
    ///
    /// Capacity `0` is accepted; it simply admits no item.
    pub fn validate(&self) -> Result<(), SolveError> {
        if self.items.is_empty() {
            return Err(SolveError::EmptyItems);
        }
        if !self.capacity.is_finite() || self.capacity < 0.0 {
            return Err(SolveError::InvalidCapacity {
                capacity: self.capacity,
            });
        }

        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if !item.weight.is_finite() || item.weight <= 0.0 {
                return Err(SolveError::InvalidWeight {
                    id: item.id,
                    weight: item.weight,
                });
            }
            if !item.value.is_finite() || item.value < 0.0 {
                return Err(SolveError::InvalidValue {
                    id: item.id,
                    value: item.value,
                });
            }
            if !seen.insert(item.id) {
                return Err(SolveError::DuplicateItemId { id: item.id });
            }
        }
        Ok(())
    }
}
