//! Seeded random instances for demos and benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Item, KnapsackProblem};
use crate::error::SolveError;

/// Builds a random instance with integral weights and values.
///
/// Weights are drawn from `1..=max_weight` and values from
/// `0..=max_value`. The capacity is `capacity_ratio` times the total
/// weight, rounded down. The same `seed` always yields the same instance.
///
/// # Examples
///
/// ```
/// use u_branchbound::knapsack::random_problem;
///
/// let problem = random_problem(20, 50, 100, 0.5, 7).unwrap();
/// assert_eq!(problem.items.len(), 20);
/// assert!(problem.validate().is_ok());
/// assert_eq!(problem, random_problem(20, 50, 100, 0.5, 7).unwrap());
/// ```
pub fn random_problem(
    n: usize,
    max_weight: u32,
    max_value: u32,
    capacity_ratio: f64,
    seed: u64,
) -> Result<KnapsackProblem, SolveError> {
    if n == 0 {
        return Err(SolveError::EmptyItems);
    }
    if max_weight == 0 {
        return Err(SolveError::InvalidConfig("max_weight must be positive".into()));
    }
    if !capacity_ratio.is_finite() || capacity_ratio < 0.0 {
        return Err(SolveError::InvalidConfig(format!(
            "capacity_ratio must be finite and non-negative, got {capacity_ratio}"
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let items: Vec<Item> = (0..n)
        .map(|id| {
            let weight = rng.random_range(1..=max_weight);
            let value = rng.random_range(0..=max_value);
            Item::new(id, f64::from(weight), f64::from(value))
        })
        .collect();

    let total_weight: f64 = items.iter().map(|item| item.weight).sum();
    Ok(KnapsackProblem::new((total_weight * capacity_ratio).floor(), items))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_for_seed() {
        let a = random_problem(15, 30, 60, 0.4, 42).unwrap();
        let b = random_problem(15, 30, 60, 0.4, 42).unwrap();
        let c = random_problem(15, 30, 60, 0.4, 43).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_ranges() {
        let problem = random_problem(100, 10, 5, 0.5, 1).unwrap();
        for item in &problem.items {
            assert!((1.0..=10.0).contains(&item.weight));
            assert!((0.0..=5.0).contains(&item.value));
            assert_eq!(item.weight.fract(), 0.0);
        }
        let total: f64 = problem.items.iter().map(|i| i.weight).sum();
        assert_eq!(problem.capacity, (total * 0.5).floor());
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert_eq!(random_problem(0, 10, 10, 0.5, 1), Err(SolveError::EmptyItems));
        assert!(random_problem(5, 0, 10, 0.5, 1).is_err());
        assert!(random_problem(5, 10, 10, -0.1, 1).is_err());
    }
}
