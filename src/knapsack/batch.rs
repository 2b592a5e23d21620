//! Solving many independent instances.
//!
//! Searches share no state, so instances can run on separate threads
//! without synchronization. With the `parallel` feature the work is spread
//! over rayon's thread pool.

use super::config::BnbConfig;
use super::runner::{BnbRunner, KnapsackSolution};
use super::types::KnapsackProblem;
use crate::error::SolveError;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Solves every problem with the same configuration.
///
/// Results are returned in input order; an invalid problem yields an
/// error in its slot without affecting the others.
pub fn solve_all(
    problems: &[KnapsackProblem],
    config: &BnbConfig,
) -> Vec<Result<KnapsackSolution, SolveError>> {
    #[cfg(feature = "parallel")]
    {
        problems
            .par_iter()
            .map(|problem| BnbRunner::run(problem, config))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        problems
            .iter()
            .map(|problem| BnbRunner::run(problem, config))
            .collect()
    }
}
