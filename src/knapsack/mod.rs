//! Best-first branch-and-bound for the 0/1 knapsack problem.
//!
//! Items are ranked by value density, and each search node decides the
//! next ranked item (include or exclude). Nodes are expanded in order of
//! their fractional-relaxation bound. A node is pruned as soon as its
//! bound cannot beat the best solution found so far.
//!
//! Every transition is recorded as an immutable [`TraceEntry`], so an
//! external player can replay the search step by step.
//!
//! # References
//!
//! - Land, A. H. & Doig, A. G. (1960), "An Automatic Method of Solving
//!   Discrete Programming Problems", *Econometrica* 28(3)
//! - Horowitz, E. & Sahni, S. (1974), "Computing Partitions with
//!   Applications to the Knapsack Problem", *JACM* 21(2)

pub mod batch;
mod bound;
mod config;
mod frontier;
mod generate;
mod node;
mod ranking;
mod runner;
mod stats;
mod trace;
mod types;

pub use bound::fractional_bound;
pub use config::BnbConfig;
pub use frontier::Frontier;
pub use generate::random_problem;
pub use node::{Incumbent, SearchNode};
pub use ranking::Ranking;
pub use runner::{BnbRunner, KnapsackSolution, SearchStatus};
pub use stats::BnbStats;
pub use trace::{ChildOutcome, NodeSnapshot, TraceEntry, TraceEvent, TraceKind, TraceRecorder};
pub use types::{Item, KnapsackProblem};
