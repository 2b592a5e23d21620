//! N-Queens by explicit-stack backtracking.
//!
//! Depth-first search over row-by-row queen placements, driven by a stack
//! of column choices instead of recursion. Stack depth is bounded by the
//! board size and every intermediate board can be inspected or replayed.
//!
//! # References
//!
//! - Wirth, N. (1976), *Algorithms + Data Structures = Programs*, §3.5
//! - Knuth, D. E. (2019), *The Art of Computer Programming* Vol. 4, Fascicle 5

mod config;
mod runner;
mod types;

pub use config::QueensConfig;
pub use runner::{QueensResult, QueensRunner};
pub use types::{QueensEvent, QueensTrace};
