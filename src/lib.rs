//! Traceable branch-and-bound and backtracking solvers.
//!
//! Provides exact combinatorial search algorithms that record every
//! decision as a replayable trace:
//!
//! - **Knapsack branch-and-bound**: Best-first search over include/exclude
//!   decisions, ordered and pruned by a fractional-relaxation bound.
//! - **N-Queens backtracking**: Depth-first search driven by an explicit
//!   stack of placements rather than recursion.
//!
//! # Architecture
//!
//! Each solver is a pure function from input to `(result, trace)`. A run
//! owns all of its state, so independent runs can execute on separate
//! threads without synchronization. Rendering and playback of traces are
//! left to consumers.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for all public data types
//! - `parallel`: solve knapsack batches on rayon's thread pool
//! - `wasm`: JavaScript bindings via `wasm-bindgen`

pub mod error;
pub mod knapsack;
pub mod queens;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::SolveError;
