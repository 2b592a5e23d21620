//! Explicit-stack backtracking.
//!
//! # Algorithm
//!
//! The board is a stack of column choices, one per filled row. At each
//! step the search tries the next candidate column of the current row:
//!
//! 1. If the column is free, push it and restart at column 0 of the next row
//! 2. If it is attacked, advance to the next column
//! 3. If the row has no columns left, pop the previous row's queen and
//!    resume after its column
//!
//! A full stack is a solution; it is recorded and then popped like a dead end.
//! Occupancy of columns and both diagonals is tracked so each test is O(1).

use tracing::debug;

use super::config::QueensConfig;
use super::types::{QueensEvent, QueensTrace};
use crate::error::SolveError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of an N-Queens run.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct QueensResult {
    /// Solutions in lexicographic order; `solution[row]` is the column.
    pub solutions: Vec<Vec<usize>>,

    /// Recorded events (empty when tracing is off).
    pub trace: QueensTrace,

    /// Total queens placed.
    pub placements: u64,

    /// Total queens removed.
    pub backtracks: u64,

    /// Whether the whole tree was explored.
    pub complete: bool,
}

/// Queens placed so far plus attack bookkeeping.
struct Board {
    n: usize,
    columns: Vec<usize>,
    col_used: Vec<bool>,
    diag_used: Vec<bool>,
    anti_used: Vec<bool>,
}

impl Board {
    fn new(n: usize) -> Self {
        Self {
            n,
            columns: Vec::with_capacity(n),
            col_used: vec![false; n],
            diag_used: vec![false; 2 * n - 1],
            anti_used: vec![false; 2 * n - 1],
        }
    }

    fn row(&self) -> usize {
        self.columns.len()
    }

    fn is_full(&self) -> bool {
        self.columns.len() == self.n
    }

    fn is_free(&self, col: usize) -> bool {
        let row = self.row();
        !self.col_used[col] && !self.diag_used[row + col] && !self.anti_used[row + self.n - 1 - col]
    }

    fn set(&mut self, row: usize, col: usize, used: bool) {
        self.col_used[col] = used;
        self.diag_used[row + col] = used;
        self.anti_used[row + self.n - 1 - col] = used;
    }

    fn place(&mut self, col: usize) {
        let row = self.row();
        self.set(row, col, true);
        self.columns.push(col);
    }

    /// Removes the last queen, returning its `(row, col)`.
    fn remove(&mut self) -> Option<(usize, usize)> {
        let col = self.columns.pop()?;
        let row = self.columns.len();
        self.set(row, col, false);
        Some((row, col))
    }
}

/// Executes the N-Queens backtracker.
pub struct QueensRunner;

impl QueensRunner {
    /// Enumerates placements of `config.n` non-attacking queens.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_branchbound::queens::{QueensConfig, QueensRunner};
    ///
    /// let result = QueensRunner::run(&QueensConfig::new(4)).unwrap();
    /// assert_eq!(result.solutions, vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
    /// ```
    pub fn run(config: &QueensConfig) -> Result<QueensResult, SolveError> {
        config.validate()?;

        let n = config.n;
        let mut board = Board::new(n);
        let mut trace = QueensTrace::default();
        let mut solutions = Vec::new();
        let mut placements = 0u64;
        let mut backtracks = 0u64;
        let mut complete = true;
        let mut next_col = 0usize;

        let record = |trace: &mut QueensTrace, event: QueensEvent| {
            if config.record_trace {
                trace.push(event);
            }
        };

        debug!(n, max_solutions = config.max_solutions, "starting n-queens backtracking");

        loop {
            if board.is_full() {
                solutions.push(board.columns.clone());
                record(
                    &mut trace,
                    QueensEvent::Solution {
                        columns: board.columns.clone(),
                    },
                );
                if config.max_solutions > 0 && solutions.len() >= config.max_solutions {
                    complete = false;
                    break;
                }
            } else if next_col < n {
                let row = board.row();
                if board.is_free(next_col) {
                    board.place(next_col);
                    placements += 1;
                    record(&mut trace, QueensEvent::Place { row, col: next_col });
                    next_col = 0;
                } else {
                    record(&mut trace, QueensEvent::Conflict { row, col: next_col });
                    next_col += 1;
                }
                continue;
            }

            // Full board or exhausted row: undo the last placement.
            let Some((row, col)) = board.remove() else {
                break;
            };
            backtracks += 1;
            record(&mut trace, QueensEvent::Backtrack { row, col });
            next_col = col + 1;
        }

        debug!(
            n,
            solutions = solutions.len(),
            placements,
            backtracks,
            complete,
            "n-queens backtracking finished"
        );

        Ok(QueensResult {
            solutions,
            trace,
            placements,
            backtracks,
            complete,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_valid(columns: &[usize]) -> bool {
        for (r1, &c1) in columns.iter().enumerate() {
            for (r2, &c2) in columns.iter().enumerate().skip(r1 + 1) {
                if c1 == c2 || r2 - r1 == c1.abs_diff(c2) {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn test_known_solution_counts() {
        for (n, expected) in [(1, 1), (2, 0), (3, 0), (4, 2), (5, 10), (6, 4), (8, 92)] {
            let config = QueensConfig::new(n).with_record_trace(false);
            let result = QueensRunner::run(&config).unwrap();
            assert_eq!(result.solutions.len(), expected, "n = {n}");
            assert!(result.complete);
        }
    }

    #[test]
    fn test_solutions_are_valid_and_sorted() {
        let result = QueensRunner::run(&QueensConfig::new(6)).unwrap();
        for solution in &result.solutions {
            assert_eq!(solution.len(), 6);
            assert!(is_valid(solution), "invalid placement {solution:?}");
        }
        for pair in result.solutions.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_first_solution_for_eight() {
        let config = QueensConfig::new(8).with_max_solutions(1);
        let result = QueensRunner::run(&config).unwrap();

        assert_eq!(result.solutions, vec![vec![0, 4, 7, 5, 2, 6, 1, 3]]);
        assert!(!result.complete);
    }

    #[test]
    fn test_trace_replay_matches_checkpoints() {
        let result = QueensRunner::run(&QueensConfig::new(5)).unwrap();
        let mut checkpoints = 0;

        for (step, event) in result.trace.events().iter().enumerate() {
            if let QueensEvent::Solution { columns } = event {
                assert_eq!(&result.trace.board_at(step), columns);
                checkpoints += 1;
            }
        }
        assert_eq!(checkpoints, 10);
        assert!(result.trace.board_at(result.trace.len()).is_empty());
    }

    #[test]
    fn test_placements_balance_backtracks() {
        let result = QueensRunner::run(&QueensConfig::new(6)).unwrap();
        // Every queen placed is eventually removed once the tree is exhausted.
        assert_eq!(result.placements, result.backtracks);

        let places = result
            .trace
            .events()
            .iter()
            .filter(|e| matches!(e, QueensEvent::Place { .. }))
            .count() as u64;
        assert_eq!(places, result.placements);
    }

    #[test]
    fn test_quiet_run_records_nothing() {
        let result = QueensRunner::run(&QueensConfig::new(4).with_record_trace(false)).unwrap();
        assert!(result.trace.is_empty());
        assert_eq!(result.solutions.len(), 2);
    }

    #[test]
    fn test_zero_board_rejected() {
        assert!(matches!(
            QueensRunner::run(&QueensConfig::new(0)),
            Err(SolveError::InvalidBoardSize { n: 0 })
        ));
    }
}
