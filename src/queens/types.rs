//! N-Queens trace events.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A backtracking transition.
///
/// `Place`, `Conflict`, and `Backtrack` are deltas; `Solution` is a full
/// checkpoint of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "kind", rename_all = "kebab-case")
)]
pub enum QueensEvent {
    /// A queen was placed at `(row, col)`.
    Place { row: usize, col: usize },
    /// `(row, col)` is attacked by an earlier queen.
    Conflict { row: usize, col: usize },
    /// The queen at `(row, col)` was removed.
    Backtrack { row: usize, col: usize },
    /// All rows are filled; `columns[row]` is the queen's column.
    Solution { columns: Vec<usize> },
}

impl fmt::Display for QueensEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueensEvent::Place { row, col } => write!(f, "place queen at row {row}, column {col}"),
            QueensEvent::Conflict { row, col } => {
                write!(f, "row {row}, column {col} is under attack")
            }
            QueensEvent::Backtrack { row, col } => {
                write!(f, "backtrack: remove queen from row {row}, column {col}")
            }
            QueensEvent::Solution { columns } => write!(f, "solution found: {columns:?}"),
        }
    }
}

/// Ordered backtracking events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QueensTrace {
    events: Vec<QueensEvent>,
}

impl QueensTrace {
    pub(crate) fn push(&mut self, event: QueensEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[QueensEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Queen columns by row after event `step` has been applied.
    ///
    /// Replays the placement deltas up to `step`; a step past the end
    /// yields the final board.
    pub fn board_at(&self, step: usize) -> Vec<usize> {
        let mut columns = Vec::new();
        for event in self.events.iter().take(step.saturating_add(1)) {
            match event {
                QueensEvent::Place { col, .. } => columns.push(*col),
                QueensEvent::Backtrack { .. } => {
                    columns.pop();
                }
                QueensEvent::Conflict { .. } | QueensEvent::Solution { .. } => {}
            }
        }
        columns
    }
}
