//! Best-first branch-and-bound search.
//!
//! # Algorithm
//!
//! 1. Rank items by density and push the root node
//! 2. While the frontier is not empty:
//!    a. Pop the node with the greatest bound
//!    b. Discard it if its bound cannot beat the incumbent
//!    c. Build the include-child (if the next item fits); adopt it as the
//!       incumbent if its value is better
//!    d. Build the exclude-child
//!    e. Push each child whose bound beats the incumbent, prune the rest
//! 3. Map the incumbent back to input items
//!
//! Because nodes pop in bound order, the incumbent is optimal once the
//! frontier drains.
//!
//! # Reference
//!
//! Horowitz, E. & Sahni, S. (1978). *Fundamentals of Computer Algorithms*, ch. 8.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, trace, warn};

use super::config::BnbConfig;
use super::frontier::Frontier;
use super::node::{Incumbent, SearchNode};
use super::ranking::Ranking;
use super::stats::BnbStats;
use super::trace::{ChildOutcome, NodeSnapshot, TraceEntry, TraceEvent, TraceRecorder};
use super::types::{Item, KnapsackProblem};
use crate::error::SolveError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum SearchStatus {
    /// The frontier drained; the solution is proven optimal.
    Optimal,
    /// `max_nodes` pops were reached.
    NodeLimit,
    /// The cancellation flag was raised.
    Cancelled,
}

/// Result of a branch-and-bound run.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct KnapsackSolution {
    /// Total value of the selected items.
    pub best_value: f64,

    /// Selected items in input order.
    pub selected_items: Vec<Item>,

    /// Total weight of the selected items.
    pub total_weight: f64,

    /// Every recorded transition, in order.
    pub trace: Vec<TraceEntry>,

    /// Why the search stopped.
    pub status: SearchStatus,

    /// Search counters.
    pub stats: BnbStats,

    /// Incumbent value after each improvement, starting at 0.
    pub best_history: Vec<f64>,
}

impl KnapsackSolution {
    /// Ids of the selected items, in input order.
    pub fn selected_ids(&self) -> Vec<usize> {
        self.selected_items.iter().map(|item| item.id).collect()
    }

    /// Whether the search ran to completion.
    pub fn is_optimal(&self) -> bool {
        self.status == SearchStatus::Optimal
    }
}

/// Executes the best-first branch-and-bound search.
pub struct BnbRunner;

impl BnbRunner {
    /// Solves `problem` to optimality.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_branchbound::knapsack::{BnbConfig, BnbRunner, KnapsackProblem};
    ///
    /// let problem = KnapsackProblem::from_pairs(50.0, &[(10.0, 60.0), (20.0, 100.0), (30.0, 120.0)]);
    /// let solution = BnbRunner::run(&problem, &BnbConfig::default()).unwrap();
    /// assert_eq!(solution.best_value, 220.0);
    /// assert_eq!(solution.selected_ids(), vec![1, 2]);
    /// ```
    pub fn run(problem: &KnapsackProblem, config: &BnbConfig) -> Result<KnapsackSolution, SolveError> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// The flag is checked before every pop. A cancelled run still returns
    /// the best solution found so far.
    pub fn run_with_cancel(
        problem: &KnapsackProblem,
        config: &BnbConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<KnapsackSolution, SolveError> {
        if let Err(err) = config.validate().and_then(|()| problem.validate()) {
            warn!(%err, "rejected knapsack input");
            return Err(err);
        }

        let mut search = Search::new(problem, config);
        let status = search.run(cancel.as_deref());
        Ok(search.finish(status))
    }
}

/// Mutable state of one search invocation.
struct Search<'a> {
    problem: &'a KnapsackProblem,
    config: &'a BnbConfig,
    ranking: Ranking,
    /// Value scale for `config.improves`.
    scale: f64,
    frontier: Frontier,
    incumbent: Incumbent,
    recorder: TraceRecorder,
    stats: BnbStats,
    best_history: Vec<f64>,
}

impl<'a> Search<'a> {
    fn new(problem: &'a KnapsackProblem, config: &'a BnbConfig) -> Self {
        let ranking = Ranking::by_density(&problem.items);
        let incumbent = Incumbent::empty(ranking.len());
        let mut search = Self {
            problem,
            config,
            ranking,
            scale: problem.max_value(),
            frontier: Frontier::new(),
            incumbent,
            recorder: TraceRecorder::new(config.record_trace),
            stats: BnbStats::default(),
            best_history: vec![0.0],
        };

        let root = SearchNode::root(&search.ranking, problem.capacity);
        debug!(
            items = search.ranking.len(),
            capacity = problem.capacity,
            root_bound = root.bound(),
            "starting branch-and-bound search"
        );
        search.recorder.record(TraceEvent::Root {
            node: NodeSnapshot::from(&root),
        });
        search.frontier.push(root);
        search.stats.nodes_pushed += 1;
        search
    }

    fn run(&mut self, cancel: Option<&AtomicBool>) -> SearchStatus {
        loop {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                return SearchStatus::Cancelled;
            }
            if self.config.max_nodes > 0 && self.stats.nodes_popped >= self.config.max_nodes as u64 {
                return SearchStatus::NodeLimit;
            }
            let Some(node) = self.frontier.pop_max() else {
                return SearchStatus::Optimal;
            };
            self.expand(node);
        }
    }

    fn expand(&mut self, node: SearchNode) {
        self.stats.nodes_popped += 1;
        trace!(
            depth = node.depth(),
            value = node.value(),
            bound = node.bound(),
            frontier = self.frontier.len(),
            "pop"
        );
        self.recorder.record_step(|| TraceEvent::Pop {
            node: NodeSnapshot::from(&node),
        });

        let best = self.incumbent.value();
        if !self.improves(node.bound(), best) {
            self.stats.pruned_at_pop += 1;
            self.recorder.record_step(|| TraceEvent::Pruned {
                node: NodeSnapshot::from(&node),
                best_value: best,
            });
            return;
        }

        // A node with every item decided has no children.
        let Some(item_id) = self.ranking.items().get(node.depth()).map(|item| item.id) else {
            return;
        };

        match node.include(&self.ranking, self.problem.capacity) {
            Some(child) => {
                if self.improves(child.value(), self.incumbent.value()) {
                    self.adopt(&child);
                }
                self.settle(child, item_id, true);
            }
            None => self.stats.infeasible_includes += 1,
        }

        if let Some(child) = node.exclude(&self.ranking, self.problem.capacity) {
            self.settle(child, item_id, false);
        }
    }

    fn improves(&self, candidate: f64, best: f64) -> bool {
        self.config.improves(candidate, best, self.scale)
    }

    fn adopt(&mut self, node: &SearchNode) {
        self.incumbent.replace_with(node);
        self.stats.incumbent_updates += 1;
        self.best_history.push(node.value());
        debug!(best_value = node.value(), depth = node.depth(), "incumbent improved");
        self.recorder.record_step(|| TraceEvent::NewIncumbent {
            best_value: node.value(),
            mask: Arc::clone(&node.mask),
        });
    }

    /// Pushes `child` if its bound beats the incumbent, otherwise drops it.
    fn settle(&mut self, child: SearchNode, item_id: usize, included: bool) {
        let best_value = self.incumbent.value();
        let outcome = if self.improves(child.bound(), best_value) {
            ChildOutcome::Pushed
        } else {
            ChildOutcome::Pruned
        };

        self.recorder.record_step(|| {
            let node = NodeSnapshot::from(&child);
            if included {
                TraceEvent::IncludeChild {
                    item_id,
                    node,
                    outcome,
                    best_value,
                }
            } else {
                TraceEvent::ExcludeChild {
                    item_id,
                    node,
                    outcome,
                    best_value,
                }
            }
        });

        match outcome {
            ChildOutcome::Pushed => {
                self.frontier.push(child);
                self.stats.nodes_pushed += 1;
            }
            ChildOutcome::Pruned => self.stats.pruned_at_birth += 1,
        }
    }

    fn finish(mut self, status: SearchStatus) -> KnapsackSolution {
        let selected_items: Vec<Item> = self
            .ranking
            .selected_input_indices(self.incumbent.mask())
            .into_iter()
            .map(|index| self.problem.items[index])
            .collect();
        let total_weight: f64 = selected_items.iter().map(|item| item.weight).sum();
        let best_value = self.incumbent.value();

        self.recorder.record(TraceEvent::Final {
            best_value,
            selected_ids: selected_items.iter().map(|item| item.id).collect(),
            total_weight,
        });
        self.stats.max_frontier = self.frontier.high_water();

        match status {
            SearchStatus::Optimal => debug!(
                best_value,
                total_weight,
                nodes = self.stats.nodes_popped,
                "branch-and-bound search finished"
            ),
            SearchStatus::NodeLimit | SearchStatus::Cancelled => warn!(
                ?status,
                best_value,
                pending = self.frontier.len(),
                "branch-and-bound search stopped early"
            ),
        }

        KnapsackSolution {
            best_value,
            selected_items,
            total_weight,
            trace: self.recorder.into_entries(),
            status,
            stats: self.stats,
            best_history: self.best_history,
        }
    }
}
