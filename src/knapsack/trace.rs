//! Replayable search trace.
//!
//! Each entry is a self-contained snapshot, so a player can seek to any
//! index without replaying the entries before it. Node masks are shared
//! with the nodes they describe rather than copied per entry.

use super::node::SearchNode;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Node state at the moment it was recorded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct NodeSnapshot {
    /// Ranked items decided so far; the root has depth 0.
    pub depth: usize,
    pub value: f64,
    pub weight: f64,
    pub bound: f64,
    /// Inclusion flags in ranked order.
    pub mask: Arc<[bool]>,
}

impl NodeSnapshot {
    /// Rank of the last decided item, or `None` for the root.
    pub fn level(&self) -> Option<usize> {
        self.depth.checked_sub(1)
    }
}

impl From<&SearchNode> for NodeSnapshot {
    fn from(node: &SearchNode) -> Self {
        Self {
            depth: node.depth,
            value: node.value,
            weight: node.weight,
            bound: node.bound,
            mask: Arc::clone(&node.mask),
        }
    }
}

/// What happened to a freshly built child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ChildOutcome {
    /// Added to the frontier.
    Pushed,
    /// Discarded at birth: its bound cannot beat the incumbent.
    Pruned,
}

/// A search transition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "kind", rename_all = "kebab-case", rename_all_fields = "camelCase")
)]
pub enum TraceEvent {
    /// Search initialized with the root node.
    Root { node: NodeSnapshot },
    /// Node taken from the frontier.
    Pop { node: NodeSnapshot },
    /// Popped node discarded because its bound cannot beat the incumbent.
    Pruned { node: NodeSnapshot, best_value: f64 },
    /// Child that takes the item `item_id`.
    IncludeChild {
        item_id: usize,
        node: NodeSnapshot,
        outcome: ChildOutcome,
        best_value: f64,
    },
    /// Child that skips the item `item_id`.
    ExcludeChild {
        item_id: usize,
        node: NodeSnapshot,
        outcome: ChildOutcome,
        best_value: f64,
    },
    /// The incumbent improved.
    NewIncumbent { best_value: f64, mask: Arc<[bool]> },
    /// Search finished.
    Final {
        best_value: f64,
        selected_ids: Vec<usize>,
        total_weight: f64,
    },
}

/// Discriminant of a [`TraceEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceKind {
    Root,
    Pop,
    Pruned,
    IncludeChild,
    ExcludeChild,
    NewIncumbent,
    Final,
}

impl TraceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TraceKind::Root => "root",
            TraceKind::Pop => "pop",
            TraceKind::Pruned => "pruned",
            TraceKind::IncludeChild => "include-child",
            TraceKind::ExcludeChild => "exclude-child",
            TraceKind::NewIncumbent => "new-incumbent",
            TraceKind::Final => "final",
        }
    }
}

impl TraceEvent {
    pub fn kind(&self) -> TraceKind {
        match self {
            TraceEvent::Root { .. } => TraceKind::Root,
            TraceEvent::Pop { .. } => TraceKind::Pop,
            TraceEvent::Pruned { .. } => TraceKind::Pruned,
            TraceEvent::IncludeChild { .. } => TraceKind::IncludeChild,
            TraceEvent::ExcludeChild { .. } => TraceKind::ExcludeChild,
            TraceEvent::NewIncumbent { .. } => TraceKind::NewIncumbent,
            TraceEvent::Final { .. } => TraceKind::Final,
        }
    }

    /// The node this event describes, if any.
    pub fn node(&self) -> Option<&NodeSnapshot> {
        match self {
            TraceEvent::Root { node }
            | TraceEvent::Pop { node }
            | TraceEvent::Pruned { node, .. }
            | TraceEvent::IncludeChild { node, .. }
            | TraceEvent::ExcludeChild { node, .. } => Some(node),
            TraceEvent::NewIncumbent { .. } | TraceEvent::Final { .. } => None,
        }
    }
}

fn describe_child(
    f: &mut fmt::Formatter<'_>,
    verb: &str,
    item_id: usize,
    node: &NodeSnapshot,
    outcome: ChildOutcome,
    best_value: f64,
) -> fmt::Result {
    write!(
        f,
        "{verb} item {item_id}: value {}, weight {}, bound {}",
        node.value, node.weight, node.bound
    )?;
    match outcome {
        ChildOutcome::Pushed => write!(f, ", pushed"),
        ChildOutcome::Pruned => write!(f, ", pruned (bound <= best {best_value})"),
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Root { node } => write!(f, "start with root bound {}", node.bound),
            TraceEvent::Pop { node } => write!(
                f,
                "pop node at depth {}: value {}, weight {}, bound {}",
                node.depth, node.value, node.weight, node.bound
            ),
            TraceEvent::Pruned { node, best_value } => write!(
                f,
                "discard node at depth {}: bound {} <= best {best_value}",
                node.depth, node.bound
            ),
            TraceEvent::IncludeChild {
                item_id,
                node,
                outcome,
                best_value,
            } => describe_child(f, "include", *item_id, node, *outcome, *best_value),
            TraceEvent::ExcludeChild {
                item_id,
                node,
                outcome,
                best_value,
            } => describe_child(f, "exclude", *item_id, node, *outcome, *best_value),
            TraceEvent::NewIncumbent { best_value, .. } => {
                write!(f, "new best value {best_value}")
            }
            TraceEvent::Final {
                best_value,
                selected_ids,
                total_weight,
            } => write!(
                f,
                "done: best value {best_value} with items {selected_ids:?}, total weight {total_weight}"
            ),
        }
    }
}

/// One recorded step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceEntry {
    /// Index of this entry in the trace.
    pub step: usize,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub event: TraceEvent,
    /// Human-readable description of `event`.
    pub message: String,
}

impl TraceEntry {
    pub fn kind(&self) -> TraceKind {
        self.event.kind()
    }
}

/// Append-only log of [`TraceEntry`] values.
///
/// With `verbose` off, [`TraceRecorder::record_step`] is a no-op and only
/// events passed to [`TraceRecorder::record`] are kept.
#[derive(Debug, Clone)]
pub struct TraceRecorder {
    entries: Vec<TraceEntry>,
    verbose: bool,
}

impl TraceRecorder {
    pub fn new(verbose: bool) -> Self {
        Self {
            entries: Vec::new(),
            verbose,
        }
    }

    /// Appends `event` unconditionally.
    pub fn record(&mut self, event: TraceEvent) {
        let message = event.to_string();
        self.entries.push(TraceEntry {
            step: self.entries.len(),
            event,
            message,
        });
    }

    /// Appends the event built by `make` if the recorder is verbose.
    pub fn record_step(&mut self, make: impl FnOnce() -> TraceEvent) {
        if self.verbose {
            self.record(make());
        }
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn get(&self, step: usize) -> Option<&TraceEntry> {
        self.entries.get(step)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<TraceEntry> {
        self.entries
    }
}
