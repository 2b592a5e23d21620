//! Search nodes and the incumbent.

use super::bound::fractional_bound;
use super::ranking::Ranking;
use std::sync::Arc;

/// An immutable partial assignment of the ranked items.
///
/// The first `depth` ranked items have been decided; `mask[i]` tells
/// whether ranked item `i` was included. Nodes are never mutated: the
/// search derives new ones with [`SearchNode::include`] and
/// [`SearchNode::exclude`]. An include-child allocates a fresh mask, so
/// no two live nodes can observe each other's changes.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub(crate) depth: usize,
    pub(crate) value: f64,
    pub(crate) weight: f64,
    pub(crate) bound: f64,
    pub(crate) mask: Arc<[bool]>,
}

impl SearchNode {
    /// The root: nothing decided, nothing included.
    pub fn root(ranking: &Ranking, capacity: f64) -> Self {
        Self {
            depth: 0,
            value: 0.0,
            weight: 0.0,
            bound: fractional_bound(0, 0.0, 0.0, ranking.items(), capacity),
            mask: vec![false; ranking.len()].into(),
        }
    }

    /// Child that takes the next ranked item.
    ///
    /// Returns `None` when the item would overflow the capacity or when
    /// every item is already decided.
    pub fn include(&self, ranking: &Ranking, capacity: f64) -> Option<Self> {
        let item = ranking.items().get(self.depth)?;
        let weight = self.weight + item.weight;
        if weight > capacity {
            return None;
        }

        let value = self.value + item.value;
        let depth = self.depth + 1;
        let mut mask = self.mask.to_vec();
        mask[self.depth] = true;

        Some(Self {
            depth,
            value,
            weight,
            bound: fractional_bound(depth, value, weight, ranking.items(), capacity),
            mask: mask.into(),
        })
    }

    /// Child that skips the next ranked item.
    ///
    /// Returns `None` when every item is already decided.
    pub fn exclude(&self, ranking: &Ranking, capacity: f64) -> Option<Self> {
        if self.depth >= ranking.len() {
            return None;
        }
        let depth = self.depth + 1;

        Some(Self {
            depth,
            value: self.value,
            weight: self.weight,
            bound: fractional_bound(depth, self.value, self.weight, ranking.items(), capacity),
            // The decided bit stays false, so the parent's mask is already correct.
            mask: Arc::clone(&self.mask),
        })
    }

    /// Number of ranked items decided.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Rank of the last decided item, or `None` for the root.
    pub fn level(&self) -> Option<usize> {
        self.depth.checked_sub(1)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn bound(&self) -> f64 {
        self.bound
    }

    /// Inclusion flags in ranked order.
    pub fn mask(&self) -> &[bool] {
        &self.mask
    }
}

/// Best complete solution found so far in one search.
#[derive(Debug, Clone)]
pub struct Incumbent {
    pub(crate) value: f64,
    pub(crate) mask: Arc<[bool]>,
}

impl Incumbent {
    /// The empty selection: value `0`, nothing included.
    pub fn empty(item_count: usize) -> Self {
        Self {
            value: 0.0,
            mask: vec![false; item_count].into(),
        }
    }

    /// Adopts `node` as the new incumbent.
    pub fn replace_with(&mut self, node: &SearchNode) {
        self.value = node.value;
        self.mask = Arc::clone(&node.mask);
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn mask(&self) -> &[bool] {
        &self.mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knapsack::types::Item;

    fn ranking() -> Ranking {
        Ranking::by_density(&[
            Item::new(0, 10.0, 60.0),
            Item::new(1, 20.0, 100.0),
            Item::new(2, 30.0, 120.0),
        ])
    }

    #[test]
    fn test_root() {
        let root = SearchNode::root(&ranking(), 50.0);
        assert_eq!(root.depth(), 0);
        assert_eq!(root.level(), None);
        assert_eq!(root.value(), 0.0);
        assert!((root.bound() - 240.0).abs() < 1e-9);
        assert_eq!(root.mask(), &[false, false, false]);
    }

    #[test]
    fn test_include_sets_bit_and_accumulates() {
        let r = ranking();
        let root = SearchNode::root(&r, 50.0);
        let child = root.include(&r, 50.0).unwrap();

        assert_eq!(child.level(), Some(0));
        assert_eq!(child.value(), 60.0);
        assert_eq!(child.weight(), 10.0);
        assert_eq!(child.mask(), &[true, false, false]);
        // Parent is untouched.
        assert_eq!(root.mask(), &[false, false, false]);
    }

    #[test]
    fn test_sibling_masks_are_independent() {
        let r = ranking();
        let root = SearchNode::root(&r, 50.0);
        let a = root.include(&r, 50.0).unwrap();
        let b = root.exclude(&r, 50.0).unwrap();
        let aa = a.include(&r, 50.0).unwrap();
        let ba = b.include(&r, 50.0).unwrap();

        assert_eq!(aa.mask(), &[true, true, false]);
        assert_eq!(ba.mask(), &[false, true, false]);
        assert_eq!(a.mask(), &[true, false, false]);
    }

    #[test]
    fn test_exclude_shares_parent_mask() {
        let r = ranking();
        let root = SearchNode::root(&r, 50.0);
        let skip = root.exclude(&r, 50.0).unwrap();
        let take = root.include(&r, 50.0).unwrap();

        assert!(Arc::ptr_eq(&root.mask, &skip.mask));
        assert!(!Arc::ptr_eq(&root.mask, &take.mask));
    }

    #[test]
    fn test_include_rejects_overflow() {
        let r = ranking();
        let node = SearchNode::root(&r, 25.0)
            .include(&r, 25.0)
            .and_then(|n| n.include(&r, 25.0));
        assert!(node.is_none());
    }

    #[test]
    fn test_no_children_past_last_item() {
        let r = ranking();
        let mut node = SearchNode::root(&r, 100.0);
        for _ in 0..3 {
            node = node.exclude(&r, 100.0).unwrap();
        }
        assert!(node.include(&r, 100.0).is_none());
        assert!(node.exclude(&r, 100.0).is_none());
    }

    #[test]
    fn test_incumbent_replace() {
        let r = ranking();
        let mut incumbent = Incumbent::empty(3);
        assert_eq!(incumbent.value(), 0.0);

        let child = SearchNode::root(&r, 50.0).include(&r, 50.0).unwrap();
        incumbent.replace_with(&child);
        assert_eq!(incumbent.value(), 60.0);
        assert_eq!(incumbent.mask(), &[true, false, false]);
    }
}
