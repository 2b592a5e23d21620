//! Density ranking of items.

use super::types::Item;

/// Items sorted by `value / weight`, highest density first.
///
/// The sort is stable: items of equal density keep their input order,
/// so a rank position always maps back to the same input index.
#[derive(Debug, Clone)]
pub struct Ranking {
    items: Vec<Item>,
    input_index: Vec<usize>,
}

impl Ranking {
    /// Ranks `items` without mutating them.
    ///
    /// Expects validated items (finite, positive weights); every density
    /// is then finite and `f64::total_cmp` gives a total order.
    pub fn by_density(items: &[Item]) -> Self {
        let densities: Vec<f64> = items.iter().map(Item::density).collect();

        let mut indices: Vec<usize> = (0..items.len()).collect();
        indices.sort_by(|&a, &b| densities[b].total_cmp(&densities[a]));

        Self {
            items: indices.iter().map(|&i| items[i]).collect(),
            input_index: indices,
        }
    }

    /// Ranked items.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position in the original input of the item at `rank`.
    pub fn input_index(&self, rank: usize) -> usize {
        self.input_index[rank]
    }

    /// Converts a ranked-order inclusion mask into input indices, ascending.
    pub fn selected_input_indices(&self, mask: &[bool]) -> Vec<usize> {
        let mut selected: Vec<usize> = mask
            .iter()
            .enumerate()
            .filter(|&(_, &included)| included)
            .map(|(rank, _)| self.input_index[rank])
            .collect();
        selected.sort_unstable();
        selected
    }
}
