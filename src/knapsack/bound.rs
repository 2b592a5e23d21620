//! Fractional-relaxation upper bound.
//!
//! Relaxing the 0/1 constraint and filling the remaining capacity greedily
//! by density gives the optimum of the relaxed problem, which is never
//! below the best integral completion. That makes it admissible for
//! pruning a maximization search.

use super::types::Item;

/// Upper bound on the total value reachable from a partial solution.
///
/// `depth` is the number of ranked items already decided; `value` and
/// `weight` are the accumulated totals of the included ones. Items at
/// `ranked[depth..]` are added whole while they fit, then the first one
/// that does not fit contributes the fraction that fills the capacity.
///
/// Returns `0.0` when the partial solution is already at or over
/// capacity. `ranked` must be sorted by density, highest first.
///
/// # Examples
///
/// ```
/// use u_branchbound::knapsack::{fractional_bound, Item};
///
/// let ranked = [Item::new(0, 10.0, 60.0), Item::new(1, 20.0, 100.0), Item::new(2, 30.0, 120.0)];
/// // 60 + 100 + (50 - 30) * 4 = 240
/// assert_eq!(fractional_bound(0, 0.0, 0.0, &ranked, 50.0), 240.0);
/// ```
pub fn fractional_bound(depth: usize, value: f64, weight: f64, ranked: &[Item], capacity: f64) -> f64 {
    if weight >= capacity {
        return 0.0;
    }

    let mut bound = value;
    let mut total_weight = weight;

    for item in ranked.iter().skip(depth) {
        if total_weight + item.weight <= capacity {
            total_weight += item.weight;
            bound += item.value;
        } else {
            bound += (capacity - total_weight) * item.density();
            break;
        }
    }

    bound
}
