// Standard Library Imports
use std::cmp::Ordering;

// External Crate Imports
use derive_more::{From, Into};
use itertools::Itertools;

// Public API ==========================================================================================================

/// Ranks `data` in ascending order, starting from 1
///
/// Tied values all receive the mean of the rank positions they span, so `[1.0, 2.0, 2.0, 3.0]` is ranked as
/// `[1.0, 2.5, 2.5, 4.0]`. The returned ranks line up index-for-index with `data`.
#[must_use]
pub fn average_ranks(data: &[f64]) -> Vec<f64> {
    let mut ranks = vec![0.0; data.len()];

    let sorted = data
        .iter()
        .copied()
        .map(TotalFloat::from)
        .enumerate()
        .sorted_by_key(|&(_, value)| value);
    let tie_groups = sorted.chunk_by(|&(_, value)| value);

    let mut preceding = 0;
    for (_, tied) in &tie_groups {
        let indices: Vec<_> = tied.map(|(index, _)| index).collect();
        // NOTE: The tied positions run from `preceding + 1` to `preceding + indices.len()` inclusive
        let rank = mean_position(preceding, indices.len());
        for index in &indices {
            ranks[*index] = rank;
        }
        preceding += indices.len();
    }

    ranks
}

// Private Helper Functions ============================================================================================

#[allow(clippy::cast_precision_loss)]
fn mean_position(preceding: usize, group_size: usize) -> f64 {
    (2 * preceding + group_size + 1) as f64 / 2.0
}

// Totally Ordered Floats ==============================================================================================

#[derive(Copy, Clone, Debug, From, Into)]
struct TotalFloat(f64);

impl Ord for TotalFloat {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for TotalFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for TotalFloat {
    fn eq(&self, other: &Self) -> bool {
        // NOTE: Must agree with `Ord`, so this can't just be `self.0 == other.0`
        self.cmp(other).is_eq()
    }
}

impl Eq for TotalFloat {}

// Module Tests ========================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_without_ties() {
        assert_eq!(average_ranks(&[3.0, 1.0, 2.0]), [3.0, 1.0, 2.0]);
        assert_eq!(average_ranks(&[10.0, 20.0, 30.0, 40.0]), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn ranks_with_ties() {
        assert_eq!(average_ranks(&[1.0, 2.0, 2.0, 3.0]), [1.0, 2.5, 2.5, 4.0]);
        assert_eq!(average_ranks(&[5.0, 1.0, 5.0, 5.0]), [3.0, 1.0, 3.0, 3.0]);
        // Two separate groups of ties
        assert_eq!(
            average_ranks(&[0.0, 7.0, 0.0, 7.0, 3.0]),
            [1.5, 4.5, 1.5, 4.5, 3.0]
        );
    }

    #[test]
    fn ranks_all_equal() {
        assert_eq!(average_ranks(&[4.2; 5]), [3.0; 5]);
    }

    #[test]
    fn ranks_empty() {
        assert!(average_ranks(&[]).is_empty());
    }

    #[test]
    fn rank_sum_is_triangular() {
        // However ties fall, ranks always sum to n(n + 1) / 2
        let data = [9.03, 5.0, 5.0, 1.29, 5.0, 0.0, 0.0, 81.0];
        let total: f64 = average_ranks(&data).iter().sum();
        assert_eq!(total, 36.0);
    }

    #[test]
    fn total_float_equality() {
        assert_eq!(TotalFloat(1.5), TotalFloat(1.5));
        assert_ne!(TotalFloat(1.5), TotalFloat(2.5));
        assert!(TotalFloat(-1.0) < TotalFloat(1.0));
    }
}
