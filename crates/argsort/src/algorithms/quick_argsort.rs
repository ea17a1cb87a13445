use crate::error::Result;
use crate::{ArgsortKey, TUNED_PARAMS};

use super::common;

/// Unstable three-way quicksort over an index array. Ties keep whatever order
/// the partitions leave them in.
pub fn argsort<K: ArgsortKey>(data: &[K]) -> Result<Vec<usize>> {
    let mut indices = common::identity_indices(data.len())?;
    if data.len() < 2 || common::is_sorted_non_decreasing(data) {
        return Ok(indices);
    }

    quick_sort_3way(data, &mut indices);
    Ok(indices)
}

fn quick_sort_3way<K: ArgsortKey>(data: &[K], mut indices: &mut [usize]) {
    while indices.len() > TUNED_PARAMS.insertion_threshold {
        let pivot = common::choose_pivot(data, indices);
        let (lt, gt) = common::partition_3way(data, indices, pivot);

        // Whole range equals the pivot.
        if lt == 0 && gt == indices.len() {
            return;
        }

        let (left, rest) = indices.split_at_mut(lt);
        let (_, right) = rest.split_at_mut(gt - lt);

        if left.len() < right.len() {
            quick_sort_3way(data, left);
            indices = right;
        } else {
            quick_sort_3way(data, right);
            indices = left;
        }
    }

    common::insertion_sort_indices(data, indices);
}
