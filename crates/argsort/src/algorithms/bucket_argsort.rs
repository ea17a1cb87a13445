use crate::error::Result;
use crate::{ArgsortKey, TUNED_PARAMS};

use super::common;

/// Value-range bucket argsort with one bucket per element.
///
/// Linear for evenly spread keys; clustered keys pile into few buckets and
/// the per-bucket comparison sort dominates. Tie order is not specified.
pub fn argsort<K: ArgsortKey>(data: &[K]) -> Result<Vec<usize>> {
    let len = data.len();
    if len < 2 {
        return common::identity_indices(len);
    }

    let Some((min, max)) = common::min_max(data) else {
        return common::identity_indices(len);
    };
    if min == max {
        return common::identity_indices(len);
    }

    let bucket_count = len;
    let min = min.to_u64();
    let range = (max.to_u64() as u128) - (min as u128) + 1;
    tracing::debug!(len, bucket_count, "bucket argsort");

    // starts[b]..starts[b + 1] is bucket b once the prefix sum has run.
    let mut starts = common::try_zeroed(bucket_count + 1, "bucket offsets")?;
    for &x in data {
        starts[bucket_index(x.to_u64(), min, range, bucket_count)] += 1;
    }
    common::prefix_sum(&mut starts);

    let mut heads = common::try_with_capacity(bucket_count, "bucket heads")?;
    heads.extend_from_slice(&starts[..bucket_count]);

    let mut indices = common::try_zeroed(len, "bucket output")?;
    for (i, &x) in data.iter().enumerate() {
        let slot = &mut heads[bucket_index(x.to_u64(), min, range, bucket_count)];
        indices[*slot] = i;
        *slot += 1;
    }

    for b in 0..bucket_count {
        let bucket = &mut indices[starts[b]..starts[b + 1]];
        if bucket.len() <= 1 {
            continue;
        }
        if bucket.len() <= TUNED_PARAMS.insertion_threshold {
            common::insertion_sort_indices(data, bucket);
        } else {
            bucket.sort_unstable_by_key(|&i| data[i]);
        }
    }

    Ok(indices)
}

#[inline]
fn bucket_index(value: u64, min: u64, range: u128, bucket_count: usize) -> usize {
    let offset = (value - min) as u128;
    let idx = (offset * bucket_count as u128 / range) as usize;
    idx.min(bucket_count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_index_spans_all_buckets() {
        assert_eq!(bucket_index(0, 0, 10, 10), 0);
        assert_eq!(bucket_index(9, 0, 10, 10), 9);
        assert_eq!(bucket_index(u64::MAX, 0, u64::MAX as u128 + 1, 4), 3);
        assert_eq!(bucket_index(105, 100, 10, 2), 1);
    }

    #[test]
    fn full_width_range_does_not_overflow() {
        let data = [u64::MAX, 0, u64::MAX / 2, 1];
        assert_eq!(argsort(&data).unwrap(), vec![1, 3, 2, 0]);
    }

    #[test]
    fn single_hot_bucket() {
        // Everything but one outlier shares the first bucket.
        let mut data: Vec<u64> = (0..200).map(|i| (i * 7919) % 50).collect();
        data.push(u64::MAX);
        let indices = argsort(&data).unwrap();
        assert!(common::is_permutation(&indices, data.len()));
        assert!(common::is_sorted_by_indices(&data, &indices));
        assert_eq!(*indices.last().unwrap(), 200);
    }

    #[test]
    fn all_equal_is_identity() {
        let data = vec![3_u16; 64];
        assert_eq!(argsort(&data).unwrap(), (0..64).collect::<Vec<_>>());
    }
}
