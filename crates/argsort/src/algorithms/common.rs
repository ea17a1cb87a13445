use crate::error::{ArgsortError, Result};
use crate::{ArgsortKey, TUNED_PARAMS};

/// Allocates `[0, 1, ..., len - 1]`, surfacing allocation failure as an error.
pub fn identity_indices(len: usize) -> Result<Vec<usize>> {
    let mut indices = try_with_capacity(len, "index array")?;
    indices.extend(0..len);
    Ok(indices)
}

pub fn try_zeroed(len: usize, buffer: &'static str) -> Result<Vec<usize>> {
    let mut buf = try_with_capacity(len, buffer)?;
    buf.resize(len, 0);
    Ok(buf)
}

pub fn try_with_capacity<T>(len: usize, buffer: &'static str) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|source| ArgsortError::ResourceExhausted { buffer, len, source })?;
    Ok(buf)
}

/// Stable insertion sort of `indices` by `data[index]`.
#[inline]
pub fn insertion_sort_indices<K: ArgsortKey>(data: &[K], indices: &mut [usize]) {
    for i in 1..indices.len() {
        let cur = indices[i];
        let key = data[cur];
        let mut j = i;
        while j > 0 {
            let prev = indices[j - 1];
            if data[prev] <= key {
                break;
            }
            indices[j] = prev;
            j -= 1;
        }
        indices[j] = cur;
    }
}

#[inline]
pub fn is_sorted_non_decreasing<K: ArgsortKey>(data: &[K]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

#[inline]
pub fn min_max<K: ArgsortKey>(data: &[K]) -> Option<(K, K)> {
    let (&first, rest) = data.split_first()?;
    let mut min = first;
    let mut max = first;
    for &x in rest {
        if x < min {
            min = x;
        }
        if x > max {
            max = x;
        }
    }
    Some((min, max))
}

#[inline]
pub fn median3<K: ArgsortKey>(a: K, b: K, c: K) -> K {
    if a < b {
        if b < c {
            b
        } else if a < c {
            c
        } else {
            a
        }
    } else if a < c {
        a
    } else if b < c {
        c
    } else {
        b
    }
}

#[inline]
pub fn choose_pivot_median3<K: ArgsortKey>(data: &[K], indices: &[usize]) -> K {
    let len = indices.len();
    median3(data[indices[0]], data[indices[len >> 1]], data[indices[len - 1]])
}

/// Pivot value for `indices`: median of three samples, or the ninther of
/// nine spread samples once the range is large enough.
#[inline]
pub fn choose_pivot<K: ArgsortKey>(data: &[K], indices: &[usize]) -> K {
    if indices.len() < TUNED_PARAMS.ninther_threshold {
        return choose_pivot_median3(data, indices);
    }

    let at = |pos: usize| data[indices[pos]];
    let step = indices.len() / 8;
    let m1 = median3(at(0), at(step), at(step * 2));
    let mid = indices.len() / 2;
    let m2 = median3(at(mid - step), at(mid), at(mid + step));
    let r = indices.len() - 1;
    let m3 = median3(at(r - step * 2), at(r - step), at(r));
    median3(m1, m2, m3)
}

/// Dutch-flag partition of `indices` around `pivot`. Returns `(lt, gt)` such
/// that `indices[..lt]` reference smaller values, `indices[lt..gt]` equal ones
/// and `indices[gt..]` larger ones.
#[inline]
pub fn partition_3way<K: ArgsortKey>(
    data: &[K],
    indices: &mut [usize],
    pivot: K,
) -> (usize, usize) {
    let mut lt = 0usize;
    let mut i = 0usize;
    let mut gt = indices.len();

    while i < gt {
        let v = data[indices[i]];
        if v < pivot {
            indices.swap(i, lt);
            i += 1;
            lt += 1;
        } else if v > pivot {
            gt -= 1;
            indices.swap(i, gt);
        } else {
            i += 1;
        }
    }

    (lt, gt)
}

/// Turns per-slot counts into exclusive starting offsets.
#[inline]
pub fn prefix_sum(counts: &mut [usize]) {
    let mut sum = 0usize;
    for c in counts.iter_mut() {
        let old = *c;
        *c = sum;
        sum += old;
    }
}

/// Whether `indices` holds each of `0..len` exactly once.
///
/// Verification helper for tests and external harnesses. Unlike the sorting
/// paths it allocates its `seen` table infallibly and never returns
/// [`ArgsortError::ResourceExhausted`].
pub fn is_permutation(indices: &[usize], len: usize) -> bool {
    if indices.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &i in indices {
        if i >= len || seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}

/// Whether `data[indices[i]] <= data[indices[i + 1]]` for every adjacent pair.
pub fn is_sorted_by_indices<K: Ord>(data: &[K], indices: &[usize]) -> bool {
    indices.windows(2).all(|w| data[w[0]] <= data[w[1]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_indices_counts_up() {
        assert_eq!(identity_indices(0).unwrap(), Vec::<usize>::new());
        assert_eq!(identity_indices(4).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn oversized_reservation_is_reported() {
        let err = try_zeroed(usize::MAX, "scratch").unwrap_err();
        match err {
            ArgsortError::ResourceExhausted { buffer, len, .. } => {
                assert_eq!(buffer, "scratch");
                assert_eq!(len, usize::MAX);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn insertion_sort_indices_is_stable() {
        let data = [2_u64, 1, 2, 1, 0];
        let mut indices = vec![0, 1, 2, 3, 4];
        insertion_sort_indices(&data, &mut indices);
        assert_eq!(indices, vec![4, 1, 3, 0, 2]);
    }

    #[test]
    fn median3_picks_middle() {
        for (a, b, c) in [(1, 2, 3), (3, 2, 1), (2, 1, 3), (2, 3, 1), (1, 3, 2), (3, 1, 2)] {
            assert_eq!(median3::<u64>(a, b, c), 2);
        }
        assert_eq!(median3::<u64>(5, 5, 1), 5);
    }

    #[test]
    fn partition_3way_groups_pivot() {
        let data = [4_u64, 7, 4, 1, 9, 4, 0];
        let mut indices: Vec<usize> = (0..data.len()).collect();
        let (lt, gt) = partition_3way(&data, &mut indices, 4);

        assert!(indices[..lt].iter().all(|&i| data[i] < 4));
        assert!(indices[lt..gt].iter().all(|&i| data[i] == 4));
        assert!(indices[gt..].iter().all(|&i| data[i] > 4));
        assert_eq!(gt - lt, 3);
        assert!(is_permutation(&indices, data.len()));
    }

    #[test]
    fn prefix_sum_is_exclusive() {
        let mut counts = [2, 0, 3, 1];
        prefix_sum(&mut counts);
        assert_eq!(counts, [0, 2, 2, 5]);
    }

    #[test]
    fn permutation_checks() {
        assert!(is_permutation(&[], 0));
        assert!(is_permutation(&[2, 0, 1], 3));
        assert!(!is_permutation(&[0, 0, 1], 3));
        assert!(!is_permutation(&[0, 3, 1], 3));
        assert!(!is_permutation(&[0, 1], 3));
    }

    #[test]
    fn sorted_by_indices_checks() {
        let data = [3_u64, 1, 2];
        assert!(is_sorted_by_indices(&data, &[1, 2, 0]));
        assert!(!is_sorted_by_indices(&data, &[0, 1, 2]));
    }
}
