use crate::error::Result;
use crate::{ArgsortKey, TUNED_PARAMS};

use super::{common, radix_argsort};

/// Stable single-pass counting argsort over `[min, max]`.
///
/// Wide or sparse ranges fall back to [`radix_argsort`], which yields the same
/// stable permutation.
pub fn argsort<K: ArgsortKey>(data: &[K]) -> Result<Vec<usize>> {
    let len = data.len();
    if len < 2 || common::is_sorted_non_decreasing(data) {
        return common::identity_indices(len);
    }

    let Some((min, max)) = common::min_max(data) else {
        return common::identity_indices(len);
    };
    if min == max {
        return common::identity_indices(len);
    }

    let min = min.to_u64();
    // `max - min + 1` overflows for the full u64 range, so compare the span.
    let span = max.to_u64() - min;
    let range_cap = TUNED_PARAMS
        .counting_max_range
        .min(len.saturating_mul(TUNED_PARAMS.counting_range_factor));
    if span >= range_cap as u64 {
        tracing::debug!(len, span, range_cap, "counting range too wide, using radix");
        return radix_argsort::argsort(data);
    }

    let mut counts = common::try_zeroed(span as usize + 1, "counting table")?;
    for &x in data {
        counts[(x.to_u64() - min) as usize] += 1;
    }
    common::prefix_sum(&mut counts);

    let mut indices = common::try_zeroed(len, "counting output")?;
    for (i, &x) in data.iter().enumerate() {
        let slot = &mut counts[(x.to_u64() - min) as usize];
        indices[*slot] = i;
        *slot += 1;
    }

    Ok(indices)
}
