use crate::ArgsortKey;
use crate::error::Result;

use super::common;

/// Stable quadratic baseline.
pub fn argsort<K: ArgsortKey>(data: &[K]) -> Result<Vec<usize>> {
    let mut indices = common::identity_indices(data.len())?;
    common::insertion_sort_indices(data, &mut indices);
    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_keep_input_order() {
        let data = [4_u32, 2, 4, 1, 2, 3];
        assert_eq!(argsort(&data).unwrap(), vec![3, 1, 4, 5, 0, 2]);
    }

    #[test]
    fn full_width_extremes() {
        let data = [u64::MAX, 0, u64::MAX, 0];
        assert_eq!(argsort(&data).unwrap(), vec![1, 3, 0, 2]);
    }
}
