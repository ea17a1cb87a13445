//! LSD radix argsort, 8-bit digits. Every pass is a stable counting sort of
//! the index array, so equal keys keep their input order.

use crate::ArgsortKey;
use crate::error::Result;

use super::common;

const DIGIT_BITS: u32 = 8;
const RADIX: usize = 1 << DIGIT_BITS;
const DIGIT_MASK: u64 = (RADIX as u64) - 1;

pub fn argsort<K: ArgsortKey>(data: &[K]) -> Result<Vec<usize>> {
    let len = data.len();
    let mut indices = common::identity_indices(len)?;
    if len < 2 || common::is_sorted_non_decreasing(data) {
        return Ok(indices);
    }

    let passes = radix_passes(data);
    tracing::debug!(len, passes, key_bits = K::BITS, "radix argsort");
    if passes == 0 {
        return Ok(indices);
    }

    let mut scratch = common::try_zeroed(len, "radix scratch")?;
    let mut counts = [0usize; RADIX];
    for pass in 0..passes {
        let shift = pass * DIGIT_BITS;
        count_digits(data, &indices, &mut counts, shift);
        common::prefix_sum(&mut counts);
        scatter(data, &indices, &mut scratch, &mut counts, shift);
        std::mem::swap(&mut indices, &mut scratch);
    }

    Ok(indices)
}

/// Number of low digits that can differ between keys. Digits above the
/// highest differing bit are shared by every key, so their passes are
/// identity permutations and are skipped.
#[inline]
fn radix_passes<K: ArgsortKey>(data: &[K]) -> u32 {
    let first = data[0].to_u64();
    let mut diff = 0_u64;
    for &x in data.iter().skip(1) {
        diff |= first ^ x.to_u64();
    }
    if diff == 0 {
        return 0;
    }
    (63 - diff.leading_zeros()) / DIGIT_BITS + 1
}

#[inline]
fn digit<K: ArgsortKey>(key: K, shift: u32) -> usize {
    ((key.to_u64() >> shift) & DIGIT_MASK) as usize
}

#[inline]
fn count_digits<K: ArgsortKey>(
    data: &[K],
    indices: &[usize],
    counts: &mut [usize; RADIX],
    shift: u32,
) {
    counts.fill(0);
    for &i in indices {
        counts[digit(data[i], shift)] += 1;
    }
}

#[inline]
fn scatter<K: ArgsortKey>(
    data: &[K],
    src: &[usize],
    dst: &mut [usize],
    offsets: &mut [usize; RADIX],
    shift: u32,
) {
    for &i in src {
        let slot = &mut offsets[digit(data[i], shift)];
        dst[*slot] = i;
        *slot += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_ties_in_input_order() {
        let data = [5_u64, 3, 3, 9, 1];
        assert_eq!(argsort(&data).unwrap(), vec![4, 1, 2, 0, 3]);
    }

    #[test]
    fn pass_count_follows_highest_differing_bit() {
        assert_eq!(radix_passes(&[7_u64, 7, 7]), 0);
        assert_eq!(radix_passes(&[0_u64, 0xFF]), 1);
        assert_eq!(radix_passes(&[0_u64, 0x100]), 2);
        assert_eq!(radix_passes(&[0_u64, u64::MAX]), 8);
        assert_eq!(radix_passes(&[0_u8, u8::MAX]), 1);
        assert_eq!(radix_passes(&[0_u32, u32::MAX]), 4);
        // Shared high digits are skipped.
        assert_eq!(radix_passes(&[0xAB00_0000_0000_0001_u64, 0xAB00_0000_0000_0002]), 1);
    }

    #[test]
    fn all_equal_is_identity() {
        let data = vec![42_u64; 300];
        assert_eq!(argsort(&data).unwrap(), (0..300).collect::<Vec<_>>());
    }

    #[test]
    fn full_width_extremes() {
        let data = [u64::MAX, 0, u64::MAX - 1, 1 << 63, 0, u64::MAX];
        assert_eq!(argsort(&data).unwrap(), vec![1, 4, 3, 2, 0, 5]);
    }

    #[test]
    fn single_digit_keys() {
        let data = [200_u8, 3, 255, 3, 0];
        assert_eq!(argsort(&data).unwrap(), vec![4, 1, 3, 0, 2]);
    }
}
