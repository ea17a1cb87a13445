//! Indirect sorting of fixed-width unsigned integer arrays.
//!
//! Every algorithm returns the permutation `p` of `0..n` with
//! `data[p[0]] <= data[p[1]] <= ...` and leaves `data` untouched. Calls are
//! stateless: each one allocates its own output and scratch buffers.

mod algorithms;
mod error;
mod key;

use std::fmt::Debug;

pub use algorithms::common::{is_permutation, is_sorted_by_indices};
pub use error::{ArgsortError, Result};
pub use key::ArgsortKey;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ArgsortAlgorithm {
    InsertionArgsort,
    QuickArgsort,
    BucketArgsort,
    CountingArgsort,
    RadixArgsort,
}

pub const ALL_ALGORITHMS: [ArgsortAlgorithm; 5] = [
    ArgsortAlgorithm::InsertionArgsort,
    ArgsortAlgorithm::QuickArgsort,
    ArgsortAlgorithm::BucketArgsort,
    ArgsortAlgorithm::CountingArgsort,
    ArgsortAlgorithm::RadixArgsort,
];

pub fn all_algorithms() -> &'static [ArgsortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: ArgsortAlgorithm) -> &'static str {
    match algo {
        ArgsortAlgorithm::InsertionArgsort => "insertion_argsort",
        ArgsortAlgorithm::QuickArgsort => "quick_argsort",
        ArgsortAlgorithm::BucketArgsort => "bucket_argsort",
        ArgsortAlgorithm::CountingArgsort => "counting_argsort",
        ArgsortAlgorithm::RadixArgsort => "radix_argsort",
    }
}

/// Whether equal keys are guaranteed to keep their input order.
pub fn is_stable(algo: ArgsortAlgorithm) -> bool {
    matches!(
        algo,
        ArgsortAlgorithm::InsertionArgsort
            | ArgsortAlgorithm::CountingArgsort
            | ArgsortAlgorithm::RadixArgsort
    )
}

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    pub insertion_threshold: usize,
    pub ninther_threshold: usize,
    pub counting_max_range: usize,
    pub counting_range_factor: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    insertion_threshold: 24,
    ninther_threshold: 64,
    counting_max_range: 1 << 20,
    counting_range_factor: 24,
};

pub fn argsort<K: ArgsortKey>(algo: ArgsortAlgorithm, data: &[K]) -> Result<Vec<usize>> {
    tracing::trace!(algorithm = algorithm_name(algo), len = data.len(), "argsort");
    match algo {
        ArgsortAlgorithm::InsertionArgsort => algorithms::insertion_argsort::argsort(data),
        ArgsortAlgorithm::QuickArgsort => algorithms::quick_argsort::argsort(data),
        ArgsortAlgorithm::BucketArgsort => algorithms::bucket_argsort::argsort(data),
        ArgsortAlgorithm::CountingArgsort => algorithms::counting_argsort::argsort(data),
        ArgsortAlgorithm::RadixArgsort => algorithms::radix_argsort::argsort(data),
    }
}

/// Three-way quicksort on indices with median-of-three / ninther pivots.
pub fn quick_argsort<K: ArgsortKey>(data: &[K]) -> Result<Vec<usize>> {
    algorithms::quick_argsort::argsort(data)
}

/// Stable LSD radix argsort.
pub fn radix_argsort<K: ArgsortKey>(data: &[K]) -> Result<Vec<usize>> {
    algorithms::radix_argsort::argsort(data)
}

pub fn bucket_argsort<K: ArgsortKey>(data: &[K]) -> Result<Vec<usize>> {
    algorithms::bucket_argsort::argsort(data)
}

pub fn counting_argsort<K: ArgsortKey>(data: &[K]) -> Result<Vec<usize>> {
    algorithms::counting_argsort::argsort(data)
}

pub fn insertion_argsort<K: ArgsortKey>(data: &[K]) -> Result<Vec<usize>> {
    algorithms::insertion_argsort::argsort(data)
}

/// Argsorts a host array whose element type is not an unsigned key.
///
/// Every element is converted to `u64` first; the first one that does not
/// fit (e.g. a negative `i64`) fails the whole call with
/// [`ArgsortError::InvalidInput`].
pub fn try_argsort<T>(algo: ArgsortAlgorithm, data: &[T]) -> Result<Vec<usize>>
where
    T: Copy + Debug + TryInto<u64>,
    T::Error: std::fmt::Display,
{
    let mut keys = algorithms::common::try_with_capacity(data.len(), "key conversion")?;
    for (index, &value) in data.iter().enumerate() {
        let key: u64 = value.try_into().map_err(|e| ArgsortError::InvalidInput {
            index,
            reason: format!("{value:?} is not a u64 key: {e}"),
        })?;
        keys.push(key);
    }
    argsort(algo, &keys)
}
