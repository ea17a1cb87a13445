use std::fmt::Debug;

/// Fixed-width unsigned integer usable as an argsort key.
///
/// `BITS` bounds the number of radix digits; `to_u64` is a lossless widening
/// used wherever keys are shifted or offset.
pub trait ArgsortKey: Copy + Ord + Debug {
    const BITS: u32;

    fn to_u64(self) -> u64;
}

macro_rules! impl_argsort_key {
    ($($ty:ty),*) => {
        $(
            impl ArgsortKey for $ty {
                const BITS: u32 = <$ty>::BITS;

                #[inline]
                fn to_u64(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

impl_argsort_key!(u8, u16, u32, u64);
