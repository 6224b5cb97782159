//! Whole numbers spelled out in Brazilian Portuguese.

use crate::joiner::join;
use crate::scale::decompose;

/// Spell out a non-negative integer: `1523` becomes
/// "mil, quinhentos e vinte e três".
///
/// Signs are the caller's business. Every `u64` has a rendering; counts of
/// trillions above 999 are themselves spelled out ("mil trilhões").
pub fn to_words(n: u64) -> String {
    join(&decompose(n))
}

/// Types that can be spelled out as a Portuguese cardinal.
pub trait ToWords {
    fn to_words(&self) -> String;
}

macro_rules! impl_to_words {
    ($($ty:ty),*) => {
        $(
            impl ToWords for $ty {
                fn to_words(&self) -> String {
                    to_words(u64::from(*self))
                }
            }
        )*
    };
}

impl_to_words!(u8, u16, u32, u64);

impl ToWords for usize {
    fn to_words(&self) -> String {
        // usize is at most 64 bits on every supported target
        to_words(*self as u64)
    }
}
