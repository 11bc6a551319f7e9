//! Integer key types accepted by `HashTable`.

use core::fmt::Debug;

mod sealed {
    pub trait Sealed {}
}

/// A primitive integer usable as a table key.
///
/// Hashing widens every key to `i128` so `multiplier * key + increment`
/// cannot overflow for any supported width. Sealed: only the primitive
/// integers implement it.
pub trait IntKey: Copy + Eq + Debug + sealed::Sealed {
    fn widen(self) -> i128;
}

macro_rules! impl_int_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl IntKey for $t {
                #[inline]
                fn widen(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_int_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
