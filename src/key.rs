//! Description of the generic type `Key`.

use std::net::{Ipv4Addr, Ipv6Addr};

use num_traits::{One, PrimInt, Unsigned, Zero};

/// Number of bits in a byte.
pub const BITS_PER_BYTE: u32 = 8;
/// Number of bits in the reference key width (`u32`).
pub const BITS_PER_WORD: u32 = 32;
/// Number of bytes in the reference key width (`u32`).
pub const BYTES_PER_WORD: u32 = BITS_PER_WORD / BITS_PER_BYTE;

/// Trait for fixed-width keys stored in a [`crate::BitTrie`].
///
/// The trie only looks at the raw bit representation of a key, from the most significant bit to
/// the least significant one. Two keys are identical iff their representations are equal.
pub trait Key: Copy {
    /// How can the key be represented. This must be one of `u8`, `u16`, `u32`, `u64`, or `u128`.
    type R: Unsigned + PrimInt;

    /// Get raw representation of the key.
    fn repr(&self) -> Self::R;

    /// Number of bits in a key, which bounds the depth of the trie.
    fn width() -> u32 {
        Self::R::zero().count_zeros()
    }

    /// The mask selecting the most significant bit of the representation.
    fn top_bit() -> Self::R {
        Self::R::one() << (Self::width() as usize - 1)
    }
}

/// Check whether the bit selected by `mask` is set in `repr`.
#[inline(always)]
pub(crate) fn is_bit_set<R: PrimInt>(repr: R, mask: R) -> bool {
    repr & mask != R::zero()
}

macro_rules! impl_primitive_key {
    ($($t:ty),*) => {
        $(
            impl Key for $t {
                type R = $t;

                #[inline(always)]
                fn repr(&self) -> $t {
                    *self
                }
            }
        )*
    };
}

impl_primitive_key!(u8, u16, u32, u64, u128);

impl Key for Ipv4Addr {
    type R = u32;

    fn repr(&self) -> u32 {
        (*self).into()
    }
}

impl Key for Ipv6Addr {
    type R = u128;

    fn repr(&self) -> u128 {
        (*self).into()
    }
}
