//! 16-lane i8 vector.

use crate::simd::Bool8x16;

impl_int_vector! {
    /// A SIMD vector of 16 8-bit signed integers.
    Int8x16, i8, u8, 16, 1, to_int8, Bool8x16,
    [s0, s1, s2, s3, s4, s5, s6, s7, s8, s9, s10, s11, s12, s13, s14, s15]
}

impl_saturating!(Int8x16, i8, u8);
