//! 8-lane i16 vector.

use crate::simd::Bool16x8;

impl_int_vector! {
    /// A SIMD vector of 8 16-bit signed integers.
    Int16x8, i16, u16, 8, 2, to_int16, Bool16x8, [s0, s1, s2, s3, s4, s5, s6, s7]
}

impl_saturating!(Int16x8, i16, u16);
