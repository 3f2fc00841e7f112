//! 4-lane i32 vector.
//!
//! Lane arithmetic wraps modulo 2^32. Shift amounts are taken modulo 32.

use crate::simd::Bool32x4;

impl_int_vector! {
    /// A SIMD vector of 4 32-bit signed integers.
    Int32x4, i32, u32, 4, 4, to_int32, Bool32x4, [x, y, z, w]
}
