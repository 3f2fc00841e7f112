//! 2-lane f64 vector.

use crate::simd::Bool64x2;

impl_float_vector! {
    /// A SIMD vector of 2 64-bit floating point values.
    Float64x2, f64, 2, 8, to_number, Bool64x2, [x, y]
}
