//! 4-lane f32 vector.
//!
//! `Float32x4` packs four IEEE 754 binary32 values into 128 bits. Lane arithmetic follows
//! IEEE 754 exactly (NaN propagation, signed zero, infinities); `min` and `max` return NaN
//! whenever either lane is NaN, while `min_num`/`max_num` prefer the number.
//!
//! # Usage
//!
//! ```rust
//! use lanes128::simd::{Float32x4, SimdFloat, SimdVec};
//!
//! let a = Float32x4::new(1.0, 2.0, 3.0, 4.0);
//! let b = Float32x4::splat(5.0);
//!
//! assert_eq!(a + b, Float32x4::new(6.0, 7.0, 8.0, 9.0));
//! assert_eq!((a * a).sqrt(), a);
//! ```

use crate::simd::Bool32x4;

impl_float_vector! {
    /// A SIMD vector of 4 32-bit floating point values.
    Float32x4, f32, 4, 4, to_float32, Bool32x4, [x, y, z, w]
}
