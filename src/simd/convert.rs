//! Numeric lane conversions between vector types.
//!
//! Unlike the `from_*_bits` constructors these convert each lane's value. Float to integer
//! conversion truncates toward zero and is checked: a NaN lane or a lane outside the `i32`
//! range is a range error.

use num::ToPrimitive;

use crate::error::{range_error, Result};
use crate::simd::{Float32x4, Float64x2, Int32x4};

fn checked_i32<F: ToPrimitive + Copy + std::fmt::Display>(lane: F) -> Result<i32> {
    lane.to_i32()
        .ok_or_else(|| range_error(format!("{lane} is not representable as int32")))
}

impl Float32x4 {
    /// Converts each integer lane to the nearest `f32`.
    #[inline(always)]
    pub fn from_int32x4(v: Int32x4) -> Self {
        Self::from_array(v.to_array().map(|lane| lane as f32))
    }

    /// Narrows the two `f64` lanes into lanes 0 and 1, rounding to nearest. Lanes 2 and 3
    /// are zero.
    #[inline(always)]
    pub fn from_float64x2(v: Float64x2) -> Self {
        let [x, y] = v.to_array();
        Self::new(x as f32, y as f32, 0.0, 0.0)
    }
}

impl Float64x2 {
    /// Widens lanes 0 and 1.
    #[inline(always)]
    pub fn from_float32x4(v: Float32x4) -> Self {
        let [x, y, _, _] = v.to_array();
        Self::new(f64::from(x), f64::from(y))
    }

    /// Widens lanes 0 and 1.
    #[inline(always)]
    pub fn from_int32x4(v: Int32x4) -> Self {
        let [x, y, _, _] = v.to_array();
        Self::new(f64::from(x), f64::from(y))
    }
}

impl Int32x4 {
    /// Truncates each lane toward zero.
    ///
    /// # Errors
    ///
    /// Returns a range error if any lane is NaN or does not fit in an `i32` after truncation.
    pub fn from_float32x4(v: Float32x4) -> Result<Self> {
        let [x, y, z, w] = v.to_array();
        Ok(Self::new(checked_i32(x)?, checked_i32(y)?, checked_i32(z)?, checked_i32(w)?))
    }

    /// Truncates lanes 0 and 1 toward zero; lanes 2 and 3 are zero.
    ///
    /// # Errors
    ///
    /// Returns a range error if either lane is NaN or does not fit in an `i32` after
    /// truncation.
    pub fn from_float64x2(v: Float64x2) -> Result<Self> {
        let [x, y] = v.to_array();
        Ok(Self::new(checked_i32(x)?, checked_i32(y)?, 0, 0))
    }
}
