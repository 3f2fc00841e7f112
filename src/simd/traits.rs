//! Traits shared by every 128-bit lane vector.
//!
//! Each vector type (`Float32x4`, `Int16x8`, `Bool8x16`, ...) is a concrete `Copy` struct, and
//! the operations they have in common are expressed as traits so that generic code can be
//! written once over all of them:
//!
//! - [`SimdVec`]: lane access, construction, sign mask, raw bytes. Every type.
//! - [`SimdBits`]: bit-reinterpretation into a numeric vector. Numeric types only.
//! - [`SimdCompare`] / [`SimdOrd`]: lane-wise comparisons producing a boolean vector, and
//!   masked `select`.
//! - [`SimdArith`]: wrapping (integer) or IEEE 754 (float) `neg`/`add`/`sub`/`mul`.
//! - [`SimdFloat`]: division, roots, reciprocals, NaN-aware `min`/`max`, `clamp`.
//! - [`SimdInt`]: bitwise operations, shifts, unsigned comparisons.
//! - [`SimdSaturating`]: saturating arithmetic for the narrow integer types.
//! - [`SimdBool`]: `any_true`/`all_true` and boolean logic on mask vectors.
//! - [`SimdAdd`] / [`SimdSub`] / [`SimdMul`]: element-wise arithmetic over whole slices,
//!   implemented in [`crate::simd::slice`].
//!
//! Shuffles live in [`crate::simd::shuffle`], buffer access in [`crate::simd::memory`].

use std::fmt::{Debug, Display};

use crate::error::{check_lane_index, range_error, Result};
use crate::simd::scalar::Scalar;
use crate::VECTOR_BYTES;

pub(crate) mod sealed {
    /// Raw byte construction, kept out of the public API so that boolean vectors can only
    /// ever hold all-zeros or all-ones lanes.
    pub trait Sealed: Sized {
        fn from_raw_bytes(bytes: [u8; crate::VECTOR_BYTES]) -> Self;
    }
}

/// A fixed-width vector of `LANES` lanes occupying exactly 16 bytes.
///
/// Vectors are immutable values: every operation returns a new vector.
pub trait SimdVec:
    sealed::Sealed + Copy + Clone + Debug + Default + PartialEq + Display + Send + Sync + 'static
{
    /// The native type of a single lane.
    type Lane: Copy + PartialEq + Debug;

    /// Number of lanes.
    const LANES: usize;

    /// Width of a single lane in bytes.
    const LANE_BYTES: usize;

    /// Type name used in diagnostics and type-check errors, e.g. `"Float32x4"`.
    const NAME: &'static str;

    /// Builds a vector by calling `f` once per lane index, from lane 0 upwards.
    fn from_fn<F: FnMut(usize) -> Self::Lane>(f: F) -> Self;

    /// Unchecked lane read backing the provided methods. Not part of the public API.
    ///
    /// # Panics
    ///
    /// Panics if `index >= Self::LANES`. Use [`SimdVec::extract_lane`] for a checked read.
    #[doc(hidden)]
    fn lane(&self, index: usize) -> Self::Lane;

    /// Coerces a loosely typed scalar into this vector's lane type.
    fn coerce(value: &Scalar) -> Self::Lane;

    /// Whether the sign bit (numeric lanes) or the truth value (boolean lanes) of lane
    /// `index` is set.
    fn lane_sign(&self, index: usize) -> bool;

    /// Little-endian byte image of the vector, lane 0 first.
    fn to_bytes(&self) -> [u8; VECTOR_BYTES];

    /// Creates a vector with every lane equal to `value`.
    #[inline(always)]
    fn splat(value: Self::Lane) -> Self {
        Self::from_fn(|_| value)
    }

    /// Creates a vector with every lane equal to the coerced `value`.
    fn splat_scalar(value: &Scalar) -> Self {
        Self::splat(Self::coerce(value))
    }

    /// Creates a vector from exactly `LANES` values.
    ///
    /// # Errors
    ///
    /// Returns a range error if `lanes.len() != Self::LANES`.
    fn from_slice(lanes: &[Self::Lane]) -> Result<Self> {
        if lanes.len() != Self::LANES {
            return Err(range_error(format!(
                "{} requires {} lanes, got {}",
                Self::NAME,
                Self::LANES,
                lanes.len()
            )));
        }

        Ok(Self::from_fn(|i| lanes[i]))
    }

    /// Creates a vector from loosely typed values, coercing each one.
    ///
    /// Missing trailing values are treated as [`Scalar::Undefined`]; extra values are
    /// ignored.
    fn from_scalars(values: &[Scalar]) -> Self {
        Self::from_fn(|i| Self::coerce(values.get(i).unwrap_or(&Scalar::Undefined)))
    }

    /// Returns lane `index`.
    ///
    /// # Errors
    ///
    /// Returns a range error if `index >= Self::LANES`.
    #[inline(always)]
    fn extract_lane(&self, index: usize) -> Result<Self::Lane> {
        check_lane_index(index, Self::LANES)?;
        Ok(self.lane(index))
    }

    /// Returns a copy of this vector with lane `index` replaced by `value`.
    ///
    /// # Errors
    ///
    /// Returns a range error if `index >= Self::LANES`.
    fn replace_lane(&self, index: usize, value: Self::Lane) -> Result<Self> {
        check_lane_index(index, Self::LANES)?;
        Ok(Self::from_fn(|i| if i == index { value } else { self.lane(i) }))
    }

    /// Like [`SimdVec::replace_lane`], coercing `value` first.
    fn replace_lane_scalar(&self, index: usize, value: &Scalar) -> Result<Self> {
        self.replace_lane(index, Self::coerce(value))
    }

    /// One bit per lane, lane 0 in bit 0, set when the lane's sign (or truth) bit is set.
    fn sign_mask(&self) -> u32 {
        (0..Self::LANES).fold(0u32, |mask, i| {
            if self.lane_sign(i) {
                mask | (1 << i)
            } else {
                mask
            }
        })
    }

    /// Copies the lanes into a `Vec`.
    fn to_vec(&self) -> Vec<Self::Lane> {
        (0..Self::LANES).map(|i| self.lane(i)).collect()
    }

    /// Reinterprets the raw bits of this vector as another numeric vector type.
    ///
    /// No lane value is converted: a `1.0f32` lane becomes the integer `0x3F80_0000`.
    /// See the `from_*` constructors for numeric conversion.
    #[inline(always)]
    fn bitcast<To: SimdBits>(&self) -> To {
        To::from_bits(self)
    }
}

/// Numeric vectors that can be rebuilt from any 16-byte image.
pub trait SimdBits: SimdVec {
    /// Reinterprets the raw bits of `other` as `Self`.
    #[inline(always)]
    fn from_bits<V: SimdVec>(other: &V) -> Self {
        Self::from_raw_bytes(other.to_bytes())
    }

    /// Builds a vector from its little-endian byte image.
    #[inline(always)]
    fn from_bytes(bytes: [u8; VECTOR_BYTES]) -> Self {
        Self::from_raw_bytes(bytes)
    }
}

/// Lane-wise equality and masked selection.
pub trait SimdCompare: SimdVec {
    /// Boolean vector with the same lane count and lane width.
    type Mask: SimdBool;

    /// Lane-wise `==`. NaN lanes compare unequal.
    fn equal(&self, other: &Self) -> Self::Mask;

    /// Lane-wise `!=`. NaN lanes compare unequal.
    fn not_equal(&self, other: &Self) -> Self::Mask {
        self.equal(other).not()
    }

    /// Picks each lane from `on_true` where `mask` is set, from `on_false` elsewhere.
    ///
    /// Computed as `(mask & on_true) | (!mask & on_false)` over the raw bits, which is
    /// exact because mask lanes are all-zeros or all-ones.
    fn select(mask: &Self::Mask, on_true: &Self, on_false: &Self) -> Self {
        let m = mask.to_bytes();
        let t = on_true.to_bytes();
        let f = on_false.to_bytes();

        let mut out = [0u8; VECTOR_BYTES];
        for i in 0..VECTOR_BYTES {
            out[i] = (m[i] & t[i]) | (!m[i] & f[i]);
        }

        Self::from_raw_bytes(out)
    }
}

/// Lane-wise ordering comparisons for numeric vectors.
pub trait SimdOrd: SimdCompare {
    fn less_than(&self, other: &Self) -> Self::Mask;
    fn less_than_or_equal(&self, other: &Self) -> Self::Mask;
    fn greater_than(&self, other: &Self) -> Self::Mask;
    fn greater_than_or_equal(&self, other: &Self) -> Self::Mask;
}

/// Lane-wise arithmetic shared by integer and floating-point vectors.
///
/// Integer lanes wrap modulo 2^width; floating-point lanes follow IEEE 754.
pub trait SimdArith: SimdOrd {
    fn neg(&self) -> Self;
    fn add(&self, other: &Self) -> Self;
    fn sub(&self, other: &Self) -> Self;
    fn mul(&self, other: &Self) -> Self;
}

/// Floating-point only lane operations.
pub trait SimdFloat: SimdArith {
    fn div(&self, other: &Self) -> Self;
    fn sqrt(&self) -> Self;
    fn abs(&self) -> Self;

    /// Approximate `1 / x` per lane, accurate to at least 1e-3 relative error.
    fn reciprocal_approximation(&self) -> Self;

    /// Approximate `1 / sqrt(x)` per lane, accurate to at least 1e-3 relative error.
    fn reciprocal_sqrt_approximation(&self) -> Self;

    /// Lane-wise minimum. A NaN in either lane gives NaN; `-0` is less than `+0`.
    fn min(&self, other: &Self) -> Self;

    /// Lane-wise maximum. A NaN in either lane gives NaN; `+0` is greater than `-0`.
    fn max(&self, other: &Self) -> Self;

    /// Lane-wise minimum that prefers the number when exactly one lane is NaN.
    fn min_num(&self, other: &Self) -> Self;

    /// Lane-wise maximum that prefers the number when exactly one lane is NaN.
    fn max_num(&self, other: &Self) -> Self;

    /// `min(max(self, lower), upper)` per lane.
    fn clamp(&self, lower: &Self, upper: &Self) -> Self {
        self.max(lower).min(upper)
    }
}

/// Integer only lane operations.
///
/// Shift amounts are reduced modulo the lane bit width: shifting an `Int32x4` by 33 is the
/// same as shifting it by 1.
pub trait SimdInt: SimdArith {
    fn and(&self, other: &Self) -> Self;
    fn or(&self, other: &Self) -> Self;
    fn xor(&self, other: &Self) -> Self;
    fn not(&self) -> Self;
    fn shift_left_by_scalar(&self, amount: u32) -> Self;
    fn shift_right_logical_by_scalar(&self, amount: u32) -> Self;
    fn shift_right_arithmetic_by_scalar(&self, amount: u32) -> Self;
    fn unsigned_less_than(&self, other: &Self) -> Self::Mask;
    fn unsigned_less_than_or_equal(&self, other: &Self) -> Self::Mask;
    fn unsigned_greater_than(&self, other: &Self) -> Self::Mask;
    fn unsigned_greater_than_or_equal(&self, other: &Self) -> Self::Mask;
}

/// Saturating arithmetic for `Int16x8` and `Int8x16`.
pub trait SimdSaturating: SimdInt {
    /// Signed add clamped to the lane range.
    fn add_saturate(&self, other: &Self) -> Self;

    /// Signed subtract clamped to the lane range.
    fn sub_saturate(&self, other: &Self) -> Self;

    /// Add treating lanes as unsigned, clamped to `[0, 2^width - 1]`.
    fn unsigned_add_saturate(&self, other: &Self) -> Self;

    /// Subtract treating lanes as unsigned, clamped to `[0, 2^width - 1]`.
    fn unsigned_sub_saturate(&self, other: &Self) -> Self;
}

/// Boolean (mask) vectors.
pub trait SimdBool: SimdVec<Lane = bool> {
    /// True when at least one lane is true.
    fn any_true(&self) -> bool {
        self.sign_mask() != 0
    }

    /// True when every lane is true.
    fn all_true(&self) -> bool {
        self.sign_mask() == (1u32 << Self::LANES) - 1
    }

    fn and(&self, other: &Self) -> Self {
        Self::from_fn(|i| self.lane(i) & other.lane(i))
    }

    fn or(&self, other: &Self) -> Self {
        Self::from_fn(|i| self.lane(i) | other.lane(i))
    }

    fn xor(&self, other: &Self) -> Self {
        Self::from_fn(|i| self.lane(i) ^ other.lane(i))
    }

    fn not(&self) -> Self {
        Self::from_fn(|i| !self.lane(i))
    }
}

/// Lane-wise addition over whole slices.
///
/// `simd_add` walks the inputs one 128-bit vector at a time, `par_simd_add` splits them
/// across the rayon pool once they are long enough, and `scalar_add` is the plain loop the
/// other two are checked against.
pub trait SimdAdd<Rhs = Self> {
    type Output;

    fn simd_add(self, rhs: Rhs) -> Self::Output;
    fn par_simd_add(self, rhs: Rhs) -> Self::Output;
    fn scalar_add(self, rhs: Rhs) -> Self::Output;
}

/// Lane-wise subtraction over whole slices. See [`SimdAdd`].
pub trait SimdSub<Rhs = Self> {
    type Output;

    fn simd_sub(self, rhs: Rhs) -> Self::Output;
    fn par_simd_sub(self, rhs: Rhs) -> Self::Output;
    fn scalar_sub(self, rhs: Rhs) -> Self::Output;
}

/// Lane-wise multiplication over whole slices. See [`SimdAdd`].
pub trait SimdMul<Rhs = Self> {
    type Output;

    fn simd_mul(self, rhs: Rhs) -> Self::Output;
    fn par_simd_mul(self, rhs: Rhs) -> Self::Output;
    fn scalar_mul(self, rhs: Rhs) -> Self::Output;
}
