//! Lane permutation (swizzle) and two-source lane selection (shuffle).
//!
//! Masks come in two flavours:
//!
//! - Runtime masks (`&[usize]`) passed to [`SimdShuffle::swizzle`] and
//!   [`SimdShuffle::shuffle`], validated on every call.
//! - Compile-time masks, [`SwizzleMask`] and [`ShuffleMask`], whose `const fn` constructors
//!   reject out-of-range indices. Declared as `const`, an invalid mask is a build error and
//!   the `swizzle_by`/`shuffle_by` methods on each vector type cannot fail.
//!
//! ```
//! use lanes128::simd::{Int32x4, ShuffleMask};
//!
//! const REVERSE_PAIRS: ShuffleMask<4> = ShuffleMask::new([3, 2, 5, 4]);
//!
//! let a = Int32x4::new(1, 2, 3, 4);
//! let b = Int32x4::new(5, 6, 7, 8);
//! assert_eq!(a.shuffle_by(&b, REVERSE_PAIRS), Int32x4::new(4, 3, 6, 5));
//! ```

use crate::error::{range_error, Result};
use crate::simd::traits::SimdVec;

/// Lane indices for a single-source permutation, each in `[0, N)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SwizzleMask<const N: usize> {
    indices: [u8; N],
}

impl<const N: usize> SwizzleMask<N> {
    /// # Panics
    ///
    /// Panics if any index is `>= N`. In a `const` item this is a compile error.
    pub const fn new(indices: [u8; N]) -> Self {
        let mut i = 0;
        while i < N {
            assert!((indices[i] as usize) < N, "swizzle lane index out of range");
            i += 1;
        }
        Self { indices }
    }

    /// The mask `[0, 1, ..., N-1]`.
    pub const fn identity() -> Self {
        let mut indices = [0u8; N];
        let mut i = 0;
        while i < N {
            indices[i] = i as u8;
            i += 1;
        }
        Self { indices }
    }

    #[inline(always)]
    pub const fn indices(&self) -> [u8; N] {
        self.indices
    }
}

/// Lane indices for a two-source selection, each in `[0, 2N)`. Indices below `N` pick from
/// the first vector, the rest from the second.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShuffleMask<const N: usize> {
    indices: [u8; N],
}

impl<const N: usize> ShuffleMask<N> {
    /// # Panics
    ///
    /// Panics if any index is `>= 2 * N`. In a `const` item this is a compile error.
    pub const fn new(indices: [u8; N]) -> Self {
        let mut i = 0;
        while i < N {
            assert!(
                (indices[i] as usize) < 2 * N,
                "shuffle lane index out of range"
            );
            i += 1;
        }
        Self { indices }
    }

    #[inline(always)]
    pub const fn indices(&self) -> [u8; N] {
        self.indices
    }
}

/// Runtime-validated swizzle and shuffle, available on every vector type.
pub trait SimdShuffle: SimdVec {
    /// Returns a vector whose lane `k` is `self`'s lane `indices[k]`.
    ///
    /// # Errors
    ///
    /// Returns a range error if `indices.len() != Self::LANES` or any index is
    /// `>= Self::LANES`.
    fn swizzle(&self, indices: &[usize]) -> Result<Self> {
        validate_mask::<Self>(indices, Self::LANES)?;
        Ok(Self::from_fn(|k| self.lane(indices[k])))
    }

    /// Treats `self ‖ other` as a `2 * LANES` source and picks lane `indices[k]` of it for
    /// output lane `k`.
    ///
    /// # Errors
    ///
    /// Returns a range error if `indices.len() != Self::LANES` or any index is
    /// `>= 2 * Self::LANES`.
    fn shuffle(&self, other: &Self, indices: &[usize]) -> Result<Self> {
        validate_mask::<Self>(indices, 2 * Self::LANES)?;
        Ok(Self::from_fn(|k| {
            let index = indices[k];
            if index < Self::LANES {
                self.lane(index)
            } else {
                other.lane(index - Self::LANES)
            }
        }))
    }
}

impl<V: SimdVec> SimdShuffle for V {}

fn validate_mask<V: SimdVec>(indices: &[usize], bound: usize) -> Result<()> {
    if indices.len() != V::LANES {
        return Err(range_error(format!(
            "invalid shuffle mask: {} expects {} lane indices, got {}",
            V::NAME,
            V::LANES,
            indices.len()
        )));
    }

    match indices.iter().position(|&index| index >= bound) {
        Some(k) => Err(range_error(format!(
            "lane index {} at mask position {k} out of range [0, {bound})",
            indices[k]
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::{Bool32x4, Float64x2, Int16x8, Int32x4, Int8x16};

    #[test]
    fn test_swizzle_reverses() {
        let v = Int32x4::new(1, 2, 3, 4);
        assert_eq!(v.swizzle(&[3, 2, 1, 0]).unwrap(), Int32x4::new(4, 3, 2, 1));
    }

    #[test]
    fn test_swizzle_broadcast_lane() {
        let v = Float64x2::new(1.5, -2.5);
        assert_eq!(v.swizzle(&[1, 1]).unwrap(), Float64x2::new(-2.5, -2.5));
    }

    #[test]
    fn test_swizzle_identity() {
        let v = Int8x16::from_fn(|i| i as i8 * 3);
        let identity: Vec<usize> = (0..16).collect();
        assert_eq!(v.swizzle(&identity).unwrap(), v);
        assert_eq!(v.swizzle_by(SwizzleMask::identity()), v);
    }

    #[test]
    fn test_swizzle_out_of_range() {
        let v = Int32x4::new(1, 2, 3, 4);
        let err = v.swizzle(&[0, 1, 2, 4]).unwrap_err();
        assert!(err.is_range_error());
    }

    #[test]
    fn test_swizzle_wrong_mask_length() {
        let v = Int32x4::new(1, 2, 3, 4);
        assert!(v.swizzle(&[0, 1, 2]).unwrap_err().is_range_error());
        assert!(v.swizzle(&[0, 1, 2, 3, 0]).unwrap_err().is_range_error());
    }

    #[test]
    fn test_shuffle_two_sources() {
        let a = Int32x4::new(1, 2, 3, 4);
        let b = Int32x4::new(5, 6, 7, 8);
        assert_eq!(a.shuffle(&b, &[3, 2, 5, 4]).unwrap(), Int32x4::new(4, 3, 6, 5));
        assert_eq!(a.shuffle(&b, &[4, 5, 6, 7]).unwrap(), b);
        assert_eq!(a.shuffle(&b, &[0, 1, 2, 3]).unwrap(), a);
    }

    #[test]
    fn test_shuffle_out_of_range() {
        let a = Int16x8::splat(1);
        let b = Int16x8::splat(2);
        assert!(a
            .shuffle(&b, &[0, 1, 2, 3, 4, 5, 6, 16])
            .unwrap_err()
            .is_range_error());
        assert!(a
            .shuffle(&b, &[0, 1, 2, 3, 4, 5, 6, 15])
            .is_ok());
    }

    #[test]
    fn test_const_masks_match_runtime_masks() {
        const MASK: ShuffleMask<4> = ShuffleMask::new([3, 2, 5, 4]);
        let a = Int32x4::new(1, 2, 3, 4);
        let b = Int32x4::new(5, 6, 7, 8);
        assert_eq!(a.shuffle_by(&b, MASK), a.shuffle(&b, &[3, 2, 5, 4]).unwrap());

        const SWAP: SwizzleMask<4> = SwizzleMask::new([1, 0, 3, 2]);
        assert_eq!(a.swizzle_by(SWAP), Int32x4::new(2, 1, 4, 3));
    }

    #[test]
    fn test_bool_swizzle() {
        let m = Bool32x4::new(true, false, false, true);
        assert_eq!(
            m.swizzle(&[1, 0, 3, 3]).unwrap(),
            Bool32x4::new(false, true, true, true)
        );
    }

    #[test]
    #[should_panic(expected = "swizzle lane index out of range")]
    fn test_swizzle_mask_rejects_out_of_range() {
        let _ = SwizzleMask::<4>::new([0, 1, 2, 4]);
    }

    #[test]
    #[should_panic(expected = "shuffle lane index out of range")]
    fn test_shuffle_mask_rejects_out_of_range() {
        let _ = ShuffleMask::<2>::new([0, 4]);
    }
}
