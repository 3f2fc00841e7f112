//! Scalar kernels applied to each lane by the vector operation tables.
//!
//! These are written once against the `num` traits and instantiated for every lane type by
//! the macros in [`crate::simd::macros`].

use num::traits::{WrappingAdd, WrappingMul, WrappingNeg, WrappingSub};
use num::{Float, PrimInt};

/// Lane-wise map over a fixed-size array.
#[inline(always)]
pub(crate) fn map<T: Copy, U, const N: usize>(a: [T; N], f: impl Fn(T) -> U) -> [U; N] {
    a.map(f)
}

/// Lane-wise zip-map over two fixed-size arrays.
#[inline(always)]
pub(crate) fn zip<T: Copy, U, const N: usize>(a: [T; N], b: [T; N], f: impl Fn(T, T) -> U) -> [U; N] {
    std::array::from_fn(|i| f(a[i], b[i]))
}

#[inline(always)]
pub(crate) fn wrapping_add<T: WrappingAdd>(a: T, b: T) -> T {
    a.wrapping_add(&b)
}

#[inline(always)]
pub(crate) fn wrapping_sub<T: WrappingSub>(a: T, b: T) -> T {
    a.wrapping_sub(&b)
}

#[inline(always)]
pub(crate) fn wrapping_mul<T: WrappingMul>(a: T, b: T) -> T {
    a.wrapping_mul(&b)
}

#[inline(always)]
pub(crate) fn wrapping_neg<T: WrappingNeg>(a: T) -> T {
    a.wrapping_neg()
}

/// Reduces a shift amount modulo the lane bit width.
#[inline(always)]
pub(crate) fn shift_amount<T: PrimInt>(amount: u32) -> u32 {
    let bits = T::zero().count_zeros();
    amount & (bits - 1)
}

#[inline(always)]
pub(crate) fn shift_left<T: PrimInt>(a: T, amount: u32) -> T {
    a.unsigned_shl(shift_amount::<T>(amount))
}

#[inline(always)]
pub(crate) fn shift_right_logical<T: PrimInt>(a: T, amount: u32) -> T {
    a.unsigned_shr(shift_amount::<T>(amount))
}

#[inline(always)]
pub(crate) fn shift_right_arithmetic<T: PrimInt>(a: T, amount: u32) -> T {
    a.signed_shr(shift_amount::<T>(amount))
}

/// NaN-propagating minimum that orders `-0` below `+0`.
#[inline(always)]
pub(crate) fn nan_min<T: Float>(a: T, b: T) -> T {
    if a.is_nan() || b.is_nan() {
        T::nan()
    } else if a == b {
        // Only differs for signed zeros.
        if a.is_sign_negative() {
            a
        } else {
            b
        }
    } else if a < b {
        a
    } else {
        b
    }
}

/// NaN-propagating maximum that orders `+0` above `-0`.
#[inline(always)]
pub(crate) fn nan_max<T: Float>(a: T, b: T) -> T {
    if a.is_nan() || b.is_nan() {
        T::nan()
    } else if a == b {
        if a.is_sign_positive() {
            a
        } else {
            b
        }
    } else if a > b {
        a
    } else {
        b
    }
}

#[inline(always)]
pub(crate) fn min_num<T: Float>(a: T, b: T) -> T {
    match (a.is_nan(), b.is_nan()) {
        (true, false) => b,
        (false, true) => a,
        _ => nan_min(a, b),
    }
}

#[inline(always)]
pub(crate) fn max_num<T: Float>(a: T, b: T) -> T {
    match (a.is_nan(), b.is_nan()) {
        (true, false) => b,
        (false, true) => a,
        _ => nan_max(a, b),
    }
}

#[inline(always)]
pub(crate) fn reciprocal<T: Float>(a: T) -> T {
    a.recip()
}

#[inline(always)]
pub(crate) fn reciprocal_sqrt<T: Float>(a: T) -> T {
    a.sqrt().recip()
}

/// All-ones or all-zeros mask lane for a boolean.
#[inline(always)]
pub(crate) fn mask_lane<T: PrimInt>(value: bool) -> T {
    if value {
        !T::zero()
    } else {
        T::zero()
    }
}
