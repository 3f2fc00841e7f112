//! Code generation for the concrete vector types.
//!
//! Every instantiation shares the same layout (`#[repr(C, align(16))]` over a lane array)
//! and the same trait surface, so the per-type modules only invoke these macros and add
//! what is specific to them (conversions, tests).

use std::fmt;

/// Writes `Name(l0, l1, ...)`.
pub(crate) fn fmt_lanes<I>(f: &mut fmt::Formatter<'_>, name: &str, lanes: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    write!(f, "{name}(")?;
    for (i, lane) in lanes.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{lane}")?;
    }
    f.write_str(")")
}

/// Decodes little-endian lanes out of a 16-byte image.
macro_rules! decode_lanes {
    ($int:ty, $lanes:literal, $bytes:literal, $image:expr) => {{
        let image: [u8; $crate::VECTOR_BYTES] = $image;
        let mut lanes = [<$int>::default(); $lanes];
        for (lane, chunk) in lanes.iter_mut().zip(image.chunks_exact($bytes)) {
            let mut raw = [0u8; $bytes];
            raw.copy_from_slice(chunk);
            *lane = <$int>::from_le_bytes(raw);
        }
        lanes
    }};
}

/// Encodes lanes into a little-endian 16-byte image.
macro_rules! encode_lanes {
    ($bytes:literal, $lanes:expr) => {{
        let mut image = [0u8; $crate::VECTOR_BYTES];
        for (chunk, lane) in image.chunks_exact_mut($bytes).zip($lanes.iter()) {
            chunk.copy_from_slice(&lane.to_le_bytes());
        }
        image
    }};
}

/// Struct definition, lane access, bytes, display and masks shared by numeric vectors.
macro_rules! impl_numeric_vector {
    (
        $(#[$meta:meta])*
        $name:ident, $lane:ty, $lanes:literal, $bytes:literal, $coerce:ident, $sign:ident,
        [$($arg:ident),+]
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq)]
        #[repr(C, align(16))]
        pub struct $name {
            lanes: [$lane; $lanes],
        }

        impl $name {
            /// Creates a vector from one value per lane, lane 0 first.
            #[allow(clippy::too_many_arguments)]
            #[inline(always)]
            pub const fn new($($arg: $lane),+) -> Self {
                Self { lanes: [$($arg),+] }
            }

            #[inline(always)]
            pub const fn from_array(lanes: [$lane; $lanes]) -> Self {
                Self { lanes }
            }

            #[inline(always)]
            pub const fn to_array(self) -> [$lane; $lanes] {
                self.lanes
            }

            /// Reorders lanes with a mask validated at construction.
            #[inline(always)]
            pub fn swizzle_by(&self, mask: $crate::simd::shuffle::SwizzleMask<$lanes>) -> Self {
                let indices = mask.indices();
                Self { lanes: std::array::from_fn(|i| self.lanes[indices[i] as usize]) }
            }

            /// Selects lanes from `self ‖ other` with a mask validated at construction.
            #[inline(always)]
            pub fn shuffle_by(
                &self,
                other: &Self,
                mask: $crate::simd::shuffle::ShuffleMask<$lanes>,
            ) -> Self {
                let indices = mask.indices();
                Self {
                    lanes: std::array::from_fn(|i| {
                        let index = indices[i] as usize;
                        if index < $lanes {
                            self.lanes[index]
                        } else {
                            other.lanes[index - $lanes]
                        }
                    }),
                }
            }
        }

        impl From<[$lane; $lanes]> for $name {
            #[inline(always)]
            fn from(lanes: [$lane; $lanes]) -> Self {
                Self { lanes }
            }
        }

        impl From<$name> for [$lane; $lanes] {
            #[inline(always)]
            fn from(v: $name) -> Self {
                v.lanes
            }
        }

        impl $crate::simd::traits::sealed::Sealed for $name {
            #[inline(always)]
            fn from_raw_bytes(bytes: [u8; $crate::VECTOR_BYTES]) -> Self {
                Self { lanes: decode_lanes!($lane, $lanes, $bytes, bytes) }
            }
        }

        impl $crate::simd::traits::SimdVec for $name {
            type Lane = $lane;

            const LANES: usize = $lanes;
            const LANE_BYTES: usize = $bytes;
            const NAME: &'static str = stringify!($name);

            #[inline(always)]
            fn from_fn<F: FnMut(usize) -> $lane>(f: F) -> Self {
                Self { lanes: std::array::from_fn(f) }
            }

            #[inline(always)]
            fn lane(&self, index: usize) -> $lane {
                self.lanes[index]
            }

            #[inline(always)]
            fn coerce(value: &$crate::simd::scalar::Scalar) -> $lane {
                value.$coerce()
            }

            #[inline(always)]
            fn lane_sign(&self, index: usize) -> bool {
                self.lanes[index].$sign()
            }

            #[inline(always)]
            fn to_bytes(&self) -> [u8; $crate::VECTOR_BYTES] {
                encode_lanes!($bytes, self.lanes)
            }
        }

        impl $crate::simd::traits::SimdBits for $name {}

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::simd::macros::fmt_lanes(
                    f,
                    stringify!($name),
                    self.lanes
                        .iter()
                        .map(|&lane| $crate::simd::scalar::format_number(f64::from(lane))),
                )
            }
        }
    };
}

/// Lane-wise comparisons producing the boolean vector `$mask`.
macro_rules! impl_compare {
    ($name:ident, $mask:ident) => {
        impl $crate::simd::traits::SimdCompare for $name {
            type Mask = $mask;

            #[inline(always)]
            fn equal(&self, other: &Self) -> $mask {
                $mask::from_lanes($crate::simd::lane::zip(self.lanes, other.lanes, |a, b| a == b))
            }
        }

        impl $crate::simd::traits::SimdOrd for $name {
            #[inline(always)]
            fn less_than(&self, other: &Self) -> $mask {
                $mask::from_lanes($crate::simd::lane::zip(self.lanes, other.lanes, |a, b| a < b))
            }

            #[inline(always)]
            fn less_than_or_equal(&self, other: &Self) -> $mask {
                $mask::from_lanes($crate::simd::lane::zip(self.lanes, other.lanes, |a, b| a <= b))
            }

            #[inline(always)]
            fn greater_than(&self, other: &Self) -> $mask {
                $mask::from_lanes($crate::simd::lane::zip(self.lanes, other.lanes, |a, b| a > b))
            }

            #[inline(always)]
            fn greater_than_or_equal(&self, other: &Self) -> $mask {
                $mask::from_lanes($crate::simd::lane::zip(self.lanes, other.lanes, |a, b| a >= b))
            }
        }
    };
}

/// `std::ops` operators shared by numeric vectors, forwarding to [`SimdArith`].
///
/// [`SimdArith`]: crate::simd::traits::SimdArith
macro_rules! impl_arith_operators {
    ($name:ident) => {
        impl std::ops::Add for $name {
            type Output = Self;

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                $crate::simd::traits::SimdArith::add(&self, &rhs)
            }
        }

        impl std::ops::Sub for $name {
            type Output = Self;

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                $crate::simd::traits::SimdArith::sub(&self, &rhs)
            }
        }

        impl std::ops::Mul for $name {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                $crate::simd::traits::SimdArith::mul(&self, &rhs)
            }
        }

        impl std::ops::Neg for $name {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self {
                $crate::simd::traits::SimdArith::neg(&self)
            }
        }
    };
}

/// A floating-point vector type with its full operation table.
macro_rules! impl_float_vector {
    (
        $(#[$meta:meta])*
        $name:ident, $lane:ty, $lanes:literal, $bytes:literal, $coerce:ident, $mask:ident,
        [$($arg:ident),+]
    ) => {
        impl_numeric_vector! {
            $(#[$meta])*
            $name, $lane, $lanes, $bytes, $coerce, is_sign_negative, [$($arg),+]
        }

        impl_compare!($name, $mask);

        impl $crate::simd::traits::SimdArith for $name {
            #[inline(always)]
            fn neg(&self) -> Self {
                Self { lanes: $crate::simd::lane::map(self.lanes, |a| -a) }
            }

            #[inline(always)]
            fn add(&self, other: &Self) -> Self {
                Self { lanes: $crate::simd::lane::zip(self.lanes, other.lanes, |a, b| a + b) }
            }

            #[inline(always)]
            fn sub(&self, other: &Self) -> Self {
                Self { lanes: $crate::simd::lane::zip(self.lanes, other.lanes, |a, b| a - b) }
            }

            #[inline(always)]
            fn mul(&self, other: &Self) -> Self {
                Self { lanes: $crate::simd::lane::zip(self.lanes, other.lanes, |a, b| a * b) }
            }
        }

        impl $crate::simd::traits::SimdFloat for $name {
            #[inline(always)]
            fn div(&self, other: &Self) -> Self {
                Self { lanes: $crate::simd::lane::zip(self.lanes, other.lanes, |a, b| a / b) }
            }

            #[inline(always)]
            fn sqrt(&self) -> Self {
                Self { lanes: $crate::simd::lane::map(self.lanes, <$lane>::sqrt) }
            }

            #[inline(always)]
            fn abs(&self) -> Self {
                Self { lanes: $crate::simd::lane::map(self.lanes, <$lane>::abs) }
            }

            #[inline(always)]
            fn reciprocal_approximation(&self) -> Self {
                Self { lanes: $crate::simd::lane::map(self.lanes, $crate::simd::lane::reciprocal) }
            }

            #[inline(always)]
            fn reciprocal_sqrt_approximation(&self) -> Self {
                Self {
                    lanes: $crate::simd::lane::map(self.lanes, $crate::simd::lane::reciprocal_sqrt),
                }
            }

            #[inline(always)]
            fn min(&self, other: &Self) -> Self {
                Self {
                    lanes: $crate::simd::lane::zip(self.lanes, other.lanes, $crate::simd::lane::nan_min),
                }
            }

            #[inline(always)]
            fn max(&self, other: &Self) -> Self {
                Self {
                    lanes: $crate::simd::lane::zip(self.lanes, other.lanes, $crate::simd::lane::nan_max),
                }
            }

            #[inline(always)]
            fn min_num(&self, other: &Self) -> Self {
                Self {
                    lanes: $crate::simd::lane::zip(self.lanes, other.lanes, $crate::simd::lane::min_num),
                }
            }

            #[inline(always)]
            fn max_num(&self, other: &Self) -> Self {
                Self {
                    lanes: $crate::simd::lane::zip(self.lanes, other.lanes, $crate::simd::lane::max_num),
                }
            }
        }

        impl_arith_operators!($name);

        impl std::ops::Div for $name {
            type Output = Self;

            #[inline(always)]
            fn div(self, rhs: Self) -> Self {
                $crate::simd::traits::SimdFloat::div(&self, &rhs)
            }
        }
    };
}

/// An integer vector type with its full operation table. `$unsigned` is the unsigned
/// integer of the same width, used by the unsigned comparisons.
macro_rules! impl_int_vector {
    (
        $(#[$meta:meta])*
        $name:ident, $lane:ty, $unsigned:ty, $lanes:literal, $bytes:literal, $coerce:ident,
        $mask:ident, [$($arg:ident),+]
    ) => {
        impl_numeric_vector! {
            $(#[$meta])*
            $name, $lane, $lanes, $bytes, $coerce, is_negative, [$($arg),+]
        }

        impl_compare!($name, $mask);

        impl $crate::simd::traits::SimdArith for $name {
            #[inline(always)]
            fn neg(&self) -> Self {
                Self { lanes: $crate::simd::lane::map(self.lanes, $crate::simd::lane::wrapping_neg) }
            }

            #[inline(always)]
            fn add(&self, other: &Self) -> Self {
                Self {
                    lanes: $crate::simd::lane::zip(self.lanes, other.lanes, $crate::simd::lane::wrapping_add),
                }
            }

            #[inline(always)]
            fn sub(&self, other: &Self) -> Self {
                Self {
                    lanes: $crate::simd::lane::zip(self.lanes, other.lanes, $crate::simd::lane::wrapping_sub),
                }
            }

            #[inline(always)]
            fn mul(&self, other: &Self) -> Self {
                Self {
                    lanes: $crate::simd::lane::zip(self.lanes, other.lanes, $crate::simd::lane::wrapping_mul),
                }
            }
        }

        impl $crate::simd::traits::SimdInt for $name {
            #[inline(always)]
            fn and(&self, other: &Self) -> Self {
                Self { lanes: $crate::simd::lane::zip(self.lanes, other.lanes, |a, b| a & b) }
            }

            #[inline(always)]
            fn or(&self, other: &Self) -> Self {
                Self { lanes: $crate::simd::lane::zip(self.lanes, other.lanes, |a, b| a | b) }
            }

            #[inline(always)]
            fn xor(&self, other: &Self) -> Self {
                Self { lanes: $crate::simd::lane::zip(self.lanes, other.lanes, |a, b| a ^ b) }
            }

            #[inline(always)]
            fn not(&self) -> Self {
                Self { lanes: $crate::simd::lane::map(self.lanes, |a| !a) }
            }

            #[inline(always)]
            fn shift_left_by_scalar(&self, amount: u32) -> Self {
                Self { lanes: $crate::simd::lane::map(self.lanes, |a| $crate::simd::lane::shift_left(a, amount)) }
            }

            #[inline(always)]
            fn shift_right_logical_by_scalar(&self, amount: u32) -> Self {
                Self {
                    lanes: $crate::simd::lane::map(self.lanes, |a| {
                        $crate::simd::lane::shift_right_logical(a, amount)
                    }),
                }
            }

            #[inline(always)]
            fn shift_right_arithmetic_by_scalar(&self, amount: u32) -> Self {
                Self {
                    lanes: $crate::simd::lane::map(self.lanes, |a| {
                        $crate::simd::lane::shift_right_arithmetic(a, amount)
                    }),
                }
            }

            #[inline(always)]
            fn unsigned_less_than(&self, other: &Self) -> $mask {
                $mask::from_lanes($crate::simd::lane::zip(self.lanes, other.lanes, |a, b| {
                    (a as $unsigned) < (b as $unsigned)
                }))
            }

            #[inline(always)]
            fn unsigned_less_than_or_equal(&self, other: &Self) -> $mask {
                $mask::from_lanes($crate::simd::lane::zip(self.lanes, other.lanes, |a, b| {
                    (a as $unsigned) <= (b as $unsigned)
                }))
            }

            #[inline(always)]
            fn unsigned_greater_than(&self, other: &Self) -> $mask {
                $mask::from_lanes($crate::simd::lane::zip(self.lanes, other.lanes, |a, b| {
                    (a as $unsigned) > (b as $unsigned)
                }))
            }

            #[inline(always)]
            fn unsigned_greater_than_or_equal(&self, other: &Self) -> $mask {
                $mask::from_lanes($crate::simd::lane::zip(self.lanes, other.lanes, |a, b| {
                    (a as $unsigned) >= (b as $unsigned)
                }))
            }
        }

        impl_arith_operators!($name);

        impl std::ops::BitAnd for $name {
            type Output = Self;

            #[inline(always)]
            fn bitand(self, rhs: Self) -> Self {
                $crate::simd::traits::SimdInt::and(&self, &rhs)
            }
        }

        impl std::ops::BitOr for $name {
            type Output = Self;

            #[inline(always)]
            fn bitor(self, rhs: Self) -> Self {
                $crate::simd::traits::SimdInt::or(&self, &rhs)
            }
        }

        impl std::ops::BitXor for $name {
            type Output = Self;

            #[inline(always)]
            fn bitxor(self, rhs: Self) -> Self {
                $crate::simd::traits::SimdInt::xor(&self, &rhs)
            }
        }

        impl std::ops::Not for $name {
            type Output = Self;

            #[inline(always)]
            fn not(self) -> Self {
                $crate::simd::traits::SimdInt::not(&self)
            }
        }

        impl std::ops::Shl<u32> for $name {
            type Output = Self;

            #[inline(always)]
            fn shl(self, amount: u32) -> Self {
                $crate::simd::traits::SimdInt::shift_left_by_scalar(&self, amount)
            }
        }

        /// Arithmetic (sign-extending) right shift.
        impl std::ops::Shr<u32> for $name {
            type Output = Self;

            #[inline(always)]
            fn shr(self, amount: u32) -> Self {
                $crate::simd::traits::SimdInt::shift_right_arithmetic_by_scalar(&self, amount)
            }
        }
    };
}

/// Saturating arithmetic for the narrow integer vectors.
macro_rules! impl_saturating {
    ($name:ident, $lane:ty, $unsigned:ty) => {
        impl $crate::simd::traits::SimdSaturating for $name {
            #[inline(always)]
            fn add_saturate(&self, other: &Self) -> Self {
                Self { lanes: $crate::simd::lane::zip(self.lanes, other.lanes, |a, b| a.saturating_add(b)) }
            }

            #[inline(always)]
            fn sub_saturate(&self, other: &Self) -> Self {
                Self { lanes: $crate::simd::lane::zip(self.lanes, other.lanes, |a, b| a.saturating_sub(b)) }
            }

            #[inline(always)]
            fn unsigned_add_saturate(&self, other: &Self) -> Self {
                Self {
                    lanes: $crate::simd::lane::zip(self.lanes, other.lanes, |a, b| {
                        (a as $unsigned).saturating_add(b as $unsigned) as $lane
                    }),
                }
            }

            #[inline(always)]
            fn unsigned_sub_saturate(&self, other: &Self) -> Self {
                Self {
                    lanes: $crate::simd::lane::zip(self.lanes, other.lanes, |a, b| {
                        (a as $unsigned).saturating_sub(b as $unsigned) as $lane
                    }),
                }
            }
        }
    };
}

/// A boolean vector whose lanes are stored as all-zeros / all-ones `$int` masks.
macro_rules! impl_bool_vector {
    (
        $(#[$meta:meta])*
        $name:ident, $int:ty, $lanes:literal, $bytes:literal, [$($arg:ident),+]
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        #[repr(C, align(16))]
        pub struct $name {
            lanes: [$int; $lanes],
        }

        impl $name {
            /// Creates a vector from one truth value per lane, lane 0 first.
            #[allow(clippy::too_many_arguments)]
            #[inline(always)]
            pub fn new($($arg: bool),+) -> Self {
                Self::from_lanes([$($arg),+])
            }

            #[inline(always)]
            pub fn from_lanes(lanes: [bool; $lanes]) -> Self {
                Self { lanes: $crate::simd::lane::map(lanes, $crate::simd::lane::mask_lane::<$int>) }
            }

            #[inline(always)]
            pub fn to_array(self) -> [bool; $lanes] {
                $crate::simd::lane::map(self.lanes, |lane| lane != 0)
            }

            /// Lane masks as stored: `0` for false, `-1` for true.
            #[inline(always)]
            pub const fn to_mask_array(self) -> [$int; $lanes] {
                self.lanes
            }

            #[inline(always)]
            pub fn swizzle_by(&self, mask: $crate::simd::shuffle::SwizzleMask<$lanes>) -> Self {
                let indices = mask.indices();
                Self { lanes: std::array::from_fn(|i| self.lanes[indices[i] as usize]) }
            }

            #[inline(always)]
            pub fn shuffle_by(
                &self,
                other: &Self,
                mask: $crate::simd::shuffle::ShuffleMask<$lanes>,
            ) -> Self {
                let indices = mask.indices();
                Self {
                    lanes: std::array::from_fn(|i| {
                        let index = indices[i] as usize;
                        if index < $lanes {
                            self.lanes[index]
                        } else {
                            other.lanes[index - $lanes]
                        }
                    }),
                }
            }
        }

        impl From<[bool; $lanes]> for $name {
            #[inline(always)]
            fn from(lanes: [bool; $lanes]) -> Self {
                Self::from_lanes(lanes)
            }
        }

        impl $crate::simd::traits::sealed::Sealed for $name {
            // Only reachable with images built from other masks of this type, so every lane
            // is already 0 or -1.
            #[inline(always)]
            fn from_raw_bytes(bytes: [u8; $crate::VECTOR_BYTES]) -> Self {
                Self { lanes: decode_lanes!($int, $lanes, $bytes, bytes) }
            }
        }

        impl $crate::simd::traits::SimdVec for $name {
            type Lane = bool;

            const LANES: usize = $lanes;
            const LANE_BYTES: usize = $bytes;
            const NAME: &'static str = stringify!($name);

            #[inline(always)]
            fn from_fn<F: FnMut(usize) -> bool>(mut f: F) -> Self {
                Self { lanes: std::array::from_fn(|i| $crate::simd::lane::mask_lane::<$int>(f(i))) }
            }

            #[inline(always)]
            fn lane(&self, index: usize) -> bool {
                self.lanes[index] != 0
            }

            #[inline(always)]
            fn coerce(value: &$crate::simd::scalar::Scalar) -> bool {
                value.to_boolean()
            }

            #[inline(always)]
            fn lane_sign(&self, index: usize) -> bool {
                self.lanes[index] != 0
            }

            #[inline(always)]
            fn to_bytes(&self) -> [u8; $crate::VECTOR_BYTES] {
                encode_lanes!($bytes, self.lanes)
            }
        }

        impl $crate::simd::traits::SimdBool for $name {}

        impl $crate::simd::traits::SimdCompare for $name {
            type Mask = Self;

            #[inline(always)]
            fn equal(&self, other: &Self) -> Self {
                Self { lanes: $crate::simd::lane::zip(self.lanes, other.lanes, |a, b| !(a ^ b)) }
            }
        }

        impl std::ops::BitAnd for $name {
            type Output = Self;

            #[inline(always)]
            fn bitand(self, rhs: Self) -> Self {
                Self { lanes: $crate::simd::lane::zip(self.lanes, rhs.lanes, |a, b| a & b) }
            }
        }

        impl std::ops::BitOr for $name {
            type Output = Self;

            #[inline(always)]
            fn bitor(self, rhs: Self) -> Self {
                Self { lanes: $crate::simd::lane::zip(self.lanes, rhs.lanes, |a, b| a | b) }
            }
        }

        impl std::ops::BitXor for $name {
            type Output = Self;

            #[inline(always)]
            fn bitxor(self, rhs: Self) -> Self {
                Self { lanes: $crate::simd::lane::zip(self.lanes, rhs.lanes, |a, b| a ^ b) }
            }
        }

        impl std::ops::Not for $name {
            type Output = Self;

            #[inline(always)]
            fn not(self) -> Self {
                Self { lanes: $crate::simd::lane::map(self.lanes, |a| !a) }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::simd::macros::fmt_lanes(f, stringify!($name), self.lanes.iter().map(|&lane| lane != 0))
            }
        }
    };
}
