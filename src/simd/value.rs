//! A dynamically typed vector value and the per-type `check` operation.
//!
//! [`SimdValue`] holds any one of the nine vector types. `T::check` recovers the concrete
//! type, failing with a type error that names both the expected and the actual type.

use std::fmt;

use crate::error::{type_error, LaneError, Result};
use crate::simd::traits::SimdVec;
use crate::simd::{
    Bool16x8, Bool32x4, Bool64x2, Bool8x16, Float32x4, Float64x2, Int16x8, Int32x4, Int8x16,
};

/// Any 128-bit vector value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SimdValue {
    Float32x4(Float32x4),
    Float64x2(Float64x2),
    Int32x4(Int32x4),
    Int16x8(Int16x8),
    Int8x16(Int8x16),
    Bool64x2(Bool64x2),
    Bool32x4(Bool32x4),
    Bool16x8(Bool16x8),
    Bool8x16(Bool8x16),
}

macro_rules! simd_value_dispatch {
    ($value:expr, $v:ident => $body:expr) => {
        match $value {
            SimdValue::Float32x4($v) => $body,
            SimdValue::Float64x2($v) => $body,
            SimdValue::Int32x4($v) => $body,
            SimdValue::Int16x8($v) => $body,
            SimdValue::Int8x16($v) => $body,
            SimdValue::Bool64x2($v) => $body,
            SimdValue::Bool32x4($v) => $body,
            SimdValue::Bool16x8($v) => $body,
            SimdValue::Bool8x16($v) => $body,
        }
    };
}

impl SimdValue {
    /// Name of the wrapped vector type, e.g. `"Int16x8"`.
    pub fn type_name(&self) -> &'static str {
        fn name_of<V: SimdVec>(_: &V) -> &'static str {
            V::NAME
        }
        simd_value_dispatch!(self, v => name_of(v))
    }

    /// Raw little-endian bytes of the wrapped vector.
    pub fn to_bytes(&self) -> [u8; crate::VECTOR_BYTES] {
        simd_value_dispatch!(self, v => v.to_bytes())
    }
}

impl fmt::Display for SimdValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        simd_value_dispatch!(self, v => fmt::Display::fmt(v, f))
    }
}

macro_rules! impl_simd_value {
    ($($name:ident),+ $(,)?) => {
        $(
            impl $name {
                /// Returns the wrapped vector if `value` holds this type.
                ///
                /// # Errors
                ///
                /// Returns a type error naming the expected and actual types otherwise.
                pub fn check(value: &SimdValue) -> Result<Self> {
                    match value {
                        SimdValue::$name(v) => Ok(*v),
                        other => Err(type_error(format!(
                            "expected {}, got {}",
                            stringify!($name),
                            other.type_name()
                        ))),
                    }
                }
            }

            impl From<$name> for SimdValue {
                #[inline(always)]
                fn from(v: $name) -> Self {
                    SimdValue::$name(v)
                }
            }

            impl TryFrom<SimdValue> for $name {
                type Error = LaneError;

                fn try_from(value: SimdValue) -> Result<Self> {
                    $name::check(&value)
                }
            }
        )+
    };
}

impl_simd_value!(
    Float32x4, Float64x2, Int32x4, Int16x8, Int8x16, Bool64x2, Bool32x4, Bool16x8, Bool8x16,
);
