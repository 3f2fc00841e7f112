//! 128-bit lane vectors.
//!
//! Five numeric types and four boolean (mask) types, all exactly 16 bytes:
//!
//! | Type        | Lanes | Lane  | Mask type  |
//! |-------------|-------|-------|------------|
//! | `Float32x4` | 4     | `f32` | `Bool32x4` |
//! | `Float64x2` | 2     | `f64` | `Bool64x2` |
//! | `Int32x4`   | 4     | `i32` | `Bool32x4` |
//! | `Int16x8`   | 8     | `i16` | `Bool16x8` |
//! | `Int8x16`   | 16    | `i8`  | `Bool8x16` |
//!
//! Vectors are plain `Copy` values and every operation returns a new vector. The shared
//! operations are defined as traits in [`traits`]; bring them into scope with
//! `use lanes128::simd::*` or the individual trait names.

#[macro_use]
mod macros;

pub(crate) mod lane;

pub mod bits;
pub mod bool;
pub mod convert;
pub mod float32x4;
pub mod float64x2;
pub mod int16x8;
pub mod int32x4;
pub mod int8x16;
pub mod memory;
pub mod scalar;
pub mod shuffle;
pub mod slice;
pub mod traits;
pub mod value;

pub use self::bool::{Bool16x8, Bool32x4, Bool64x2, Bool8x16};
pub use float32x4::Float32x4;
pub use float64x2::Float64x2;
pub use int16x8::Int16x8;
pub use int32x4::Int32x4;
pub use int8x16::Int8x16;

pub use memory::{
    ArrayBufferView, ElementIndex, ElementType, SimdLoad, SimdPartialLoad, SimdPartialStore,
    SimdStore, TypedBuffer,
};
pub use scalar::Scalar;
pub use shuffle::{ShuffleMask, SimdShuffle, SwizzleMask};
pub use traits::{
    SimdAdd, SimdArith, SimdBits, SimdBool, SimdCompare, SimdFloat, SimdInt, SimdMul, SimdOrd,
    SimdSaturating, SimdSub, SimdVec,
};
pub use value::SimdValue;
