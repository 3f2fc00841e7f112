//! # lanes128
//!
//! Fixed-width 128-bit SIMD vector values: `Float32x4`, `Float64x2`, `Int32x4`, `Int16x8`,
//! `Int8x16` and their boolean mask counterparts, with lane-wise arithmetic, bitwise and
//! comparison operations, shuffles, bit reinterpretation, numeric conversion and
//! bounds-checked loads and stores against byte buffers.
//!
//! Vectors are immutable `Copy` values. Every operation that can fail returns a
//! [`error::Result`]; nothing is clamped or silently defaulted.
//!
//! ```rust
//! use lanes128::simd::{Float32x4, Int32x4, SimdBits, SimdOrd, SimdCompare, SimdVec};
//!
//! let a = Float32x4::new(1.0, 2.0, 3.0, 4.0);
//! let b = Float32x4::splat(2.5);
//!
//! let mask = a.less_than(&b);
//! assert_eq!(mask.sign_mask(), 0b0011);
//! assert_eq!(Float32x4::select(&mask, &a, &b), Float32x4::new(1.0, 2.0, 2.5, 2.5));
//!
//! let bits = Int32x4::from_bits(&a);
//! assert_eq!(bits.extract_lane(0).unwrap(), 0x3F80_0000);
//! ```
//!
//! Slices of lane values can be processed a vector at a time through the
//! [`simd::SimdAdd`], [`simd::SimdSub`] and [`simd::SimdMul`] traits.

pub mod error;
pub mod simd;

pub use error::{LaneError, Result};

/// Width of every vector type in bytes.
pub const VECTOR_BYTES: usize = 16;

/// Memory alignment of every vector type in bytes.
pub const SIMD_ALIGNMENT: usize = 16;

/// Slices longer than this many elements are split across the rayon pool by the `par_simd_*`
/// slice kernels. Shorter slices run on the calling thread.
pub const PARALLEL_THRESHOLD: usize = 1 << 16;

/// Number of elements handed to one rayon task by the `par_simd_*` slice kernels.
pub const PARALLEL_CHUNK_SIZE: usize = 1 << 14;
