//! Element-wise arithmetic over slices, one 128-bit vector at a time.
//!
//! Implements [`SimdAdd`], [`SimdSub`] and [`SimdMul`] for `&[f32]`, `&[f64]`, `&[i32]`,
//! `&[i16]` and `&[i8]`. Each operation has three variants:
//!
//! - `simd_*`: sequential, loads `LANES` elements per step into the matching vector type.
//!   A trailing block shorter than one vector is zero-padded and only its valid lanes are
//!   written back.
//! - `par_simd_*`: splits the output into chunks of [`PARALLEL_CHUNK_SIZE`] elements (a
//!   multiple of the lane count) and runs the vector kernel on each chunk in parallel.
//!   Inputs of at most [`PARALLEL_THRESHOLD`] elements run sequentially.
//! - `scalar_*`: a plain element loop, used as the reference.
//!
//! Integer lanes wrap on overflow in all three variants.
//!
//! ```
//! use lanes128::simd::SimdAdd;
//!
//! let a = [1.0f32, 2.0, 3.0, 4.0, 5.0];
//! let b = [10.0f32; 5];
//! assert_eq!(a.as_slice().simd_add(b.as_slice()).unwrap(), vec![11.0, 12.0, 13.0, 14.0, 15.0]);
//! ```

use rayon::prelude::*;

use crate::error::{length_mismatch, Result};
use crate::simd::traits::{SimdAdd, SimdArith, SimdMul, SimdSub, SimdVec};
use crate::simd::{Float32x4, Float64x2, Int16x8, Int32x4, Int8x16};
use crate::{PARALLEL_CHUNK_SIZE, PARALLEL_THRESHOLD};

#[inline(always)]
fn check_lengths<T>(a: &[T], b: &[T]) -> Result<()> {
    if a.len() != b.len() {
        return Err(length_mismatch(a.len(), b.len()));
    }
    Ok(())
}

/// Loads up to `V::LANES` elements, zero-filling missing lanes.
#[inline(always)]
fn load_block<V>(block: &[V::Lane]) -> V
where
    V: SimdVec,
    V::Lane: Default,
{
    V::from_fn(|i| block.get(i).copied().unwrap_or_default())
}

/// Applies `op` block by block. All three slices have the same length.
#[inline(always)]
fn simd_kernel<V, F>(a: &[V::Lane], b: &[V::Lane], c: &mut [V::Lane], op: &F)
where
    V: SimdVec,
    V::Lane: Default,
    F: Fn(&V, &V) -> V,
{
    let step = V::LANES;

    for ((a_block, b_block), c_block) in a.chunks(step).zip(b.chunks(step)).zip(c.chunks_mut(step)) {
        let result = op(&load_block::<V>(a_block), &load_block::<V>(b_block));
        for (i, lane) in c_block.iter_mut().enumerate() {
            *lane = result.lane(i);
        }
    }
}

fn simd_zip<V, F>(a: &[V::Lane], b: &[V::Lane], op: F) -> Result<Vec<V::Lane>>
where
    V: SimdVec,
    V::Lane: Default,
    F: Fn(&V, &V) -> V,
{
    check_lengths(a, b)?;

    tracing::trace!(len = a.len(), vector = V::NAME, "sequential simd kernel");

    let mut c = vec![V::Lane::default(); a.len()];
    simd_kernel(a, b, &mut c, &op);
    Ok(c)
}

fn parallel_simd_zip<V, F>(a: &[V::Lane], b: &[V::Lane], op: F) -> Result<Vec<V::Lane>>
where
    V: SimdVec,
    V::Lane: Default + Send + Sync,
    F: Fn(&V, &V) -> V + Sync,
{
    // For small arrays, stay on the calling thread.
    if a.len() <= PARALLEL_THRESHOLD {
        return simd_zip(a, b, op);
    }

    check_lengths(a, b)?;

    let step = V::LANES;
    let chunk_size = ((PARALLEL_CHUNK_SIZE / step) * step).max(step);

    tracing::debug!(
        len = a.len(),
        vector = V::NAME,
        chunk_size,
        chunks = a.len().div_ceil(chunk_size),
        "parallel simd kernel"
    );

    let mut c = vec![V::Lane::default(); a.len()];

    c.par_chunks_mut(chunk_size)
        .zip(a.par_chunks(chunk_size))
        .zip(b.par_chunks(chunk_size))
        .for_each(|((c_chunk, a_chunk), b_chunk)| {
            simd_kernel(a_chunk, b_chunk, c_chunk, &op);
        });

    Ok(c)
}

fn scalar_zip<T: Copy>(a: &[T], b: &[T], op: impl Fn(T, T) -> T) -> Result<Vec<T>> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b.iter()).map(|(&x, &y)| op(x, y)).collect())
}

macro_rules! impl_slice_kernels {
    ($lane:ty, $vector:ty, $add:path, $sub:path, $mul:path) => {
        impl<'b> SimdAdd<&'b [$lane]> for &[$lane] {
            type Output = Result<Vec<$lane>>;

            #[inline(always)]
            fn simd_add(self, rhs: &'b [$lane]) -> Self::Output {
                simd_zip::<$vector, _>(self, rhs, <$vector as SimdArith>::add)
            }

            #[inline(always)]
            fn par_simd_add(self, rhs: &'b [$lane]) -> Self::Output {
                parallel_simd_zip::<$vector, _>(self, rhs, <$vector as SimdArith>::add)
            }

            #[inline(always)]
            fn scalar_add(self, rhs: &'b [$lane]) -> Self::Output {
                scalar_zip(self, rhs, $add)
            }
        }

        impl<'b> SimdSub<&'b [$lane]> for &[$lane] {
            type Output = Result<Vec<$lane>>;

            #[inline(always)]
            fn simd_sub(self, rhs: &'b [$lane]) -> Self::Output {
                simd_zip::<$vector, _>(self, rhs, <$vector as SimdArith>::sub)
            }

            #[inline(always)]
            fn par_simd_sub(self, rhs: &'b [$lane]) -> Self::Output {
                parallel_simd_zip::<$vector, _>(self, rhs, <$vector as SimdArith>::sub)
            }

            #[inline(always)]
            fn scalar_sub(self, rhs: &'b [$lane]) -> Self::Output {
                scalar_zip(self, rhs, $sub)
            }
        }

        impl<'b> SimdMul<&'b [$lane]> for &[$lane] {
            type Output = Result<Vec<$lane>>;

            #[inline(always)]
            fn simd_mul(self, rhs: &'b [$lane]) -> Self::Output {
                simd_zip::<$vector, _>(self, rhs, <$vector as SimdArith>::mul)
            }

            #[inline(always)]
            fn par_simd_mul(self, rhs: &'b [$lane]) -> Self::Output {
                parallel_simd_zip::<$vector, _>(self, rhs, <$vector as SimdArith>::mul)
            }

            #[inline(always)]
            fn scalar_mul(self, rhs: &'b [$lane]) -> Self::Output {
                scalar_zip(self, rhs, $mul)
            }
        }
    };
}

impl_slice_kernels!(f32, Float32x4, std::ops::Add::add, std::ops::Sub::sub, std::ops::Mul::mul);
impl_slice_kernels!(f64, Float64x2, std::ops::Add::add, std::ops::Sub::sub, std::ops::Mul::mul);
impl_slice_kernels!(i32, Int32x4, i32::wrapping_add, i32::wrapping_sub, i32::wrapping_mul);
impl_slice_kernels!(i16, Int16x8, i16::wrapping_add, i16::wrapping_sub, i16::wrapping_mul);
impl_slice_kernels!(i8, Int8x16, i8::wrapping_add, i8::wrapping_sub, i8::wrapping_mul);
