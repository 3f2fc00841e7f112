//! Bounds-checked loads and stores between vectors and byte buffers.
//!
//! A load reads `lanes * LANE_BYTES` bytes starting at
//! `index * buffer.element_size() + buffer.byte_offset()` and interprets them as the
//! vector's lane type, whatever element type the buffer itself was declared with. Lanes are
//! little-endian. Partial loads (`load_x`, `load_xy`, `load_xyz`) zero-fill the lanes they
//! do not read; partial stores leave the bytes after the written lanes untouched.
//!
//! Every access is validated against `[byte_offset, byte_offset + byte_length)` before a
//! single byte is read or written, so a failed store never leaves a partial write behind.

use std::ops::Range;

use crate::error::{range_error, type_error, Result};
use crate::simd::scalar::Scalar;
use crate::simd::traits::{SimdBits, SimdVec};
use crate::simd::{Float32x4, Float64x2, Int16x8, Int32x4, Int8x16};
use crate::VECTOR_BYTES;

/// A view of raw bytes with an element size, as handed to vector loads and stores.
pub trait TypedBuffer {
    /// Start of the view within [`TypedBuffer::storage`], in bytes.
    fn byte_offset(&self) -> usize;

    /// Length of the view in bytes.
    fn byte_length(&self) -> usize;

    /// Size of one element of the view's declared type, in bytes. Element indices passed
    /// to loads and stores are scaled by this.
    fn element_size(&self) -> usize;

    /// The whole underlying storage, of which the view is a sub-range.
    fn storage(&self) -> &[u8];

    /// Mutable access to the whole underlying storage.
    fn storage_mut(&mut self) -> &mut [u8];
}

impl TypedBuffer for [u8] {
    fn byte_offset(&self) -> usize {
        0
    }

    fn byte_length(&self) -> usize {
        self.len()
    }

    fn element_size(&self) -> usize {
        1
    }

    fn storage(&self) -> &[u8] {
        self
    }

    fn storage_mut(&mut self) -> &mut [u8] {
        self
    }
}

impl TypedBuffer for Vec<u8> {
    fn byte_offset(&self) -> usize {
        0
    }

    fn byte_length(&self) -> usize {
        self.len()
    }

    fn element_size(&self) -> usize {
        1
    }

    fn storage(&self) -> &[u8] {
        self
    }

    fn storage_mut(&mut self) -> &mut [u8] {
        self
    }
}

/// Declared element type of an [`ArrayBufferView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Float32,
    Float64,
}

impl ElementType {
    /// Size of one element in bytes.
    pub const fn size(self) -> usize {
        match self {
            ElementType::Int8 | ElementType::Uint8 => 1,
            ElementType::Int16 | ElementType::Uint16 => 2,
            ElementType::Int32 | ElementType::Uint32 | ElementType::Float32 => 4,
            ElementType::Float64 => 8,
        }
    }
}

/// Owned byte storage viewed as an array of `element_type` elements.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayBufferView {
    buffer: Vec<u8>,
    element_type: ElementType,
    byte_offset: usize,
    length: usize,
}

impl ArrayBufferView {
    /// A zero-filled view of `length` elements over a buffer of exactly that size.
    ///
    /// # Errors
    ///
    /// Returns a range error if the byte size of the view is not addressable.
    pub fn new(element_type: ElementType, length: usize) -> Result<Self> {
        let byte_length = length
            .checked_mul(element_type.size())
            .filter(|&bytes| bytes <= isize::MAX as usize)
            .ok_or_else(|| {
                range_error(format!(
                    "invalid view length {length} for {}-byte elements",
                    element_type.size()
                ))
            })?;

        Ok(Self {
            buffer: vec![0; byte_length],
            element_type,
            byte_offset: 0,
            length,
        })
    }

    /// A view over `buffer` starting at `byte_offset`.
    ///
    /// With `length == None` the view extends to the end of the buffer, which must then be
    /// a whole number of elements past `byte_offset`.
    ///
    /// # Errors
    ///
    /// Returns a range error if `byte_offset` is not a multiple of the element size or if
    /// the view does not fit in the buffer.
    pub fn with_buffer(
        buffer: Vec<u8>,
        element_type: ElementType,
        byte_offset: usize,
        length: Option<usize>,
    ) -> Result<Self> {
        let element_size = element_type.size();

        if byte_offset % element_size != 0 {
            return Err(range_error(format!(
                "start offset {byte_offset} is not a multiple of the element size {element_size}"
            )));
        }
        if byte_offset > buffer.len() {
            return Err(range_error(format!(
                "start offset {byte_offset} is outside the bounds of a {} byte buffer",
                buffer.len()
            )));
        }

        let remaining = buffer.len() - byte_offset;
        let length = match length {
            Some(length) => {
                let fits = length
                    .checked_mul(element_size)
                    .is_some_and(|bytes| bytes <= remaining);
                if !fits {
                    return Err(range_error(format!(
                        "invalid view length {length} for {remaining} remaining bytes"
                    )));
                }
                length
            }
            None => {
                if remaining % element_size != 0 {
                    return Err(range_error(format!(
                        "remaining byte length {remaining} is not a multiple of the element size {element_size}"
                    )));
                }
                remaining / element_size
            }
        };

        Ok(Self {
            buffer,
            element_type,
            byte_offset,
            length,
        })
    }

    /// Number of elements in the view.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    /// The bytes covered by the view.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[self.byte_offset..self.byte_offset + self.byte_length()]
    }

    /// Gives back the whole underlying storage.
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }
}

impl TypedBuffer for ArrayBufferView {
    fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    fn byte_length(&self) -> usize {
        self.length * self.element_type.size()
    }

    fn element_size(&self) -> usize {
        self.element_type.size()
    }

    fn storage(&self) -> &[u8] {
        &self.buffer
    }

    fn storage_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }
}

/// Values accepted as an element index by loads and stores.
///
/// Negative integers are out of bounds (range error). Fractional, NaN or infinite numbers
/// and non-numeric scalars are not indices at all (type error).
pub trait ElementIndex {
    fn to_element_index(self) -> Result<usize>;
}

impl ElementIndex for usize {
    #[inline(always)]
    fn to_element_index(self) -> Result<usize> {
        Ok(self)
    }
}

impl ElementIndex for u32 {
    #[inline(always)]
    fn to_element_index(self) -> Result<usize> {
        usize::try_from(self).map_err(|_| out_of_bounds())
    }
}

impl ElementIndex for i32 {
    #[inline(always)]
    fn to_element_index(self) -> Result<usize> {
        usize::try_from(self).map_err(|_| out_of_bounds())
    }
}

impl ElementIndex for i64 {
    #[inline(always)]
    fn to_element_index(self) -> Result<usize> {
        usize::try_from(self).map_err(|_| out_of_bounds())
    }
}

impl ElementIndex for f64 {
    fn to_element_index(self) -> Result<usize> {
        if !self.is_finite() || self.fract() != 0.0 {
            return Err(type_error(format!("element index {self} is not an integer")));
        }
        if self < 0.0 || self > usize::MAX as f64 {
            return Err(out_of_bounds());
        }
        Ok(self as usize)
    }
}

impl ElementIndex for Scalar {
    fn to_element_index(self) -> Result<usize> {
        match self {
            Scalar::Number(n) => n.to_element_index(),
            other => Err(type_error(format!(
                "element index must be a number, got {}",
                other.kind()
            ))),
        }
    }
}

fn out_of_bounds() -> crate::error::LaneError {
    range_error("index out of bounds")
}

/// Validates and returns the storage byte range touched by an access of `bytes` bytes at
/// element `index`.
fn checked_range<B: TypedBuffer + ?Sized>(buffer: &B, index: usize, bytes: usize) -> Result<Range<usize>> {
    let start = index
        .checked_mul(buffer.element_size())
        .and_then(|offset| offset.checked_add(buffer.byte_offset()))
        .ok_or_else(out_of_bounds)?;
    let end = start.checked_add(bytes).ok_or_else(out_of_bounds)?;
    let limit = buffer
        .byte_offset()
        .checked_add(buffer.byte_length())
        .ok_or_else(out_of_bounds)?;

    if end > limit || end > buffer.storage().len() {
        return Err(out_of_bounds());
    }

    Ok(start..end)
}

/// Reads `lanes` lanes of `V` at element `index`, zero-filling the rest.
pub(crate) fn load_lanes<V, B, I>(buffer: &B, index: I, lanes: usize) -> Result<V>
where
    V: SimdBits,
    B: TypedBuffer + ?Sized,
    I: ElementIndex,
{
    debug_assert!(lanes >= 1 && lanes <= V::LANES);

    let index = index.to_element_index()?;
    let range = checked_range(buffer, index, lanes * V::LANE_BYTES)?;

    let mut image = [0u8; VECTOR_BYTES];
    image[..range.len()].copy_from_slice(&buffer.storage()[range]);

    Ok(V::from_bytes(image))
}

/// Writes the first `lanes` lanes of `vector` at element `index`.
pub(crate) fn store_lanes<V, B, I>(vector: &V, buffer: &mut B, index: I, lanes: usize) -> Result<()>
where
    V: SimdVec,
    B: TypedBuffer + ?Sized,
    I: ElementIndex,
{
    debug_assert!(lanes >= 1 && lanes <= V::LANES);

    let index = index.to_element_index()?;
    let range = checked_range(buffer, index, lanes * V::LANE_BYTES)?;

    let image = vector.to_bytes();
    let count = range.len();
    buffer.storage_mut()[range].copy_from_slice(&image[..count]);

    Ok(())
}

/// Full and single-lane loads.
pub trait SimdLoad: SimdBits {
    /// Loads all lanes from element `index` of `buffer`.
    ///
    /// # Errors
    ///
    /// Range error if the 16 bytes do not fit in the view; type error or range error if
    /// `index` is not a valid element index.
    fn load<B, I>(buffer: &B, index: I) -> Result<Self>
    where
        B: TypedBuffer + ?Sized,
        I: ElementIndex,
    {
        load_lanes(buffer, index, Self::LANES)
    }

    /// Loads lane 0 only; the other lanes are zero.
    fn load_x<B, I>(buffer: &B, index: I) -> Result<Self>
    where
        B: TypedBuffer + ?Sized,
        I: ElementIndex,
    {
        load_lanes(buffer, index, 1)
    }
}

/// Full and single-lane stores.
pub trait SimdStore: SimdVec {
    /// Stores all lanes at element `index` of `buffer`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SimdLoad::load`]. On error the buffer is unchanged.
    fn store<B, I>(&self, buffer: &mut B, index: I) -> Result<()>
    where
        B: TypedBuffer + ?Sized,
        I: ElementIndex,
    {
        store_lanes(self, buffer, index, Self::LANES)
    }

    /// Stores lane 0 only.
    fn store_x<B, I>(&self, buffer: &mut B, index: I) -> Result<()>
    where
        B: TypedBuffer + ?Sized,
        I: ElementIndex,
    {
        store_lanes(self, buffer, index, 1)
    }
}

/// Two- and three-lane loads for the four-lane vectors.
pub trait SimdPartialLoad: SimdLoad {
    fn load_xy<B, I>(buffer: &B, index: I) -> Result<Self>
    where
        B: TypedBuffer + ?Sized,
        I: ElementIndex,
    {
        load_lanes(buffer, index, 2)
    }

    fn load_xyz<B, I>(buffer: &B, index: I) -> Result<Self>
    where
        B: TypedBuffer + ?Sized,
        I: ElementIndex,
    {
        load_lanes(buffer, index, 3)
    }
}

/// Two- and three-lane stores for the four-lane vectors.
pub trait SimdPartialStore: SimdStore {
    fn store_xy<B, I>(&self, buffer: &mut B, index: I) -> Result<()>
    where
        B: TypedBuffer + ?Sized,
        I: ElementIndex,
    {
        store_lanes(self, buffer, index, 2)
    }

    fn store_xyz<B, I>(&self, buffer: &mut B, index: I) -> Result<()>
    where
        B: TypedBuffer + ?Sized,
        I: ElementIndex,
    {
        store_lanes(self, buffer, index, 3)
    }
}

impl SimdLoad for Float32x4 {}
impl SimdLoad for Float64x2 {}
impl SimdLoad for Int32x4 {}
impl SimdLoad for Int16x8 {}
impl SimdLoad for Int8x16 {}

impl SimdStore for Float32x4 {}
impl SimdStore for Float64x2 {}
impl SimdStore for Int32x4 {}
impl SimdStore for Int16x8 {}
impl SimdStore for Int8x16 {}

impl SimdPartialLoad for Float32x4 {}
impl SimdPartialLoad for Int32x4 {}

impl SimdPartialStore for Float32x4 {}
impl SimdPartialStore for Int32x4 {}

#[cfg(test)]
mod tests {
    use super::*;

    fn f32_bytes(values: &[f32]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    #[test]
    fn test_load_float32x4_from_float32_view() {
        let bytes = f32_bytes(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let view = ArrayBufferView::with_buffer(bytes, ElementType::Float32, 0, None).unwrap();

        let v = Float32x4::load(&view, 2usize).unwrap();
        assert_eq!(v, Float32x4::new(3.0, 4.0, 5.0, 6.0));
        assert!(Float32x4::load(&view, 3usize).unwrap_err().is_range_error());
    }

    #[test]
    fn test_load_ignores_declared_element_type() {
        let bytes = f32_bytes(&[1.0, 2.0, 3.0, 4.0]);
        let mut padded = vec![0u8; 1];
        padded.extend_from_slice(&bytes);

        // Byte view, misaligned by one byte.
        let v = Float32x4::load(padded.as_slice(), 1usize).unwrap();
        assert_eq!(v, Float32x4::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_partial_loads_zero_fill() {
        let bytes = f32_bytes(&[1.0, 2.0, 3.0, 4.0]);
        let view = ArrayBufferView::with_buffer(bytes, ElementType::Float32, 0, None).unwrap();

        assert_eq!(Float32x4::load_x(&view, 0usize).unwrap(), Float32x4::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(Float32x4::load_xy(&view, 1usize).unwrap(), Float32x4::new(2.0, 3.0, 0.0, 0.0));
        assert_eq!(Float32x4::load_xyz(&view, 1usize).unwrap(), Float32x4::new(2.0, 3.0, 4.0, 0.0));
        assert!(Float32x4::load_xyz(&view, 2usize).is_err());
        assert!(Float32x4::load_x(&view, 3usize).is_ok());
    }

    #[test]
    fn test_partial_store_leaves_tail_untouched() {
        let mut view = ArrayBufferView::new(ElementType::Int32, 4).unwrap();
        Int32x4::splat(-1).store(&mut view, 0usize).unwrap();

        Int32x4::new(1, 2, 3, 4).store_xy(&mut view, 1usize).unwrap();

        let expected: Vec<u8> = [-1i32, 1, 2, -1].iter().flat_map(|v| v.to_le_bytes()).collect();
        assert_eq!(view.as_bytes(), expected.as_slice());
    }

    #[test]
    fn test_store_out_of_bounds_leaves_buffer_unchanged() {
        let mut buffer = vec![7u8; 20];
        let err = Int32x4::new(1, 2, 3, 4).store(&mut buffer, 5usize).unwrap_err();
        assert!(err.is_range_error());
        assert_eq!(buffer, vec![7u8; 20]);

        Int32x4::new(1, 2, 3, 4).store(&mut buffer, 4usize).unwrap();
        assert_eq!(&buffer[..4], &[7, 7, 7, 7]);
    }

    #[test]
    fn test_view_offset_is_respected() {
        let storage: Vec<u8> = (0u8..32).collect();
        let view = ArrayBufferView::with_buffer(storage, ElementType::Int16, 8, Some(8)).unwrap();

        let v = Int8x16::load(&view, 0usize).unwrap();
        assert_eq!(v.to_array()[0], 8);
        assert_eq!(v.to_array()[15], 23);

        // Bytes 24..32 exist in storage but lie outside the view.
        assert!(Int8x16::load(&view, 1usize).unwrap_err().is_range_error());
        assert!(Int8x16::load_x(&view, 7usize).is_ok());
    }

    #[test]
    fn test_element_index_kinds() {
        let buffer = vec![0u8; 64];
        assert!(Float64x2::load(&buffer, 3.0f64).is_ok());
        assert!(Float64x2::load(&buffer, 1.5f64).unwrap_err().is_type_error());
        assert!(Float64x2::load(&buffer, f64::NAN).unwrap_err().is_type_error());
        assert!(Float64x2::load(&buffer, -1i32).unwrap_err().is_range_error());
        assert!(Float64x2::load(&buffer, -1.0f64).unwrap_err().is_range_error());
        assert!(Float64x2::load(&buffer, Scalar::Bool(true)).unwrap_err().is_type_error());
        assert!(Float64x2::load(&buffer, Scalar::Undefined).unwrap_err().is_type_error());
        assert!(Float64x2::load(&buffer, Scalar::from(48)).is_ok());
        assert!(Float64x2::load(&buffer, 49i64).is_err());
    }

    #[test]
    fn test_index_overflow_is_range_error() {
        let view = ArrayBufferView::new(ElementType::Float64, 4).unwrap();
        assert!(Float64x2::load(&view, usize::MAX).unwrap_err().is_range_error());
    }

    #[test]
    fn test_with_buffer_validation() {
        assert!(ArrayBufferView::with_buffer(vec![0; 16], ElementType::Int32, 2, None)
            .unwrap_err()
            .is_range_error());
        assert!(ArrayBufferView::with_buffer(vec![0; 16], ElementType::Int32, 4, Some(4)).is_err());
        assert!(ArrayBufferView::with_buffer(vec![0; 15], ElementType::Int32, 0, None).is_err());
        assert!(ArrayBufferView::with_buffer(vec![0; 16], ElementType::Int32, 20, None).is_err());

        let view = ArrayBufferView::with_buffer(vec![0; 16], ElementType::Int32, 4, None).unwrap();
        assert_eq!(view.len(), 3);
        assert_eq!(view.byte_length(), 12);
        assert_eq!(view.element_type(), ElementType::Int32);
    }

    #[test]
    fn test_new_rejects_unaddressable_length() {
        let err = ArrayBufferView::new(ElementType::Float64, usize::MAX / 4).unwrap_err();
        assert!(err.is_range_error());
        assert!(ArrayBufferView::new(ElementType::Int16, usize::MAX / 2).is_err());
        assert!(ArrayBufferView::new(ElementType::Uint8, usize::MAX).is_err());

        let view = ArrayBufferView::new(ElementType::Float64, 3).unwrap();
        assert_eq!(view.len(), 3);
        assert_eq!(view.byte_length(), 24);
        assert!(view.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_float64x2_store_x() {
        let mut view = ArrayBufferView::new(ElementType::Float64, 2).unwrap();
        Float64x2::new(1.5, 2.5).store_x(&mut view, 1usize).unwrap();
        assert_eq!(Float64x2::load(&view, 0usize).unwrap(), Float64x2::new(0.0, 1.5));
    }
}
