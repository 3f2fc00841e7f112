//! Loads and stores through typed views with offsets, partial lane counts and loosely typed
//! element indices.

use lanes128::simd::{
    ArrayBufferView, ElementType, Float32x4, Float64x2, Int16x8, Int32x4, Scalar, SimdLoad,
    SimdPartialLoad, SimdPartialStore, SimdStore, SimdVec, TypedBuffer,
};

fn float32_view(values: &[f32]) -> ArrayBufferView {
    let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
    ArrayBufferView::with_buffer(bytes, ElementType::Float32, 0, None).unwrap()
}

#[test]
fn test_load_each_window_of_a_float32_view() {
    let values: Vec<f32> = (0..8).map(|i| i as f32).collect();
    let view = float32_view(&values);

    for start in 0..=4usize {
        let v = Float32x4::load(&view, start).unwrap();
        assert_eq!(v.to_array(), [values[start], values[start + 1], values[start + 2], values[start + 3]]);
    }
    assert!(Float32x4::load(&view, 5usize).unwrap_err().is_range_error());

    // Partial loads fit further along.
    assert_eq!(Float32x4::load_xyz(&view, 5usize).unwrap().to_array(), [5.0, 6.0, 7.0, 0.0]);
    assert_eq!(Float32x4::load_xy(&view, 6usize).unwrap().to_array(), [6.0, 7.0, 0.0, 0.0]);
    assert_eq!(Float32x4::load_x(&view, 7usize).unwrap().to_array(), [7.0, 0.0, 0.0, 0.0]);
    assert!(Float32x4::load_x(&view, 8usize).is_err());
}

#[test]
fn test_view_with_byte_offset() {
    // Skip the first two int16 elements of a 24-byte buffer.
    let buffer: Vec<u8> = (0..24).collect();
    let view = ArrayBufferView::with_buffer(buffer, ElementType::Int16, 4, Some(10)).unwrap();
    assert_eq!(view.byte_offset(), 4);
    assert_eq!(view.byte_length(), 20);

    let v = Int16x8::load(&view, 0usize).unwrap();
    assert_eq!(v.to_array()[0], i16::from_le_bytes([4, 5]));
    assert_eq!(v.to_array()[7], i16::from_le_bytes([18, 19]));

    // 16 bytes at element 2 would end at byte 24: the last byte of the view.
    assert!(Int16x8::load(&view, 2usize).is_ok());
    assert!(Int16x8::load(&view, 3usize).is_err());
}

#[test]
fn test_store_respects_view_end_not_buffer_end() {
    // The view stops 8 bytes short of the buffer.
    let mut view = ArrayBufferView::with_buffer(vec![0; 32], ElementType::Int32, 0, Some(6)).unwrap();

    assert!(Int32x4::splat(-1).store(&mut view, 3usize).is_err());
    assert!(view.clone().into_inner().iter().all(|&b| b == 0));

    Int32x4::splat(-1).store(&mut view, 2usize).unwrap();
    let storage = view.into_inner();
    assert!(storage[..8].iter().all(|&b| b == 0));
    assert!(storage[8..24].iter().all(|&b| b == 0xFF));
    assert!(storage[24..].iter().all(|&b| b == 0));
}

#[test]
fn test_partial_stores() {
    let mut view = float32_view(&[9.0; 4]);
    let v = Float32x4::new(1.0, 2.0, 3.0, 4.0);

    v.store_xy(&mut view, 0usize).unwrap();
    assert_eq!(Float32x4::load(&view, 0usize).unwrap(), Float32x4::new(1.0, 2.0, 9.0, 9.0));

    v.store_xyz(&mut view, 1usize).unwrap();
    assert_eq!(Float32x4::load(&view, 0usize).unwrap(), Float32x4::new(1.0, 1.0, 2.0, 3.0));

    let before = view.as_bytes().to_vec();
    assert!(v.store_xyz(&mut view, 2usize).unwrap_err().is_range_error());
    assert!(v.store(&mut view, 1usize).unwrap_err().is_range_error());
    assert_eq!(view.as_bytes(), before.as_slice());
}

#[test]
fn test_loads_reinterpret_bytes() {
    let view = float32_view(&[1.0, 2.0, 3.0, 4.0]);
    let ints = Int32x4::load(&view, 0usize).unwrap();
    assert_eq!(ints, Int32x4::new(0x3F80_0000, 0x4000_0000, 0x4040_0000, 0x4080_0000));

    let doubles = Float64x2::load(&view, 0usize).unwrap();
    assert_eq!(doubles.to_bytes(), Float32x4::new(1.0, 2.0, 3.0, 4.0).to_bytes());
}

#[test]
fn test_element_index_forms() {
    let view = float32_view(&[0.0, 1.0, 2.0, 3.0, 4.0]);

    assert_eq!(Float32x4::load(&view, 1u32).unwrap(), Float32x4::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(Float32x4::load(&view, 1i64).unwrap(), Float32x4::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(Float32x4::load(&view, 1.0f64).unwrap(), Float32x4::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(
        Float32x4::load(&view, Scalar::from(1.0)).unwrap(),
        Float32x4::new(1.0, 2.0, 3.0, 4.0)
    );

    assert!(Float32x4::load(&view, -1i32).unwrap_err().is_range_error());
    assert!(Float32x4::load(&view, -1.0f64).unwrap_err().is_range_error());
    assert!(Float32x4::load(&view, 0.5f64).unwrap_err().is_type_error());
    assert!(Float32x4::load(&view, f64::NAN).unwrap_err().is_type_error());
    assert!(Float32x4::load(&view, Scalar::Undefined).unwrap_err().is_type_error());
    assert!(Float32x4::load(&view, Scalar::Bool(true)).unwrap_err().is_type_error());
}

#[test]
fn test_raw_byte_buffers() {
    let mut bytes = vec![0u8; 20];
    Int32x4::new(1, 2, 3, 4).store(&mut bytes, 4usize).unwrap();
    assert_eq!(&bytes[4..8], &1i32.to_le_bytes());
    assert_eq!(Int32x4::load(&bytes, 4usize).unwrap(), Int32x4::new(1, 2, 3, 4));
    assert!(Int32x4::load(&bytes, 5usize).is_err());
}
