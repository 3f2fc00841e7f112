//! Error Handling Demonstration
//!
//! Shows how lanes128 reports lane, memory, conversion and type errors as values.

use lanes128::simd::{
    ArrayBufferView, ElementType, Float32x4, Int32x4, Scalar, SimdAdd, SimdLoad, SimdShuffle,
    SimdStore, SimdValue, SimdVec,
};
use lanes128::LaneError;

fn main() {
    println!("lanes128 error handling demonstration\n");

    // Example 1: lane access
    println!("Example 1: lane index out of range");
    let v = Float32x4::new(1.0, 2.0, 3.0, 4.0);
    match v.extract_lane(5) {
        Ok(lane) => println!("   Unexpected lane: {lane}"),
        Err(e) => println!("   Error caught: {e}"),
    }
    println!();

    // Example 2: shuffle masks
    println!("Example 2: invalid shuffle masks");
    let a = Int32x4::new(1, 2, 3, 4);
    let b = Int32x4::new(5, 6, 7, 8);
    for mask in [&[3usize, 2, 5, 4][..], &[0, 1, 2], &[0, 1, 2, 8]] {
        match a.shuffle(&b, mask) {
            Ok(result) => println!("   {mask:?} -> {result}"),
            Err(e) => println!("   {mask:?} -> {e}"),
        }
    }
    println!();

    // Example 3: bounds-checked stores
    println!("Example 3: stores past the end of a view");
    match ArrayBufferView::new(ElementType::Float64, usize::MAX / 4) {
        Ok(_) => println!("   Unexpected view"),
        Err(e) => println!("   oversized view: {e}"),
    }
    let Ok(mut view) = ArrayBufferView::new(ElementType::Int32, 5) else {
        return;
    };
    for index in [0usize, 1, 2] {
        match a.store(&mut view, index) {
            Ok(()) => println!("   store at element {index}: ok"),
            Err(e) => println!("   store at element {index}: {e}"),
        }
    }
    match Int32x4::load(&view, Scalar::from(0.5)) {
        Ok(loaded) => println!("   Unexpected load: {loaded}"),
        Err(e) => println!("   fractional element index: {e}"),
    }
    println!();

    // Example 4: float to int conversion
    println!("Example 4: float to int conversion");
    for input in [Float32x4::new(1.9, -1.9, 0.0, 7.5), Float32x4::new(f32::NAN, 0.0, 0.0, 3e9)] {
        match Int32x4::from_float32x4(input) {
            Ok(result) => println!("   {input} -> {result}"),
            Err(e) => println!("   {input} -> {e}"),
        }
    }
    println!();

    // Example 5: dynamic type checks
    println!("Example 5: checking a dynamically typed value");
    let value = SimdValue::from(v);
    match Int32x4::check(&value) {
        Ok(result) => println!("   Unexpected success: {result}"),
        Err(LaneError::TypeError { message }) => println!("   Type error: {message}"),
        Err(e) => println!("   Other error: {e}"),
    }
    println!();

    // Example 6: propagation with `?`
    println!("Example 6: chaining slice kernels with error propagation");

    fn sum_three(a: &[f32], b: &[f32], c: &[f32]) -> Result<Vec<f32>, LaneError> {
        let intermediate = a.simd_add(b)?;
        intermediate.as_slice().simd_add(c)
    }

    let a = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let b = vec![10.0, 20.0, 30.0, 40.0, 50.0];
    let c = vec![100.0, 200.0, 300.0, 400.0, 500.0];

    match sum_three(&a, &b, &c) {
        Ok(result) => println!("   Result: {result:?}"),
        Err(e) => println!("   Failed: {e}"),
    }
    match sum_three(&a, &b, &c[..2]) {
        Ok(result) => println!("   Unexpected success: {result:?}"),
        Err(e) => println!("   Failed as expected: {e}"),
    }
}
