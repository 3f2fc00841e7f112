//! Boolean (mask) vectors.
//!
//! Each lane is stored as a full-width integer that is either all zeros (false) or all
//! ones (true). Comparisons on numeric vectors produce the mask type of matching lane
//! width, and `select` relies on that bit pattern to blend two vectors.

impl_bool_vector! {
    /// Two boolean lanes, each a 64-bit mask. Produced by `Float64x2` comparisons.
    Bool64x2, i64, 2, 8, [x, y]
}

impl_bool_vector! {
    /// Four boolean lanes, each a 32-bit mask. Produced by `Float32x4` and `Int32x4`
    /// comparisons.
    Bool32x4, i32, 4, 4, [x, y, z, w]
}

impl_bool_vector! {
    /// Eight boolean lanes, each a 16-bit mask. Produced by `Int16x8` comparisons.
    Bool16x8, i16, 8, 2, [s0, s1, s2, s3, s4, s5, s6, s7]
}

impl_bool_vector! {
    /// Sixteen boolean lanes, each an 8-bit mask. Produced by `Int8x16` comparisons.
    Bool8x16, i8, 16, 1,
    [s0, s1, s2, s3, s4, s5, s6, s7, s8, s9, s10, s11, s12, s13, s14, s15]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::scalar::Scalar;
    use crate::simd::traits::{SimdBool, SimdCompare, SimdVec};

    #[test]
    fn test_lanes_are_full_width_masks() {
        let m = Bool32x4::new(true, false, true, false);
        assert_eq!(m.to_mask_array(), [-1, 0, -1, 0]);
        assert_eq!(
            m.to_bytes(),
            [0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0]
        );

        let wide = Bool64x2::new(false, true);
        assert_eq!(wide.to_mask_array(), [0, -1]);
    }

    #[test]
    fn test_extract_and_replace() {
        let m = Bool16x8::splat(false);
        let m2 = m.replace_lane(3, true).unwrap();
        assert!(!m.extract_lane(3).unwrap());
        assert!(m2.extract_lane(3).unwrap());
        assert_eq!(m2.sign_mask(), 0b1000);
        assert!(m.replace_lane(8, true).unwrap_err().is_range_error());
        assert!(m.extract_lane(8).unwrap_err().is_range_error());
    }

    #[test]
    fn test_any_all_true() {
        assert!(!Bool32x4::splat(false).any_true());
        assert!(!Bool32x4::splat(false).all_true());
        assert!(Bool32x4::new(false, false, true, false).any_true());
        assert!(!Bool32x4::new(true, true, true, false).all_true());
        assert!(Bool32x4::splat(true).all_true());
        assert!(Bool8x16::splat(true).all_true());
        assert_eq!(Bool8x16::splat(true).sign_mask(), 0xFFFF);
        assert!(Bool64x2::new(true, true).all_true());
    }

    #[test]
    fn test_logic() {
        let a = Bool32x4::new(true, true, false, false);
        let b = Bool32x4::new(true, false, true, false);
        assert_eq!(SimdBool::and(&a, &b), Bool32x4::new(true, false, false, false));
        assert_eq!(SimdBool::or(&a, &b), Bool32x4::new(true, true, true, false));
        assert_eq!(SimdBool::xor(&a, &b), Bool32x4::new(false, true, true, false));
        assert_eq!(SimdBool::not(&a), Bool32x4::new(false, false, true, true));
        assert_eq!(a & b, SimdBool::and(&a, &b));
        assert_eq!(a | b, SimdBool::or(&a, &b));
        assert_eq!(a ^ b, SimdBool::xor(&a, &b));
        assert_eq!(!a, SimdBool::not(&a));
    }

    #[test]
    fn test_equal_not_equal() {
        let a = Bool16x8::new(true, false, true, false, true, false, true, false);
        let b = Bool16x8::new(true, true, false, false, true, true, false, false);
        assert_eq!(a.equal(&b).sign_mask(), 0b1001_1001);
        assert_eq!(a.not_equal(&b).sign_mask(), 0b0110_0110);
    }

    #[test]
    fn test_from_scalars_coerces_truthiness() {
        let m = Bool32x4::from_scalars(&[
            Scalar::from(1.0),
            Scalar::from(0.0),
            Scalar::from(f64::NAN),
            Scalar::from(-2),
        ]);
        assert_eq!(m, Bool32x4::new(true, false, false, true));

        let short = Bool32x4::from_scalars(&[Scalar::Bool(true)]);
        assert_eq!(short, Bool32x4::new(true, false, false, false));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Bool32x4::new(true, false, true, false).to_string(),
            "Bool32x4(true, false, true, false)"
        );
    }
}
