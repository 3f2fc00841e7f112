//! Named bit-reinterpretation constructors.
//!
//! `Int32x4::from_float32x4_bits(v)` is shorthand for `Int32x4::from_bits(&v)`: the 16 bytes
//! are kept as-is and decoded as the target lane type.

use crate::simd::traits::SimdBits;
use crate::simd::{Float32x4, Float64x2, Int16x8, Int32x4, Int8x16};

macro_rules! impl_named_bitcasts {
    ($to:ident { $($method:ident => $from:ident),+ $(,)? }) => {
        impl $to {
            $(
                #[doc = concat!("Reinterprets the bits of a `", stringify!($from), "` as `", stringify!($to), "`.")]
                #[inline(always)]
                pub fn $method(v: $from) -> Self {
                    <Self as SimdBits>::from_bits(&v)
                }
            )+
        }
    };
}

impl_named_bitcasts!(Float32x4 {
    from_float64x2_bits => Float64x2,
    from_int32x4_bits => Int32x4,
    from_int16x8_bits => Int16x8,
    from_int8x16_bits => Int8x16,
});

impl_named_bitcasts!(Float64x2 {
    from_float32x4_bits => Float32x4,
    from_int32x4_bits => Int32x4,
    from_int16x8_bits => Int16x8,
    from_int8x16_bits => Int8x16,
});

impl_named_bitcasts!(Int32x4 {
    from_float32x4_bits => Float32x4,
    from_float64x2_bits => Float64x2,
    from_int16x8_bits => Int16x8,
    from_int8x16_bits => Int8x16,
});

impl_named_bitcasts!(Int16x8 {
    from_float32x4_bits => Float32x4,
    from_float64x2_bits => Float64x2,
    from_int32x4_bits => Int32x4,
    from_int8x16_bits => Int8x16,
});

impl_named_bitcasts!(Int8x16 {
    from_float32x4_bits => Float32x4,
    from_float64x2_bits => Float64x2,
    from_int32x4_bits => Int32x4,
    from_int16x8_bits => Int16x8,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::traits::SimdVec;
    use crate::simd::Bool32x4;

    #[test]
    fn test_int_bits_to_float() {
        let ints = Int32x4::new(0x3F80_0000, 0x4000_0000, 0x4040_0000, 0x4080_0000);
        assert_eq!(Float32x4::from_int32x4_bits(ints), Float32x4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(ints.bitcast::<Float32x4>(), Float32x4::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_float_bits_to_int() {
        let v = Float32x4::new(1.0, -0.0, f32::INFINITY, 0.0);
        assert_eq!(
            Int32x4::from_float32x4_bits(v),
            Int32x4::new(0x3F80_0000, i32::MIN, 0x7F80_0000, 0)
        );
        assert_eq!(
            Float64x2::from_int32x4_bits(Int32x4::new(0, 0x3FF0_0000, 0, 0)),
            Float64x2::new(1.0, 0.0)
        );
    }

    #[test]
    fn test_narrow_lanes_are_little_endian() {
        let v = Int32x4::new(0x0403_0201, 0, 0, -1);
        let bytes = Int8x16::from_int32x4_bits(v).to_array();
        assert_eq!(&bytes[..4], &[1, 2, 3, 4]);
        assert_eq!(&bytes[12..], &[-1, -1, -1, -1]);

        let halves = Int16x8::from_int32x4_bits(v).to_array();
        assert_eq!(&halves[..2], &[0x0201, 0x0403]);
    }

    #[test]
    fn test_round_trip_preserves_nan_payload() {
        let payload = Int32x4::new(0x7FC0_0001, -1, 0x7F80_0001, 5);
        let through_float = Int32x4::from_float32x4_bits(Float32x4::from_int32x4_bits(payload));
        assert_eq!(through_float, payload);

        let through_all = Int32x4::from_int8x16_bits(Int8x16::from_int16x8_bits(
            Int16x8::from_float64x2_bits(Float64x2::from_int32x4_bits(payload)),
        ));
        assert_eq!(through_all, payload);
    }

    #[test]
    fn test_bool_source() {
        let mask = Bool32x4::new(true, false, true, false);
        assert_eq!(mask.bitcast::<Int32x4>(), Int32x4::new(-1, 0, -1, 0));
        assert!(mask.bitcast::<Float32x4>().to_array()[0].is_nan());
    }
}
