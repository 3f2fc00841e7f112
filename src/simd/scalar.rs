//! Dynamic scalar values and the numeric coercions used to build vectors from them.
//!
//! Vectors are normally built from native lane values (`Int32x4::new(1, 2, 3, 4)`), but
//! callers that hold loosely typed input (a value decoded from a script, a config file, a
//! wire message) go through [`Scalar`]. Each vector type coerces a `Scalar` into its lane
//! type with exactly one of the functions below:
//!
//! | Lane type | Coercion                   |
//! |-----------|----------------------------|
//! | `f64`     | [`Scalar::to_number`]      |
//! | `f32`     | [`Scalar::to_float32`]     |
//! | `i32`     | [`Scalar::to_int32`]       |
//! | `i16`     | [`Scalar::to_int16`]       |
//! | `i8`      | [`Scalar::to_int8`]        |
//! | `bool`    | [`Scalar::to_boolean`]     |
//!
//! The integer coercions truncate toward zero and then wrap modulo 2^width, so
//! `Scalar::from(4294967297.0).to_int32() == 1`. Non-finite numbers coerce to `0`.

use std::fmt;

/// A loosely typed scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Scalar {
    /// An absent value. Coerces to `NaN` as a number and `false` as a boolean.
    #[default]
    Undefined,
    /// A boolean value. Coerces to `1` or `0` as a number.
    Bool(bool),
    /// A double-precision number.
    Number(f64),
}

impl Scalar {
    /// Converts to a double-precision number.
    pub fn to_number(&self) -> f64 {
        match *self {
            Scalar::Undefined => f64::NAN,
            Scalar::Bool(b) => {
                if b {
                    1.0
                } else {
                    0.0
                }
            }
            Scalar::Number(n) => n,
        }
    }

    /// Converts to a single-precision number, rounding to nearest (ties to even).
    pub fn to_float32(&self) -> f32 {
        self.to_number() as f32
    }

    /// Converts to a 32-bit integer, truncating and wrapping modulo 2^32.
    pub fn to_int32(&self) -> i32 {
        wrap_to_width(self.to_number(), 32) as i32
    }

    /// Converts to a 16-bit integer, truncating and wrapping modulo 2^16.
    pub fn to_int16(&self) -> i16 {
        wrap_to_width(self.to_number(), 16) as i16
    }

    /// Converts to an 8-bit integer, truncating and wrapping modulo 2^8.
    pub fn to_int8(&self) -> i8 {
        wrap_to_width(self.to_number(), 8) as i8
    }

    /// Converts to a boolean. `0`, `-0`, `NaN` and `Undefined` are false.
    pub fn to_boolean(&self) -> bool {
        match *self {
            Scalar::Undefined => false,
            Scalar::Bool(b) => b,
            Scalar::Number(n) => !(n == 0.0 || n.is_nan()),
        }
    }

    /// Short name of the scalar kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Undefined => "undefined",
            Scalar::Bool(_) => "boolean",
            Scalar::Number(_) => "number",
        }
    }
}

/// Truncates `n` toward zero and wraps it into the signed range of a `bits`-wide integer.
fn wrap_to_width(n: f64, bits: i32) -> i64 {
    if !n.is_finite() {
        return 0;
    }

    let modulus = 2f64.powi(bits);
    // `%` on f64 is exact.
    let mut wrapped = n.trunc() % modulus;
    if wrapped < 0.0 {
        wrapped += modulus;
    }
    if wrapped >= modulus / 2.0 {
        wrapped -= modulus;
    }

    wrapped as i64
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Undefined => f.write_str("undefined"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Number(n) => f.write_str(&format_number(*n)),
        }
    }
}

/// Renders a number the way diagnostic output expects it: integral values without a
/// fraction, `NaN`, `Infinity`, `-Infinity`, and `-0` as `0`.
///
/// Magnitudes of at least 1e21 or below 1e-6 use exponent form with a signed exponent
/// (`1e+21`, `1.5e-7`).
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let exponential = format!("{n:e}");
        match exponential.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => exponential,
        }
    } else {
        format!("{n}")
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

macro_rules! scalar_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                fn from(value: $t) -> Self {
                    Scalar::Number(f64::from(value))
                }
            }
        )*
    };
}

scalar_from_number!(f32, i32, i16, i8, u32, u16, u8);

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Scalar::Undefined, Into::into)
    }
}
