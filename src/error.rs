//! Error types for lanes128 operations.
//!
//! Every fallible vector operation reports its failure as a [`LaneError`] value at the
//! point of the offending call. Nothing is clamped or defaulted: an out-of-range lane
//! index or an out-of-bounds buffer access is always an error, and no state is left
//! modified when one is returned.

use thiserror::Error;

/// Errors that can occur during lanes128 operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaneError {
    /// A value of the wrong kind was supplied where a specific vector type or an
    /// integral element index was required.
    #[error("TypeError: {message}")]
    TypeError {
        /// Human-readable error message.
        message: String,
    },
    /// A lane index, shuffle index, memory range or converted lane value fell outside
    /// the range the operation accepts.
    #[error("RangeError: {message}")]
    RangeError {
        /// Human-readable error message.
        message: String,
    },
    /// Two slices handed to a slice kernel have different lengths.
    #[error("length mismatch: left operand has {left} elements, right operand has {right}")]
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },
}

impl LaneError {
    /// Returns `true` for [`LaneError::TypeError`].
    pub fn is_type_error(&self) -> bool {
        matches!(self, LaneError::TypeError { .. })
    }

    /// Returns `true` for [`LaneError::RangeError`].
    pub fn is_range_error(&self) -> bool {
        matches!(self, LaneError::RangeError { .. })
    }
}

/// Result type alias for lanes128 operations.
pub type Result<T> = std::result::Result<T, LaneError>;

/// Creates a type error.
pub fn type_error(message: impl Into<String>) -> LaneError {
    LaneError::TypeError {
        message: message.into(),
    }
}

/// Creates a range error.
pub fn range_error(message: impl Into<String>) -> LaneError {
    LaneError::RangeError {
        message: message.into(),
    }
}

/// Creates a length mismatch error.
pub fn length_mismatch(left: usize, right: usize) -> LaneError {
    LaneError::LengthMismatch { left, right }
}

/// Fails with a range error unless `index < lanes`.
#[inline(always)]
pub(crate) fn check_lane_index(index: usize, lanes: usize) -> Result<()> {
    if index < lanes {
        Ok(())
    } else {
        Err(range_error(format!(
            "lane index {index} out of range for {lanes} lanes"
        )))
    }
}
