use std::error;

use tracing::debug;

use crate::TransformError;

/// Decides how a binary transform treats a second sequence which is shorter than the first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthPolicy {
    /// Fail with [TransformError::LengthMismatch]
    Strict,
    /// Stop after the last element of the shorter sequence
    Truncate,
}

impl Default for LengthPolicy {
    fn default() -> Self {
        LengthPolicy::Strict
    }
}

impl LengthPolicy {
    /// The number of elements a binary transform over sequences of length `first` and `second` produces.
    ///
    /// The first sequence always controls the count; a longer second sequence is never an error.
    pub fn resolve<E: error::Error>(self, first: usize, second: usize) -> Result<usize, TransformError<E>> {
        if second >= first {
            return Ok(first);
        }

        match self {
            LengthPolicy::Strict => {
                debug!(required = first, available = second, "second sequence is shorter than the first");
                Err(TransformError::LengthMismatch { required: first, available: second })
            }
            LengthPolicy::Truncate => Ok(second),
        }
    }
}
