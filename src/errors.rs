use std::{convert::Infallible, error, fmt, ops::Range};

use backtrace::Backtrace;

/// Describes an error raised by an [OutputFormat](crate::OutputFormat) or [OutputBuilder](crate::OutputBuilder)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OutputError {
    /// The destination cannot hold every transformed element
    DestinationTooShort {
        /// The number of elements the transform produces
        required: usize,
        /// The number of elements the destination can hold
        available: usize,
    },
}

impl error::Error for OutputError { }

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DestinationTooShort { required, available } => write!(f, "Destination holds {} elements but {} are required", available, required),
        }
    }
}

#[derive(Debug)]
pub struct InternalError {
    pub msg: String,
    pub backtrace: Backtrace,
}

impl InternalError {
    #[cold]
    #[inline(always)]
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            backtrace: Backtrace::new_unresolved(),
        }
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{:?}", self.msg, self.backtrace)
    }
}

impl error::Error for InternalError { }

/// Describes an error which occurred during an element-wise transform.
///
/// `E` is the error type of the mapping function. Transforms with infallible
/// mappings use [Infallible].
#[derive(Debug)]
#[non_exhaustive]
pub enum TransformError<E: error::Error = Infallible> {
    /// The mapping function failed on the element at `index`. No later element was mapped.
    Mapping {
        index: usize,
        source: E,
    },
    /// The second sequence of a binary transform is shorter than the first
    LengthMismatch {
        required: usize,
        available: usize,
    },
    /// The destination overlaps the source range at a different starting position
    InvalidAliasing {
        source: Range<usize>,
        destination: Range<usize>,
    },
    /// A range does not fit inside a buffer of length `len`
    OutOfBounds {
        range: Range<usize>,
        len: usize,
    },
    /// An in-place ASCII mapping produced a byte which is not ASCII
    NonAsciiOutput {
        index: usize,
        byte: u8,
    },
    /// A numeric cast could not represent the element at `index` in the target type
    Unrepresentable {
        index: usize,
    },
    /// The destination rejected an element
    Output(OutputError),
    /// A postcondition of the transform was violated, most likely by a custom [OutputBuilder](crate::OutputBuilder)
    InternalError(InternalError),
}

impl<E: error::Error> TransformError<E> {
    #[inline(always)]
    pub(crate) fn internal(msg: impl Into<String>) -> Self {
        TransformError::InternalError(InternalError::new(msg))
    }

    /// The index of the element which caused the error, if the error belongs to a single element
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Mapping { index, .. } | Self::NonAsciiOutput { index, .. } | Self::Unrepresentable { index } => Some(*index),
            _ => None,
        }
    }
}

impl TransformError<Infallible> {
    /// Converts an error from an infallible mapping into the error type of a fallible one
    pub fn widen<E: error::Error>(self) -> TransformError<E> {
        match self {
            Self::Mapping { source, .. } => match source { },
            Self::LengthMismatch { required, available } => TransformError::LengthMismatch { required, available },
            Self::InvalidAliasing { source, destination } => TransformError::InvalidAliasing { source, destination },
            Self::OutOfBounds { range, len } => TransformError::OutOfBounds { range, len },
            Self::NonAsciiOutput { index, byte } => TransformError::NonAsciiOutput { index, byte },
            Self::Unrepresentable { index } => TransformError::Unrepresentable { index },
            Self::Output(error) => TransformError::Output(error),
            Self::InternalError(error) => TransformError::InternalError(error),
        }
    }
}

impl<E: error::Error> From<OutputError> for TransformError<E> {
    fn from(e: OutputError) -> Self {
        Self::Output(e)
    }
}

impl<E: error::Error> fmt::Display for TransformError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mapping { index, source } => write!(f, "Mapping failed at index {}: {}", index, source),
            Self::LengthMismatch { required, available } => write!(f, "Second sequence contains {} elements but {} are required", available, required),
            Self::InvalidAliasing { source, destination } => write!(f, "Destination {:?} overlaps source {:?} at a different offset", destination, source),
            Self::OutOfBounds { range, len } => write!(f, "Range {:?} is out of bounds for length {}", range, len),
            Self::NonAsciiOutput { index, byte } => write!(f, "Mapping produced non-ASCII byte {:#04x} at index {}", byte, index),
            Self::Unrepresentable { index } => write!(f, "Element at index {} is not representable in the target type", index),
            Self::Output(error) => fmt::Display::fmt(error, f),
            Self::InternalError(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl<E: error::Error + 'static> error::Error for TransformError<E> {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Mapping { source, .. } => Some(source),
            Self::Output(error) => Some(error),
            Self::InternalError(error) => Some(error),
            _ => None,
        }
    }
}
