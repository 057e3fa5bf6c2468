use std::error;

use crate::{OutputError, TransformError};

/// Describes where the values of a transform are written
pub trait OutputFormat<U> {
    /// The type responsible for receiving the transformed values.
    ///
    /// This type can be `Self`, if you choose to implement both [OutputFormat] and [OutputBuilder] on the same type.
    type Builder: OutputBuilder<U> + Sized;

    /// Constructs an [OutputFormat::Builder] for a transform which will produce exactly `len` values.
    ///
    /// Formats which cannot hold `len` values should fail here, before any mapping runs.
    fn initialize(self, len: usize) -> Result<Self::Builder, OutputError>;
}

/// Receives the values of a transform, in index order
pub trait OutputBuilder<U> {
    /// The transform output type
    type Output;

    /// Adds the value for the next index
    fn push(&mut self, value: U) -> Result<(), OutputError>;

    /// The number of values pushed so far
    fn written(&self) -> usize;

    /// Called when the transform has completed to get the resulting output
    fn build(self) -> Self::Output;

    /// Called when the transform encounters an error.
    ///
    /// Any required cleanup (e.g. removing the values already appended to an existing [Vec]) should be done here
    fn fail<E: error::Error>(self, error: &TransformError<E>);
}
