use std::error;

use crate::{OutputBuilder, OutputError, OutputFormat, TransformError};

/// An [OutputFormat] which overwrites an existing slice starting at its first element.
///
/// The slice must be at least as long as the transform output; shorter slices
/// are rejected before any mapping runs. Elements past the output length are left untouched.
/// If the transform fails, elements already overwritten keep their new values.
#[derive(Debug)]
pub struct OverwriteFormat<'d, U> {
    destination: &'d mut [U],
}

impl<'d, U> OverwriteFormat<'d, U> {
    /// Create an overwrite format which writes into `destination`
    pub fn new(destination: &'d mut [U]) -> Self {
        Self { destination }
    }
}

impl<'d, U> OutputFormat<U> for OverwriteFormat<'d, U> {
    type Builder = OverwriteBuilder<'d, U>;

    fn initialize(self, len: usize) -> Result<Self::Builder, OutputError> {
        if self.destination.len() < len {
            return Err(OutputError::DestinationTooShort { required: len, available: self.destination.len() });
        }

        Ok(OverwriteBuilder {
            destination: self.destination,
            written: 0,
        })
    }
}

pub struct OverwriteBuilder<'d, U> {
    destination: &'d mut [U],
    written: usize,
}

impl<'d, U> OutputBuilder<U> for OverwriteBuilder<'d, U> {
    type Output = &'d mut [U];

    fn push(&mut self, value: U) -> Result<(), OutputError> {
        let available = self.destination.len();
        match self.destination.get_mut(self.written) {
            Some(slot) => {
                *slot = value;
                self.written += 1;
                Ok(())
            }
            None => Err(OutputError::DestinationTooShort { required: self.written + 1, available }),
        }
    }

    fn written(&self) -> usize {
        self.written
    }

    fn build(self) -> Self::Output {
        let Self { destination, written } = self;
        &mut destination[..written]
    }

    fn fail<E: error::Error>(self, _error: &TransformError<E>) { }
}
