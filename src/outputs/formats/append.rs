use std::error;

use tracing::trace;

use crate::{List, OutputBuilder, OutputError, OutputFormat, TransformError};

/// An [OutputFormat] which appends transformed values to the end of a [List],
/// leaving any values already in the list untouched.
///
/// If the transform fails, the list is truncated back to its original length.
#[derive(Debug)]
pub struct AppendFormat<L> {
    list: L,
}

impl<L> AppendFormat<L> {
    /// Create an append format which stores its output in the given [List]
    pub fn new(list: L) -> Self {
        Self { list }
    }
}

impl<U, L: List<U>> OutputFormat<U> for AppendFormat<L> {
    type Builder = AppendBuilder<L>;

    fn initialize(self, len: usize) -> Result<Self::Builder, OutputError> {
        Ok(AppendBuilder::new::<U>(self.list, len))
    }
}

pub struct AppendBuilder<L> {
    list: L,
    initial_len: usize,
    written: usize,
}

impl<L> AppendBuilder<L> {
    fn new<U>(mut list: L, len: usize) -> Self
    where L: List<U> {
        list.reserve(len);
        let initial_len = list.len();
        Self {
            list,
            initial_len,
            written: 0,
        }
    }
}

impl<U, L: List<U>> OutputBuilder<U> for AppendBuilder<L> {
    type Output = L;

    fn push(&mut self, value: U) -> Result<(), OutputError> {
        self.list.push(value);
        self.written += 1;
        Ok(())
    }

    fn written(&self) -> usize {
        self.written
    }

    fn build(self) -> Self::Output {
        self.list
    }

    fn fail<E: error::Error>(mut self, _error: &TransformError<E>) {
        trace!(discarded = self.written, "rolling back appended values");
        self.list.truncate(self.initial_len);
    }
}
