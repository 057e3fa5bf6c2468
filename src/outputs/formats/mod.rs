//! Predefined implementations of [OutputFormat](crate::OutputFormat) and [OutputBuilder](crate::OutputBuilder)

mod append;
pub use append::{AppendBuilder, AppendFormat};
mod overwrite;
pub use overwrite::{OverwriteBuilder, OverwriteFormat};
