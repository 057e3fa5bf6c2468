mod inputs;
mod outputs;
mod length_policy;
mod transform;
mod in_place;
mod text;
mod numeric;
mod errors;

#[cfg(feature = "parallel")]
pub mod parallel;

#[cfg(any(test, feature = "benchmarking"))]
pub mod tests;

pub use errors::{InternalError, OutputError, TransformError};
pub use length_policy::LengthPolicy;

pub use inputs::*;
pub use outputs::*;

pub use transform::{Transform, transform, transform_into, try_transform, try_transform_into, try_zip_transform, try_zip_transform_into, zip_transform, zip_transform_into, zip_transform_with};
pub use in_place::{mutate_in_place, transform_in_place, transform_within, try_mutate_in_place, try_transform_in_place, zip_transform_in_place, zip_transform_in_place_with};
pub use text::{transform_ascii_in_place, transform_chars};
pub use numeric::cast;
