use num_traits::{NumCast, ToPrimitive};
use tracing::{debug, trace};

use crate::{Sequence, TransformError};

/// Converts every element of `input` to `U`.
///
/// Fails with [TransformError::Unrepresentable] at the first element `U` cannot hold
/// (e.g. a negative value cast to an unsigned type, or `NaN` cast to an integer).
///
/// ```
/// let wide: Vec<f64> = elementwise::cast(&[1i32, 2, 3]).unwrap();
/// assert_eq!(wide, [1., 2., 3.]);
/// assert!(elementwise::cast::<_, u8>(&[1i32, -1]).is_err());
/// ```
pub fn cast<S, U>(input: &S) -> Result<Vec<U>, TransformError>
where S: Sequence + ?Sized, S::Element: ToPrimitive + Copy, U: NumCast {
    trace!(len = input.len(), target = std::any::type_name::<U>(), "cast");

    input.elements()
        .enumerate()
        .map(|(index, element)| match <U as NumCast>::from(*element) {
            Some(value) => Ok(value),
            None => {
                debug!(index, "element is not representable in the target type");
                Err(TransformError::Unrepresentable { index })
            }
        })
        .collect()
}
