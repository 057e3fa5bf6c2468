//! Transforms whose destination is one of their inputs.
//!
//! Every function here writes `output[i]` using only `input[i]`, so overwriting an
//! element never destroys a value another index still needs. The one exception
//! would be a destination which overlaps its source at a different starting position;
//! [transform_within] rejects that case with [TransformError::InvalidAliasing].

use std::{convert::Infallible, error, ops::Range};

use tracing::{debug, trace};

use crate::{LengthPolicy, Sequence, TransformError};

/// Replaces every element of `sequence` with `f` applied to it.
///
/// `f` returns a new value; when the mapping only needs to modify the element,
/// [mutate_in_place] avoids constructing one.
pub fn transform_in_place<T, F>(sequence: &mut [T], mut f: F)
where F: FnMut(&T) -> T {
    trace!(len = sequence.len(), "transform in place");
    for element in sequence.iter_mut() {
        *element = f(&*element);
    }
}

/// Replaces every element of `sequence` with the fallible `f` applied to it.
///
/// On failure, elements before the failing index hold their new values and the
/// failing element and every later element are untouched.
pub fn try_transform_in_place<T, E, F>(sequence: &mut [T], mut f: F) -> Result<(), TransformError<E>>
where E: error::Error, F: FnMut(&T) -> Result<T, E> {
    trace!(len = sequence.len(), "try transform in place");
    for (index, element) in sequence.iter_mut().enumerate() {
        match f(&*element) {
            Ok(value) => *element = value,
            Err(source) => {
                debug!(index, "in-place mapping failed");
                return Err(TransformError::Mapping { index, source });
            }
        }
    }
    Ok(())
}

/// Combines `a` and `b` element-wise with `f`, storing the results in `a`.
///
/// `b` must contain at least as many elements as `a`.
pub fn zip_transform_in_place<T, B, F>(a: &mut [T], b: &B, f: F) -> Result<(), TransformError>
where B: Sequence + ?Sized, F: FnMut(&T, &B::Element) -> T {
    zip_transform_in_place_with(a, b, LengthPolicy::Strict, f)
}

/// Combines `a` and `b` element-wise with `f`, storing the results in `a`.
///
/// With [LengthPolicy::Truncate], elements of `a` past the end of `b` are left untouched.
pub fn zip_transform_in_place_with<T, B, F>(a: &mut [T], b: &B, policy: LengthPolicy, mut f: F) -> Result<(), TransformError>
where B: Sequence + ?Sized, F: FnMut(&T, &B::Element) -> T {
    let len = policy.resolve::<Infallible>(a.len(), b.len())?;
    trace!(len, ?policy, "zip transform in place");

    for (x, y) in a[..len].iter_mut().zip(b.elements()) {
        *x = f(&*x, y);
    }
    Ok(())
}

/// Maps the elements of `buffer[source]` into `buffer[destination..destination + source.len()]`.
///
/// The destination may start at `source.start` (an ordinary in-place transform) or
/// lie entirely outside the source range. Any other overlap fails with
/// [TransformError::InvalidAliasing] and leaves the buffer untouched.
pub fn transform_within<T, F>(buffer: &mut [T], source: Range<usize>, destination: usize, mut f: F) -> Result<(), TransformError>
where F: FnMut(&T) -> T {
    let buffer_len = buffer.len();
    if source.start > source.end || source.end > buffer_len {
        return Err(TransformError::OutOfBounds { range: source, len: buffer_len });
    }

    let len = source.end - source.start;
    let target = match destination.checked_add(len) {
        Some(end) if end <= buffer_len => destination..end,
        _ => return Err(TransformError::OutOfBounds { range: destination..destination.saturating_add(len), len: buffer_len }),
    };
    trace!(?source, ?target, "transform within");

    if target.start == source.start {
        transform_in_place(&mut buffer[source], f);
        return Ok(());
    }

    if len > 0 && target.start < source.end && source.start < target.end {
        debug!(?source, ?target, "destination overlaps source at an offset");
        return Err(TransformError::InvalidAliasing { source, destination: target });
    }

    let (inputs, outputs) = if target.start < source.start {
        let (head, tail) = buffer.split_at_mut(source.start);
        (&tail[..len], &mut head[target])
    } else {
        let (head, tail) = buffer.split_at_mut(target.start);
        (&head[source], &mut tail[..len])
    };

    for (input, output) in inputs.iter().zip(outputs.iter_mut()) {
        *output = f(input);
    }
    Ok(())
}

/// Calls `f` on a mutable reference to every element of `sequence`.
///
/// Prefer this over [transform_in_place] when elements are expensive to copy
/// and the mapping only modifies them, since no replacement values are built.
pub fn mutate_in_place<T, F>(sequence: &mut [T], f: F)
where F: FnMut(&mut T) {
    trace!(len = sequence.len(), "mutate in place");
    sequence.iter_mut().for_each(f);
}

/// Calls the fallible `f` on a mutable reference to every element of `sequence`, stopping at the first failure.
///
/// The failing element keeps whatever modifications `f` made before returning its error.
pub fn try_mutate_in_place<T, E, F>(sequence: &mut [T], mut f: F) -> Result<(), TransformError<E>>
where E: error::Error, F: FnMut(&mut T) -> Result<(), E> {
    trace!(len = sequence.len(), "try mutate in place");
    for (index, element) in sequence.iter_mut().enumerate() {
        if let Err(source) = f(element) {
            debug!(index, "in-place mutation failed");
            return Err(TransformError::Mapping { index, source });
        }
    }
    Ok(())
}
