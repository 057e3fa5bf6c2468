use std::{convert::Infallible, error};

use tracing::{debug, trace};

use crate::{LengthPolicy, OutputBuilder, OutputFormat, Sequence, TransformError, formats::AppendFormat};

/// Maps every element of `input` with `f`, producing a new [Vec] of the same length.
///
/// `U` does not need to match the element type:
/// ```
/// let halves = elementwise::transform(&[1i32, 2, 3], |&v| f64::from(v) / 2.);
/// assert_eq!(halves, [0.5, 1., 1.5]);
/// ```
pub fn transform<S, U, F>(input: &S, f: F) -> Vec<U>
where S: Sequence + ?Sized, F: FnMut(&S::Element) -> U {
    trace!(len = input.len(), "transform");
    input.elements().map(f).collect()
}

/// Maps every element of `input` with the fallible `f`.
///
/// Stops at the first element `f` fails on; no partial output is returned.
pub fn try_transform<S, U, E, F>(input: &S, f: F) -> Result<Vec<U>, TransformError<E>>
where S: Sequence + ?Sized, E: error::Error, F: FnMut(&S::Element) -> Result<U, E> {
    try_transform_into(input, AppendFormat::new(Vec::<U>::new()), f)
}

/// Maps every element of `input` with `f`, writing the values through `format`
pub fn transform_into<S, U, O, F>(input: &S, format: O, mut f: F) -> Result<<O::Builder as OutputBuilder<U>>::Output, TransformError>
where S: Sequence + ?Sized, O: OutputFormat<U>, F: FnMut(&S::Element) -> U {
    try_transform_into(input, format, |element| Ok::<_, Infallible>(f(element)))
}

/// Maps every element of `input` with the fallible `f`, writing the values through `format`.
///
/// On failure the builder's [OutputBuilder::fail] is called before the error is returned.
pub fn try_transform_into<S, U, E, O, F>(input: &S, format: O, mut f: F) -> Result<<O::Builder as OutputBuilder<U>>::Output, TransformError<E>>
where S: Sequence + ?Sized, E: error::Error, O: OutputFormat<U>, F: FnMut(&S::Element) -> Result<U, E> {
    let len = input.len();
    trace!(len, "transform into format");

    let builder = format.initialize(len)?;
    let values = input.elements()
        .enumerate()
        .map(|(index, element)| f(element).map_err(|source| TransformError::Mapping { index, source }));

    fill(builder, len, values)
}

/// Combines `a` and `b` element-wise with `f`.
///
/// `a` controls the number of elements. `b` must contain at least as many elements as `a`,
/// otherwise [TransformError::LengthMismatch] is returned; any extra elements of `b` are ignored.
pub fn zip_transform<A, B, U, F>(a: &A, b: &B, f: F) -> Result<Vec<U>, TransformError>
where A: Sequence + ?Sized, B: Sequence + ?Sized, F: FnMut(&A::Element, &B::Element) -> U {
    zip_transform_with(a, b, LengthPolicy::Strict, f)
}

/// Combines `a` and `b` element-wise with `f`, treating a short `b` according to `policy`
pub fn zip_transform_with<A, B, U, F>(a: &A, b: &B, policy: LengthPolicy, mut f: F) -> Result<Vec<U>, TransformError>
where A: Sequence + ?Sized, B: Sequence + ?Sized, F: FnMut(&A::Element, &B::Element) -> U {
    let len = policy.resolve::<Infallible>(a.len(), b.len())?;
    trace!(len, ?policy, "zip transform");

    Ok(a.elements().zip(b.elements()).take(len).map(|(x, y)| f(x, y)).collect())
}

/// Combines `a` and `b` element-wise with the fallible `f`.
///
/// Length handling matches [zip_transform].
pub fn try_zip_transform<A, B, U, E, F>(a: &A, b: &B, f: F) -> Result<Vec<U>, TransformError<E>>
where A: Sequence + ?Sized, B: Sequence + ?Sized, E: error::Error, F: FnMut(&A::Element, &B::Element) -> Result<U, E> {
    try_zip_transform_into(a, b, LengthPolicy::Strict, AppendFormat::new(Vec::<U>::new()), f)
}

/// Combines `a` and `b` element-wise with `f`, writing the values through `format`
pub fn zip_transform_into<A, B, U, O, F>(a: &A, b: &B, policy: LengthPolicy, format: O, mut f: F) -> Result<<O::Builder as OutputBuilder<U>>::Output, TransformError>
where A: Sequence + ?Sized, B: Sequence + ?Sized, O: OutputFormat<U>, F: FnMut(&A::Element, &B::Element) -> U {
    try_zip_transform_into(a, b, policy, format, |x, y| Ok::<_, Infallible>(f(x, y)))
}

/// Combines `a` and `b` element-wise with the fallible `f`, writing the values through `format`.
///
/// The length check happens before the format is initialized, so a mismatch never touches the destination.
pub fn try_zip_transform_into<A, B, U, E, O, F>(a: &A, b: &B, policy: LengthPolicy, format: O, mut f: F) -> Result<<O::Builder as OutputBuilder<U>>::Output, TransformError<E>>
where A: Sequence + ?Sized, B: Sequence + ?Sized, E: error::Error, O: OutputFormat<U>, F: FnMut(&A::Element, &B::Element) -> Result<U, E> {
    let len = policy.resolve::<E>(a.len(), b.len())?;
    trace!(len, ?policy, "zip transform into format");

    let builder = format.initialize(len)?;
    let values = a.elements()
        .zip(b.elements())
        .take(len)
        .enumerate()
        .map(|(index, (x, y))| f(x, y).map_err(|source| TransformError::Mapping { index, source }));

    fill(builder, len, values)
}

fn fill<U, E, B, I>(mut builder: B, len: usize, values: I) -> Result<B::Output, TransformError<E>>
where E: error::Error, B: OutputBuilder<U>, I: Iterator<Item = Result<U, TransformError<E>>> {
    for value in values {
        if let Err(error) = value.and_then(|value| builder.push(value).map_err(TransformError::from)) {
            debug!(index = ?error.index(), %error, "transform failed");
            builder.fail(&error);
            return Err(error);
        }
    }

    if builder.written() != len {
        let error = TransformError::internal(format!("Output builder accepted {} of {} values", builder.written(), len));
        builder.fail(&error);
        return Err(error);
    }

    Ok(builder.build())
}

/// `Transform` provides the transform functions as methods on every [Sequence].
///
/// This trait is sealed and is not intended to be manually implemented.
pub trait Transform: Sequence + private::Sealed {
    /// See [transform()]
    fn transform<U, F: FnMut(&Self::Element) -> U>(&self, f: F) -> Vec<U>;

    /// See [try_transform()]
    fn try_transform<U, E: error::Error, F: FnMut(&Self::Element) -> Result<U, E>>(&self, f: F) -> Result<Vec<U>, TransformError<E>>;

    /// See [transform_into()]
    fn transform_into<U, O: OutputFormat<U>, F: FnMut(&Self::Element) -> U>(&self, format: O, f: F) -> Result<<O::Builder as OutputBuilder<U>>::Output, TransformError>;

    /// See [zip_transform()]
    fn zip_transform<B: Sequence + ?Sized, U, F: FnMut(&Self::Element, &B::Element) -> U>(&self, other: &B, f: F) -> Result<Vec<U>, TransformError>;

    /// See [try_zip_transform()]
    fn try_zip_transform<B: Sequence + ?Sized, U, E: error::Error, F: FnMut(&Self::Element, &B::Element) -> Result<U, E>>(&self, other: &B, f: F) -> Result<Vec<U>, TransformError<E>>;
}

impl<S: Sequence + ?Sized> Transform for S {
    #[inline]
    fn transform<U, F: FnMut(&Self::Element) -> U>(&self, f: F) -> Vec<U> {
        transform(self, f)
    }

    #[inline]
    fn try_transform<U, E: error::Error, F: FnMut(&Self::Element) -> Result<U, E>>(&self, f: F) -> Result<Vec<U>, TransformError<E>> {
        try_transform(self, f)
    }

    #[inline]
    fn transform_into<U, O: OutputFormat<U>, F: FnMut(&Self::Element) -> U>(&self, format: O, f: F) -> Result<<O::Builder as OutputBuilder<U>>::Output, TransformError> {
        transform_into(self, format, f)
    }

    #[inline]
    fn zip_transform<B: Sequence + ?Sized, U, F: FnMut(&Self::Element, &B::Element) -> U>(&self, other: &B, f: F) -> Result<Vec<U>, TransformError> {
        zip_transform(self, other, f)
    }

    #[inline]
    fn try_zip_transform<B: Sequence + ?Sized, U, E: error::Error, F: FnMut(&Self::Element, &B::Element) -> Result<U, E>>(&self, other: &B, f: F) -> Result<Vec<U>, TransformError<E>> {
        try_zip_transform(self, other, f)
    }
}

mod private {
    use crate::Sequence;

    pub trait Sealed { }

    impl<S: Sequence + ?Sized> Sealed for S { }
}
