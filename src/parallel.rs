//! Data-parallel versions of the transforms, backed by `rayon`.
//!
//! Every output index depends only on the input elements at the same index, so
//! elements can be mapped in any order on any thread. Results are always returned
//! in input order and match the sequential functions exactly.

use std::{convert::Infallible, error};

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::{LengthPolicy, Sequence, TransformError};

/// Parallel [transform](crate::transform())
pub fn par_transform<S, U, F>(input: &S, f: F) -> Vec<U>
where S: Sequence + Sync + ?Sized, S::Element: Sync, U: Send, F: Fn(&S::Element) -> U + Sync + Send {
    let len = input.len();
    trace!(len, threads = rayon::current_num_threads(), "parallel transform");

    (0..len).into_par_iter().map(|index| f(input.element(index))).collect()
}

/// Parallel [try_transform](crate::try_transform()).
///
/// Mapping stops shortly after the first failure is seen on any thread. If several
/// elements fail, the error for the lowest index is returned.
pub fn par_try_transform<S, U, E, F>(input: &S, f: F) -> Result<Vec<U>, TransformError<E>>
where S: Sequence + Sync + ?Sized, S::Element: Sync, U: Send, E: error::Error + Send, F: Fn(&S::Element) -> Result<U, E> + Sync + Send {
    let len = input.len();
    trace!(len, threads = rayon::current_num_threads(), "parallel try transform");

    let map = |index: usize| f(input.element(index)).map_err(|source| (index, source));
    let (index, source) = match (0..len).into_par_iter().map(map).collect::<Result<Vec<U>, (usize, E)>>() {
        Ok(output) => return Ok(output),
        Err(failure) => failure,
    };

    // The first failure observed is not necessarily the lowest failing index
    let (index, source) = (0..index).into_par_iter()
        .find_map_first(|index| map(index).err())
        .unwrap_or((index, source));
    debug!(index, "parallel mapping failed");
    Err(TransformError::Mapping { index, source })
}

/// Parallel [zip_transform_with](crate::zip_transform_with())
pub fn par_zip_transform<A, B, U, F>(a: &A, b: &B, policy: LengthPolicy, f: F) -> Result<Vec<U>, TransformError>
where A: Sequence + Sync + ?Sized, B: Sequence + Sync + ?Sized, A::Element: Sync, B::Element: Sync, U: Send, F: Fn(&A::Element, &B::Element) -> U + Sync + Send {
    let len = policy.resolve::<Infallible>(a.len(), b.len())?;
    trace!(len, ?policy, "parallel zip transform");

    Ok((0..len).into_par_iter().map(|index| f(a.element(index), b.element(index))).collect())
}

/// Parallel [transform_in_place](crate::transform_in_place())
pub fn par_transform_in_place<T, F>(sequence: &mut [T], f: F)
where T: Send + Sync, F: Fn(&T) -> T + Sync + Send {
    trace!(len = sequence.len(), "parallel transform in place");
    sequence.par_iter_mut().for_each(|element| *element = f(&*element));
}

/// Parallel [mutate_in_place](crate::mutate_in_place())
pub fn par_mutate_in_place<T, F>(sequence: &mut [T], f: F)
where T: Send, F: Fn(&mut T) + Sync + Send {
    trace!(len = sequence.len(), "parallel mutate in place");
    sequence.par_iter_mut().for_each(f);
}
