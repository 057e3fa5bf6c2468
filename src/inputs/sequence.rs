use std::{collections::VecDeque, iter::FusedIterator};

use smallvec::{Array, SmallVec};

/// An ordered, finite, indexable collection of elements
///
/// Positions run from `0` to `len() - 1`. A `Sequence` has no notion of identity
/// beyond position, so two sequences with equal elements in equal order are
/// interchangeable as transform inputs.
pub trait Sequence {
    /// The type of the individual elements
    type Element;

    /// The number of elements
    fn len(&self) -> usize;

    /// Get the element at `index`.
    ///
    /// Implementers may panic if `index >= len()`; transforms never request such an index.
    fn element(&self, index: usize) -> &Self::Element;

    /// Returns `true` if the sequence contains no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate through all elements in order
    fn elements(&self) -> Elements<'_, Self> {
        Elements::new(self)
    }
}

impl<T> Sequence for [T] {
    type Element = T;

    #[inline(always)]
    fn len(&self) -> usize { <[T]>::len(self) }

    #[inline(always)]
    fn element(&self, index: usize) -> &Self::Element { &self[index] }
}

impl<T> Sequence for Vec<T> {
    type Element = T;

    #[inline(always)]
    fn len(&self) -> usize { Vec::len(self) }

    #[inline(always)]
    fn element(&self, index: usize) -> &Self::Element { &self[index] }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Element = T;

    #[inline(always)]
    fn len(&self) -> usize { N }

    #[inline(always)]
    fn element(&self, index: usize) -> &Self::Element { &self[index] }
}

impl<T> Sequence for VecDeque<T> {
    type Element = T;

    #[inline(always)]
    fn len(&self) -> usize { VecDeque::len(self) }

    #[inline(always)]
    fn element(&self, index: usize) -> &Self::Element { &self[index] }
}

impl<A: Array> Sequence for SmallVec<A> {
    type Element = A::Item;

    #[inline(always)]
    fn len(&self) -> usize { SmallVec::len(self) }

    #[inline(always)]
    fn element(&self, index: usize) -> &Self::Element { &self[index] }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Element = S::Element;

    #[inline(always)]
    fn len(&self) -> usize { (**self).len() }

    #[inline(always)]
    fn element(&self, index: usize) -> &Self::Element { (**self).element(index) }
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Element = S::Element;

    #[inline(always)]
    fn len(&self) -> usize { (**self).len() }

    #[inline(always)]
    fn element(&self, index: usize) -> &Self::Element { (**self).element(index) }
}

/// Iterator over the elements of a [Sequence], returned by [Sequence::elements]
pub struct Elements<'s, S: Sequence + ?Sized> {
    sequence: &'s S,
    index: usize,
    end: usize,
}

impl<'s, S: Sequence + ?Sized> Elements<'s, S> {
    fn new(sequence: &'s S) -> Self {
        Self {
            sequence,
            index: 0,
            end: sequence.len(),
        }
    }
}

// #[derive] would require `S: Clone`
impl<'s, S: Sequence + ?Sized> Clone for Elements<'s, S> {
    fn clone(&self) -> Self {
        Self {
            sequence: self.sequence,
            index: self.index,
            end: self.end,
        }
    }
}

impl<'s, S: Sequence + ?Sized> Iterator for Elements<'s, S> {
    type Item = &'s S::Element;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.end {
            let result = Some(self.sequence.element(self.index));
            self.index += 1;
            result
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.index;
        (remaining, Some(remaining))
    }
}

impl<'s, S: Sequence + ?Sized> DoubleEndedIterator for Elements<'s, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.index < self.end {
            self.end -= 1;
            Some(self.sequence.element(self.end))
        } else {
            None
        }
    }
}

impl<'s, S: Sequence + ?Sized> ExactSizeIterator for Elements<'s, S> { }

impl<'s, S: Sequence + ?Sized> FusedIterator for Elements<'s, S> { }
