use std::collections::VecDeque;

use smallvec::{Array, SmallVec};

/// A growable destination for transformed values of type `U`
pub trait List<U> {
    /// Append a value to the end of the list
    fn push(&mut self, value: U);

    /// The length of the list, measured in the list's own units
    /// (elements for most lists, UTF-8 bytes for [String])
    fn len(&self) -> usize;

    /// Remove newly added values until the list has length `len` again
    fn truncate(&mut self, len: usize);

    /// Reserve room for at least `additional` more values
    fn reserve(&mut self, _additional: usize) { }

    /// Returns `true` if the list contains no values
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<U> List<U> for Vec<U> {
    fn push(&mut self, value: U) {
        self.push(value);
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn truncate(&mut self, len: usize) {
        self.truncate(len)
    }

    fn reserve(&mut self, additional: usize) {
        self.reserve(additional)
    }
}

impl<U> List<U> for VecDeque<U> {
    fn push(&mut self, value: U) {
        self.push_back(value);
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn truncate(&mut self, len: usize) {
        self.truncate(len)
    }

    fn reserve(&mut self, additional: usize) {
        self.reserve(additional)
    }
}

impl<A: Array> List<A::Item> for SmallVec<A> {
    fn push(&mut self, value: A::Item) {
        self.push(value);
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn truncate(&mut self, len: usize) {
        self.truncate(len)
    }

    fn reserve(&mut self, additional: usize) {
        self.reserve(additional)
    }
}

impl List<char> for String {
    fn push(&mut self, value: char) {
        self.push(value);
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn truncate(&mut self, len: usize) {
        self.truncate(len)
    }

    fn reserve(&mut self, additional: usize) {
        // At least one byte per char
        self.reserve(additional)
    }
}

impl<U, L: List<U>> List<U> for &mut L {
    fn push(&mut self, value: U) {
        (**self).push(value)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn truncate(&mut self, len: usize) {
        (**self).truncate(len)
    }

    fn reserve(&mut self, additional: usize) {
        (**self).reserve(additional)
    }
}
