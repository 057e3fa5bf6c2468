use std::cell::Cell;

/// A value which counts how often it is cloned
#[derive(Debug)]
pub struct Tracked<'c> {
    pub value: u64,
    clones: &'c Cell<usize>,
}

impl<'c> Tracked<'c> {
    pub fn new(value: u64, clones: &'c Cell<usize>) -> Self {
        Self { value, clones }
    }
}

impl<'c> Clone for Tracked<'c> {
    fn clone(&self) -> Self {
        self.clones.set(self.clones.get() + 1);
        Self { value: self.value, clones: self.clones }
    }
}
