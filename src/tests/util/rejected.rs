use std::{error, fmt};

/// A mapping error carrying the rejected value
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Rejected(pub i32);

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rejected {}", self.0)
    }
}

impl error::Error for Rejected { }
