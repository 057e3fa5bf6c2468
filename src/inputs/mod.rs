mod sequence;
pub use sequence::{Elements, Sequence};
