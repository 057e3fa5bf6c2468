pub mod sequences;
mod tracked;
mod rejected;

pub use tracked::Tracked;
pub use rejected::Rejected;
