pub mod formats;

mod list;
pub use list::List;
mod output_format;
pub use output_format::{OutputBuilder, OutputFormat};
