//! nsv - Read, write, and convert NSV tabular data
//!
//! NSV (newline-separated values) is a line-oriented tabular text format:
//! one cell per line, a blank line ends a row, and embedded newlines and
//! backslashes are escaped. The [`codec`] module holds the pure
//! decode/encode pair; the rest of the crate is the table model and the
//! parsing/rendering glue around it.

pub mod codec;
pub mod config;
pub mod model;
pub mod output;
pub mod parser;

pub use codec::{decode, decode_with, encode, Trailing};
pub use config::Config;
pub use model::Table;
pub use parser::FormatError;
