//! Text adapters around the engine: the `(x, y)` line reader and the
//! `<x> <y>` line writer.

mod error;
mod format;
mod parse;

pub use error::ParseError;
pub use format::write_coordinates;
pub use parse::{parse_coordinate, read_coordinates};
