//! Sparse hashed-set Conway's Game of Life engine (B3/S23) on the `i64` plane.

pub mod sparselife;
pub mod textio;
pub use sparselife::{Coord, LifeError, SparseLife, SparseLifeConfig};
pub use textio::{ParseError, read_coordinates, write_coordinates};
