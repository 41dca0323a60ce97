//! SparseLife engine internals and public API.

mod coord;
mod counts;
mod engine;

pub use coord::{Coord, NEIGHBOR_OFFSETS};
pub use counts::NeighborCounts;
pub use engine::{LifeError, SparseLife, SparseLifeConfig};
