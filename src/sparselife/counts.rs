//! Neighbor-count aggregation over the live set.
//!
//! Every live cell adds one to each of its representable neighbors. The
//! resulting map is rebuilt from scratch on each generation and holds exactly
//! the coordinates adjacent to at least one live cell.
//!
//! The sharded variant folds disjoint slices of the live set into per-worker
//! maps and merges them before returning, so callers see a single finished
//! map either way. The live set is only read here.

use hashbrown::{HashMap, HashSet};
use rayon::prelude::*;

use super::coord::Coord;

/// Live-neighbor count (1..=8) for every coordinate touched by a live cell.
pub type NeighborCounts = HashMap<Coord, u8>;

#[inline(always)]
fn accumulate(counts: &mut NeighborCounts, cell: Coord) {
    for neighbor in cell.neighbors() {
        *counts.entry(neighbor).or_insert(0) += 1;
    }
}

fn merge(mut into: NeighborCounts, mut from: NeighborCounts) -> NeighborCounts {
    if into.len() < from.len() {
        std::mem::swap(&mut into, &mut from);
    }
    into.reserve(from.len());
    for (coord, count) in from {
        *into.entry(coord).or_insert(0) += count;
    }
    into
}

/// Single-threaded aggregation.
pub fn count_neighbors(live: &HashSet<Coord>) -> NeighborCounts {
    // Each cell touches up to 8 keys; most are shared in dense regions.
    let mut counts = NeighborCounts::with_capacity(live.len().saturating_mul(4));
    for &cell in live {
        accumulate(&mut counts, cell);
    }
    counts
}

/// Sharded aggregation on the current rayon pool.
pub fn count_neighbors_sharded(live: &HashSet<Coord>) -> NeighborCounts {
    live.par_iter()
        .fold(NeighborCounts::new, |mut counts, &cell| {
            accumulate(&mut counts, cell);
            counts
        })
        .reduce(NeighborCounts::new, merge)
}

#[cfg(test)]
mod tests {
    use hashbrown::HashSet;
    use rand::{Rng, SeedableRng};

    use super::{count_neighbors, count_neighbors_sharded};
    use crate::sparselife::coord::Coord;

    fn set(cells: &[(i64, i64)]) -> HashSet<Coord> {
        cells.iter().map(|&c| Coord::from(c)).collect()
    }

    #[test]
    fn empty_set_has_no_counts() {
        assert!(count_neighbors(&HashSet::new()).is_empty());
        assert!(count_neighbors_sharded(&HashSet::new()).is_empty());
    }

    #[test]
    fn single_cell_touches_its_ring_only() {
        let counts = count_neighbors(&set(&[(0, 0)]));
        assert_eq!(counts.len(), 8);
        assert!(counts.values().all(|&n| n == 1));
        assert!(!counts.contains_key(&Coord::new(0, 0)));
    }

    #[test]
    fn blinker_centre_counts() {
        let counts = count_neighbors(&set(&[(1, 0), (1, 1), (1, 2)]));
        assert_eq!(counts[&Coord::new(1, 1)], 2);
        assert_eq!(counts[&Coord::new(0, 1)], 3);
        assert_eq!(counts[&Coord::new(2, 1)], 3);
        assert_eq!(counts[&Coord::new(1, 0)], 1);
        assert_eq!(counts.get(&Coord::new(1, 4)), None);
    }

    #[test]
    fn no_key_is_produced_past_the_edge() {
        let edge = set(&[
            (i64::MAX, 0),
            (i64::MAX, 1),
            (i64::MAX, 2),
            (i64::MIN, i64::MIN),
            (i64::MIN + 1, i64::MIN),
        ]);
        let counts = count_neighbors(&edge);
        assert!(!counts.is_empty());
        for coord in counts.keys() {
            let near_max_x = coord.x >= i64::MAX - 1;
            let near_min = coord.x <= i64::MIN + 2 && coord.y <= i64::MIN + 1;
            assert!(near_max_x || near_min, "unexpected key {coord}");
        }
        // Wrapped neighbors of (MAX, y) would appear at x == MIN with small y.
        assert!(counts.keys().all(|c| !(c.x == i64::MIN && c.y >= 0)));
        assert_eq!(counts[&Coord::new(i64::MAX - 1, 1)], 3);
        assert_eq!(counts[&Coord::new(i64::MAX, 1)], 2);
    }

    #[test]
    fn sharded_matches_sequential() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0x5A4D_ED00);
        let mut live = HashSet::new();
        for y in -64..64i64 {
            for x in -64..64i64 {
                if rng.random::<f64>() < 0.3 {
                    live.insert(Coord::new(x, y));
                }
            }
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(4)
            .build()
            .expect("build thread pool");
        let sharded = pool.install(|| count_neighbors_sharded(&live));
        assert_eq!(sharded, count_neighbors(&live));
    }
}
