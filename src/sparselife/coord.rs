//! Cell coordinates on the unbounded `i64` plane.

use std::fmt;

/// Offsets of the 8 Moore neighbors, row-major, centre excluded.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A cell position. Hashing is structural over `(x, y)` in order, so
/// `(a, b)` and `(b, a)` do not systematically collide.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`, or `None` if either axis leaves the `i64` range.
    #[inline(always)]
    pub fn checked_offset(self, dx: i64, dy: i64) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// The representable neighbors of this cell.
    ///
    /// Near `i64::MIN`/`i64::MAX` fewer than 8 are yielded: an offset that
    /// would overflow either axis is skipped, never wrapped.
    #[inline]
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |(dx, dy)| self.checked_offset(dx, dy))
    }
}

impl From<(i64, i64)> for Coord {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<Coord> for (i64, i64) {
    #[inline]
    fn from(c: Coord) -> Self {
        (c.x, c.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::{Coord, NEIGHBOR_OFFSETS};

    #[test]
    fn interior_cell_has_eight_distinct_neighbors() {
        let c = Coord::new(10, -4);
        let mut n: Vec<Coord> = c.neighbors().collect();
        n.sort();
        n.dedup();
        assert_eq!(n.len(), 8);
        assert!(!n.contains(&c));
        for nb in n {
            assert!((nb.x - c.x).abs() <= 1 && (nb.y - c.y).abs() <= 1);
        }
    }

    #[test]
    fn offsets_exclude_origin() {
        assert!(!NEIGHBOR_OFFSETS.contains(&(0, 0)));
    }

    #[test]
    fn corner_cells_drop_unrepresentable_neighbors() {
        assert_eq!(Coord::new(i64::MAX, i64::MAX).neighbors().count(), 3);
        assert_eq!(Coord::new(i64::MIN, i64::MIN).neighbors().count(), 3);
        assert_eq!(Coord::new(i64::MAX, 0).neighbors().count(), 5);
        assert_eq!(Coord::new(0, i64::MIN).neighbors().count(), 5);
        assert_eq!(Coord::new(i64::MIN, i64::MAX).neighbors().count(), 3);
    }

    #[test]
    fn checked_offset_reports_overflow() {
        assert_eq!(Coord::new(i64::MAX, 0).checked_offset(1, 0), None);
        assert_eq!(Coord::new(0, i64::MIN).checked_offset(0, -1), None);
        assert_eq!(
            Coord::new(i64::MAX, 0).checked_offset(-1, 1),
            Some(Coord::new(i64::MAX - 1, 1))
        );
    }

    #[test]
    fn display_matches_input_syntax() {
        assert_eq!(Coord::new(-3, 7).to_string(), "(-3, 7)");
    }
}
