//! `<x> <y>` line writer for live sets.

use std::io::{self, Write};

use crate::sparselife::Coord;

/// Write one `<x> <y>` line per coordinate.
pub fn write_coordinates<W, I>(out: &mut W, cells: I) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = Coord>,
{
    for c in cells {
        writeln!(out, "{} {}", c.x, c.y)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_coordinates;
    use crate::sparselife::Coord;

    #[test]
    fn one_line_per_cell() {
        let mut out = Vec::new();
        write_coordinates(&mut out, [Coord::new(0, 1), Coord::new(-5, i64::MIN)]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("0 1\n-5 {}\n", i64::MIN)
        );
    }

    #[test]
    fn empty_set_writes_nothing() {
        let mut out = Vec::new();
        write_coordinates(&mut out, std::iter::empty()).unwrap();
        assert!(out.is_empty());
    }
}
