//! Line-oriented `(x, y)` coordinate reader.

use std::io::BufRead;
use std::num::IntErrorKind;

use super::error::ParseError;
use crate::sparselife::Coord;

fn parse_field(token: &str, line: usize) -> Result<i64, ParseError> {
    token.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseError::OutOfRange {
            line,
            token: token.to_owned(),
        },
        _ => ParseError::InvalidInteger {
            line,
            token: token.to_owned(),
        },
    })
}

/// Parse one `(x, y)` record. Whitespace anywhere in `text` is ignored.
///
/// `line` is only used to label errors.
pub fn parse_coordinate(text: &str, line: usize) -> Result<Coord, ParseError> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    let inner = compact
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| ParseError::MissingParens {
            line,
            text: text.to_owned(),
        })?;

    let fields: Vec<&str> = inner.split(',').collect();
    let [x, y] = fields.as_slice() else {
        return Err(ParseError::WrongArity {
            line,
            found: fields.len(),
            text: text.to_owned(),
        });
    };

    Ok(Coord::new(parse_field(x, line)?, parse_field(y, line)?))
}

/// Read coordinates until end of input or the first blank line.
///
/// Duplicates are kept in input order.
pub fn read_coordinates<R: BufRead>(reader: R) -> Result<Vec<Coord>, ParseError> {
    let mut coords = Vec::new();
    for (index, text) in reader.lines().enumerate() {
        let line = index + 1;
        let text = text.map_err(|source| ParseError::Io { line, source })?;
        if text.trim().is_empty() {
            break;
        }
        coords.push(parse_coordinate(&text, line)?);
    }
    Ok(coords)
}
