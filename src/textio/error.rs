use thiserror::Error;

/// A coordinate line that could not be read.
///
/// `line` is 1-based.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: expected `(x, y)`, missing parenthesis in {text:?}")]
    MissingParens { line: usize, text: String },

    #[error("line {line}: expected 2 comma-separated values, found {found} in {text:?}")]
    WrongArity {
        line: usize,
        found: usize,
        text: String,
    },

    #[error("line {line}: {token:?} is not an integer")]
    InvalidInteger { line: usize, token: String },

    #[error("line {line}: {token:?} is outside the 64-bit signed range")]
    OutOfRange { line: usize, token: String },

    #[error("line {line}: read failed: {source}")]
    Io {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    /// 1-based line the error refers to.
    pub fn line(&self) -> usize {
        match self {
            Self::MissingParens { line, .. }
            | Self::WrongArity { line, .. }
            | Self::InvalidInteger { line, .. }
            | Self::OutOfRange { line, .. }
            | Self::Io { line, .. } => *line,
        }
    }
}
