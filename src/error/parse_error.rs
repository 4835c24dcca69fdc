#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors the parser can record.
///
/// Parse errors are collected, never raised: the parser notes the message,
/// resynchronizes at the next `;` or end of input, and keeps going. A driver
/// treats a non-empty error list as a hard failure and does not evaluate the
/// partial program.
pub enum ParseError {
    /// The token after the current one was not what the grammar requires.
    UnexpectedToken {
        /// The kind the parser expected.
        expected: String,
        /// The kind it found instead.
        found:    String,
    },
    /// No expression can start with the current token.
    NoPrefixParse {
        /// The kind of the offending token.
        token: String,
    },
    /// An integer literal does not fit into a 64-bit signed integer.
    InvalidInteger {
        /// The literal text.
        literal: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "expected next token to be {expected}, got {found}")
            },
            Self::NoPrefixParse { token } => {
                write!(f, "no prefix parse function for {token} found")
            },
            Self::InvalidInteger { literal } => {
                write!(f, "could not parse '{literal}' as integer")
            },
        }
    }
}

impl std::error::Error for ParseError {}
